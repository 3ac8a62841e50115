//! NoProxy parsing and hostname matching
//!
//! Entries are comma-separated, trimmed and lower-cased. Matching is purely textual:
//! no wildcard entry, no IP ranges.

/// A parsed exclusion list for hosts that must bypass the proxy
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoProxy {
    entries: Vec<String>,
}

impl NoProxy {
    /// Parse a `NO_PROXY` style value.
    ///
    /// Empty entries are dropped; they would match nothing anyway.
    #[must_use]
    pub fn from_string(no_proxy_list: &str) -> Self {
        let entries = no_proxy_list
            .split(',')
            .map(|entry| entry.trim().to_lowercase())
            .filter(|entry| !entry.is_empty())
            .collect();

        NoProxy { entries }
    }

    /// Check if a host should bypass the proxy.
    ///
    /// * `.example.com` matches `api.example.com` but not `example.com`
    /// * `example.com` matches `example.com` and `sub.example.com`
    #[must_use]
    pub fn matches(&self, host: &str) -> bool {
        let host = host.to_lowercase();
        self.entries.iter().any(|entry| entry_matches(entry, &host))
    }

    /// The normalised entries, in the order they were written
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn entry_matches(entry: &str, host: &str) -> bool {
    if entry.starts_with('.') {
        return host.ends_with(entry);
    }

    host == entry
        || host
            .strip_suffix(entry)
            .is_some_and(|rest| rest.ends_with('.'))
}
