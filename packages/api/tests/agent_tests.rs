//! Agent builder tests

use hopwire::{Agent, AgentOptions, ExplicitProxyConfig, ProxyDescriptor, ProxyEnv, ProxyProtocol};

fn corporate_env() -> ProxyEnv {
    ProxyEnv::builder()
        .https_proxy("http://proxy:3128")
        .no_proxy("localhost,.corp.example")
        .build()
}

#[test]
fn agent_uses_environment_snapshot() {
    let agent = Agent::new().proxy_env(corporate_env());

    let proxied = agent
        .transport_for("https://api.example.com")
        .expect("handle");
    assert_eq!(proxied.proxy_url(), Some("http://proxy:3128"));

    let bypassed = agent
        .transport_for("https://wiki.corp.example")
        .expect("handle");
    assert!(!bypassed.is_proxied());
}

#[test]
fn explicit_proxy_overrides_environment() {
    let agent = Agent::new()
        .proxy_env(corporate_env())
        .proxy("http://explicit:8080");

    let handle = agent
        .transport_for("https://api.example.com")
        .expect("handle");
    assert_eq!(handle.proxy_url(), Some("http://explicit:8080"));

    let agent = agent.no_explicit_proxy();
    let handle = agent
        .transport_for("https://api.example.com")
        .expect("handle");
    assert_eq!(handle.proxy_url(), Some("http://proxy:3128"));
}

#[test]
fn proxy_host_shorthand_builds_descriptor() {
    let agent = Agent::new()
        .proxy_env(ProxyEnv::empty())
        .proxy_host("proxy.local", 8080, Some(ProxyProtocol::Http), Some(("u", "p")));

    assert_eq!(
        agent.explicit_proxy(),
        Some(&ExplicitProxyConfig::Descriptor(
            ProxyDescriptor::new("proxy.local", 8080)
                .protocol(ProxyProtocol::Http)
                .auth(hopwire::ProxyAuth::new("u", "p"))
        ))
    );

    let handle = agent.transport_for("https://example.com").expect("handle");
    assert_eq!(handle.proxy_url(), Some("http://u:p@proxy.local:8080"));
}

#[test]
fn server_name_dropped_when_proxied() {
    let agent = Agent::new()
        .server_name("origin.internal")
        .skip_certificate_validation(true)
        .proxy_env(corporate_env());

    let proxied = agent
        .transport_for("https://api.example.com")
        .expect("handle");
    assert!(proxied.is_proxied());
    assert_eq!(proxied.server_name(), None);
    assert!(!proxied.verify_certificate());

    let direct = agent.transport_for("https://localhost").expect("handle");
    assert_eq!(direct.server_name(), Some("origin.internal"));
}

#[test]
fn options_loaded_from_json() {
    let options: AgentOptions =
        serde_json::from_str(r#"{"serverName": "origin.internal"}"#).expect("valid options");
    let agent = Agent::with_options(options).proxy_env(ProxyEnv::empty());

    let handle = agent.transport_for("https://10.1.2.3").expect("handle");
    assert_eq!(handle.server_name(), Some("origin.internal"));
    assert!(handle.verify_certificate());
}

#[test]
fn decide_reports_without_building() {
    let agent = Agent::new().proxy_env(corporate_env());

    let decision = agent.decide("http://localhost:8080").expect("decision");
    assert_eq!(decision.proxy_url.as_deref(), Some("http://proxy:3128"));
    assert!(!decision.use_proxy);
}

#[test]
fn parsed_urls_are_accepted() {
    let url = url::Url::parse("https://api.example.com/v1").expect("valid url");
    let handle = Agent::new()
        .proxy_env(ProxyEnv::empty())
        .transport_for_url(&url)
        .expect("handle");
    assert!(handle.is_tls());
}

#[test]
fn malformed_targets_surface_as_errors() {
    let err = Agent::new()
        .proxy_env(ProxyEnv::empty())
        .transport_for("not a url")
        .expect_err("malformed");
    assert!(err.is_malformed_url());
}
