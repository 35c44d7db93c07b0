use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(config, ServerConfig { port: DEFAULT_PORT, site_root: None });
}

#[test]
fn reads_port_and_site_root() {
    let config = ServerConfig::from_lookup(lookup_from(&[("PORT", " 8080 "), ("SITE_ROOT", "target/site")])).unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.site_root.as_deref(), Some("target/site"));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let config = ServerConfig::from_lookup(lookup_from(&[("PORT", ""), ("SITE_ROOT", "  ")])).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.site_root, None);
}

#[test]
fn invalid_port_is_a_config_error() {
    for raw in ["abc", "70000", "-1"] {
        let err = ServerConfig::from_lookup(lookup_from(&[("PORT", raw)])).unwrap_err();
        assert!(matches!(err, ServerError::Config { var: "PORT", .. }), "expected config error for {raw:?}");
    }
}
