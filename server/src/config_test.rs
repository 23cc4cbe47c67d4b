use super::*;

// =============================================================================
// try_load — uses unique env var names to avoid races with parallel tests.
// =============================================================================

#[test]
fn try_load_unset_uses_default() {
    let port: u16 = try_load("__TEST_CFG_UNSET_PORT__", "3000");
    assert_eq!(port, 3000);
}

#[test]
fn try_load_set_value_wins() {
    let key = "__TEST_CFG_SET_PORT_17__";
    unsafe { std::env::set_var(key, "8080") };
    let port: u16 = try_load(key, "3000");
    assert_eq!(port, 8080);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn try_load_parses_ttl_hours() {
    let key = "__TEST_CFG_TTL_42__";
    unsafe { std::env::set_var(key, "48") };
    let ttl: i64 = try_load(key, "24");
    assert_eq!(ttl, 48);
    unsafe { std::env::remove_var(key) };
}

#[test]
#[should_panic(expected = "environment misconfigured")]
fn try_load_unparseable_panics() {
    let key = "__TEST_CFG_BAD_PORT_99__";
    unsafe { std::env::set_var(key, "not-a-port") };
    let _: u16 = try_load(key, "3000");
}

// =============================================================================
// defaults
// =============================================================================

#[test]
fn default_config_session_ttl_is_24_hours() {
    let config = Config::default();
    assert_eq!(config.session_ttl_hours, DEFAULT_SESSION_TTL_HOURS);
    assert_eq!(config.session_ttl_hours, 24);
}

#[test]
fn default_config_port_is_3000() {
    assert_eq!(Config::default().port, 3000);
}
