use super::*;

#[test]
fn builds_with_defaults() {
    let config = LookupConfig::builder().build().unwrap();
    assert_eq!(config, LookupConfig::default());
    assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
    assert_eq!(config.user_agent(), DEFAULT_USER_AGENT);
}

#[test]
fn overrides_defaults() {
    let config = LookupConfig::builder()
        .base_url("http://127.0.0.1:9/macs")
        .timeout(Duration::from_millis(250))
        .user_agent("test-agent")
        .build()
        .unwrap();

    assert_eq!(config.timeout(), Duration::from_millis(250));
    assert_eq!(config.user_agent(), "test-agent");
    assert_eq!(
        config.url_for("aa:bb:cc:00:00:00"),
        "http://127.0.0.1:9/macs/aa:bb:cc:00:00:00"
    );
}

#[test]
fn substitutes_address_verbatim() {
    let config = LookupConfig::default();
    assert_eq!(
        config.url_for("48-E7-DA"),
        "https://api.maclookup.app/v2/macs/48-E7-DA"
    );
}

#[test]
fn ignores_trailing_slash_on_base_url() {
    let config = LookupConfig::builder()
        .base_url("https://example.test/macs/")
        .build()
        .unwrap();
    assert_eq!(config.url_for("9c:a5:13"), "https://example.test/macs/9c:a5:13");
}

#[test]
fn builder_error_converts_to_library_error() {
    let err: crate::error::OuiLookupError =
        LookupConfigBuilderError::ValidationError("bad base url".to_string()).into();
    assert_eq!(err.to_string(), "failed to build lookup config: bad base url");
}

#[test]
fn partial_builder_keeps_remaining_defaults() {
    let config = LookupConfig::builder()
        .timeout(Duration::from_millis(300))
        .build()
        .unwrap();

    assert_eq!(config.timeout(), Duration::from_millis(300));
    assert_eq!(config.user_agent(), LookupConfig::default().user_agent());
    assert_eq!(
        config.url_for("aa:bb:cc:00:00:00"),
        LookupConfig::default().url_for("aa:bb:cc:00:00:00")
    );
}
