#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use hotspot_server::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
server:
  listen: "0.0.0.0:8081"
recommendations:
  default_genre: "Drama"
  default_limitt: 5 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen, "0.0.0.0:8081");
    assert_eq!(cfg.recommendations.default_genre, "Action");
    assert_eq!(cfg.recommendations.default_limit, 10);
    assert!(cfg.catalog.path.is_none());
}

#[test]
fn rejects_unsupported_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn rejects_bad_listen_and_empty_genre() {
    let bad_listen = "version: 1\nserver:\n  listen: \"not-an-addr\"\n";
    assert!(config::load_from_str(bad_listen).is_err());

    let empty_genre = "version: 1\nrecommendations:\n  default_genre: \"  \"\n";
    assert!(config::load_from_str(empty_genre).is_err());

    let negative_limit = "version: 1\nrecommendations:\n  default_limit: -3\n";
    assert!(config::load_from_str(negative_limit).is_err());
}

#[test]
fn missing_file_means_defaults() {
    let cfg = config::load_or_default("definitely/not/here/hotspot.yaml").expect("defaults");
    assert_eq!(cfg.server.listen, "0.0.0.0:8081");
}

#[test]
fn listen_overrides() {
    let mut cfg = config::load_from_str("version: 1\n").unwrap();

    cfg.apply_listen_overrides(None, Some("9090")).unwrap();
    assert_eq!(cfg.server.listen, "0.0.0.0:9090");

    cfg.apply_listen_overrides(Some("127.0.0.1"), None).unwrap();
    assert_eq!(cfg.server.listen, "127.0.0.1:9090");

    cfg.apply_listen_overrides(Some("::1"), Some("7000")).unwrap();
    assert_eq!(cfg.server.listen, "[::1]:7000");

    let err = cfg.apply_listen_overrides(None, Some("http")).expect_err("bad port");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}
