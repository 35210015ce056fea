use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use prospecta_server::config::AppConfig;

fn config_from(vars: &[(&str, &str)]) -> eyre::Result<AppConfig> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    AppConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_apply_when_nothing_is_set() {
    let config = config_from(&[]).unwrap();

    assert_eq!(config.port, 5000);
    assert_eq!(config.static_dir, PathBuf::from("static"));
    assert_eq!(config.openai_api_key, None);
    assert_eq!(config.openai_base_url, "https://api.openai.com/v1");
    assert_eq!(config.openai_model, "gpt-4-0125-preview");
    assert_eq!(config.openai_timeout, Duration::from_secs(120));
    assert_eq!(config.max_upload_bytes, 50 * 1024 * 1024);
    assert_eq!(config.tesseract_bin, PathBuf::from("tesseract"));
    assert_eq!(config.bind_addr().to_string(), "0.0.0.0:5000");
}

#[test]
fn overrides_are_read() {
    let config = config_from(&[
        ("PORT", "8080"),
        ("STATIC_DIR", "/srv/static"),
        ("OPENAI_API_KEY", "sk-test"),
        ("OPENAI_MODEL", "gpt-4o"),
        ("OPENAI_TIMEOUT_SECS", "30"),
    ])
    .unwrap();

    assert_eq!(config.bind_addr().to_string(), "0.0.0.0:8080");
    assert_eq!(config.openai_api_key.as_deref(), Some("sk-test"));
    assert_eq!(config.openai_model, "gpt-4o");
    assert_eq!(config.openai_timeout, Duration::from_secs(30));
    assert_eq!(config.reports_dir(), PathBuf::from("/srv/static/reports"));
    assert_eq!(config.logo_path(), PathBuf::from("/srv/static/logo.png"));
}

#[test]
fn empty_values_count_as_unset() {
    let config = config_from(&[("PORT", ""), ("OPENAI_API_KEY", "  ")]).unwrap();
    assert_eq!(config.port, 5000);
    assert_eq!(config.openai_api_key, None);
}

#[test]
fn malformed_numbers_are_errors() {
    let err = config_from(&[("PORT", "fifty")]).unwrap_err();
    assert!(err.to_string().contains("PORT"));

    assert!(config_from(&[("MAX_UPLOAD_BYTES", "-1")]).is_err());
}
