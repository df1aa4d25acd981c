use sowdoc::presentation::Environment;

use crate::support::settings_from;

#[test]
fn given_no_variables_when_loading_settings_then_uses_defaults() {
    let settings = settings_from(&[]);

    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.server.port, 3001);
    assert_eq!(settings.storage.upload_dir, "uploads");
    assert_eq!(settings.storage.output_dir, "outputs");
    assert_eq!(settings.storage.max_file_size, 10 * 1024 * 1024);
    assert_eq!(settings.storage.max_file_size_mb(), 10);
    assert_eq!(settings.llm.model, "gemini-2.5-flash");
    assert!(settings.llm.api_key.is_empty());
    assert_eq!(settings.llm.timeout_secs, 300);
    assert!(!settings.logging.enable_json);
}

#[test]
fn given_flat_deployment_variables_when_loading_settings_then_they_override_defaults() {
    let settings = settings_from(&[
        ("PORT", "8080"),
        ("UPLOAD_DIR", "/data/uploads"),
        ("MAX_FILE_SIZE", "5242880"),
        ("GEMINI_API_KEY", "primary"),
        ("GOOGLE_API_KEY", "secondary"),
    ]);

    assert_eq!(settings.server.port, 8080);
    assert_eq!(settings.storage.upload_dir, "/data/uploads");
    assert_eq!(settings.storage.max_file_size_mb(), 5);
    assert_eq!(settings.llm.api_key, "primary");
}

#[test]
fn given_only_google_api_key_when_loading_settings_then_uses_it() {
    let settings = settings_from(&[("GEMINI_API_KEY", ""), ("GOOGLE_API_KEY", "fallback")]);

    assert_eq!(settings.llm.api_key, "fallback");
}

#[test]
fn given_sectioned_variables_when_loading_settings_then_they_apply() {
    let settings = settings_from(&[
        ("APP__SERVER__PORT", "4000"),
        ("APP__LOGGING__ENABLE_JSON", "true"),
        ("APP__LLM__MODEL", "gemini-2.5-pro"),
    ]);

    assert_eq!(settings.server.port, 4000);
    assert!(settings.logging.enable_json);
    assert_eq!(settings.llm.model, "gemini-2.5-pro");
}

#[test]
fn given_flat_and_sectioned_port_when_loading_settings_then_flat_wins() {
    let settings = settings_from(&[("APP__SERVER__PORT", "4000"), ("PORT", "5000")]);

    assert_eq!(settings.server.port, 5000);
}

#[test]
fn given_environment_names_when_parsing_then_accepts_known_values() {
    assert_eq!(" Test ".parse::<Environment>(), Ok(Environment::Test));
    assert_eq!("production".parse::<Environment>(), Ok(Environment::Prod));
    assert_eq!("dev".parse::<Environment>(), Ok(Environment::Local));
    assert!("staging".parse::<Environment>().is_err());
    assert_eq!(Environment::Prod.settings_file(), "appsettings.Prod");
}
