use std::collections::HashMap;

use sevima::{
    API_KEY_VAR, BASE_URL_VAR, ClientConfig, DEFAULT_BASE_URL, ENV_FILE_VAR, Error,
    SECRET_KEY_VAR,
};

struct FakeEnv(HashMap<&'static str, String>);

impl FakeEnv {
    fn new(vars: &[(&'static str, &str)]) -> Self {
        let mut map: HashMap<&'static str, String> =
            vars.iter().map(|(k, v)| (*k, v.to_string())).collect();
        // Keep real .env files out of the picture unless a test asks for one.
        map.entry(ENV_FILE_VAR)
            .or_insert_with(|| "/nonexistent/sevima.env".to_string());
        FakeEnv(map)
    }

    fn get(&self, name: &str) -> Option<String> {
        self.0.get(name).cloned()
    }
}

#[test]
fn explicit_arguments_take_precedence() {
    let env = FakeEnv::new(&[
        (API_KEY_VAR, "env-key"),
        (SECRET_KEY_VAR, "env-secret"),
        (BASE_URL_VAR, "https://env.example"),
    ]);

    let cfg = ClientConfig::load_with(
        Some("arg-key".into()),
        Some("arg-secret".into()),
        Some("https://arg.example".into()),
        |name| env.get(name),
    )
    .unwrap();

    assert_eq!(cfg.api_key, "arg-key");
    assert_eq!(cfg.secret_key, "arg-secret");
    assert_eq!(cfg.base_url, "https://arg.example");
}

#[test]
fn environment_is_used_when_arguments_are_absent() {
    let env = FakeEnv::new(&[(API_KEY_VAR, "env-key"), (SECRET_KEY_VAR, "env-secret")]);

    let cfg = ClientConfig::load_with(None, None, None, |name| env.get(name)).unwrap();

    assert_eq!(cfg.api_key, "env-key");
    assert_eq!(cfg.secret_key, "env-secret");
    assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
}

#[test]
fn no_credentials_anywhere_is_a_configuration_error() {
    let env = FakeEnv::new(&[]);
    let err = ClientConfig::load_with(None, None, None, |name| env.get(name)).unwrap_err();
    assert!(matches!(err, Error::Configuration(_)), "got {err:?}");
}

#[test]
fn empty_values_count_as_missing() {
    let env = FakeEnv::new(&[(API_KEY_VAR, ""), (SECRET_KEY_VAR, "s")]);
    let err = ClientConfig::load_with(Some(String::new()), None, None, |name| env.get(name))
        .unwrap_err();
    assert!(err.to_string().contains("API key"));
}

#[test]
fn dotenv_file_fills_the_gaps() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join(".env");
    std::fs::write(
        &file,
        "SEVIMA_API_KEY=file-key\nSEVIMA_SECRET_KEY=file-secret\nSEVIMA_BASE_URL=https://file.example/\n",
    )
    .unwrap();
    let file = file.display().to_string();

    let env = FakeEnv::new(&[(ENV_FILE_VAR, file.as_str()), (SECRET_KEY_VAR, "env-secret")]);
    let cfg = ClientConfig::load_with(None, None, None, |name| env.get(name)).unwrap();

    assert_eq!(cfg.api_key, "file-key");
    assert_eq!(cfg.secret_key, "env-secret");
    assert_eq!(cfg.base_url, "https://file.example");
    assert!(cfg.verify);
}

#[test]
fn quoted_dotenv_values_may_carry_trailing_comments() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join(".env");
    std::fs::write(
        &file,
        "SEVIMA_API_KEY=\"abc\" # prod\nSEVIMA_SECRET_KEY='s3cr#t' # rotated monthly\n",
    )
    .unwrap();
    let file = file.display().to_string();

    let env = FakeEnv::new(&[(ENV_FILE_VAR, file.as_str())]);
    let cfg = ClientConfig::load_with(None, None, None, |name| env.get(name)).unwrap();

    assert_eq!(cfg.api_key, "abc");
    assert_eq!(cfg.secret_key, "s3cr#t");
}

#[test]
fn configuration_errors_read_neutrally() {
    let env = FakeEnv::new(&[]);
    let err = ClientConfig::load_with(None, None, None, |name| env.get(name)).unwrap_err();
    assert!(err.to_string().starts_with("configuration error: "), "{err}");
}
