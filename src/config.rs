use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::util::non_empty;

/// Public SEVIMA Platform API host.
pub const DEFAULT_BASE_URL: &str = "https://api.sevimaplatform.com";

pub const API_KEY_VAR: &str = "SEVIMA_API_KEY";
pub const SECRET_KEY_VAR: &str = "SEVIMA_SECRET_KEY";
pub const BASE_URL_VAR: &str = "SEVIMA_BASE_URL";
pub const VERIFY_VAR: &str = "SEVIMA_VERIFY";
pub const ENV_FILE_VAR: &str = "SEVIMA_ENV_FILE";

/// Fully resolved client settings.
///
/// Resolved once when the client is built; nothing in the request path reads
/// the environment afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Sent as `X-App-Key`.
    pub api_key: String,
    /// Sent as `X-Secret-Key`.
    pub secret_key: String,
    /// Base API URL, typically `https://api.sevimaplatform.com`.
    pub base_url: String,
    /// Whether to verify TLS certificates.
    pub verify: bool,
}

#[derive(Debug, Default)]
struct EnvFile {
    api_key: Option<String>,
    secret_key: Option<String>,
    base_url: Option<String>,
    verify: Option<bool>,
}

impl ClientConfig {
    /// Builds a config from explicit values only; nothing is read from the
    /// environment or from disk.
    pub fn new(
        api_key: impl Into<String>,
        secret_key: impl Into<String>,
        base_url: Option<String>,
    ) -> Result<Self> {
        let cfg = ClientConfig {
            api_key: api_key.into().trim().to_string(),
            secret_key: secret_key.into().trim().to_string(),
            base_url: normalize_base_url(base_url),
            verify: true,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Fails with [`Error::Configuration`] when either credential is blank.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(Error::Configuration("API key must not be empty".into()));
        }
        if self.secret_key.trim().is_empty() {
            return Err(Error::Configuration("secret key must not be empty".into()));
        }
        Ok(())
    }

    /// Resolves settings in order of precedence:
    /// - explicit arguments
    /// - environment variables `SEVIMA_API_KEY` / `SEVIMA_SECRET_KEY` / `SEVIMA_BASE_URL`
    /// - a dotenv file from `SEVIMA_ENV_FILE`, `./.env` or `~/.sevima.env`
    pub fn load(
        api_key: Option<String>,
        secret_key: Option<String>,
        base_url: Option<String>,
    ) -> Result<Self> {
        Self::load_with(api_key, secret_key, base_url, |name| std::env::var(name).ok())
    }

    /// Same as [`ClientConfig::load`], reading variables through `env` instead of
    /// the process environment.
    pub fn load_with<F>(
        api_key: Option<String>,
        secret_key: Option<String>,
        base_url: Option<String>,
        env: F,
    ) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut api_key = non_empty(api_key).or_else(|| non_empty(env(API_KEY_VAR)));
        let mut secret_key = non_empty(secret_key).or_else(|| non_empty(env(SECRET_KEY_VAR)));
        let mut base_url = non_empty(base_url).or_else(|| non_empty(env(BASE_URL_VAR)));
        let mut verify = non_empty(env(VERIFY_VAR)).map(|v| parse_flag(&v));

        let candidates = env_file_candidates(&env);

        if api_key.is_none() || secret_key.is_none() || base_url.is_none() || verify.is_none() {
            for path in &candidates {
                if path.is_file() {
                    let file = read_env_file(path).map_err(|e| {
                        Error::Configuration(format!(
                            "failed to read configuration file {}: {}",
                            path.display(),
                            e
                        ))
                    })?;
                    debug!(path = %path.display(), "loaded configuration file");

                    api_key = api_key.or(file.api_key);
                    secret_key = secret_key.or(file.secret_key);
                    base_url = base_url.or(file.base_url);
                    verify = verify.or(file.verify);
                    break;
                }
            }
        }

        let api_key = api_key.ok_or_else(|| missing("API key", API_KEY_VAR, &candidates))?;
        let secret_key =
            secret_key.ok_or_else(|| missing("secret key", SECRET_KEY_VAR, &candidates))?;
        let base_url = normalize_base_url(base_url);

        Ok(ClientConfig {
            api_key,
            secret_key,
            base_url,
            verify: verify.unwrap_or(true),
        })
    }
}

fn normalize_base_url(base_url: Option<String>) -> String {
    non_empty(base_url)
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
        .trim_end_matches('/')
        .to_string()
}

fn missing(what: &str, var: &str, candidates: &[PathBuf]) -> Error {
    if candidates.is_empty() {
        return Error::Configuration(format!(
            "{what} is required (pass it explicitly or set {var})"
        ));
    }
    Error::Configuration(format!(
        "{what} is required (pass it explicitly, set {var}, or put `{var}=` in one of: {})",
        candidates
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    ))
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

fn read_env_file(path: &Path) -> std::result::Result<EnvFile, dotenvy::Error> {
    collect_env_file(dotenvy::from_path_iter(path)?)
}

// Reads the pairs without touching the process environment.
fn collect_env_file<R: Read>(
    iter: dotenvy::Iter<R>,
) -> std::result::Result<EnvFile, dotenvy::Error> {
    let mut file = EnvFile::default();

    for item in iter {
        let (key, value) = item?;
        let Some(value) = non_empty(Some(value)) else {
            continue;
        };
        match key.as_str() {
            API_KEY_VAR => file.api_key = Some(value),
            SECRET_KEY_VAR => file.secret_key = Some(value),
            BASE_URL_VAR => file.base_url = Some(value),
            VERIFY_VAR => file.verify = Some(parse_flag(&value)),
            _ => {}
        }
    }

    Ok(file)
}

fn env_file_candidates<F>(env: &F) -> Vec<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    // 1) SEVIMA_ENV_FILE (explicit)
    // 2) ./.env
    // 3) ~/.sevima.env
    if let Some(p) = non_empty(env(ENV_FILE_VAR)) {
        return vec![PathBuf::from(p)];
    }

    let mut v = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        v.push(cwd.join(".env"));
    }
    if let Some(home) = dirs::home_dir() {
        v.push(home.join(".sevima.env"));
    }
    v
}
