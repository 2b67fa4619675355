use reqwest::blocking::{Client as HttpClient, RequestBuilder};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use crate::auth::{LOGIN_PATH, bearer_token_from};
use crate::config::ClientConfig;
use crate::endpoints::{self, Method};
use crate::error::{Error, Result};
use crate::query::Query;
use crate::util::urljoin;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

const APP_KEY_HEADER: &str = "x-app-key";
const SECRET_KEY_HEADER: &str = "x-secret-key";

/// Authenticated SEVIMA Platform client.
///
/// Every request, including the generated endpoint helpers, goes through
/// [`Client::request`], so all calls share the same headers and error
/// translation.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    bearer_token: Option<String>,
    timeout: Duration,

    http: HttpClient,
}

impl Client {
    /// Creates a client from environment variables and/or a dotenv file.
    ///
    /// This is equivalent to `Client::new(None, None, None)`.
    pub fn from_env() -> Result<Self> {
        Self::new(None, None, None)
    }

    /// Creates a client using (in order of precedence):
    /// - explicit `api_key`/`secret_key`/`base_url` arguments
    /// - environment variables `SEVIMA_API_KEY` / `SEVIMA_SECRET_KEY` / `SEVIMA_BASE_URL`
    /// - a dotenv file from `SEVIMA_ENV_FILE`, `./.env` or `~/.sevima.env`
    pub fn new(
        api_key: Option<String>,
        secret_key: Option<String>,
        base_url: Option<String>,
    ) -> Result<Self> {
        Self::with_config(ClientConfig::load(api_key, secret_key, base_url)?)
    }

    /// Creates a client from an already resolved configuration.
    ///
    /// Blank credentials are rejected with [`Error::Configuration`].
    pub fn with_config(cfg: ClientConfig) -> Result<Self> {
        cfg.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&format!("sevima-rs/{}", env!("CARGO_PKG_VERSION")))
                .unwrap_or(HeaderValue::from_static("sevima-rs")),
        );
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        default_headers.insert(APP_KEY_HEADER, sensitive(APP_KEY_HEADER, &cfg.api_key)?);
        default_headers.insert(
            SECRET_KEY_HEADER,
            sensitive(SECRET_KEY_HEADER, &cfg.secret_key)?,
        );

        let mut builder = HttpClient::builder().default_headers(default_headers);

        if !cfg.verify {
            warn!("TLS certificate verification is disabled");
            builder = builder.danger_accept_invalid_certs(true);
        }

        let http = builder.build().map_err(Error::HttpClient)?;

        Ok(Self {
            base_url: cfg.base_url,
            bearer_token: None,
            timeout: DEFAULT_TIMEOUT,
            http,
        })
    }

    /// Per-request timeout, passed straight to the HTTP stack.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Token stored by the last successful [`Client::login`].
    pub fn bearer_token(&self) -> Option<&str> {
        self.bearer_token.as_deref()
    }

    /// Logs in with user credentials (SSO).
    ///
    /// On success the returned bearer token is attached to every later
    /// request as `Authorization: Bearer <token>`. The response is returned
    /// as received.
    #[instrument(skip(self, password))]
    pub fn login(&mut self, email: &str, password: &str) -> Result<Value> {
        let body = json!({ "email": email, "password": password });

        let reply = match self.request(Method::Post, LOGIN_PATH, None, Some(&body)) {
            Ok(reply) => reply,
            Err(Error::HttpRequest { status, body, .. }) => {
                warn!(status, "login rejected");
                return Err(Error::Authentication { status, body });
            }
            Err(e) => return Err(e),
        };

        match bearer_token_from(&reply) {
            Some(token) => {
                info!("login succeeded; bearer token stored");
                self.bearer_token = Some(token);
            }
            None => warn!("login succeeded but the response carried no bearer token"),
        }

        Ok(reply)
    }

    /// GET helper.
    pub fn get(&self, path: &str, query: Option<&Query>) -> Result<Value> {
        self.request(Method::Get, path, query, None)
    }

    /// POST helper.
    pub fn post(&self, path: &str, json: Option<&Value>) -> Result<Value> {
        self.request(Method::Post, path, None, json)
    }

    /// PUT helper.
    pub fn put(&self, path: &str, json: Option<&Value>) -> Result<Value> {
        self.request(Method::Put, path, None, json)
    }

    /// DELETE helper.
    pub fn delete(&self, path: &str) -> Result<Value> {
        self.request(Method::Delete, path, None, None)
    }

    /// Calls a catalogue endpoint by helper name.
    ///
    /// `args` fill the endpoint's path placeholders in order; `query` is
    /// forwarded unchanged.
    ///
    /// ```no_run
    /// # fn main() -> sevima::Result<()> {
    /// let client = sevima::Client::from_env()?;
    /// let detail = client.call("get_dosen_by_id", &["123"], None)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn call(&self, name: &str, args: &[&str], query: Option<&Query>) -> Result<Value> {
        let endpoint =
            endpoints::find(name).ok_or_else(|| Error::UnknownEndpoint(name.to_string()))?;
        let path = endpoint.render(args)?;
        self.request(endpoint.method, &path, query, None)
    }

    /// Performs one authenticated call against `{base_url}/{path}`.
    ///
    /// `path` is always joined onto the base URL, so credentials never leave
    /// the configured host.
    ///
    /// Returns the decoded JSON for any 2xx status (an empty body decodes to
    /// `null`). Any other status fails with [`Error::HttpRequest`] carrying the
    /// body (decoded as UTF-8, lossily); network failures surface as
    /// [`Error::Transport`].
    #[instrument(skip(self, query, json))]
    pub fn request(
        &self,
        method: Method,
        path: &str,
        query: Option<&Query>,
        json: Option<&Value>,
    ) -> Result<Value> {
        let url = urljoin(&self.base_url, path);

        let mut req = self.http.request(method.into(), &url).timeout(self.timeout);
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            req = req.query(query.pairs());
        }
        if let Some(json) = json {
            req = req.json(json);
        }
        let req = self.apply_auth(req);

        debug!(%url, "sending request");
        let resp = req.send().map_err(|source| Error::Transport {
            url: url.clone(),
            source,
        })?;

        let status = resp.status();
        let text = resp.text().map_err(|source| Error::Transport {
            url: url.clone(),
            source,
        })?;
        debug!(status = status.as_u16(), bytes = text.len(), "received response");

        if !status.is_success() {
            return Err(Error::HttpRequest {
                status: status.as_u16(),
                url,
                body: text,
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&text).map_err(|source| Error::Decode {
            url,
            status: status.as_u16(),
            source,
        })
    }

    fn apply_auth(&self, req: RequestBuilder) -> RequestBuilder {
        // Key headers are defaults on the HTTP client; only the bearer varies.
        match &self.bearer_token {
            Some(token) => req.header(AUTHORIZATION, format!("Bearer {token}")),
            None => req,
        }
    }
}

fn sensitive(name: &'static str, value: &str) -> Result<HeaderValue> {
    let mut value =
        HeaderValue::from_str(value).map_err(|source| Error::InvalidHeader { name, source })?;
    value.set_sensitive(true);
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> Client {
        Client::with_config(ClientConfig {
            api_key: "key".into(),
            secret_key: "secret".into(),
            base_url: "http://localhost:9".into(),
            verify: true,
        })
        .unwrap()
    }

    #[test]
    fn fresh_client_has_no_bearer() {
        let client = client();
        assert_eq!(client.bearer_token(), None);
        assert_eq!(client.base_url(), "http://localhost:9");
    }

    #[test]
    fn invalid_key_is_rejected_at_construction() {
        let err = Client::with_config(ClientConfig {
            api_key: "bad\nkey".into(),
            secret_key: "secret".into(),
            base_url: "http://localhost:9".into(),
            verify: true,
        })
        .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidHeader {
                name: APP_KEY_HEADER,
                ..
            }
        ));
    }

    #[test]
    fn blank_credentials_are_rejected_at_construction() {
        let err = Client::with_config(ClientConfig {
            api_key: String::new(),
            secret_key: String::new(),
            base_url: "http://localhost:9".into(),
            verify: true,
        })
        .unwrap_err();
        assert!(matches!(err, Error::Configuration(_)), "got {err:?}");
    }

    #[test]
    fn unknown_endpoint_fails_before_any_io() {
        let err = client().call("get_nothing", &[], None).unwrap_err();
        assert!(matches!(err, Error::UnknownEndpoint(ref n) if n == "get_nothing"));
    }

    #[test]
    fn wrong_arity_fails_before_any_io() {
        let err = client().call("get_dosen_by_id", &[], None).unwrap_err();
        assert!(matches!(err, Error::PathArguments { .. }));
    }
}
