use thiserror::Error;

/// Errors returned by the SEVIMA client.
///
/// Nothing is retried or swallowed internally: every failure surfaces here with
/// the status code and raw body needed to diagnose it.
#[derive(Debug, Error)]
pub enum Error {
    /// API key, secret key or another setting could not be resolved.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The login endpoint answered with a non-2xx status.
    #[error("login rejected (HTTP {status}): {body}")]
    Authentication { status: u16, body: String },

    /// Any other endpoint answered with a non-2xx status.
    ///
    /// `body` is the response decoded as UTF-8; invalid byte sequences are
    /// replaced with U+FFFD.
    #[error("{}", describe_http_failure(.status, .url, .body))]
    HttpRequest {
        status: u16,
        url: String,
        body: String,
    },

    /// Timeout, refused connection, DNS failure and friends.
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// A 2xx response whose body is not JSON.
    #[error("failed to parse API JSON (url={url}, status={status})")]
    Decode {
        url: String,
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),

    #[error("{name} is not a valid header value")]
    InvalidHeader {
        name: &'static str,
        #[source]
        source: reqwest::header::InvalidHeaderValue,
    },

    #[error("unknown endpoint `{0}`")]
    UnknownEndpoint(String),

    #[error("endpoint `{endpoint}` takes {expected} path argument(s), got {given}")]
    PathArguments {
        endpoint: &'static str,
        expected: usize,
        given: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Authentication { status, .. } | Error::HttpRequest { status, .. } => {
                Some(*status)
            }
            Error::Decode { status, .. } => Some(*status),
            Error::Transport { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Response body of a rejected request, unchanged apart from UTF-8
    /// decoding (invalid sequences become U+FFFD).
    pub fn body(&self) -> Option<&str> {
        match self {
            Error::Authentication { body, .. } | Error::HttpRequest { body, .. } => Some(body),
            _ => None,
        }
    }

    /// The bearer token (or the key pair) was refused.
    ///
    /// Tokens are never refreshed automatically; callers that see this should
    /// log in again.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// JSON:API `errors[]` objects found in the response body, if any.
    pub fn api_errors(&self) -> Vec<ApiErrorObject> {
        self.body().map(parse_api_errors).unwrap_or_default()
    }
}

/// One entry of a JSON:API `errors` array.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct ApiErrorObject {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
struct ErrorDocument {
    #[serde(default)]
    errors: Vec<ApiErrorObject>,
    // Some endpoints answer with a bare {"message": ...}
    #[serde(default)]
    message: Option<String>,
}

pub(crate) fn parse_api_errors(body: &str) -> Vec<ApiErrorObject> {
    match serde_json::from_str::<ErrorDocument>(body) {
        Ok(doc) if !doc.errors.is_empty() => doc.errors,
        Ok(doc) => doc
            .message
            .map(|message| {
                vec![ApiErrorObject {
                    status: None,
                    code: None,
                    title: Some(message),
                    detail: None,
                }]
            })
            .unwrap_or_default(),
        Err(_) => Vec::new(),
    }
}

fn summarize(errors: &[ApiErrorObject]) -> String {
    errors
        .iter()
        .map(|e| {
            let title = e.title.as_deref().unwrap_or("");
            match e.detail.as_deref() {
                Some(detail) if !detail.is_empty() && !title.is_empty() => {
                    format!("{title}: {detail}")
                }
                Some(detail) if !detail.is_empty() => detail.to_string(),
                _ => title.to_string(),
            }
        })
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn describe_http_failure(status: &u16, url: &str, body: &str) -> String {
    let status = *status;
    let errors = parse_api_errors(body);
    let server = if errors.is_empty() {
        body.to_string()
    } else {
        summarize(&errors)
    };

    match status {
        401 | 403 => format!(
            "SEVIMA authentication/authorization failed (HTTP {status}) for url ({url}).\n- Check SEVIMA_API_KEY and SEVIMA_SECRET_KEY\n- If you logged in, the bearer token may have expired; log in again\n\nServer message: {server}"
        ),
        404 => format!(
            "SEVIMA API endpoint not found (HTTP 404) for url ({url}).\n- The resource id may not exist, or SEVIMA_BASE_URL points at the wrong host\n\nServer message: {server}"
        ),
        _ => format!("API request failed: HTTP {status} for url ({url})\n{server}"),
    }
}
