use serde_json::Value;

/// Relative path of the SSO login endpoint.
pub(crate) const LOGIN_PATH: &str = "siakadcloud/v1/user/login";

/// Places a login reply may carry the bearer token, in lookup order.
const TOKEN_POINTERS: &[&str] = &[
    "/token",
    "/access_token",
    "/data/token",
    "/data/access_token",
    "/data/attributes/token",
    "/data/attributes/access_token",
];

/// Pulls the bearer token out of a successful login response.
///
/// Only the listed locations are inspected; the shape of any other field is
/// irrelevant. Blank tokens are skipped.
pub(crate) fn bearer_token_from(reply: &Value) -> Option<String> {
    TOKEN_POINTERS
        .iter()
        .filter_map(|pointer| reply.pointer(pointer).and_then(Value::as_str))
        .map(str::trim)
        .find(|token| !token.is_empty())
        .map(str::to_string)
}
