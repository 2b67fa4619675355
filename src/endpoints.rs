//! Static endpoint table and path-template rendering.
//!
//! The table itself is declared in the catalogue module, which also generates
//! one helper method on [`Client`](crate::Client) per entry.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

pub use crate::catalogue::ENDPOINTS;

/// HTTP verbs used by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "DELETE" => Ok(Method::Delete),
            other => Err(format!("unsupported HTTP method `{other}`")),
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// One logical operation of the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Helper method name, e.g. `get_dosen_by_id`.
    pub name: &'static str,
    pub method: Method,
    /// Relative path with `{placeholder}` segments, e.g. `siakadcloud/v1/dosen/{dosen_id}`.
    pub template: &'static str,
    /// Placeholder names in template order.
    pub path_args: &'static [&'static str],
    pub category: &'static str,
    pub(crate) doc: &'static str,
}

impl Endpoint {
    /// One-line description of the endpoint.
    pub fn summary(&self) -> &'static str {
        self.doc.trim()
    }

    /// Substitutes `args` into the template's placeholders, in order.
    pub fn render(&self, args: &[&str]) -> Result<String> {
        if args.len() != self.path_args.len() {
            return Err(Error::PathArguments {
                endpoint: self.name,
                expected: self.path_args.len(),
                given: args.len(),
            });
        }

        let mut out = String::with_capacity(self.template.len() + 16);
        let mut rest = self.template;
        let mut args = args.iter();
        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let Some(close) = rest[open..].find('}') else {
                break;
            };
            // Arity was checked above, so there is always an argument here.
            if let Some(arg) = args.next() {
                out.push_str(arg);
            }
            rest = &rest[open + close + 1..];
        }
        out.push_str(rest);
        Ok(out)
    }
}

/// Looks up an endpoint by helper name.
pub fn find(name: &str) -> Option<&'static Endpoint> {
    ENDPOINTS.iter().find(|e| e.name == name)
}

/// Categories in declaration order, without duplicates.
pub fn categories() -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    for endpoint in ENDPOINTS {
        if !out.contains(&endpoint.category) {
            out.push(endpoint.category);
        }
    }
    out
}

/// Endpoints belonging to `category`.
pub fn in_category(category: &str) -> impl Iterator<Item = &'static Endpoint> + '_ {
    ENDPOINTS
        .iter()
        .filter(move |e| e.category.eq_ignore_ascii_case(category))
}
