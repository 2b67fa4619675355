//! A small blocking Rust client for the SEVIMA Platform API.
//!
//! Every call goes through one authenticated request layer: the API key and
//! secret key headers (plus a bearer token after [`Client::login`]) are
//! attached, JSON bodies are serialized, non-2xx responses become
//! [`Error::HttpRequest`] and successful bodies are returned as
//! [`serde_json::Value`] exactly as the server sent them.
//!
//! ## Quick start
//! - Configure credentials via environment variables (`SEVIMA_API_KEY`,
//!   `SEVIMA_SECRET_KEY`, optionally `SEVIMA_BASE_URL`) or a `.env` file.
//! - Call one of the endpoint helpers, or [`Client::call`] by name.
//!
//! ```no_run
//! use sevima::{Client, Query};
//!
//! fn main() -> sevima::Result<()> {
//!     let client = Client::from_env()?;
//!     let dosen = client.get_dosen(Some(&Query::new().page(1)))?;
//!     println!("{}", dosen["data"]);
//!
//!     let detail = client.get_mahasiswa_by_id("123", None)?;
//!     println!("{}", detail["data"]["attributes"]);
//!     Ok(())
//! }
//! ```
//!
//! The full list of helpers is available at runtime in [`ENDPOINTS`].

#![forbid(unsafe_code)]

mod auth;
mod catalogue;
mod client;
mod config;
pub mod endpoints;
mod error;
mod query;
pub mod structure;
mod util;

pub use client::Client;
pub use config::{
    API_KEY_VAR, BASE_URL_VAR, ClientConfig, DEFAULT_BASE_URL, ENV_FILE_VAR, SECRET_KEY_VAR,
    VERIFY_VAR,
};
pub use endpoints::{ENDPOINTS, Endpoint, Method};
pub use error::{ApiErrorObject, Error, Result};
pub use query::{Order, Query};
