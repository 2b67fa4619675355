use std::io::Write;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use sevima::{Client, Method, Query, endpoints, structure};

/// Explore the SEVIMA Platform API from the command line.
///
/// Credentials come from --api-key/--secret-key, the SEVIMA_API_KEY and
/// SEVIMA_SECRET_KEY environment variables, or a .env file.
#[derive(Debug, Parser)]
#[command(name = "sevima", version, about, long_about = None)]
struct Cli {
    /// API key (X-App-Key).
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Secret key (X-Secret-Key).
    #[arg(long, global = true)]
    secret_key: Option<String>,

    /// Base API URL.
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Per-request timeout in seconds.
    #[arg(long, global = true, value_name = "SECS")]
    timeout: Option<u64>,

    /// Log in with this email before running the command.
    #[arg(long, global = true, env = "SEVIMA_EMAIL")]
    email: Option<String>,

    /// Password for --email.
    #[arg(long, global = true, env = "SEVIMA_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Merge the response shape into this JSON file, keyed by request path.
    #[arg(long, global = true, value_name = "FILE")]
    record: Option<std::path::PathBuf>,

    /// Do not show a spinner while waiting for the server.
    #[arg(long, global = true)]
    quiet: bool,

    /// Enable debug logging.
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the endpoint catalogue.
    Endpoints {
        /// Only show this category.
        #[arg(long)]
        category: Option<String>,
    },
    /// Call a catalogue endpoint by name, e.g. `call get_dosen_by_id 123`.
    Call {
        name: String,
        /// Path arguments, in template order.
        args: Vec<String>,
        /// Query parameter as key=value (repeatable).
        #[arg(short, long = "query", value_name = "KEY=VALUE", value_parser = parse_pair)]
        query: Vec<(String, String)>,
    },
    /// Send a raw request to a path relative to the base URL.
    Request {
        method: Method,
        path: String,
        /// Query parameter as key=value (repeatable).
        #[arg(short, long = "query", value_name = "KEY=VALUE", value_parser = parse_pair)]
        query: Vec<(String, String)>,
        /// JSON request body.
        #[arg(long)]
        body: Option<String>,
    },
    /// Log in and print the login response.
    Login,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);
    run(cli)
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("sevima=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        api_key,
        secret_key,
        base_url,
        timeout,
        email,
        password,
        record,
        quiet,
        command,
        ..
    } = cli;

    if let Command::Endpoints { category } = &command {
        return print_endpoints(category.as_deref());
    }

    let mut client = Client::new(api_key, secret_key, base_url)
        .context("failed to configure the SEVIMA client")?;
    if let Some(secs) = timeout {
        client = client.with_timeout(Duration::from_secs(secs));
    }

    let spinner = !quiet;

    let login_reply = match (email, password) {
        (Some(email), Some(password)) => Some(
            with_spinner(spinner, "logging in", || client.login(&email, &password))
                .context("login failed")?,
        ),
        (None, None) => None,
        _ => bail!("--email and --password must be given together"),
    };

    let (key, response) = match command {
        Command::Endpoints { category } => return print_endpoints(category.as_deref()),
        Command::Login => match login_reply {
            Some(reply) => return print_json(&reply),
            None => bail!("login requires --email and --password"),
        },
        Command::Call { name, args, query } => {
            let endpoint = endpoints::find(&name).with_context(|| {
                format!("unknown endpoint `{name}` (see `sevima endpoints`)")
            })?;
            let args: Vec<&str> = args.iter().map(String::as_str).collect();
            let path = endpoint.render(&args)?;
            let query: Query = query.into_iter().collect();

            let response = with_spinner(spinner, endpoint.name, || {
                client.call(&name, &args, Some(&query))
            })?;
            (path, response)
        }
        Command::Request {
            method,
            path,
            query,
            body,
        } => {
            let body: Option<Value> = body
                .map(|b| serde_json::from_str(&b))
                .transpose()
                .context("--body is not valid JSON")?;
            let query: Query = query.into_iter().collect();

            let response = with_spinner(spinner, &path, || {
                client.request(method, &path, Some(&query), body.as_ref())
            })?;
            (path, response)
        }
    };

    if let Some(file) = &record {
        record_shape(file, &key, &response)?;
    }
    print_json(&response)
}

fn parse_pair(raw: &str) -> std::result::Result<(String, String), String> {
    match raw.split_once('=') {
        Some((k, v)) if !k.trim().is_empty() => Ok((k.trim().to_string(), v.to_string())),
        _ => Err(format!("expected KEY=VALUE, got `{raw}`")),
    }
}

fn with_spinner<T>(enabled: bool, message: &str, f: impl FnOnce() -> T) -> T {
    let pb = enabled.then(|| {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("{spinner:.green} {msg} ({elapsed})")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    });

    let out = f();

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }
    out
}

fn print_endpoints(category: Option<&str>) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let categories: Vec<&str> = match category {
        Some(c) => {
            if endpoints::in_category(c).next().is_none() {
                bail!(
                    "unknown category `{c}` (known: {})",
                    endpoints::categories().join(", ")
                );
            }
            vec![c]
        }
        None => endpoints::categories(),
    };

    for cat in categories {
        writeln!(out, "{cat}")?;
        for endpoint in endpoints::in_category(cat) {
            writeln!(
                out,
                "  {:<40} {:<6} {:<72} {}",
                endpoint.name,
                endpoint.method,
                endpoint.template,
                endpoint.summary()
            )?;
        }
    }
    Ok(())
}

fn print_json(value: &Value) -> Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    println!("{text}");
    Ok(())
}

fn record_shape(file: &Path, key: &str, response: &Value) -> Result<()> {
    let mut document = match std::fs::read_to_string(file) {
        Ok(text) => serde_json::from_str(&text).unwrap_or_else(|e| {
            warn!(path = %file.display(), error = %e, "existing shape file is not valid JSON; starting over");
            Value::Object(Default::default())
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Value::Object(Default::default()),
        Err(e) => {
            warn!(path = %file.display(), error = %e, "cannot read shape file; starting over");
            Value::Object(Default::default())
        }
    };

    structure::record(&mut document, key, response);

    let text = serde_json::to_string_pretty(&document)?;
    std::fs::write(file, text).with_context(|| format!("failed to write {}", file.display()))?;
    info!(path = %file.display(), endpoint = key, "response shape saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_pair_splits_on_first_equals() {
        assert_eq!(
            parse_pair("filter[nama]=a=b").unwrap(),
            ("filter[nama]".to_string(), "a=b".to_string())
        );
        assert_eq!(parse_pair("page=").unwrap(), ("page".to_string(), String::new()));
        assert!(parse_pair("page").is_err());
        assert!(parse_pair("=1").is_err());
    }

    #[test]
    fn cli_parses_call_with_queries() {
        let cli = Cli::try_parse_from([
            "sevima", "call", "get_dosen_kelas", "42", "-q", "page=2", "--query", "per_page=10",
        ])
        .unwrap();
        match cli.command {
            Command::Call { name, args, query } => {
                assert_eq!(name, "get_dosen_kelas");
                assert_eq!(args, vec!["42".to_string()]);
                assert_eq!(query.len(), 2);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn cli_parses_request_method_case_insensitively() {
        let cli = Cli::try_parse_from(["sevima", "request", "post", "siakadcloud/v1/x", "--body", "{}"])
            .unwrap();
        assert!(matches!(cli.command, Command::Request { method: Method::Post, .. }));
    }

    fn offline(args: &[&str]) -> Cli {
        let mut argv = vec![
            "sevima",
            "--api-key",
            "k",
            "--secret-key",
            "s",
            "--base-url",
            "http://127.0.0.1:9",
            "--quiet",
        ];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn login_without_credentials_is_an_error_not_a_panic() {
        let err = run(offline(&["login"])).unwrap_err();
        assert!(err.to_string().contains("login requires"), "{err}");
    }

    #[test]
    fn email_without_password_is_rejected() {
        let err = run(offline(&["--email", "a@b.com", "call", "get_dosen"])).unwrap_err();
        assert!(err.to_string().contains("given together"), "{err}");
    }

    #[test]
    fn record_shape_merges_and_recovers_from_corrupt_files() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("response.json");
        std::fs::write(&file, "not json").unwrap();

        record_shape(&file, "siakadcloud/v1/dosen", &serde_json::json!({"data": [{"id": "1"}]}))
            .unwrap();
        record_shape(&file, "edlink/v1/sesi", &serde_json::json!({"meta": {"total": 3}})).unwrap();

        let saved: Value = serde_json::from_str(&std::fs::read_to_string(&file).unwrap()).unwrap();
        assert_eq!(saved["siakadcloud/v1/dosen"], serde_json::json!({"data": [{"id": null}]}));
        assert_eq!(saved["edlink/v1/sesi"], serde_json::json!({"meta": {"total": null}}));
    }
}
