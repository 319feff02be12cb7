//! Session diagnostics against a running stadium backend.
//!
//! Runs the same bootstrap the console runs on page load, optionally signs in,
//! and reports what the route gate would do for a path.
//!
//! Usage:
//!   cargo run --bin session-check -- --path /dashboard
//!   STADIUM_PASSWORD=... cargo run --bin session-check -- -u alice --expect-authenticated

use anyhow::{bail, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use smart_stadium::config;
use smart_stadium::session::{gate, AccessPolicy, SessionStore};
use smart_stadium::transport::http::HttpTransport;
use smart_stadium::ApiClient;
use stadium_types::Credentials;

#[derive(Parser, Debug)]
#[command(name = "session-check")]
#[command(about = "Check session bootstrap, login and route gating against the backend")]
struct Args {
    /// Backend root; overrides the configured `client.api_base_url`.
    #[arg(long, env = "STADIUM_API_URL")]
    api_url: Option<String>,

    /// Sign in with this username after the bootstrap check.
    #[arg(short, long, requires = "password")]
    username: Option<String>,

    #[arg(short, long, env = "STADIUM_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Path to run through the route gate.
    #[arg(long, default_value = "/dashboard")]
    path: String,

    /// Sign out again before exiting.
    #[arg(long)]
    logout: bool,

    /// Exit non-zero unless the session ends up authenticated.
    #[arg(long)]
    expect_authenticated: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "smart_stadium=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    let args = Args::parse();

    let mut settings = config::load_config()?.client;
    if let Some(url) = args.api_url {
        settings.api_base_url = url;
    }
    let policy = AccessPolicy {
        require_authentication: settings.require_authentication,
    };
    println!("backend: {}", settings.api_base_url);

    let store = SessionStore::new(ApiClient::new(HttpTransport::new(settings)));

    let session = store.bootstrap().await;
    println!("bootstrap: {}", session.status());

    if let (Some(username), Some(password)) = (args.username, args.password) {
        let outcome = store.login(&Credentials::new(username, password)).await;
        match outcome.failure {
            None => println!("login: ok"),
            Some(failure) => println!("login: failed ({failure})"),
        }
    }

    let session = store.snapshot();
    println!("session: {}", session.status());
    println!(
        "gate {}: {:?}",
        args.path,
        gate::decide_for_path(&args.path, &session, policy)
    );

    let authenticated = session.identity().is_some();

    if args.logout {
        let session = store.logout().await;
        println!("logout: {}", session.status());
    }

    if args.expect_authenticated && !authenticated {
        bail!("expected an authenticated session");
    }

    Ok(())
}
