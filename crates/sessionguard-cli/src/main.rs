//! sessionguard - command-line front end for the web app's auth layer.
//!
//! Logs in against the backend, keeps the bearer token in the configured
//! storage and sends authenticated requests that renew the session once
//! when they come back 401.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use reqwest::Method;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sessionguard_core::models::{LoginRequest, RegisterRequest};
use sessionguard_core::{AuthClient, Config, Router, Session};

/// Shown when a failed request carries no message of its own
const REQUEST_FAILED: &str = "요청에 실패했습니다.";

#[derive(Parser, Debug)]
#[command(name = "sessionguard", version, about = "Log in and send authenticated requests")]
struct Cli {
    /// Backend base URL (overrides the config file)
    #[arg(long, global = true, env = "SESSIONGUARD_BASE_URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and store the access token
    Login {
        #[arg(short, long)]
        username: Option<String>,
    },
    /// Create an account
    Register {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        nickname: Option<String>,
    },
    /// Renew the session from the refresh cookie
    Refresh,
    /// Forget the stored token
    Logout,
    /// Show whether a token is stored
    Status,
    /// Send an authenticated request to a backend path
    Fetch {
        path: String,
        #[arg(short = 'X', long, default_value = "GET")]
        method: String,
        /// JSON request body
        #[arg(short, long)]
        data: Option<String>,
    },
    /// Resolve a route through the navigation guard
    Navigate { path: String },
}

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();
    init_tracing();

    let cli = Cli::parse();

    let mut config = Config::load().context("Failed to load config")?;
    if let Some(url) = cli.base_url {
        config.base_url = url;
    }

    let session = Arc::new(Session::from_config(&config).context("Failed to open token storage")?);
    let router = Arc::new(Router::with_app_routes(session.clone()));
    let client = AuthClient::new(config, session.clone(), router.clone())?;

    let mut changes = session.subscribe();
    tokio::spawn(async move {
        while changes.recv().await.is_ok() {
            info!(target: "auth-changed", "Session changed");
        }
    });

    match cli.command {
        Command::Login { username } => {
            let username = match username {
                Some(name) => name,
                None => prompt("Username: ")?,
            };
            let password = rpassword::prompt_password("Password: ")?;
            client.login(&LoginRequest { username, password }).await?;
            println!("Logged in");
        }
        Command::Register {
            username,
            email,
            nickname,
        } => {
            let password = rpassword::prompt_password("Password: ")?;
            let request = RegisterRequest {
                username,
                email,
                password,
                nickname,
            };
            client.register(&request).await?;
            println!("Registered");
        }
        Command::Refresh => {
            client.refresh().await?;
            println!("Session refreshed");
        }
        Command::Logout => {
            client.logout();
            println!("Logged out");
        }
        Command::Status => {
            if session.is_logged_in() {
                println!("Logged in");
            } else {
                println!("Not logged in");
            }
        }
        Command::Fetch { path, method, data } => {
            let method: Method = method
                .to_uppercase()
                .parse()
                .with_context(|| format!("Invalid method {}", method))?;
            let mut builder = client.request(method, &path);
            if let Some(data) = data {
                let body: serde_json::Value =
                    serde_json::from_str(&data).context("Request body is not valid JSON")?;
                builder = builder.json(&body);
            }

            let response = client.auth_send(builder).await?;
            print_staged_message(&session);
            let response = AuthClient::check_response(response, REQUEST_FAILED).await?;
            println!("{}", response.text().await?);
        }
        Command::Navigate { path } => {
            let route = router.navigate(&path)?;
            print_staged_message(&session);
            println!("{} ({})", route.path, route.name);
        }
    }

    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// The login screen's one-shot message, if anything staged one.
fn print_staged_message(session: &Session) {
    if let Some(message) = session.take_message() {
        eprintln!("{}", message);
    }
}
