//! ModernVPN CLI
//!
//! Command-line front end for the ModernVPN backend:
//! - Sign in, register and sign out
//! - List servers and request a tunnel configuration
//! - Report data usage
//! - Browse sponsored ads

use anyhow::{anyhow, bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use futures_util::future::LocalBoxFuture;
use std::cell::RefCell;
use std::path::PathBuf;
use std::time::Duration;
use tokio::task::{JoinHandle, LocalSet};

use modernvpn::api::{AdId, ApiClient, Country, HttpTransport};
use modernvpn::config::{generate_default_config, Config};
use modernvpn::session::{FileSessionStore, Session};
use modernvpn::views::{ads, dashboard, login, register, LocalView, Route, Shell, ViewCell};

#[derive(Parser)]
#[command(name = "modernvpn")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "ModernVPN account, server and usage dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend base URL (overrides config and MODERNVPN_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in and store the session token
    Login { email: String, password: String },

    /// Create an account
    Register { email: String, password: String },

    /// Forget the stored session token
    Logout,

    /// Show the signed-in user and available servers
    Status,

    /// Request a tunnel configuration for a server
    Connect {
        /// Server id, as listed by `status`
        server_id: String,
    },

    /// Report data usage
    Usage { amount: f64 },

    /// List sponsored ads
    Ads {
        /// Target country (IN, US, GB, DE, JP)
        #[arg(short, long, default_value = "IN")]
        country: Country,
    },

    /// Record a click on an ad and print its link
    Open {
        ad_id: String,
        #[arg(short, long, default_value = "IN")]
        country: Country,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Shell for a one-shot terminal run. Navigation has nowhere to go, so it
/// is only logged; detached work is joined before exit.
#[derive(Default)]
struct CliShell {
    tasks: RefCell<Vec<JoinHandle<()>>>,
}

impl CliShell {
    async fn drain(&self) {
        let tasks: Vec<_> = self.tasks.borrow_mut().drain(..).collect();
        for task in tasks {
            if let Err(e) = task.await {
                tracing::debug!("Background task failed: {}", e);
            }
        }
    }
}

impl Shell for CliShell {
    fn navigate(&self, route: Route) {
        tracing::debug!("navigate {}", route);
    }

    fn navigate_after(&self, route: Route, delay: Duration) {
        tracing::debug!("navigate {} after {:?}", route, delay);
    }

    fn reload_to(&self, route: Route) {
        tracing::debug!("reload {}", route);
    }

    fn alert(&self, message: &str) {
        println!("{}", message);
    }

    fn open_in_new_tab(&self, url: &str) {
        println!("Open: {}", url);
    }

    fn detach(&self, task: LocalBoxFuture<'static, ()>) {
        self.tasks.borrow_mut().push(tokio::task::spawn_local(task));
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::resolve(cli.config.as_deref())?;
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }
    modernvpn::logging::init(&config.logging);

    let session = Session::new(FileSessionStore::new(config.session.token_path()));
    let api = ApiClient::new(&config.api.base_url, session, HttpTransport::new());
    tracing::debug!("Using backend {}", api.base_url());

    let shell = CliShell::default();
    LocalSet::new()
        .run_until(async {
            let result = run(cli.command, cli.format, &api, &shell).await;
            shell.drain().await;
            result
        })
        .await
}

async fn run(
    command: Commands,
    format: OutputFormat,
    api: &ApiClient,
    shell: &CliShell,
) -> anyhow::Result<()> {
    match command {
        Commands::Login { email, password } => {
            let view = LocalView::new(login::LoginState {
                email: email.clone(),
                password,
                error: None,
            });
            match login::submit(api, &view, shell).await {
                login::LoginOutcome::SignedIn => println!("Signed in as {}", email),
                login::LoginOutcome::Rejected(message) => bail!(message),
            }
        }

        Commands::Register { email, password } => {
            let view = LocalView::new(register::RegisterState {
                email,
                password,
                notice: None,
            });
            match register::submit(api, &view, shell).await {
                register::RegisterOutcome::Registered => {
                    println!("{}", register::REGISTRATION_SUCCESS)
                }
                register::RegisterOutcome::Rejected(message) => bail!(message),
            }
        }

        Commands::Logout => {
            dashboard::logout(api.session(), shell);
            println!("Signed out");
        }

        Commands::Status => {
            let view = LocalView::<dashboard::DashboardState>::default();
            dashboard::mount(api, &view, shell).await;
            let state = view.snapshot();

            match format {
                OutputFormat::Json => {
                    let out = serde_json::json!({
                        "signed_in": api.session().is_signed_in(),
                        "user": state.user,
                        "servers": state.servers,
                        "servers_source": state.servers_source.as_str(),
                    });
                    println!("{}", serde_json::to_string_pretty(&out)?);
                }
                OutputFormat::Table => {
                    match (state.welcome(), api.session().is_signed_in()) {
                        (Some(welcome), _) => println!("{}", welcome),
                        (None, true) => println!("Signed in (user details unavailable)"),
                        (None, false) => println!("Not signed in"),
                    }
                    println!();
                    print_servers(&state);
                }
            }
        }

        Commands::Connect { server_id } => {
            let view = LocalView::<dashboard::DashboardState>::default();
            dashboard::mount(api, &view, shell).await;

            if !dashboard::select_server(&view, &server_id) {
                let known: Vec<_> = view.snapshot().servers.into_iter().map(|s| s.id).collect();
                bail!("Unknown server {}. Available: {}", server_id, known.join(", "));
            }

            let status = dashboard::connect(api, &view, shell).await;
            println!("{}: {}", server_id, status);
            if status != dashboard::ConnectionStatus::Connected {
                bail!("Could not connect to {}", server_id);
            }
        }

        Commands::Usage { amount } => {
            let view = LocalView::new(dashboard::DashboardState::with_usage(amount));
            if !dashboard::report_usage(api, &view, shell).await {
                bail!("Usage report was not accepted");
            }
        }

        Commands::Ads { country } => {
            let view = load_ads(api, country).await;
            let state = view.snapshot();
            for ad in &state.ads {
                ads::impression(api, shell, ad, country);
            }

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&state.ads)?),
                OutputFormat::Table => print_ads(&state),
            }
        }

        Commands::Open { ad_id, country } => {
            let view = load_ads(api, country).await;
            let wanted = AdId::from(ad_id.as_str());
            let ad = view
                .with(|s| s.ads.iter().find(|a| a.id == wanted).cloned())
                .flatten()
                .ok_or_else(|| anyhow!("No ad {} for {}", ad_id, country.label()))?;
            ads::click(api, shell, &ad, country);
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

async fn load_ads(api: &ApiClient, country: Country) -> LocalView<ads::AdsState> {
    let view = LocalView::new(ads::AdsState {
        country,
        ..Default::default()
    });
    ads::load_ads(api, &view).await;
    view
}

fn print_servers(state: &dashboard::DashboardState) {
    println!("{:<16} {:<14} {:<16} {}", "ID", "Region", "IP", "Status");
    println!("{}", "-".repeat(56));
    for server in &state.servers {
        println!(
            "{:<16} {:<14} {:<16} {}",
            server.id, server.region, server.ip, server.status
        );
    }
    println!();
    println!("({} servers, {} data)", state.servers.len(), state.servers_source.as_str());
}

fn print_ads(state: &ads::AdsState) {
    if let Some(placeholder) = state.placeholder() {
        println!("{}", placeholder);
        return;
    }

    println!("Sponsored ads for {} ({} data)", state.country.label(), state.source.as_str());
    println!();
    for ad in &state.ads {
        println!("[{}] {}", ad.id, ad.title);
        if let Some(description) = &ad.description {
            println!("    {}", description);
        }
        println!("    {}", ad.link);
        if let Some(payout) = &ad.payout_rate {
            println!("    Payout: {}", payout);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::State,
        http::{HeaderMap, StatusCode},
        routing::{get, patch, post},
        Json, Router,
    };
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    type Received = Arc<Mutex<Vec<(String, Value)>>>;

    async fn usage(State(seen): State<Received>, Json(body): Json<Value>) -> StatusCode {
        seen.lock().unwrap().push(("/usage".into(), body.clone()));
        if body["dataUsed"].as_f64().is_some_and(|v| v >= 0.0) {
            StatusCode::NO_CONTENT
        } else {
            StatusCode::UNPROCESSABLE_ENTITY
        }
    }

    async fn assign(
        State(seen): State<Received>,
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> (StatusCode, Json<Value>) {
        seen.lock().unwrap().push(("/vpn/assign".into(), body));
        if headers.contains_key("authorization") {
            (StatusCode::OK, Json(json!({"config": "[Interface]"})))
        } else {
            (StatusCode::UNAUTHORIZED, Json(json!({"detail": "Not authenticated"})))
        }
    }

    async fn servers() -> Json<Value> {
        Json(json!([{"id": 7, "region": "Frankfurt", "ip": "10.0.0.1"}]))
    }

    async fn me() -> (StatusCode, Json<Value>) {
        (StatusCode::UNAUTHORIZED, Json(json!({"detail": "Not authenticated"})))
    }

    async fn spawn_backend(seen: Received) -> String {
        let app = Router::new()
            .route("/usage", patch(usage))
            .route("/vpn/assign", post(assign))
            .route("/vpn/servers", get(servers))
            .route("/users/me", get(me))
            .with_state(seen);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}", addr)
    }

    async fn run_against(base: &str, command: Commands) -> anyhow::Result<()> {
        let api = ApiClient::new(base, Session::in_memory(), HttpTransport::new());
        let shell = CliShell::default();
        LocalSet::new()
            .run_until(async {
                let result = run(command, OutputFormat::Table, &api, &shell).await;
                shell.drain().await;
                result
            })
            .await
    }

    #[tokio::test]
    async fn test_usage_command_reports_amount() {
        let seen = Received::default();
        let base = spawn_backend(seen.clone()).await;

        run_against(&base, Commands::Usage { amount: 12.5 }).await.unwrap();
        assert!(run_against(&base, Commands::Usage { amount: -1.0 }).await.is_err());

        let seen = seen.lock().unwrap();
        assert_eq!(seen[0], ("/usage".to_string(), json!({"dataUsed": 12.5})));
        assert_eq!(seen.len(), 2);
    }

    #[tokio::test]
    async fn test_connect_without_token_is_left_to_backend() {
        let seen = Received::default();
        let base = spawn_backend(seen.clone()).await;

        let err = run_against(&base, Commands::Connect { server_id: "7".into() })
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Could not connect to 7");
        assert_eq!(
            *seen.lock().unwrap(),
            vec![("/vpn/assign".to_string(), json!({"serverId": "7"}))]
        );
    }

    #[tokio::test]
    async fn test_connect_to_unlisted_server_makes_no_request() {
        let seen = Received::default();
        let base = spawn_backend(seen.clone()).await;

        let err = run_against(&base, Commands::Connect { server_id: "us-east-1".into() })
            .await
            .unwrap_err();

        assert!(err.to_string().starts_with("Unknown server us-east-1"));
        assert!(seen.lock().unwrap().is_empty());
    }
}
