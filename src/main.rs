// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_sync::DashboardSync;
use crate::application::report_service::ReportService;
use crate::infrastructure::board_view::BoardView;
use crate::infrastructure::config::{AppConfig, load_app_config};
use crate::infrastructure::dashboard_api::HttpSnapshotSource;
use crate::infrastructure::frame_clock::IntervalClock;
use crate::infrastructure::google_analytics::GoogleAnalyticsClient;
use crate::presentation::app_state::AppState;
use crate::presentation::routes::build_router;

#[derive(Parser)]
#[command(name = "seo-analytics-dashboard", version, about = "SEO analytics dashboard backend")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the analytics API (default)
    Serve,
    /// Check that the configured property is reachable
    TestConnection,
    /// Refresh a terminal dashboard from a running server
    Refresh {
        #[arg(long, env = "DASHBOARD_URL", default_value = "http://localhost:3000")]
        url: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match Cli::parse().command.unwrap_or(Command::Serve) {
        Command::Serve => serve(load_app_config()?).await,
        Command::TestConnection => test_connection(load_app_config()?).await,
        Command::Refresh { url } => refresh(&url).await,
    }
}

fn report_service(config: &AppConfig) -> ReportService {
    // One analytics client for the whole process
    let client = Arc::new(GoogleAnalyticsClient::new(
        config.analytics.base_url.clone(),
        config.analytics.access_token.clone(),
    ));
    ReportService::new(client, &config.analytics.property_id)
}

async fn serve(config: AppConfig) -> anyhow::Result<()> {
    let state = Arc::new(AppState {
        report_service: report_service(&config),
    });
    let router = build_router(state);

    let addr = config.server.address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("SEO analytics dashboard listening on {}", listener.local_addr()?);

    axum::serve(listener, router).await?;

    Ok(())
}

async fn test_connection(config: AppConfig) -> anyhow::Result<()> {
    tracing::info!("Testing Google Analytics connection for property {}", config.analytics.property_id);
    let service = report_service(&config);

    let status = service.test_connection().await;
    if !status.success {
        println!("FAILED: {}", status.message);
        println!("Troubleshooting:");
        println!("  1. Is the service account granted access to the GA4 property?");
        println!("  2. Is the Analytics Data API enabled for the project?");
        println!("  3. Is the property id correct?");
        anyhow::bail!("connection test failed");
    }

    println!("SUCCESS: {}", status.message);
    match service.session_count_since("7daysAgo").await {
        Ok(sessions) => {
            println!("Sessions (last 7 days): {}", sessions);
            if sessions == "0" {
                println!("No sessions recorded yet. This is normal for new properties.");
            }
        }
        Err(e) => tracing::warn!("Could not read 7 day session count: {:#}", e),
    }

    Ok(())
}

async fn refresh(url: &str) -> anyhow::Result<()> {
    let view = Arc::new(BoardView::new());
    let sync = DashboardSync::new(
        Arc::new(HttpSnapshotSource::new(url)),
        view.clone(),
        Arc::new(IntervalClock::default()),
    );

    let animations = match sync.refresh().await.into_animations() {
        Ok(animations) => animations,
        Err(e) => {
            print!("{}", view.render());
            return Err(e);
        }
    };
    for result in futures::future::join_all(animations).await {
        if let Err(e) = result {
            tracing::warn!("Widget animation did not finish: {}", e);
        }
    }

    tracing::debug!(
        "Refresh finished in state {:?} with {} table rows",
        sync.state(),
        view.table().row_count()
    );
    print!("{}", view.render());
    Ok(())
}
