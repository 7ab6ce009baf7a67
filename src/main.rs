//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here.

use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use vibe_check::adapters::ai::{GeminiAdapter, MockAiAdapter};
use vibe_check::adapters::follow_graph::FixtureFollowGraph;
use vibe_check::adapters::ui::tui::TuiInputPort;
use vibe_check::ports::{FollowGraphPort, GenerativePort, InputPort};
use vibe_check::shared::config::AppConfig;
use vibe_check::usecases::{ProfileLookup, SearchService, VibeAnalyzer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    vibe_check::adapters::ui::init_ui();

    let cfg = AppConfig::load()?;
    let locale = cfg.locale_or_default();

    // --- Generative AI (one client shared by lookup and analyzer) ---
    let ai: Arc<dyn GenerativePort> = if cfg.is_ai_mock() {
        warn!("VIBE_CHECK_AI_MOCK set, using mock AI adapter");
        Arc::new(MockAiAdapter::new())
    } else {
        let api_key = cfg.ai_api_key();
        if api_key.is_none() {
            warn!("no Gemini API key (VIBE_CHECK_AI_API_KEY / GEMINI_API_KEY / API_KEY); requests will be rejected");
        }
        info!(url = %cfg.ai_api_url_or_default(), "Gemini adapter enabled");
        Arc::new(GeminiAdapter::new(
            cfg.ai_api_url_or_default(),
            api_key.unwrap_or_default(),
            cfg.request_timeout_secs.map(Duration::from_secs),
        )?)
    };

    // --- Follow graph (fixture until a real data source exists) ---
    let graph: Arc<dyn FollowGraphPort> =
        Arc::new(FixtureFollowGraph::new(cfg.fixture_delay_ms_or_default()));

    // --- Services ---
    let lookup = Arc::new(ProfileLookup::new(
        Arc::clone(&ai),
        cfg.lookup_model_or_default(),
    ));
    let search = Arc::new(SearchService::new(lookup, graph));
    let analyzer = Arc::new(VibeAnalyzer::new(
        Arc::clone(&ai),
        cfg.analysis_model_or_default(),
        locale,
    ));
    info!(
        analysis_model = %cfg.analysis_model_or_default(),
        lookup_model = %cfg.lookup_model_or_default(),
        ?locale,
        "services ready"
    );

    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(search, analyzer));

    // --- Run (username -> results -> vibe check) ---
    input_port.run().await?;

    Ok(())
}
