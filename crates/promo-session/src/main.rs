//! Demo runner: drives one generation attempt end to end.

use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use promo_client::{transport_from_config, ClientConfig};
use promo_models::{GenerationRequest, VideoDuration};
use promo_session::{DownloadLink, ProgressStyle, SessionController, SessionState};

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing with colored output for dev, JSON for production
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let env_filter = EnvFilter::from_default_env()
        .add_directive("promo=info".parse().unwrap())
        .add_directive("hyper=warn".parse().unwrap());

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_ansi(true)
                    .with_target(true)
                    .with_file(false)
                    .with_line_number(false),
            )
            .with(env_filter)
            .init();
    }

    let config = ClientConfig::from_env();
    info!(mock_mode = config.mock_mode, "Starting promo-session demo");

    let transport = match transport_from_config(&config) {
        Ok(t) => t,
        Err(e) => {
            error!("Failed to build transport: {}", e);
            std::process::exit(1);
        }
    };

    let controller = SessionController::new(transport, ProgressStyle::Simulated);
    let mut state_rx = controller.subscribe();

    let request = GenerationRequest::demo()
        .with_key_features("Natural caffeine, Zero sugar, B-vitamins, Electrolytes, Tropical flavor")
        .with_target_audience("Athletes & Fitness Enthusiasts")
        .with_tone("Energetic")
        .with_video_style("Motion Graphics")
        .with_duration(VideoDuration::Standard);
    let subject = request.product_name.clone();

    if let Err(e) = controller.submit(request) {
        error!("Submission rejected: {}", e);
        std::process::exit(1);
    }

    // Follow the session until it settles, echoing advisory progress.
    loop {
        if state_rx.changed().await.is_err() {
            break;
        }
        let state = state_rx.borrow_and_update().clone();
        match state {
            SessionState::InFlight { progress } => {
                info!(progress, "Generating video...");
            }
            SessionState::Succeeded(response) => {
                let link = DownloadLink::for_video(&subject, &response);
                info!(id = %response.id, url = %response.video_url, "Generation succeeded");
                info!(filename = %link.filename, "Download ready");
                info!("Prompt used: {}", response.prompt);
                break;
            }
            SessionState::Failed(failure) => {
                error!(code = %failure.code, "{}", failure.message);
                break;
            }
            SessionState::Idle | SessionState::Validating => {}
        }
    }

    info!("Demo complete");
}
