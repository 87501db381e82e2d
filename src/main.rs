//! Mentor bot — console entry point.
//!
//! Startup sequence:
//!   1. Load .env (if present)
//!   2. Load config (fatal if a keyed provider has no API key)
//!   3. Init logger at configured level
//!   4. Build the LLM provider
//!   5. Run the console loop until quit

use tracing::info;

use mentor_bot::config;
use mentor_bot::controller::Mentor;
use mentor_bot::error::AppError;
use mentor_bot::llm::providers;
use mentor_bot::logger;
use mentor_bot::repl::Repl;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    // Load .env if present — ignore errors (file is optional).
    let _ = dotenvy::dotenv();

    let config_path = std::env::args().nth(1);
    let config = config::load(config_path.as_deref())?;

    logger::init(&config.log_level)?;
    info!(
        provider = %config.llm.provider,
        log_level = %config.log_level,
        "config loaded"
    );

    let provider = providers::build(&config.llm, config.llm_api_key.clone())?;
    let mentor = Mentor::new(provider);

    Repl::new(mentor).run().await
}
