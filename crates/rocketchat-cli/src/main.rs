mod cli;
mod commands;
mod dotenv;
mod logging;

use std::process::ExitCode;

use rocketchat_client::RocketChatApi;
use rocketchat_common::RocketChatError;

async fn run(args: cli::Args) -> Result<(), RocketChatError> {
    let levels = logging::init(args.log_level.as_deref().unwrap_or("info"));

    let config = commands::effective_config(&args)?;
    if args.log_level.is_none() {
        logging::set_level(&levels, &config.logging.level);
    }

    tracing::info!("rocketchat v{} starting", env!("CARGO_PKG_VERSION"));

    if args.command == cli::Command::Config {
        println!("{}", rocketchat_config::config_to_json(&config));
        return Ok(());
    }

    rocketchat_config::validation::validate(&config)?;

    let api = RocketChatApi::new(commands::client_config(&config))?;
    let output = commands::run(&api, &args.command).await?;

    let stats = api.stats().snapshot();
    tracing::debug!(
        logins = stats.login_attempts,
        calls = stats.calls,
        failures = stats.failures,
        "Request stats"
    );

    let rendered = serde_json::to_string_pretty(&output)
        .map_err(|e| RocketChatError::Other(format!("failed to render output: {e}")))?;
    println!("{rendered}");
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env before the config so ROCKETCHAT_* overrides apply
    dotenv::load();

    let args = cli::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
