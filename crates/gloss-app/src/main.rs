use std::io;
use std::process::ExitCode;

use clap::Parser;
use gloss_config::Config;

pub mod cli;
pub mod logging;
pub mod state;
pub mod suggest;

#[cfg(test)]
mod tests {
    mod suggest_tests;
}

use self::cli::Invocation;
use self::state::AppState;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("failed to load .env: {e}");
        }
    }

    let config = Config::new();
    logging::init(&config.log);

    let invocation = Invocation::parse();

    match run(&config, &invocation).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("gloss failed: {e:?}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &Config, invocation: &Invocation) -> anyhow::Result<()> {
    let state = AppState::new(config)?;
    let mut stdout = io::stdout().lock();
    suggest::run(&state, invocation, &mut stdout).await
}
