use anyhow::Result;
use clap::Parser;

use quiz_load::cli::Cli;
use quiz_load::config::LoadSettings;
use quiz_load::runner;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let settings = LoadSettings::from_cli(&cli)?;

    tracing::info!("Quiz Load Test Starting...");
    tracing::info!("Host: {}", settings.host);
    tracing::info!("Scenario: {}", settings.scenario.name());
    tracing::info!("Profile: {}", cli.profile);
    tracing::info!("  Users: {}", settings.users);
    tracing::info!("  Spawn Rate: {}/sec", settings.spawn_rate);
    tracing::info!("  Run Time: {}s", settings.run_time_secs);
    if settings.scenario == quiz_load::cli::Scenario::NormalUser {
        tracing::info!(
            "  Think Time: {}-{}s",
            settings.think_time_secs.start(),
            settings.think_time_secs.end()
        );
    }

    runner::run(settings, cli.verbose).await?;

    tracing::info!("Load test complete");
    Ok(())
}
