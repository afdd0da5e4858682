//! Runner - builds the goose attack for the selected scenario and reports afterwards

use anyhow::Result;
use goose::config::GooseConfiguration;
use goose::prelude::*;

use crate::cli::Scenario;
use crate::config::LoadSettings;
use crate::metrics::collector::MetricsCollector;
use crate::metrics::reporter;
use crate::scenarios::normal_user::JourneyConfig;
use crate::scenarios::{answering_user, normal_user};

/// Build the goose scenario for the selected user class
pub fn build_scenario(
    settings: &LoadSettings,
    collector: &MetricsCollector,
) -> goose::prelude::Scenario {
    match settings.scenario {
        Scenario::NormalUser => {
            let config = JourneyConfig {
                think_time_secs: settings.think_time_secs.clone(),
            };
            normal_user::scenario(config, collector.clone())
        }
        Scenario::AnsweringUser => answering_user::scenario(collector.clone()),
    }
}

/// Configure the engine, run the attack and print the journey summary
pub async fn run(settings: LoadSettings, verbose: bool) -> Result<()> {
    let collector = MetricsCollector::new()?;
    let hatch_rate = settings.spawn_rate.to_string();

    // The engine gets an empty configuration so it does not parse our command line
    let mut attack = GooseAttack::initialize_with_config(GooseConfiguration::default())?
        .register_scenario(build_scenario(&settings, &collector))
        .set_default(GooseDefault::Host, settings.host.as_str())?
        .set_default(GooseDefault::Users, settings.users)?
        .set_default(GooseDefault::HatchRate, hatch_rate.as_str())?
        .set_default(GooseDefault::RunTime, settings.run_time_secs as usize)?
        .set_default(GooseDefault::NoTelnet, true)?
        .set_default(GooseDefault::NoWebSocket, true)?;

    if verbose {
        attack = attack.set_default(GooseDefault::Verbose, 1usize)?;
    }
    if let Some(report_file) = &settings.report_file {
        tracing::info!("HTML report will be written to {}", report_file);
        attack = attack.set_default(GooseDefault::ReportFile, report_file.as_str())?;
    }

    let collector_clone = collector.clone();
    let interval_secs = settings.report_interval_secs;
    let progress = tokio::spawn(async move {
        reporter::start_periodic_reporter(collector_clone, interval_secs).await;
    });

    tracing::info!(
        "Starting {} attack: {} users at {}/sec for {}s",
        settings.scenario.name(),
        settings.users,
        settings.spawn_rate,
        settings.run_time_secs
    );
    let result = attack.execute().await;
    progress.abort();
    let goose_metrics = result?;

    tracing::info!("Attack finished after {}s", goose_metrics.duration);

    reporter::print_final_report(&collector);

    if let Some(path) = &settings.summary_json {
        reporter::write_summary_json(&collector, settings.scenario.name(), path)?;
        tracing::info!("Journey summary written to {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    use crate::cli::Cli;

    fn settings(args: &[&str]) -> LoadSettings {
        let mut argv = vec!["quiz-load"];
        argv.extend_from_slice(args);
        LoadSettings::from_cli(&Cli::try_parse_from(argv).expect("parse")).expect("settings")
    }

    #[test]
    fn test_build_scenario_matches_user_class() {
        let collector = MetricsCollector::new().expect("collector");

        let normal = build_scenario(&settings(&["normal-user"]), &collector);
        assert_eq!(normal.name, "NormalUser");
        assert_eq!(normal.transactions.len(), 1);

        let answering = build_scenario(&settings(&["answering-user"]), &collector);
        assert_eq!(answering.name, "AnsweringUser");
        assert_eq!(answering.transactions.len(), 1);
    }
}
