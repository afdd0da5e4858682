use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::parse_run_time;

/// Quiz Load Testing Tool
#[derive(Parser, Debug, Clone)]
#[command(name = "quiz-load")]
#[command(about = "Load testing tool for the quiz web application")]
#[command(version)]
pub struct Cli {
    /// Base URL of the quiz application
    #[arg(long, default_value = "http://localhost:8088", env = "QUIZ_LOAD_HOST")]
    pub host: String,

    /// Load profile: smoke, standard, stress
    #[arg(
        long,
        default_value = "standard",
        value_parser = ["smoke", "standard", "stress"]
    )]
    pub profile: String,

    /// Number of concurrent virtual users (overrides the profile)
    #[arg(short, long)]
    pub users: Option<usize>,

    /// Users started per second (overrides the profile)
    #[arg(short = 'r', long)]
    pub spawn_rate: Option<f64>,

    /// Test duration, e.g. 300, 90s, 15m, 1h30m (overrides the profile)
    #[arg(short = 't', long, value_parser = parse_run_time)]
    pub run_time: Option<u64>,

    /// Shortest think time between journey steps, in seconds
    #[arg(long, default_value = "1")]
    pub min_think: u64,

    /// Longest think time between journey steps, in seconds
    #[arg(long, default_value = "30")]
    pub max_think: u64,

    /// Write the engine's HTML report to this file
    #[arg(long)]
    pub report_file: Option<String>,

    /// Write the journey summary as JSON to this file
    #[arg(long)]
    pub summary_json: Option<PathBuf>,

    /// Progress logging interval in seconds
    #[arg(long, default_value = "30")]
    pub report_interval: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub scenario: Scenario,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// Browse the quiz part by part, answer and finish
    #[command(alias = "NormalUser")]
    NormalUser,

    /// Submit random answer sets as fast as possible
    #[command(alias = "AnsweringUser")]
    AnsweringUser,
}

impl Scenario {
    /// Scenario name as shown in the engine's metrics
    pub fn name(self) -> &'static str {
        match self {
            Scenario::NormalUser => "NormalUser",
            Scenario::AnsweringUser => "AnsweringUser",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["quiz-load", "normal-user"]).expect("parse");
        assert_eq!(cli.host, "http://localhost:8088");
        assert_eq!(cli.profile, "standard");
        assert_eq!(cli.users, None);
        assert_eq!(cli.min_think, 1);
        assert_eq!(cli.max_think, 30);
        assert_eq!(cli.scenario, Scenario::NormalUser);
    }

    #[test]
    fn test_locust_style_flags() {
        let cli = Cli::try_parse_from([
            "quiz-load",
            "--host",
            "http://quiz.test:8088",
            "-u",
            "500",
            "-r",
            "40.0",
            "-t",
            "15m",
            "--report-file",
            "/tmp/report.html",
            "AnsweringUser",
        ])
        .expect("parse");
        assert_eq!(cli.users, Some(500));
        assert_eq!(cli.spawn_rate, Some(40.0));
        assert_eq!(cli.run_time, Some(900));
        assert_eq!(cli.report_file.as_deref(), Some("/tmp/report.html"));
        assert_eq!(cli.scenario, Scenario::AnsweringUser);
    }

    #[test]
    fn test_rejects_unknown_profile() {
        let result = Cli::try_parse_from(["quiz-load", "--profile", "huge", "normal-user"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_requires_scenario() {
        assert!(Cli::try_parse_from(["quiz-load"]).is_err());
    }
}
