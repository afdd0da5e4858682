//! Run configuration: command line values resolved against a load profile

pub mod load_profiles;

use std::ops::RangeInclusive;
use std::path::PathBuf;

use thiserror::Error;

use crate::cli::{Cli, Scenario};
use load_profiles::get_load_profile;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("host must be an http:// or https:// URL, got `{0}`")]
    InvalidHost(String),
    #[error("at least one user is required")]
    NoUsers,
    #[error("spawn rate must be a positive number, got {0}")]
    InvalidSpawnRate(f64),
    #[error("run time must be at least one second")]
    NoRunTime,
    #[error("invalid run time `{0}`, expected e.g. 300, 90s, 15m or 1h30m")]
    InvalidRunTime(String),
    #[error("minimum think time {min}s is greater than maximum {max}s")]
    ThinkTimeRange { min: u64, max: u64 },
}

/// Fully resolved settings for one load test run
#[derive(Debug, Clone, PartialEq)]
pub struct LoadSettings {
    pub scenario: Scenario,
    pub host: String,
    pub users: usize,
    pub spawn_rate: f64,
    pub run_time_secs: u64,
    pub think_time_secs: RangeInclusive<u64>,
    pub report_file: Option<String>,
    pub summary_json: Option<PathBuf>,
    pub report_interval_secs: u64,
}

impl LoadSettings {
    /// Apply command line overrides on top of the selected profile
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let profile = get_load_profile(&cli.profile, cli.scenario);
        let settings = Self {
            scenario: cli.scenario,
            host: cli.host.trim_end_matches('/').to_string(),
            users: cli.users.unwrap_or(profile.users),
            spawn_rate: cli.spawn_rate.unwrap_or(profile.spawn_rate),
            run_time_secs: cli.run_time.unwrap_or(profile.run_time_secs),
            think_time_secs: cli.min_think..=cli.max_think,
            report_file: cli.report_file.clone(),
            summary_json: cli.summary_json.clone(),
            report_interval_secs: cli.report_interval,
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.host.starts_with("http://") || self.host.starts_with("https://")) {
            return Err(ConfigError::InvalidHost(self.host.clone()));
        }
        if self.users == 0 {
            return Err(ConfigError::NoUsers);
        }
        if !self.spawn_rate.is_finite() || self.spawn_rate <= 0.0 {
            return Err(ConfigError::InvalidSpawnRate(self.spawn_rate));
        }
        if self.run_time_secs == 0 {
            return Err(ConfigError::NoRunTime);
        }
        let (min, max) = (*self.think_time_secs.start(), *self.think_time_secs.end());
        if min > max {
            return Err(ConfigError::ThinkTimeRange { min, max });
        }
        Ok(())
    }
}

/// Parse a duration such as `300`, `90s`, `15m` or `1h30m` into seconds.
///
/// Trailing digits without a unit count as seconds.
pub fn parse_run_time(value: &str) -> Result<u64, ConfigError> {
    let invalid = || ConfigError::InvalidRunTime(value.to_string());
    let value_trimmed = value.trim();
    if value_trimmed.is_empty() {
        return Err(invalid());
    }

    let mut total: u64 = 0;
    let mut digits = String::new();
    for c in value_trimmed.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }
        let multiplier = match c {
            'h' => 3600,
            'm' => 60,
            's' => 1,
            _ => return Err(invalid()),
        };
        if digits.is_empty() {
            return Err(invalid());
        }
        let amount: u64 = digits.parse().map_err(|_| invalid())?;
        total = amount
            .checked_mul(multiplier)
            .and_then(|secs| total.checked_add(secs))
            .ok_or_else(invalid)?;
        digits.clear();
    }
    if !digits.is_empty() {
        let secs: u64 = digits.parse().map_err(|_| invalid())?;
        total = total.checked_add(secs).ok_or_else(invalid)?;
    }
    Ok(total)
}
