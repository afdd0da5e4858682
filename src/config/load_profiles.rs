use crate::cli::Scenario;

/// Virtual user count, ramp-up and duration for one run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadProfile {
    pub users: usize,
    /// Users started per second
    pub spawn_rate: f64,
    pub run_time_secs: u64,
}

/// Get load profile by name
pub fn get_load_profile(profile: &str, scenario: Scenario) -> LoadProfile {
    match profile {
        "smoke" => smoke_profile(),
        "standard" => standard_profile(scenario),
        "stress" => stress_profile(scenario),
        _ => {
            tracing::warn!("Unknown profile '{}', using 'standard' profile", profile);
            standard_profile(scenario)
        }
    }
}

/// Single user for half a minute, to check the target responds at all
pub fn smoke_profile() -> LoadProfile {
    LoadProfile {
        users: 1,
        spawn_rate: 1.0,
        run_time_secs: 30,
    }
}

/// The regular load test:
/// - 500 users started at 40/sec
/// - 15 minutes of NormalUser journeys, or 5 minutes of AnsweringUser submissions
pub fn standard_profile(scenario: Scenario) -> LoadProfile {
    LoadProfile {
        users: 500,
        spawn_rate: 40.0,
        run_time_secs: scenario_run_time(scenario),
    }
}

/// Twice the standard user count, ramped up at 80/sec
pub fn stress_profile(scenario: Scenario) -> LoadProfile {
    LoadProfile {
        users: 1000,
        spawn_rate: 80.0,
        run_time_secs: scenario_run_time(scenario),
    }
}

fn scenario_run_time(scenario: Scenario) -> u64 {
    match scenario {
        // Journeys take minutes each because of think time
        Scenario::NormalUser => 15 * 60,
        Scenario::AnsweringUser => 5 * 60,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_profile_per_scenario() {
        let normal = get_load_profile("standard", Scenario::NormalUser);
        assert_eq!(normal.users, 500);
        assert_eq!(normal.spawn_rate, 40.0);
        assert_eq!(normal.run_time_secs, 900);

        let answering = get_load_profile("standard", Scenario::AnsweringUser);
        assert_eq!(answering.run_time_secs, 300);
    }

    #[test]
    fn test_smoke_ignores_scenario() {
        assert_eq!(
            get_load_profile("smoke", Scenario::NormalUser),
            get_load_profile("smoke", Scenario::AnsweringUser)
        );
    }

    #[test]
    fn test_unknown_profile_falls_back_to_standard() {
        assert_eq!(
            get_load_profile("nope", Scenario::NormalUser),
            standard_profile(Scenario::NormalUser)
        );
    }
}
