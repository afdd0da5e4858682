//! Scenarios module
//!
//! One goose scenario per simulated user class

pub mod answering_user;
pub mod normal_user;

/// Landing page, also the redirect target of every form post
pub const LANDING_PATH: &str = "/";
/// Answer submission endpoint
pub const ANSWERS_PATH: &str = "/odpowiedzi";
/// Marks the quiz as finished for the session
pub const FINISH_PATH: &str = "/zakoncz";

/// Path of one quiz part page, numbered from 1
pub fn part_path(part: usize) -> String {
    format!("/czesc-{part}")
}

#[cfg(test)]
pub(crate) mod test_support {
    use goose::config::GooseConfiguration;
    use goose::prelude::*;
    use httpmock::MockServer;
    use url::Url;

    /// Nothing listens on port 1, so every request fails to connect
    pub(crate) const UNREACHABLE_HOST: &str = "http://127.0.0.1:1";

    /// A standalone goose user pointed at the mock server
    pub(crate) fn single_user(server: &MockServer) -> GooseUser {
        user_at(&server.base_url())
    }

    /// A standalone goose user pointed at any base URL
    pub(crate) fn user_at(base_url: &str) -> GooseUser {
        let mut configuration = GooseConfiguration::default();
        configuration.co_mitigation = Some(GooseCoordinatedOmissionMitigation::Average);
        let base_url = Url::parse(base_url).expect("base url");
        GooseUser::single(base_url, &configuration).expect("goose user")
    }
}
