//! NormalUser scenario - a person working through the quiz part by part
//!
//! A session visits the landing page, then up to six part pages. After each
//! part it posts a growing random share of the catalog as answers and returns
//! to the landing page. It ends with a finish request and one more landing
//! page visit. Think time separates the page visits.
//!
//! The whole session is drawn up front as a [`JourneyPlan`] so the random
//! draws never live across an `.await`.

use std::ops::RangeInclusive;
use std::sync::Arc;
use std::time::{Duration, Instant};

use goose::prelude::*;
use rand::Rng;

use super::{part_path, ANSWERS_PATH, FINISH_PATH, LANDING_PATH};
use crate::catalog::question_count;
use crate::metrics::collector::MetricsCollector;
use crate::payload::AnswerPayload;

/// Number of parts the quiz is split into
pub const PARTS: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneyConfig {
    /// Pause between steps, in whole seconds
    pub think_time_secs: RangeInclusive<u64>,
}

impl Default for JourneyConfig {
    fn default() -> Self {
        Self {
            think_time_secs: 1..=30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// `GET` a page
    Visit(String),
    /// Sleep before the next step
    Think(Duration),
    /// Form `POST` of answers
    SubmitAnswers(AnswerPayload),
    /// Empty form `POST` ending the quiz
    Finish,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneyPlan {
    steps: Vec<Step>,
}

impl JourneyPlan {
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of part pages this session visits
    pub fn part_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| matches!(step, Step::SubmitAnswers(_)))
            .count()
    }

    pub fn visits_to(&self, path: &str) -> usize {
        self.steps
            .iter()
            .filter(|step| matches!(step, Step::Visit(p) if p == path))
            .count()
    }

    pub fn finish_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| matches!(step, Step::Finish))
            .count()
    }

    /// Answer payloads in submission order
    pub fn answer_payloads(&self) -> impl Iterator<Item = &AnswerPayload> {
        self.steps.iter().filter_map(|step| match step {
            Step::SubmitAnswers(payload) => Some(payload),
            _ => None,
        })
    }

    pub fn total_think_time(&self) -> Duration {
        self.steps
            .iter()
            .filter_map(|step| match step {
                Step::Think(duration) => Some(*duration),
                _ => None,
            })
            .sum()
    }
}

/// Upper bound on questions answered after `part`: `floor(part / PARTS * N)`
pub fn answer_bound(part: usize) -> usize {
    part.min(PARTS) * question_count() / PARTS
}

/// Draw one session's steps
pub fn plan_journey<R: Rng + ?Sized>(rng: &mut R, config: &JourneyConfig) -> JourneyPlan {
    let mut steps = vec![
        Step::Visit(LANDING_PATH.to_string()),
        think(rng, config),
    ];

    let parts = rng.gen_range(1..=PARTS);
    for part in 1..=parts {
        steps.push(Step::Visit(part_path(part)));
        steps.push(think(rng, config));
        let size = rng.gen_range(0..=answer_bound(part));
        steps.push(Step::SubmitAnswers(AnswerPayload::random_subset(rng, size)));
        steps.push(Step::Visit(LANDING_PATH.to_string()));
    }

    steps.push(think(rng, config));
    steps.push(Step::Finish);
    steps.push(Step::Visit(LANDING_PATH.to_string()));

    JourneyPlan { steps }
}

fn think<R: Rng + ?Sized>(rng: &mut R, config: &JourneyConfig) -> Step {
    let range = &config.think_time_secs;
    let secs = if range.is_empty() {
        *range.start()
    } else {
        rng.gen_range(range.clone())
    };
    Step::Think(Duration::from_secs(secs))
}

/// Execute a planned session, stopping at the first request that gets no response.
///
/// HTTP error statuses are not checked; they are already counted by the engine.
pub async fn run_journey(
    user: &mut GooseUser,
    plan: &JourneyPlan,
    collector: &MetricsCollector,
) -> TransactionResult {
    for step in plan.steps() {
        match step {
            Step::Visit(path) => {
                let goose = user.get(path).await?;
                goose.response.map_err(TransactionError::from)?;
            }
            Step::Think(duration) => tokio::time::sleep(*duration).await,
            Step::SubmitAnswers(payload) => {
                let goose = user.post_form(ANSWERS_PATH, &payload.form_fields()).await?;
                goose.response.map_err(TransactionError::from)?;
                collector.answers_submitted(payload.len());
            }
            Step::Finish => {
                let goose = user
                    .post_form(FINISH_PATH, &AnswerPayload::empty().form_fields())
                    .await?;
                goose.response.map_err(TransactionError::from)?;
                collector.finish_submitted();
            }
        }
    }
    Ok(())
}

async fn user_journey(
    user: &mut GooseUser,
    config: &JourneyConfig,
    collector: &MetricsCollector,
) -> TransactionResult {
    let plan = {
        let mut rng = rand::thread_rng();
        plan_journey(&mut rng, config)
    };
    tracing::debug!(
        user = user.weighted_users_index,
        parts = plan.part_count(),
        think_secs = plan.total_think_time().as_secs(),
        "Starting journey"
    );

    collector.journey_started();
    let start = Instant::now();
    let result = run_journey(user, &plan, collector).await;
    let duration_ms = start.elapsed().as_millis() as u64;

    match &result {
        Ok(()) => collector.journey_completed(duration_ms),
        Err(e) => {
            tracing::warn!("Journey of user {} aborted: {}", user.weighted_users_index, e);
            collector.journey_failed(duration_ms);
        }
    }
    result
}

/// The `NormalUser` goose scenario
pub fn scenario(config: JourneyConfig, collector: MetricsCollector) -> Scenario {
    let config = Arc::new(config);
    let journey: TransactionFunction = Arc::new(move |user| {
        let config = Arc::clone(&config);
        let collector = collector.clone();
        Box::pin(async move { user_journey(user, &config, &collector).await })
    });

    scenario!("NormalUser")
        .register_transaction(Transaction::new(journey).set_name("user_journey"))
}
