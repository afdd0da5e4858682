//! Metric types

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct JourneyMetrics {
    pub started: usize,
    pub completed: usize,
    pub failed: usize,
    pub in_flight: usize,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AnswerMetrics {
    /// `POST /odpowiedzi` requests sent
    pub submissions: usize,
    /// Sum of questions over all submissions
    pub questions_answered: usize,
    /// `POST /zakoncz` requests sent
    pub finishes: usize,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TestMetrics {
    pub journey: JourneyMetrics,
    pub answers: AnswerMetrics,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LatencyStats {
    pub min: u64,
    pub p50: u64,
    pub p95: u64,
    pub p99: u64,
    pub max: u64,
    pub mean: f64,
    pub count: u64,
}

/// Everything the final report shows, in one serializable value
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub scenario: String,
    pub elapsed_seconds: u64,
    pub metrics: TestMetrics,
    pub journey_duration_ms: LatencyStats,
    pub payload_size: LatencyStats,
}
