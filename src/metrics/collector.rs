//! Metrics collector - thread-safe journey and payload tracking shared by all users

use super::types::{LatencyStats, RunSummary, TestMetrics};
use hdrhistogram::{CreationError, Histogram};
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Instant;

#[derive(Clone)]
pub struct MetricsCollector {
    metrics: Arc<RwLock<TestMetrics>>,
    journey_durations: Arc<RwLock<Histogram<u64>>>,
    payload_sizes: Arc<RwLock<Histogram<u64>>>,
    start_time: Instant,
}

impl MetricsCollector {
    pub fn new() -> Result<Self, CreationError> {
        // 3 significant digits, auto-resizing
        let journey_hist = Histogram::new(3)?;
        let payload_hist = Histogram::new(3)?;

        Ok(Self {
            metrics: Arc::new(RwLock::new(TestMetrics::default())),
            journey_durations: Arc::new(RwLock::new(journey_hist)),
            payload_sizes: Arc::new(RwLock::new(payload_hist)),
            start_time: Instant::now(),
        })
    }

    pub fn journey_started(&self) {
        let mut metrics = self.metrics.write();
        metrics.journey.started += 1;
        metrics.journey.in_flight += 1;
    }

    pub fn journey_completed(&self, duration_ms: u64) {
        self.journey_finished(duration_ms, false);
    }

    /// Failed journeys still count towards the duration distribution
    pub fn journey_failed(&self, duration_ms: u64) {
        self.journey_finished(duration_ms, true);
    }

    fn journey_finished(&self, duration_ms: u64, failed: bool) {
        let mut metrics = self.metrics.write();
        if failed {
            metrics.journey.failed += 1;
        } else {
            metrics.journey.completed += 1;
        }
        metrics.journey.in_flight = metrics.journey.in_flight.saturating_sub(1);
        drop(metrics);

        let _ = self.journey_durations.write().record(duration_ms);
    }

    pub fn answers_submitted(&self, questions: usize) {
        let mut metrics = self.metrics.write();
        metrics.answers.submissions += 1;
        metrics.answers.questions_answered += questions;
        drop(metrics);

        let _ = self.payload_sizes.write().record(questions as u64);
    }

    pub fn finish_submitted(&self) {
        self.metrics.write().answers.finishes += 1;
    }

    pub fn get_snapshot(&self) -> TestMetrics {
        self.metrics.read().clone()
    }

    pub fn get_journey_duration_percentiles(&self) -> LatencyStats {
        stats(&self.journey_durations.read())
    }

    pub fn get_payload_size_percentiles(&self) -> LatencyStats {
        stats(&self.payload_sizes.read())
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    pub fn summary(&self, scenario: &str) -> RunSummary {
        RunSummary {
            scenario: scenario.to_string(),
            elapsed_seconds: self.elapsed_seconds(),
            metrics: self.get_snapshot(),
            journey_duration_ms: self.get_journey_duration_percentiles(),
            payload_size: self.get_payload_size_percentiles(),
        }
    }
}

fn stats(hist: &Histogram<u64>) -> LatencyStats {
    LatencyStats {
        min: hist.min(),
        p50: hist.value_at_quantile(0.50),
        p95: hist.value_at_quantile(0.95),
        p99: hist.value_at_quantile(0.99),
        max: hist.max(),
        mean: hist.mean(),
        count: hist.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_journey_counters() {
        let collector = MetricsCollector::new().expect("collector");
        collector.journey_started();
        collector.journey_started();
        collector.journey_started();
        collector.journey_completed(1_200);
        collector.journey_failed(300);

        let snapshot = collector.get_snapshot();
        assert_eq!(snapshot.journey.started, 3);
        assert_eq!(snapshot.journey.completed, 1);
        assert_eq!(snapshot.journey.failed, 1);
        assert_eq!(snapshot.journey.in_flight, 1);

        let durations = collector.get_journey_duration_percentiles();
        assert_eq!(durations.count, 2);
        assert_eq!(durations.min, 300);
    }

    #[test]
    fn test_in_flight_never_underflows() {
        let collector = MetricsCollector::new().expect("collector");
        collector.journey_completed(10);
        assert_eq!(collector.get_snapshot().journey.in_flight, 0);
    }

    #[test]
    fn test_answer_counters_and_sizes() {
        let collector = MetricsCollector::new().expect("collector");
        collector.answers_submitted(0);
        collector.answers_submitted(10);
        collector.answers_submitted(50);
        collector.finish_submitted();

        let snapshot = collector.get_snapshot();
        assert_eq!(snapshot.answers.submissions, 3);
        assert_eq!(snapshot.answers.questions_answered, 60);
        assert_eq!(snapshot.answers.finishes, 1);

        let sizes = collector.get_payload_size_percentiles();
        assert_eq!(sizes.count, 3);
        assert_eq!(sizes.min, 0);
        assert!((sizes.mean - 20.0).abs() < 0.5);
    }

    #[test]
    fn test_histograms_match_counters_under_contention() {
        let collector = MetricsCollector::new().expect("collector");
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let collector = collector.clone();
                std::thread::spawn(move || {
                    for i in 0..500u64 {
                        collector.journey_started();
                        if (i + t) % 3 == 0 {
                            collector.journey_failed(i);
                        } else {
                            collector.journey_completed(i);
                        }
                        collector.answers_submitted((i % 40) as usize);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("worker thread");
        }

        let snapshot = collector.get_snapshot();
        assert_eq!(snapshot.journey.started, 4000);
        assert_eq!(snapshot.journey.in_flight, 0);
        let finished = (snapshot.journey.completed + snapshot.journey.failed) as u64;
        assert_eq!(collector.get_journey_duration_percentiles().count, finished);
        assert_eq!(
            collector.get_payload_size_percentiles().count,
            snapshot.answers.submissions as u64
        );
    }

    #[test]
    fn test_clones_share_state() {
        let collector = MetricsCollector::new().expect("collector");
        let clone = collector.clone();
        clone.answers_submitted(5);
        assert_eq!(collector.get_snapshot().answers.submissions, 1);
    }

    #[test]
    fn test_summary_serializes() {
        let collector = MetricsCollector::new().expect("collector");
        collector.answers_submitted(4);
        let summary = collector.summary("AnsweringUser");
        let json = serde_json::to_value(&summary).expect("serialize");
        assert_eq!(json["scenario"], "AnsweringUser");
        assert_eq!(json["metrics"]["answers"]["submissions"], 1);
        assert_eq!(json["payload_size"]["count"], 1);
    }
}
