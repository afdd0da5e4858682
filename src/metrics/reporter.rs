//! Console reporter for journey metrics

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tokio::time::{interval, Duration, MissedTickBehavior};

use super::collector::MetricsCollector;

/// Log a progress line every N seconds until the task is aborted
pub async fn start_periodic_reporter(collector: MetricsCollector, interval_secs: u64) {
    let mut ticker = interval(Duration::from_secs(interval_secs.max(1)));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // First tick fires immediately
    ticker.tick().await;

    loop {
        ticker.tick().await;
        log_progress(&collector);
    }
}

pub fn log_progress(collector: &MetricsCollector) {
    let metrics = collector.get_snapshot();
    tracing::info!(
        elapsed = collector.elapsed_seconds(),
        journeys_started = metrics.journey.started,
        journeys_in_flight = metrics.journey.in_flight,
        journeys_completed = metrics.journey.completed,
        journeys_failed = metrics.journey.failed,
        answer_submissions = metrics.answers.submissions,
        questions_answered = metrics.answers.questions_answered,
        "progress"
    );
}

/// Print final summary report
pub fn print_final_report(collector: &MetricsCollector) {
    let metrics = collector.get_snapshot();
    let elapsed = collector.elapsed_seconds();
    let durations = collector.get_journey_duration_percentiles();
    let sizes = collector.get_payload_size_percentiles();

    println!("\n╔════════════════════════════════════════════════════════════════╗");
    println!("║                   QUIZ LOAD TEST SUMMARY                       ║");
    println!("╚════════════════════════════════════════════════════════════════╝");

    if metrics.journey.started > 0 {
        println!("\n🧭 JOURNEYS");
        println!("   Total Started:        {:>10}", metrics.journey.started);
        println!("   Total Completed:      {:>10}", metrics.journey.completed);
        println!("   Total Failed:         {:>10}", metrics.journey.failed);
        println!("   Unfinished:           {:>10}", metrics.journey.in_flight);

        let finished = metrics.journey.completed + metrics.journey.failed;
        if finished > 0 {
            let success_rate = (metrics.journey.completed as f64 / finished as f64) * 100.0;
            println!("   Success Rate:         {:>10.2}%", success_rate);
        }

        if durations.count > 0 {
            println!("\n📈 JOURNEY DURATION");
            println!("   Min:                  {:>10} ms", durations.min);
            println!("   P50 (Median):         {:>10} ms", durations.p50);
            println!("   P95:                  {:>10} ms", durations.p95);
            println!("   P99:                  {:>10} ms", durations.p99);
            println!("   Max:                  {:>10} ms", durations.max);
            println!("   Mean:                 {:>10.2} ms", durations.mean);
        }
    }

    println!("\n📝 ANSWERS");
    println!("   Submissions:          {:>10}", metrics.answers.submissions);
    println!("   Questions Answered:   {:>10}", metrics.answers.questions_answered);
    println!("   Finish Requests:      {:>10}", metrics.answers.finishes);

    if elapsed > 0 {
        let throughput = metrics.answers.submissions as f64 / elapsed as f64;
        println!("   Throughput:           {:>10.2} submissions/sec", throughput);
    }

    if sizes.count > 0 {
        println!("\n📦 PAYLOAD SIZE (questions)");
        println!("   Min:                  {:>10}", sizes.min);
        println!("   P50 (Median):         {:>10}", sizes.p50);
        println!("   Max:                  {:>10}", sizes.max);
        println!("   Mean:                 {:>10.2}", sizes.mean);
    }

    println!("\n⏱️  Test Duration: {} seconds", elapsed);
    println!("════════════════════════════════════════════════════════════════\n");

    let _ = io::stdout().flush();
}

/// Write the final summary as pretty-printed JSON
pub fn write_summary_json(
    collector: &MetricsCollector,
    scenario: &str,
    path: &Path,
) -> anyhow::Result<()> {
    let summary = collector.summary(scenario);
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, &summary)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
