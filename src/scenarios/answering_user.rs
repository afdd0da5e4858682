//! AnsweringUser scenario - nothing but answer submissions, as fast as the engine allows

use std::sync::Arc;

use goose::prelude::*;

use super::ANSWERS_PATH;
use crate::metrics::collector::MetricsCollector;
use crate::payload::AnswerPayload;

/// Post one random answer set covering anywhere from none to all questions
pub async fn submit_random_answers(
    user: &mut GooseUser,
    collector: &MetricsCollector,
) -> TransactionResult {
    let payload = {
        let mut rng = rand::thread_rng();
        AnswerPayload::random(&mut rng)
    };

    let goose = user.post_form(ANSWERS_PATH, &payload.form_fields()).await?;
    goose.response.map_err(TransactionError::from)?;
    collector.answers_submitted(payload.len());
    Ok(())
}

/// The `AnsweringUser` goose scenario
pub fn scenario(collector: MetricsCollector) -> Scenario {
    let post_answer: TransactionFunction = Arc::new(move |user| {
        let collector = collector.clone();
        Box::pin(async move { submit_random_answers(user, &collector).await })
    });

    scenario!("AnsweringUser")
        .register_transaction(Transaction::new(post_answer).set_name("post_answer"))
}
