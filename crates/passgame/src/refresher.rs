//! Periodic challenge refresh.

use std::time::Duration;

use passgame_rules::ChallengeBoard;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::debug;

/// Refreshes every challenge on `board` now and then once per `period`.
///
/// Must be called inside a Tokio runtime. A zero period is raised to one
/// second. Abort the returned handle to stop refreshing.
pub fn spawn_refresher(board: ChallengeBoard, period: Duration) -> JoinHandle<()> {
    let period = period.max(Duration::from_secs(1));
    tokio::spawn(async move {
        let mut ticker = time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            board.refresh_all();
            debug!(event = "challenges_refreshed", next_in_secs = period.as_secs());
        }
    })
}
