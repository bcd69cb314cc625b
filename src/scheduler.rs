//! Periodic full-reset job.
//!
//! Runs on its own spawned task with its own store handle, outside the
//! request-serving path. Each firing sweeps the whole store and logs a
//! bounded summary: the deleted count plus a small sample of keys, so log
//! volume stays flat regardless of store size.

use chrono::Utc;
use cron::Schedule;
use std::str::FromStr;
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::bulk;
use crate::config::Config;
use crate::store::SharedStore;

/// How many deleted keys each reset logs alongside the count.
const LOG_KEY_SAMPLE: usize = 10;

/// Spawn the reset job, or return `None` when it is disabled by config.
///
/// The cron expression was validated at config load; a parse failure here
/// is logged and disables the job rather than taking the service down.
pub fn spawn_reset_task(config: &Config, store: SharedStore) -> Option<JoinHandle<()>> {
    if !config.reset_enabled {
        tracing::info!("Periodic reset is disabled");
        return None;
    }

    let schedule = match Schedule::from_str(&config.reset_cron) {
        Ok(schedule) => schedule,
        Err(err) => {
            tracing::error!(
                "Invalid reset cron expression '{}': {}",
                config.reset_cron,
                err
            );
            return None;
        }
    };

    tracing::info!("Periodic reset scheduled: {}", config.reset_cron);
    Some(tokio::spawn(run(schedule, store)))
}

async fn run(schedule: Schedule, store: SharedStore) {
    loop {
        let Some(next) = schedule.upcoming(Utc).next() else {
            tracing::warn!("Reset schedule has no upcoming fire time, stopping task");
            return;
        };
        let wait = (next - Utc::now()).to_std().unwrap_or(Duration::ZERO);
        tokio::time::sleep(wait).await;
        reset_once(store.as_ref()).await;
    }
}

/// One firing of the reset job: sweep the store, log a bounded summary.
async fn reset_once(store: &dyn crate::store::Store) {
    match bulk::full_reset(store).await {
        Ok(keys) => {
            let sample: Vec<String> = keys
                .iter()
                .take(LOG_KEY_SAMPLE)
                .map(ToString::to_string)
                .collect();
            tracing::info!("Scheduled reset deleted {} keys: {:?}", keys.len(), sample);
        }
        Err(err) => {
            // Next firing retries the sweep; a partial delete is
            // recovered by the same enumerate-and-delete pass.
            tracing::error!("Scheduled reset failed: {}", err);
        }
    }
}
