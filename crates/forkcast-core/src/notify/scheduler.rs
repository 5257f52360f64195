use std::time::Duration;

use jiff::{civil::Date, Zoned};
use tokio::{
    task::JoinHandle,
    time::{interval, MissedTickBehavior},
};
use tokio_util::sync::CancellationToken;

use super::{reminder_due, Notifier};
use crate::{models::Reminder, Planner, Result};

/// Background task that checks for due reminders on a fixed period.
///
/// There is exactly one owner: the task lives as long as this value. Use
/// [`ReminderScheduler::stop`] to shut it down and wait for it; dropping the
/// scheduler only requests cancellation.
pub struct ReminderScheduler {
    cancel: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl ReminderScheduler {
    /// Check period used by `forkcast notify watch` unless overridden.
    pub const DEFAULT_PERIOD: Duration = Duration::from_secs(60);

    /// Starts checking against the system clock. The first check runs
    /// immediately. Must be called inside a tokio runtime.
    pub fn start<N: Notifier>(planner: Planner, notifier: N, period: Duration) -> Self {
        Self::start_with_clock(planner, notifier, period, Zoned::now)
    }

    /// Like [`ReminderScheduler::start`] with an explicit clock.
    pub fn start_with_clock<N, C>(planner: Planner, notifier: N, period: Duration, clock: C) -> Self
    where
        N: Notifier,
        C: Fn() -> Zoned + Send + 'static,
    {
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        log::info!("Starting reminder checks every {}s", period.as_secs_f64());
        let handle = tokio::spawn(async move {
            let mut timer = interval(period);
            timer.set_missed_tick_behavior(MissedTickBehavior::Skip);
            let mut last_fired: Option<Date> = None;

            loop {
                tokio::select! {
                    biased;
                    () = token.cancelled() => break,
                    _ = timer.tick() => {}
                }

                let now = clock();
                if last_fired == Some(now.date()) {
                    continue;
                }

                let due = tokio::select! {
                    biased;
                    () = token.cancelled() => break,
                    due = check(&planner, &now) => due,
                };

                match due {
                    Ok(Some(reminder)) => {
                        log::info!("Reminder due for {}: {}", reminder.day, reminder.recipe_name);
                        notifier.notify(&reminder);
                        last_fired = Some(now.date());
                    }
                    Ok(None) => log::trace!("No reminder due at {now}"),
                    Err(e) => log::warn!("Reminder check failed: {e}"),
                }
            }
            log::debug!("Reminder checks stopped");
        });

        Self {
            cancel,
            handle: Some(handle),
        }
    }

    /// Whether the background task is still running.
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Cancels the task and waits for it to finish. No check runs after this
    /// returns.
    pub async fn stop(mut self) {
        self.cancel.cancel();
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                log::warn!("Reminder task ended abnormally: {e}");
            }
        }
    }
}

impl Drop for ReminderScheduler {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn check(planner: &Planner, now: &Zoned) -> Result<Option<Reminder>> {
    let settings = planner.get_notification_settings().await?;
    if !settings.enabled {
        return Ok(None);
    }
    let schedule = planner.get_schedule().await?;
    Ok(reminder_due(&settings, now, schedule.as_ref()))
}
