use std::time::Duration;

use review_common::error::PollError;
use review_notifier::{Channel, Notifier};

use crate::client::HomeworkApi;
use crate::clock::Clock;
use crate::{parser, validator};

/// Prefix of every error notification.
pub const FAILURE_PREFIX: &str = "Failure in program operation";

/// Everything the loop remembers between cycles. Lives for the process lifetime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollState {
    /// Lower bound for the next query; advanced only by successful cycles.
    pub timestamp: i64,
    /// Last status message that was delivered.
    pub last_message: String,
    /// Last error message that was delivered.
    pub last_error_message: String,
}

/// What a single cycle ended with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// A status message was produced; `sent` is false when it was a repeat or delivery failed.
    Status { sent: bool },
    /// The cycle failed and an error message was produced.
    Failure { sent: bool },
}

/// Homework status poller.
///
/// Each cycle fetches statuses newer than the cursor, validates the response,
/// turns the first homework into a message and forwards it if it differs from
/// the previous one. Failures are reported through the same notifier with a
/// separate de-duplication slot, and the cursor stays put so the next cycle
/// repeats the same query.
pub struct HomeworkPoller<A, C, K> {
    api: A,
    notifier: Notifier<C>,
    clock: K,
    retry_period: Duration,
    state: PollState,
}

impl<A, C, K> HomeworkPoller<A, C, K>
where
    A: HomeworkApi,
    C: Channel,
    K: Clock,
{
    pub fn new(api: A, notifier: Notifier<C>, clock: K, retry_period: Duration) -> Self {
        let state = PollState {
            timestamp: clock.now(),
            ..PollState::default()
        };
        Self {
            api,
            notifier,
            clock,
            retry_period,
            state,
        }
    }

    pub fn state(&self) -> &PollState {
        &self.state
    }

    pub fn notifier(&self) -> &Notifier<C> {
        &self.notifier
    }

    pub fn clock(&self) -> &K {
        &self.clock
    }

    /// Poll forever: one cycle, then a fixed pause. Never returns.
    pub async fn run(&mut self) {
        tracing::info!(
            from_date = self.state.timestamp,
            retry_period_secs = self.retry_period.as_secs(),
            "Homework poller started"
        );

        loop {
            self.tick().await;
        }
    }

    /// One cycle followed by the retry pause.
    pub async fn tick(&mut self) -> CycleOutcome {
        let outcome = self.run_cycle().await;
        tracing::debug!(
            ?outcome,
            sleep_secs = self.retry_period.as_secs(),
            "Cycle finished, sleeping"
        );
        self.clock.sleep(self.retry_period).await;
        outcome
    }

    /// Run one cycle without sleeping. Failures are reported, never returned.
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        match self.poll_once().await {
            Ok(sent) => CycleOutcome::Status { sent },
            Err(e) => {
                let sent = self.report_failure(&e).await;
                CycleOutcome::Failure { sent }
            }
        }
    }

    /// Fetch, validate, parse and notify. The cursor advances only when all
    /// steps before notification succeed.
    async fn poll_once(&mut self) -> Result<bool, PollError> {
        let raw = self.api.fetch(self.state.timestamp).await?;
        let response = validator::validate(&raw)?;
        let message = parser::parse_status(response.latest())?;

        let sent = self
            .notifier
            .notify_if_changed(&message, &mut self.state.last_message)
            .await;
        if !sent {
            tracing::debug!(from_date = self.state.timestamp, "No new homework status");
        }

        tracing::debug!(
            from = self.state.timestamp,
            to = response.current_date,
            "Advancing cursor"
        );
        self.state.timestamp = response.current_date;
        Ok(sent)
    }

    async fn report_failure(&mut self, error: &PollError) -> bool {
        match error {
            PollError::ConnectionFailure { .. } | PollError::HttpStatusFailure { .. } => {
                tracing::warn!(
                    from_date = self.state.timestamp,
                    error = %error,
                    "Homework API request failed"
                );
            }
            PollError::InvalidBody { .. } | PollError::MalformedResponse { .. } => {
                tracing::warn!(
                    from_date = self.state.timestamp,
                    error = %error,
                    "Homework API returned an unusable response"
                );
            }
            PollError::MissingField { .. } | PollError::UnknownStatus { .. } => {
                tracing::warn!(
                    from_date = self.state.timestamp,
                    error = %error,
                    "Could not interpret homework record"
                );
            }
        }

        let message = format!("{FAILURE_PREFIX}: {error}");
        self.notifier
            .notify_if_changed(&message, &mut self.state.last_error_message)
            .await
    }
}
