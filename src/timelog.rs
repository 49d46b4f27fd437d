//! Work session log backed by the record store.

use crate::error::{SuiteError, SuiteResult};
use crate::store::{Loaded, RecordStore};
use crate::types::Session;
use chrono::{DateTime, Local};
use std::fmt::Write;
use tracing::info;

/// Source of the current time.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Wall clock in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Session log persisted in one record slot.
pub struct TimeLog<C: Clock = SystemClock> {
    store: RecordStore,
    slot: String,
    clock: C,
    timestamp_format: String,
}

impl<C: Clock> TimeLog<C> {
    pub fn new(
        store: RecordStore,
        slot: impl Into<String>,
        clock: C,
        timestamp_format: impl Into<String>,
    ) -> Self {
        Self {
            store,
            slot: slot.into(),
            clock,
            timestamp_format: timestamp_format.into(),
        }
    }

    /// Record the start of a session at the current time.
    pub fn start_session(&self) -> SuiteResult<Session> {
        let mut stamp = String::new();
        write!(stamp, "{}", self.clock.now().format(&self.timestamp_format)).map_err(|_| {
            SuiteError::invalid_value("timestamp_format", self.timestamp_format.clone())
        })?;
        let session = Session::started_at(stamp);

        let mut sessions = self.history().records;
        sessions.push(session.clone());
        self.store.save(&self.slot, &sessions)?;
        info!(start_time = %session.start_time, "Session started");
        Ok(session)
    }

    /// Ending sessions has never been implemented; callers get a clear signal.
    pub fn end_session(&self) -> SuiteResult<()> {
        Err(SuiteError::Unsupported("ending a session"))
    }

    /// All logged sessions in stored order.
    pub fn history(&self) -> Loaded<Session> {
        self.store.load(&self.slot)
    }
}
