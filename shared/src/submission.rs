#[cfg(test)]
use std::collections::HashMap;
use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone};
use serde::Serialize;

use crate::constants::TIMESTAMP_FORMAT;
use crate::error::DrawError;
use crate::fingerprint::Fingerprint;

/// JSON body posted to the form endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionPayload {
    pub prize: String,
    pub uid: String,
    pub time: String,
}

impl SubmissionPayload {
    pub fn new(prize: impl Into<String>, fingerprint: &Fingerprint, time: impl Into<String>) -> Self {
        Self {
            prize: prize.into(),
            uid: fingerprint.as_str().to_string(),
            time: time.into(),
        }
    }
}

pub fn format_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Sink that stores a draw result somewhere the organisers can read it.
/// Only success or failure matters; response bodies are ignored.
#[async_trait(?Send)]
pub trait PrizeRecorder {
    async fn record(&self, payload: &SubmissionPayload) -> Result<(), DrawError>;
}

/// Map an HTTP status from the form endpoint onto a recording outcome.
/// Anything outside 2xx means the result was not stored.
pub fn check_status(status: u16) -> Result<(), DrawError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(DrawError::SubmissionFailed(format!("Error status: {}", status)))
    }
}

/// Durable per-browser record of who already took part
pub trait ParticipationStore {
    fn has_participated(&self, fingerprint: &Fingerprint) -> Result<bool, DrawError>;
    fn mark_participated(&mut self, fingerprint: &Fingerprint) -> Result<(), DrawError>;
}

/// In-memory store for tests
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }
}

#[cfg(test)]
impl ParticipationStore for MemoryStore {
    fn has_participated(&self, fingerprint: &Fingerprint) -> Result<bool, DrawError> {
        Ok(self.entries.contains_key(&fingerprint.participation_key()))
    }

    fn mark_participated(&mut self, fingerprint: &Fingerprint) -> Result<(), DrawError> {
        self.insert(fingerprint.participation_key(), crate::constants::PARTICIPATION_FLAG_VALUE);
        Ok(())
    }
}
