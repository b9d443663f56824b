//! Usage tracking for validator callers.
//!
//! Recorders are constructed explicitly and handed to a `TrackedValidator`.
//! The validator never sees them, so tracking cannot change a result.

use crate::identity_validator::IdentityValidator;
use crate::models::{ValidationIssueType, ValidationResult};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

pub trait UsageRecorder: Send + Sync {
    fn record(&self, outcome: &ValidationResult, elapsed: Duration);
}

impl<R: UsageRecorder + ?Sized> UsageRecorder for Arc<R> {
    fn record(&self, outcome: &ValidationResult, elapsed: Duration) {
        (**self).record(outcome, elapsed)
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRecorder;

impl UsageRecorder for NoopRecorder {
    fn record(&self, _outcome: &ValidationResult, _elapsed: Duration) {}
}

/// In-process counters: call totals, issue counts and cumulative latency.
#[derive(Debug, Default)]
pub struct UsageStats {
    total: AtomicU64,
    valid: AtomicU64,
    issues: [AtomicU64; 5],
    latency_micros: AtomicU64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsageSnapshot {
    pub total: u64,
    pub valid: u64,
    pub invalid: u64,
    pub issues: BTreeMap<&'static str, u64>,
    pub mean_latency_micros: u64,
}

impl UsageStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> UsageSnapshot {
        let total = self.total.load(Ordering::Relaxed);
        let valid = self.valid.load(Ordering::Relaxed);
        let latency = self.latency_micros.load(Ordering::Relaxed);

        let issues = ValidationIssueType::ALL
            .iter()
            .map(|t| (t.label(), self.issues[slot(*t)].load(Ordering::Relaxed)))
            .filter(|(_, count)| *count > 0)
            .collect();

        UsageSnapshot {
            total,
            valid,
            invalid: total.saturating_sub(valid),
            issues,
            mean_latency_micros: if total == 0 { 0 } else { latency / total },
        }
    }
}

impl UsageRecorder for UsageStats {
    fn record(&self, outcome: &ValidationResult, elapsed: Duration) {
        self.total.fetch_add(1, Ordering::Relaxed);
        if outcome.is_valid() {
            self.valid.fetch_add(1, Ordering::Relaxed);
        }
        for issue in outcome.errors() {
            self.issues[slot(issue.issue_type)].fetch_add(1, Ordering::Relaxed);
        }
        let micros = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);
        self.latency_micros.fetch_add(micros, Ordering::Relaxed);
    }
}

fn slot(issue_type: ValidationIssueType) -> usize {
    match issue_type {
        ValidationIssueType::Length => 0,
        ValidationIssueType::Charset => 1,
        ValidationIssueType::Date => 2,
        ValidationIssueType::Citizenship => 3,
        ValidationIssueType::Checksum => 4,
    }
}

/// Times each validation and reports it to the recorder. Results are passed
/// through untouched.
pub struct TrackedValidator<R: UsageRecorder> {
    validator: IdentityValidator,
    recorder: R,
}

impl<R: UsageRecorder> TrackedValidator<R> {
    pub fn new(validator: IdentityValidator, recorder: R) -> Self {
        TrackedValidator {
            validator,
            recorder,
        }
    }

    pub fn validate(&self, raw: &str) -> ValidationResult {
        let start_time = Instant::now();
        let result = self.validator.validate(raw);
        self.recorder.record(&result, start_time.elapsed());
        result
    }

    pub fn recorder(&self) -> &R {
        &self.recorder
    }
}
