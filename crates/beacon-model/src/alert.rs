//! The alert value type and its derived properties.
//!
//! An [`Alert`] is one observation of a monitored condition. Its identity is
//! its label set (two alerts with equal labels are the same alert), and its
//! firing/resolved state is derived from the activity interval against the
//! clock on every query rather than stored as a flag.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::fingerprint::Fingerprint;
use crate::labels::{ALERT_NAME_LABEL, LabelSet};

/// The activity status of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    /// The alert's condition is ongoing, or its end is still in the future.
    Firing,
    /// The alert's end time has passed.
    Resolved,
}

impl AlertStatus {
    /// Returns the status as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Firing => "firing",
            Self::Resolved => "resolved",
        }
    }
}

impl fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single alert observation.
///
/// An `Alert` is logically immutable once published: no method takes
/// `&mut self`, and no pipeline stage may modify a published value. The
/// firing → resolved transition is observed, not performed — re-evaluating
/// [`status`](Self::status) as the clock passes `ends_at` is all it takes.
/// All methods are therefore safe to call concurrently on a shared value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// Label pairs defining the identity of the alert. Well-formed alerts
    /// carry at least the `alertname` label; this is the producer's
    /// responsibility and is not enforced here.
    pub labels: LabelSet,

    /// Auxiliary key/value information (summary, runbook links). Never
    /// participates in identity or ordering.
    pub annotations: LabelSet,

    /// When the alert's condition began. `None` means unknown or not yet
    /// set.
    #[serde(rename = "startsAt", default, skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,

    /// When the alert's condition ended. `None` means still ongoing or
    /// unknown; an alert with no end time is never resolved.
    #[serde(rename = "endsAt", default, skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,
}

impl Alert {
    /// Creates an alert with the given identity labels, no annotations, and
    /// an unset activity interval.
    #[must_use]
    pub fn new(labels: LabelSet) -> Self {
        Self {
            labels,
            annotations: LabelSet::new(),
            starts_at: None,
            ends_at: None,
        }
    }

    /// Sets the annotations.
    #[must_use]
    pub fn with_annotations(mut self, annotations: LabelSet) -> Self {
        self.annotations = annotations;
        self
    }

    /// Sets the start of the activity interval.
    #[must_use]
    pub fn starting_at(mut self, starts_at: DateTime<Utc>) -> Self {
        self.starts_at = Some(starts_at);
        self
    }

    /// Sets the end of the activity interval.
    #[must_use]
    pub fn ending_at(mut self, ends_at: DateTime<Utc>) -> Self {
        self.ends_at = Some(ends_at);
        self
    }

    /// Returns the name of the alert, the value of its `alertname` label.
    ///
    /// Returns the empty string when the label is absent.
    #[must_use]
    pub fn name(&self) -> &str {
        self.labels.get(ALERT_NAME_LABEL).unwrap_or("")
    }

    /// Returns the fingerprint of the alert's identity labels.
    ///
    /// A pure function of `labels` only: annotations and the activity
    /// interval never affect it.
    #[must_use]
    pub fn fingerprint(&self) -> Fingerprint {
        self.labels.fingerprint()
    }

    /// Returns true iff the activity interval ended at or before `now`.
    ///
    /// An alert with no end time is never resolved, regardless of its start
    /// time.
    #[must_use]
    pub fn resolved_at(&self, now: DateTime<Utc>) -> bool {
        match self.ends_at {
            None => false,
            Some(ends_at) => ends_at <= now,
        }
    }

    /// Returns true iff the activity interval ended in the past.
    ///
    /// Reads the wall clock on every call; a firing alert becomes resolved
    /// over time without any mutation. Use [`resolved_at`](Self::resolved_at)
    /// to inject the clock in tests.
    #[must_use]
    pub fn resolved(&self) -> bool {
        self.resolved_at(Utc::now())
    }

    /// Returns the status of the alert as of `now`.
    #[must_use]
    pub fn status_at(&self, now: DateTime<Utc>) -> AlertStatus {
        if self.resolved_at(now) {
            AlertStatus::Resolved
        } else {
            AlertStatus::Firing
        }
    }

    /// Returns the current status of the alert.
    #[must_use]
    pub fn status(&self) -> AlertStatus {
        self.status_at(Utc::now())
    }

    /// Checks producer-side well-formedness of the alert.
    ///
    /// None of the derived properties require a valid alert; this is an
    /// opt-in check for producers before publication.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::InvalidAlert` if the alert has no labels, no
    /// start time, or an end time before its start time.
    pub fn validate(&self) -> Result<()> {
        if self.labels.is_empty() {
            return Err(ModelError::InvalidAlert {
                reason: "at least one label pair required".to_string(),
            });
        }

        let Some(starts_at) = self.starts_at else {
            return Err(ModelError::InvalidAlert {
                reason: "start time missing".to_string(),
            });
        };

        if let Some(ends_at) = self.ends_at {
            if ends_at < starts_at {
                return Err(ModelError::InvalidAlert {
                    reason: format!("end time {ends_at} is before start time {starts_at}"),
                });
            }
        }

        Ok(())
    }

    /// The canonical total order over alerts.
    ///
    /// Compares by start time, then end time, then fingerprint, each level
    /// consulted only when the previous one ties. An unset time sorts before
    /// any real time, and the fingerprint tie-break makes the order fully
    /// deterministic even for alerts with identical intervals.
    #[must_use]
    pub fn chronological_cmp(&self, other: &Self) -> Ordering {
        self.starts_at
            .cmp(&other.starts_at)
            .then_with(|| self.ends_at.cmp(&other.ends_at))
            .then_with(|| self.fingerprint().cmp(&other.fingerprint()))
    }
}

impl fmt::Display for Alert {
    /// Compact identifier for logs: `HighCPU[abcdef0][active]`.
    ///
    /// Not a parseable format and not usable for identity comparison.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fingerprint = self.fingerprint().to_string();
        let status = if self.resolved() { "resolved" } else { "active" };
        write!(f, "{}[{}][{}]", self.name(), &fingerprint[..7], status)
    }
}

/// A sequence of alerts in shared ownership.
///
/// Alerts flow read-only through the pipeline and may be large, so sequences
/// hold `Arc`s rather than owned values.
pub type Alerts = Vec<Arc<Alert>>;

/// Sorts alerts into the canonical chronological order.
///
/// Works with [`Alert::chronological_cmp`]; consumers that need the
/// comparator directly (grouping, deduplication) should use it rather than
/// reimplementing the precedence.
pub fn sort_alerts(alerts: &mut [Arc<Alert>]) {
    alerts.sort_by(|a, b| a.chronological_cmp(b));
}
