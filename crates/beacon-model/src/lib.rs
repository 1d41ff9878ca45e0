//! Core alert data model for the Beacon alert routing system.
//!
//! `beacon-model` defines the atomic unit of data the routing pipeline moves
//! around: the [`Alert`], its content-derived identity, its time-derived
//! activity status, and the canonical order used when alerts are grouped,
//! deduplicated, or displayed.
//!
//! # Features
//!
//! - **Structural identity**: an alert is identified by the
//!   [`Fingerprint`] of its label set, so repeated observations of the same
//!   condition collapse to one alert
//! - **Derived status**: firing vs. resolved is computed from the activity
//!   interval against the clock on every query, never stored or cached
//! - **Canonical ordering**: a three-level comparator (start time, end time,
//!   fingerprint) gives every consumer the same deterministic order
//! - **Stable wire form**: `labels` / `annotations` / `startsAt` / `endsAt`
//!   field names, with unset timestamps omitted
//!
//! # Example
//!
//! ```rust
//! use beacon_model::{Alert, AlertStatus, LabelSet, ALERT_NAME_LABEL};
//! use chrono::{Duration, TimeZone, Utc};
//!
//! let labels = LabelSet::try_from_pairs([
//!     (ALERT_NAME_LABEL, "HighCPU"),
//!     ("node", "node-1"),
//! ]).unwrap();
//!
//! let started = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
//! let alert = Alert::new(labels)
//!     .starting_at(started)
//!     .ending_at(started + Duration::hours(1));
//!
//! assert_eq!(alert.name(), "HighCPU");
//!
//! // Status is evaluated against a clock, not stored on the alert.
//! assert_eq!(
//!     alert.status_at(started + Duration::minutes(30)),
//!     AlertStatus::Firing
//! );
//! assert_eq!(
//!     alert.status_at(started + Duration::hours(2)),
//!     AlertStatus::Resolved
//! );
//!
//! // Identity follows the labels and nothing else.
//! assert_eq!(alert.fingerprint(), alert.labels.fingerprint());
//! ```
//!
//! # Immutability
//!
//! A published `Alert` is read-only. No method mutates the value; state
//! transitions are observed by re-evaluating the end time against the
//! current clock. All operations are safe to call concurrently on a shared
//! alert.

#![forbid(unsafe_code)]
#![doc(html_root_url = "https://docs.rs/beacon-model/0.1.0")]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod alert;
pub mod error;
pub mod fingerprint;
pub mod labels;

// Re-export main types at crate root
pub use alert::{Alert, AlertStatus, Alerts, sort_alerts};
pub use error::{ModelError, Result};
pub use fingerprint::Fingerprint;
pub use labels::{ALERT_NAME_LABEL, LabelName, LabelSet, LabelValue, SEVERITY_LABEL};
