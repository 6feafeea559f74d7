//! Classboard page behaviors, independent of the renderer.
//!
//! ## Overview
//! ------------
//! Classboard pages carry two small behaviors:
//! - deadline elements get a countdown label ("Due in 3 days") or a red "Past due";
//! - forms refuse to submit while any of their multi-line text fields is blank.
//!
//! This crate holds the logic for both without touching a live document. Renderers (the web binding in
//! `classboard-web`, or a test harness) describe the page with [`Deadline`] descriptors and slices of
//! [`RequiredField`]s, and apply whatever the logic decides.
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use classboard_core::{Clock, Countdown};
//!
//! let clock = Clock::new(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(), Utc);
//! let countdown = Countdown::evaluate(Some("2024-05-06T14:00:00Z"), &clock);
//! assert_eq!(countdown.to_string(), "Due in 5 days");
//! ```

mod config;
mod deadline;
mod error;
mod report;
mod validate;

pub use crate::config::{Config, DEFAULT_UNKNOWN_DUE_LABEL};
pub use crate::deadline::{
    annotate, parse_due_date, AnnotationSummary, Clock, Countdown, Deadline, DeadlineLabel,
    MS_PER_DAY,
};
pub use crate::error::{Error, Result};
pub use crate::report::{Reporter, TracingReporter};
pub use crate::validate::{
    is_blank, validate_fields, FieldRef, RequiredField, SubmitGuard, ValidationResult,
};
