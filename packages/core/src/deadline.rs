//! Countdown labels for deadline elements.
//!
//! A deadline is evaluated exactly once, when the page loads. The label is a pure function of the due date
//! and the evaluation instant held by a [`Clock`], so evaluating the same pair twice always yields the same
//! text.

use std::borrow::Cow;
use std::fmt;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeDelta, TimeZone, Utc};

use crate::config::DEFAULT_UNKNOWN_DUE_LABEL;
use crate::{Config, Error, Result};

/// Milliseconds in one countdown day.
pub const MS_PER_DAY: i64 = 86_400_000;

/// Layouts that carry their own UTC offset.
const OFFSET_LAYOUTS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%d %H:%M%#z",
];

/// Layouts without an offset. These are read in the clock's zone.
const NAIVE_LAYOUTS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// The instant a page is evaluated at, and the zone that due dates without an offset belong to.
#[derive(Debug, Clone)]
pub struct Clock<Tz: TimeZone> {
    now: DateTime<Utc>,
    zone: Tz,
}

impl<Tz: TimeZone> Clock<Tz> {
    pub fn new(now: DateTime<Utc>, zone: Tz) -> Self {
        Self { now, zone }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    pub fn zone(&self) -> &Tz {
        &self.zone
    }
}

impl Clock<Local> {
    /// The system clock and zone. In a browser this reads `Date.now()` and the page's time zone.
    pub fn local() -> Self {
        Self::new(Utc::now(), Local)
    }
}

/// Read a due date the way a browser's `new Date(..)` would for the layouts classboard templates emit.
///
/// - RFC 3339 and ISO-8601 date-times with an offset or `Z` are exact.
/// - Date-times without an offset belong to `zone`.
/// - A bare date is midnight UTC.
pub fn parse_due_date<Tz: TimeZone>(raw: &str, zone: &Tz) -> Result<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(Error::MissingDueDate);
    }

    if let Ok(due) = DateTime::parse_from_rfc3339(raw) {
        return Ok(due.with_timezone(&Utc));
    }

    for layout in OFFSET_LAYOUTS {
        if let Ok(due) = DateTime::parse_from_str(raw, layout) {
            return Ok(due.with_timezone(&Utc));
        }
    }

    for layout in NAIVE_LAYOUTS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, layout) {
            if let Some(due) = in_zone(naive, zone) {
                return Ok(due);
            }
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }

    Err(Error::InvalidDueDate {
        raw: raw.to_string(),
    })
}

/// Resolve a wall-clock time in `zone`. Ambiguous times take the earlier instant; times skipped by a
/// forward transition move ahead by an hour.
fn in_zone<Tz: TimeZone>(naive: NaiveDateTime, zone: &Tz) -> Option<DateTime<Utc>> {
    zone.from_local_datetime(&naive)
        .earliest()
        .or_else(|| {
            zone.from_local_datetime(&(naive + TimeDelta::hours(1)))
                .earliest()
        })
        .map(|due| due.with_timezone(&Utc))
}

/// What a deadline element should say.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    /// The due date is ahead. `days` is the number of whole days left, rounded down.
    DueIn { days: i64 },

    /// The due date is now or behind us.
    PastDue,

    /// The due date is missing or unreadable.
    Unknown,
}

impl Countdown {
    pub fn between(due: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let elapsed = due - now;
        if elapsed > TimeDelta::zero() {
            Countdown::DueIn {
                days: elapsed.num_milliseconds() / MS_PER_DAY,
            }
        } else {
            Countdown::PastDue
        }
    }

    /// Evaluate a raw due-date attribute against `clock`. Unreadable input becomes [`Countdown::Unknown`].
    pub fn evaluate<Tz: TimeZone>(raw: Option<&str>, clock: &Clock<Tz>) -> Self {
        match parse_due_date(raw.unwrap_or_default(), clock.zone()) {
            Ok(due) => Countdown::between(due, clock.now()),
            Err(err) => {
                tracing::warn!("cannot show countdown: {err}");
                Countdown::Unknown
            }
        }
    }

    /// Whether the label should be drawn in the warning color.
    pub fn is_warning(&self) -> bool {
        matches!(self, Countdown::PastDue)
    }

    /// The text to write into the element, using `config` for the unknown label.
    pub fn label<'a>(&self, config: &'a Config) -> Cow<'a, str> {
        match self {
            Countdown::Unknown => Cow::Borrowed(config.unknown_due_label.as_str()),
            other => Cow::Owned(other.to_string()),
        }
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Countdown::DueIn { days } => write!(f, "Due in {days} days"),
            Countdown::PastDue => f.write_str("Past due"),
            Countdown::Unknown => f.write_str(DEFAULT_UNKNOWN_DUE_LABEL),
        }
    }
}

/// A writable label on the page.
pub trait DeadlineLabel {
    fn set_text(&mut self, text: &str);

    fn set_color(&mut self, color: &str);
}

/// A deadline element found on the page: its raw due-date attribute and the label to write into.
#[derive(Debug, Clone)]
pub struct Deadline<L> {
    pub due: Option<String>,
    pub label: L,
}

impl<L: DeadlineLabel> Deadline<L> {
    pub fn new(due: Option<String>, label: L) -> Self {
        Self { due, label }
    }

    /// Write this deadline's countdown into its label and return what was written.
    pub fn apply<Tz: TimeZone>(&mut self, clock: &Clock<Tz>, config: &Config) -> Countdown {
        let countdown = Countdown::evaluate(self.due.as_deref(), clock);
        self.label.set_text(&countdown.label(config));
        if countdown.is_warning() {
            self.label.set_color(&config.warning_color);
        }
        countdown
    }
}

/// How many of each label a scan wrote.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AnnotationSummary {
    pub due: usize,
    pub past_due: usize,
    pub unknown: usize,
}

impl AnnotationSummary {
    pub fn total(&self) -> usize {
        self.due + self.past_due + self.unknown
    }
}

/// Write the countdown for every deadline.
pub fn annotate<L: DeadlineLabel, Tz: TimeZone>(
    deadlines: &mut [Deadline<L>],
    clock: &Clock<Tz>,
    config: &Config,
) -> AnnotationSummary {
    let mut summary = AnnotationSummary::default();

    for deadline in deadlines.iter_mut() {
        match deadline.apply(clock, config) {
            Countdown::DueIn { days } => {
                tracing::trace!(days, "deadline ahead");
                summary.due += 1;
            }
            Countdown::PastDue => summary.past_due += 1,
            Countdown::Unknown => summary.unknown += 1,
        }
    }

    tracing::debug!(
        due = summary.due,
        past_due = summary.past_due,
        unknown = summary.unknown,
        "annotated deadlines"
    );

    summary
}
