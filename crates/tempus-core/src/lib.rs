//! # Tempus Core Library
//!
//! This library provides the core logic for Tempus, a temporal awareness
//! engine for working sessions. It composes four independent time
//! dimensions into one context object and classifies elapsed session
//! time into active work versus idle periods against an expected
//! schedule.
//!
//! ## Architecture
//!
//! - **Calendar**: Pure date/month primitives, a one-shot base calendar
//!   generator, and read access to the generated JSON documents
//! - **Planner**: Owner-scoped recurring schedule documents (daily and
//!   per-weekday blocks, midnight wraparound supported) with a
//!   first-match-wins matcher
//! - **Session**: Session state and activity-log readers plus the gap
//!   analyzer producing the three-stage time breakdown
//! - **Temporal**: The aggregator assembling all four dimensions,
//!   degrading each one independently
//!
//! All state lives in flat JSON files under one data directory; every
//! query is a fresh, side-effect-free read pass over those files.
//!
//! ## Key Components
//!
//! - [`TemporalEngine`]: Aggregator over all four dimensions
//! - [`AwarenessAnalyzer`]: Activity gap detection
//! - [`Planner`]: Recurring schedule document and matcher
//! - [`DataPaths`]: Flat-file layout under the data directory

pub mod calendar;
pub mod clock;
pub mod config;
pub mod duration;
pub mod error;
pub mod paths;
pub mod planner;
pub mod session;
pub mod temporal;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use duration::format_duration;
pub use error::{CalendarError, ConfigError, CoreError, PlannerError, SessionError};
pub use paths::DataPaths;
pub use planner::{BlockKind, MinuteOfDay, Planner, ScheduleMatch, TimeBlock};
pub use session::{
    classify_gap, ActivityEvent, ActivityGap, ActivityState, AwarenessAnalyzer, SessionState,
    TimeAwareness,
};
pub use temporal::{
    ExternalCalendar, ExternalTime, InternalSchedule, InternalTime, TemporalContext,
    TemporalEngine,
};
