//! # Severity levels for the dispatcher's gate.
//!
//! [`Level`] orders call severities from [`Level::Debug`] (lowest) to
//! [`Level::Fatal`] (highest). The dispatcher compares the level implied by a
//! call (explicit [`Options::level`](crate::Options) override, or the
//! operation's default) against its current minimum and skips the call when
//! it ranks below the threshold.
//!
//! # Example
//! ```
//! use telemux::Level;
//!
//! assert!(Level::Debug < Level::Info);
//! assert!(Level::Fatal > Level::Error);
//! assert_eq!("warn".parse::<Level>(), Ok(Level::Warn));
//! assert_eq!(Level::Error.as_str(), "error");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Severity of a telemetry call, ascending from `Debug` to `Fatal`.
///
/// The discriminants are the gate ordinals: a call executes only when its
/// level's ordinal is greater than or equal to the dispatcher's minimum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Level {
    /// Verbose diagnostics, suppressed by default.
    Debug = 0,
    /// Routine telemetry. Default for `log`, `event`, `network`, and `info`.
    Info = 1,
    /// Something unexpected but recoverable.
    Warn = 2,
    /// An application error. Default for `error`.
    Error = 3,
    /// An unrecoverable failure.
    Fatal = 4,
}

impl Level {
    /// Returns the lowercase name used in configuration and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Fatal => "fatal",
        }
    }

    /// Reconstructs a level from its gate ordinal, saturating out-of-range
    /// values to [`Level::Fatal`].
    pub(crate) fn from_ordinal(n: u8) -> Self {
        match n {
            0 => Level::Debug,
            1 => Level::Info,
            2 => Level::Warn,
            3 => Level::Error,
            _ => Level::Fatal,
        }
    }
}

impl Default for Level {
    /// Routine telemetry passes by default.
    fn default() -> Self {
        Level::Info
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized level name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseLevelError(pub String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized level {:?} (expected one of: debug, info, warn, error, fatal)", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "fatal" => Ok(Level::Fatal),
            other => Err(ParseLevelError(other.to_string())),
        }
    }
}
