//! # Per-call options.
//!
//! [`Options`] travels with every gated dispatcher operation and lets the
//! call site override the operation's default severity. The default value
//! overrides nothing.
//!
//! # Example
//! ```
//! use telemux::{Level, Options};
//!
//! let opts = Options::at(Level::Warn);
//! assert_eq!(opts.level, Some(Level::Warn));
//! assert_eq!(Options::default().level, None);
//! ```

use crate::level::Level;

/// Options accepted by the gated dispatcher operations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// Explicit severity for this call; `None` keeps the operation's default.
    pub level: Option<Level>,
}

impl Options {
    /// Creates options pinning the call to the given severity.
    #[inline]
    pub fn at(level: Level) -> Self {
        Self { level: Some(level) }
    }

    /// Attaches a severity override.
    #[inline]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    /// Resolves the effective level for an operation with the given default.
    #[inline]
    pub(crate) fn level_or(self, default: Level) -> Level {
        self.level.unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keeps_operation_default() {
        assert_eq!(Options::default().level_or(Level::Info), Level::Info);
        assert_eq!(Options::default().level_or(Level::Error), Level::Error);
    }

    #[test]
    fn test_explicit_level_wins() {
        assert_eq!(Options::at(Level::Fatal).level_or(Level::Info), Level::Fatal);
        let opts = Options::default().with_level(Level::Debug);
        assert_eq!(opts.level_or(Level::Error), Level::Debug);
    }
}
