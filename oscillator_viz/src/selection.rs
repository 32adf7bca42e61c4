//! State selection for the dropdown
//!
//! The dropdown offers "All States" followed by every index up to the
//! configured maximum.

use std::fmt;
use thiserror::Error;

/// Label shown for the all-states entry
pub const ALL_STATES_LABEL: &str = "All States";

/// Returned when a dropdown label cannot be turned into a selection.
#[derive(Debug, Error, PartialEq)]
pub enum SelectionError {
    #[error("unrecognised state label {0:?}")]
    BadLabel(String),

    #[error("state {state} is above the maximum of {max}")]
    OutOfRange { state: u32, max: u32 },
}

/// Which eigenstates a redraw includes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StateSelection {
    #[default]
    All,
    Single(u32),
}

impl StateSelection {
    /// Parse a dropdown label, rejecting states above `max_state`
    pub fn parse(label: &str, max_state: u32) -> Result<Self, SelectionError> {
        let label = label.trim();
        if label == ALL_STATES_LABEL {
            return Ok(Self::All);
        }
        let state: u32 = label
            .parse()
            .map_err(|_| SelectionError::BadLabel(label.to_string()))?;
        if state > max_state {
            return Err(SelectionError::OutOfRange { state, max: max_state });
        }
        Ok(Self::Single(state))
    }

    /// Every choice the dropdown offers, in display order
    pub fn options(max_state: u32) -> Vec<Self> {
        std::iter::once(Self::All)
            .chain((0..=max_state).map(Self::Single))
            .collect()
    }

    /// Indices included in a redraw
    pub fn states(&self, max_state: u32) -> Vec<u32> {
        match *self {
            Self::All => (0..=max_state).collect(),
            Self::Single(n) if n <= max_state => vec![n],
            Self::Single(_) => Vec::new(),
        }
    }

    /// Next entry in dropdown order, saturating at the last one
    pub fn next(self, max_state: u32) -> Self {
        match self {
            Self::All => Self::Single(0),
            Self::Single(n) => Self::Single(n.saturating_add(1).min(max_state)),
        }
    }

    /// Previous entry in dropdown order, saturating at "All States"
    pub fn prev(self) -> Self {
        match self {
            Self::All | Self::Single(0) => Self::All,
            Self::Single(n) => Self::Single(n - 1),
        }
    }
}

impl fmt::Display for StateSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_STATES_LABEL),
            Self::Single(n) => write!(f, "{}", n),
        }
    }
}
