use std::fmt;

use thiserror::Error;

use crate::thread::{MAX_PRIORITY, MIN_PRIORITY};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Priority outside `[MIN_PRIORITY, MAX_PRIORITY]`. Raised when the priority is set, never later.
    #[error("the provided priority {priority} is {bound}")]
    InvalidPriority { priority: i32, bound: PriorityBound },

    #[error("invalid thread factory configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Which end of the priority range was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityBound {
    BelowMinimum,
    AboveMaximum,
}

impl fmt::Display for PriorityBound {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PriorityBound::BelowMinimum => {
                write!(f, "below the minimal thread priority {}", MIN_PRIORITY)
            }
            PriorityBound::AboveMaximum => {
                write!(f, "above the maximal thread priority {}", MAX_PRIORITY)
            }
        }
    }
}

/// Checks `priority` against the inclusive thread priority range.
pub fn check_priority(priority: i32) -> Result<i32> {
    if priority < MIN_PRIORITY {
        return Err(Error::InvalidPriority {
            priority,
            bound: PriorityBound::BelowMinimum,
        });
    }

    if priority > MAX_PRIORITY {
        return Err(Error::InvalidPriority {
            priority,
            bound: PriorityBound::AboveMaximum,
        });
    }

    Ok(priority)
}
