//! This module defines the core data structures and types used throughout the Turing Machine
//! simulator: head directions, per-step actions, query verdicts, configuration snapshots,
//! advisory diagnostics, and error types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The default step budget used by [`crate::Machine::accepts`] and
/// [`crate::Machine::rejects`] when no explicit limit is given.
pub const DEFAULT_STEP_LIMIT: usize = 100;

/// Represents the possible directions a Turing Machine head can move.
///
/// There is no `Stay`: a single-tape machine in this model always moves after
/// writing, and an attempt to move left from the leftmost cell is handled as a
/// non-fatal boundary no-op by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Move the head one position to the left.
    Left,
    /// Move the head one position to the right.
    Right,
}

impl Direction {
    /// Parses the textual `'L'`/`'R'` encoding of a direction.
    ///
    /// Any other character is a malformed machine specification and is
    /// rejected eagerly, before the machine ever runs.
    pub fn from_char(c: char) -> Result<Self, MachineError> {
        match c {
            'L' => Ok(Direction::Left),
            'R' => Ok(Direction::Right),
            other => Err(MachineError::InvalidDirection(other)),
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = MachineError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Direction::from_char(c)
    }
}

/// The classification of the state observed at a single execution step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// The machine is in an ordinary state and keeps running.
    Continue,
    /// The machine reached its accept state; the input is accepted.
    Accept,
    /// The machine reached its reject state; the input is rejected.
    Reject,
}

/// The three-valued result of a bounded query.
///
/// `Undetermined` means the step budget was exhausted before a halting state
/// was reached. It is deliberately distinct from `Rejected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Accepted,
    Rejected,
    Undetermined,
}

/// An immutable snapshot of the machine at one execution step.
///
/// `left` and `right` hold the symbols on either side of the head, index 0
/// being the cell *nearest* to the head. Reconstructing the tape left to
/// right therefore reads `left` reversed, then `symbol`, then `right`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration<Q, S> {
    /// The state the machine is in at this step.
    pub state: Q,
    /// Symbols left of the head, nearest first.
    pub left: Vec<S>,
    /// The symbol under the head.
    pub symbol: S,
    /// Symbols right of the head, nearest first.
    pub right: Vec<S>,
}

/// An advisory event observed during a run.
///
/// Diagnostics are collected on the run, never thrown; a caller that ignores
/// them still gets a well-defined result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Diagnostic {
    /// A transition asked to move left while the head was already on the
    /// leftmost cell. The head stayed put and execution continued.
    LeftEdgeHit {
        /// Index of the observation the stuck move was leading to.
        step: usize,
    },
    /// A bounded query ran out of budget before the machine halted.
    StepLimitReached { limit: usize },
}

/// Represents the errors that can occur while constructing a Turing Machine.
///
/// All of these are detected eagerly at construction time; execution itself
/// cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MachineError {
    /// A direction outside `{'L', 'R'}` was used in a textual machine specification.
    #[error("invalid direction {0:?}: 'L' (left) and 'R' (right) are the only directions")]
    InvalidDirection(char),
    /// The transition relation contained two entries for the same (state, symbol)
    /// pair, so it is not a partial function.
    #[error("duplicate transition for state {state} reading {symbol}")]
    DuplicateTransition { state: String, symbol: String },
}
