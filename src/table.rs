//! This module defines the `TransitionTable`, the immutable transition relation of a
//! Turing Machine. The table is a true partial function from (state, symbol) pairs to
//! (state, symbol, direction) triples, with a total lookup that defaults missing pairs
//! to the reject state.

use crate::types::{Direction, MachineError};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// A transition rule: the state to enter, the symbol to write into the current
/// cell, and the direction to move afterwards.
pub type Rule<Q, S> = (Q, S, Direction);

/// The immutable transition relation of a machine.
///
/// Built once at machine construction and shared read-only by every run, so
/// concurrent runs of the same machine need no synchronization.
#[derive(Debug, Clone)]
pub struct TransitionTable<Q, S> {
    rules: HashMap<Q, HashMap<S, Rule<Q, S>>>,
    reject_state: Q,
    len: usize,
}

impl<Q, S> TransitionTable<Q, S>
where
    Q: Clone + Eq + Hash + Debug,
    S: Clone + Eq + Hash + Debug,
{
    /// Builds a table from `((state, symbol), (next_state, write, direction))` entries.
    ///
    /// A duplicate (state, symbol) key means the relation is not a partial
    /// function and construction fails with
    /// [`MachineError::DuplicateTransition`] instead of silently letting the
    /// last write win.
    pub fn new(
        rules: impl IntoIterator<Item = ((Q, S), Rule<Q, S>)>,
        reject_state: Q,
    ) -> Result<Self, MachineError> {
        let mut map: HashMap<Q, HashMap<S, Rule<Q, S>>> = HashMap::new();
        let mut len = 0;

        for ((state, symbol), rule) in rules {
            match map.entry(state.clone()).or_default().entry(symbol) {
                Entry::Occupied(entry) => {
                    return Err(MachineError::DuplicateTransition {
                        state: format!("{:?}", state),
                        symbol: format!("{:?}", entry.key()),
                    });
                }
                Entry::Vacant(entry) => {
                    entry.insert(rule);
                    len += 1;
                }
            }
        }

        Ok(Self {
            rules: map,
            reject_state,
            len,
        })
    }

    /// Total lookup of the next move for `(state, symbol)`.
    ///
    /// A missing pair is not an error: the machine is stuck, and a stuck
    /// machine goes to the reject state, leaving the symbol unchanged and
    /// moving right.
    pub fn lookup(&self, state: &Q, symbol: &S) -> Rule<Q, S> {
        self.get(state, symbol).cloned().unwrap_or_else(|| {
            (
                self.reject_state.clone(),
                symbol.clone(),
                Direction::Right,
            )
        })
    }

    /// Looks up the entry for `(state, symbol)` without applying the reject default.
    pub fn get(&self, state: &Q, symbol: &S) -> Option<&Rule<Q, S>> {
        self.rules.get(state).and_then(|by_symbol| by_symbol.get(symbol))
    }

    /// Returns the number of explicit entries in the relation.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the relation has no explicit entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The state that missing pairs default to.
    pub fn reject_state(&self) -> &Q {
        &self.reject_state
    }
}
