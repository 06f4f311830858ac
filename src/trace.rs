//! Step-trace rendering for machine runs.
//!
//! The renderer is a pure consumer of the per-step configurations; it keeps no
//! state of its own. The line format is stable: the state in a 30-column
//! left-aligned field, one space, then the tape flattened left to right with
//! the head cell wrapped in markers.

use crate::machine::Machine;
use crate::tape::Input;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::io::{self, Write};

/// How the head cell is delimited in a trace line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Literal `[` and `]` around the head cell.
    Plain,
    /// ANSI reverse-video highlight around the head cell.
    Colored,
}

impl Style {
    fn markers(self) -> (&'static str, &'static str) {
        match self {
            Style::Plain => ("[", "]"),
            Style::Colored => ("\x1b[47;1m", "\x1b[0m"),
        }
    }
}

/// Runs `machine` on `input` for at most `step_limit` steps, writing one line
/// per observation to `out`.
///
/// Symbols are concatenated with no separator, so a symbol type that renders
/// as the empty string (e.g. a `String` blank) leaves no trace of blank cells.
pub fn write_trace<Q, S, I, W>(
    machine: &Machine<Q, S>,
    input: I,
    step_limit: usize,
    style: Style,
    out: &mut W,
) -> io::Result<()>
where
    Q: Clone + Eq + Hash + Debug + Display,
    S: Clone + Eq + Hash + Debug + Display,
    I: Input<S>,
    W: Write,
{
    let (begin, end) = style.markers();

    for (_, configuration) in machine.run(input).take(step_limit) {
        let left: String = configuration
            .left
            .iter()
            .rev()
            .map(ToString::to_string)
            .collect();
        let right: String = configuration
            .right
            .iter()
            .map(ToString::to_string)
            .collect();

        writeln!(
            out,
            "{:<30} {}{}{}{}{}",
            configuration.state.to_string(),
            left,
            begin,
            configuration.symbol,
            end,
            right
        )?;
    }

    Ok(())
}
