//! Embedded example machines.
//!
//! These are pure data: nothing in the engine depends on them. They are kept
//! here for the CLI front-end and as realistic fixtures. Symbols are `String`s
//! with an empty-string blank, so blank cells render invisibly in traces.

use crate::machine::Machine;
use crate::types::{Direction, MachineError};
use lazy_static::lazy_static;

/// A transition written down the way machines are usually specified on paper:
/// `((state, read), (next_state, write, 'L'/'R'))`.
type TextRule = (
    (&'static str, &'static str),
    (&'static str, &'static str, char),
);

/// Recognizes strings of the form `w#w` over `{0, 1}` by zig-zagging between
/// the two halves, crossing matched symbols out with `X`.
const W_HASH_W_RULES: &[TextRule] = &[
    (("q0", "#"), ("End", "#", 'R')),
    (("End", ""), ("qa", "", 'R')),
    (("q0", "0"), ("FindDelimiter0", "X", 'R')),
    (("FindDelimiter0", "#"), ("Check0", "#", 'R')),
    (("Check0", "0"), ("FindLeftmost", "X", 'L')),
    (("q0", "1"), ("FindDelimiter1", "X", 'R')),
    (("FindDelimiter1", "#"), ("Check1", "#", 'R')),
    (("Check1", "1"), ("FindLeftmost", "X", 'L')),
    (("FindLeftmost", "0"), ("FindLeftmost", "0", 'L')),
    (("FindLeftmost", "1"), ("FindLeftmost", "1", 'L')),
    (("FindLeftmost", "X"), ("FindLeftmost", "X", 'L')),
    (("FindLeftmost", "#"), ("FindLeftmost", "#", 'L')),
    (("FindLeftmost", ""), ("FindNext", "", 'R')),
    (("FindNext", "X"), ("FindNext", "X", 'R')),
    (("FindNext", "0"), ("FindDelimiter0", "X", 'R')),
    (("FindNext", "1"), ("FindDelimiter1", "X", 'R')),
    (("FindNext", "#"), ("End", "#", 'R')),
    (("FindDelimiter0", "0"), ("FindDelimiter0", "0", 'R')),
    (("FindDelimiter0", "1"), ("FindDelimiter0", "1", 'R')),
    (("FindDelimiter1", "0"), ("FindDelimiter1", "0", 'R')),
    (("FindDelimiter1", "1"), ("FindDelimiter1", "1", 'R')),
    (("Check0", "X"), ("Check0", "X", 'R')),
    (("Check1", "X"), ("Check1", "X", 'R')),
    (("End", "X"), ("End", "X", 'R')),
];

/// Recognizes exactly the string `#`.
const ONE_HASH_RULES: &[TextRule] = &[
    (("q0", "#"), ("saw_#", "#", 'R')),
    (("saw_#", ""), ("qa", "", 'R')),
];

/// Compiles a paper-style rule list into a machine, validating directions and
/// duplicate keys eagerly.
fn compile(rules: &[TextRule]) -> Result<Machine<&'static str, String>, MachineError> {
    let rules = rules
        .iter()
        .map(|&((state, read), (next_state, write, direction))| {
            Ok((
                (state, read.to_string()),
                (next_state, write.to_string(), Direction::from_char(direction)?),
            ))
        })
        .collect::<Result<Vec<_>, MachineError>>()?;

    Machine::new(rules, "q0", "qa", "qr", String::new())
}

lazy_static! {
    /// The `w#w` recognizer over `{0, 1}`.
    pub static ref W_HASH_W: Machine<&'static str, String> =
        compile(W_HASH_W_RULES).expect("embedded w#w machine is well-formed");
    /// The single-`#` recognizer.
    pub static ref ONE_HASH: Machine<&'static str, String> =
        compile(ONE_HASH_RULES).expect("embedded one-hash machine is well-formed");
}

/// Names of the embedded machines, as accepted by [`by_name`].
pub const PROGRAM_NAMES: [&str; 2] = ["w-hash-w", "one-hash"];

/// Looks up an embedded machine by name.
pub fn by_name(name: &str) -> Option<&'static Machine<&'static str, String>> {
    match name {
        "w-hash-w" => Some(&*W_HASH_W),
        "one-hash" => Some(&*ONE_HASH),
        _ => None,
    }
}
