//! This crate provides the core logic for a single-tape Turing Machine simulator.
//! It includes the immutable transition table, the tape model, a lazily-advanced
//! step-by-step execution engine, bounded accept/reject queries, a step-trace
//! renderer, and a small registry of embedded example machines.

pub mod machine;
pub mod programs;
pub mod table;
pub mod tape;
pub mod trace;
pub mod types;

/// Re-exports the `Machine` struct and its `Run` step sequence.
pub use machine::{Machine, Run};
/// Re-exports the embedded example machines and their registry.
pub use programs::{by_name, ONE_HASH, PROGRAM_NAMES, W_HASH_W};
/// Re-exports the transition table.
pub use table::{Rule, TransitionTable};
/// Re-exports the tape model and the input-conversion trait.
pub use tape::{Input, Tape};
/// Re-exports the trace renderer.
pub use trace::{write_trace, Style};
/// Re-exports the core value types of the simulator.
pub use types::{
    Action, Configuration, Diagnostic, Direction, MachineError, Verdict, DEFAULT_STEP_LIMIT,
};
