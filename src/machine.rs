//! This module defines the `Machine` struct and its lazily-advanced `Run` execution
//! engine. A machine is immutable after construction; each call to [`Machine::run`]
//! produces an independent step sequence over its own tape, and the bounded
//! `accepts`/`rejects` queries are built on top of that sequence.

use crate::table::TransitionTable;
use crate::tape::{Input, Tape};
use crate::types::{
    Action, Configuration, Diagnostic, Direction, MachineError, Verdict, DEFAULT_STEP_LIMIT,
};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// A single-tape, single-head Turing Machine.
///
/// Owns the transition table, the start state, the blank symbol, and the
/// state→action classification built from the configured accept and reject
/// states. All of it is read-only after [`Machine::new`], so one machine can
/// drive any number of concurrent runs.
#[derive(Debug, Clone)]
pub struct Machine<Q, S> {
    table: TransitionTable<Q, S>,
    start_state: Q,
    blank: S,
    actions: HashMap<Q, Action>,
}

impl<Q, S> Machine<Q, S>
where
    Q: Clone + Eq + Hash + Debug,
    S: Clone + Eq + Hash + Debug,
{
    /// Creates a machine from its transition relation and distinguished states.
    ///
    /// Construction is the only fallible part of the lifecycle: a duplicate
    /// (state, symbol) key in `rules` is rejected here, and directions are
    /// already typed so an invalid one cannot reach execution.
    pub fn new(
        rules: impl IntoIterator<Item = ((Q, S), (Q, S, Direction))>,
        start_state: Q,
        accept_state: Q,
        reject_state: Q,
        blank: S,
    ) -> Result<Self, MachineError> {
        let table = TransitionTable::new(rules, reject_state.clone())?;

        let mut actions = HashMap::new();
        actions.insert(accept_state, Action::Accept);
        actions.insert(reject_state, Action::Reject);

        Ok(Self {
            table,
            start_state,
            blank,
            actions,
        })
    }

    /// Classifies a state as accepting, rejecting, or ordinary.
    pub fn classify(&self, state: &Q) -> Action {
        self.actions.get(state).copied().unwrap_or(Action::Continue)
    }

    /// Starts an execution of this machine on the given input.
    ///
    /// The returned [`Run`] is a lazy pull iterator: nothing happens until the
    /// caller asks for the next observation, and dropping it at any point is
    /// the whole cancellation protocol.
    pub fn run<I: Input<S>>(&self, input: I) -> Run<'_, Q, S> {
        Run {
            machine: self,
            state: self.start_state.clone(),
            tape: Tape::seed(input.into_symbols(), self.blank.clone()),
            halted: false,
            started: false,
            steps: 0,
            diagnostics: Vec::new(),
        }
    }

    /// Bounded acceptance query with the default step budget of
    /// [`DEFAULT_STEP_LIMIT`] steps.
    pub fn accepts<I: Input<S>>(&self, input: I) -> Verdict {
        self.accepts_within(input, DEFAULT_STEP_LIMIT)
    }

    /// Pulls at most `step_limit` observations and reduces the last one to a
    /// three-valued verdict. Exhausting the budget yields
    /// [`Verdict::Undetermined`], never `Rejected`.
    pub fn accepts_within<I: Input<S>>(&self, input: I, step_limit: usize) -> Verdict {
        self.run(input).verdict(step_limit)
    }

    /// Bounded rejection query with the default step budget.
    pub fn rejects<I: Input<S>>(&self, input: I) -> Option<bool> {
        self.rejects_within(input, DEFAULT_STEP_LIMIT)
    }

    /// Returns `Some(true)` iff the input is rejected and `Some(false)` iff it
    /// is accepted within the budget. An undetermined outcome is propagated as
    /// `None`, not coerced to a boolean.
    pub fn rejects_within<I: Input<S>>(&self, input: I, step_limit: usize) -> Option<bool> {
        match self.accepts_within(input, step_limit) {
            Verdict::Accepted => Some(false),
            Verdict::Rejected => Some(true),
            Verdict::Undetermined => None,
        }
    }

    /// The machine's transition table.
    pub fn table(&self) -> &TransitionTable<Q, S> {
        &self.table
    }

    /// The state every run starts in.
    pub fn start_state(&self) -> &Q {
        &self.start_state
    }

    /// The blank symbol used to pad the tape.
    pub fn blank(&self) -> &S {
        &self.blank
    }
}

/// One execution of a machine on one input.
///
/// Implements `Iterator`, yielding an `(Action, Configuration)` observation
/// per step. The first observation describes the machine before any
/// transition; every later one is computed only after the previous
/// observation has been delivered, so control returns to the caller at every
/// single step boundary. After a non-`Continue` action the run is halted and
/// yields nothing further.
pub struct Run<'m, Q, S> {
    machine: &'m Machine<Q, S>,
    state: Q,
    tape: Tape<S>,
    halted: bool,
    started: bool,
    steps: usize,
    diagnostics: Vec<Diagnostic>,
}

impl<Q, S> Run<'_, Q, S>
where
    Q: Clone + Eq + Hash + Debug,
    S: Clone + Eq + Hash + Debug,
{
    /// Applies the pending transition: total lookup, write, move, state change.
    fn advance(&mut self) {
        let (next_state, write, direction) =
            self.machine.table().lookup(&self.state, self.tape.symbol());

        match direction {
            Direction::Right => self.tape.move_right(write),
            Direction::Left => {
                if !self.tape.move_left(write) {
                    // Already on the leftmost cell. The machine stays put;
                    // this is advisory, not an error.
                    self.diagnostics
                        .push(Diagnostic::LeftEdgeHit { step: self.steps });
                }
            }
        }

        self.state = next_state;
    }

    fn snapshot(&self) -> Configuration<Q, S> {
        Configuration {
            state: self.state.clone(),
            left: self.tape.left().to_vec(),
            symbol: self.tape.symbol().clone(),
            right: self.tape.right().to_vec(),
        }
    }

    /// Pulls at most `step_limit` observations from this run and reduces the
    /// action of the last one to a verdict.
    ///
    /// A budget of zero observes nothing and is `Undetermined` by definition.
    /// Budget exhaustion is recorded as a [`Diagnostic::StepLimitReached`].
    pub fn verdict(&mut self, step_limit: usize) -> Verdict {
        let mut last = None;
        for (action, _) in self.by_ref().take(step_limit) {
            last = Some(action);
        }

        match last {
            Some(Action::Accept) => Verdict::Accepted,
            Some(Action::Reject) => Verdict::Rejected,
            Some(Action::Continue) | None => {
                self.diagnostics
                    .push(Diagnostic::StepLimitReached { limit: step_limit });
                Verdict::Undetermined
            }
        }
    }

    /// Advisory events recorded so far, in the order they occurred.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Number of observations produced so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Whether the run reached a halting state.
    pub fn is_halted(&self) -> bool {
        self.halted
    }
}

impl<Q, S> Iterator for Run<'_, Q, S>
where
    Q: Clone + Eq + Hash + Debug,
    S: Clone + Eq + Hash + Debug,
{
    type Item = (Action, Configuration<Q, S>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.halted {
            return None;
        }

        if self.started {
            self.advance();
        } else {
            self.started = true;
        }

        let action = self.machine.classify(&self.state);
        let configuration = self.snapshot();

        if action != Action::Continue {
            self.halted = true;
        }
        self.steps += 1;

        Some((action, configuration))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction::{Left, Right};

    /// Accepts exactly the string "#".
    fn one_hash() -> Machine<&'static str, char> {
        Machine::new(
            [
                (("q0", '#'), ("saw_#", '#', Right)),
                (("saw_#", '_'), ("qa", '_', Right)),
            ],
            "q0",
            "qa",
            "qr",
            '_',
        )
        .unwrap()
    }

    /// The §8 boundary machine: keeps trying to move left over blanks.
    fn go_left() -> Machine<&'static str, char> {
        Machine::new(
            [(("q0", '_'), ("q0", '_', Left))],
            "q0",
            "qa",
            "qr",
            '_',
        )
        .unwrap()
    }

    #[test]
    fn test_accepts_and_rejects() {
        let machine = one_hash();

        assert_eq!(machine.accepts("#"), Verdict::Accepted);
        assert_eq!(machine.accepts("##"), Verdict::Rejected);
        assert_eq!(machine.rejects("#"), Some(false));
        assert_eq!(machine.rejects("##"), Some(true));
    }

    #[test]
    fn test_accepts_and_rejects_are_never_both_true() {
        let machine = one_hash();

        for input in ["#", "##", "", "x", "#x", "x#"] {
            let accepts = machine.accepts(input);
            let rejects = machine.rejects(input);
            assert_eq!(rejects == Some(false), accepts == Verdict::Accepted);
            assert_eq!(rejects == Some(true), accepts == Verdict::Rejected);
        }
    }

    #[test]
    fn test_first_observation_precedes_any_transition() {
        let machine = one_hash();
        let mut run = machine.run("#");

        let (action, configuration) = run.next().unwrap();
        assert_eq!(action, Action::Continue);
        assert_eq!(
            configuration,
            Configuration {
                state: "q0",
                left: vec!['_'],
                symbol: '#',
                right: vec![],
            }
        );
    }

    #[test]
    fn test_halting_is_terminal() {
        let machine = one_hash();
        let mut run = machine.run("#");

        let actions: Vec<Action> = run.by_ref().map(|(action, _)| action).collect();
        assert_eq!(actions, vec![Action::Continue, Action::Continue, Action::Accept]);

        // No further observation is ever produced for this run.
        assert!(run.next().is_none());
        assert!(run.is_halted());
        assert_eq!(run.steps(), 3);
    }

    #[test]
    fn test_determinism() {
        let machine = one_hash();

        let first: Vec<_> = machine.run("##").collect();
        let second: Vec<_> = machine.run("##").collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_transition_defaults_to_reject() {
        let machine = one_hash();
        let observations: Vec<_> = machine.run("x").collect();

        // One Continue observation, then the default transition lands in qr.
        assert_eq!(observations.len(), 2);
        assert_eq!(observations[0].0, Action::Continue);
        assert_eq!(observations[1].0, Action::Reject);
        // The unknown symbol is written back unchanged, head moved right.
        assert_eq!(observations[1].1.left, vec!['x', '_']);
    }

    #[test]
    fn test_left_edge_boundary_regression() {
        let machine = go_left();
        let mut run = machine.run("");

        let (action, configuration) = run.next().unwrap();
        assert_eq!(action, Action::Continue);
        assert_eq!(
            configuration,
            Configuration {
                state: "q0",
                left: vec!['_'],
                symbol: '_',
                right: vec![],
            }
        );

        // The head drains the single left-hand blank, then stays at the
        // origin forever; the configuration repeats verbatim.
        for _ in 0..3 {
            let (action, configuration) = run.next().unwrap();
            assert_eq!(action, Action::Continue);
            assert_eq!(
                configuration,
                Configuration {
                    state: "q0",
                    left: vec![],
                    symbol: '_',
                    right: vec!['_'],
                }
            );
        }

        // Every stuck move is reported, and execution was unaffected.
        assert_eq!(
            run.diagnostics(),
            &[
                Diagnostic::LeftEdgeHit { step: 2 },
                Diagnostic::LeftEdgeHit { step: 3 },
            ]
        );
    }

    #[test]
    fn test_step_limit_exhaustion_is_undetermined() {
        let machine = go_left();

        assert_eq!(machine.accepts_within("", 5), Verdict::Undetermined);
        assert_eq!(machine.rejects_within("", 5), None);

        let mut run = machine.run("");
        assert_eq!(run.verdict(5), Verdict::Undetermined);
        assert!(run
            .diagnostics()
            .contains(&Diagnostic::StepLimitReached { limit: 5 }));
    }

    #[test]
    fn test_zero_step_limit_is_undetermined() {
        let machine = one_hash();
        assert_eq!(machine.accepts_within("#", 0), Verdict::Undetermined);
    }

    #[test]
    fn test_classify() {
        let machine = one_hash();

        assert_eq!(machine.classify(&"qa"), Action::Accept);
        assert_eq!(machine.classify(&"qr"), Action::Reject);
        assert_eq!(machine.classify(&"q0"), Action::Continue);
        assert_eq!(machine.classify(&"anything"), Action::Continue);
    }

    #[test]
    fn test_duplicate_rules_fail_construction() {
        let result = Machine::new(
            [
                (("q0", '#'), ("qa", '#', Right)),
                (("q0", '#'), ("qr", '#', Right)),
            ],
            "q0",
            "qa",
            "qr",
            '_',
        );

        assert!(matches!(
            result,
            Err(MachineError::DuplicateTransition { .. })
        ));
    }

    #[test]
    fn test_concurrent_runs_share_the_machine() {
        let machine = one_hash();

        std::thread::scope(|scope| {
            let accept = scope.spawn(|| machine.accepts("#"));
            let reject = scope.spawn(|| machine.accepts("##"));

            assert_eq!(accept.join().unwrap(), Verdict::Accepted);
            assert_eq!(reject.join().unwrap(), Verdict::Rejected);
        });
    }

    #[test]
    fn test_input_forms() {
        let machine = one_hash();

        assert_eq!(machine.accepts(vec!['#']), Verdict::Accepted);
        assert_eq!(machine.accepts(&['#'][..]), Verdict::Accepted);
        assert_eq!(machine.accepts(""), Verdict::Rejected);
    }
}
