//! This module defines the `Tape`, the per-run read/write storage of a Turing Machine.
//! The tape is singly-infinite to the right (realized lazily with the blank symbol) and
//! bounded at a fixed origin to the left.

/// Converts a caller-supplied input into the symbol sequence written on the tape.
///
/// A textual input is treated as the sequence of its individual characters;
/// symbol vectors and slices pass through unchanged.
pub trait Input<S> {
    fn into_symbols(self) -> Vec<S>;
}

impl Input<char> for &str {
    fn into_symbols(self) -> Vec<char> {
        self.chars().collect()
    }
}

impl Input<String> for &str {
    /// Each character becomes its own single-character symbol.
    fn into_symbols(self) -> Vec<String> {
        self.chars().map(String::from).collect()
    }
}

impl<S> Input<S> for Vec<S> {
    fn into_symbols(self) -> Vec<S> {
        self
    }
}

impl<S: Clone> Input<S> for &[S] {
    fn into_symbols(self) -> Vec<S> {
        self.to_vec()
    }
}

/// The machine's tape, split around the head position.
///
/// `left` and `right` store the symbols on either side of the head, index 0
/// being the cell nearest to the head. The full tape read left to right is
/// `left` reversed, then `symbol`, then `right`. An empty `left` means the
/// head is on the leftmost cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape<S> {
    left: Vec<S>,
    symbol: S,
    right: Vec<S>,
    blank: S,
}

impl<S: Clone> Tape<S> {
    /// Seeds a tape with the given input.
    ///
    /// The head starts on the first input symbol; an empty input is a
    /// legitimate, distinct case and is treated as a single blank so the
    /// machine always has a well-defined current symbol. One blank is placed
    /// left of the head.
    pub fn seed(input: Vec<S>, blank: S) -> Self {
        let mut symbols = input.into_iter();
        let symbol = symbols.next().unwrap_or_else(|| blank.clone());
        let right = symbols.collect();

        Self {
            left: vec![blank.clone()],
            symbol,
            right,
            blank,
        }
    }

    /// Writes `write` into the current cell and moves the head one cell right.
    ///
    /// The tape is infinite to the right: when `right` is exhausted the head
    /// lands on a fresh blank.
    pub fn move_right(&mut self, write: S) {
        self.left.insert(0, write);
        self.symbol = if self.right.is_empty() {
            self.blank.clone()
        } else {
            self.right.remove(0)
        };
    }

    /// Writes `write` into the current cell and moves the head one cell left.
    ///
    /// Returns `false` when the head is already on the leftmost cell: the
    /// position and the current symbol are left unchanged, and it is up to
    /// the caller to surface the event as a diagnostic. This is not an error;
    /// execution continues normally afterwards.
    pub fn move_left(&mut self, write: S) -> bool {
        if self.left.is_empty() {
            return false;
        }

        self.right.insert(0, write);
        self.symbol = self.left.remove(0);
        true
    }

    /// Symbols left of the head, nearest first.
    pub fn left(&self) -> &[S] {
        &self.left
    }

    /// The symbol under the head.
    pub fn symbol(&self) -> &S {
        &self.symbol
    }

    /// Symbols right of the head, nearest first.
    pub fn right(&self) -> &[S] {
        &self.right
    }

    /// The blank symbol this tape pads with.
    pub fn blank(&self) -> &S {
        &self.blank
    }
}
