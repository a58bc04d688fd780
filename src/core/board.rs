//! Board model
//!
//! A grid of `MAX_GUESSES` rows by `word_length` cells, plus the cursor and the
//! game status. The board is passive: the controller decides when rows are
//! committed and when the status changes.

use super::{Evaluation, Mark};

/// Number of attempts in a game
pub const MAX_GUESSES: usize = 6;

/// Progress of a game
///
/// Monotonic: once `Won` or `Lost`, a board never returns to `Active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum GameStatus {
    #[default]
    Active,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Active)
    }
}

/// One letter slot on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub character: Option<char>,
    pub is_exact_match: bool,
    pub is_present_elsewhere: bool,
    pub is_committed: bool,
}

impl Cell {
    /// Feedback for a committed cell, `None` while the row is still being typed
    #[must_use]
    pub fn mark(&self) -> Option<Mark> {
        if !self.is_committed {
            None
        } else if self.is_exact_match {
            Some(Mark::Exact)
        } else if self.is_present_elsewhere {
            Some(Mark::Present)
        } else {
            Some(Mark::Absent)
        }
    }
}

/// One attempt: exactly `word_length` cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    fn new(word_length: usize) -> Self {
        Self {
            cells: vec![Cell::default(); word_length],
        }
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Letters typed into the row, blanks skipped
    #[must_use]
    pub fn text(&self) -> String {
        self.cells.iter().filter_map(|c| c.character).collect()
    }

    fn commit(&mut self, evaluation: &Evaluation) {
        let guess = evaluation.guess().chars().map(Some).chain(std::iter::repeat(None));
        let marks = evaluation.pattern().marks();

        for (i, (cell, ch)) in self.cells.iter_mut().zip(guess).enumerate() {
            let character = ch.filter(char::is_ascii_alphabetic);
            let mark = marks.get(i).copied().unwrap_or(Mark::Absent);

            *cell = Cell {
                character,
                is_exact_match: mark == Mark::Exact,
                is_present_elsewhere: mark == Mark::Present,
                is_committed: character.is_some(),
            };
        }
    }
}

/// Complete board snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    rows: Vec<Row>,
    row_index: usize,
    filled: usize,
    status: GameStatus,
    error: String,
}

impl BoardState {
    /// Empty board sized for `word_length`-letter words
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::{BoardState, GameStatus, MAX_GUESSES};
    ///
    /// let board = BoardState::new(5);
    /// assert_eq!(board.rows().len(), MAX_GUESSES);
    /// assert_eq!(board.column_index(), None);
    /// assert_eq!(board.status(), GameStatus::Active);
    /// ```
    #[must_use]
    pub fn new(word_length: usize) -> Self {
        Self {
            rows: vec![Row::new(word_length); MAX_GUESSES],
            row_index: 0,
            filled: 0,
            status: GameStatus::Active,
            error: String::new(),
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.rows.first().map_or(0, |row| row.cells.len())
    }

    /// Index of the row being composed, equal to the number of committed rows
    #[must_use]
    pub fn row_index(&self) -> usize {
        self.row_index
    }

    /// Cursor within the current row, `None` when the row is empty
    #[must_use]
    pub fn column_index(&self) -> Option<usize> {
        self.filled.checked_sub(1)
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Last validation failure, empty when none
    #[must_use]
    pub fn error(&self) -> &str {
        &self.error
    }

    /// The row under the cursor, `None` once every row is committed
    #[must_use]
    pub fn current_row(&self) -> Option<&Row> {
        self.rows.get(self.row_index)
    }

    /// Most recently committed row
    #[must_use]
    pub fn previous_row(&self) -> Option<&Row> {
        self.row_index.checked_sub(1).and_then(|i| self.rows.get(i))
    }

    /// Letters typed into the current row
    #[must_use]
    pub fn current_guess(&self) -> String {
        self.current_row().map(Row::text).unwrap_or_default()
    }

    /// Committed rows only
    pub fn committed_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().take(self.row_index)
    }

    /// Place `letter` after the cursor
    ///
    /// Returns `false` when the row is full or every row is committed.
    pub fn push_letter(&mut self, letter: char) -> bool {
        let word_length = self.word_length();
        let Some(row) = self.rows.get_mut(self.row_index) else {
            return false;
        };
        if self.filled >= word_length {
            return false;
        }

        row.cells[self.filled].character = Some(letter);
        self.filled += 1;
        self.error.clear();
        true
    }

    /// Remove the letter under the cursor
    ///
    /// Returns `false` when the row is already empty.
    pub fn pop_letter(&mut self) -> bool {
        let Some(column) = self.column_index() else {
            return false;
        };
        let Some(row) = self.rows.get_mut(self.row_index) else {
            return false;
        };

        row.cells[column].character = None;
        self.filled -= 1;
        self.error.clear();
        true
    }

    /// Write the evaluation into the current row and advance to the next one
    ///
    /// Does nothing once every row is committed.
    pub fn commit_row(&mut self, evaluation: &Evaluation) {
        let Some(row) = self.rows.get_mut(self.row_index) else {
            return;
        };

        row.commit(evaluation);
        self.row_index += 1;
        self.filled = 0;
        self.error.clear();
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = message.into();
    }

    pub fn clear_error(&mut self) {
        self.error.clear();
    }

    /// Move to a terminal status
    ///
    /// Returns `false` if the game had already ended; the first terminal
    /// status sticks.
    pub fn finish(&mut self, status: GameStatus) -> bool {
        if self.status.is_terminal() || !status.is_terminal() {
            return false;
        }
        self.status = status;
        true
    }
}
