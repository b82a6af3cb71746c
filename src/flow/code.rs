//! Six-cell verification code input. Each cell holds one digit; anything
//! that is not a single ASCII digit leaves the state untouched. The code is
//! only available once every cell is filled.

pub const CODE_LEN: usize = 6;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodeInput {
    cells: [Option<char>; CODE_LEN],
}

impl CodeInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill an input from an already-typed string, e.g. a paste or a CLI
    /// argument. Fails unless the string is exactly six digits.
    #[must_use]
    pub fn parse(code: &str) -> Option<Self> {
        let mut input = Self::new();
        let chars: Vec<char> = code.trim().chars().collect();
        if chars.len() != CODE_LEN {
            return None;
        }
        for (index, ch) in chars.into_iter().enumerate() {
            if !input.set(index, ch) {
                return None;
            }
        }
        Some(input)
    }

    /// Set one cell. Returns whether the state changed; out-of-range cells
    /// and non-digit characters are no-ops.
    pub fn set(&mut self, index: usize, ch: char) -> bool {
        if index >= CODE_LEN || !ch.is_ascii_digit() {
            return false;
        }
        self.cells[index] = Some(ch);
        true
    }

    /// Empty one cell (backspace).
    pub fn clear_cell(&mut self, index: usize) {
        if index < CODE_LEN {
            self.cells[index] = None;
        }
    }

    /// Wipe every cell; used when the server rejects the code so the user
    /// restarts from the first cell.
    pub fn clear(&mut self) {
        self.cells = [None; CODE_LEN];
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// The concatenated code, only once all six cells are filled.
    #[must_use]
    pub fn value(&self) -> Option<String> {
        if !self.is_complete() {
            return None;
        }
        Some(self.cells.iter().flatten().collect())
    }

    /// First empty cell, where focus should land after a wipe.
    #[must_use]
    pub fn first_empty(&self) -> Option<usize> {
        self.cells.iter().position(Option::is_none)
    }
}
