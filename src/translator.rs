//! Translation between plain text and braille cells
//!
//! The [`TranslationTable`] holds the builtin character to cell mapping and
//! its derived inverses and does the actual work: [`TranslationTable::encode`]
//! turns plain text into a sequence of cells, inserting the capital and
//! number markers where needed, and [`TranslationTable::decode`] walks the
//! cell sequence in fixed width windows and restores the text, consuming the
//! markers again. [`Direction`] classifies an input so that
//! [`TranslationTable::translate`] can dispatch without being told which way
//! to go.
//!
//! The markers are handled with two single-shot flags threaded through the
//! decode loop, a degenerate state machine: a marker cell sets its flag, the
//! next cell that resolves to a character consumes all set flags, and an
//! unknown window changes nothing.

use std::collections::HashMap;
use std::sync::LazyLock;

use log::debug;

pub mod cell;
pub mod table;

use cell::Cell;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TranslationError {
    #[error("Cannot translate {character:?}, it is not in the braille table")]
    UnknownCharacter { character: char },
    #[error("No cell matches {pattern:?} at offset {offset}")]
    UnknownPattern { pattern: String, offset: usize },
}

/// The direction of a translation
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    /// Plain text to braille cells
    #[default]
    Forward,
    /// Braille cells back to plain text
    Backward,
}

impl Direction {
    /// Detect the direction for `input`.
    ///
    /// An input made up of nothing but the two mark symbols and the space
    /// separator is braille and routes backward, everything else routes
    /// forward. The empty string and an all-space string vacuously route
    /// backward, which is harmless (decoding them yields a mostly empty
    /// output) but worth knowing when relying on auto-detection.
    pub fn of(input: &str) -> Self {
        if input.chars().all(|c| cell::is_mark(c) || c == ' ') {
            Direction::Backward
        } else {
            Direction::Forward
        }
    }
}

/// How the decoder treats a window that matches no known cell
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum Policy {
    /// Drop the window and keep going
    #[default]
    Lenient,
    /// Fail with [`TranslationError::UnknownPattern`]
    Strict,
}

/// Markers seen but not yet applied.
///
/// Both flags are single shot: they apply to the next cell that resolves to
/// a character and are cleared together. A space cell leaves them pending.
#[derive(Debug, Default, Clone, Copy)]
struct Pending {
    capital: bool,
    number: bool,
}

/// The character to cell mapping together with its derived inverses
#[derive(Debug)]
pub struct TranslationTable {
    forward: HashMap<char, Cell>,
    backward: HashMap<Cell, char>,
    /// Maps the ten digit cells back to `1`-`9` and `0`, consulted when a
    /// number marker is pending
    digits: HashMap<Cell, char>,
    capital: Cell,
    number: Cell,
}

/// The builtin table, compiled once on first use and never mutated
pub static TABLE: LazyLock<TranslationTable> = LazyLock::new(TranslationTable::new);

impl TranslationTable {
    pub fn new() -> Self {
        let mut forward = HashMap::new();
        let mut backward = HashMap::new();
        let mut digits = HashMap::new();
        for &(character, marks) in table::ENTRIES {
            let cell: Cell = marks.parse().expect("builtin table holds a malformed cell");
            forward.insert(character, cell);
            // later entries overwrite earlier ones, the entry order decides
            // which character an ambiguous cell decodes to
            backward.insert(cell, character);
            if character.is_ascii_digit() {
                digits.insert(cell, character);
            }
        }
        let capital = table::CAPITAL_MARKER
            .parse()
            .expect("capital marker is malformed");
        let number = table::NUMBER_MARKER
            .parse()
            .expect("number marker is malformed");
        // the markers never resolve to a character, `<` and `>` share the
        // capital marker's cell and lose
        backward.remove(&capital);
        backward.remove(&number);
        TranslationTable {
            forward,
            backward,
            digits,
            capital,
            number,
        }
    }

    /// The cell for a plain character, or `None` if the character is not in
    /// the table
    pub fn cell(&self, character: char) -> Option<Cell> {
        self.forward.get(&character).copied()
    }

    /// The character a cell decodes to, or `None` for unknown cells and for
    /// the two markers
    pub fn character(&self, cell: Cell) -> Option<char> {
        self.backward.get(&cell).copied()
    }

    /// The capital marker cell
    pub fn capital(&self) -> Cell {
        self.capital
    }

    /// The number marker cell
    pub fn number(&self) -> Cell {
        self.number
    }

    /// The table entries in definition order
    pub fn iter(&self) -> impl Iterator<Item = (char, Cell)> + '_ {
        table::ENTRIES
            .iter()
            .map(|&(character, _)| (character, self.forward[&character]))
    }

    fn lookup(&self, character: char) -> Result<Cell, TranslationError> {
        self.cell(character)
            .ok_or(TranslationError::UnknownCharacter { character })
    }

    /// Encode plain text into a sequence of cells.
    ///
    /// An uppercase letter becomes the capital marker followed by the cell
    /// of its lowercase form, a digit becomes the number marker followed by
    /// the digit's cell, everything else is a plain table lookup. The cells
    /// are concatenated without a separator, their fixed width is the only
    /// delimiter.
    pub fn encode(&self, input: &str) -> Result<String, TranslationError> {
        let mut output = String::new();
        for character in input.chars() {
            if character.is_ascii_uppercase() {
                let cell = self.lookup(character.to_ascii_lowercase())?;
                output.push_str(&self.capital.to_string());
                output.push_str(&cell.to_string());
            } else if character.is_ascii_digit() {
                let cell = self.lookup(character)?;
                output.push_str(&self.number.to_string());
                output.push_str(&cell.to_string());
            } else {
                let cell = self.lookup(character)?;
                output.push_str(&cell.to_string());
            }
        }
        Ok(output)
    }

    /// Decode a cell sequence with the default lenient policy
    pub fn decode(&self, input: &str) -> Result<String, TranslationError> {
        self.decode_with(input, Policy::Lenient)
    }

    /// Decode a cell sequence back into plain text.
    ///
    /// The input is consumed in non-overlapping windows of [`Cell::WIDTH`]
    /// marks. A marker window sets its flag, the space cell appends a space
    /// (markers are not applied to a space and stay pending), and any other
    /// known cell resolves to a character: a pending number marker projects
    /// the cell through the digit inverse (falling back to the character
    /// when the cell has no digit form), a pending capital marker uppercases
    /// the result, then both flags clear. A window that matches nothing,
    /// including a trailing window shorter than a cell, is dropped under
    /// [`Policy::Lenient`] and fails under [`Policy::Strict`].
    pub fn decode_with(&self, input: &str, policy: Policy) -> Result<String, TranslationError> {
        let marks: Vec<char> = input.chars().collect();
        let mut output = String::new();
        let mut pending = Pending::default();
        let mut cursor = 0;
        while cursor < marks.len() {
            let end = usize::min(cursor + Cell::WIDTH, marks.len());
            let window = &marks[cursor..end];
            match Cell::from_marks(window).ok() {
                Some(cell) if cell == self.capital => pending.capital = true,
                Some(cell) if cell == self.number => pending.number = true,
                Some(cell) if cell == Cell::EMPTY => output.push(' '),
                Some(cell) => match self.character(cell) {
                    Some(character) => {
                        let character = if pending.number {
                            self.digits.get(&cell).copied().unwrap_or(character)
                        } else {
                            character
                        };
                        let character = if pending.capital {
                            character.to_ascii_uppercase()
                        } else {
                            character
                        };
                        output.push(character);
                        pending = Pending::default();
                    }
                    None => unknown_window(window, cursor, policy)?,
                },
                None => unknown_window(window, cursor, policy)?,
            }
            cursor += Cell::WIDTH;
        }
        Ok(output)
    }

    /// Detect the direction of `input` and dispatch to [`Self::encode`] or
    /// [`Self::decode`]
    pub fn translate(&self, input: &str) -> Result<String, TranslationError> {
        match Direction::of(input) {
            Direction::Forward => self.encode(input),
            Direction::Backward => self.decode(input),
        }
    }
}

impl Default for TranslationTable {
    fn default() -> Self {
        Self::new()
    }
}

fn unknown_window(window: &[char], offset: usize, policy: Policy) -> Result<(), TranslationError> {
    let pattern: String = window.iter().collect();
    match policy {
        Policy::Lenient => {
            debug!("no cell matches {pattern:?} at offset {offset}, dropping it");
            Ok(())
        }
        Policy::Strict => Err(TranslationError::UnknownPattern { pattern, offset }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAPITAL: &str = ".....O";
    const NUMBER: &str = ".O.OOO";

    #[test]
    fn direction_test() {
        assert_eq!(Direction::of("hello world"), Direction::Forward);
        assert_eq!(Direction::of("x"), Direction::Forward);
        assert_eq!(Direction::of("O.....O.O..."), Direction::Backward);
        assert_eq!(Direction::of("O..... O.O..."), Direction::Backward);
        // vacuously braille
        assert_eq!(Direction::of(""), Direction::Backward);
        assert_eq!(Direction::of("   "), Direction::Backward);
    }

    #[test]
    fn direction_of_encoded_test() {
        let encoded = TABLE.encode("Plain text 123").unwrap();
        assert_eq!(Direction::of(&encoded), Direction::Backward);
    }

    #[test]
    fn encode_test() {
        assert_eq!(
            TABLE.encode("cat"),
            Ok(concat!("OO....", "O.....", ".OOOO.").to_string())
        );
        assert_eq!(
            TABLE.encode("hello world"),
            Ok(concat!(
                "O.OO..", "O..O..", "O.O.O.", "O.O.O.", "O..OO.", "......", ".OOO.O", "O..OO.",
                "O.OOO.", "O.O.O.", "OO.O.."
            )
            .to_string())
        );
        assert_eq!(TABLE.encode(""), Ok("".to_string()));
    }

    #[test]
    fn encode_capital_test() {
        assert_eq!(
            TABLE.encode("Cat"),
            Ok(concat!(".....O", "OO....", "O.....", ".OOOO.").to_string())
        );
        // the marker applies to the next cell only
        assert_eq!(
            TABLE.encode("Ab"),
            Ok(concat!(".....O", "O.....", "O.O...").to_string())
        );
    }

    #[test]
    fn encode_digit_test() {
        // every digit carries its own marker
        assert_eq!(
            TABLE.encode("42"),
            Ok(concat!(".O.OOO", "OO.O..", ".O.OOO", "O.O...").to_string())
        );
        assert_eq!(
            TABLE.encode("x4"),
            Ok(concat!("OO..OO", ".O.OOO", "OO.O..").to_string())
        );
    }

    #[test]
    fn encode_unknown_character_test() {
        assert_eq!(
            TABLE.encode("naïve"),
            Err(TranslationError::UnknownCharacter { character: 'ï' })
        );
        assert_eq!(
            TABLE.encode("[x]"),
            Err(TranslationError::UnknownCharacter { character: '[' })
        );
    }

    #[test]
    fn decode_test() {
        // r, u, s and t have unambiguous cells
        let encoded = TABLE.encode("rust").unwrap();
        assert_eq!(TABLE.decode(&encoded), Ok("rust".to_string()));
        let encoded = TABLE.encode("Rust").unwrap();
        assert_eq!(TABLE.decode(&encoded), Ok("Rust".to_string()));
        assert_eq!(TABLE.decode(""), Ok("".to_string()));
    }

    #[test]
    fn decode_collision_test() {
        // `O.....` is defined for a, 1 and the comma, the last definition wins
        assert_eq!(TABLE.decode("O....."), Ok(",".to_string()));
        // with a number marker pending the same cell reads as a digit
        assert_eq!(
            TABLE.decode(&format!("{}{}", NUMBER, "O.....")),
            Ok("1".to_string())
        );
        assert_eq!(TABLE.decode("O..OO."), Ok("(".to_string()));
    }

    #[test]
    fn decode_digit_round_trip_test() {
        // the number marker restores digit identity, so digits always survive
        let encoded = TABLE.encode("42").unwrap();
        assert_eq!(TABLE.decode(&encoded), Ok("42".to_string()));
        let encoded = TABLE.encode("7 x 90").unwrap();
        assert_eq!(TABLE.decode(&encoded), Ok("7 x 90".to_string()));
    }

    #[test]
    fn decode_space_keeps_markers_pending_test() {
        // a marker survives a space and still applies to the next character
        let input = format!("{}{}{}", CAPITAL, "......", "O.OOO.");
        assert_eq!(TABLE.decode(&input), Ok(" R".to_string()));
    }

    #[test]
    fn decode_both_markers_test() {
        // both flags apply to the same cell, capitalization is a no-op on a digit
        let input = format!("{}{}{}", CAPITAL, NUMBER, "O.....");
        assert_eq!(TABLE.decode(&input), Ok("1".to_string()));
        // a number marker before a cell without a digit form falls back to the character
        let input = format!("{}{}{}", NUMBER, CAPITAL, "O..OOO");
        assert_eq!(TABLE.decode(&input), Ok("Z".to_string()));
    }

    #[test]
    fn decode_lenient_test() {
        // the all-raised window matches nothing and is dropped
        assert_eq!(
            TABLE.decode(&format!("{}{}", "OOOOOO", "O.OOO.")),
            Ok("r".to_string())
        );
        // a trailing window shorter than a cell is dropped as well
        assert_eq!(TABLE.decode("O.OOO.O."), Ok("r".to_string()));
        // a dropped window does not consume a pending marker
        assert_eq!(
            TABLE.decode(&format!("{}{}{}", CAPITAL, "OOOOOO", "O.OOO.")),
            Ok("R".to_string())
        );
    }

    #[test]
    fn decode_strict_test() {
        assert_eq!(
            TABLE.decode_with("OOOOOO", Policy::Strict),
            Err(TranslationError::UnknownPattern {
                pattern: "OOOOOO".to_string(),
                offset: 0,
            })
        );
        assert_eq!(
            TABLE.decode_with("O.OOO.O.", Policy::Strict),
            Err(TranslationError::UnknownPattern {
                pattern: "O.".to_string(),
                offset: 6,
            })
        );
    }

    #[test]
    fn markers_never_decode_test() {
        // `<` and `>` share the capital marker's cell, the marker check wins
        // and the cell never reads back as a character
        let capital: Cell = CAPITAL.parse().unwrap();
        assert_eq!(TABLE.character(capital), None);
        assert_eq!(TABLE.decode(&format!("{}{}", CAPITAL, "O.OOO.")), Ok("R".to_string()));
    }

    #[test]
    fn table_lookup_test() {
        assert_eq!(TABLE.cell('a'), Some("O.....".parse().unwrap()));
        // digits reuse the cells of a-j, the comma reuses a as well
        assert_eq!(TABLE.cell('1'), TABLE.cell('a'));
        assert_eq!(TABLE.cell(','), TABLE.cell('a'));
        assert_eq!(TABLE.cell('0'), TABLE.cell('j'));
        assert_eq!(TABLE.cell(' '), Some(Cell::EMPTY));
        assert_eq!(TABLE.cell('ß'), None);
        assert_eq!(TABLE.character("OO..OO".parse().unwrap()), Some('x'));
        assert_eq!(TABLE.character("OOOOOO".parse().unwrap()), None);
    }

    #[test]
    fn translate_test() {
        assert_eq!(
            TABLE.translate("hello world").unwrap(),
            TABLE.encode("hello world").unwrap()
        );
        let encoded = TABLE.encode("try my rusty stunts").unwrap();
        assert_eq!(
            TABLE.translate(&encoded),
            Ok("try my rusty stunts".to_string())
        );
        // letters whose cells are reused later in the table are lossy
        let encoded = TABLE.encode("hello").unwrap();
        assert_eq!(TABLE.translate(&encoded), Ok("85;;(".to_string()));
        assert_eq!(TABLE.translate(""), Ok("".to_string()));
    }
}
