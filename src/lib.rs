//! Translate between English text and braille cells
//!
//! Cells are written as six marks, `O` for a raised dot and `.` for a flat
//! one, read row by row. Uppercase letters and digits are encoded with a
//! prefix cell (the capital and number markers) in front of the base cell,
//! and [`translate`] picks the direction by looking at the input: a string
//! made up of marks and spaces only is decoded, everything else is encoded.
//!
//! ```
//! assert_eq!(braille::encode("rust").unwrap(), "O.OOO.O...OO.OO.O..OOOO.");
//! assert_eq!(braille::decode("O.OOO.O...OO.OO.O..OOOO.").unwrap(), "rust");
//! assert_eq!(braille::translate("rust").unwrap(), "O.OOO.O...OO.OO.O..OOOO.");
//! ```

pub mod translator;

pub use translator::{
    Direction, Policy, TABLE, TranslationError, TranslationTable, cell::Cell,
};

/// Auto-detect the direction of `input` and translate it
pub fn translate(input: &str) -> Result<String, TranslationError> {
    TABLE.translate(input)
}

/// Encode plain text into braille cells
pub fn encode(input: &str) -> Result<String, TranslationError> {
    TABLE.encode(input)
}

/// Decode braille cells into plain text, dropping windows that match no cell
pub fn decode(input: &str) -> Result<String, TranslationError> {
    TABLE.decode(input)
}

/// Decode braille cells into plain text with an explicit policy for windows
/// that match no cell
pub fn decode_with(input: &str, policy: Policy) -> Result<String, TranslationError> {
    TABLE.decode_with(input, policy)
}
