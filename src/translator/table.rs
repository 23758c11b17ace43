//! The builtin symbol table
//!
//! The canonical character to cell associations, in the order that fixes how
//! ambiguous cells read back: letters first, then digits, then punctuation,
//! then space. Several characters share a cell on purpose (digits 1-9 and 0
//! reuse the cells of a-j, `,` reuses `a`, `?` reuses `.`, `;` reuses `l`,
//! `(` and `:` reuse `o`, `>` reuses `<`). When the inverse mapping is
//! derived from this list, later entries overwrite earlier ones, so the last
//! definition of a cell is the character it decodes to.

/// Character to cell associations in definition order, every pattern exactly
/// six marks wide.
pub(crate) const ENTRIES: &[(char, &str)] = &[
    ('a', "O....."),
    ('b', "O.O..."),
    ('c', "OO...."),
    ('d', "OO.O.."),
    ('e', "O..O.."),
    ('f', "OOO..."),
    ('g', "OOOO.."),
    ('h', "O.OO.."),
    ('i', ".OO..."),
    ('j', ".OOO.."),
    ('k', "O...O."),
    ('l', "O.O.O."),
    ('m', "OO..O."),
    ('n', "OO.OO."),
    ('o', "O..OO."),
    ('p', "OOO.O."),
    ('q', "OOOOO."),
    ('r', "O.OOO."),
    ('s', ".OO.O."),
    ('t', ".OOOO."),
    ('u', "O...OO"),
    ('v', "O.O.OO"),
    ('w', ".OOO.O"),
    ('x', "OO..OO"),
    ('y', "OO.OOO"),
    ('z', "O..OOO"),
    ('1', "O....."),
    ('2', "O.O..."),
    ('3', "OO...."),
    ('4', "OO.O.."),
    ('5', "O..O.."),
    ('6', "OOO..."),
    ('7', "OOOO.."),
    ('8', "O.OO.."),
    ('9', ".OO..."),
    ('0', ".OOO.."),
    ('.', "..OO.O"),
    (',', "O....."),
    ('?', "..OO.O"),
    ('!', "O.OO.O"),
    (':', "O..OO."),
    (';', "O.O.O."),
    ('-', "..O..."),
    ('/', "..O.OO"),
    ('<', ".....O"),
    ('>', ".....O"),
    ('(', "O..OO."),
    (')', ".O.O.."),
    (' ', "......"),
];

/// Prefix cell that capitalizes the following letter
pub(crate) const CAPITAL_MARKER: &str = ".....O";

/// Prefix cell that turns the following cell into a digit
pub(crate) const NUMBER_MARKER: &str = ".O.OOO";
