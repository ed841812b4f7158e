//! Shape grids: textual row patterns compiled into slot contents.

use std::collections::{BTreeMap, HashMap};

use crate::core::content::Content;
use crate::core::error::Error;

/// Maximum columns per row.
pub const COLUMNS: usize = 9;

/// Maximum rows a shape may describe.
pub const MAX_ROWS: usize = 6;

/// A declarative description of a grid container's contents.
///
/// Rows are written as patterns of case-sensitive ASCII letters, one letter
/// per occupied column, with runs separated by `-`: `"XXXX-yyy-zz"` describes
/// a row of four `X` slots, three `y` slots, and two `z` slots. Letters are
/// then mapped to [`Content`] with [`map_letter`](ShapeGrid::map_letter), and
/// [`resolve_slots`](ShapeGrid::resolve_slots) compiles the whole shape into
/// an ordered slot list.
///
/// Rows may be set in any order; resolution always walks them in ascending
/// row order. Row indices are 1-based, slot positions 0-based.
#[derive(Debug)]
pub struct ShapeGrid {
    rows: usize,
    patterns: BTreeMap<usize, String>,
    mappings: HashMap<char, Content>,
}

impl ShapeGrid {
    /// Create a shape for a grid of `rows` rows.
    ///
    /// Fails with [`Error::RowCountOutOfRange`] unless `rows` is in 1..=6.
    pub fn new(rows: usize) -> Result<Self, Error> {
        if rows < 1 || rows > MAX_ROWS {
            return Err(Error::RowCountOutOfRange { rows });
        }
        Ok(Self {
            rows,
            patterns: BTreeMap::new(),
            mappings: HashMap::new(),
        })
    }

    /// Number of rows this shape describes.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Host size mandated by this shape: `rows * 9`.
    pub fn implied_size(&self) -> usize {
        self.rows * COLUMNS
    }

    /// Set the pattern for one row.
    ///
    /// The pattern must contain 1 to 9 ASCII letters, optionally split into
    /// groups by single `-` separators. A `row` outside `[1, rows]` is
    /// silently ignored: no error, no mutation. Setting a row twice replaces
    /// the earlier pattern.
    pub fn set_row(&mut self, pattern: &str, row: usize) -> Result<(), Error> {
        validate_row_pattern(pattern)?;
        if row >= 1 && row <= self.rows {
            self.patterns.insert(row, pattern.to_string());
        }
        Ok(())
    }

    /// The full pattern: every row's letters concatenated in ascending row
    /// order, separators stripped.
    pub fn full_pattern(&self) -> String {
        self.patterns
            .values()
            .flat_map(|pattern| pattern.chars().filter(|ch| *ch != '-'))
            .collect()
    }

    /// Map a letter to the content every slot bearing it will receive.
    ///
    /// Fails with [`Error::LetterNotInShape`] when the letter does not occur
    /// in any currently set row. Remapping a letter replaces its content.
    pub fn map_letter(&mut self, letter: char, content: Content) -> Result<(), Error> {
        if !self.full_pattern().contains(letter) {
            return Err(Error::LetterNotInShape { letter });
        }
        self.mappings.insert(letter, content);
        Ok(())
    }

    /// Number of slot positions in the full pattern equal to `letter`.
    pub fn count_occurrences(&self, letter: char) -> usize {
        self.full_pattern()
            .chars()
            .filter(|ch| *ch == letter)
            .count()
    }

    /// Whether `letter` currently has mapped content.
    pub fn is_mapped(&self, letter: char) -> bool {
        self.mappings.contains_key(&letter)
    }

    /// The letter-to-content map.
    pub fn mappings(&self) -> &HashMap<char, Content> {
        &self.mappings
    }

    /// Compile the shape into an ordered slot list, one entry per pattern
    /// position.
    ///
    /// Mapping is checked lazily here, not in [`map_letter`]: holding an
    /// incompletely mapped shape is legal, resolving one fails with
    /// [`Error::LetterUnmapped`] and leaves the shape unchanged.
    pub fn resolve_slots(&self) -> Result<Vec<Content>, Error> {
        self.full_pattern()
            .chars()
            .map(|letter| {
                self.mappings
                    .get(&letter)
                    .cloned()
                    .ok_or(Error::LetterUnmapped { letter })
            })
            .collect()
    }
}

/// Validate one row pattern in the delimiter dialect.
///
/// Invariants: only ASCII letters and `-`, 1..=9 letters total, every `-`
/// sits between two letter groups.
fn validate_row_pattern(pattern: &str) -> Result<(), Error> {
    let invalid = |reason: &'static str| Error::InvalidRowPattern {
        pattern: pattern.to_string(),
        reason,
    };

    if pattern.is_empty() {
        return Err(invalid("pattern is empty"));
    }
    if pattern.chars().any(|ch| !ch.is_ascii_alphabetic() && ch != '-') {
        return Err(invalid("only ASCII letters and '-' separators are allowed"));
    }
    if pattern.starts_with('-') || pattern.ends_with('-') {
        return Err(invalid("separator at the start or end of the row"));
    }
    if pattern.contains("--") {
        return Err(invalid("empty group between separators"));
    }

    let letters = pattern.chars().filter(|ch| *ch != '-').count();
    if letters > COLUMNS {
        return Err(invalid("more than 9 letters in one row"));
    }

    Ok(())
}
