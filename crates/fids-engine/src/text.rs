//! Split-flap text.
//!
//! Each character of a value becomes one flap. Values are upper-cased, spaces
//! stay as blank flaps so column alignment survives, and a missing or empty
//! value shows as `N/A`.

use std::fmt;

pub const PLACEHOLDER: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlapCell {
    Glyph(char),
    Blank,
}

impl FlapCell {
    pub fn as_char(&self) -> char {
        match self {
            FlapCell::Glyph(c) => *c,
            FlapCell::Blank => ' ',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FlipText {
    cells: Vec<FlapCell>,
}

impl FlipText {
    pub fn cells(&self) -> &[FlapCell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl fmt::Display for FlipText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell.as_char())?;
        }
        Ok(())
    }
}

/// Convert a value into split-flap cells.
///
/// Only a missing or empty value becomes `N/A`; a value of spaces keeps
/// one blank flap per space.
pub fn flip_text(value: Option<&str>) -> FlipText {
    let text = match value {
        Some(v) if !v.is_empty() => v,
        _ => PLACEHOLDER,
    };

    let cells = text
        .to_uppercase()
        .chars()
        .map(|c| {
            if c.is_whitespace() {
                FlapCell::Blank
            } else {
                FlapCell::Glyph(c)
            }
        })
        .collect();

    FlipText { cells }
}
