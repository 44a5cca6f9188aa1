//! Indentation rendering

use crate::error::{Error, Result};

/// How one level of indentation is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndentStyle {
    /// `tab_size` spaces per level
    #[default]
    Spaces,
    /// One literal tab character per level
    Tabs,
}

/// Render `count` levels of indentation.
///
/// With [`IndentStyle::Spaces`] the result is `count * tab_size` spaces; with
/// [`IndentStyle::Tabs`] it is `count` tab characters and `tab_size` only has
/// to be valid. Every call builds a new string, so results never depend on
/// earlier calls.
///
/// # Errors
///
/// Returns an invalid-argument error when `count` is negative, when
/// `tab_size` is less than one, or when the total width overflows.
pub fn render_indent(count: i32, tab_size: i32, style: IndentStyle) -> Result<String> {
    if count < 0 {
        return Err(Error::NegativeIndentCount(count));
    }
    if tab_size < 1 {
        return Err(Error::InvalidTabSize(tab_size));
    }

    let indent = match style {
        IndentStyle::Spaces => {
            let width = count
                .checked_mul(tab_size)
                .ok_or(Error::IndentTooWide { count, tab_size })?;
            " ".repeat(width as usize)
        }
        IndentStyle::Tabs => "\t".repeat(count as usize),
    };

    Ok(indent)
}
