//! Miscellaneous project utilities.

use crate::{EDGE_LENGTH, NUM_SPACES};
use std::fmt::{self, Formatter};

/// Lay out one character per cell under column letters and beside 1-based row
/// numbers, in row-major order. Fails unless `cells` yields exactly [`NUM_SPACES`] items.
pub fn format_grid<T: Iterator<Item = char>>(cells: T, f: &mut Formatter) -> fmt::Result {
    let mut cells = cells.fuse();

    write!(f, "  ")?;
    for col in 0..EDGE_LENGTH as u8 {
        write!(f, " {}", (b'A' + col) as char)?;
    }

    let mut written = 0;
    for row in 1..=EDGE_LENGTH {
        write!(f, "\n {} ", row)?;
        for cell in cells.by_ref().take(EDGE_LENGTH) {
            write!(f, "{} ", cell)?;
            written += 1;
        }
    }

    if written != NUM_SPACES || cells.next().is_some() {
        return Err(fmt::Error);
    }
    Ok(())
}

/// Strip whitespace from a cell string and check it describes exactly one board.
pub fn board_chars(s: &str) -> Option<Vec<char>> {
    let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
    if chars.len() == NUM_SPACES {
        Some(chars)
    } else {
        None
    }
}
