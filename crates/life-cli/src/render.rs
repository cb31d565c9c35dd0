//! Console rendering of board frames.

use life_core::{Cell, Grid, Position, Result};
use std::io::Write;

const ALIVE_GLYPH: &str = "■";
const DEAD_GLYPH: &str = "·";

/// Write one frame: N rows of space-separated glyphs, then a blank line.
pub fn render_to(out: &mut impl Write, grid: &Grid) -> Result<()> {
    for row in 0..grid.size() {
        for col in 0..grid.size() {
            let glyph = match grid.get(Position::new(row, col)) {
                Cell::Alive => ALIVE_GLYPH,
                Cell::Dead => DEAD_GLYPH,
            };
            write!(out, "{} ", glyph)?;
        }
        writeln!(out)?;
    }
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// Clear the terminal and home the cursor, so frames animate in place.
pub fn clear_screen(out: &mut impl Write) -> Result<()> {
    write!(out, "\x1b[2J\x1b[1;1H")?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_known_grid() {
        let mut grid = Grid::new(4);
        grid.set(Position::new(0, 0), Cell::Alive);
        grid.set(Position::new(1, 2), Cell::Alive);

        let mut buf = Vec::new();
        render_to(&mut buf, &grid).unwrap();

        let expected = "\
■ · · · \n\
· · ■ · \n\
· · · · \n\
· · · · \n\
\n";
        assert_eq!(String::from_utf8(buf).unwrap(), expected);
    }

    #[test]
    fn test_clear_screen_sequence() {
        let mut buf = Vec::new();
        clear_screen(&mut buf).unwrap();
        assert_eq!(buf, b"\x1b[2J\x1b[1;1H");
    }
}
