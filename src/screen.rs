use std::io::Write;

use strum::IntoEnumIterator;

use crate::bitball::BitBallState;
use crate::mode::DisplayMode;
use crate::Result;

pub const TITLE: &str = "bitball";
pub const LAMPS_PER_ROW: usize = 8;
const LAMP_WIDTH: usize = 4;
const LAMP_GLYPH_WIDTH: usize = 3;
const LEFT_MARGIN: usize = 2;
const LAMP_ROW: usize = 2;
const DIVIDER_ROW: usize = 5;
const VALUES_ROW: usize = 7;
pub const MODE_ROW: usize = 11;
const BUTTON_GAP: usize = 2;
const HINT: &str = "click/space: toggle   <-/->: move   s/u: mode   q: quit";

pub trait Screen {
    fn draw(&mut self, lines: &[String]) -> Result<()>;
}

/// Writes each frame as plain lines, for pipes and tests.
pub struct TextScreen<W: Write> {
    writer: W,
}

impl<W: Write> TextScreen<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Screen for TextScreen<W> {
    fn draw(&mut self, lines: &[String]) -> Result<()> {
        for line in lines {
            writeln!(self.writer, "{}", line)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Fixed cell positions of everything clickable on the page.
pub struct PageLayout;

impl PageLayout {
    pub fn lamp_position(index: usize) -> (usize, usize) {
        let col = LEFT_MARGIN + (index % LAMPS_PER_ROW) * LAMP_WIDTH;
        let row = LAMP_ROW + index / LAMPS_PER_ROW;
        (col, row)
    }

    pub fn lamp_at(col: usize, row: usize, lamp_count: usize) -> Option<usize> {
        if row < LAMP_ROW || col < LEFT_MARGIN {
            return None;
        }
        let offset = col - LEFT_MARGIN;
        let slot = offset / LAMP_WIDTH;
        if slot >= LAMPS_PER_ROW || offset % LAMP_WIDTH >= LAMP_GLYPH_WIDTH {
            return None;
        }
        let index = (row - LAMP_ROW) * LAMPS_PER_ROW + slot;
        (index < lamp_count).then_some(index)
    }

    /// Column ranges of the mode buttons, in the order they are drawn.
    pub fn mode_buttons() -> Vec<(DisplayMode, std::ops::Range<usize>)> {
        let mut col = LEFT_MARGIN;
        DisplayMode::iter()
            .map(|mode| {
                let width = mode.as_ref().len() + 4;
                let range = col..col + width;
                col += width + BUTTON_GAP;
                (mode, range)
            })
            .collect()
    }

    pub fn mode_at(col: usize, row: usize) -> Option<DisplayMode> {
        if row != MODE_ROW {
            return None;
        }
        Self::mode_buttons()
            .into_iter()
            .find(|(_, range)| range.contains(&col))
            .map(|(mode, _)| mode)
    }
}

fn lamp_glyph(is_on: bool, has_cursor: bool) -> &'static str {
    match (is_on, has_cursor) {
        (true, false) => "(*)",
        (false, false) => "( )",
        (true, true) => "<*>",
        (false, true) => "< >",
    }
}

/// Draws the page as text rows, top to bottom.
pub fn render_page(page: &BitBallState, cursor: Option<usize>) -> Vec<String> {
    let margin = " ".repeat(LEFT_MARGIN);
    let mut lines = vec![String::new(); MODE_ROW + 3];
    lines[0] = format!("{}{}", margin, TITLE);

    let lamps = page.lamps();
    for (row, chunk) in lamps.chunks(LAMPS_PER_ROW).enumerate() {
        let glyphs: Vec<&str> = chunk
            .iter()
            .map(|lamp| lamp_glyph(lamp.is_on, cursor == Some(lamp.index)))
            .collect();
        lines[LAMP_ROW + row] = format!("{}{}", margin, glyphs.join(" "));
    }
    let last_lamp_row = LAMP_ROW + (lamps.len().max(1) - 1) / LAMPS_PER_ROW;
    lines[last_lamp_row].push_str("  <- LSB");

    lines[DIVIDER_ROW] = format!("{}{}", margin, "* ".repeat(lamps.len()).trim_end());

    let readouts = page.readouts();
    let values = [
        ("Binary", readouts.binary),
        ("Decimal", readouts.decimal.to_string()),
        ("Hexadecimal", readouts.hex),
    ];
    for (i, (label, value)) in values.iter().enumerate() {
        lines[VALUES_ROW + i] = format!("{}{:<11} : {}", margin, label, value);
    }

    let buttons: Vec<String> = PageLayout::mode_buttons()
        .into_iter()
        .map(|(mode, _)| {
            if mode == page.mode() {
                format!("[*{}*]", mode)
            } else {
                format!("[ {} ]", mode)
            }
        })
        .collect();
    let gap = " ".repeat(BUTTON_GAP);
    lines[MODE_ROW] = format!("{}{}", margin, buttons.join(gap.as_str()));

    lines[MODE_ROW + 2] = format!("{}{}", margin, HINT);
    lines
}
