use std::io::{self, Stdout, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::style::{Print, PrintStyledContent, Stylize};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use log::{debug, info, trace};

use crate::bitball::{BitBallInput, BitBallState};
use crate::mainloop::{Mainloop, MainloopBuilder};
use crate::mode::DisplayMode;
use crate::screen::{render_page, PageLayout, Screen};
use crate::Result;

/// What a terminal event means to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostAction {
    Input(BitBallInput),
    MoveCursor(usize),
    /// Toggle a clicked lamp and park the cursor on it
    ClickLamp(usize),
    Quit,
    Ignore,
}

pub fn map_key(code: KeyCode, cursor: usize, lamp_count: usize) -> HostAction {
    match code {
        KeyCode::Left => HostAction::MoveCursor(cursor.saturating_sub(1)),
        KeyCode::Right => HostAction::MoveCursor((cursor + 1).min(lamp_count - 1)),
        KeyCode::Char(' ') | KeyCode::Enter => HostAction::Input(BitBallInput::ToggleBit(cursor)),
        KeyCode::Char('s') => HostAction::Input(BitBallInput::SelectMode(DisplayMode::Signed)),
        KeyCode::Char('u') => HostAction::Input(BitBallInput::SelectMode(DisplayMode::Unsigned)),
        KeyCode::Char('q') | KeyCode::Esc => HostAction::Quit,
        _ => HostAction::Ignore,
    }
}

pub fn map_click(col: usize, row: usize, lamp_count: usize) -> HostAction {
    if let Some(index) = PageLayout::lamp_at(col, row, lamp_count) {
        HostAction::ClickLamp(index)
    } else if let Some(mode) = PageLayout::mode_at(col, row) {
        HostAction::Input(BitBallInput::SelectMode(mode))
    } else {
        debug!("click at ({}, {}) hit nothing", col, row);
        HostAction::Ignore
    }
}

pub struct TerminalScreen<W: Write> {
    out: W,
}

impl<W: Write> Screen for TerminalScreen<W> {
    fn draw(&mut self, lines: &[String]) -> Result<()> {
        queue!(self.out, Clear(ClearType::All))?;
        for (row, line) in lines.iter().enumerate() {
            queue!(self.out, MoveTo(0, row as u16))?;
            if row == 0 {
                queue!(self.out, PrintStyledContent(line.as_str().cyan().bold()))?;
            } else {
                queue!(self.out, Print(line))?;
            }
        }
        self.out.flush()?;
        Ok(())
    }
}

pub struct TerminalMainloop {
    screen: TerminalScreen<Stdout>,
    cursor: usize,
}

pub struct TerminalMainloopBuilder {}

impl MainloopBuilder for TerminalMainloopBuilder {
    type Target = TerminalMainloop;

    fn init(self) -> Result<Self::Target> {
        let mut out = io::stdout();
        enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, EnableMouseCapture, Hide)?;
        Ok(TerminalMainloop {
            screen: TerminalScreen { out },
            cursor: 0,
        })
    }
}

impl Drop for TerminalMainloop {
    fn drop(&mut self) {
        let _ = execute!(self.screen.out, Show, DisableMouseCapture, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

impl Mainloop for TerminalMainloop {
    fn mainloop(&mut self, page: &mut BitBallState) -> Result<()> {
        info!("terminal mainloop started");
        let lamp_count = page.bits().size();

        'mainloop: loop {
            trace!("redraw with cursor on lamp {}", self.cursor);
            self.screen.draw(&render_page(page, Some(self.cursor)))?;

            let action = match event::read()? {
                Event::Key(KeyEvent { code, kind, .. }) if kind != KeyEventKind::Release => {
                    map_key(code, self.cursor, lamp_count)
                }
                Event::Mouse(MouseEvent {
                    kind: MouseEventKind::Down(MouseButton::Left),
                    column,
                    row,
                    ..
                }) => map_click(column as usize, row as usize, lamp_count),
                _ => HostAction::Ignore,
            };

            match action {
                HostAction::Input(input) => page.handle_input(input)?,
                HostAction::MoveCursor(cursor) => self.cursor = cursor,
                HostAction::ClickLamp(index) => {
                    self.cursor = index;
                    page.handle_input(BitBallInput::ToggleBit(index))?;
                }
                HostAction::Quit => break 'mainloop,
                HostAction::Ignore => {}
            }
        }

        info!("terminal mainloop stopped");
        Ok(())
    }
}
