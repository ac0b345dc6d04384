//! Crossterm terminal animation for mappath searches.
//!
//! [`TerminalAnimator`] implements [`mappath_search::Observer`]: every
//! search event redraws the map with per-state colours and then sleeps for
//! the configured interval, so the search can be watched as it spreads.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute, queue,
    style::{self, Attribute, Color as CtColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use log::warn;

use mappath_core::{CellFlags, Grid};
use mappath_search::{Observer, SearchEvent};

/// How one cell is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellLook {
    pub ch: char,
    pub fg: CtColor,
    pub bg: CtColor,
    pub bold: bool,
}

/// Pick the glyph and colours for a cell. Later states win: impassable,
/// enqueued, visited, path, start, goal.
pub fn cell_look(glyph: char, flags: CellFlags) -> CellLook {
    let mut look = CellLook {
        ch: glyph,
        fg: CtColor::White,
        bg: CtColor::Black,
        bold: !(flags & !CellFlags::IMPASSABLE).is_empty(),
    };
    if flags.contains(CellFlags::IMPASSABLE) {
        look.fg = CtColor::Blue;
        look.bg = CtColor::Blue;
    }
    if flags.contains(CellFlags::ENQUEUED) {
        look.fg = CtColor::Cyan;
        look.ch = 'o';
    }
    if flags.contains(CellFlags::VISITED) {
        look.fg = CtColor::Red;
        look.ch = glyph;
    }
    if flags.contains(CellFlags::PATH) {
        look.fg = CtColor::Green;
        look.ch = 'o';
    }
    if flags.contains(CellFlags::START) {
        look.fg = CtColor::Green;
        look.ch = 'A';
    }
    if flags.contains(CellFlags::GOAL) {
        look.fg = CtColor::Yellow;
        look.ch = 'B';
    }
    look
}

/// Draws each search step to the terminal.
///
/// Call [`begin`](Self::begin) before the search and
/// [`finish`](Self::finish) after it. Drawing errors never reach the search:
/// the first one is kept and returned by `finish`.
pub struct TerminalAnimator {
    interval: Duration,
    wait_for_key: bool,
    active: bool,
    error: Option<io::Error>,
}

impl TerminalAnimator {
    /// Create an animator that pauses `interval` after every frame.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            wait_for_key: true,
            active: false,
            error: None,
        }
    }

    /// Configure whether [`finish`](Self::finish) waits for a key press
    /// before restoring the terminal.
    pub fn with_pause(mut self, wait: bool) -> Self {
        self.wait_for_key = wait;
        self
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Switch to the alternate screen and hide the cursor.
    pub fn begin(&mut self) -> io::Result<()> {
        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        self.active = true;
        Ok(())
    }

    /// Optionally wait for a key, then restore the terminal. Returns the
    /// first drawing error, if any.
    pub fn finish(&mut self) -> io::Result<()> {
        if self.active && self.wait_for_key {
            wait_for_key()?;
        }
        self.restore();
        match self.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn restore(&mut self) {
        if !self.active {
            return;
        }
        let mut stdout = io::stdout();
        let _ = execute!(
            stdout,
            style::ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        self.active = false;
    }

    fn draw(&self, grid: &Grid) -> io::Result<()> {
        let mut stdout = io::stdout();
        let interior = grid.interior();
        for (p, cell) in grid.iter_interior() {
            let at = p - interior.min;
            if at.x == 0 {
                queue!(stdout, cursor::MoveTo(0, at.y as u16))?;
            }
            let look = cell_look(cell.glyph, cell.flags);
            queue!(
                stdout,
                SetForegroundColor(look.fg),
                SetBackgroundColor(look.bg)
            )?;
            if look.bold {
                queue!(stdout, style::SetAttribute(Attribute::Bold))?;
            }
            write!(stdout, "{}", look.ch)?;
            if look.bold {
                queue!(stdout, style::SetAttribute(Attribute::Reset))?;
            }
        }
        queue!(
            stdout,
            style::ResetColor,
            cursor::MoveTo(0, interior.height().max(0) as u16)
        )?;
        stdout.flush()
    }
}

impl Observer for TerminalAnimator {
    fn observe(&mut self, _event: SearchEvent, grid: &Grid) {
        if !self.active {
            return;
        }
        if let Err(e) = self.draw(grid) {
            if self.error.is_none() {
                warn!("animation: {e}");
                self.error = Some(e);
            }
            return;
        }
        thread::sleep(self.interval);
    }
}

impl Drop for TerminalAnimator {
    fn drop(&mut self) {
        self.restore();
    }
}

fn wait_for_key() -> io::Result<()> {
    terminal::enable_raw_mode()?;
    let res = loop {
        match event::read() {
            Ok(Event::Key(k)) if k.kind == KeyEventKind::Press => break Ok(()),
            Ok(_) => continue,
            Err(e) => break Err(e),
        }
    };
    terminal::disable_raw_mode()?;
    res
}
