use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{poll, read, Event},
    execute, queue,
    style::Print,
    terminal::{
        disable_raw_mode, enable_raw_mode, size, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use std::io::{self, stdout, Write};
use std::time::Duration;

use crate::framebuffer::FrameBuffer;

/// Raw-mode terminal session for frame output.
///
/// Restores the previous terminal state on drop.
pub struct Terminal {
    width: u16,
    height: u16,
}

impl Terminal {
    /// Enter raw, non-echoing mode on the alternate screen and capture the
    /// grid dimensions.
    pub fn new() -> io::Result<Self> {
        let (width, height) = size()?;
        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen, Hide, Clear(ClearType::All))?;
        Ok(Self { width, height })
    }

    /// Grid dimensions captured at startup.
    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Paint a finished frame, one row of glyphs at a time.
    pub fn draw(&mut self, frame: &FrameBuffer) -> io::Result<()> {
        let mut out = stdout();
        for (row, glyphs) in frame.rows().enumerate() {
            let line: String = glyphs.iter().collect();
            queue!(out, MoveTo(0, row as u16), Print(line))?;
        }
        out.flush()
    }

    /// Non-blocking check for any pending keypress.
    pub fn key_pressed(&self) -> io::Result<bool> {
        while poll(Duration::ZERO)? {
            if let Event::Key(_) = read()? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Pause between frames.
    pub fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}
