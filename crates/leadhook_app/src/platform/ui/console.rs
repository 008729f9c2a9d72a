use std::io::{self, IsTerminal, Stdout, Write};

use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use crossterm::{cursor, queue};

use super::layout::{Line, Tone};

/// Styled line output on stdout. Colors and screen clearing only when stdout
/// is a terminal.
pub struct Console {
    out: Stdout,
    styled: bool,
}

impl Console {
    pub fn new() -> Self {
        let out = io::stdout();
        let styled = out.is_terminal();
        Self { out, styled }
    }

    /// Replaces the visible screen with `lines`.
    pub fn draw(&mut self, lines: &[Line]) -> io::Result<()> {
        if self.styled {
            queue!(self.out, Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        }
        self.write_lines(lines)
    }

    /// Appends `lines` below whatever is on screen.
    pub fn print(&mut self, lines: &[Line]) -> io::Result<()> {
        self.write_lines(lines)
    }

    pub fn prompt(&mut self, prompt: &str) -> io::Result<()> {
        if self.styled {
            queue!(
                self.out,
                SetAttribute(Attribute::Bold),
                Print(prompt),
                SetAttribute(Attribute::Reset)
            )?;
        } else {
            queue!(self.out, Print(prompt))?;
        }
        self.out.flush()
    }

    fn write_lines(&mut self, lines: &[Line]) -> io::Result<()> {
        for line in lines {
            match color_for(line.tone).filter(|_| self.styled) {
                Some(color) => queue!(
                    self.out,
                    SetForegroundColor(color),
                    Print(&line.text),
                    ResetColor,
                    Print("\n")
                )?,
                None => queue!(self.out, Print(&line.text), Print("\n"))?,
            }
        }
        self.out.flush()
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

fn color_for(tone: Tone) -> Option<Color> {
    match tone {
        Tone::Plain => None,
        Tone::Title => Some(Color::Cyan),
        Tone::Muted => Some(Color::DarkGrey),
        Tone::Accent => Some(Color::Yellow),
        Tone::Success => Some(Color::Green),
        Tone::Error => Some(Color::Red),
    }
}
