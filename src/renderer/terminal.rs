//! Terminal renderer
//!
//! Draws the board inside a one-cell frame, two columns per grid cell. A
//! full redraw happens after anything but plain movement; otherwise only the
//! vacated tail cell is erased and the snake repainted.

use std::io::{self, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{
        self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};

use super::palette::{self, Paint, Rgb};
use crate::score_log::ScoreBoard;
use crate::settings::GlyphStyle;
use crate::sim::{Cell, GamePhase, GameState, Grid, TickReport};

/// Window title
const TITLE: &str = "Snake";

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb {
            r: rgb.0,
            g: rgb.1,
            b: rgb.2,
        }
    }
}

/// Terminal position of a grid cell (inside the frame)
pub fn screen_pos(cell: Cell) -> (u16, u16) {
    (1 + cell.x as u16 * 2, 1 + cell.y as u16)
}

/// Raw mode + alternate screen for as long as this lives
pub struct TerminalSession;

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, Hide, SetTitle(TITLE))?;
        Ok(Self)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), ResetColor, Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

pub struct TerminalRenderer<W: Write> {
    out: W,
    glyphs: GlyphStyle,
    show_hud: bool,
    needs_full: bool,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, glyphs: GlyphStyle, show_hud: bool) -> Self {
        Self {
            out,
            glyphs,
            show_hud,
            needs_full: true,
        }
    }

    /// Force a full redraw on the next frame (e.g. after a resize)
    pub fn invalidate(&mut self) {
        self.needs_full = true;
    }

    /// Draw the state after a tick
    pub fn draw(
        &mut self,
        state: &GameState,
        report: &TickReport,
        scores: &ScoreBoard,
    ) -> io::Result<()> {
        if self.needs_full || report.needs_full_redraw() {
            self.draw_full(state)?;
            self.needs_full = false;
        } else if let Some(cell) = report.vacated {
            self.paint(cell, Paint::Empty)?;
        }

        self.draw_snake(state)?;
        if self.show_hud {
            self.draw_hud(state, scores)?;
        }
        queue!(self.out, ResetColor)?;
        self.out.flush()
    }

    fn draw_full(&mut self, state: &GameState) -> io::Result<()> {
        queue!(
            self.out,
            SetBackgroundColor(palette::BACKGROUND.into()),
            Clear(ClearType::All)
        )?;
        self.draw_frame(&state.grid)?;
        for item in state.items() {
            self.paint(item.position, Paint::Item(item.kind))?;
        }
        Ok(())
    }

    fn draw_frame(&mut self, grid: &Grid) -> io::Result<()> {
        let inner = (grid.width * 2) as u16;
        let bottom = grid.height as u16 + 1;
        let edge = "─".repeat(inner as usize);

        queue!(
            self.out,
            SetForegroundColor(palette::BORDER.into()),
            MoveTo(0, 0),
            Print(format!("┌{edge}┐")),
            MoveTo(0, bottom),
            Print(format!("└{edge}┘"))
        )?;
        for row in 1..bottom {
            queue!(
                self.out,
                MoveTo(0, row),
                Print("│"),
                MoveTo(inner + 1, row),
                Print("│")
            )?;
        }
        Ok(())
    }

    fn draw_snake(&mut self, state: &GameState) -> io::Result<()> {
        let head = state.snake.head_cell();
        for cell in state.snake.body_without_head() {
            self.paint(cell, Paint::SnakeBody)?;
        }
        self.paint(head, Paint::SnakeHead)
    }

    fn draw_hud(&mut self, state: &GameState, scores: &ScoreBoard) -> io::Result<()> {
        let row = state.grid.height as u16 + 2;
        let best = scores
            .best()
            .map(|b| b.to_string())
            .unwrap_or_else(|| "-".to_string());
        let paused = if state.phase == GamePhase::Paused {
            "  PAUSED"
        } else {
            ""
        };

        queue!(
            self.out,
            MoveTo(0, row),
            SetForegroundColor(palette::BORDER.into()),
            Clear(ClearType::UntilNewLine),
            Print(format!(
                "Score: {}  Speed: {}  Best: {}  Length: {}{}",
                state.score,
                state.speed,
                best,
                state.snake.len(),
                paused
            )),
            MoveTo(0, row + 1),
            Clear(ClearType::UntilNewLine),
            Print("Arrows/WASD steer, p pause, q quit")
        )
    }

    fn paint(&mut self, cell: Cell, paint: Paint) -> io::Result<()> {
        let (col, row) = screen_pos(cell);
        queue!(
            self.out,
            MoveTo(col, row),
            SetForegroundColor(paint.color().into()),
            SetBackgroundColor(palette::BACKGROUND.into()),
            Print(paint.glyph(self.glyphs))
        )
    }
}
