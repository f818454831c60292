use crate::{Cell, TermCoords, TermInt};
use crate::game::GRID_SIZE;
use std::{io::{Stdout, Write, stdout}, time::Duration};

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::style::Color;
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, KeyEvent, read, poll};

// Each grid cell spans two terminal columns so the board reads roughly square.
const CELL_COLS: TermInt = 2;
const CELL_BLOCK: &str = "██";

// Row 0 holds the score line; the board frame starts below it.
const BOARD_TOP: TermInt = 1;

pub struct TermManager {
    stdout: Stdout,
}

impl TermManager {
    pub fn new() -> Self {
        let (width, height) = terminal::size().expect("Error reading size.");
        let (need_w, need_h) = (board_cols() + 2, BOARD_TOP + GRID_SIZE as TermInt + 2);

        if width < need_w || height < need_h {
            panic!("Terminal too small: this game needs {}x{} characters.", need_w, need_h);
        }

        TermManager { stdout: stdout() }
    }

    pub fn setup(&mut self) {
        execute!(self.stdout, EnterAlternateScreen).expect("Error entering alt screen");
        terminal::enable_raw_mode().expect("Error enabling raw mode.");
        execute!(self.stdout, cursor::Hide).expect("Error hiding cursor.");
    }

    pub fn restore(&mut self) {
        execute!(self.stdout, cursor::Show).expect("Error showing cursor.");
        terminal::disable_raw_mode().expect("Error disabling raw mode.");
        execute!(self.stdout, LeaveAlternateScreen).expect("Error leaving alt screen");
    }

    pub fn read_key_events_queue(&self) -> Vec<KeyEvent> {
        let mut events = vec![];

        while poll(Duration::from_millis(1)).unwrap() {
            if let Event::Key(ev) = read().unwrap() {
                events.push(ev);
            }
        }

        events
    }

    pub fn clear_frame(&mut self) {
        queue!(self.stdout, terminal::Clear(ClearType::All)).expect("Error clearing.");
    }

    pub fn draw_board_frame(&mut self) {
        let width = board_cols() + 2;
        let bottom = BOARD_TOP + GRID_SIZE as TermInt + 1;

        for x in 0..width {
            let ch = if x == 0 || x == width - 1 {'+'} else {'-'};
            self.put((x, BOARD_TOP), ch);
            self.put((x, bottom), ch);
        }

        for y in BOARD_TOP + 1..bottom {
            self.put((0, y), '|');
            self.put((width - 1, y), '|');
        }
    }

    pub fn print_cell(&mut self, cell: Cell, color: Color) {
        let (col, row) = cell_to_term(cell);
        queue!(
            self.stdout,
            cursor::MoveTo(col, row),
            style::SetForegroundColor(color),
            style::Print(CELL_BLOCK),
            style::ResetColor
        ).expect("Error drawing cell.");
    }

    pub fn print_score(&mut self, score: u32) {
        self.put_str((0, 0), &*format!("Score: {}", score));
    }

    pub fn print_centered(&mut self, lines: &[&str]) {
        let mid_y = BOARD_TOP + 1 + GRID_SIZE as TermInt / 2;
        let start_y = mid_y - lines.len() as TermInt / 2;

        for (i, line) in lines.iter().enumerate() {
            let x = (board_cols() + 2).saturating_sub(line.len() as TermInt) / 2;
            self.put_str((x, start_y + i as TermInt), line);
        }
    }

    pub fn flush(&mut self) {
        self.stdout.flush().expect("Error flushing.");
    }

    ///////////////////////////////////////////////////////////////////////////

    fn put(&mut self, pos: TermCoords, ch: char) {
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::Print(ch)).expect("Error printing.");
    }

    fn put_str(&mut self, pos: TermCoords, s: &str) {
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::Print(s)).expect("Error printing.");
    }
}

fn board_cols() -> TermInt {
    GRID_SIZE as TermInt * CELL_COLS
}

// The single place where grid cells become terminal coordinates: one row per
// cell, two columns per cell, offset past the frame and the score line.
fn cell_to_term(cell: Cell) -> TermCoords {
    (cell.0 as TermInt * CELL_COLS + 1, cell.1 as TermInt + BOARD_TOP + 1)
}
