mod game;
mod snake;
mod term;

use std::{thread::sleep, time::Duration};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use game::Game;
use snake::Direction::*;
use term::TermManager;

pub type GridInt = i16;
pub type Cell = (GridInt, GridInt);
pub type TermInt = u16;
pub type TermCoords = (TermInt, TermInt);

// One logic update and one redraw per tick, ten ticks per second
const TICK_INTERVAL_MS: u64 = 100;

fn main() {
    let mut term = TermManager::new();
    term.setup();

    let mut game = Game::new();

    loop {
        for key_ev in term.read_key_events_queue() {
            match &key_ev {
                ev if is_quit(ev) => {
                    term.restore();
                    return;
                },
                KeyEvent { code, modifiers: _ } => match code {
                    KeyCode::Char('w') | KeyCode::Up => game.change_direction(Up),
                    KeyCode::Char('a') | KeyCode::Left => game.change_direction(Left),
                    KeyCode::Char('s') | KeyCode::Down => game.change_direction(Down),
                    KeyCode::Char('d') | KeyCode::Right => game.change_direction(Right),
                    KeyCode::Char('r') | KeyCode::Char('R') if game.is_over() => {
                        game = Game::new();
                    },
                    _ => {}
                }
            }
        }

        // The state machine is gated here: a finished game stays frozen on
        // screen until the player restarts or quits.
        if !game.is_over() {
            game.update();
        }
        game.draw(&mut term);

        sleep(Duration::from_millis(TICK_INTERVAL_MS));
    }
}

fn is_quit(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
        || matches!(ev.code, KeyCode::Char('q') | KeyCode::Esc)
}
