#![cfg(feature = "std")]

//! Terminal presentation: draws the hunter's board after each shot and, in
//! manual mode, waits for the user before the next one.

use std::fmt::Write as _;
use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;
use std::string::String;
use std::thread;
use std::time::Duration;

use crate::config::BOARD_SIZE;
use crate::game::{GameEngine, Turn, TurnObserver};
use crate::hunter::Hunter;

/// Render the hunter's belief board with a header and stats line.
pub fn render_board(hunter: &Hunter, game_num: usize) -> String {
    let stats = hunter.stats();
    let mut out = String::new();
    let _ = writeln!(out, "Game #{}  [{}]", game_num, hunter.mode());
    let _ = writeln!(
        out,
        "Shots: {} | Hits: {} | Accuracy: {:.2}%",
        stats.total_shots,
        stats.shots_hit,
        stats.accuracy()
    );
    out.push_str("   ");
    for c in 0..BOARD_SIZE {
        let _ = write!(out, "{} ", c);
    }
    out.push('\n');
    for (y, row) in hunter.board().rows().iter().enumerate() {
        let _ = write!(out, "{:2} ", y);
        for cell in row {
            out.push_str(cell.symbol());
        }
        out.push('\n');
    }
    out
}

/// What the user asked for at a manual-step prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    ToggleManual,
    Quit,
}

/// `q` quits, `m` toggles manual stepping, anything else advances.
pub fn parse_command(input: &str) -> Command {
    match input.trim().to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => Command::Quit,
        "m" => Command::ToggleManual,
        _ => Command::Next,
    }
}

/// Draws to `output` between turns and reads manual-step commands from `input`.
pub struct TerminalUi<R, W> {
    input: R,
    output: W,
    game_num: usize,
    manual: bool,
    delay: Duration,
}

impl<R: BufRead, W: Write> TerminalUi<R, W> {
    pub fn new(input: R, output: W, game_num: usize) -> Self {
        Self {
            input,
            output,
            game_num,
            manual: true,
            delay: Duration::ZERO,
        }
    }

    /// Step automatically, pausing `delay` after each frame.
    pub fn auto(mut self, delay: Duration) -> Self {
        self.manual = false;
        self.delay = delay;
        self
    }

    pub fn is_manual(&self) -> bool {
        self.manual
    }

    fn draw(&mut self, hunter: &Hunter, caption: &str) -> io::Result<()> {
        writeln!(self.output, "{}", render_board(hunter, self.game_num))?;
        writeln!(self.output, "{}", caption)?;
        self.output.flush()
    }

    fn prompt(&mut self) -> io::Result<Command> {
        write!(self.output, "[Enter] next, [m] toggle manual, [q] quit > ")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(Command::Quit);
        }
        Ok(parse_command(&line))
    }

    fn frame(&mut self, game: &GameEngine, turn: &Turn) -> io::Result<ControlFlow<()>> {
        let caption = match turn.sunk {
            Some(ship) => format!("Turn {}: {} sank the {}", turn.number, turn.target, ship),
            None => format!("Turn {}: {} {:?}", turn.number, turn.target, turn.result),
        };
        self.draw(game.hunter(), &caption)?;
        if !self.manual {
            thread::sleep(self.delay);
            return Ok(ControlFlow::Continue(()));
        }
        match self.prompt()? {
            Command::Next => {}
            Command::ToggleManual => self.manual = false,
            Command::Quit => return Ok(ControlFlow::Break(())),
        }
        Ok(ControlFlow::Continue(()))
    }
}

impl<R: BufRead, W: Write> TurnObserver for TerminalUi<R, W> {
    fn after_turn(&mut self, game: &GameEngine, turn: &Turn) -> ControlFlow<()> {
        match self.frame(game, turn) {
            Ok(flow) => flow,
            Err(e) => {
                log::error!("terminal error: {}", e);
                ControlFlow::Break(())
            }
        }
    }
}
