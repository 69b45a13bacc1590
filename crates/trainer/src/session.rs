//! Interactive puzzle-solving loop.
//!
//! The session owns a live position cloned from the game record and walks
//! the solution two moves at a time: the solver's move, then the scripted
//! opponent reply. Help, show and wrong answers never move the cursor.

use std::io::{BufRead, Write};

use chess_core::notation;
use chess_core::GameRecord;
use shakmaty::{Chess, Move, Position};
use tracing::{debug, info};

use crate::error::TrainerError;
use crate::puzzle::Puzzle;
use crate::render;

pub const PROMPT: &str = "Enter the best move, or '?' for help: ";

const HELP: [&str; 3] = [
    " - Enter your move (e.g., 'e4', 'Nf3', 'Qxd7').",
    " - Enter '?' to display this help message.",
    " - Enter nothing to skip the move and reveal the correct answer.",
];

#[derive(Clone, Copy, Debug, Default)]
pub struct SessionOptions {
    pub colorize: bool,
    /// Redraw after each intermediate opponent reply, not only at the end.
    pub board_after_reply: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    AwaitingUserMove(usize),
    Completed,
}

/// What a single line of input did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Solved,
    Revealed,
    Incorrect,
    Help,
    Shown,
}

impl StepOutcome {
    /// True if the step was used up and the cursor moved on.
    pub fn consumed(self) -> bool {
        matches!(self, StepOutcome::Solved | StepOutcome::Revealed)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub solved: usize,
    pub revealed: usize,
    pub mistakes: usize,
}

/// Normalised user input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal,
    Help,
    Show,
    Attempt(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let input = line.trim().to_lowercase();
        match input.as_str() {
            "" => Command::Reveal,
            "?" | "help" => Command::Help,
            "s" | "show" => Command::Show,
            _ => Command::Attempt(input),
        }
    }
}

/// The move the solver is expected to find at the current cursor.
#[derive(Clone, Debug)]
pub struct ExpectedMove {
    pub mv: Move,
    pub coordinate: String,
    pub algebraic: String,
    pub is_final: bool,
}

impl ExpectedMove {
    /// Case-insensitive match against the coordinate or algebraic form.
    /// The check/mate suffix of the algebraic form is optional.
    pub fn accepts(&self, attempt: &str) -> bool {
        let algebraic = self.algebraic.to_lowercase();
        attempt == self.coordinate
            || attempt == algebraic
            || attempt == notation::strip_check_suffix(&algebraic)
    }
}

pub struct PuzzleSession {
    puzzle_id: String,
    solution: Vec<String>,
    solver_moves: usize,
    position: Chess,
    cursor: usize,
    options: SessionOptions,
    stats: SessionStats,
}

impl PuzzleSession {
    pub fn new(puzzle: &Puzzle, record: GameRecord, options: SessionOptions) -> Self {
        Self {
            puzzle_id: puzzle.id.clone(),
            solution: puzzle.solution.clone(),
            solver_moves: puzzle.solver_moves(),
            position: record.position().clone(),
            cursor: 0,
            options,
            stats: SessionStats::default(),
        }
    }

    pub fn state(&self) -> SessionState {
        if self.cursor >= self.solution.len() {
            SessionState::Completed
        } else {
            SessionState::AwaitingUserMove(self.cursor)
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn position(&self) -> &Chess {
        &self.position
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Decode the solution move at the cursor against the live position.
    pub fn expected(&self) -> Result<ExpectedMove, TrainerError> {
        let coordinate = self
            .solution
            .get(self.cursor)
            .ok_or_else(|| TrainerError::AlreadyCompleted(self.puzzle_id.clone()))?;

        let mv = notation::decode_coordinate(&self.position, coordinate)?;
        Ok(ExpectedMove {
            mv,
            coordinate: coordinate.to_lowercase(),
            algebraic: notation::to_algebraic(&self.position, mv),
            is_final: self.cursor + 1 == self.solution.len(),
        })
    }

    /// Draw the initial board, then prompt and read until the solution is exhausted.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut out: W,
    ) -> Result<SessionStats, TrainerError> {
        info!(
            puzzle_id = %self.puzzle_id,
            moves = self.solution.len(),
            solver_moves = self.solver_moves,
            "Starting puzzle"
        );

        self.show_board(&mut out)?;
        write!(out, "{} to move.\n\n", notation::side_to_move_label(&self.position))?;

        let mut line = String::new();
        while self.state() != SessionState::Completed {
            // Decode before prompting so a broken puzzle fails without waiting on input
            let expected = self.expected()?;

            write!(out, "{PROMPT}")?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                return Err(TrainerError::InputClosed);
            }
            writeln!(out)?;

            self.handle(expected, &line, &mut out)?;
        }

        info!(
            puzzle_id = %self.puzzle_id,
            solved = self.stats.solved,
            revealed = self.stats.revealed,
            mistakes = self.stats.mistakes,
            "Puzzle completed"
        );
        Ok(self.stats)
    }

    /// Handle one line of input at the current cursor.
    pub fn submit<W: Write>(
        &mut self,
        line: &str,
        out: &mut W,
    ) -> Result<StepOutcome, TrainerError> {
        let expected = self.expected()?;
        self.handle(expected, line, out)
    }

    fn handle<W: Write>(
        &mut self,
        expected: ExpectedMove,
        line: &str,
        out: &mut W,
    ) -> Result<StepOutcome, TrainerError> {
        let command = Command::parse(line);
        debug!(cursor = self.cursor, expected = %expected.coordinate, ?command, "Handling input");

        let outcome = match command {
            Command::Help => {
                print_help(out)?;
                StepOutcome::Help
            }
            Command::Show => {
                self.show_board(out)?;
                StepOutcome::Shown
            }
            Command::Reveal => {
                writeln!(out, "The correct move was {}.", expected.algebraic)?;
                self.play_step(&expected, out)?;
                self.stats.revealed += 1;
                StepOutcome::Revealed
            }
            Command::Attempt(attempt) if expected.accepts(&attempt) => {
                write!(out, "Correct!\n\n")?;
                self.play_step(&expected, out)?;
                self.stats.solved += 1;
                StepOutcome::Solved
            }
            Command::Attempt(_) => {
                write!(out, "Incorrect! Try again.\n\n")?;
                self.stats.mistakes += 1;
                StepOutcome::Incorrect
            }
        };

        if outcome.consumed() {
            self.cursor += 2;
            if expected.is_final {
                // Seen from the solver, who has just moved
                let flip = render::flip_for(self.position.turn().other());
                render::draw(out, self.position.board(), flip, self.options.colorize)?;
                writeln!(out, "Puzzle completed.")?;
            } else if self.options.board_after_reply {
                self.show_board(out)?;
            }
        }

        Ok(outcome)
    }

    /// Play the solver's move and, unless it was the last one, the opponent's reply.
    fn play_step<W: Write>(
        &mut self,
        expected: &ExpectedMove,
        out: &mut W,
    ) -> Result<(), TrainerError> {
        self.position.play_unchecked(expected.mv);
        if expected.is_final {
            return Ok(());
        }

        let reply_coordinate = &self.solution[self.cursor + 1];
        let reply = notation::decode_coordinate(&self.position, reply_coordinate)?;
        writeln!(out, "Opponent played {}.", notation::to_algebraic(&self.position, reply))?;
        self.position.play_unchecked(reply);
        Ok(())
    }

    fn show_board<W: Write>(&self, out: &mut W) -> Result<(), TrainerError> {
        let flip = render::flip_for(self.position.turn());
        render::draw(out, self.position.board(), flip, self.options.colorize)?;
        Ok(())
    }
}

fn print_help<W: Write>(out: &mut W) -> Result<(), TrainerError> {
    writeln!(out, "\nHelp:")?;
    for line in HELP {
        writeln!(out, "{line}")?;
    }
    writeln!(out)?;
    Ok(())
}
