//! Interactive game session: print the board, prompt, read a line, repeat.

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use patzer_core::Board;

use crate::error::ReplError;

/// Outcome of handling one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// Keep prompting.
    Continue,
    /// The user asked to quit.
    Quit,
}

/// An interactive game session owning the board.
///
/// Each accepted move runs to completion before the next line is read;
/// rejected moves print their reason and re-prompt the same side.
pub struct Session {
    board: Board,
}

impl Session {
    /// Create a session with the standard starting position.
    pub fn new() -> Session {
        Session {
            board: Board::new(),
        }
    }

    /// Return the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Run the session, reading moves from stdin until `quit` or end of input.
    pub fn run(mut self) -> Result<(), ReplError> {
        let stdin = io::stdin();
        let mut reader = stdin.lock();
        let mut line = String::new();

        loop {
            print!("{}", self.board.pretty());
            print!("{} to move: ", self.board.side_to_move());
            io::stdout().flush()?;

            line.clear();
            if reader.read_line(&mut line)? == 0 {
                info!("input closed, ending session");
                break;
            }
            if self.handle_line(line.trim_end_matches(['\r', '\n'])) == LineOutcome::Quit {
                println!("Goodbye!");
                break;
            }
        }

        Ok(())
    }

    /// Handle one input line: either the `quit` command or a move.
    pub fn handle_line(&mut self, line: &str) -> LineOutcome {
        if line == "quit" {
            return LineOutcome::Quit;
        }
        debug!(input = %line, "processing move");
        println!("Moving {line}");
        if let Err(err) = self.board.process_move(line) {
            println!("{err}");
        }
        LineOutcome::Continue
    }
}

impl Default for Session {
    fn default() -> Session {
        Session::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{LineOutcome, Session};
    use patzer_core::Color;

    #[test]
    fn quit_ends_the_session() {
        let mut session = Session::new();
        assert_eq!(session.handle_line("quit"), LineOutcome::Quit);
    }

    #[test]
    fn a_legal_move_flips_the_side_to_move() {
        let mut session = Session::new();
        assert_eq!(session.handle_line("e4"), LineOutcome::Continue);
        assert_eq!(session.board().side_to_move(), Color::Black);
    }

    #[test]
    fn a_rejected_move_keeps_the_same_side_to_move() {
        let mut session = Session::new();
        assert_eq!(session.handle_line("Qh4"), LineOutcome::Continue);
        assert_eq!(session.board().side_to_move(), Color::White);

        assert_eq!(session.handle_line("e"), LineOutcome::Continue);
        assert_eq!(session.board().side_to_move(), Color::White);
    }

    #[test]
    fn quit_must_match_exactly() {
        let mut session = Session::new();
        // "quit!" is not the quit command; it falls through to move parsing.
        assert_eq!(session.handle_line("quit!"), LineOutcome::Continue);
    }
}
