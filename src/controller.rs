use anyhow::Result;

use crate::board::{Board, Side, WinningLine};
use crate::outcome::{RoundOutcome, evaluate};
use crate::strategy::Strategy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingHuman,
    AwaitingOpponent,
    RoundOver(RoundOutcome),
}

/// A pending opponent move, valid only for the round it was issued in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpponentTurn {
    round: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Ignored,
    OpponentToMove(OpponentTurn),
    RoundOver(RoundOutcome),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Scores {
    human: u32,
    opponent: u32,
}

impl Scores {
    fn credit(&mut self, side: Side) {
        match side {
            Side::Human => self.human += 1,
            Side::Opponent => self.opponent += 1,
        }
    }
}

/// Owns a game session: the board, whose turn it is, and the running score.
pub struct RoundController<S> {
    board: Board,
    strategy: S,
    phase: Phase,
    turn: Side,
    next_opener: Side,
    winning_line: Option<WinningLine>,
    scores: Scores,
    round: u64,
    observer: Option<Box<dyn FnMut(&Board)>>,
}

impl<S: Strategy> RoundController<S> {
    pub fn new(strategy: S) -> Self {
        Self {
            board: Board::new(),
            strategy,
            phase: Phase::AwaitingHuman,
            turn: Side::Human,
            next_opener: Side::Human,
            winning_line: None,
            scores: Scores::default(),
            round: 0,
            observer: None,
        }
    }

    /// Called with the board after every placement and reset.
    pub fn set_observer(&mut self, observer: impl FnMut(&Board) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_turn(&self) -> Side {
        self.turn
    }

    pub fn current_outcome(&self) -> RoundOutcome {
        evaluate(&self.board)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    /// (human, opponent)
    pub fn scores(&self) -> (u32, u32) {
        (self.scores.human, self.scores.opponent)
    }

    pub fn pending_turn(&self) -> Option<OpponentTurn> {
        match self.phase {
            Phase::AwaitingOpponent => Some(OpponentTurn { round: self.round }),
            _ => None,
        }
    }

    pub fn attempt_human_placement(&mut self, row: usize, col: usize) -> Result<Placement> {
        if !Board::in_bounds(row, col) {
            log::warn!("ignoring placement outside the board at ({}, {})", row, col);
            return Ok(Placement::Ignored);
        }
        if self.phase != Phase::AwaitingHuman || !self.board.placement_allowed(row, col) {
            log::debug!("ignoring human placement at ({}, {}) during {:?}", row, col, self.phase);
            return Ok(Placement::Ignored);
        }

        match self.apply(row, col, Side::Human)? {
            RoundOutcome::InProgress => Ok(Placement::OpponentToMove(OpponentTurn { round: self.round })),
            outcome => Ok(Placement::RoundOver(outcome)),
        }
    }

    /// Plays the opponent's move. A turn from an earlier round, or one that was
    /// already played, does nothing and yields `None`.
    pub fn play_opponent_turn(&mut self, turn: OpponentTurn) -> Result<Option<(usize, usize)>> {
        if turn.round != self.round || self.phase != Phase::AwaitingOpponent {
            log::debug!("dropping stale opponent turn from round {}", turn.round);
            return Ok(None);
        }

        let (row, col) = self.strategy.select_move(&self.board, Side::Opponent, Side::Human)?;
        self.apply(row, col, Side::Opponent)?;
        Ok(Some((row, col)))
    }

    /// Credits the winner of a finished round, clears the board and hands the
    /// opening move to the side that did not win. Returns the opponent's turn
    /// when it opens.
    pub fn start_new_round(&mut self) -> Option<OpponentTurn> {
        if let Phase::RoundOver(outcome) = self.phase {
            if let Some(winner) = outcome.winner() {
                self.scores.credit(winner);
            }
        }

        self.board.reset();
        self.winning_line = None;
        self.round += 1;
        self.turn = self.next_opener;
        self.phase = match self.turn {
            Side::Human => Phase::AwaitingHuman,
            Side::Opponent => Phase::AwaitingOpponent,
        };
        log::info!("round {} opened by {:?}", self.round, self.turn);
        self.notify();
        self.pending_turn()
    }

    fn apply(&mut self, row: usize, col: usize, side: Side) -> Result<RoundOutcome> {
        self.board.place(row, col, side)?;
        log::debug!("{:?} placed at ({}, {})", side, row, col);
        self.notify();

        let outcome = evaluate(&self.board);
        match outcome {
            RoundOutcome::InProgress => {
                self.turn = side.other();
                self.phase = match self.turn {
                    Side::Human => Phase::AwaitingHuman,
                    Side::Opponent => Phase::AwaitingOpponent,
                };
            },
            RoundOutcome::Won(winner, line) => {
                log::info!("{:?} wins round {}", winner, self.round);
                self.winning_line = Some(line);
                self.next_opener = winner.other();
                self.phase = Phase::RoundOver(outcome);
            },
            RoundOutcome::Drawn => {
                log::info!("round {} drawn", self.round);
                self.next_opener = Side::Opponent;
                self.phase = Phase::RoundOver(outcome);
            },
        }
        Ok(outcome)
    }

    fn notify(&mut self) {
        if let Some(observer) = self.observer.as_mut() {
            observer(&self.board);
        }
    }
}
