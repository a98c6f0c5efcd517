use anyhow::{Context, Result};
use rand::{Rng, rngs::ThreadRng, seq::IteratorRandom};

use crate::board::{Board, Cell, Side, WinningLine};

/// Picks a cell for `me` to play. Implementations must only read the board.
pub trait Strategy {
    fn select_move(&mut self, board: &Board, me: Side, other: Side) -> Result<(usize, usize)>;
}

/// One-ply opponent: finish a line, block a line, take the center, else play
/// any empty cell at random.
pub struct Heuristic<R = ThreadRng> {
    rng: R,
}

impl Heuristic<ThreadRng> {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for Heuristic<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Heuristic<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

/// The empty cell of the first line in which `side` holds the other two.
fn completing_cell(board: &Board, side: Side) -> Option<(usize, usize)> {
    Board::all_winning_lines()
        .iter()
        .find_map(|line| open_cell(board, line, side))
}

fn open_cell(board: &Board, line: &WinningLine, side: Side) -> Option<(usize, usize)> {
    let mut held = 0;
    let mut open = None;
    for &(row, col) in &line.cells {
        match board.occupant_at(row, col) {
            Cell::Filled(owner) if owner == side => held += 1,
            Cell::Filled(_) => return None,
            Cell::Empty => open = Some((row, col)),
        }
    }
    if held == 2 { open } else { None }
}

impl<R: Rng> Strategy for Heuristic<R> {
    fn select_move(&mut self, board: &Board, me: Side, other: Side) -> Result<(usize, usize)> {
        if let Some(cell) = completing_cell(board, me) {
            log::debug!("{:?} completes a line at {:?}", me, cell);
            return Ok(cell);
        }
        if let Some(cell) = completing_cell(board, other) {
            log::debug!("{:?} blocks {:?} at {:?}", me, other, cell);
            return Ok(cell);
        }
        if board.placement_allowed(1, 1) {
            log::debug!("{:?} takes the center", me);
            return Ok((1, 1));
        }

        let cell = board
            .empty_cells()
            .choose(&mut self.rng)
            .context("no empty cell left to select")?;
        log::debug!("{:?} falls back to random cell {:?}", me, cell);
        Ok(cell)
    }
}
