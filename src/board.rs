use std::fmt;
use anyhow::{Result, bail};

pub const SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Human,
    Opponent,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Human => Side::Opponent,
            Side::Opponent => Side::Human,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Side::Human => 'O',
            Side::Opponent => 'X',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Filled(Side),
}

/// Three cells that win the round when held by a single side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinningLine {
    pub cells: [(usize, usize); 3],
}

impl WinningLine {
    const fn new(cells: [(usize, usize); 3]) -> Self {
        Self { cells }
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells.contains(&(row, col))
    }
}

/// Rows, then columns, then diagonals. Evaluation and the opponent's scan both
/// depend on this order.
pub const WINNING_LINES: [WinningLine; 8] = [
    WinningLine::new([(0, 0), (0, 1), (0, 2)]),
    WinningLine::new([(1, 0), (1, 1), (1, 2)]),
    WinningLine::new([(2, 0), (2, 1), (2, 2)]),
    WinningLine::new([(0, 0), (1, 0), (2, 0)]),
    WinningLine::new([(0, 1), (1, 1), (2, 1)]),
    WinningLine::new([(0, 2), (1, 2), (2, 2)]),
    WinningLine::new([(0, 0), (1, 1), (2, 2)]),
    WinningLine::new([(2, 0), (1, 1), (0, 2)]),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    pub fn in_bounds(row: usize, col: usize) -> bool {
        row < SIZE && col < SIZE
    }

    pub fn all_winning_lines() -> &'static [WinningLine; 8] {
        &WINNING_LINES
    }

    pub fn occupant_at(&self, row: usize, col: usize) -> Cell {
        assert!(Self::in_bounds(row, col), "cell ({}, {}) is off the board", row, col);
        self.cells[row][col]
    }

    pub fn placement_allowed(&self, row: usize, col: usize) -> bool {
        self.occupant_at(row, col) == Cell::Empty
    }

    // Callers are expected to check `placement_allowed` first
    pub fn place(&mut self, row: usize, col: usize, side: Side) -> Result<()> {
        match self.occupant_at(row, col) {
            Cell::Empty => {
                self.cells[row][col] = Cell::Filled(side);
                Ok(())
            },
            Cell::Filled(owner) => bail!("cell ({}, {}) is already held by {:?}", row, col, owner),
        }
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| *cell != Cell::Empty)
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..SIZE)
            .flat_map(|row| (0..SIZE).map(move |col| (row, col)))
            .filter(move |&(row, col)| self.cells[row][col] == Cell::Empty)
    }

    pub fn count(&self, side: Side) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell == Cell::Filled(side))
            .count()
    }

    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; SIZE]; SIZE];
    }

    pub fn highlighted<'a>(&'a self, line: Option<&'a WinningLine>) -> Highlighted<'a> {
        Highlighted { board: self, line }
    }
}

/// Renders a board with the cells of a winning line marked by `*`.
pub struct Highlighted<'a> {
    board: &'a Board,
    line: Option<&'a WinningLine>,
}

impl fmt::Display for Highlighted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "  0 1 2")?;
        for (r, row) in self.board.cells.iter().enumerate() {
            write!(f, "{}", r)?;
            for (c, cell) in row.iter().enumerate() {
                let marked = self.line.map_or(false, |line| line.contains(r, c));
                let symbol = match cell {
                    Cell::Empty => '.',
                    Cell::Filled(side) => side.symbol(),
                };
                write!(f, "{}{}", if marked { '*' } else { ' ' }, symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.highlighted(None), f)
    }
}
