pub mod board;
pub mod config;
pub mod controller;
pub mod outcome;
pub mod strategy;

pub use board::{Board, Cell, Side, WinningLine};
pub use controller::{OpponentTurn, Phase, Placement, RoundController};
pub use outcome::RoundOutcome;
pub use strategy::{Heuristic, Strategy};
