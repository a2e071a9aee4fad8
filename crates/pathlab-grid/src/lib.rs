//! **pathlab-grid** — board model for the pathlab search sandbox.
//!
//! This crate provides the editable square board a search runs on: the
//! [`Coord`] geometry type, the [`CellKind`] vocabulary shared by logic and
//! presentation, and the [`Board`] arena with its ASCII layout format.

pub mod board;
pub mod cell;
pub mod geom;

pub use board::{Board, BoardError};
pub use cell::CellKind;
pub use geom::Coord;
