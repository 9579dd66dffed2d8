//! Xiangqi rules as composable pure functions.
//!
//! Shape predicates ignore the board. Obstruction, check and checkmate
//! queries read it, and checkmate tries trial positions that are undone
//! before returning.

pub mod check;
pub mod checkmate;
pub mod obstruction;
pub mod shape;

pub use check::{Threat, find_threat, is_in_check};
pub use checkmate::is_checkmate;
pub use obstruction::{check_path, count_between, elephant_eye, horse_leg};
pub use shape::shape_legal;
