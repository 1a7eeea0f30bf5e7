//! Word search puzzle engine.
//!
//! Builds a square letter grid hiding a list of words in any of eight
//! directions, then fills the remaining cells with random letters. The
//! resulting [`Puzzle`] carries the grid and the path of every placed word
//! so that renderers can produce both the unsolved and the solved view.

mod error;
mod generator;
mod grid;
mod puzzle;
mod types;
mod word_list;

pub use error::{GenerateError, WordListError};
pub use generator::{GeneratorConfig, GridBuilder, PlacementOutcome, MAX_CELLS};
pub use grid::Grid;
pub use puzzle::{PlacedWord, Puzzle};
pub use types::{Direction, Placement, Position};
pub use word_list::{WordList, DEFAULT_TITLE};

/// Letters used for the fill step, in draw order.
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
