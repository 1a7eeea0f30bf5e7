use crate::{
    Direction, GenerateError, Grid, PlacedWord, Placement, Position, Puzzle, ALPHABET,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cmp::Reverse;
use tracing::{debug, info, warn};

/// Largest number of cells a grid may have (1024 x 1024)
pub const MAX_CELLS: usize = 1 << 20;

/// Configuration for puzzle generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Width and height of the grid
    pub grid_size: usize,
    /// Maximum placement attempts per word before it is dropped
    pub max_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,
            max_attempts: 100,
        }
    }
}

impl GeneratorConfig {
    pub fn new(grid_size: usize, max_attempts: usize) -> Self {
        Self {
            grid_size,
            max_attempts,
        }
    }

    pub fn validate(&self) -> Result<(), GenerateError> {
        let cells = self.grid_size.checked_mul(self.grid_size);
        if self.grid_size == 0 || cells.map_or(true, |cells| cells > MAX_CELLS) {
            return Err(GenerateError::InvalidGridSize(self.grid_size));
        }
        if self.max_attempts == 0 {
            return Err(GenerateError::InvalidAttemptBudget(self.max_attempts));
        }
        Ok(())
    }
}

/// Result of trying to place one word within its attempt budget
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementOutcome {
    Placed(Placement),
    Exhausted { attempts: usize },
}

impl PlacementOutcome {
    pub fn placement(&self) -> Option<&Placement> {
        match self {
            PlacementOutcome::Placed(placement) => Some(placement),
            PlacementOutcome::Exhausted { .. } => None,
        }
    }
}

/// Word search grid builder.
///
/// Randomness is consumed in a fixed order so a seeded builder always
/// produces the same puzzle:
/// - each placement attempt draws one cell index in `0..size*size`
///   (row-major), then one index into [`Direction::ALL`];
/// - the fill step draws one index into [`ALPHABET`] per blank cell, in
///   row-major order.
pub struct GridBuilder<R: Rng = StdRng> {
    config: GeneratorConfig,
    rng: R,
    seed: Option<u64>,
}

impl GridBuilder<StdRng> {
    /// Create a builder seeded from OS entropy. The seed is kept so the
    /// puzzle can be reproduced later.
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_seed(config, entropy_seed())
    }

    /// Create a builder with a specific seed for reproducibility
    pub fn with_seed(config: GeneratorConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }
}

impl<R: Rng> GridBuilder<R> {
    /// Create a builder drawing from a caller-supplied random source
    pub fn with_rng(config: GeneratorConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            seed: None,
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Build a puzzle from `words`.
    ///
    /// Words are trimmed and uppercased, blank entries skipped. Words with
    /// characters outside A-Z, and words that cannot be placed within the
    /// attempt budget, are dropped and logged; only whole-input problems are
    /// returned as errors.
    pub fn generate<S: AsRef<str>>(mut self, words: &[S]) -> Result<Puzzle, GenerateError> {
        let (mut words, mut dropped) = normalize_words(words);
        if words.is_empty() {
            return Err(GenerateError::EmptyWordList);
        }
        self.config.validate()?;
        let requested = words.len() + dropped.len();

        // sort_by_key is stable, equal lengths keep their input order
        words.sort_by_key(|word| Reverse(word.len()));

        let mut grid = Grid::new(self.config.grid_size);
        let mut placed = Vec::with_capacity(words.len());

        for word in &words {
            match self.try_place(&mut grid, word) {
                PlacementOutcome::Placed(placement) => {
                    debug!(
                        word = %word,
                        start = %placement.start,
                        direction = %placement.direction,
                        "placed word"
                    );
                    placed.push(PlacedWord {
                        word: word.clone(),
                        placement,
                    });
                }
                PlacementOutcome::Exhausted { attempts } => {
                    warn!(word = %word, attempts, "could not place word in the grid");
                    dropped.push(word.clone());
                }
            }
        }

        self.fill_blanks(&mut grid);

        info!(
            placed = placed.len(),
            requested,
            grid_size = self.config.grid_size,
            seed = ?self.seed,
            "generated word search"
        );

        Ok(Puzzle::new(grid, placed, dropped, requested, self.seed))
    }

    /// Try to place `word` on `grid`, spending up to `max_attempts` random
    /// attempts. Every attempt counts against the budget, including ones
    /// that run off the grid. An empty grid fails every attempt.
    pub fn try_place(&mut self, grid: &mut Grid, word: &str) -> PlacementOutcome {
        if grid.size() == 0 {
            return PlacementOutcome::Exhausted {
                attempts: self.config.max_attempts,
            };
        }
        let letters: Vec<char> = word.chars().collect();

        for _ in 0..self.config.max_attempts {
            let (start, direction) = self.random_start(grid.size());
            if let Some(placement) = fit(grid, &letters, start, direction) {
                commit(grid, &letters, &placement);
                return PlacementOutcome::Placed(placement);
            }
        }

        PlacementOutcome::Exhausted {
            attempts: self.config.max_attempts,
        }
    }

    fn random_start(&mut self, size: usize) -> (Position, Direction) {
        let cell = self.rng.gen_range(0..size * size);
        let direction = Direction::ALL[self.rng.gen_range(0..Direction::ALL.len())];
        (Position::new(cell / size, cell % size), direction)
    }

    /// Fill every blank cell with a uniformly random letter
    fn fill_blanks(&mut self, grid: &mut Grid) {
        let blanks: Vec<Position> = grid.blank_positions().collect();
        for pos in blanks {
            let letter = ALPHABET[self.rng.gen_range(0..ALPHABET.len())] as char;
            grid.set(pos, letter);
        }
    }
}

/// Check whether `letters` fit on `grid` from `start` along `direction`.
/// Cells must be blank or already hold the matching letter. Does not touch
/// the grid.
pub(crate) fn fit(
    grid: &Grid,
    letters: &[char],
    start: Position,
    direction: Direction,
) -> Option<Placement> {
    let placement = Placement::trace(start, direction, letters.len(), grid.size())?;
    let fits = placement
        .cells()
        .iter()
        .zip(letters)
        .all(|(&pos, &letter)| match grid.get(pos) {
            None => true,
            Some(existing) => existing == letter,
        });
    fits.then_some(placement)
}

/// Write a placement returned by `fit`. Cells already holding the right
/// letter are left as they are.
pub(crate) fn commit(grid: &mut Grid, letters: &[char], placement: &Placement) {
    for (&pos, &letter) in placement.cells().iter().zip(letters) {
        if grid.is_blank(pos) {
            grid.set(pos, letter);
        }
    }
}

/// Trim and uppercase `words`, skipping blank entries. Returns the usable
/// words and the ones rejected for characters outside A-Z.
fn normalize_words<S: AsRef<str>>(words: &[S]) -> (Vec<String>, Vec<String>) {
    let mut normalized = Vec::with_capacity(words.len());
    let mut rejected = Vec::new();
    for word in words {
        let word = word.as_ref().trim();
        if word.is_empty() {
            continue;
        }
        let upper = word.to_ascii_uppercase();
        if upper.bytes().all(|b| b.is_ascii_uppercase()) {
            normalized.push(upper);
        } else {
            warn!(word = %word, "skipping word with characters other than A-Z");
            rejected.push(upper);
        }
    }
    (normalized, rejected)
}

fn entropy_seed() -> u64 {
    let mut seed_bytes = [0u8; 8];
    if getrandom::getrandom(&mut seed_bytes).is_err() {
        // Fallback: use a process counter if the OS source is unavailable
        static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);
        let counter = COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        seed_bytes = counter.to_le_bytes();
    }
    u64::from_le_bytes(seed_bytes)
}
