use crate::{Grid, Placement, DEFAULT_TITLE};
use serde::{Deserialize, Serialize};

/// A word that made it into the grid, with the cells it occupies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedWord {
    pub word: String,
    pub placement: Placement,
}

/// A finished word search: fully filled grid plus where each word lies.
///
/// This is what renderers consume. Placed words keep the order in which
/// they were placed (longest first), not alphabetical order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub title: String,
    pub description: String,
    grid: Grid,
    placed: Vec<PlacedWord>,
    dropped: Vec<String>,
    requested: usize,
    seed: Option<u64>,
}

impl Puzzle {
    pub(crate) fn new(
        grid: Grid,
        placed: Vec<PlacedWord>,
        dropped: Vec<String>,
        requested: usize,
        seed: Option<u64>,
    ) -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: String::new(),
            grid,
            placed,
            dropped,
            requested,
            seed,
        }
    }

    /// Attach a title and description. An empty title keeps the default.
    pub fn with_title(mut self, title: impl Into<String>, description: impl Into<String>) -> Self {
        let title = title.into();
        if !title.trim().is_empty() {
            self.title = title;
        }
        self.description = description.into();
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn placed(&self) -> &[PlacedWord] {
        &self.placed
    }

    /// Words left out: characters outside A-Z, or attempt budget exhausted
    pub fn dropped(&self) -> &[String] {
        &self.dropped
    }

    /// Number of non-blank words asked for, placed or not
    pub fn requested(&self) -> usize {
        self.requested
    }

    pub fn placed_count(&self) -> usize {
        self.placed.len()
    }

    /// Seed that reproduces this puzzle, if the random source was seeded
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// True when every requested word was placed
    pub fn is_complete(&self) -> bool {
        self.dropped.is_empty()
    }

    /// Placed words in alphabetical order, for the word list
    pub fn sorted_words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.placed.iter().map(|p| p.word.as_str()).collect();
        words.sort_unstable();
        words
    }

    pub fn placement_of(&self, word: &str) -> Option<&Placement> {
        let word = word.trim().to_ascii_uppercase();
        self.placed
            .iter()
            .find(|p| p.word == word)
            .map(|p| &p.placement)
    }

    /// For each cell in row-major order, the index of the first placed word
    /// whose path covers it.
    pub fn cell_owners(&self) -> Vec<Option<usize>> {
        let size = self.grid.size();
        let mut owners = vec![None; size * size];
        for (idx, placed) in self.placed.iter().enumerate() {
            for pos in placed.placement.cells() {
                let owner = &mut owners[pos.row * size + pos.col];
                if owner.is_none() {
                    *owner = Some(idx);
                }
            }
        }
        owners
    }

    /// Check the finished puzzle: grid fully filled with A-Z, and every
    /// placed word reads back along a straight in-bounds path.
    pub fn verify(&self) -> bool {
        let size = self.grid.size();
        let letters_ok = self
            .grid
            .rows()
            .flatten()
            .all(|c| c.is_some_and(|c| c.is_ascii_uppercase()));

        letters_ok
            && self.placed.iter().all(|p| {
                p.placement.len() == p.word.len()
                    && p.placement.is_straight()
                    && p.placement
                        .cells()
                        .iter()
                        .all(|pos| pos.row < size && pos.col < size)
                    && self.grid.read_placement(&p.placement).as_deref() == Some(p.word.as_str())
            })
    }
}
