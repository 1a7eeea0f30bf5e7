use std::collections::HashMap;
use wordsearch_core::{GenerateError, GeneratorConfig, GridBuilder, Position, Puzzle, WordList};

const FRUIT: &[&str] = &[
    "apple",
    "banana",
    "cherry",
    "date",
    "elderberry",
    "fig",
    "grape",
    "honeydew",
    "kiwi",
    "lemon",
    "mango",
    "nectarine",
    "orange",
    "papaya",
    "quince",
    "raspberry",
];

fn generate(size: usize, seed: u64, words: &[&str]) -> Puzzle {
    GridBuilder::with_seed(GeneratorConfig::new(size, 100), seed)
        .generate(words)
        .unwrap()
}

#[test]
fn placed_words_read_back_along_their_paths() {
    for seed in 0..20 {
        let puzzle = generate(12, seed, FRUIT);
        assert!(puzzle.verify(), "seed {} failed verification", seed);
        for placed in puzzle.placed() {
            let read = puzzle.grid().read_placement(&placed.placement);
            assert_eq!(read.as_deref(), Some(placed.word.as_str()));
        }
    }
}

#[test]
fn shared_cells_agree_with_every_word() {
    for seed in 0..20 {
        let puzzle = generate(10, seed, FRUIT);
        let mut claimed: HashMap<Position, char> = HashMap::new();
        for placed in puzzle.placed() {
            for (pos, letter) in placed.placement.cells().iter().zip(placed.word.chars()) {
                let previous = claimed.insert(*pos, letter);
                if let Some(previous) = previous {
                    assert_eq!(previous, letter, "conflict at {} for seed {}", pos, seed);
                }
            }
        }
    }
}

#[test]
fn grid_has_no_blanks_after_generation() {
    for seed in 0..10 {
        let puzzle = generate(6, seed, FRUIT);
        assert!(puzzle.grid().is_full());
        for row in puzzle.grid().rows() {
            for cell in row {
                assert!(cell.is_some_and(|c| c.is_ascii_uppercase()));
            }
        }
    }
}

#[test]
fn placed_and_dropped_partition_the_input() {
    // a small grid forces some words out
    let puzzle = generate(6, 3, FRUIT);
    let upper: Vec<String> = FRUIT.iter().map(|w| w.to_ascii_uppercase()).collect();

    for placed in puzzle.placed() {
        assert!(upper.contains(&placed.word));
    }
    for word in puzzle.dropped() {
        assert!(upper.contains(word));
    }
    assert_eq!(puzzle.placed_count() + puzzle.dropped().len(), puzzle.requested());
    assert_eq!(puzzle.requested(), FRUIT.len());
    // ELDERBERRY and RASPBERRY cannot fit in six cells
    assert!(puzzle.dropped().contains(&"ELDERBERRY".to_string()));
    assert!(puzzle.dropped().contains(&"RASPBERRY".to_string()));
}

#[test]
fn fixed_seed_is_deterministic() {
    let a = generate(12, 99, FRUIT);
    let b = generate(12, 99, FRUIT);
    assert_eq!(a.grid(), b.grid());
    assert_eq!(a.placed(), b.placed());
}

#[test]
fn different_seeds_usually_differ() {
    let grids: Vec<_> = (0..5).map(|seed| generate(12, seed, FRUIT)).collect();
    assert!(grids.windows(2).any(|pair| pair[0].grid() != pair[1].grid()));
}

#[test]
fn word_list_file_feeds_the_builder() {
    let list = WordList::parse("Title: Fruit\nDesc: Sweet things\n\nfig\nkiwi\n");
    let puzzle = GridBuilder::with_seed(GeneratorConfig::new(8, 100), 1)
        .generate(&list.words)
        .unwrap()
        .with_title(list.title.clone(), list.description.clone());

    assert_eq!(puzzle.title, "Fruit");
    assert_eq!(puzzle.sorted_words(), vec!["FIG", "KIWI"]);
}

#[test]
fn empty_input_produces_no_grid() {
    let list = WordList::parse("Title: Nothing\nDesc: Empty\n\n");
    let result = GridBuilder::with_seed(GeneratorConfig::default(), 1).generate(&list.words);
    assert_eq!(result.unwrap_err(), GenerateError::EmptyWordList);
}
