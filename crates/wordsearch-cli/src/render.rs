//! Text rendering of a finished puzzle: the unsolved view (grid and word
//! list) and the solved view (word paths marked on the grid).

use crate::theme::Theme;
use crossterm::{
    queue,
    style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor},
};
use std::io::{self, Write};
use wordsearch_core::Puzzle;

/// Characters available for the word list
const PAGE_WIDTH: usize = 80;

/// How the solved view marks word paths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Letters off every path become `.`
    Plain,
    /// Each word's cells get a background from the theme palette
    Color,
}

pub fn render_unsolved<W: Write>(out: &mut W, puzzle: &Puzzle) -> io::Result<()> {
    render_header(out, puzzle, false)?;
    for row in puzzle.grid().rows() {
        let letters: Vec<String> = row
            .iter()
            .map(|c| c.unwrap_or(' ').to_string())
            .collect();
        writeln!(out, "| {} |", letters.join(" "))?;
    }
    render_border(out, puzzle)?;
    render_word_list(out, puzzle)
}

pub fn render_solved<W: Write>(
    out: &mut W,
    puzzle: &Puzzle,
    style: Style,
    theme: &Theme,
) -> io::Result<()> {
    render_header(out, puzzle, true)?;
    let size = puzzle.grid().size();
    let owners = puzzle.cell_owners();

    for (row_idx, row) in puzzle.grid().rows().enumerate() {
        write!(out, "|")?;
        for (col_idx, cell) in row.iter().enumerate() {
            let letter = cell.unwrap_or(' ');
            let owner = owners[row_idx * size + col_idx];
            match (style, owner) {
                (Style::Plain, Some(_)) => write!(out, " {}", letter)?,
                (Style::Plain, None) => write!(out, " .")?,
                (Style::Color, Some(idx)) => {
                    write!(out, " ")?;
                    queue!(
                        out,
                        SetBackgroundColor(theme.word_color(idx)),
                        SetForegroundColor(theme.highlight_fg),
                        Print(letter),
                        ResetColor
                    )?;
                }
                (Style::Color, None) => {
                    write!(out, " ")?;
                    queue!(out, SetForegroundColor(theme.letter), Print(letter), ResetColor)?;
                }
            }
        }
        writeln!(out, " |")?;
    }
    render_border(out, puzzle)?;
    render_word_list(out, puzzle)
}

fn render_header<W: Write>(out: &mut W, puzzle: &Puzzle, solved: bool) -> io::Result<()> {
    writeln!(out, "{}", puzzle.title)?;
    if solved {
        writeln!(out, "*Solved Version*")?;
    }
    writeln!(out)?;
    render_border(out, puzzle)
}

fn render_border<W: Write>(out: &mut W, puzzle: &Puzzle) -> io::Result<()> {
    writeln!(out, "+{}+", "-".repeat(puzzle.grid().size() * 2 + 1))
}

fn render_word_list<W: Write>(out: &mut W, puzzle: &Puzzle) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Words to Find")?;
    writeln!(out, "{}", word_count_message(puzzle))?;
    if let Some(caveat) = dropped_caveat(puzzle) {
        writeln!(out, "{}", caveat)?;
    }
    writeln!(out)?;

    for line in word_columns(&puzzle.sorted_words()) {
        writeln!(out, "{}", line.trim_end())?;
    }
    Ok(())
}

pub fn word_count_message(puzzle: &Puzzle) -> String {
    let base = format!("Find all {} words hidden in the puzzle", puzzle.placed_count());
    if puzzle.description.trim().is_empty() {
        base
    } else {
        format!("{} - {}", base, puzzle.description.trim())
    }
}

pub fn dropped_caveat(puzzle: &Puzzle) -> Option<String> {
    (!puzzle.is_complete()).then(|| {
        format!(
            "({} of {} requested words could not be placed)",
            puzzle.dropped().len(),
            puzzle.requested()
        )
    })
}

/// Lay `words` out column-major in 2 to 5 columns across the page
pub fn word_columns(words: &[&str]) -> Vec<String> {
    let Some(max_len) = words.iter().map(|w| w.len()).max() else {
        return Vec::new();
    };
    let cell_width = max_len + 4;
    let columns = (PAGE_WIDTH / cell_width).clamp(2, 5);
    let per_column = words.len().div_ceil(columns);

    (0..per_column)
        .map(|row| {
            (0..columns)
                .filter_map(|col| words.get(col * per_column + row))
                .map(|word| format!("{:<width$}", format!("* {}", word), width = cell_width))
                .collect::<String>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordsearch_core::{GeneratorConfig, GridBuilder};

    fn puzzle(words: &[&str], size: usize) -> Puzzle {
        GridBuilder::with_seed(GeneratorConfig::new(size, 100), 17)
            .generate(words)
            .unwrap()
            .with_title("Animals", "Creatures great and small")
    }

    fn render_to_string(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_unsolved_view() {
        let puzzle = puzzle(&["cat", "dog", "horse"], 8);
        let text = render_to_string(|out| render_unsolved(out, &puzzle));

        assert!(text.starts_with("Animals\n"));
        assert!(!text.contains("Solved"));
        assert!(text.contains("Find all 3 words hidden in the puzzle - Creatures great and small"));
        assert!(text.contains("* CAT"));
        assert!(text.contains("* HORSE"));
        // 8 grid rows plus 2 borders
        assert_eq!(text.lines().filter(|l| l.starts_with('|')).count(), 8);
        assert_eq!(text.lines().filter(|l| l.starts_with('+')).count(), 2);
    }

    #[test]
    fn test_solved_plain_marks_paths_only() {
        let puzzle = puzzle(&["cat", "dog"], 6);
        let text = render_to_string(|out| {
            render_solved(out, &puzzle, Style::Plain, &Theme::default())
        });
        assert!(text.contains("*Solved Version*"));

        let letters: usize = text
            .lines()
            .filter(|l| l.starts_with('|'))
            .flat_map(|l| l.chars())
            .filter(|c| c.is_ascii_uppercase())
            .count();
        let covered = puzzle.cell_owners().iter().filter(|o| o.is_some()).count();
        assert_eq!(letters, covered);
    }

    #[test]
    fn test_solved_color_emits_escapes() {
        let puzzle = puzzle(&["cat"], 5);
        let text = render_to_string(|out| {
            render_solved(out, &puzzle, Style::Color, &Theme::default())
        });
        assert!(text.contains("\u{1b}["));
    }

    #[test]
    fn test_dropped_caveat() {
        let puzzle = puzzle(&["cat", "hippopotamus"], 5);
        assert_eq!(
            dropped_caveat(&puzzle).as_deref(),
            Some("(1 of 2 requested words could not be placed)")
        );
        let text = render_to_string(|out| render_unsolved(out, &puzzle));
        assert!(text.contains("Find all 1 words hidden in the puzzle"));
        assert!(!text.contains("HIPPOPOTAMUS"));
    }

    #[test]
    fn test_word_columns_layout() {
        let words = ["ANT", "BEE", "CAT", "DOG", "EMU", "FOX", "GNU"];
        let lines = word_columns(&words);
        // 80 / 7 = 11 columns, clamped to 5; 7 words -> 2 rows
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("* ANT"));
        assert!(lines[0].contains("* CAT"));
        assert!(lines[1].starts_with("* BEE"));

        let long = ["ABCDEFGHIJKLMNOPQRSTUVWXYZABCDEFGHIJKLMN"];
        assert_eq!(word_columns(&long).len(), 1);
        assert!(word_columns(&[]).is_empty());
    }
}
