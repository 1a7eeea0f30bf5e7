use crate::WordListError;
use std::fs;
use std::path::Path;

/// Title used when a word list has no header
pub const DEFAULT_TITLE: &str = "Word Search Puzzle";

/// A parsed word list file.
///
/// Files may start with a two-line header followed by the words, one per
/// line:
///
/// ```text
/// Title: Farm Animals
/// Desc: Find the animals hiding on the farm
///
/// COW
/// PIG
/// ```
///
/// Without the header every non-blank line is a word.
///
/// A combined file can hold several lists. Each section starts either with
/// its own `Title:` header, or with a `Puzzle N: <title>` line followed by
/// comma-separated words:
///
/// ```text
/// Puzzle 1: Essential Tools
/// HAMMER,SAW,LEVEL
/// WRENCH
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    pub title: String,
    pub description: String,
    pub words: Vec<String>,
}

impl WordList {
    pub fn parse(text: &str) -> Self {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        match lines.as_slice() {
            [first, second, rest @ ..] if first.starts_with("Title:") => Self {
                title: strip_label(first, "Title:"),
                description: strip_label(second, "Desc:"),
                words: rest.iter().map(|w| w.to_string()).collect(),
            },
            _ => Self {
                title: String::new(),
                description: String::new(),
                words: lines.iter().map(|w| w.to_string()).collect(),
            },
        }
    }

    /// Split a combined file into one list per section. Text before the
    /// first header is its own untitled section. Sections without words are
    /// skipped.
    pub fn parse_sections(text: &str) -> Vec<Self> {
        let mut sections: Vec<(SectionKind, Vec<&str>)> = Vec::new();
        for line in text.lines().map(str::trim) {
            let kind = if line.starts_with("Title:") {
                Some(SectionKind::Titled)
            } else if puzzle_header(line).is_some() {
                Some(SectionKind::Numbered)
            } else {
                None
            };
            match (kind, sections.last_mut()) {
                (Some(kind), _) => sections.push((kind, vec![line])),
                (None, Some((_, lines))) => lines.push(line),
                (None, None) => sections.push((SectionKind::Titled, vec![line])),
            }
        }

        sections
            .into_iter()
            .map(|(kind, lines)| match kind {
                SectionKind::Titled => Self::parse(&lines.join("\n")),
                SectionKind::Numbered => Self::parse_numbered(&lines),
            })
            .filter(|list| !list.is_empty())
            .collect()
    }

    /// `Puzzle N: <title>` followed by lines of comma-separated words
    fn parse_numbered(lines: &[&str]) -> Self {
        let title = lines
            .first()
            .and_then(|line| puzzle_header(line))
            .unwrap_or_default()
            .to_string();
        let words = lines
            .iter()
            .skip(1)
            .flat_map(|line| line.split(','))
            .map(str::trim)
            .filter(|word| !word.is_empty())
            .map(str::to_string)
            .collect();
        Self {
            title,
            description: String::new(),
            words,
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, WordListError> {
        Ok(Self::parse(&read(path.as_ref())?))
    }

    pub fn sections_from_path(path: impl AsRef<Path>) -> Result<Vec<Self>, WordListError> {
        Ok(Self::parse_sections(&read(path.as_ref())?))
    }

    /// Render in the single-list file format accepted by [`WordList::parse`]
    pub fn to_text(&self) -> String {
        let mut text = format!("Title: {}\nDesc: {}\n\n", self.display_title(), self.description);
        for word in &self.words {
            text.push_str(word);
            text.push('\n');
        }
        text
    }

    /// Title to display, falling back to [`DEFAULT_TITLE`]
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            DEFAULT_TITLE
        } else {
            &self.title
        }
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
enum SectionKind {
    Titled,
    Numbered,
}

fn read(path: &Path) -> Result<String, WordListError> {
    fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Title from a `Puzzle N: <title>` line
fn puzzle_header(line: &str) -> Option<&str> {
    let (label, title) = line.strip_prefix("Puzzle")?.split_once(':')?;
    label
        .chars()
        .all(|c| c.is_ascii_digit() || c.is_whitespace())
        .then(|| title.trim())
}

fn strip_label(line: &str, label: &str) -> String {
    line.strip_prefix(label).unwrap_or(line).trim().to_string()
}
