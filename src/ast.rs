//! # Song Types
//!
//! Output of the directive parser and input of the HTML renderer.
//!
//! ```text
//! Vec<Block>
//!   ├── Section(name)          start of a table-of-contents group
//!   └── Song
//!         ├── title, file_name
//!         └── Vec<Element>
//!               ├── Blank
//!               ├── Lyrics(Line)    plain text + chords at text offsets
//!               ├── Comment / Subtitle
//!               └── StartOfChorus / EndOfChorus
//! ```
//!
//! Chords inside a `Line` are already transposed by whatever `{transpose}` offset
//! was active when the line was read.

/// A chord annotation and the plain-text column it sits above.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordToken {
    pub chord: String,
    pub position: usize,
}

impl ChordToken {
    pub fn new(chord: impl Into<String>, position: usize) -> Self {
        Self {
            chord: chord.into(),
            position,
        }
    }
}

/// A lyric line with its bracketed chords removed.
///
/// `chords` are in scan order, so positions never decrease, and no position exceeds
/// the character count of `text`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub chords: Vec<ChordToken>,
}

impl Line {
    pub fn has_chords(&self) -> bool {
        !self.chords.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Blank,
    Lyrics(Line),
    Comment(String),
    Subtitle(String),
    StartOfChorus,
    EndOfChorus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    pub title: String,
    pub file_name: String,
    pub body: Vec<Element>,
}

impl Song {
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            file_name: title_to_file_name(&title),
            title,
            body: Vec::new(),
        }
    }
}

/// Top-level items of a chopro source, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Section(String),
    Song(Song),
}

/// Output file name for a song title.
///
/// ```
/// use chopro::ast::title_to_file_name;
///
/// assert_eq!(title_to_file_name("Don't Think Twice"), "Don_t_Think_Twice.html");
/// ```
pub fn title_to_file_name(title: &str) -> String {
    let stem: String = title
        .chars()
        .map(|c| match c {
            ' ' | '\'' | '/' | '\\' => '_',
            c => c,
        })
        .collect();
    format!("{}.html", stem)
}
