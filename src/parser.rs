//! # Directive Dispatcher
//!
//! Reads chopro source line by line and builds [`Block`]s.
//!
//! | Line                  | Handling                                         |
//! |-----------------------|--------------------------------------------------|
//! | empty                 | `Element::Blank` in the open song                |
//! | `# ...`               | skipped                                          |
//! | `{name}` / `{name: x}`| directive, dropped if there is no closing `}`    |
//! | anything else         | tokenized into `Element::Lyrics`                 |
//!
//! Directive names are case-insensitive:
//!
//! | Directive                | Effect                                        |
//! |--------------------------|-----------------------------------------------|
//! | `title`, `ti`            | closes the open song and starts a new one     |
//! | `subtitle`, `st`         | subtitle span                                 |
//! | `comment`, `c`           | comment span                                  |
//! | `start_of_chorus`, `soc` | opens the chorus bar                          |
//! | `end_of_chorus`, `eoc`   | closes the chorus bar                         |
//! | `transpose`              | offset applied to chords until the next title |
//! | `section`                | starts a new table-of-contents group          |
//!
//! Unknown directives are ignored.

use log::{debug, info};

use crate::ast::{Block, Element, Song};
use crate::error::ChoproError;
use crate::lexer::tokenize;
use crate::transpose::transpose;

/// A `{name: content}` line split into its parts. `name` is lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive<'a> {
    pub name: String,
    pub content: &'a str,
}

/// Split a directive line. Returns `None` when the closing `}` is missing.
///
/// ```
/// use chopro::parser::parse_directive;
///
/// let directive = parse_directive("{Title: Blowin' in the Wind }").unwrap();
/// assert_eq!(directive.name, "title");
/// assert_eq!(directive.content, "Blowin' in the Wind");
/// assert!(parse_directive("{title: no end").is_none());
/// ```
pub fn parse_directive(line: &str) -> Option<Directive<'_>> {
    let inner = line.strip_prefix('{')?;
    let end = inner.find('}')?;
    let inner = &inner[..end];
    let (name, content) = match inner.find(':') {
        Some(colon) => (&inner[..colon], inner[colon + 1..].trim()),
        None => (inner, ""),
    };
    Some(Directive {
        name: name.trim().to_lowercase(),
        content,
    })
}

/// Per-source parsing state.
pub struct Parser {
    blocks: Vec<Block>,
    /// Whether the last `Block::Song` in `blocks` is still receiving lines.
    song_open: bool,
    transpose: i32,
    line: usize,
}

impl Parser {
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            song_open: false,
            transpose: 0,
            line: 0,
        }
    }

    /// Transpose offset currently applied to chords.
    pub fn transpose(&self) -> i32 {
        self.transpose
    }

    pub fn parse_line(&mut self, line: &str) -> Result<(), ChoproError> {
        self.line += 1;

        if line.is_empty() {
            if self.song_open {
                self.push(Element::Blank)?;
            }
            return Ok(());
        }

        if line.starts_with('#') {
            return Ok(());
        }

        if line.starts_with('{') {
            return match parse_directive(line) {
                Some(directive) => self.apply_directive(&directive),
                None => {
                    debug!("Line {}: unterminated directive dropped", self.line);
                    Ok(())
                }
            };
        }

        let mut lyrics = tokenize(line);
        if self.transpose != 0 {
            for token in &mut lyrics.chords {
                token.chord = transpose(&token.chord, self.transpose);
            }
        }
        self.push(Element::Lyrics(lyrics))
    }

    fn apply_directive(&mut self, directive: &Directive<'_>) -> Result<(), ChoproError> {
        let content = directive.content;
        match directive.name.as_str() {
            "title" | "ti" => {
                let song = Song::new(content);
                info!("  {} => {}", song.title, song.file_name);
                self.blocks.push(Block::Song(song));
                self.song_open = true;
                self.transpose = 0;
                Ok(())
            }
            "subtitle" | "st" => self.push(Element::Subtitle(content.to_string())),
            "comment" | "c" => self.push(Element::Comment(content.to_string())),
            "start_of_chorus" | "soc" => self.push(Element::StartOfChorus),
            "end_of_chorus" | "eoc" => self.push(Element::EndOfChorus),
            "transpose" => {
                self.transpose = content.parse().map_err(|_| ChoproError::InvalidTranspose {
                    line: self.line,
                    value: content.to_string(),
                })?;
                info!("Transposing by {} steps.", self.transpose);
                Ok(())
            }
            "section" => {
                self.blocks.push(Block::Section(content.to_string()));
                Ok(())
            }
            other => {
                debug!("Line {}: ignoring directive '{}'", self.line, other);
                Ok(())
            }
        }
    }

    fn push(&mut self, element: Element) -> Result<(), ChoproError> {
        let song = if self.song_open {
            self.blocks.iter_mut().rev().find_map(|block| match block {
                Block::Song(song) => Some(song),
                Block::Section(_) => None,
            })
        } else {
            None
        };
        match song {
            Some(song) => {
                song.body.push(element);
                Ok(())
            }
            None => Err(ChoproError::MissingTitle { line: self.line }),
        }
    }

    /// Close the open song and return everything parsed.
    pub fn finish(self) -> Vec<Block> {
        self.blocks
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a whole chopro source. The last song is closed at the end of the input.
pub fn parse(source: &str) -> Result<Vec<Block>, ChoproError> {
    let mut parser = Parser::new();
    for line in source.lines() {
        parser.parse_line(line)?;
    }
    Ok(parser.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{ChordToken, Line};

    fn songs(blocks: &[Block]) -> Vec<&Song> {
        blocks
            .iter()
            .filter_map(|block| match block {
                Block::Song(song) => Some(song),
                Block::Section(_) => None,
            })
            .collect()
    }

    #[test]
    fn test_directive_without_content() {
        let directive = parse_directive("{soc}").unwrap();
        assert_eq!(directive.name, "soc");
        assert_eq!(directive.content, "");
    }

    #[test]
    fn test_directive_content_keeps_later_colons() {
        let directive = parse_directive("{c: Tempo: slow}").unwrap();
        assert_eq!(directive.name, "c");
        assert_eq!(directive.content, "Tempo: slow");
    }

    #[test]
    fn test_basic_song() {
        let source = "{title: Test Song}\n{st: Traditional}\n\n[C]Hello [G]world\n# not rendered\n";
        let blocks = parse(source).unwrap();
        let songs = songs(&blocks);
        assert_eq!(songs.len(), 1);
        assert_eq!(songs[0].title, "Test Song");
        assert_eq!(songs[0].file_name, "Test_Song.html");
        assert_eq!(
            songs[0].body,
            vec![
                Element::Subtitle("Traditional".to_string()),
                Element::Blank,
                Element::Lyrics(Line {
                    text: "Hello world".to_string(),
                    chords: vec![ChordToken::new("C", 0), ChordToken::new("G", 6)],
                }),
            ]
        );
    }

    #[test]
    fn test_transpose_until_next_title() {
        let source = "{title: One}\n{transpose: -2}\n[C]a\n{title: Two}\n[C]b\n";
        let blocks = parse(source).unwrap();
        let songs = songs(&blocks);
        let first_chord = |song: &Song| match &song.body[0] {
            Element::Lyrics(line) => line.chords[0].chord.clone(),
            other => panic!("expected lyrics, got {:?}", other),
        };
        assert_eq!(first_chord(songs[0]), "Bb");
        assert_eq!(first_chord(songs[1]), "C");
    }

    #[test]
    fn test_transpose_offset_state() {
        let mut parser = Parser::new();
        parser.parse_line("{title: x}").unwrap();
        parser.parse_line("{transpose: -2}").unwrap();
        assert_eq!(parser.transpose(), -2);
        parser.parse_line("{transpose: +3}").unwrap();
        assert_eq!(parser.transpose(), 3);
        parser.parse_line("{ti: y}").unwrap();
        assert_eq!(parser.transpose(), 0);
    }

    #[test]
    fn test_invalid_transpose() {
        let result = parse("{title: x}\n{transpose: up}\n");
        match result {
            Err(ChoproError::InvalidTranspose { line, value }) => {
                assert_eq!(line, 2);
                assert_eq!(value, "up");
            }
            other => panic!("expected InvalidTranspose, got {:?}", other),
        }
    }

    #[test]
    fn test_lyrics_before_title() {
        let result = parse("\n# header\n[C]too early\n");
        assert!(matches!(result, Err(ChoproError::MissingTitle { line: 3 })));
    }

    #[test]
    fn test_unknown_and_unterminated_directives_ignored() {
        let blocks = parse("{key: G}\n{title: x}\n{comment: lost\n{capo: 2}\n").unwrap();
        assert!(songs(&blocks)[0].body.is_empty());
    }

    #[test]
    fn test_case_insensitive_names() {
        let blocks = parse("{TITLE: x}\n{SOC}\n{Eoc}\n").unwrap();
        assert_eq!(
            songs(&blocks)[0].body,
            vec![Element::StartOfChorus, Element::EndOfChorus]
        );
    }

    #[test]
    fn test_extreme_transpose_offsets() {
        let source = "{title: Up}\n{transpose: 2147483647}\n[C]a\n{title: Down}\n{transpose: -2147483648}\n[C/G]b\n";
        let blocks = parse(source).unwrap();
        let chords: Vec<String> = songs(&blocks)
            .iter()
            .map(|song| match &song.body[0] {
                Element::Lyrics(line) => line.chords[0].chord.clone(),
                other => panic!("expected lyrics, got {:?}", other),
            })
            .collect();
        assert_eq!(chords, vec!["G".to_string(), "E/B".to_string()]);
    }

    #[test]
    fn test_section_order() {
        let source = "{section: Hymns}\n{title: A}\n{section: Folk}\nstill in A\n{title: B}\n";
        let blocks = parse(source).unwrap();
        assert!(matches!(&blocks[0], Block::Section(name) if name == "Hymns"));
        assert!(matches!(&blocks[1], Block::Song(song) if song.title == "A" && song.body.len() == 1));
        assert!(matches!(&blocks[2], Block::Section(name) if name == "Folk"));
        assert!(matches!(&blocks[3], Block::Song(song) if song.title == "B"));
    }
}
