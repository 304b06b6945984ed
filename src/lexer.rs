use log::debug;

use crate::ast::{ChordToken, Line};

/// Splits a lyric line into plain text and the chords written inline in `[...]`.
pub struct Lexer<'a> {
    chars: std::str::Chars<'a>,
    /// Plain-text characters emitted so far; the position of the next chord.
    column: usize,
    in_chord: bool,
    chord: String,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars(),
            column: 0,
            in_chord: false,
            chord: String::new(),
        }
    }

    /// Scan the whole line.
    ///
    /// An opening `[` without a closing `]` swallows the rest of the line: neither the
    /// chord nor the text after it is emitted.
    pub fn tokenize(&mut self) -> Line {
        let mut line = Line::default();

        while let Some(c) = self.chars.next() {
            if self.in_chord {
                if c == ']' {
                    let chord = std::mem::take(&mut self.chord);
                    line.chords.push(ChordToken::new(chord, self.column));
                    self.in_chord = false;
                } else {
                    self.chord.push(c);
                }
            } else if c == '[' {
                self.in_chord = true;
            } else {
                line.text.push(c);
                self.column += 1;
            }
        }

        if self.in_chord {
            debug!("Unterminated chord '[{}' dropped", self.chord);
        }

        line
    }
}

/// Tokenize a single line.
///
/// ```
/// use chopro::lexer::tokenize;
///
/// let line = tokenize("[C]Hello [G]world");
/// assert_eq!(line.text, "Hello world");
/// assert_eq!(line.chords[1].chord, "G");
/// assert_eq!(line.chords[1].position, 6);
/// ```
pub fn tokenize(input: &str) -> Line {
    Lexer::new(input).tokenize()
}
