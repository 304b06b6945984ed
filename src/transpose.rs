use std::fmt;

use crate::pitch::{lookup, PitchClass};

/// One note of a chord and whatever follows the note name (`m7`, `sus4`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordPart {
    pub root: PitchClass,
    pub modifier: String,
}

/// A chord decomposed into its `/`-separated parts; `C/G` has two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chord {
    pub parts: Vec<ChordPart>,
}

impl Chord {
    /// Decompose chord text. Fails if any part does not start with a known note.
    pub fn parse(text: &str) -> Option<Chord> {
        let parts = text
            .split('/')
            .map(|part| {
                lookup(part).map(|(root, modifier)| ChordPart {
                    root,
                    modifier: modifier.to_string(),
                })
            })
            .collect::<Option<Vec<_>>>()?;
        Some(Chord { parts })
    }

    /// Shift every part by `steps` semitones.
    pub fn transposed(&self, steps: i32) -> Chord {
        Chord {
            parts: self
                .parts
                .iter()
                .map(|part| ChordPart {
                    root: part.root.transpose(steps),
                    modifier: part.modifier.clone(),
                })
                .collect(),
        }
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            write!(f, "{}{}", part.root, part.modifier)?;
        }
        Ok(())
    }
}

/// Transpose chord text by `steps` semitones, re-spelling every note canonically.
///
/// Text that is not a recognizable chord comes back unchanged.
///
/// ```
/// use chopro::transpose::transpose;
///
/// assert_eq!(transpose("C/E", 2), "D/F#");
/// assert_eq!(transpose("Dbmaj7", 0), "C#maj7");
/// assert_eq!(transpose("X7", 5), "X7");
/// ```
pub fn transpose(chord: &str, steps: i32) -> String {
    match Chord::parse(chord) {
        Some(parsed) => parsed.transposed(steps).to_string(),
        None => chord.to_string(),
    }
}
