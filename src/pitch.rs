//! Note spellings and pitch classes.
//!
//! Index 0 is A, so the canonical table reads `A Bb B C C# D Eb E F F# G G#`.
//! Lookup is by prefix over an ordered table with every accidental spelling ahead
//! of the bare letters, so `C#maj7` resolves to `C#` and not `C` + `#maj7`.
//! Theoretical spellings such as `E#` or `Cb` are not in the table.

use std::fmt;

/// Canonical spelling for each pitch class. Transposed chords are always
/// re-rendered with these names; the generated `chord.js` embeds the same list.
pub const IDXNOTE: [&str; 12] = [
    "A", "Bb", "B", "C", "C#", "D", "Eb", "E", "F", "F#", "G", "G#",
];

/// Prefix table, most specific spellings first.
const NOTEIDX: [(&str, u8); 17] = [
    ("A#", 1),
    ("C#", 4),
    ("D#", 6),
    ("F#", 9),
    ("G#", 11),
    ("Bb", 1),
    ("Db", 4),
    ("Eb", 6),
    ("Gb", 9),
    ("Ab", 11),
    ("A", 0),
    ("B", 2),
    ("C", 3),
    ("D", 5),
    ("E", 7),
    ("F", 8),
    ("G", 10),
];

/// A note ignoring octave, in `0..12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Build a pitch class from any integer, wrapping modulo 12.
    pub fn new(value: i32) -> Self {
        PitchClass(value.rem_euclid(12) as u8)
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// Shift by `steps` semitones; negative steps wrap downwards.
    ///
    /// ```
    /// use chopro::pitch::PitchClass;
    ///
    /// assert_eq!(PitchClass::new(0).transpose(-1).name(), "G#");
    /// assert_eq!(PitchClass::new(11).transpose(1).name(), "A");
    /// ```
    pub fn transpose(self, steps: i32) -> Self {
        // reduce first: any i32 offset is accepted from `{transpose}`
        PitchClass::new(self.0 as i32 + steps.rem_euclid(12))
    }

    /// Canonical spelling.
    pub fn name(self) -> &'static str {
        IDXNOTE[self.0 as usize]
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Split a chord part into its pitch class and the modifier following the note name.
///
/// Returns `None` when the text does not start with a known spelling.
///
/// ```
/// use chopro::pitch::lookup;
///
/// let (pitch, modifier) = lookup("C#maj7").unwrap();
/// assert_eq!(pitch.index(), 4);
/// assert_eq!(modifier, "maj7");
/// assert!(lookup("X7").is_none());
/// ```
pub fn lookup(spelling: &str) -> Option<(PitchClass, &str)> {
    NOTEIDX.iter().find_map(|(prefix, idx)| {
        spelling
            .strip_prefix(*prefix)
            .map(|rest| (PitchClass(*idx), rest))
    })
}
