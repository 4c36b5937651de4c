//! Music-theory tables and the pure note engine. Everything here is a plain
//! function over the fixed standard-tuning table; the session layer builds on
//! top of it without keeping any state of its own in this module.

use std::fmt;
use std::str::FromStr;

use crate::error::TrainerError;
use crate::models::Cell;

/// Strings on the instrument. Index 0 is the low E string.
pub const STRING_COUNT: usize = 6;
/// Highest fret that can be picked. Fret 0 is the open string.
pub const MAX_FRET: usize = 12;
/// Number of fret columns on the board, open string included.
pub const FRET_COUNT: usize = MAX_FRET + 1;

/// Open-string pitches of standard tuning as MIDI note numbers (E A D G B E).
pub const OPEN_STRING_PITCHES: [u8; STRING_COUNT] = [40, 45, 50, 55, 59, 64];

/// Chromatic names indexed by semitone above C.
pub const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// One of the twelve octave-independent chromatic notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PitchClass {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl PitchClass {
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::CSharp,
        PitchClass::D,
        PitchClass::DSharp,
        PitchClass::E,
        PitchClass::F,
        PitchClass::FSharp,
        PitchClass::G,
        PitchClass::GSharp,
        PitchClass::A,
        PitchClass::ASharp,
        PitchClass::B,
    ];

    /// Fold any semitone count (MIDI number, offset, ...) onto a pitch class.
    pub fn from_semitone(semitone: usize) -> Self {
        Self::ALL[semitone % 12]
    }

    /// Semitones above C, in `0..12`.
    pub fn semitone(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        NOTE_NAMES[self.semitone()]
    }

    /// The natural note with the same name, if this pitch class has no accidental.
    pub fn natural(self) -> Option<NaturalNote> {
        NaturalNote::ALL
            .iter()
            .copied()
            .find(|note| note.pitch_class() == self)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PitchClass {
    type Err = TrainerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        NOTE_NAMES
            .iter()
            .position(|name| name.eq_ignore_ascii_case(trimmed))
            .map(Self::from_semitone)
            .ok_or_else(|| TrainerError::invalid("pitch class", s))
    }
}

/// One of the seven note names without an accidental. Practice targets are
/// always natural notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NaturalNote {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl NaturalNote {
    pub const ALL: [NaturalNote; 7] = [
        NaturalNote::C,
        NaturalNote::D,
        NaturalNote::E,
        NaturalNote::F,
        NaturalNote::G,
        NaturalNote::A,
        NaturalNote::B,
    ];

    pub fn pitch_class(self) -> PitchClass {
        match self {
            NaturalNote::C => PitchClass::C,
            NaturalNote::D => PitchClass::D,
            NaturalNote::E => PitchClass::E,
            NaturalNote::F => PitchClass::F,
            NaturalNote::G => PitchClass::G,
            NaturalNote::A => PitchClass::A,
            NaturalNote::B => PitchClass::B,
        }
    }

    pub fn name(self) -> &'static str {
        self.pitch_class().name()
    }

    /// Map a key press (either case) to a natural note.
    pub fn from_letter(letter: char) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|note| note.name().starts_with(letter.to_ascii_uppercase()))
    }
}

impl fmt::Display for NaturalNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NaturalNote {
    type Err = TrainerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => {
                Self::from_letter(letter).ok_or_else(|| TrainerError::invalid("natural note", s))
            }
            _ => Err(TrainerError::invalid("natural note", s)),
        }
    }
}

/// Pitch class sounded by `cell` in standard tuning.
pub fn pitch_class_at(cell: Cell) -> PitchClass {
    PitchClass::from_semitone(OPEN_STRING_PITCHES[cell.string()] as usize + cell.fret())
}

/// Whether a sounded note is the practice target.
pub fn is_match(note: PitchClass, target: NaturalNote) -> bool {
    note == target.pitch_class()
}

/// Frets in `0..=MAX_FRET` on `string` that sound `target`, ascending.
pub fn target_frets(string: usize, target: NaturalNote) -> Vec<usize> {
    if string >= STRING_COUNT {
        return Vec::new();
    }
    (0..=MAX_FRET)
        .filter(|&fret| {
            let open = OPEN_STRING_PITCHES[string] as usize;
            is_match(PitchClass::from_semitone(open + fret), target)
        })
        .collect()
}

/// Conventional 1-indexed string number: 1 is the high e, 6 the low E.
pub fn string_number(string: usize) -> usize {
    STRING_COUNT - string
}

/// Letter of the open string, lower-case for the high e as tab sheets write it.
pub fn open_string_label(string: usize) -> String {
    let name = PitchClass::from_semitone(OPEN_STRING_PITCHES[string] as usize).name();
    if string + 1 == STRING_COUNT {
        name.to_lowercase()
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(string: usize, fret: usize) -> Cell {
        Cell::new(string, fret).unwrap()
    }

    #[test]
    fn open_strings_are_standard_tuning() {
        let names: Vec<&str> = (0..STRING_COUNT)
            .map(|string| pitch_class_at(cell(string, 0)).name())
            .collect();
        assert_eq!(names, ["E", "A", "D", "G", "B", "E"]);
    }

    #[test]
    fn twelfth_fret_repeats_open_string() {
        for string in 0..STRING_COUNT {
            assert_eq!(
                pitch_class_at(cell(string, 0)),
                pitch_class_at(cell(string, MAX_FRET))
            );
        }
    }

    #[test]
    fn each_fret_climbs_one_semitone() {
        for string in 0..STRING_COUNT {
            for fret in 0..MAX_FRET {
                let here = pitch_class_at(cell(string, fret)).semitone();
                let next = pitch_class_at(cell(string, fret + 1)).semitone();
                assert_eq!((here + 1) % 12, next, "string {string} fret {fret}");
            }
        }
    }

    #[test]
    fn well_known_positions() {
        assert_eq!(pitch_class_at(cell(0, 5)), PitchClass::A);
        assert_eq!(pitch_class_at(cell(1, 3)), PitchClass::C);
        assert_eq!(pitch_class_at(cell(4, 1)), PitchClass::C);
        assert_eq!(pitch_class_at(cell(3, 4)), PitchClass::B);
        assert_eq!(pitch_class_at(cell(2, 1)), PitchClass::DSharp);
    }

    #[test]
    fn target_frets_include_both_boundaries() {
        assert_eq!(target_frets(0, NaturalNote::E), vec![0, 12]);
        assert_eq!(target_frets(5, NaturalNote::E), vec![0, 12]);
        assert_eq!(target_frets(1, NaturalNote::E), vec![7]);
        assert_eq!(target_frets(1, NaturalNote::C), vec![3]);
        assert!(target_frets(STRING_COUNT, NaturalNote::C).is_empty());
    }

    #[test]
    fn is_match_compares_pitch_classes() {
        assert!(is_match(PitchClass::G, NaturalNote::G));
        assert!(!is_match(PitchClass::GSharp, NaturalNote::G));
    }

    #[test]
    fn naturals_and_accidentals() {
        assert_eq!(PitchClass::F.natural(), Some(NaturalNote::F));
        assert_eq!(PitchClass::FSharp.natural(), None);
        for note in NaturalNote::ALL {
            assert_eq!(note.pitch_class().natural(), Some(note));
        }
    }

    #[test]
    fn parsing_notes() {
        assert_eq!("c".parse::<NaturalNote>(), Ok(NaturalNote::C));
        assert_eq!(" B ".parse::<NaturalNote>(), Ok(NaturalNote::B));
        assert_eq!("a#".parse::<PitchClass>(), Ok(PitchClass::ASharp));
        assert!(matches!(
            "H".parse::<NaturalNote>(),
            Err(TrainerError::InvalidArgument { .. })
        ));
        assert!("C#".parse::<NaturalNote>().is_err());
        assert!("".parse::<NaturalNote>().is_err());
        assert!("Db".parse::<PitchClass>().is_err());
    }

    #[test]
    fn string_numbers_follow_guitar_convention() {
        assert_eq!(string_number(0), 6);
        assert_eq!(string_number(5), 1);
        assert_eq!(open_string_label(0), "E");
        assert_eq!(open_string_label(5), "e");
    }
}
