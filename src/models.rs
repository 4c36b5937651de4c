//! Domain models shared by the session engine and the terminal front-end.
//! These stay light-weight value types; the session owns the rules and the UI
//! owns presentation, so nothing here knows about either.

use std::fmt;
use std::str::FromStr;

use crate::error::TrainerError;
use crate::theory::{NaturalNote, PitchClass, MAX_FRET, STRING_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// A validated position on the board. Construction is the boundary check:
/// once a `Cell` exists, both indices are known to be in range, so the note
/// engine can index its tables without further checks.
pub struct Cell {
    string: usize,
    fret: usize,
}

impl Cell {
    /// The open low E string.
    pub const OPEN_LOW_E: Cell = Cell { string: 0, fret: 0 };

    /// Accept `string` in `0..6` (0 = low E) and `fret` in `0..=12`.
    pub fn new(string: usize, fret: usize) -> Result<Self, TrainerError> {
        if string >= STRING_COUNT || fret > MAX_FRET {
            return Err(TrainerError::CellOutOfRange { string, fret });
        }
        Ok(Self { string, fret })
    }

    pub fn string(&self) -> usize {
        self.string
    }

    pub fn fret(&self) -> usize {
        self.fret
    }

    /// Neighbouring cell, or `None` when the step would leave the board.
    pub fn offset(&self, strings: isize, frets: isize) -> Option<Self> {
        let string = self.string.checked_add_signed(strings)?;
        let fret = self.fret.checked_add_signed(frets)?;
        Self::new(string, fret).ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A picked position together with the verdict computed when it was placed.
/// Markers never change after placement; only a full reset removes them.
pub struct Marker {
    pub cell: Cell,
    /// Pitch class sounded at `cell`.
    pub note: PitchClass,
    /// Whether `note` matched the target at the time of placement.
    pub correct: bool,
}

impl Marker {
    pub fn string(&self) -> usize {
        self.cell.string()
    }

    pub fn fret(&self) -> usize {
        self.cell.fret()
    }

    /// Text drawn inside the marker. Only natural notes get a label, matching
    /// the fact that targets are always natural.
    pub fn label(&self) -> Option<&'static str> {
        self.note.natural().map(NaturalNote::name)
    }
}

/// How cells may be picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PracticeMode {
    /// Any cell, any order.
    #[default]
    Free,
    /// String by string in a shuffled order.
    Guided,
}

impl PracticeMode {
    pub fn toggled(self) -> Self {
        match self {
            PracticeMode::Free => PracticeMode::Guided,
            PracticeMode::Guided => PracticeMode::Free,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PracticeMode::Free => "Free",
            PracticeMode::Guided => "Guided",
        }
    }
}

impl fmt::Display for PracticeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PracticeMode {
    type Err = TrainerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "free" => Ok(PracticeMode::Free),
            "guided" | "restricted" => Ok(PracticeMode::Guided),
            _ => Err(TrainerError::invalid("practice mode", s)),
        }
    }
}

/// Requested practice target: a fixed natural note or a fresh random draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetChoice {
    Note(NaturalNote),
    #[default]
    Random,
}

impl From<NaturalNote> for TargetChoice {
    fn from(note: NaturalNote) -> Self {
        TargetChoice::Note(note)
    }
}

impl FromStr for TargetChoice {
    type Err = TrainerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("random") {
            return Ok(TargetChoice::Random);
        }
        s.parse::<NaturalNote>()
            .map(TargetChoice::Note)
            .map_err(|_| TrainerError::invalid("target note", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_rejects_out_of_range() {
        assert!(Cell::new(5, 12).is_ok());
        assert_eq!(
            Cell::new(6, 0),
            Err(TrainerError::CellOutOfRange { string: 6, fret: 0 })
        );
        assert_eq!(
            Cell::new(0, 13),
            Err(TrainerError::CellOutOfRange { string: 0, fret: 13 })
        );
    }

    #[test]
    fn cell_offset_stays_on_board() {
        let corner = Cell::new(0, 0).unwrap();
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, -1), None);
        assert_eq!(corner.offset(1, 1), Some(Cell::new(1, 1).unwrap()));
        let top = Cell::new(5, 12).unwrap();
        assert_eq!(top.offset(1, 0), None);
        assert_eq!(top.offset(0, 1), None);
    }

    #[test]
    fn marker_label_only_for_naturals() {
        let cell = Cell::new(0, 0).unwrap();
        let natural = Marker {
            cell,
            note: PitchClass::E,
            correct: true,
        };
        let sharp = Marker {
            cell,
            note: PitchClass::FSharp,
            correct: false,
        };
        assert_eq!(natural.label(), Some("E"));
        assert_eq!(sharp.label(), None);
    }

    #[test]
    fn parse_modes() {
        assert_eq!("free".parse::<PracticeMode>(), Ok(PracticeMode::Free));
        assert_eq!("Guided".parse::<PracticeMode>(), Ok(PracticeMode::Guided));
        assert_eq!("restricted".parse::<PracticeMode>(), Ok(PracticeMode::Guided));
        assert_eq!(
            "strict".parse::<PracticeMode>(),
            Err(TrainerError::InvalidArgument {
                what: "practice mode",
                value: "strict".to_string(),
            })
        );
    }

    #[test]
    fn parse_targets() {
        assert_eq!("random".parse::<TargetChoice>(), Ok(TargetChoice::Random));
        assert_eq!("RANDOM".parse::<TargetChoice>(), Ok(TargetChoice::Random));
        assert_eq!(
            "g".parse::<TargetChoice>(),
            Ok(TargetChoice::Note(NaturalNote::G))
        );
        assert!(matches!(
            "F#".parse::<TargetChoice>(),
            Err(TrainerError::InvalidArgument { what: "target note", .. })
        ));
    }
}
