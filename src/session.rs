//! Practice session state: the target note, the markers placed so far and,
//! in guided mode, the shuffled string order with a cursor into it.
//!
//! The session is a plain owned value. The UI layer holds the only instance,
//! feeds it validated cells, and redraws from its accessors afterwards.

mod objective;
mod order;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::error::TrainerError;
use crate::models::{Cell, Marker, PracticeMode, TargetChoice};
use crate::theory::{is_match, pitch_class_at, target_frets, NaturalNote, STRING_COUNT};

pub use objective::{GuidedProgress, Objective};
pub use order::StringOrder;

/// Result of a single placement attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceOutcome {
    /// A new marker was recorded.
    Placed {
        marker: Marker,
        /// The placement finished the active guided string.
        string_completed: bool,
        /// The placement finished the last guided string.
        session_completed: bool,
    },
    /// The cell already carries this marker; nothing changed.
    AlreadyMarked(Marker),
    /// Guided mode only accepts the active string.
    WrongString { active: usize },
    /// Guided practice is over until the next reset.
    Finished,
}

/// One practice session.
pub struct Session {
    mode: PracticeMode,
    target: NaturalNote,
    markers: Vec<Marker>,
    string_order: Option<StringOrder>,
    cursor: usize,
    rng: StdRng,
}

impl Session {
    /// Start a session. A `Random` target is drawn from `rng`, which is kept
    /// for every later draw so a seeded generator makes the whole run
    /// reproducible.
    pub fn new(mode: PracticeMode, target: TargetChoice, mut rng: StdRng) -> Self {
        let target = resolve_target(target, &mut rng);
        let mut session = Self {
            mode,
            target,
            markers: Vec::new(),
            string_order: None,
            cursor: 0,
            rng,
        };
        session.reset();
        session
    }

    pub fn mode(&self) -> PracticeMode {
        self.mode
    }

    pub fn target(&self) -> NaturalNote {
        self.target
    }

    /// Markers in placement order.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn marker_at(&self, cell: Cell) -> Option<&Marker> {
        self.markers.iter().find(|marker| marker.cell == cell)
    }

    /// Guided string order, `None` in free mode.
    pub fn string_order(&self) -> Option<&StringOrder> {
        self.string_order.as_ref()
    }

    /// Position within the guided string order.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Guided state machine view. Free mode has none.
    pub fn progress(&self) -> Option<GuidedProgress> {
        let order = self.string_order.as_ref()?;
        Some(match order.get(self.cursor) {
            Some(string) => GuidedProgress::Awaiting(string),
            None => GuidedProgress::Complete,
        })
    }

    /// The string guided mode currently accepts.
    pub fn active_string(&self) -> Option<usize> {
        match self.progress()? {
            GuidedProgress::Awaiting(string) => Some(string),
            GuidedProgress::Complete => None,
        }
    }

    /// Completion signal for guided practice.
    pub fn is_complete(&self) -> bool {
        self.progress() == Some(GuidedProgress::Complete)
    }

    pub fn objective(&self) -> Objective {
        let target = self.target;
        match self.progress() {
            None => Objective::FindAll { target },
            Some(GuidedProgress::Awaiting(string)) => Objective::FindOnString { target, string },
            Some(GuidedProgress::Complete) => Objective::Complete { target },
        }
    }

    /// Whether `cell` may receive a marker right now, ignoring duplicates.
    pub fn accepts(&self, cell: Cell) -> bool {
        match self.progress() {
            None => true,
            Some(GuidedProgress::Awaiting(string)) => cell.string() == string,
            Some(GuidedProgress::Complete) => false,
        }
    }

    /// Record a marker at `cell`. Rejected placements and duplicates leave
    /// the session untouched.
    pub fn place_marker(&mut self, cell: Cell) -> PlaceOutcome {
        if !self.accepts(cell) {
            let Some(active) = self.active_string() else {
                return PlaceOutcome::Finished;
            };
            debug!(
                "rejected string {} fret {}: guided string is {}",
                cell.string(),
                cell.fret(),
                active
            );
            return PlaceOutcome::WrongString { active };
        }

        if let Some(existing) = self.marker_at(cell) {
            return PlaceOutcome::AlreadyMarked(*existing);
        }

        let note = pitch_class_at(cell);
        let marker = Marker {
            cell,
            note,
            correct: is_match(note, self.target),
        };
        self.markers.push(marker);
        debug!(
            "marker at string {} fret {}: {} ({})",
            cell.string(),
            cell.fret(),
            note,
            if marker.correct { "correct" } else { "wrong" }
        );

        let string_completed = self.advance_if_complete();
        let session_completed = string_completed && self.is_complete();
        if session_completed {
            info!("guided practice complete for target {}", self.target);
        }

        PlaceOutcome::Placed {
            marker,
            string_completed,
            session_completed,
        }
    }

    /// True iff every fret sounding the target on `string` carries a marker.
    /// Strings that do not exist are never complete.
    pub fn is_string_complete(&self, string: usize) -> bool {
        if string >= STRING_COUNT {
            return false;
        }
        target_frets(string, self.target).into_iter().all(|fret| {
            self.markers
                .iter()
                .any(|marker| marker.string() == string && marker.fret() == fret)
        })
    }

    /// Move the guided cursor past the active string once it is complete.
    /// Returns whether the cursor moved.
    pub fn advance_if_complete(&mut self) -> bool {
        let Some(GuidedProgress::Awaiting(string)) = self.progress() else {
            return false;
        };
        if !self.is_string_complete(string) {
            return false;
        }
        self.cursor += 1;
        debug!("string {string} complete, guided cursor at {}", self.cursor);
        true
    }

    /// Clear every marker and restart the guided walk with a fresh order.
    pub fn reset(&mut self) {
        self.markers.clear();
        self.cursor = 0;
        self.string_order = match self.mode {
            PracticeMode::Free => None,
            PracticeMode::Guided => Some(StringOrder::shuffled(&mut self.rng)),
        };
    }

    /// Change the target and reset. Returns the note now in effect.
    pub fn set_target(&mut self, choice: TargetChoice) -> NaturalNote {
        self.target = resolve_target(choice, &mut self.rng);
        info!("practice target set to {}", self.target);
        self.reset();
        self.target
    }

    /// Change the practice mode and reset.
    pub fn set_mode(&mut self, mode: PracticeMode) {
        self.mode = mode;
        info!("practice mode set to {mode}");
        self.reset();
    }

    /// Install an explicit guided order, clearing markers. Only valid in
    /// guided mode.
    pub fn set_string_order(&mut self, order: StringOrder) -> Result<(), TrainerError> {
        if self.mode != PracticeMode::Guided {
            return Err(TrainerError::InvalidStringOrder(
                "free practice has no string order".to_string(),
            ));
        }
        self.markers.clear();
        self.cursor = 0;
        self.string_order = Some(order);
        Ok(())
    }
}

fn resolve_target(choice: TargetChoice, rng: &mut StdRng) -> NaturalNote {
    match choice {
        TargetChoice::Note(note) => note,
        TargetChoice::Random => *NaturalNote::ALL
            .choose(rng)
            .unwrap_or(&NaturalNote::C),
    }
}
