//! Core library surface for the fretboard trainer.
//!
//! `theory` holds the tuning table and the pure note engine, `session` the
//! practice rules built on it, and `ui` the terminal front-end. The binary
//! only wires configuration and logging around them.
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod session;
pub mod theory;
pub mod ui;

pub use config::Config;
pub use error::TrainerError;
pub use logging::init_logging;

/// Value types passed between the layers.
pub use models::{Cell, Marker, PracticeMode, TargetChoice};

pub use session::{GuidedProgress, Objective, PlaceOutcome, Session, StringOrder};
pub use theory::{is_match, pitch_class_at, target_frets, NaturalNote, PitchClass};

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
