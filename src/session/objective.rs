use std::fmt;

use crate::theory::{string_number, NaturalNote};

/// Where a guided session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuidedProgress {
    /// Waiting for every target on this string (0 = low E).
    Awaiting(usize),
    Complete,
}

/// What the player should do next. Its `Display` is the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Objective {
    /// Free mode: find the target anywhere.
    FindAll { target: NaturalNote },
    /// Guided mode: find the target on one string.
    FindOnString { target: NaturalNote, string: usize },
    /// Guided mode finished.
    Complete { target: NaturalNote },
}

impl Objective {
    pub fn is_complete(&self) -> bool {
        matches!(self, Objective::Complete { .. })
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Objective::FindAll { target } => write!(f, "Find every {target} on the board"),
            Objective::FindOnString { target, string } => write!(
                f,
                "Find every {target} on string {}",
                string_number(*string)
            ),
            Objective::Complete { target } => {
                write!(f, "Complete! Every {target} has been found")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_lines() {
        let target = NaturalNote::A;
        assert_eq!(
            Objective::FindAll { target }.to_string(),
            "Find every A on the board"
        );
        assert_eq!(
            Objective::FindOnString { target, string: 0 }.to_string(),
            "Find every A on string 6"
        );
        assert_eq!(
            Objective::FindOnString { target, string: 5 }.to_string(),
            "Find every A on string 1"
        );
        assert!(Objective::Complete { target }.is_complete());
        assert!(!Objective::FindAll { target }.is_complete());
    }
}
