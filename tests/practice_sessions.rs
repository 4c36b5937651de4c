//! End-to-end practice sessions driven through the public API.

use fretboard_trainer::{
    pitch_class_at, target_frets, Cell, GuidedProgress, NaturalNote, Objective, PlaceOutcome,
    PracticeMode, Session, StringOrder, TargetChoice,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn cell(string: usize, fret: usize) -> Cell {
    Cell::new(string, fret).unwrap()
}

fn guided_c_session() -> Session {
    let mut session = Session::new(
        PracticeMode::Guided,
        TargetChoice::Note(NaturalNote::C),
        StdRng::seed_from_u64(17),
    );
    session
        .set_string_order(StringOrder::new([3, 1, 0, 5, 2, 4]).unwrap())
        .unwrap();
    session
}

#[test]
fn guided_c_walk_completes_string_by_string() {
    let order = [3, 1, 0, 5, 2, 4];
    let mut session = guided_c_session();
    assert_eq!(session.progress(), Some(GuidedProgress::Awaiting(3)));

    for (position, &string) in order.iter().enumerate() {
        assert_eq!(session.cursor(), position);
        assert_eq!(
            session.objective(),
            Objective::FindOnString {
                target: NaturalNote::C,
                string,
            }
        );

        let frets = target_frets(string, NaturalNote::C);
        assert!(!frets.is_empty(), "string {string} has no C");
        let (last, rest) = frets.split_last().unwrap();
        for &fret in rest {
            session.place_marker(cell(string, fret));
            assert_eq!(session.cursor(), position);
        }

        let outcome = session.place_marker(cell(string, *last));
        let finished = position + 1 == order.len();
        assert!(matches!(
            outcome,
            PlaceOutcome::Placed {
                string_completed: true,
                session_completed,
                ..
            } if session_completed == finished
        ));
        assert_eq!(session.cursor(), position + 1);
    }

    assert!(session.is_complete());
    assert_eq!(session.progress(), Some(GuidedProgress::Complete));
    assert_eq!(
        session.objective(),
        Objective::Complete {
            target: NaturalNote::C
        }
    );
    assert!(session.markers().iter().all(|marker| marker.correct));
}

#[test]
fn c_positions_in_standard_tuning() {
    let frets: Vec<Vec<usize>> = (0..6)
        .map(|string| target_frets(string, NaturalNote::C))
        .collect();
    assert_eq!(
        frets,
        vec![vec![8], vec![3], vec![10], vec![5], vec![1], vec![8]]
    );
}

#[test]
fn rejected_placement_leaves_session_untouched() {
    let mut session = guided_c_session();
    session.place_marker(cell(3, 0));
    let markers = session.markers().to_vec();

    for string in [0, 1, 2, 4, 5] {
        assert_eq!(
            session.place_marker(cell(string, 3)),
            PlaceOutcome::WrongString { active: 3 }
        );
    }
    assert_eq!(session.markers(), markers.as_slice());
    assert_eq!(session.cursor(), 0);
}

#[test]
fn free_practice_marks_every_match_on_the_board() {
    let mut session = Session::new(
        PracticeMode::Free,
        TargetChoice::Note(NaturalNote::E),
        StdRng::seed_from_u64(4),
    );
    for string in 0..6 {
        for fret in 0..=12 {
            session.place_marker(cell(string, fret));
        }
    }
    assert_eq!(session.markers().len(), 6 * 13);
    let correct: Vec<Cell> = session
        .markers()
        .iter()
        .filter(|marker| marker.correct)
        .map(|marker| marker.cell)
        .collect();
    for string in 0..6 {
        assert!(session.is_string_complete(string));
    }
    for marker_cell in &correct {
        assert_eq!(pitch_class_at(*marker_cell).name(), "E");
    }
    assert!(correct.contains(&cell(0, 0)));
    assert!(correct.contains(&cell(0, 12)));
    assert!(!session.is_complete());
}

#[test]
fn switching_mode_mid_walk_starts_over() {
    let mut session = guided_c_session();
    for fret in target_frets(3, NaturalNote::C) {
        session.place_marker(cell(3, fret));
    }
    assert_eq!(session.cursor(), 1);

    session.set_mode(PracticeMode::Guided);
    assert_eq!(session.cursor(), 0);
    assert!(session.markers().is_empty());

    session.set_mode(PracticeMode::Free);
    assert_eq!(session.progress(), None);
    assert!(matches!(
        session.place_marker(cell(0, 8)),
        PlaceOutcome::Placed { .. }
    ));
}

#[test]
fn random_targets_stay_natural() {
    let mut session = Session::new(
        PracticeMode::Free,
        TargetChoice::Random,
        StdRng::seed_from_u64(99),
    );
    assert!(NaturalNote::ALL.contains(&session.target()));
    let first = session.set_target(TargetChoice::Random);
    let second = session.set_target(TargetChoice::Random);
    assert!(NaturalNote::ALL.contains(&first));
    assert!(NaturalNote::ALL.contains(&second));
}
