// File: crates/grains-core/tests/comparisons.rs
// Purpose: Reference-quantity verdicts at the extremes of the board.

use grains_core::{evaluate_all, references, SquareIndex};

#[test]
fn full_board_overtakes_every_smaller_reference() {
    let total = SquareIndex::new(64).unwrap().total_through();
    for c in evaluate_all(total) {
        if c.fact.magnitude < total as f64 {
            assert!(c.exceeds, "{} should be exceeded", c.fact.name);
            assert!(c.ratio >= 1.0);
            assert!(c.summary().starts_with("exceeds"));
        } else {
            assert!(!c.exceeds, "{} should not be exceeded", c.fact.name);
            assert!(c.ratio < 1.0);
        }
    }
}

#[test]
fn full_board_against_known_references() {
    let total = SquareIndex::new(64).unwrap().total_through();
    let verdicts = evaluate_all(total);
    let by_name = |needle: &str| {
        verdicts
            .iter()
            .find(|c| c.fact.name.contains(needle))
            .unwrap_or_else(|| panic!("no reference named '{needle}'"))
    };
    assert!(by_name("population").exceeds);
    assert!(by_name("million years").exceeds);
    assert!(by_name("sand").exceeds);
    assert!(!by_name("stars").exceeds);
}

#[test]
fn first_square_exceeds_nothing() {
    let verdicts = evaluate_all(SquareIndex::new(1).unwrap().total_through());
    assert!(verdicts.iter().all(|c| !c.exceeds));
}

#[test]
fn references_are_sorted_ascending() {
    let refs = references();
    for pair in refs.windows(2) {
        assert!(pair[0].magnitude < pair[1].magnitude);
    }
}
