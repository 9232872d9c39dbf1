//! Concrete distance / script / trace scenarios for the replay pipeline.

use ferrous_edit::core::alignment::edit_distance::distance_str;
use ferrous_edit::core::alignment::transform::apply_script_str;
use ferrous_edit::{EditKind, Replay, ReplayOpt, compute_distance, reconstruct_alignment};

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

fn unlimited() -> ReplayOpt {
    ReplayOpt {
        max_input_len: None,
        ..ReplayOpt::default()
    }
}

#[test]
fn test_known_distances() {
    let cases = [
        ("kitten", "sitting", 3),
        ("saturday", "sunday", 3),
        ("cat", "bat", 1),
        ("intention", "execution", 5),
        ("", "", 0),
        ("", "abc", 3),
        ("abc", "", 3),
        ("algorithm", "altruistic", 6),
        ("hello", "hallo", 1),
        ("abc", "def", 3),
        ("a", "abc", 2),
        ("abcdef", "ace", 3),
    ];

    for (a, b, expected) in cases {
        assert_eq!(
            distance_str(a, b),
            expected,
            "distance({:?}, {:?}) should be {}",
            a,
            b,
            expected
        );
    }
}

#[test]
fn test_cat_bat_script_has_single_replace() {
    let (a, b) = (chars("cat"), chars("bat"));
    let result = compute_distance(&a, &b, false);
    let script = reconstruct_alignment(&a, &b, &result.table).unwrap();

    let replaces: Vec<_> = script
        .iter()
        .filter(|op| op.kind == EditKind::Replace)
        .collect();
    assert_eq!(replaces.len(), 1);
    assert_eq!(replaces[0].source_elem, Some('c'));
    assert_eq!(replaces[0].target_elem, Some('b'));
    assert_eq!(script.cost(), 1);

    assert_eq!(apply_script_str("cat", &script).unwrap(), vec!["cat", "bat"]);
}

#[test]
fn test_intention_execution_replay() {
    let r = Replay::from_strs("intention", "execution", &unlimited()).unwrap();
    assert_eq!(r.distance, 5);
    assert_eq!(r.script.counts().cost(), 5);

    let states = r.trace_strings();
    assert_eq!(states.len(), 6);
    assert_eq!(states.first().unwrap(), "intention");
    assert_eq!(states.last().unwrap(), "execution");
}

#[test]
fn test_kitten_sitting_cigar() {
    let r = Replay::from_strs("kitten", "sitting", &unlimited()).unwrap();
    assert_eq!(r.cigar().to_string(), "1X3=1X1=1I");
    assert_eq!(r.cigar().source_length(), 6);
    assert_eq!(r.cigar().target_length(), 7);
}

#[test]
fn test_tracing_does_not_change_result() {
    let (a, b) = (chars("saturday"), chars("sunday"));
    let plain = compute_distance(&a, &b, false);
    let traced = compute_distance(&a, &b, true);

    assert_eq!(plain.distance, traced.distance);
    assert_eq!(plain.table, traced.table);

    let log = traced.steps.unwrap();
    assert_eq!(log.len(), a.len() * b.len());
    assert_eq!(log.snapshot(log.len() - 1).unwrap(), plain.table);
    assert_eq!(log.initial_table().row(0), plain.table.row(0));
}

#[test]
fn test_step_classification_matches_tie_break() {
    // dp[1][1] for "ab" -> "ba": replace reaches 1, insert and delete 2
    let traced = compute_distance(&chars("ab"), &chars("ba"), true);
    let log = traced.steps.unwrap();
    assert_eq!(log.steps()[0].kind, EditKind::Replace);
    // dp[2][2]: all three candidates cost 2
    assert_eq!(log.steps()[3].kind, EditKind::Replace);
}

#[test]
fn test_insert_wins_tie_with_delete() {
    let (a, b) = (chars("aba"), chars("bab"));
    let result = compute_distance(&a, &b, false);
    let script = reconstruct_alignment(&a, &b, &result.table).unwrap();

    let kinds: Vec<EditKind> = script.iter().map(|op| op.kind).collect();
    assert_eq!(
        kinds,
        vec![
            EditKind::Delete,
            EditKind::Match,
            EditKind::Match,
            EditKind::Insert
        ],
        "last cell must resolve to insert, not delete"
    );
    assert_eq!(
        apply_script_str("aba", &script).unwrap(),
        vec!["aba", "ba", "bab"]
    );
}

#[test]
fn test_script_positions_are_source_coordinates() {
    let (a, b) = (chars("abcdef"), chars("ace"));
    let result = compute_distance(&a, &b, false);
    let script = reconstruct_alignment(&a, &b, &result.table).unwrap();

    let deletes: Vec<usize> = script
        .iter()
        .filter(|op| op.kind == EditKind::Delete)
        .map(|op| op.pos.i)
        .collect();
    assert_eq!(deletes, vec![1, 3, 5]);
}
