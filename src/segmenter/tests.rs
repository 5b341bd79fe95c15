use super::*;
use crate::store::FragmentStore;
use std::fs;
use tempfile::TempDir;

fn run(input: &str, boundary: Boundary, prefix: &str) -> (TempDir, SegmentReport, Vec<String>) {
    let temp = TempDir::new().unwrap();
    let store = FragmentStore::open(temp.path()).unwrap();
    let report = segment(split_lines(input), |l| boundary.matches(l), prefix, &store).unwrap();
    let fragments = read_fragments(&store, prefix, report.fragments);
    (temp, report, fragments)
}

fn read_fragments(store: &FragmentStore, prefix: &str, count: usize) -> Vec<String> {
    (0..count)
        .map(|n| fs::read_to_string(store.fragment_path(prefix, n)).unwrap())
        .collect()
}

fn file_count(dir: &std::path::Path) -> usize {
    fs::read_dir(dir).unwrap().count()
}

const MIXED: &str = "\
  1
From fairest creatures we desire increase,

That thereby beauty's rose might never die,
  2
SCENE I. Elsinore.
SCENE II. A room.

Enter HAMLET.
HAMLET. A little more than kin.


  3
Lone line

";

#[test]
fn test_sonnet_scenario() {
    let input = "\n  1\nLine A\nLine B\n\n  2\nLine C\n";
    let (_temp, report, fragments) = run(input, Boundary::Numeral, "s");

    assert_eq!(fragments, vec!["  1\nLine A\nLine B\n", "  2\nLine C\n"]);
    assert_eq!(report.fragments, 2);
    assert_eq!(report.boundaries, 2);
    assert_eq!(report.merges, 1, "leading boundary reuses s0");
    assert_eq!(report.blank_lines, 2);
    assert_eq!(report.lines_written, 5);
}

#[test]
fn test_consecutive_scene_headers_collapse() {
    let input = "SCENE I. Rome.\nSCENE I. Rome.\nEnter BRUTUS.\nBRUTUS. Hail.\n";
    let (temp, report, fragments) = run(input, Boundary::Scene, "p");

    assert_eq!(report.fragments, 1);
    assert_eq!(file_count(temp.path()), 1);
    assert_eq!(
        fragments[0],
        "SCENE I. Rome.\nSCENE I. Rome.\nEnter BRUTUS.\nBRUTUS. Hail.\n"
    );
}

#[test]
fn test_scene_rotation() {
    let input = "SCENE I.\nA\nB\nSCENE II.\nC\n";
    let (_temp, report, fragments) = run(input, Boundary::Scene, "p");

    assert_eq!(fragments, vec!["SCENE I.\nA\nB\n", "SCENE II.\nC\n"]);
    assert_eq!(report.merges, 1);
}

#[test]
fn test_single_line_fragment_merges_into_next() {
    // "SCENE I." alone has one line, so SCENE II keeps number 0
    let input = "SCENE I.\nSCENE II.\nA\nB\nSCENE III.\nC\n";
    let (_temp, report, fragments) = run(input, Boundary::Scene, "p");

    assert_eq!(fragments, vec!["SCENE I.\nSCENE II.\nA\nB\n", "SCENE III.\nC\n"]);
    assert_eq!(report.merges, 2);
}

#[test]
fn test_two_line_fragment_keeps_its_number() {
    let input = "SCENE I.\nA\nSCENE II.\nB\n";
    let (_temp, _report, fragments) = run(input, Boundary::Scene, "p");

    assert_eq!(fragments, vec!["SCENE I.\nA\n", "SCENE II.\nB\n"]);
}

#[test]
fn test_stanza_split_and_trailing_blank() {
    let input = "From fairest\ncreatures\n\nSingle\n\nThat thereby\nbeauty's rose\n\n";
    let (temp, report, fragments) = run(input, Boundary::BlankLine, "v");

    assert_eq!(
        fragments,
        vec![
            "From fairest\ncreatures\n",
            "Single\nThat thereby\nbeauty's rose\n"
        ]
    );
    assert_eq!(report.boundaries, 3);
    assert_eq!(report.merges, 1);
    assert_eq!(file_count(temp.path()), 2, "empty trailing v2 is removed");
}

#[test]
fn test_repeated_blank_lines_do_not_create_fragments() {
    let input = "a\nb\n\n\n\nc\nd\n";
    let (_temp, report, fragments) = run(input, Boundary::BlankLine, "v");

    assert_eq!(fragments, vec!["a\nb\n", "c\nd\n"]);
    assert_eq!(report.blank_lines, 3);
}

#[test]
fn test_empty_source_leaves_empty_fragment_zero() {
    let (temp, report, fragments) = run("", Boundary::Numeral, "s");

    assert_eq!(report.fragments, 1);
    assert_eq!(fragments, vec![""]);
    assert_eq!(file_count(temp.path()), 1);
}

#[test]
fn test_no_blank_lines_survive() {
    for boundary in Boundary::ALL {
        let (_temp, _report, fragments) = run(MIXED, boundary, "x");
        for fragment in &fragments {
            assert!(
                fragment.lines().all(|l| !l.is_empty()),
                "blank line in {:?} fragment: {:?}",
                boundary,
                fragment
            );
        }
    }
}

#[test]
fn test_content_preserved_in_order() {
    let expected: Vec<&str> = MIXED.lines().filter(|l| !l.is_empty()).collect();

    for boundary in Boundary::ALL {
        let (_temp, report, fragments) = run(MIXED, boundary, "x");
        let joined = fragments.concat();
        let actual: Vec<&str> = joined.lines().collect();

        assert_eq!(actual, expected, "content mismatch for {:?}", boundary);
        assert_eq!(report.lines_written, expected.len());
    }
}

#[test]
fn test_numbering_has_no_gaps() {
    for boundary in Boundary::ALL {
        let (temp, report, fragments) = run(MIXED, boundary, "x");

        assert_eq!(file_count(temp.path()), report.fragments);
        for (n, fragment) in fragments.iter().enumerate().skip(1) {
            assert!(!fragment.is_empty(), "x{} is empty for {:?}", n, boundary);
        }
    }
}

#[test]
fn test_plain_closure_boundary() {
    let temp = TempDir::new().unwrap();
    let store = FragmentStore::open(temp.path()).unwrap();
    let input = ["## one", "a", "b", "## two", "c", "d"];

    let report = segment(input, |l: &str| l.starts_with("##"), "md", &store).unwrap();

    assert_eq!(report.fragments, 2);
    let fragments = read_fragments(&store, "md", 2);
    assert_eq!(fragments, vec!["## one\na\nb\n", "## two\nc\nd\n"]);
}

#[test]
fn test_prefixes_share_a_store() {
    let temp = TempDir::new().unwrap();
    let store = FragmentStore::open(temp.path()).unwrap();

    segment("  1\na\nb".lines(), |l| Boundary::Numeral.matches(l), "s", &store).unwrap();
    segment("a\nb\n\nc\nd".lines(), |l| Boundary::BlankLine.matches(l), "v", &store).unwrap();

    assert_eq!(file_count(temp.path()), 3);
    assert!(temp.path().join("s0").exists());
    assert!(temp.path().join("v0").exists());
    assert!(temp.path().join("v1").exists());
}

#[test]
fn test_rerun_overwrites_fragments() {
    let temp = TempDir::new().unwrap();
    let store = FragmentStore::open(temp.path()).unwrap();

    segment(["old", "text"], |_| false, "s", &store).unwrap();
    segment(["new"], |_| false, "s", &store).unwrap();

    assert_eq!(fs::read_to_string(temp.path().join("s0")).unwrap(), "new\n");
}

#[test]
fn test_segment_file_handles_crlf() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("plays.txt");
    fs::write(&source, "SCENE I.\r\nA\r\n\r\nB\r\nSCENE II.\r\nC\r\n").unwrap();
    let store = FragmentStore::open(temp.path().join("out")).unwrap();

    let report = segment_file(&source, |l| Boundary::Scene.matches(l), "p", &store).unwrap();

    assert_eq!(report.fragments, 2);
    let fragments = read_fragments(&store, "p", 2);
    assert_eq!(fragments, vec!["SCENE I.\nA\nB\n", "SCENE II.\nC\n"]);
}

#[test]
fn test_segment_file_splits_on_lone_carriage_return() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("verse.txt");
    fs::write(&source, "a\rb\r\rc\rd").unwrap();
    let store = FragmentStore::open(temp.path().join("out")).unwrap();

    let report = segment_file(&source, |l| Boundary::BlankLine.matches(l), "v", &store).unwrap();

    assert_eq!(report.fragments, 2);
    assert_eq!(report.blank_lines, 1);
    let fragments = read_fragments(&store, "v", 2);
    assert_eq!(fragments, vec!["a\nb\n", "c\nd\n"]);
    assert!(fragments.iter().all(|f| !f.contains('\r')));
}

#[test]
fn test_missing_source_is_fatal() {
    let temp = TempDir::new().unwrap();
    let store = FragmentStore::open(temp.path()).unwrap();

    let result = segment_file(
        &temp.path().join("missing.txt"),
        |l| Boundary::Numeral.matches(l),
        "s",
        &store,
    );

    assert!(matches!(result, Err(SegmentError::ReadSource { .. })));
    assert_eq!(file_count(temp.path()), 0, "nothing written on read failure");
}

#[test]
fn test_unwritable_store_is_fatal() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("gone");
    let store = FragmentStore::open(&dir).unwrap();
    fs::remove_dir(&dir).unwrap();

    let result = segment(["a"], |_| false, "s", &store);

    assert!(matches!(result, Err(SegmentError::CreateFragment { .. })));
}

#[test]
fn test_invalid_prefix_rejected() {
    let temp = TempDir::new().unwrap();
    let store = FragmentStore::open(temp.path()).unwrap();

    let result = segment(["a"], |_| false, "../s", &store);

    assert!(matches!(result, Err(SegmentError::InvalidPrefix(_))));
}

#[test]
fn test_merge_threshold_is_one_line() {
    assert_eq!(MERGE_THRESHOLD, 1);
}
