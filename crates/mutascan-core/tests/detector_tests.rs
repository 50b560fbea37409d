mod common;

use common::{grid, HUMAN_6, MUTANT_6, SINGLE_HORIZONTAL};
use mutascan_core::detector::{self, Direction, Sequence};
use rstest::rstest;

#[rstest]
#[case::reference_mutant(&MUTANT_6, true)]
#[case::reference_human(&HUMAN_6, false)]
#[case::single_horizontal(&SINGLE_HORIZONTAL, false)]
#[case::single_vertical(&["ATGCGA", "CAGTGC", "TTATTC", "AGACGC", "GCGTCC", "TCACTG"], false)]
#[case::single_diagonal_up(&["ATGCGA", "CAGTCC", "TTACTT", "AGCCGG", "GCGTCA", "TCACTG"], false)]
#[case::single_diagonal_down(&["ATGC", "CAGT", "TTAT", "AGAA"], false)]
#[case::two_horizontal_4x4(&["AAAA", "TGCG", "GATT", "CCCC"], true)]
#[case::vertical_and_diagonal_up(&["GTGCGA", "GAGTCC", "GTACTT", "GGCCGG", "TCGTCA", "TCACTG"], true)]
#[case::horizontal_and_diagonal_same_start(&["AAAA", "TACG", "GTAT", "CCGA"], true)]
#[case::two_horizontal_rows(&["ATGCGA", "CAGTGC", "TTATGT", "AAAAAG", "CCCCGA", "TCACTG"], true)]
#[case::no_runs_4x4(&["ATGC", "CAGT", "TTAT", "AGAC"], false)]
fn test_is_mutant(#[case] rows: &[&str], #[case] expected: bool) {
    assert_eq!(detector::is_mutant(&grid(rows)), expected);
}

// A run of five is two overlapping windows, which alone is enough.
#[rstest]
#[case::horizontal(&["ATGCGA", "CAGTGC", "TTATTT", "AGACGG", "GCGTCA", "TTTTTG"], Direction::Horizontal)]
#[case::vertical(&["ATGCGA", "CAGTGC", "TTATTC", "AGACGC", "GCGTCC", "TCACTC"], Direction::Vertical)]
#[case::diagonal_down(&["ATGCGA", "CATGTC", "GCATGT", "TACATG", "AGTATT", "TCACTG"], Direction::DiagonalDown)]
fn test_run_of_five_counts_twice(#[case] rows: &[&str], #[case] dir: Direction) {
    let g = grid(rows);
    let found: Vec<Sequence> = detector::scan(&g).filter(|s| s.direction == dir).collect();
    assert!(found.len() >= 2, "expected overlapping windows, got {:?}", found);
    assert!(detector::is_mutant(&g));
}

#[test]
fn test_scan_order_is_row_major() {
    let g = grid(&MUTANT_6);
    let found: Vec<(usize, usize, Direction)> = detector::scan(&g)
        .map(|s| (s.row, s.col, s.direction))
        .collect();

    assert_eq!(
        found,
        vec![
            (0, 0, Direction::DiagonalDown),
            (0, 4, Direction::Vertical),
            (4, 0, Direction::Horizontal),
        ]
    );
}

#[test]
fn test_sequence_reports_base() {
    let g = grid(&SINGLE_HORIZONTAL);
    let seqs: Vec<Sequence> = detector::scan(&g).collect();
    assert_eq!(seqs.len(), 1);
    assert_eq!(seqs[0].base, 'C');
    assert_eq!(
        detector::cells_of(&seqs[0]),
        [(5, 1), (5, 2), (5, 3), (5, 4)]
    );
}

#[test]
fn test_count_sequences_scans_everything() {
    let g = grid(&["AAAA", "AAAA", "AAAA", "AAAA"]);
    // 4 rows + 4 columns + 2 diagonals
    assert_eq!(detector::count_sequences(&g), 10);
}

#[test]
fn test_raw_rows_entry_point() {
    assert!(detector::is_mutant_rows(&MUTANT_6));
    assert!(!detector::is_mutant_rows(&["ATGC", "CAGT", "TTAT"]));
    assert!(!detector::is_mutant_rows::<&str>(&[]));
}
