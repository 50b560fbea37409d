#![allow(dead_code)]

use mutascan_core::Grid;

/// Three sequences: diagonal A, vertical G, horizontal C.
pub const MUTANT_6: [&str; 6] = ["ATGCGA", "CAGTGC", "TTATGT", "AGAAGG", "CCCCTA", "TCACTG"];

/// No sequence at all.
pub const HUMAN_6: [&str; 6] = ["ATGCGA", "CAGTGC", "TTATTT", "AGACGG", "GCGTCA", "TCACTG"];

/// Exactly one horizontal CCCC on the last row.
pub const SINGLE_HORIZONTAL: [&str; 6] =
    ["ATGCGA", "CAGTGC", "TTATTT", "AGACGG", "GCGTCA", "TCCCCG"];

pub fn grid(rows: &[&str]) -> Grid {
    Grid::from_rows(rows).expect("fixture grid must be valid")
}

pub fn owned(rows: &[&str]) -> Vec<Option<String>> {
    rows.iter().map(|r| Some(r.to_string())).collect()
}
