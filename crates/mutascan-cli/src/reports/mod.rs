mod grid;
mod tables;

use mutascan_core::Evaluation;

pub use self::grid::print_grid;
pub use self::tables::{batch as print_batch, sequences as print_sequences, stats as print_stats};

/// One line of the batch report.
pub enum BatchRow {
    Evaluated { index: usize, eval: Evaluation },
    Invalid { index: usize, reason: String },
}
