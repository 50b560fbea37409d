use super::BatchRow;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use mutascan_core::detector::Sequence;
use mutascan_core::StatsSnapshot;

pub fn sequences(found: &[Sequence]) {
    if found.is_empty() {
        println!("No sequences found.");
        return;
    }

    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Base"),
        Cell::new("Start"),
        Cell::new("Direction"),
    ]);

    for (i, seq) in found.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(seq.base).set_alignment(CellAlignment::Center),
            Cell::new(format!("({}, {})", seq.row, seq.col)),
            Cell::new(seq.direction),
        ]);
    }
    println!("{}", table);
}

pub fn batch(rows: &[BatchRow]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Fingerprint"),
        Cell::new("Verdict"),
        Cell::new("Cached"),
    ]);

    for row in rows {
        match row {
            BatchRow::Evaluated { index, eval } => {
                let verdict = if eval.is_mutant {
                    Cell::new("MUTANT").fg(Color::Red)
                } else {
                    Cell::new("HUMAN").fg(Color::Green)
                };
                table.add_row(vec![
                    Cell::new(index),
                    Cell::new(eval.fingerprint.short(16)),
                    verdict,
                    Cell::new(if eval.cached { "yes" } else { "no" }),
                ]);
            }
            BatchRow::Invalid { index, reason } => {
                table.add_row(vec![
                    Cell::new(index),
                    Cell::new("-"),
                    Cell::new("INVALID").fg(Color::Yellow),
                    Cell::new(reason),
                ]);
            }
        }
    }
    println!("{}", table);
}

pub fn stats(stats: &StatsSnapshot) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.add_row(vec![
        Cell::new("Mutants").add_attribute(Attribute::Bold),
        Cell::new(stats.count_mutant_dna),
    ]);
    table.add_row(vec![
        Cell::new("Humans").add_attribute(Attribute::Bold),
        Cell::new(stats.count_human_dna),
    ]);
    table.add_row(vec![
        Cell::new("Ratio").add_attribute(Attribute::Bold),
        Cell::new(format!("{:.3}", stats.ratio)),
    ]);

    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }
    println!("{}", table);
}
