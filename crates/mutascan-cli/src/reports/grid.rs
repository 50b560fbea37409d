use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table};
use mutascan_core::detector::{self, Sequence};
use mutascan_core::Grid;
use std::collections::HashSet;

/// Renders the matrix, highlighting every cell that belongs to a sequence.
pub fn print_grid(grid: &Grid, sequences: &[Sequence]) {
    let hot: HashSet<(usize, usize)> = sequences.iter().flat_map(detector::cells_of).collect();

    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    for r in 0..grid.size() {
        let cells: Vec<Cell> = grid
            .row(r)
            .iter()
            .enumerate()
            .map(|(c, &base)| {
                let cell = Cell::new(base as char).set_alignment(CellAlignment::Center);
                if hot.contains(&(r, c)) {
                    cell.fg(Color::Red).add_attribute(Attribute::Bold)
                } else {
                    cell
                }
            })
            .collect();
        table.add_row(cells);
    }
    println!("{}", table);
}
