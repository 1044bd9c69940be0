//! Shows every cell lying on some optimal alignment, and the canonical one.
//!
//! `*` canonical path, `+` other optimal cells, `.` everything else.

use editgrid::{Coord, Grid, Variant};
use ndarray::Array2;

fn render(grid: &Grid<char>, target: Coord) -> Array2<char> {
    let region = grid.all_optimal_coordinates(target);
    let path = grid.canonical_path(target);
    Array2::from_shape_fn((grid.height(), grid.width()), |(y, x)| {
        let c = Coord::new(x, y);
        if path.contains(&c) {
            '*'
        } else if region.contains(&c) {
            '+'
        } else {
            '.'
        }
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    for (a, b, variant) in [
        ("SUNDAY", "SATURDAY", Variant::Base),
        ("WORM", "FROM", Variant::Transposition),
        ("abcd", "dcba", Variant::Base),
    ] {
        let grid = Grid::from_strs(a, b, variant)?;
        let target = grid.end();
        println!(
            "{a} -> {b} ({variant}): distance {}, {} optimal cells",
            grid.distance(),
            grid.all_optimal_coordinates(target).len()
        );
        for row in render(&grid, target).rows() {
            let line: String = row.iter().collect();
            println!("  {line}");
        }
        println!();
    }
    Ok(())
}
