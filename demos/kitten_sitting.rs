//! Classic example: KITTEN -> SITTING.
//!
//! Prints the distance matrix, the canonical alignment, and its edit list.
//! Run with `RUST_LOG=editgrid=trace` to watch each step resolve.

use editgrid::{EditOp, Grid, Variant};
use ndarray::Array2;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let (a, b) = ("KITTEN", "SITTING");
    let grid = Grid::from_strs(a, b, Variant::Base)?;

    let rows = grid.distance_matrix();
    let m = Array2::from_shape_fn((grid.height(), grid.width()), |(y, x)| rows[y][x]);

    println!("{a} -> {b}: distance {}", grid.distance());
    println!();
    print!("     ");
    for c in a.chars() {
        print!("{c:>3}");
    }
    println!();
    let row_labels: Vec<char> = std::iter::once(' ').chain(b.chars()).collect();
    for (y, row) in m.rows().into_iter().enumerate() {
        print!("{:>2}", row_labels[y]);
        for d in row {
            print!("{d:>3}");
        }
        println!();
    }
    println!();

    let path = grid.canonical_path(grid.end());
    let cells: Vec<(usize, usize)> = path.iter().map(|c| (c.x, c.y)).collect();
    println!("canonical path: {cells:?}");
    let edits = grid.edits_along_path(&path)?;
    for (i, edit) in edits.iter().filter(|e| !e.is_noop()).enumerate() {
        let detail = match &edit.op {
            EditOp::Insertion(s) => format!("insert {s}"),
            EditOp::Deletion(s) => format!("delete {s}"),
            EditOp::Substitution { deleted, inserted } => {
                format!("replace {deleted} with {inserted}")
            }
            EditOp::Transposition { first, second } => format!("swap {first}{second}"),
            EditOp::Noop => continue,
        };
        println!("  {}. {detail} at {}", i + 1, edit.to);
    }
    Ok(())
}
