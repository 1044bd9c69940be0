//! Typos with swapped letters: base Levenshtein vs the transposition variant.
//!
//! Usage: `cargo run --example typo_transpositions -- [base|transposition]`
//! (both are shown when no variant is given).

use editgrid::{EditKind, Grid, Variant};

const PAIRS: &[(&str, &str)] = &[
    ("teh", "the"),
    ("recieve", "receive"),
    ("form", "from"),
    ("acress", "caress"),
    ("wierd", "weird"),
    ("ca", "abc"),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let variants: Vec<Variant> = match std::env::args().nth(1) {
        Some(arg) => vec![arg.parse()?],
        None => vec![Variant::Base, Variant::Transposition],
    };

    for variant in variants {
        println!("variant = {variant}");
        println!("{:<10} {:<10} {:>4}  edits", "typo", "word", "dist");
        for &(typo, word) in PAIRS {
            let grid = Grid::from_strs(typo, word, variant)?;
            let kinds: Vec<&str> = grid
                .canonical_edits(grid.end())?
                .iter()
                .map(|e| e.kind())
                .filter(|k| *k != EditKind::Noop)
                .map(EditKind::name)
                .collect();
            println!("{typo:<10} {word:<10} {:>4}  {}", grid.distance(), kinds.join(", "));
        }
        println!();
    }
    Ok(())
}
