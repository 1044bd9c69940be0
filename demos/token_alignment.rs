//! User journey alignment over arbitrary symbols (not characters).
//!
//! Each session is compared to a golden path `Landing -> Pricing -> SignUp`.
//! The edit list says exactly what the user did differently.

use editgrid::{EditOp, Grid, Variant};

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Landing,
    Pricing,
    SignUp,
    Blog,
    Exit,
}

fn print_seq(name: &str, seq: &[State]) {
    let s: Vec<String> = seq.iter().map(|s| format!("{s:?}")).collect();
    println!("{:<15}: {}", name, s.join(" -> "));
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let golden = [State::Landing, State::Pricing, State::SignUp];
    let sessions: [(&str, Vec<State>); 4] = [
        ("User A (ideal)", vec![State::Landing, State::Pricing, State::SignUp]),
        (
            "User B (noisy)",
            vec![
                State::Landing,
                State::Blog,
                State::Pricing,
                State::Blog,
                State::Pricing,
                State::SignUp,
            ],
        ),
        ("User C (bounce)", vec![State::Landing, State::Blog, State::Exit]),
        ("User D (swap)", vec![State::Pricing, State::Landing, State::SignUp]),
    ];

    print_seq("Golden path", &golden);
    println!();

    for (name, session) in &sessions {
        let grid = Grid::new(&golden[..], session.as_slice(), Variant::Transposition)?;
        print_seq(name, session);
        println!("   distance: {}", grid.distance());
        for edit in grid.canonical_edits(grid.end())? {
            match edit.op {
                EditOp::Noop => {}
                EditOp::Insertion(s) => println!("   + detour through {s:?}"),
                EditOp::Deletion(s) => println!("   - skipped {s:?}"),
                EditOp::Substitution { deleted, inserted } => {
                    println!("   ~ {inserted:?} instead of {deleted:?}");
                }
                EditOp::Transposition { first, second } => {
                    println!("   <> visited {second:?} before {first:?}");
                }
            }
        }
    }
    Ok(())
}
