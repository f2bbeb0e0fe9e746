//! Bell and GHZ state demo.
//!
//! Builds the circuits with the core API, prints their amplitudes and samples
//! them with a seeded RNG:
//!
//! ```text
//! cargo run --example bell
//! ```

use rand::SeedableRng;
use rand::rngs::StdRng;
use qce_rs::display::format_state;
use qce_rs::easybuild::{bell_circuit, ghz_circuit};
use qce_rs::measure::counts;

fn main() -> qce_rs::Result<()> {
    let mut rng = StdRng::seed_from_u64(42);

    let bell = bell_circuit()?;
    println!("=== Bell pair ===\n{}", bell);
    let state = bell.run();
    print!("{}", format_state(&state));
    println!("Single shot: |{}⟩", bell.measure(&state, &mut rng)?);

    let n = 4;
    let ghz = ghz_circuit(n)?;
    println!("\n=== {}-qubit GHZ ===\n{}", n, ghz);
    let state = ghz.run();
    println!("Norm: {:.10}", state.norm());
    for (label, count) in counts(&state, 1000, &mut rng) {
        println!("  |{}⟩: {}", label, count);
    }
    Ok(())
}
