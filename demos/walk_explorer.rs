//! Runs a suggested quantum walk and prints the graph, the circuit and the counts.
//!
//! `RUST_LOG=qwalk=debug cargo run --example walk_explorer` shows construction details.

use qwalk::{
    StatevectorSimulator, WalkEngine, WalkError, WalkParameters, application_insight, suggest_graph,
};

const NUM_QUBITS: usize = 3;
const STEPS: usize = 5;

fn main() -> Result<(), WalkError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut rng = rand::rng();
    let suggestion = suggest_graph(&mut rng);
    println!("{}", suggestion);
    println!("Insight: {}", application_insight(&mut rng));

    let params = WalkParameters::new(NUM_QUBITS, STEPS, suggestion.topology);
    let engine = WalkEngine::new(params, StatevectorSimulator::new())?;

    println!("\n{}", engine.graph());
    println!("\n{}", engine.build_circuit());

    let counts = engine.run_walk()?;
    println!("{}", counts);

    let probabilities = counts.probabilities();
    for (bitstring, p) in &probabilities {
        let bar = "#".repeat((p * 100.0).round() as usize);
        println!("  {} {:>6.3} {}", bitstring, p, bar);
    }
    if let Some((bitstring, count)) = counts.most_frequent() {
        println!("Most frequent outcome: {} ({} shots)", bitstring, count);
    }
    Ok(())
}
