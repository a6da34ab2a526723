use std::error::Error;
use ticg::TicgReader;

/// Computes the mean squared end-to-end bond length per chain for the first
/// frame of a trajectory.
fn main() -> Result<(), Box<dyn Error>> {
    let path = std::env::args()
        .nth(1)
        .expect("Usage: cargo run --example chain_analysis <trajectory.xyz>");
    let mut reader = TicgReader::open(&path)?;

    let frame = reader.read_frame(0)?;
    println!(
        "Frame 1: {} particles, {} bonds",
        frame.particles.len(),
        frame.bonds.len()
    );

    // Accumulate squared bond lengths per chain
    let num_chains = frame
        .bond_chain_ids
        .iter()
        .copied()
        .max()
        .map(|id| id as usize + 1)
        .unwrap_or(0);
    let mut sums = vec![0.0f64; num_chains];
    let mut counts = vec![0usize; num_chains];

    for (bond, &chain_id) in frame.bonds.iter().zip(frame.bond_chain_ids.iter()) {
        let a = frame.particles[bond.idx1 as usize].position;
        let b = frame.particles[bond.idx2 as usize].position;
        sums[chain_id as usize] += a.distance_squared(b);
        counts[chain_id as usize] += 1;
    }

    for (chain_id, (sum, count)) in sums.iter().zip(counts.iter()).enumerate() {
        if *count > 0 {
            println!(
                "Chain {}: mean squared bond length {:.3} over {} bonds",
                chain_id,
                sum / *count as f64,
                count
            );
        }
    }

    Ok(())
}
