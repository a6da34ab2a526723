//! # ticg CLI Tool
//!
//! This simple command-line tool demonstrates the capabilities of the ticg
//! library. It opens a TICG trajectory and its companion files, reads the
//! frame catalog, and displays information about the trajectory.

use std::time::Instant;
use ticg::{particle_type, TicgReader, TicgReaderBuilder};

/// Main entry point for the CLI application
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Get the first command line argument as the input file path
    let path = std::env::args()
        .nth(1)
        .expect("Usage: ticg <trajectory.xyz>");

    // Start a timer to measure performance
    let start_time = Instant::now();

    // A cheap sniff before opening in full
    if !TicgReader::detect(&path)? {
        eprintln!("{path}: not a TICG trajectory (frame marker not found)");
        return Ok(());
    }

    let mut reader = TicgReaderBuilder::new(&path)
        // Uncomment to point at companion files in other locations
        // .with_structure_file("structure.psf")
        .build()?;

    // Display basic information about the session
    println!("TICG Session Information:");
    println!("  Trajectory: {}", reader.path().display());
    println!("  Simulation log: {}", reader.log_path().display());
    println!("  Chain descriptors: {}", reader.chain_path().display());
    println!("  Structure file: {}", reader.structure_path().display());
    println!("  Number of frames: {}", reader.num_frames());

    let box_dimensions = reader.box_dimensions()?;
    println!(
        "  Box lengths: {} (periodic: {:?})",
        box_dimensions.lengths, box_dimensions.periodic
    );

    // Iterator-based processing - for every frame in the trajectory
    let mut frame_count = 0;
    for frame_result in &mut reader {
        let frame = frame_result?;
        frame_count += 1;

        let polymer = frame
            .particles
            .iter()
            .filter(|particle| particle.chain_id >= 0)
            .count();
        let developer = frame
            .particles
            .iter()
            .filter(|particle| particle.is_developer)
            .count();

        println!(
            "Frame {}: {} particles ({} polymer beads, {} developer), {} bonds",
            frame_count,
            frame.particles.len(),
            polymer,
            developer,
            frame.bonds.len()
        );
    }

    // Demonstrate random access to a specific frame
    if reader.num_frames() > 1 {
        println!("\nSeeking back to the first frame:");
        reader.seek_frame(0)?;

        if let Some(frame) = reader.read_next()? {
            if let Some(particle) = frame.particles.first() {
                let type_name = particle_type(particle.type_id)
                    .map(|entry| entry.name)
                    .unwrap_or("unknown");
                println!(
                    "  First particle: {} at {}",
                    type_name, particle.position
                );
            }
        }
    }

    // Calculate and display performance metrics
    let elapsed = start_time.elapsed();
    println!("\nRead {} frames in {:.2?}", frame_count, elapsed);

    let fps = frame_count as f64 / elapsed.as_secs_f64();
    println!("Performance: {:.1} frames/sec", fps);

    Ok(())
}
