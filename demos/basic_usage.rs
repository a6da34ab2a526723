use std::error::Error;
use ticg::TicgReader;

fn main() -> Result<(), Box<dyn Error>> {
    let path = std::env::args()
        .nth(1)
        .expect("Usage: cargo run --example basic_usage <trajectory.xyz>");
    let mut reader = TicgReader::open(&path)?;

    println!("Trajectory contains {} frames", reader.num_frames());

    // Count developer particles in the upper half of the slab
    let mut frame_count = 0;
    let mut developers_on_top = 0;

    while let Some(frame) = reader.read_next()? {
        frame_count += 1;
        let half_height = frame.box_dimensions.lengths.z / 2.0;

        developers_on_top += frame
            .particles
            .iter()
            .filter(|particle| particle.is_developer && particle.position.z > half_height)
            .count();
    }

    let average = developers_on_top as f64 / frame_count as f64;
    println!("Average developer particles in the upper half: {:.1}", average);

    Ok(())
}
