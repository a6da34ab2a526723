//! # ticg - TICG Trajectory Reader Library
//!
//! `ticg` reconstructs per-frame snapshots from the multi-file output of a
//! TICG (theoretically informed coarse grain) Monte Carlo simulator for
//! block copolymers.
//!
//! ## Features
//!
//! - Memory-mapped trajectory access for efficient random frame seeking
//! - One-pass frame indexing without materializing particle payloads
//! - Chain membership and bond topology derived from the companion files at
//!   most once per session
//! - Iterator-based API for idiomatic Rust usage
//!
//! ## Example
//!
//! ```no_run
//! use ticg::TicgReader;
//!
//! // Open a trajectory; the simulation log, chain-descriptor, and
//! // structure files are expected next to it.
//! let mut reader = TicgReader::open("bead_out.xyz").unwrap();
//!
//! // Iterate through all frames using the Iterator trait
//! for frame_result in &mut reader {
//!     let frame = frame_result.unwrap();
//!
//!     // Process the frame data
//!     println!("Frame holds {} particles", frame.particles.len());
//!     println!("Box lengths: {}", frame.box_dimensions.lengths);
//! }
//! ```

// Re-export the main components for easier access
// This allows users to write 'use ticg::TicgReader' instead of
// 'use ticg::reader::TicgReader'
pub use catalog::{particle_type, ParticleType, DEVELOPER_TYPE_ID, PARTICLE_TYPES};
pub use reader::{
    BoxDimensions, Frame, FrameDescriptor, Particle, TicgError, TicgReader, TicgReaderBuilder,
    FRAME_MARKER,
};
pub use topology::{BondPair, ChainTopology, ANGLE_SECTION_MARKER};

// Modules that contain the actual implementation
pub mod catalog;
pub mod reader;
pub mod topology;

// In the future, other modules can be added for related formats, for
// example a writer, or readers for the simulator's observable logs.
