//! # TICG Trajectory Reader
//!
//! This module reconstructs per-frame snapshots from the multi-file output of
//! a TICG (theoretically informed coarse grain) Monte Carlo simulator for
//! block copolymers. A single run is described by four files that have to be
//! correlated:
//!
//! - the trajectory file, holding many consecutive frames of `type x y z`
//!   particle records,
//! - the simulation log, holding the box geometry,
//! - the chain-descriptor file, enumerating polymer chain classes,
//! - the structure file, enumerating bonded particle pairs.
//!
//! The trajectory file is memory mapped so that frames can be assembled from
//! any recorded byte offset without re-reading the file from the start. The
//! chain expansion and the bond table are derived from the companion files at
//! most once per session and shared by every assembled frame.
//!
//! ## Example
//!
//! ```no_run
//! use ticg::TicgReader;
//!
//! let mut reader = TicgReader::open("bead_out.xyz").unwrap();
//! for frame_result in &mut reader {
//!     let frame = frame_result.unwrap();
//!     println!("{} particles, {} bonds", frame.particles.len(), frame.bonds.len());
//! }
//! ```

use glam::DVec3;
use memmap2::{Mmap, MmapOptions};
use std::fs::File;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

use crate::catalog::DEVELOPER_TYPE_ID;
use crate::topology::{extract_bonds, parse_chain_descriptors, BondPair};

/// The fixed text on the second line of every frame. Its occurrence marks the
/// start of a frame's particle payload.
pub const FRAME_MARKER: &str = "MC simulation of coarse grain block copolymer";

/// The simulation log stores box edge lengths in simulation units; trajectory
/// coordinates are ten times finer.
const BOX_UNIT_SCALE: f64 = 10.0;

/// Possible errors when reading TICG simulation output
///
/// This enum represents the different types of errors that can occur when
/// correlating the trajectory file with its companion files.
#[derive(Error, Debug)]
pub enum TicgError {
    /// I/O errors from the underlying file system
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A companion file (log, chain descriptor, or structure file) is absent
    #[error("missing companion file: {}", .0.display())]
    MissingCompanionFile(PathBuf),

    /// Format errors: a line does not match the expected grammar, a payload
    /// is truncated, or a count does not add up
    #[error("TICG format error: {0}")]
    Format(String),

    /// The simulation log does not fully describe the box geometry
    #[error("box configuration error: {0}")]
    Config(String),

    /// The structure file and the chain-descriptor file disagree
    #[error("consistency error: {0}")]
    Consistency(String),
}

/// Location of one frame inside the trajectory file
///
/// Produced once at load time by the frame scan; assembling a frame later
/// only needs its descriptor, never a re-scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameDescriptor {
    /// Byte position of the first particle record of this frame
    pub byte_offset: u64,

    /// Number of particle records announced for this frame
    pub particle_count: u32,

    /// Display label, assigned sequentially in discovery order
    pub label: String,
}

/// Fixed simulation box geometry
///
/// The TICG format models a slab: periodic along x and y, walled along z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxDimensions {
    /// Edge lengths in trajectory coordinate units
    pub lengths: DVec3,

    /// Periodicity per axis; fixed to `[true, true, false]` for this format
    pub periodic: [bool; 3],
}

/// One particle of an assembled frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Raw particle type code from the trajectory record
    pub type_id: u8,

    /// Position in trajectory coordinate units
    pub position: DVec3,

    /// Chain membership: non-negative for polymer beads (an index into the
    /// chain expansion), negative (`-type_id`) for particles outside the
    /// chain-file coverage such as solvent and developer beads
    pub chain_id: i32,

    /// Whether this particle carries the developer type code
    pub is_developer: bool,
}

/// A fully assembled snapshot
///
/// The bond topology is frame-invariant, so `bonds` and `bond_chain_ids` are
/// shared handles onto the session caches rather than per-frame copies.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// All particles of this snapshot, in trajectory record order
    pub particles: Vec<Particle>,

    /// The simulation box
    pub box_dimensions: BoxDimensions,

    /// Bonded particle index pairs, zero-based
    pub bonds: Arc<Vec<BondPair>>,

    /// Chain id of each bond, parallel to `bonds`
    pub bond_chain_ids: Arc<Vec<i32>>,
}

/// Session-scoped topology caches, computed on first frame request
///
/// Holding these behind `Arc` keeps them read-only and cheap to attach to
/// every assembled frame.
struct SessionTopology {
    chain_id_by_particle: Arc<Vec<i32>>,
    bonds: Arc<Vec<BondPair>>,
    bond_chain_ids: Arc<Vec<i32>>,
}

/// A reader for TICG trajectory files and their companion files
///
/// Opening a reader scans the trajectory once to build the frame catalog.
/// Frames can then be assembled in any order; the companion files are parsed
/// lazily on the first request and their results reused for the remainder of
/// the session.
pub struct TicgReader {
    /// Memory-mapped trajectory file
    ///
    /// Memory mapping lets frame assembly slice the file directly at a
    /// recorded byte offset, with the OS handling caching.
    mmap: Mmap,

    /// Path of the trajectory file
    path: PathBuf,

    /// Path of the simulation log (box geometry)
    log_path: PathBuf,

    /// Path of the chain-descriptor file
    chain_path: PathBuf,

    /// Path of the structure file (bond topology)
    structure_path: PathBuf,

    /// Frame catalog, built once at open time
    frames: Vec<FrameDescriptor>,

    /// Cursor for the sequential reading API (0-based frame index)
    current_frame: usize,

    /// Lazily resolved box geometry; populated only on success
    box_dimensions: Option<BoxDimensions>,

    /// Lazily derived chain expansion and bond table; populated only on
    /// success, so a failed first computation is retried on the next request
    topology: Option<SessionTopology>,
}

/// Builder for [`TicgReader`] to allow flexible construction
///
/// By default the companion files are expected next to the trajectory file,
/// sharing its stem: `<stem>.log`, `<stem>.chain`, and `<stem>.psf`. Each
/// path can be overridden individually.
pub struct TicgReaderBuilder {
    /// Path to the trajectory file
    path: PathBuf,

    /// Override for the simulation log path
    log_path: Option<PathBuf>,

    /// Override for the chain-descriptor file path
    chain_path: Option<PathBuf>,

    /// Override for the structure file path
    structure_path: Option<PathBuf>,
}

impl TicgReaderBuilder {
    /// Create a new builder
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the trajectory file
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            log_path: None,
            chain_path: None,
            structure_path: None,
        }
    }

    /// Use a specific simulation log instead of `<stem>.log`
    pub fn with_log_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.log_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Use a specific chain-descriptor file instead of `<stem>.chain`
    pub fn with_chain_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.chain_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Use a specific structure file instead of `<stem>.psf`
    pub fn with_structure_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.structure_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Build the reader
    ///
    /// Verifies that all companion files exist, memory maps the trajectory,
    /// and scans it once to build the frame catalog.
    ///
    /// # Errors
    ///
    /// Returns [`TicgError::MissingCompanionFile`] if a companion file is
    /// absent, and [`TicgError::Format`] if the trajectory holds no frames
    /// or a frame marker is not preceded by a particle count.
    pub fn build(self) -> Result<TicgReader, TicgError> {
        let log_path = self
            .log_path
            .unwrap_or_else(|| self.path.with_extension("log"));
        let chain_path = self
            .chain_path
            .unwrap_or_else(|| self.path.with_extension("chain"));
        let structure_path = self
            .structure_path
            .unwrap_or_else(|| self.path.with_extension("psf"));

        // The companion files are only parsed lazily, but their absence must
        // surface at open time rather than on the first frame request.
        for companion in [&log_path, &chain_path, &structure_path] {
            if !companion.exists() {
                return Err(TicgError::MissingCompanionFile(companion.clone()));
            }
        }

        let file = File::open(&self.path)?;

        // Memory map the trajectory for efficient random frame access.
        // Using unsafe because memory mapping is inherently unsafe (the file
        // bytes are accessed directly as memory).
        let mmap = unsafe { MmapOptions::new().map(&file)? };

        let frames = scan_frames(&mmap)?;
        if frames.is_empty() {
            return Err(TicgError::Format(format!(
                "{}: trajectory contains no frames",
                self.path.display()
            )));
        }

        Ok(TicgReader {
            mmap,
            path: self.path,
            log_path,
            chain_path,
            structure_path,
            frames,
            current_frame: 0,
            box_dimensions: None,
            topology: None,
        })
    }
}

impl TicgReader {
    /// Opens a TICG trajectory with its companion files at default locations
    ///
    /// This is a convenience method that uses the builder pattern internally.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the trajectory file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, TicgError> {
        TicgReaderBuilder::new(path).build()
    }

    /// Checks whether a file looks like a TICG trajectory
    ///
    /// Only the first two lines are inspected: a TICG trajectory opens with a
    /// particle count followed by the fixed frame marker text.
    pub fn detect<P: AsRef<Path>>(path: P) -> std::io::Result<bool> {
        let file = File::open(path)?;
        let mut lines = std::io::BufReader::new(file).lines();
        match lines.next() {
            Some(first) => first?,
            None => return Ok(false),
        };
        match lines.next() {
            Some(second) => Ok(second?.trim() == FRAME_MARKER),
            None => Ok(false),
        }
    }

    /// Assembles the frame at `index` (0-based)
    ///
    /// Seeks the mapped trajectory to the frame's byte offset and reads
    /// exactly `particle_count` records. The box geometry, chain expansion,
    /// and bond table come from the session caches, computed on the first
    /// call and reused afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`TicgError::Format`] for an out-of-range index, a truncated
    /// payload, or a malformed particle record; [`TicgError::Config`] if the
    /// simulation log does not describe all three box axes; and
    /// [`TicgError::Consistency`] if the structure file and chain-descriptor
    /// file disagree on the bond count.
    pub fn read_frame(&mut self, index: usize) -> Result<Frame, TicgError> {
        let descriptor = match self.frames.get(index) {
            Some(descriptor) => descriptor.clone(),
            None => {
                return Err(TicgError::Format(format!(
                    "frame index {} out of range (0-{})",
                    index,
                    self.frames.len() - 1
                )))
            }
        };

        let box_dimensions = self.ensure_box()?;

        // Take shared handles onto the caches; frame assembly itself touches
        // no session state beyond the mapped trajectory bytes.
        let topology = self.ensure_topology()?;
        let chain_id_by_particle = Arc::clone(&topology.chain_id_by_particle);
        let bonds = Arc::clone(&topology.bonds);
        let bond_chain_ids = Arc::clone(&topology.bond_chain_ids);

        let particles = self.parse_particles(&descriptor, &chain_id_by_particle)?;

        Ok(Frame {
            particles,
            box_dimensions,
            bonds,
            bond_chain_ids,
        })
    }

    /// Assembles the next frame in sequence
    ///
    /// # Returns
    ///
    /// - `Some(Frame)` if a frame was assembled
    /// - `None` if all frames have been read
    pub fn read_next(&mut self) -> Result<Option<Frame>, TicgError> {
        if self.current_frame >= self.frames.len() {
            return Ok(None);
        }
        let frame = self.read_frame(self.current_frame)?;
        self.current_frame += 1;
        Ok(Some(frame))
    }

    /// Moves the sequential cursor to a specific frame
    ///
    /// # Errors
    ///
    /// Returns [`TicgError::Format`] if the index is out of range.
    pub fn seek_frame(&mut self, index: usize) -> Result<(), TicgError> {
        if index >= self.frames.len() {
            return Err(TicgError::Format(format!(
                "frame index {} out of range (0-{})",
                index,
                self.frames.len() - 1
            )));
        }
        self.current_frame = index;
        Ok(())
    }

    /// Rewinds the sequential cursor to the first frame
    pub fn reset(&mut self) {
        self.current_frame = 0;
    }

    /// Returns the frame catalog, ordered by appearance in the trajectory
    pub fn frames(&self) -> &[FrameDescriptor] {
        &self.frames
    }

    /// Returns the total number of frames in the trajectory
    pub fn num_frames(&self) -> usize {
        self.frames.len()
    }

    /// Returns the path of the trajectory file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the path of the simulation log
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    /// Returns the path of the chain-descriptor file
    pub fn chain_path(&self) -> &Path {
        &self.chain_path
    }

    /// Returns the path of the structure file
    pub fn structure_path(&self) -> &Path {
        &self.structure_path
    }

    /// Returns the box geometry, resolving it from the simulation log on the
    /// first call
    pub fn box_dimensions(&mut self) -> Result<BoxDimensions, TicgError> {
        self.ensure_box()
    }

    /// Resolves the box geometry, caching it on success
    fn ensure_box(&mut self) -> Result<BoxDimensions, TicgError> {
        if let Some(box_dimensions) = self.box_dimensions {
            return Ok(box_dimensions);
        }
        let text = std::fs::read_to_string(&self.log_path)?;
        let box_dimensions = parse_box_log(&text)?;
        self.box_dimensions = Some(box_dimensions);
        Ok(box_dimensions)
    }

    /// Derives the chain expansion and bond table, caching them on success
    ///
    /// The cache is only populated once every step succeeded, so a failed
    /// computation leaves it empty and the next request retries in full.
    fn ensure_topology(&mut self) -> Result<&SessionTopology, TicgError> {
        if self.topology.is_none() {
            let topology = self.load_topology()?;
            self.topology = Some(topology);
        }
        // Populated just above; the unwrap cannot fail.
        Ok(self.topology.as_ref().unwrap())
    }

    /// Parses the chain-descriptor and structure files into the session
    /// topology, cross-checking them against each other
    fn load_topology(&self) -> Result<SessionTopology, TicgError> {
        let chain_text = std::fs::read_to_string(&self.chain_path)?;
        let chains = parse_chain_descriptors(&chain_text)?;

        // The structure file is invariant across frames, so the first
        // frame's particle count locates its bond section.
        let particle_count = match self.frames.first() {
            Some(descriptor) => descriptor.particle_count as usize,
            None => {
                return Err(TicgError::Format(
                    "trajectory contains no frames".to_string(),
                ))
            }
        };

        if chains.chain_id_by_particle.len() > particle_count {
            return Err(TicgError::Consistency(format!(
                "{}: chain descriptors cover {} particles but each frame holds only {}",
                self.chain_path.display(),
                chains.chain_id_by_particle.len(),
                particle_count
            )));
        }

        let structure_text = std::fs::read_to_string(&self.structure_path)?;
        let bonds = extract_bonds(&structure_text, particle_count)?;

        // The chain-descriptor file and the structure file both enumerate
        // the chains; one structural bond per chain-internal connection.
        if bonds.len() != chains.chain_id_by_bond.len() {
            return Err(TicgError::Consistency(format!(
                "{}: structure file holds {} bonds but the chain descriptors imply {}",
                self.structure_path.display(),
                bonds.len(),
                chains.chain_id_by_bond.len()
            )));
        }

        Ok(SessionTopology {
            chain_id_by_particle: Arc::new(chains.chain_id_by_particle),
            bonds: Arc::new(bonds),
            bond_chain_ids: Arc::new(chains.chain_id_by_bond),
        })
    }

    /// Reads exactly `particle_count` records starting at the frame's byte
    /// offset and turns them into [`Particle`]s
    fn parse_particles(
        &self,
        descriptor: &FrameDescriptor,
        chain_id_by_particle: &[i32],
    ) -> Result<Vec<Particle>, TicgError> {
        let start = descriptor.byte_offset as usize;
        if start > self.mmap.len() {
            return Err(TicgError::Format(format!(
                "{}: byte offset {} is beyond the end of the trajectory",
                descriptor.label, descriptor.byte_offset
            )));
        }

        let count = descriptor.particle_count as usize;
        let mut data = &self.mmap[start..];
        let mut particles = Vec::with_capacity(count);

        for i in 0..count {
            if data.is_empty() {
                return Err(TicgError::Format(format!(
                    "{}: truncated payload, expected {} particle records but found {}",
                    descriptor.label, count, i
                )));
            }

            // Consume one line, newline included.
            let len = data
                .iter()
                .position(|&b| b == b'\n')
                .map(|p| p + 1)
                .unwrap_or(data.len());
            let raw = &data[..len];
            data = &data[len..];

            let line = std::str::from_utf8(raw)
                .map_err(|_| {
                    TicgError::Format(format!(
                        "{}: particle record {} is not valid UTF-8",
                        descriptor.label,
                        i + 1
                    ))
                })?
                .trim();

            particles.push(parse_particle(line, chain_id_by_particle, i).map_err(|what| {
                TicgError::Format(format!(
                    "{}: particle record {} has a malformed {} field",
                    descriptor.label,
                    i + 1,
                    what
                ))
            })?);
        }

        Ok(particles)
    }
}

// Implement Iterator for TicgReader
// This allows using the reader in for loops and with other iterator methods
impl Iterator for TicgReader {
    type Item = Result<Frame, TicgError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.read_next() {
            Ok(Some(frame)) => Some(Ok(frame)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

/// Scans the trajectory once, producing one descriptor per frame without
/// materializing particle data
///
/// A digits-only line announces the particle count of the frame that
/// follows; the frame marker line starts that frame's payload. Blank lines
/// are tolerated. Strictly one sequential pass, no lookahead.
fn scan_frames(data: &[u8]) -> Result<Vec<FrameDescriptor>, TicgError> {
    let mut frames = Vec::new();
    let mut pending_count: Option<u32> = None;

    let mut pos = 0usize;
    let mut line_number = 0usize;
    while pos < data.len() {
        let rest = &data[pos..];
        let len = rest
            .iter()
            .position(|&b| b == b'\n')
            .map(|p| p + 1)
            .unwrap_or(rest.len());
        let next = pos + len;
        line_number += 1;

        let line = std::str::from_utf8(&rest[..len])
            .map_err(|_| {
                TicgError::Format(format!("trajectory line {line_number} is not valid UTF-8"))
            })?
            .trim();

        if line == FRAME_MARKER {
            // The payload starts on the line after the marker.
            let particle_count = pending_count.take().ok_or_else(|| {
                TicgError::Format(format!(
                    "frame marker at line {line_number} is not preceded by a particle count"
                ))
            })?;
            frames.push(FrameDescriptor {
                byte_offset: next as u64,
                particle_count,
                label: format!("Frame {}", frames.len() + 1),
            });
        } else if !line.is_empty() && line.bytes().all(|b| b.is_ascii_digit()) {
            pending_count = Some(line.parse().map_err(|_| {
                TicgError::Format(format!(
                    "particle count at line {line_number} is out of range"
                ))
            })?);
        }

        pos = next;
    }

    Ok(frames)
}

/// Parses the simulation log's box-size lines into [`BoxDimensions`]
///
/// The relevant lines are matched by their two-character prefix (`x:`, `y:`,
/// `z:`); everything else in the log is ignored. Values are scaled into
/// trajectory coordinate units. Periodicity is fixed by the format: periodic
/// along x and y, walled along z (slab geometry).
fn parse_box_log(text: &str) -> Result<BoxDimensions, TicgError> {
    const PREFIXES: [&str; 3] = ["x:", "y:", "z:"];
    let mut lengths: [Option<f64>; 3] = [None; 3];

    for line in text.lines() {
        let line = line.trim_start();
        for (axis, prefix) in PREFIXES.iter().enumerate() {
            if let Some(value) = line.strip_prefix(prefix) {
                let value: f64 = value.trim().parse().map_err(|_| {
                    TicgError::Config(format!(
                        "malformed '{prefix}' box size line in the simulation log"
                    ))
                })?;
                lengths[axis] = Some(value * BOX_UNIT_SCALE);
            }
        }
    }

    match lengths {
        [Some(x), Some(y), Some(z)] => Ok(BoxDimensions {
            lengths: DVec3::new(x, y, z),
            periodic: [true, true, false],
        }),
        _ => {
            // Name the first axis that is missing to ease diagnosis.
            let missing = lengths
                .iter()
                .position(|length| length.is_none())
                .map(|axis| PREFIXES[axis])
                .unwrap_or("?");
            Err(TicgError::Config(format!(
                "simulation log is missing a '{missing}' box size line"
            )))
        }
    }
}

/// Parses one `type x y z` record
///
/// On error, returns the name of the offending field so the caller can add
/// file and line context.
fn parse_particle(
    line: &str,
    chain_id_by_particle: &[i32],
    index: usize,
) -> Result<Particle, &'static str> {
    let mut fields = line.split_whitespace();

    let type_id: u8 = fields
        .next()
        .ok_or("type")?
        .parse()
        .map_err(|_| "type")?;
    let x: f64 = fields.next().ok_or("x")?.parse().map_err(|_| "x")?;
    let y: f64 = fields.next().ok_or("y")?.parse().map_err(|_| "y")?;
    let z: f64 = fields.next().ok_or("z")?.parse().map_err(|_| "z")?;

    // Particles beyond the chain expansion are non-polymer beads; they carry
    // a negative pseudo-chain id derived from their raw type value. Note
    // that this collides for particles sharing a type id, which matches the
    // simulator's own convention.
    let chain_id = chain_id_by_particle
        .get(index)
        .copied()
        .unwrap_or(-(type_id as i32));

    Ok(Particle {
        type_id,
        position: DVec3::new(x, y, z),
        chain_id,
        // A simulation-specific convention: type code 3 marks developer
        // beads, see the particle-type catalog.
        is_developer: type_id == DEVELOPER_TYPE_ID,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_finds_frames_in_order() {
        let data = b"3\nMC simulation of coarse grain block copolymer\n\
                     0 1.0 2.0 3.0\n1 4.0 5.0 6.0\n2 7.0 8.0 9.0\n\
                     3\nMC simulation of coarse grain block copolymer\n\
                     0 1.1 2.1 3.1\n1 4.1 5.1 6.1\n2 7.1 8.1 9.1\n";
        let frames = scan_frames(data).unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].label, "Frame 1");
        assert_eq!(frames[1].label, "Frame 2");
        assert_eq!(frames[0].particle_count, 3);
        assert!(frames[0].byte_offset < frames[1].byte_offset);
        // The first payload starts right after the count and marker lines.
        assert_eq!(frames[0].byte_offset, 2 + FRAME_MARKER.len() as u64 + 1);
    }

    #[test]
    fn scan_tolerates_blank_lines() {
        let data = b"\n2\n\nMC simulation of coarse grain block copolymer\n0 0 0 0\n1 0 0 0\n";
        let frames = scan_frames(data).unwrap();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].particle_count, 2);
    }

    #[test]
    fn scan_rejects_marker_without_count() {
        let data = b"MC simulation of coarse grain block copolymer\n0 0 0 0\n";
        let err = scan_frames(data).unwrap_err();
        assert!(matches!(err, TicgError::Format(_)));
    }

    #[test]
    fn box_log_scales_and_fixes_periodicity() {
        let text = "# parameters\nsteps: 1000\nx: 10\ny: 10\nz: 5\n";
        let dims = parse_box_log(text).unwrap();
        assert_eq!(dims.lengths, DVec3::new(100.0, 100.0, 50.0));
        assert_eq!(dims.periodic, [true, true, false]);
    }

    #[test]
    fn box_log_missing_axis_is_a_config_error() {
        let err = parse_box_log("x: 10\ny: 10\n").unwrap_err();
        assert!(matches!(err, TicgError::Config(_)));
    }

    #[test]
    fn particle_outside_chain_coverage_gets_negative_id() {
        let chain_ids = [0, 0, 1];
        let polymer = parse_particle("1 0.5 0.5 0.5", &chain_ids, 2).unwrap();
        assert_eq!(polymer.chain_id, 1);
        let solvent = parse_particle("2 0.5 0.5 0.5", &chain_ids, 3).unwrap();
        assert_eq!(solvent.chain_id, -2);
        assert!(!solvent.is_developer);
        let developer = parse_particle("3 0.5 0.5 0.5", &chain_ids, 4).unwrap();
        assert_eq!(developer.chain_id, -3);
        assert!(developer.is_developer);
    }

    #[test]
    fn malformed_coordinate_names_the_field() {
        assert_eq!(parse_particle("0 1.0 oops 3.0", &[], 0), Err("y"));
        assert_eq!(parse_particle("0 1.0", &[], 0), Err("z"));
    }
}
