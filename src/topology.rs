//! # Chain and Bond Topology
//!
//! Two companion files describe the fixed connectivity of a TICG run:
//!
//! - the chain-descriptor file enumerates chain classes (`N|N_bead|label`),
//!   which expand into a per-particle and a per-bond chain-id sequence,
//! - the structure file enumerates the bonded particle pairs themselves, in
//!   a fixed-layout section located by line offset.
//!
//! Both are invariant across frames, so the reader derives them at most once
//! per session. The two files enumerate the same chains independently, which
//! is why the extracted bond count is cross-checked against the chain
//! expansion rather than trusted silently.

use crate::reader::TicgError;

/// Marker text of the angle section that terminates the bond records in the
/// structure file.
pub const ANGLE_SECTION_MARKER: &str = "!NTHETA";

/// The structure file carries a fixed-size header before its atom records;
/// the bond section starts `particle_count` lines after it.
const STRUCTURE_HEADER_LINES: usize = 9;

/// Leading lines of the chain-descriptor file that carry no records.
const CHAIN_HEADER_LINES: usize = 4;

/// One bonded particle pair, as zero-based indices
///
/// Order-preserving as a list: the extraction keeps file order so the pairs
/// stay parallel to the chain expansion's per-bond ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BondPair {
    pub idx1: u32,
    pub idx2: u32,
}

/// The expanded chain-descriptor file
///
/// Chain ids increase monotonically from 0, one id per chain replica; all
/// beads of a replica share its id. Chains are linear, so a replica of
/// `N_bead` beads contributes `N_bead - 1` bonds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChainTopology {
    /// Chain id of each polymer particle, in particle order
    pub chain_id_by_particle: Vec<i32>,

    /// Chain id of each intra-chain bond, in bond order
    pub chain_id_by_bond: Vec<i32>,

    /// Number of chain replicas across all classes
    pub num_chains: u32,
}

/// Parses the chain-descriptor file into its expanded sequences
///
/// The fixed header is skipped; every remaining non-empty line must read
/// `N|N_bead|free_text`.
///
/// # Errors
///
/// Returns [`TicgError::Format`] on a record missing the `|` separator or
/// with a non-numeric replica or bead count.
pub(crate) fn parse_chain_descriptors(text: &str) -> Result<ChainTopology, TicgError> {
    let mut topology = ChainTopology::default();
    let mut next_chain_id: i32 = 0;

    for (index, line) in text.lines().enumerate().skip(CHAIN_HEADER_LINES) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut fields = line.splitn(3, '|');
        let replicas_field = fields.next().unwrap_or("");
        let beads_field = fields.next().ok_or_else(|| {
            TicgError::Format(format!(
                "chain descriptor at line {} is missing a '|' separator",
                index + 1
            ))
        })?;

        let replicas: u32 = replicas_field.trim().parse().map_err(|_| {
            TicgError::Format(format!(
                "chain descriptor at line {}: replica count {:?} is not a number",
                index + 1,
                replicas_field
            ))
        })?;
        let beads: u32 = beads_field.trim().parse().map_err(|_| {
            TicgError::Format(format!(
                "chain descriptor at line {}: bead count {:?} is not a number",
                index + 1,
                beads_field
            ))
        })?;

        for _ in 0..replicas {
            topology
                .chain_id_by_particle
                .extend(std::iter::repeat(next_chain_id).take(beads as usize));
            topology
                .chain_id_by_bond
                .extend(std::iter::repeat(next_chain_id).take(beads.saturating_sub(1) as usize));
            next_chain_id += 1;
        }
    }

    topology.num_chains = next_chain_id as u32;
    Ok(topology)
}

/// Extracts the bond section of the structure file as zero-based index pairs
///
/// The bond records start at a fixed line offset derived from the particle
/// count; the section ends at the line preceding the angle-section marker,
/// found by a bounded backward scan. Each record line packs up to four pairs
/// as eight whitespace-separated fields; a dangling odd field is
/// end-of-section padding and is discarded.
///
/// # Errors
///
/// Returns [`TicgError::Format`] if the file is too short, the angle marker
/// is absent or precedes the bond section, a line holds more than eight
/// fields, or an index is non-numeric or zero (the file is 1-based).
pub(crate) fn extract_bonds(
    text: &str,
    particle_count: usize,
) -> Result<Vec<BondPair>, TicgError> {
    let lines: Vec<&str> = text.lines().collect();
    let start = particle_count + STRUCTURE_HEADER_LINES;
    if start > lines.len() {
        return Err(TicgError::Format(format!(
            "structure file too short: bond records expected at line {}, file has {} lines",
            start + 1,
            lines.len()
        )));
    }

    // Bounded backward search for the section that follows the bonds.
    let marker_index = lines
        .iter()
        .rposition(|line| line.contains(ANGLE_SECTION_MARKER))
        .ok_or_else(|| {
            TicgError::Format(format!(
                "structure file has no '{ANGLE_SECTION_MARKER}' section marker"
            ))
        })?;
    if marker_index < start {
        return Err(TicgError::Format(format!(
            "'{ANGLE_SECTION_MARKER}' marker at line {} precedes the bond records at line {}",
            marker_index + 1,
            start + 1
        )));
    }

    let mut bonds = Vec::new();
    for (offset, line) in lines[start..marker_index].iter().enumerate() {
        let line_number = start + offset + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() > 8 {
            return Err(TicgError::Format(format!(
                "bond record at line {line_number} holds {} fields, at most 8 expected",
                fields.len()
            )));
        }
        for pair in fields.chunks_exact(2) {
            bonds.push(BondPair {
                idx1: parse_bond_index(pair[0], line_number)?,
                idx2: parse_bond_index(pair[1], line_number)?,
            });
        }
    }

    Ok(bonds)
}

/// Parses one bond index field, converting from the file's 1-based indexing
fn parse_bond_index(field: &str, line_number: usize) -> Result<u32, TicgError> {
    let index: u32 = field.parse().map_err(|_| {
        TicgError::Format(format!(
            "bond record at line {line_number}: index {field:?} is not a number"
        ))
    })?;
    index.checked_sub(1).ok_or_else(|| {
        TicgError::Format(format!(
            "bond record at line {line_number}: index 0 in a 1-based file"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHAIN_HEADER: &str = "# TICG chain classes\n# generated\n#\n#\n";

    #[test]
    fn chain_classes_expand_into_parallel_sequences() {
        let text = format!("{CHAIN_HEADER}2|3|diblock\n1|2|homopolymer\n");
        let topology = parse_chain_descriptors(&text).unwrap();
        assert_eq!(topology.chain_id_by_particle, vec![0, 0, 0, 1, 1, 1, 2, 2]);
        assert_eq!(topology.chain_id_by_bond, vec![0, 0, 1, 1, 2]);
        assert_eq!(topology.num_chains, 3);
        // One bond fewer than beads, per chain.
        assert_eq!(
            topology.chain_id_by_bond.len(),
            topology.chain_id_by_particle.len() - topology.num_chains as usize
        );
    }

    #[test]
    fn chain_record_without_separator_is_rejected() {
        let text = format!("{CHAIN_HEADER}42\n");
        let err = parse_chain_descriptors(&text).unwrap_err();
        assert!(matches!(err, TicgError::Format(_)));
    }

    #[test]
    fn chain_record_with_nonnumeric_count_is_rejected() {
        let text = format!("{CHAIN_HEADER}abc|10|x\n");
        let err = parse_chain_descriptors(&text).unwrap_err();
        assert!(matches!(err, TicgError::Format(_)));
    }

    #[test]
    fn header_lines_are_never_parsed_as_records() {
        // Header lines need not carry separators at all.
        let text = "PSF style header\nsecond\nthird\nfourth\n1|4|chain\n";
        let topology = parse_chain_descriptors(text).unwrap();
        assert_eq!(topology.chain_id_by_particle, vec![0, 0, 0, 0]);
    }

    /// Builds a minimal structure file: `header` filler lines, `natoms` atom
    /// records, the given bond lines, then the angle section.
    fn structure_text(natoms: usize, bond_lines: &[&str]) -> String {
        let mut text = String::new();
        for i in 0..STRUCTURE_HEADER_LINES {
            text.push_str(&format!("header {i}\n"));
        }
        for i in 0..natoms {
            text.push_str(&format!("{:8} MAIN 1 CHN A A 0.0 1.0 0\n", i + 1));
        }
        for line in bond_lines {
            text.push_str(line);
            text.push('\n');
        }
        text.push_str("       0 !NTHETA: angles\n");
        text
    }

    #[test]
    fn bonds_reshape_and_convert_to_zero_based() {
        let text = structure_text(4, &["       1       2       2       3       3       4"]);
        let bonds = extract_bonds(&text, 4).unwrap();
        assert_eq!(
            bonds,
            vec![
                BondPair { idx1: 0, idx2: 1 },
                BondPair { idx1: 1, idx2: 2 },
                BondPair { idx1: 2, idx2: 3 },
            ]
        );
    }

    #[test]
    fn dangling_field_is_discarded_as_padding() {
        let text = structure_text(3, &["1 2 2 3 3"]);
        let bonds = extract_bonds(&text, 3).unwrap();
        assert_eq!(bonds.len(), 2);
    }

    #[test]
    fn missing_angle_marker_is_a_format_error() {
        let mut text = structure_text(2, &["1 2"]);
        text = text.replace("!NTHETA", "!NOTHING");
        let err = extract_bonds(&text, 2).unwrap_err();
        assert!(matches!(err, TicgError::Format(_)));
    }

    #[test]
    fn zero_index_is_rejected() {
        let text = structure_text(2, &["0 1"]);
        let err = extract_bonds(&text, 2).unwrap_err();
        assert!(matches!(err, TicgError::Format(_)));
    }

    #[test]
    fn short_file_is_a_format_error() {
        let err = extract_bonds("just\nthree\nlines\n", 100).unwrap_err();
        assert!(matches!(err, TicgError::Format(_)));
    }
}
