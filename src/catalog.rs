//! # Particle Type Catalog
//!
//! A fixed table describing the particle types this simulator emits, used by
//! hosts to pick display names, radii, and colors. The table is a static
//! configuration constructed at compile time and immutable thereafter.

/// Display properties of one particle type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleType {
    /// Human-readable type name
    pub name: &'static str,

    /// Suggested render radius, in trajectory coordinate units
    pub radius: f64,

    /// Suggested RGB color, each channel in `0.0..=1.0`
    pub color: (f64, f64, f64),
}

/// Type code of developer beads.
///
/// A convention of this particular simulator, not a general rule: the type
/// catalog reserves code 3 for the developer species.
pub const DEVELOPER_TYPE_ID: u8 = 3;

/// The particle types of the TICG coarse-grained model, indexed by type code
pub const PARTICLE_TYPES: [ParticleType; 4] = [
    ParticleType {
        name: "A bead",
        radius: 0.5,
        color: (0.8, 0.2, 0.2),
    },
    ParticleType {
        name: "B bead",
        radius: 0.5,
        color: (0.2, 0.2, 0.8),
    },
    ParticleType {
        name: "solvent",
        radius: 0.35,
        color: (0.6, 0.6, 0.6),
    },
    ParticleType {
        name: "developer",
        radius: 0.35,
        color: (0.2, 0.8, 0.2),
    },
];

/// Looks up a particle type by its code
///
/// Returns `None` for codes outside the catalog.
pub fn particle_type(type_id: u8) -> Option<&'static ParticleType> {
    PARTICLE_TYPES.get(type_id as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn developer_code_maps_to_the_developer_entry() {
        let entry = particle_type(DEVELOPER_TYPE_ID).unwrap();
        assert_eq!(entry.name, "developer");
    }

    #[test]
    fn unknown_codes_are_none() {
        assert!(particle_type(200).is_none());
    }
}
