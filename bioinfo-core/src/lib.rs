//! bioinfo Core Library
//!
//! Sequence types, lookup tables, analysis operations, overlap graphs and
//! genetics calculators for bioinformatics problem solving.

pub mod error;
pub mod tables;
pub mod sequence;
pub mod analysis;
pub mod graph;
pub mod genetics;
pub mod combinatorics;
pub mod config;
pub mod io;

// Re-export commonly used types and functions
pub use error::{BioError, BioResult};
pub use tables::{CodonTable, MassTable, SynonymTable};
pub use sequence::{AminoAcidSequence, BioSequence, DnaSequence, RnaSequence};
pub use analysis::{find_motif, hamming_distance, inferred_rna_count, protein_mass, splice_rna};
pub use graph::{AdjacencyList, DirectedEdge};
pub use config::Config;
pub use io::{read_dna_file, FastaReader};

/// Version information for the bioinfo core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
