//! Analysis operations over one or two sequences
//!
//! Motif search, Hamming distance, protein mass, the number of RNA strings
//! a protein could be translated from, and intron removal.

use crate::error::{BioError, BioResult};
use crate::sequence::{AminoAcidSequence, BioSequence, RnaSequence};
use crate::tables::{MassTable, SynonymTable};

/// Find every start position of `motif` in `haystack`.
///
/// With `overlap` the scan resumes one residue after each match start, so
/// overlapping occurrences are reported; without it the scan skips past the
/// whole match.
pub fn find_motif<S: BioSequence>(haystack: &S, motif: &S, overlap: bool) -> BioResult<Vec<usize>> {
    let text = haystack.as_bytes();
    let pattern = motif.as_bytes();

    if pattern.is_empty() {
        return Err(BioError::EmptyMotif);
    }
    if pattern.len() > text.len() {
        return Err(BioError::MotifTooLong {
            motif: pattern.len(),
            haystack: text.len(),
        });
    }

    let step = if overlap { 1 } else { pattern.len() };
    let mut positions = Vec::new();
    let mut pos = 0;

    while pos + pattern.len() <= text.len() {
        match text[pos..].windows(pattern.len()).position(|window| window == pattern) {
            Some(offset) => {
                let start = pos + offset;
                positions.push(start);
                pos = start + step;
            }
            None => break,
        }
    }

    Ok(positions)
}

/// Number of positions at which two equal-length sequences differ
pub fn hamming_distance<S: BioSequence>(s: &S, t: &S) -> BioResult<usize> {
    if s.len() != t.len() {
        return Err(BioError::LengthMismatch {
            left: s.len(),
            right: t.len(),
        });
    }

    Ok(s.as_bytes()
        .iter()
        .zip(t.as_bytes())
        .filter(|(a, b)| a != b)
        .count())
}

/// Total mass of a protein in daltons. Residues without a mass are skipped.
pub fn protein_mass(protein: &AminoAcidSequence, masses: &MassTable) -> f64 {
    protein
        .as_bytes()
        .iter()
        .filter_map(|&residue| masses.get(residue))
        .sum()
}

/// Number of RNA strings that could translate to `protein`, modulo `modulus`.
///
/// The first residue is not counted and no stop codon factor is added unless
/// the protein itself contains `*`. When the running product is zero it is
/// replaced by the next synonym count instead of being multiplied.
pub fn inferred_rna_count(
    protein: &AminoAcidSequence,
    synonyms: &SynonymTable,
    modulus: u64,
) -> BioResult<u64> {
    if modulus == 0 {
        return Err(BioError::invalid_input("modulus must be positive"));
    }

    let mut count: u64 = 0;
    for &residue in protein.as_bytes().iter().skip(1) {
        let Some(synonym_count) = synonyms.get(residue) else {
            continue;
        };

        count = if count == 0 {
            synonym_count
        } else {
            ((count as u128 * synonym_count as u128) % modulus as u128) as u64
        };
    }

    Ok(count)
}

/// Remove introns from a precursor mRNA.
///
/// Introns are applied in order and each removes only its first occurrence
/// in the current working sequence. Introns that do not occur are ignored.
pub fn splice_rna(precursor: &RnaSequence, introns: &[RnaSequence]) -> RnaSequence {
    let mut working = precursor.residues().to_string();

    for intron in introns {
        let motif = intron.residues();
        match working.find(motif) {
            Some(start) => working.replace_range(start..start + motif.len(), ""),
            None => log::debug!(
                "Intron '{}' not found in '{}', skipping",
                intron.header(),
                precursor.header()
            ),
        }
    }

    RnaSequence::new(precursor.header(), &working)
}
