//! DNA, RNA and amino acid sequence types
//!
//! Each type pairs a free-form header with residues that are normalized on
//! the way in: upper-cased for DNA and proteins, upper-cased and transcribed
//! for RNA. Conversions between the types are explicit (`from_dna`,
//! `from_rna`) and always copy.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::tables::CodonTable;

/// Capabilities shared by every sequence type
pub trait BioSequence: Sized {
    /// Build a sequence from a header and raw text, applying the type's normalization
    fn from_parts<H: Into<String>>(header: H, raw: &str) -> Self;

    fn header(&self) -> &str;

    fn residues(&self) -> &str;

    fn set_header<H: Into<String>>(&mut self, header: H);

    fn as_bytes(&self) -> &[u8] {
        self.residues().as_bytes()
    }

    /// Number of residues
    fn len(&self) -> usize {
        self.residues().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A DNA sequence over A, C, G, T (other symbols are kept as-is)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DnaSequence {
    header: String,
    residues: String,
}

impl DnaSequence {
    pub fn new<H: Into<String>>(header: H, raw: &str) -> Self {
        Self {
            header: header.into(),
            residues: to_upper(raw),
        }
    }

    pub fn set_sequence(&mut self, raw: &str) {
        self.residues = to_upper(raw);
    }

    pub fn reverse_complement(&self) -> DnaSequence {
        reverse_complement(self)
    }
}

/// An RNA sequence over A, C, G, U
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RnaSequence {
    header: String,
    residues: String,
}

impl RnaSequence {
    /// Build from DNA or RNA text; thymine is transcribed to uracil
    pub fn new<H: Into<String>>(header: H, raw: &str) -> Self {
        Self {
            header: header.into(),
            residues: transcribe(raw),
        }
    }

    pub fn from_dna(dna: &DnaSequence) -> Self {
        Self::new(dna.header(), dna.residues())
    }

    pub fn set_sequence(&mut self, raw: &str) {
        self.residues = transcribe(raw);
    }
}

/// A protein sequence of one-letter amino acids, `*` for stop and `X` for unknown
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AminoAcidSequence {
    header: String,
    residues: String,
}

impl AminoAcidSequence {
    /// Build from protein text. No translation is applied.
    pub fn new<H: Into<String>>(header: H, raw: &str) -> Self {
        Self {
            header: header.into(),
            residues: to_upper(raw),
        }
    }

    pub fn from_rna(rna: &RnaSequence, code: &CodonTable) -> Self {
        Self {
            header: rna.header().to_string(),
            residues: translate(rna.residues(), code),
        }
    }

    pub fn from_dna(dna: &DnaSequence, code: &CodonTable) -> Self {
        Self {
            header: dna.header().to_string(),
            residues: translate(&transcribe(dna.residues()), code),
        }
    }

    pub fn set_sequence(&mut self, raw: &str) {
        self.residues = to_upper(raw);
    }

    /// Replace the residues with the translation of DNA or RNA text
    pub fn set_from_nucleotides(&mut self, raw: &str, code: &CodonTable) {
        self.residues = translate(&transcribe(raw), code);
    }
}

impl BioSequence for DnaSequence {
    fn from_parts<H: Into<String>>(header: H, raw: &str) -> Self {
        Self::new(header, raw)
    }

    fn header(&self) -> &str {
        &self.header
    }

    fn residues(&self) -> &str {
        &self.residues
    }

    fn set_header<H: Into<String>>(&mut self, header: H) {
        self.header = header.into();
    }
}

impl BioSequence for RnaSequence {
    fn from_parts<H: Into<String>>(header: H, raw: &str) -> Self {
        Self::new(header, raw)
    }

    fn header(&self) -> &str {
        &self.header
    }

    fn residues(&self) -> &str {
        &self.residues
    }

    fn set_header<H: Into<String>>(&mut self, header: H) {
        self.header = header.into();
    }
}

impl BioSequence for AminoAcidSequence {
    fn from_parts<H: Into<String>>(header: H, raw: &str) -> Self {
        Self::new(header, raw)
    }

    fn header(&self) -> &str {
        &self.header
    }

    fn residues(&self) -> &str {
        &self.residues
    }

    fn set_header<H: Into<String>>(&mut self, header: H) {
        self.header = header.into();
    }
}

// FASTA rendering
impl fmt::Display for DnaSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ">{}\n{}", self.header, self.residues)
    }
}

impl fmt::Display for RnaSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ">{}\n{}", self.header, self.residues)
    }
}

impl fmt::Display for AminoAcidSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ">{}\n{}", self.header, self.residues)
    }
}

/// Upper-case ASCII letters, leaving everything else untouched
pub fn to_upper(text: &str) -> String {
    text.to_ascii_uppercase()
}

/// Transcribe DNA text to RNA (upper-case, T to U)
pub fn transcribe(text: &str) -> String {
    text.chars()
        .map(|c| match c.to_ascii_uppercase() {
            'T' => 'U',
            other => other,
        })
        .collect()
}

/// Translate RNA text codon by codon.
///
/// Stop codons are emitted as `*` and translation carries on past them.
/// Codons missing from `code` become `X`; a trailing partial codon is dropped.
pub fn translate(rna: &str, code: &CodonTable) -> String {
    rna.as_bytes()
        .chunks_exact(3)
        .map(|codon| code.translate_codon(codon) as char)
        .collect()
}

/// Complement of a single DNA base; anything outside ACGT becomes `N`
pub fn complement_base(base: u8) -> u8 {
    match base.to_ascii_uppercase() {
        b'A' => b'T',
        b'T' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        _ => b'N',
    }
}

/// Reverse complement of a DNA sequence, keeping its header
pub fn reverse_complement(dna: &DnaSequence) -> DnaSequence {
    let residues = dna
        .as_bytes()
        .iter()
        .rev()
        .map(|&base| complement_base(base) as char)
        .collect();

    DnaSequence {
        header: dna.header.clone(),
        residues,
    }
}
