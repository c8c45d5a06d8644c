//! Static lookup tables
//!
//! The genetic code, monoisotopic residue masses and synonymous codon counts.
//! The standard instances are built once on first use and shared read-only
//! for the rest of the process. A missing key is an ordinary lookup miss:
//! callers pick the fallback (`X` for codons, skip for masses and counts).

use std::collections::HashMap;
use std::sync::OnceLock;

/// Amino acid letter emitted for codons missing from a table
pub const UNKNOWN_RESIDUE: u8 = b'X';

/// Amino acid letter for a stop codon
pub const STOP_RESIDUE: u8 = b'*';

const STANDARD_BASES: &[u8; 4] = b"UCAG";
const STANDARD_AMINO_ACIDS: &[u8; 64] =
    b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";

const MONOISOTOPIC_MASSES: [(u8, f64); 20] = [
    (b'A', 71.03711),  (b'C', 103.00919), (b'D', 115.02694), (b'E', 129.04259),
    (b'F', 147.06841), (b'G', 57.02146),  (b'H', 137.05891), (b'I', 113.08406),
    (b'K', 128.09496), (b'L', 113.08406), (b'M', 131.04049), (b'N', 114.04293),
    (b'P', 97.05276),  (b'Q', 128.05858), (b'R', 156.10111), (b'S', 87.03203),
    (b'T', 101.04768), (b'V', 99.06841),  (b'W', 186.07931), (b'Y', 163.06333),
];

/// Mapping from RNA codons to one-letter amino acids
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodonTable {
    name: String,
    entries: HashMap<[u8; 3], u8>,
}

impl CodonTable {
    /// The standard genetic code (NCBI table 1)
    pub fn standard() -> &'static CodonTable {
        static STANDARD: OnceLock<CodonTable> = OnceLock::new();
        STANDARD.get_or_init(|| {
            let mut entries = Vec::with_capacity(64);
            for (i, &first) in STANDARD_BASES.iter().enumerate() {
                for (j, &second) in STANDARD_BASES.iter().enumerate() {
                    for (k, &third) in STANDARD_BASES.iter().enumerate() {
                        let amino_acid = STANDARD_AMINO_ACIDS[16 * i + 4 * j + k];
                        entries.push(([first, second, third], amino_acid));
                    }
                }
            }
            CodonTable::from_entries("standard", entries)
        })
    }

    /// Build a custom table. Codons and residues are stored upper-cased.
    pub fn from_entries<S, I>(name: S, entries: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = ([u8; 3], u8)>,
    {
        let entries = entries
            .into_iter()
            .map(|(codon, aa)| (codon.map(|b| b.to_ascii_uppercase()), aa.to_ascii_uppercase()))
            .collect();

        Self {
            name: name.into(),
            entries,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a codon, case-insensitively
    pub fn get(&self, codon: &[u8]) -> Option<u8> {
        let key: [u8; 3] = codon.try_into().ok()?;
        self.entries.get(&key.map(|b| b.to_ascii_uppercase())).copied()
    }

    /// Translate a codon, substituting `X` for anything the table lacks
    pub fn translate_codon(&self, codon: &[u8]) -> u8 {
        self.get(codon).unwrap_or(UNKNOWN_RESIDUE)
    }

    /// Iterate over `(codon, amino acid)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&[u8; 3], u8)> + '_ {
        self.entries.iter().map(|(codon, &aa)| (codon, aa))
    }
}

/// Mapping from amino acids to residue masses in daltons
#[derive(Debug, Clone, PartialEq)]
pub struct MassTable {
    masses: HashMap<u8, f64>,
}

impl MassTable {
    /// Monoisotopic residue masses for the 20 standard amino acids
    pub fn monoisotopic() -> &'static MassTable {
        static MONOISOTOPIC: OnceLock<MassTable> = OnceLock::new();
        MONOISOTOPIC.get_or_init(|| MassTable::from_entries(MONOISOTOPIC_MASSES))
    }

    pub fn from_entries<I: IntoIterator<Item = (u8, f64)>>(entries: I) -> Self {
        Self {
            masses: entries
                .into_iter()
                .map(|(aa, mass)| (aa.to_ascii_uppercase(), mass))
                .collect(),
        }
    }

    pub fn get(&self, residue: u8) -> Option<f64> {
        self.masses.get(&residue.to_ascii_uppercase()).copied()
    }

    pub fn mass_or_zero(&self, residue: u8) -> f64 {
        self.get(residue).unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.masses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masses.is_empty()
    }
}

/// Number of codons that encode each amino acid (and stop)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynonymTable {
    counts: HashMap<u8, u64>,
}

impl SynonymTable {
    /// Synonym counts under the standard genetic code
    pub fn standard() -> &'static SynonymTable {
        static STANDARD: OnceLock<SynonymTable> = OnceLock::new();
        STANDARD.get_or_init(|| SynonymTable::from_codon_table(CodonTable::standard()))
    }

    /// Tally how many codons of `code` translate to each residue
    pub fn from_codon_table(code: &CodonTable) -> Self {
        let mut counts = HashMap::new();
        for (_, aa) in code.iter() {
            *counts.entry(aa).or_insert(0) += 1;
        }
        Self { counts }
    }

    pub fn get(&self, residue: u8) -> Option<u64> {
        self.counts.get(&residue.to_ascii_uppercase()).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
