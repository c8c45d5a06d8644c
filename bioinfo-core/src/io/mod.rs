//! Sequence I/O for bioinfo
//!
//! FASTA files on disk (optionally gzipped) and, with the `remote` feature,
//! protein records retrieved from UniProt.

pub mod fasta;
#[cfg(feature = "remote")] pub mod remote;

pub use fasta::{read_dna_file, FastaReader};
#[cfg(feature = "remote")] pub use remote::{accession_from_identifier, UniProtClient};
