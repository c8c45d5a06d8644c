//! FASTA sequence file reader
//!
//! Parsing is delegated to needletail. Each record's full header line
//! becomes the sequence header and its body lines are concatenated. Files
//! ending in `.gz` are decompressed on the fly.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;
use needletail::parse_fastx_reader;

use crate::error::{BioError, BioResult};
use crate::sequence::{BioSequence, DnaSequence};

/// Reader that turns FASTA records into sequence values
pub struct FastaReader;

impl FastaReader {
    /// Read every record in the file at `path`
    pub fn read_file<S, P>(path: P) -> BioResult<Vec<S>>
    where
        S: BioSequence,
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| BioError::file_open(path, e))?;

        let sequences = if path.to_string_lossy().ends_with(".gz") {
            Self::parse_reader(GzDecoder::new(file))?
        } else {
            Self::parse_reader(file)?
        };

        log::info!("Read {} sequences from {}", sequences.len(), path.display());
        Ok(sequences)
    }

    /// Parse FASTA data from any readable source. Empty or blank input yields no records.
    pub fn parse_reader<S, R>(reader: R) -> BioResult<Vec<S>>
    where
        S: BioSequence,
        R: Read + Send,
    {
        let mut buffered = BufReader::new(reader);

        // needletail expects '>' as the very first byte
        loop {
            let buf = buffered.fill_buf()?;
            if buf.is_empty() {
                return Ok(Vec::new());
            }
            let blank = buf.iter().take_while(|&&b| b == b'\r' || b == b'\n').count();
            if blank == 0 {
                break;
            }
            buffered.consume(blank);
        }

        let mut fastx_reader =
            parse_fastx_reader(buffered).map_err(|e| BioError::Parse(e.to_string()))?;

        let mut sequences = Vec::new();
        while let Some(record) = fastx_reader.next() {
            let record = record.map_err(|e| BioError::Parse(e.to_string()))?;
            let header = String::from_utf8_lossy(record.id());
            let body = record.seq();
            let residues = String::from_utf8_lossy(&body);

            sequences.push(S::from_parts(
                header.trim_end_matches(['\r', '\n']),
                residues.trim_end_matches(['\r', '\n']),
            ));
        }

        Ok(sequences)
    }

    /// Parse FASTA text held in memory
    pub fn parse_str<S: BioSequence>(text: &str) -> BioResult<Vec<S>> {
        Self::parse_reader(text.as_bytes())
    }
}

/// Read a FASTA file of DNA records
pub fn read_dna_file<P: AsRef<Path>>(path: P) -> BioResult<Vec<DnaSequence>> {
    FastaReader::read_file(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::{AminoAcidSequence, RnaSequence};
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_fasta_reader() {
        let fasta_data = ">seq1 description of sequence 1\n\
                          ATCGATCGATCG\n\
                          >seq2\n\
                          gctagctagcta\n";

        let sequences: Vec<DnaSequence> = FastaReader::parse_reader(Cursor::new(fasta_data)).unwrap();

        assert_eq!(sequences.len(), 2);
        assert_eq!(sequences[0].header(), "seq1 description of sequence 1");
        assert_eq!(sequences[0].residues(), "ATCGATCGATCG");
        assert_eq!(sequences[0].len(), 12);

        assert_eq!(sequences[1].header(), "seq2");
        assert_eq!(sequences[1].residues(), "GCTAGCTAGCTA");
    }

    #[test]
    fn test_multiline_fasta() {
        let fasta_data = ">seq1\n\
                          ATCGATCG\n\
                          ATCGATCG\n\
                          GCTAGCTA\n";

        let sequences: Vec<DnaSequence> = FastaReader::parse_str(fasta_data).unwrap();

        assert_eq!(sequences.len(), 1);
        assert_eq!(sequences[0].residues(), "ATCGATCGATCGATCGGCTAGCTA");
        assert_eq!(sequences[0].len(), 24);
    }

    #[test]
    fn test_windows_line_endings() {
        let fasta_data = ">Rosalind_6404\r\nCCTGCGGAAG\r\nTTCTCTTTGG\r\n";
        let sequences: Vec<DnaSequence> = FastaReader::parse_str(fasta_data).unwrap();

        assert_eq!(sequences[0].header(), "Rosalind_6404");
        assert_eq!(sequences[0].residues(), "CCTGCGGAAGTTCTCTTTGG");
    }

    #[test]
    fn test_records_become_requested_type() {
        let fasta_data = ">r\nGATTACA\n";
        let rna: Vec<RnaSequence> = FastaReader::parse_str(fasta_data).unwrap();
        assert_eq!(rna[0].residues(), "GAUUACA");

        let protein: Vec<AminoAcidSequence> = FastaReader::parse_str(">p\nmkv\n").unwrap();
        assert_eq!(protein[0].residues(), "MKV");
    }

    #[test]
    fn test_empty_input() {
        let sequences: Vec<DnaSequence> = FastaReader::parse_str("").unwrap();
        assert!(sequences.is_empty());
    }

    #[test]
    fn test_leading_blank_lines() {
        let sequences: Vec<DnaSequence> = FastaReader::parse_str("\n>a\nACGT\n").unwrap();
        assert_eq!(sequences.len(), 1);
        assert_eq!(sequences[0].header(), "a");
        assert_eq!(sequences[0].residues(), "ACGT");

        let sequences: Vec<DnaSequence> = FastaReader::parse_str("\r\n\r\n>b\r\nTT\r\n").unwrap();
        assert_eq!(sequences[0].header(), "b");
        assert_eq!(sequences[0].residues(), "TT");
    }

    #[test]
    fn test_blank_only_input() {
        let sequences: Vec<DnaSequence> = FastaReader::parse_str("\n\n").unwrap();
        assert!(sequences.is_empty());

        let mut file = NamedTempFile::new().unwrap();
        writeln!(file).unwrap();
        writeln!(file).unwrap();
        assert!(read_dna_file(file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_read_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, ">a").unwrap();
        writeln!(file, "ACGT").unwrap();
        writeln!(file, ">b").unwrap();
        writeln!(file, "TTTT").unwrap();

        let sequences = read_dna_file(file.path()).unwrap();
        assert_eq!(sequences.len(), 2);
        assert_eq!(sequences[1].header(), "b");
    }

    #[test]
    fn test_read_gzipped_file() {
        let file = tempfile::Builder::new().suffix(".fasta.gz").tempfile().unwrap();
        let mut encoder = GzEncoder::new(file.reopen().unwrap(), Compression::default());
        encoder.write_all(b">gz\nacgtacgt\n").unwrap();
        encoder.finish().unwrap();

        let sequences = read_dna_file(file.path()).unwrap();
        assert_eq!(sequences.len(), 1);
        assert_eq!(sequences[0].header(), "gz");
        assert_eq!(sequences[0].residues(), "ACGTACGT");
    }

    #[test]
    fn test_missing_file() {
        let result = read_dna_file("/nonexistent/path/to/reads.fasta");
        assert!(matches!(result, Err(BioError::FileOpen { .. })));
    }

    #[test]
    fn test_malformed_input() {
        let result: BioResult<Vec<DnaSequence>> = FastaReader::parse_str("ACGT\n>late\nAC\n");
        assert!(matches!(result, Err(BioError::Parse(_))));
    }
}
