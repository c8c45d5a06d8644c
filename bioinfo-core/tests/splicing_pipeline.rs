use bioinfo_core::{
    splice_rna, AminoAcidSequence, BioSequence, CodonTable, FastaReader, RnaSequence,
};
use std::io::Write;
use tempfile::NamedTempFile;

const PRE_MRNA: &str = "ATGGTCTACATAGCTGACAAACAGCACGTAGCAATCGGTCGAATCTCGAGAGGCATATGGTCACATGATCGGTCGAGCGTGTTTCAAAGTTTGCGCCTAG";

#[test]
fn splice_and_translate_from_fasta() {
    let mut f = NamedTempFile::new().expect("create temp fasta");
    writeln!(f, ">Rosalind_10").unwrap();
    writeln!(f, "{}", &PRE_MRNA[..50]).unwrap();
    writeln!(f, "{}", &PRE_MRNA[50..]).unwrap();
    writeln!(f, ">Rosalind_12").unwrap();
    writeln!(f, "ATCGGTCGAA").unwrap();
    writeln!(f, ">Rosalind_15").unwrap();
    writeln!(f, "ATCGGTCGAGCGTGT").unwrap();

    let records: Vec<RnaSequence> = FastaReader::read_file(f.path()).expect("read fasta");
    let (precursor, introns) = records.split_first().expect("precursor record");
    assert_eq!(precursor.len(), PRE_MRNA.len());

    let mature = splice_rna(precursor, introns);
    assert_eq!(mature.header(), "Rosalind_10");
    assert_eq!(mature.len(), PRE_MRNA.len() - 10 - 15);

    let protein = AminoAcidSequence::from_rna(&mature, CodonTable::standard());
    assert_eq!(protein.header(), "Rosalind_10");
    assert_eq!(protein.residues(), "MVYIADKQHVASREAYGHMFKVCA*");
    assert_eq!(protein.residues().trim_end_matches('*'), "MVYIADKQHVASREAYGHMFKVCA");
}

#[test]
fn splicing_with_no_introns_is_identity() {
    let precursor = RnaSequence::new("pre", PRE_MRNA);
    let mature = splice_rna(&precursor, &[]);
    assert_eq!(mature, precursor);
}
