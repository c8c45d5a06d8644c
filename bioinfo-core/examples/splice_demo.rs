//! bioinfo splicing demo
//!
//! Removes two introns from a pre-mRNA, translates the mature mRNA and
//! prints a few other analyses of the result.

use bioinfo_core::{
    find_motif, inferred_rna_count, protein_mass, splice_rna, AminoAcidSequence, BioSequence,
    CodonTable, Config, MassTable, RnaSequence, SynonymTable,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = Config::load(None)?;

    let precursor = RnaSequence::new(
        "Rosalind_10",
        "ATGGTCTACATAGCTGACAAACAGCACGTAGCAATCGGTCGAATCTCGAGAGGCATATGGTCACATGATCGGTCGAGCGTGTTTCAAAGTTTGCGCCTAG",
    );
    let introns = vec![
        RnaSequence::new("Rosalind_12", "ATCGGTCGAA"),
        RnaSequence::new("Rosalind_15", "ATCGGTCGAGCGTGT"),
    ];

    for intron in &introns {
        let hits = find_motif(&precursor, intron, config.analysis.motif_overlap)?;
        println!("{} at {:?}", intron.header(), hits);
    }

    let mrna = splice_rna(&precursor, &introns);
    let protein = AminoAcidSequence::from_rna(&mrna, CodonTable::standard());

    println!("pre-mRNA: {}", precursor.residues());
    println!("mRNA:     {}", mrna.residues());
    println!("Protein:  {}", protein.residues());
    println!("Mass:     {:.3}", protein_mass(&protein, MassTable::monoisotopic()));
    println!(
        "Sources:  {} (mod {})",
        inferred_rna_count(&protein, SynonymTable::standard(), config.analysis.rna_count_modulus)?,
        config.analysis.rna_count_modulus
    );

    Ok(())
}
