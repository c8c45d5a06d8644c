use bioinfo_core::{read_dna_file, AdjacencyList, Config, DirectedEdge};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_fasta(lines: &[&str]) -> NamedTempFile {
    let mut f = NamedTempFile::new().expect("create temp fasta");
    for l in lines { writeln!(f, "{}", l).unwrap(); }
    f
}

#[test]
fn overlap_graph_from_file() {
    let fasta = write_fasta(&[
        ">Rosalind_0498",
        "AAATAAA",
        ">Rosalind_2391",
        "AAATTTT",
        ">Rosalind_2323",
        "TTTTCCC",
        ">Rosalind_0442",
        "AAATCCC",
        ">Rosalind_5013",
        "GGGTGGG",
    ]);

    let sequences = read_dna_file(fasta.path()).expect("read fasta");
    assert_eq!(sequences.len(), 5);

    let k = Config::default().graph.overlap_length;
    let graph = AdjacencyList::build(&sequences, k);

    assert_eq!(
        graph.edges(),
        &[
            DirectedEdge::new("Rosalind_0498", "Rosalind_2391"),
            DirectedEdge::new("Rosalind_0498", "Rosalind_0442"),
            DirectedEdge::new("Rosalind_2391", "Rosalind_2323"),
        ]
    );
    assert_eq!(
        graph.to_string(),
        "Rosalind_0498 Rosalind_2391\nRosalind_0498 Rosalind_0442\nRosalind_2391 Rosalind_2323"
    );
}

#[test]
fn overlap_length_changes_edges() {
    let fasta = write_fasta(&[
        ">a", "ccccGATTACA",
        ">b", "TACAggg",
        ">c", "ACAttt",
    ]);
    let sequences = read_dna_file(fasta.path()).expect("read fasta");

    // residues are upper-cased before suffixes and prefixes are compared
    let k3: Vec<_> = AdjacencyList::build(&sequences, 3).into_edges();
    assert_eq!(k3, vec![DirectedEdge::new("a", "c")]);

    let k4: Vec<_> = AdjacencyList::build(&sequences, 4).into_edges();
    assert_eq!(k4, vec![DirectedEdge::new("a", "b")]);

    // "c" has length 6, so it no longer qualifies at k = 6
    assert!(AdjacencyList::build(&sequences, 6).is_empty());
}
