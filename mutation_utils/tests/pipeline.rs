// End-to-end runs of the three table pipelines through the library API

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use mutation_utils::MutationError;
use mutation_utils::lib_utils::compare::{read_first_column, ComparisonColumns, Partition};
use mutation_utils::lib_utils::frequency::common_mutations;
use mutation_utils::lib_utils::records::{load_samples_in_range, DateRange};
use mutation_utils::lib_utils::substitution::{Derived, SubstitutionSpectrum, OTHER_LABEL};

const BOM: &str = "\u{feff}";

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

const METADATA: &str = "Virus name\tAccession ID\tCollection date\n\
hCoV-19/A\tEPI_ISL_1\t2021-01-05\n\
hCoV-19/B\tEPI_ISL_2\t2021-01-20\n\
hCoV-19/C\tEPI_ISL_3\t2021-02-10\n\
hCoV-19/D\tEPI_ISL_4\t\n\
hCoV-19/E\tEPI_ISL_5\t2021-01-31\n";

const NEXTCLADE_TSV: &str = "seqName\tclade\tsubstitutions\taaSubstitutions\n\
hCoV-19/A|EPI_ISL_1|2021-01-05\t20A\tC241T,A23403G,C241T\tS:D614G,ORF1b:P314L\n\
hCoV-19/B|EPI_ISL_2|2021-01-20\t20A\tC241T,A23403G\tS:D614G\n\
hCoV-19/C|EPI_ISL_3|2021-02-10\t20B\tC241T,G28881A\tS:D614G,N:R203K\n\
hCoV-19/D|EPI_ISL_4|2021-01-10\t20A\tC241T\t\n\
hCoV-19/E|EPI_ISL_5|2021-01-31\t20A\tC241T,C3037T\tORF1a:T3255I\n\
no-accession\t20A\tC241T\tS:D614G\n";

#[test]
fn frequency_pipeline_joins_filters_and_counts() {
    let dir = TempDir::new().unwrap();
    let meta = write(&dir, "metadata.tsv", METADATA);
    let nextclade = write(&dir, "nextclade.tsv", NEXTCLADE_TSV);
    let range = DateRange::new("2021-01-01", "2021-01-31");

    let records = load_samples_in_range(&nextclade, &meta, &range).unwrap();
    let accessions: Vec<&str> = records.iter().map(|r| r.accession.as_str()).collect();
    assert_eq!(accessions, vec!["EPI_ISL_1", "EPI_ISL_2", "EPI_ISL_5"]);

    let nucl = common_mutations(records.iter().map(|r| r.nucleotide_mutations()), 0.6);
    assert_eq!(nucl.sample_count, 3);
    let rows: Vec<(&str, usize)> = nucl.entries.iter().map(|e| (e.mutation.as_str(), e.count)).collect();
    assert_eq!(rows, vec![("C241T", 3), ("A23403G", 2)]);

    let spike = common_mutations(records.iter().map(|r| r.spike_mutations()), 0.6);
    assert_eq!(spike.entries.len(), 1);
    assert_eq!(spike.entries[0].mutation, "D614G");

    let out = dir.path().join("common_nucl.csv");
    nucl.write_csv(&out, "Nucl_mut").unwrap();
    assert_eq!(
        read(&out),
        format!("{}Nucl_mut,count,freq\nC241T,3,1.0\nA23403G,2,0.6666666666666666\n", BOM)
    );
}

#[test]
fn csv_variant_table_with_accession_column() {
    let dir = TempDir::new().unwrap();
    let meta = write(&dir, "metadata.tsv", METADATA);
    let nextclade = write(
        &dir,
        "nextclade.csv",
        "Accession ID,substitutions,aaSubstitutions\n\
         EPI_ISL_1,\"C241T,A23403G\",\"S:D614G\"\n\
         EPI_ISL_3,C241T,\n",
    );
    let records = load_samples_in_range(&nextclade, &meta, &DateRange::new("2021-01-01", "2021-12-31")).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].nucleotide_mutations(), vec!["C241T", "A23403G"]);
    assert!(records[1].spike_mutations().is_empty());
}

#[test]
fn empty_range_gives_empty_tables() {
    let dir = TempDir::new().unwrap();
    let meta = write(&dir, "metadata.tsv", METADATA);
    let nextclade = write(&dir, "nextclade.tsv", NEXTCLADE_TSV);
    let records = load_samples_in_range(&nextclade, &meta, &DateRange::new("2022-01-01", "2022-12-31")).unwrap();
    assert!(records.is_empty());

    let table = common_mutations(records.iter().map(|r| r.nucleotide_mutations()), 0.6);
    assert!(!table.has_samples());
    let out = dir.path().join("empty.csv");
    table.write_csv(&out, "Nucl_mut").unwrap();
    assert_eq!(read(&out), format!("{}Nucl_mut,count,freq\n", BOM));
}

#[test]
fn missing_columns_are_reported_by_name() {
    let dir = TempDir::new().unwrap();
    let meta = write(&dir, "metadata.tsv", "Accession ID\tdate\nEPI_ISL_1\t2021-01-01\n");
    let nextclade = write(&dir, "nextclade.tsv", NEXTCLADE_TSV);
    let range = DateRange::new("2021-01-01", "2021-12-31");
    match load_samples_in_range(&nextclade, &meta, &range) {
        Err(MutationError::MissingColumn { column, .. }) => assert_eq!(column, "Collection date"),
        other => panic!("unexpected result: {:?}", other.map(|r| r.len())),
    }

    let meta = write(&dir, "metadata_ok.tsv", METADATA);
    let nextclade = write(&dir, "nextclade_bad.tsv", "clade\tsubstitutions\taaSubstitutions\n20A\tC241T\t\n");
    assert!(matches!(
        load_samples_in_range(&nextclade, &meta, &range),
        Err(MutationError::MissingAnyColumn { .. })
    ));

    let nextclade = write(&dir, "nextclade_nosubs.tsv", "seqName\taaSubstitutions\nx|EPI_ISL_1|\tS:D614G\n");
    assert!(matches!(
        load_samples_in_range(&nextclade, &meta, &range),
        Err(MutationError::MissingColumn { .. })
    ));

    let empty = write(&dir, "empty.tsv", "");
    assert!(matches!(
        load_samples_in_range(&nextclade, &empty, &range),
        Err(MutationError::EmptyTable { .. })
    ));
}

#[test]
fn comparison_pipeline_feeds_the_spectrum() {
    let dir = TempDir::new().unwrap();
    // inputs as written by the frequency pipeline, BOM included
    let list_a = write(
        &dir,
        "a.csv",
        &format!("{}Nucl_mut,count,freq\nC241T,3,1.0\nG1059C,2,0.6\nA23403G,2,0.6\n", BOM),
    );
    let list_b = write(
        &dir,
        "b.csv",
        "Nucl_mut,count,freq\nC241T,3,1.0\nA23403G,3,1.0\nC193T,2,0.6\nA23403G,1,0.6\n,1,0.6\n",
    );

    let set_a = read_first_column(&list_a).unwrap();
    let set_b = read_first_column(&list_b).unwrap();
    let partition = Partition::new(&set_a, &set_b);
    assert_eq!(partition.only_a, vec!["G1059C"]);
    assert_eq!(partition.both, vec!["C241T", "A23403G"]);
    assert_eq!(partition.only_b, vec!["C193T"]);

    let union: BTreeSet<String> = set_a.union(&set_b).cloned().collect();
    for token in &union {
        let hits = [&partition.only_a, &partition.both, &partition.only_b]
            .iter()
            .filter(|column| column.contains(token))
            .count();
        assert_eq!(hits, 1, "{} must be in exactly one column", token);
    }

    let compare = dir.path().join("compare_A_B.csv");
    partition.write_csv(&compare).unwrap();
    assert_eq!(
        read(&compare),
        format!("{}Only_A,Both,Only_B\nG1059C,C241T,C193T\n,A23403G,\n", BOM)
    );
    // same inputs, same bytes
    let again = dir.path().join("compare_again.csv");
    Partition::new(&read_first_column(&list_a).unwrap(), &read_first_column(&list_b).unwrap())
        .write_csv(&again)
        .unwrap();
    assert_eq!(read(&compare), read(&again));

    let columns = ComparisonColumns::read(&compare).unwrap();
    assert_eq!(columns.only_a, vec!["G1059C"]);
    assert_eq!(columns.only_b, vec!["C193T"]);

    let spectrum = SubstitutionSpectrum::from_comparison(&columns, Derived::B);
    assert_eq!(spectrum.total(), columns.only_a.len() + columns.only_b.len());
    let out = dir.path().join("mutation_spectrum_A_to_B.csv");
    spectrum.write_csv(&out, Derived::B).unwrap();
    let written = read(&out);
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 14);
    assert_eq!(
        lines[0],
        format!("{}Substitution,Count_total(A_to_B),Count_forward(Only_B),Count_reverse(Only_A)", BOM)
    );
    assert_eq!(lines[1], "C>U,1,1,0");
    assert_eq!(lines[8], "C>G,1,0,1");
    assert_eq!(lines[13], format!("{},0,0,0", OTHER_LABEL));
}

#[test]
fn spectrum_falls_back_to_outer_columns() {
    let dir = TempDir::new().unwrap();
    let compare = write(&dir, "renamed.csv", "left,middle,right\nG1059C,C241T,C193T\nins:1:A,,A23403G+\n");
    let columns = ComparisonColumns::read(&compare).unwrap();
    assert_eq!(columns.only_a, vec!["G1059C", "ins:1:A"]);
    assert_eq!(columns.only_b, vec!["C193T", "A23403G+"]);

    let entries = SubstitutionSpectrum::from_comparison(&columns, Derived::B).entries();
    let other = entries.iter().find(|e| e.label == OTHER_LABEL).unwrap();
    assert_eq!((other.forward, other.reverse), (0, 1));
    let a_to_g = entries.iter().find(|e| e.label == "A>G").unwrap();
    assert_eq!(a_to_g.forward, 1);
}
