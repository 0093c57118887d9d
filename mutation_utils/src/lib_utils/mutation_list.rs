/*
    Mutation list fields as exported by Nextclade
        substitutions:   "C241T,C3037T,A23403G"
        aaSubstitutions: "S:A67V,ORF1a:T3255I,S:D614G"
    Tokens are comma separated, surrounding whitespace is ignored and
    empty tokens are dropped. Malformed fields never raise.
*/

use std::sync::OnceLock;
use regex::Regex;

pub const SPIKE_GENE_PREFIX: &str = "S:";

fn accession_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\|(EPI_ISL_\d+)\|").expect("accession pattern is valid"))
}

pub fn parse_list_field(field: &str) -> Vec<String> {
    field
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}

// keep tokens of one gene and drop the "<gene>:" tag
pub fn extract_gene_mutations(field: &str, prefix: &str) -> Vec<String> {
    parse_list_field(field)
        .into_iter()
        .filter_map(|token| token.strip_prefix(prefix).map(String::from))
        .filter(|token| !token.is_empty())
        .collect()
}

pub fn extract_spike_aa(field: &str) -> Vec<String> {
    extract_gene_mutations(field, SPIKE_GENE_PREFIX)
}

// "hCoV-19/Japan/ABC/2021|EPI_ISL_1234567|2021-05-01" -> "EPI_ISL_1234567"
pub fn accession_from_seqname(seqname: &str) -> Option<&str> {
    accession_pattern()
        .captures(seqname)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
