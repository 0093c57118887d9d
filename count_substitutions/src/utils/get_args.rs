use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use mutation_utils::lib_utils::substitution::Derived;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output of compare_mutations with columns Only_A, Both, Only_B
    #[arg(long = "compare", required = true, value_parser = validate_path)]
    pub compare: PathBuf,
    /// Output CSV
    #[arg(long = "out", default_value = "mutation_spectrum_A_to_B.csv")]
    pub out: PathBuf,
    /// List holding the derived population; its unique mutations count forward. Default: B
    #[arg(long = "derived", value_enum, default_value_t = DerivedList::B)]
    pub derived: DerivedList,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum DerivedList {
    A,
    B,
}

impl From<DerivedList> for Derived {
    fn from(list: DerivedList) -> Self {
        match list {
            DerivedList::A => Derived::A,
            DerivedList::B => Derived::B,
        }
    }
}

fn validate_path(input_str: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(input_str);
    if path.is_file() {
        Ok(path)
    } else {
        Err(format!("{} file doesn't exist or there is no permission to read it", input_str))
    }
}
