use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// CSV whose first column is mutation list A
    #[arg(long = "A", required = true, value_parser = validate_path)]
    pub list_a: PathBuf,
    /// CSV whose first column is mutation list B
    #[arg(long = "B", required = true, value_parser = validate_path)]
    pub list_b: PathBuf,
    /// Output CSV with columns Only_A, Both, Only_B
    #[arg(long = "out", default_value = "compare_A_B.csv")]
    pub out: PathBuf,
}

fn validate_path(input_str: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(input_str);
    if path.is_file() {
        Ok(path)
    } else {
        Err(format!("{} file doesn't exist or there is no permission to read it", input_str))
    }
}
