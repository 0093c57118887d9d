pub mod get_args;
pub mod report_spectrum;
