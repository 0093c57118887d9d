use log::info;
use mutation_utils::MutationError;
use mutation_utils::lib_utils::compare::{read_first_column, Partition};
use super::get_args::Cli;

pub fn report_comparison(cli: &Cli) -> Result<(), MutationError> {
    // read both lists before creating the output
    let set_a = read_first_column(&cli.list_a)?;
    let set_b = read_first_column(&cli.list_b)?;
    info!("List A: {} mutations, list B: {} mutations", set_a.len(), set_b.len());

    let partition = Partition::new(&set_a, &set_b);
    partition.write_csv(&cli.out)?;

    println!("Saved: {}", cli.out.display());
    println!(
        "Only_A: {} Both: {} Only_B: {}",
        partition.only_a.len(),
        partition.both.len(),
        partition.only_b.len()
    );
    Ok(())
}
