use log::info;
use mutation_utils::MutationError;
use mutation_utils::lib_utils::compare::ComparisonColumns;
use mutation_utils::lib_utils::substitution::{Derived, SubstitutionSpectrum};
use super::get_args::Cli;

pub fn report_spectrum(cli: &Cli) -> Result<(), MutationError> {
    let derived = Derived::from(cli.derived);
    info!("Treating list {} as the derived population", derived.derived());
    let columns = ComparisonColumns::read(&cli.compare)?;
    let spectrum = SubstitutionSpectrum::from_comparison(&columns, derived);
    spectrum.write_csv(&cli.out, derived)?;

    println!("Saved: {}", cli.out.display());
    println!("{}", spectrum.render(derived));
    Ok(())
}
