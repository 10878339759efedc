use clap::Parser;
use color_eyre::eyre::{self, WrapErr};
use flexi_logger::Logger;

use ics2csv::configuration::{config::Config, options::Opt};
use ics2csv::convert_file;

fn main() -> eyre::Result<()> {
    let args = Opt::parse();
    color_eyre::install()?;
    let _logger = Logger::try_with_env_or_str(&args.log_level)?.start()?;

    if args.create_default_config {
        Config::write_example(&args.config)?;
        println!("Fichier de configuration créé : {}", args.config.display());
        return Ok(());
    }

    let Some(ics_file) = args.ics_file.as_deref() else {
        println!("Aucun fichier sélectionné.");
        return Ok(());
    };

    let config = Config::new(&args)?;
    let output = config.output_path(args.output.as_deref());
    let projection = config.format.projection(config.target_zone());

    let count = convert_file(ics_file, &output, projection.as_ref())
        .wrap_err_with(|| format!("could not convert {:?}", ics_file))?;

    println!("{} événements exportés", count);
    println!("Fichier créé : {}", output.display());

    Ok(())
}
