use clap::{
    crate_authors, crate_description, crate_name, crate_version, Arg, ArgAction, ArgMatches,
    Command,
};

// The CLI layer should only parse inputs and forward them to library code.
fn main() -> miette::Result<()> {
    let matches = Command::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("init")
                .about("Writes the standard project files into a destination directory")
                .arg(
                    Arg::new("destination")
                        .help("The directory where the files will be written")
                        .default_value("."),
                )
                .arg(
                    Arg::new("yes")
                        .help("Skip the confirmation prompt")
                        .short('y')
                        .long("yes")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("list").about("List the files that would be written"))
        .get_matches();

    let is_verbose = matches.get_flag("verbose");

    env_logger::Builder::new()
        .filter_level(if is_verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    match matches.subcommand() {
        Some(("init", args)) => {
            handle_init(args)?;
        }
        Some(("list", _)) => {
            pyseed::api::list_files();
        }
        _ => unreachable!(),
    }

    Ok(())
}

fn handle_init(args: &ArgMatches) -> Result<(), pyseed::api::PyseedError> {
    let destination = args
        .get_one::<String>("destination")
        .expect("destination has a default");

    let assume_yes = args.get_flag("yes");

    pyseed::api::init_project(destination, assume_yes)
}
