extern crate clap;
extern crate pathd;

mod commands;
mod normalize;
mod show;

use clap::{App, Arg, ArgMatches, SubCommand};
use commands::*;
use pathd::ParserOptions;

use std::fs::File;
use std::io::prelude::*;
use std::io::{self, stdout};
use std::process;

fn main() {
    env_logger::init();

    let matches = app().get_matches();

    if let Err(e) = run(&matches) {
        eprintln!("{}", e);
        process::exit(1);
    }
}

fn app() -> App<'static, 'static> {
    App::new("pathd command-line interface")
        .version("0.1")
        .author("Nicolas Silva <nical@fastmail.com>")
        .about("SVG path data parser")
        .subcommand(SubCommand::with_name("normalize")
            .about("Prints the path in absolute form")
            .arg(Arg::with_name("KEEP_ARCS")
                .short("a")
                .long("keep-arcs")
                .help("Keeps arcs instead of approximating them with cubic bézier curves")
            )
        )
        .subcommand(SubCommand::with_name("show")
            .about("Prints the commands of each sub-path")
            .arg(Arg::with_name("KEEP_ARCS")
                .short("a")
                .long("keep-arcs")
                .help("Keeps arcs instead of approximating them with cubic bézier curves")
            )
        )
        .subcommand(SubCommand::with_name("count")
            .about("Prints the number of sub-paths and commands")
        )
        .arg(Arg::with_name("PATH")
            .value_name("PATH")
            .help("An SVG path")
            .takes_value(true)
            .required(false)
            .conflicts_with("INPUT")
        )
        .arg(Arg::with_name("INPUT")
            .help("Sets the input file to use")
            .short("i")
            .long("input")
            .value_name("FILE")
            .takes_value(true)
            .required(false)
        )
        .arg(Arg::with_name("OUTPUT")
            .help("Sets the output file to use")
            .value_name("FILE")
            .short("o")
            .long("output")
            .takes_value(true)
            .required(false)
        )
}

fn run(matches: &ArgMatches) -> Result<(), CliError> {
    let input = match matches.value_of("INPUT") {
        Some(input_file) => {
            log::info!("reading path data from {}", input_file);
            let mut input = String::new();
            File::open(input_file)?.read_to_string(&mut input)?;
            input
        }
        None => matches.value_of("PATH").unwrap_or("").to_string(),
    };

    let output: Box<dyn io::Write> = match matches.value_of("OUTPUT") {
        Some(output_file) => Box::new(File::create(output_file)?),
        None => Box::new(stdout()),
    };

    if let Some(normalize_matches) = matches.subcommand_matches("normalize") {
        normalize::normalize(NormalizeCmd {
            input,
            output,
            options: get_options(normalize_matches),
        })
    } else if let Some(show_matches) = matches.subcommand_matches("show") {
        show::show(ShowCmd {
            input,
            output,
            options: get_options(show_matches),
            count: false,
        })
    } else if matches.subcommand_matches("count").is_some() {
        show::show(ShowCmd {
            input,
            output,
            options: ParserOptions::DEFAULT,
            count: true,
        })
    } else {
        // Without a subcommand, just validate the input.
        pathd::parse_path(&input)?;

        Ok(())
    }
}

fn get_options(matches: &ArgMatches) -> ParserOptions {
    ParserOptions {
        expand_arcs: !matches.is_present("KEEP_ARCS"),
        ..ParserOptions::DEFAULT
    }
}

#[test]
fn path_and_input_file_conflict() {
    assert!(app()
        .get_matches_from_safe(vec!["pathd", "M 0 0 L 1 1", "-i", "path.txt", "count"])
        .is_err());

    let matches = app()
        .get_matches_from_safe(vec!["pathd", "M 0 0 L 1 1", "count"])
        .unwrap();
    assert_eq!(matches.value_of("PATH"), Some("M 0 0 L 1 1"));

    let matches = app()
        .get_matches_from_safe(vec!["pathd", "-i", "path.txt", "count"])
        .unwrap();
    assert_eq!(matches.value_of("PATH"), None);
    assert_eq!(matches.value_of("INPUT"), Some("path.txt"));
}
