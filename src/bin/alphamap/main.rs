//! Alphabet Map
//!
//! Interactive authoring of alphabet map entries.
#![warn(missing_docs)]

use std::fmt::Write;
use std::io;

use anyhow::Error;
use clap::ArgMatches;

use alphamap::config::{EntryFormat, SeparatorPolicy};
use alphamap::{interrupt, Config, Generator};

mod app;

/// Main.
fn main() {
    let args = app::app().get_matches();

    env_logger::Builder::new()
        .filter_level(
            args.value_of("log_level")
                .and_then(|level| level.parse().ok())
                .unwrap_or(log::LevelFilter::Warn),
        )
        .init();

    let rc = match generate(&args) {
        Ok(()) => 0,
        Err(err) => {
            let mut message = String::new();
            for cause in err.chain() {
                write!(message, ": {}", cause).expect("format write should not fail");
            }
            eprintln!("alphamap{}", message);
            1
        }
    };

    std::process::exit(rc)
}

/// Build the configuration, then prompt for alphabets until interrupted.
fn generate(args: &ArgMatches) -> Result<(), Error> {
    let mut config = Config::load()?;
    apply_args(&mut config, args);
    log::debug!("configuration: {:?}", config);

    interrupt::exit_on_interrupt()?;

    let stdin = io::stdin();
    let mut generator = Generator::new(stdin.lock(), io::stdout(), io::stderr(), config);
    generator.run()?;
    Ok(())
}

/// Apply command line flags on top of the loaded configuration.
fn apply_args(config: &mut Config, args: &ArgMatches) {
    if let Some(separator) = args.value_of("separator") {
        config.separator = SeparatorPolicy::from(separator);
    }
    if let Some(format) = args.value_of("format") {
        config.format = EntryFormat::from(format);
    }
    if args.is_present("rtl") {
        config.rtl = true;
    } else if args.is_present("no_rtl") {
        config.rtl = false;
    }
    if let Some(preview) = args.value_of("preview") {
        config.preview = Some(preview.to_string());
    }
}
