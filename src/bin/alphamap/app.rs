//! Command line definition for alphamap.

use clap::{App, Arg};

pub(crate) fn app() -> App<'static, 'static> {
    App::new("alphamap")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Builds alphabet map entries from replacement glyphs")
        .after_help(
            "Enter one glyph per character code, starting at 32 (space). \
             Interrupt (Ctrl-C) to quit.",
        )
        .arg(
            Arg::with_name("separator")
                .long("separator")
                .short("s")
                .value_name("POLICY")
                .possible_values(&["legacy", "between"])
                .help("Where separators go: 'legacy' follows every pair below code 126, including the last one; 'between' only separates pairs"),
        )
        .arg(
            Arg::with_name("format")
                .long("format")
                .short("f")
                .value_name("FORMAT")
                .possible_values(&["map", "effect"])
                .help("Emits alphabet map entries ('map') or effect list elements ('effect')"),
        )
        .arg(
            Arg::with_name("rtl")
                .long("rtl")
                .overrides_with("no_rtl")
                .help("Marks map entries as right-to-left"),
        )
        .arg(
            Arg::with_name("no_rtl")
                .long("no-rtl")
                .overrides_with("rtl")
                .help("Marks map entries as left-to-right, whatever the configuration says"),
        )
        .arg(
            Arg::with_name("preview")
                .long("preview")
                .short("p")
                .value_name("TEXT")
                .help("Prints TEXT converted with each new alphabet to standard error"),
        )
        .arg(
            Arg::with_name("log_level")
                .long("log-level")
                .value_name("LEVEL")
                .default_value("warn")
                .help("Sets the log level (off, error, warn, info, debug, trace)"),
        )
}
