use clap::{arg, Arg, ArgMatches};
use log::LevelFilter;

pub struct GlobalSettings {
    // Print results as JSON rather than text
    pub json: bool,

    // Number of -v switches
    pub verbosity: u8,
}

impl GlobalSettings {
    /// Return the command line switches to configure the global settings
    pub fn cli() -> impl IntoIterator<Item = Arg> {
        [
            arg!(--json "Print results as JSON").global(true),
            arg!(-v --verbose ... "More verbose logging (repeat for more)")
                .global(true),
        ]
    }

    /// Create the settings from the command line arguments.
    pub fn new(args: &ArgMatches) -> Self {
        GlobalSettings {
            json: args.get_flag("json"),
            verbosity: args.get_count("verbose"),
        }
    }

    /// Default log level, which RUST_LOG can still override
    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
