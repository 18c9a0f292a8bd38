use crate::global_settings::GlobalSettings;
use clap::{arg, value_parser, Arg, Command};

const SET_HELP: &str =
    "Line ranges, e.g. '[1,5), [10,15)' or '1..5 10..15', in any order";

fn set_arg(name: &'static str) -> Arg {
    Arg::new(name).value_name(name).help(SET_HELP).required(true)
}

pub(crate) fn build_cli() -> Command {
    Command::new("line-ranges")
        .version("0.1")
        .about("Combine sets of line ranges")
        .subcommand_required(true)
        .flatten_help(true) // show help for all subcommands
        .arg_required_else_help(true) // show full help if nothing given
        .args(GlobalSettings::cli())
        .subcommand(
            Command::new("normalize")
                .about("Print the normalized set")
                .arg(set_arg("SET")),
        )
        .subcommand(
            Command::new("union")
                .about("Lines in either set")
                .args([set_arg("A"), set_arg("B")]),
        )
        .subcommand(
            Command::new("intersect")
                .about("Lines in both sets")
                .args([set_arg("A"), set_arg("B")]),
        )
        .subcommand(
            Command::new("subtract")
                .about("Lines in A but not in B")
                .args([set_arg("A"), set_arg("B")]),
        )
        .subcommand(
            Command::new("shift")
                .about("Move all lines by an offset")
                .arg(set_arg("SET"))
                .arg(
                    arg!(<OFFSET> "Number of lines (may be negative)")
                        .value_parser(value_parser!(i64))
                        .allow_negative_numbers(true),
                ),
        )
        .subcommand(
            Command::new("contains")
                .about("Whether each line belongs to the set")
                .arg(set_arg("SET"))
                .arg(
                    arg!(<LINE>... "Line numbers")
                        .value_parser(value_parser!(u32)),
                ),
        )
}
