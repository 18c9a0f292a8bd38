mod args;
mod global_settings;

use crate::global_settings::GlobalSettings;
use anyhow::{bail, Context, Result};
use clap::ArgMatches;
use itertools::Itertools;
use line_ranges::LineRangeSet;

enum Output {
    Set(LineRangeSet),
    Lines(Vec<(u32, bool)>),
}

fn main() -> Result<()> {
    let matches = args::build_cli().get_matches();
    let settings = GlobalSettings::new(&matches);
    env_logger::Builder::new()
        .filter_level(settings.log_level())
        .parse_default_env()
        .init();

    let output = run(&matches)?;
    println!("{}", render(&output, &settings)?);
    Ok(())
}

/// Execute the subcommand selected on the command line
fn run(matches: &ArgMatches) -> Result<Output> {
    Ok(match matches.subcommand() {
        Some(("normalize", sub)) => Output::Set(get_set(sub, "SET")?),
        Some(("union", sub)) => {
            Output::Set(get_set(sub, "A")?.union(&get_set(sub, "B")?))
        }
        Some(("intersect", sub)) => {
            Output::Set(get_set(sub, "A")?.intersection(&get_set(sub, "B")?))
        }
        Some(("subtract", sub)) => {
            Output::Set(get_set(sub, "A")?.subtract(&get_set(sub, "B")?))
        }
        Some(("shift", sub)) => {
            let set = get_set(sub, "SET")?;
            let offset = *sub
                .get_one::<i64>("OFFSET")
                .context("missing offset")?;
            Output::Set(shift(&set, offset)?)
        }
        Some(("contains", sub)) => {
            let set = get_set(sub, "SET")?;
            let lines = sub
                .get_many::<u32>("LINE")
                .into_iter()
                .flatten()
                .copied()
                .sorted()
                .dedup()
                .collect_vec();
            let found = set.contains_lines(&lines);
            Output::Lines(lines.into_iter().zip(found).collect())
        }
        Some((name, _)) => bail!("unknown command '{name}'"),
        None => bail!("no command given"),
    })
}

/// Parse one of the set arguments
fn get_set(args: &ArgMatches, name: &str) -> Result<LineRangeSet> {
    let text = args
        .get_one::<String>(name)
        .with_context(|| format!("missing argument {name}"))?;
    let set: LineRangeSet = text
        .parse()
        .with_context(|| format!("invalid line ranges for {name}: '{text}'"))?;
    log::info!("{name} = {set} ({} lines)", set.line_count());
    Ok(set)
}

/// Shift the set, refusing offsets that would move lines out of the valid
/// range of line numbers.
fn shift(set: &LineRangeSet, offset: i64) -> Result<LineRangeSet> {
    if let (Some(first), Some(last)) = (set.ranges().first(), set.ranges().last())
    {
        if i64::from(first.start()) + offset < 0 {
            bail!("shifting {first} by {offset} goes before line 0");
        }
        if i64::from(last.end_exclusive()) + offset > i64::from(u32::MAX) {
            bail!("shifting {last} by {offset} goes past the last line");
        }
    }
    Ok(set.with_delta(offset))
}

fn render(output: &Output, settings: &GlobalSettings) -> Result<String> {
    Ok(match (output, settings.json) {
        (Output::Set(set), true) => serde_json::to_string(set)?,
        (Output::Set(set), false) => set.to_string(),
        (Output::Lines(lines), true) => serde_json::to_string(lines)?,
        (Output::Lines(lines), false) => lines
            .iter()
            .map(|(line, found)| format!("{line}: {found}"))
            .join("\n"),
    })
}
