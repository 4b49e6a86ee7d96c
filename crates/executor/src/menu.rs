use std::io::{BufRead, Write};

use super::config::Config;
use super::error::Error;
use super::types::RunMode;

const USAGE: &str = "\
Usage: executor [sweep | graph <vertices> <density> [--solve]]
  - sweep: run every configured size/density/iteration and write a CSV file
  - graph: generate one graph and print its adjacency matrix
  - no arguments: interactive menu";

fn parse_number<T: std::str::FromStr>(value: Option<&str>, name: &str) -> Result<T, Error> {
    let raw = value.ok_or_else(|| Error::InvalidArguments(format!("missing {}\n{}", name, USAGE)))?;
    raw.trim()
        .parse()
        .map_err(|_| Error::InvalidArguments(format!("invalid {}: {:?}", name, raw)))
}

/// Parses command-line arguments (program name excluded) into a run mode.
pub fn parse_args(args: &[String]) -> Result<RunMode, Error> {
    let mut args = args.iter().map(String::as_str);

    match args.next().map(str::to_lowercase).as_deref() {
        None => Ok(RunMode::Interactive),
        Some("sweep") => Ok(RunMode::Sweep),
        Some("graph") => {
            let vertices = parse_number(args.next(), "vertex count")?;
            let density = parse_number(args.next(), "density")?;
            let solve = match args.next() {
                None => false,
                Some("--solve") => true,
                Some(other) => {
                    return Err(Error::InvalidArguments(format!(
                        "unexpected argument {:?}\n{}",
                        other, USAGE
                    )));
                }
            };
            Ok(RunMode::SingleGraph {
                vertices,
                density,
                solve,
            })
        }
        Some(other) => Err(Error::InvalidArguments(format!(
            "unknown mode {:?}\n{}",
            other, USAGE
        ))),
    }
}

fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String, Error> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(Error::InvalidArguments("unexpected end of input".to_string()));
    }
    Ok(line.trim().to_string())
}

/// Shows the interactive menu and reads the user's choice.
pub fn prompt_mode<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<RunMode, Error> {
    writeln!(output, "1. Generate a graph.")?;
    writeln!(output, "2. Do all experiments.")?;

    match prompt_line(input, output, "    -> ")?.as_str() {
        "1" => {
            let vertices = prompt_line(input, output, "Number of vertices (from 1 to 200): ")?;
            let density = prompt_line(input, output, "Density (from 0.0 to 1.0): ")?;
            Ok(RunMode::SingleGraph {
                vertices: parse_number(Some(vertices.as_str()), "vertex count")?,
                density: parse_number(Some(density.as_str()), "density")?,
                solve: false,
            })
        }
        "2" => Ok(RunMode::Sweep),
        other => Err(Error::InvalidArguments(format!(
            "unknown menu choice {:?}",
            other
        ))),
    }
}

/// Loads the configuration, then resolves the run mode from `args`, falling
/// back to the interactive menu. A broken configuration fails before the user
/// is asked anything.
pub fn startup<L, R, W>(
    args: &[String],
    load_config: L,
    input: &mut R,
    output: &mut W,
) -> Result<(Config, RunMode), Error>
where
    L: FnOnce() -> Result<Config, Error>,
    R: BufRead,
    W: Write,
{
    let config = load_config()?;
    let mode = match parse_args(args)? {
        RunMode::Interactive => prompt_mode(input, output)?,
        mode => mode,
    };
    Ok((config, mode))
}
