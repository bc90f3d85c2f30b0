//! # Gravit CLI Application
//!
//! Terminal front end for the gravity dam stability engine. Evaluates a
//! built-in sample problem or a `DamParameters` JSON file and prints either a
//! text report or the raw results as JSON.
//!
//! ## Usage
//!
//! ```text
//! dam_cli [PRESET|FILE.json] [--units si|english] [--shape TAG] [--criteria FILE.json] [--json]
//! dam_cli --list
//! ```
//!
//! Set `RUST_LOG=debug` to see the evaluation trace on stderr.

mod presets;
mod report;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use dam_core::{
    convert, evaluate_with, CalcError, DamParameters, DamShape, StabilityCriteria, UnitSystem,
};

const USAGE: &str = "\
Usage: dam_cli [PRESET|FILE.json] [options]

Options:
  --units <si|english>   Convert parameters before evaluating
  --shape <tag>          Override the dam shape (triangular, rectangular, stepped, curved)
  --criteria <FILE>      JSON file with min_sliding_fs / min_overturning_fs
  --json                 Print results as JSON
  --list                 List built-in presets (with --json, their parameters)
  -h, --help             Show this help";

/// Parsed command line
#[derive(Debug, Default)]
struct Args {
    source: Option<String>,
    units: Option<UnitSystem>,
    shape: Option<DamShape>,
    criteria: Option<PathBuf>,
    json: bool,
    list: bool,
    help: bool,
}

fn parse_args(raw: impl IntoIterator<Item = String>) -> Result<Args> {
    let mut args = Args::default();
    let mut iter = raw.into_iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => args.json = true,
            "--list" => args.list = true,
            "-h" | "--help" => args.help = true,
            "--units" => {
                let value = iter.next().context("--units requires a value")?;
                let units = UnitSystem::from_name(&value)
                    .with_context(|| format!("unknown unit system '{}'", value))?;
                args.units = Some(units);
            }
            "--shape" => {
                let value = iter.next().context("--shape requires a value")?;
                let shape = DamShape::from_tag(&value)
                    .with_context(|| format!("unknown dam shape '{}'", value))?;
                args.shape = Some(shape);
            }
            "--criteria" => {
                let value = iter.next().context("--criteria requires a file path")?;
                args.criteria = Some(PathBuf::from(value));
            }
            other if other.starts_with('-') => bail!("unknown option '{}'", other),
            other => {
                if args.source.is_some() {
                    bail!("unexpected argument '{}'", other);
                }
                args.source = Some(other.to_string());
            }
        }
    }

    Ok(args)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let value: T = serde_json::from_str(&text)
        .map_err(CalcError::from)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(value)
}

fn load_parameters(source: Option<&str>) -> Result<DamParameters> {
    let name = source.unwrap_or(presets::DEFAULT_PRESET);

    if let Some(preset) = presets::find(name) {
        info!(preset = preset.id, title = preset.title, "using sample problem");
        return Ok(preset.params);
    }

    let path = Path::new(name);
    if path.exists() {
        debug!(path = %path.display(), "reading parameters file");
        return read_json(path);
    }

    bail!(
        "'{}' is neither a preset nor a file (run with --list to see presets)",
        name
    )
}

fn print_presets() {
    println!("Available presets:");
    for preset in presets::all() {
        let difficulty = preset
            .difficulty
            .map(|d| format!(" [{:?}]", d))
            .unwrap_or_default();
        println!("  {:<14} {}{} - {}", preset.id, preset.title, difficulty, preset.description);
    }
}

fn run(args: Args) -> Result<()> {
    if args.help {
        println!("{}", USAGE);
        return Ok(());
    }
    if args.list {
        if args.json {
            println!("{}", serde_json::to_string_pretty(&presets::all())?);
        } else {
            print_presets();
        }
        return Ok(());
    }

    let criteria = match &args.criteria {
        Some(path) => read_json::<StabilityCriteria>(path)?,
        None => StabilityCriteria::default(),
    };

    let mut params = load_parameters(args.source.as_deref())?;
    if let Some(target) = args.units {
        params = convert(&params, target);
    }
    if let Some(shape) = args.shape {
        params.shape = shape;
    }

    let result = evaluate_with(&params, &criteria).context("stability evaluation failed")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", report::render(&params, &result)?);
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let result = parse_args(std::env::args().skip(1)).and_then(run);
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            if let Some(calc_err) = e.downcast_ref::<CalcError>() {
                if let Ok(json) = serde_json::to_string_pretty(calc_err) {
                    eprintln!();
                    eprintln!("Error JSON:");
                    eprintln!("{}", json);
                }
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Args> {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_defaults() {
        let a = args(&[]).unwrap();
        assert!(a.source.is_none());
        assert!(a.units.is_none());
        assert!(!a.json);
    }

    #[test]
    fn test_parse_full() {
        let a = args(&["advanced", "--units", "english", "--json"]).unwrap();
        assert_eq!(a.source.as_deref(), Some("advanced"));
        assert_eq!(a.units, Some(UnitSystem::English));
        assert!(a.json);
    }

    #[test]
    fn test_parse_shape_override() {
        let a = args(&["basic", "--shape", "Curved"]).unwrap();
        assert_eq!(a.shape, Some(DamShape::Curved));
    }

    #[test]
    fn test_parse_errors() {
        assert!(args(&["--units"]).is_err());
        assert!(args(&["--units", "cubits"]).is_err());
        assert!(args(&["--bogus"]).is_err());
        assert!(args(&["basic", "advanced"]).is_err());
        assert!(args(&["--shape", "arch"]).is_err());
    }

    #[test]
    fn test_load_preset_and_default() {
        let p = load_parameters(Some("intermediate")).unwrap();
        assert_eq!(p.dimensions.bottom_width, 15.0);

        let d = load_parameters(None).unwrap();
        assert!(d.use_uplift);
    }

    #[test]
    fn test_load_unknown_source() {
        assert!(load_parameters(Some("no-such-preset-or-file.json")).is_err());
    }

    #[test]
    fn test_degenerate_error_is_downcastable() {
        let mut params = presets::find("basic").unwrap().params;
        params.water_level = 0.0;
        let err = evaluate_with(&params, &StabilityCriteria::default())
            .context("stability evaluation failed")
            .unwrap_err();
        let calc = err.downcast_ref::<CalcError>().unwrap();
        assert_eq!(calc.error_code(), "DEGENERATE_LOAD");
    }
}
