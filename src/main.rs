// main.rs
//
// Command line host: read a model JSON file (the same shape the modeling tool
// sends), flatten every face and write SVG.

use anyhow::{Context, Result, bail};
use laserface::export::{ExportOptions, export_faces};
use laserface::face::{Face2d, ModelData};
use laserface::flatten::flatten_faces;
use laserface::units::Units;
use std::env;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

struct Args {
    model_path: PathBuf,
    output: Option<PathBuf>,
    units: Option<i64>,
    multi_file: bool,
    overwrite: bool,
    digits: Option<usize>,
    flatten_only: bool,
}

fn print_usage() {
    eprintln!("laserface - flatten planar faces into SVG for laser cutting");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  laserface <model.json> [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -o, --output <path>   Destination SVG (default: last export path or export.svg)");
    eprintln!("  --units <0-5>         Display unit: 0 in, 1 ft, 2 mm, 3 cm, 4 m, 5 yd");
    eprintln!("  --multi-file          Write one SVG per face");
    eprintln!("  --overwrite           Replace existing files");
    eprintln!("  --digits <n>          Digits after the decimal point (default: 8)");
    eprintln!("  --flatten-only        Print flattened faces as JSON instead of writing SVG");
    eprintln!();
    eprintln!("Logging is controlled with RUST_LOG (default: info).");
}

fn parse_args() -> Result<Option<Args>> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() || args[0] == "--help" || args[0] == "-h" {
        return Ok(None);
    }

    let mut parsed = Args {
        model_path: PathBuf::from(&args[0]),
        output: None,
        units: None,
        multi_file: false,
        overwrite: false,
        digits: None,
        flatten_only: false,
    };

    let mut rest = args[1..].iter();
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "-o" | "--output" => {
                let value = rest.next().context("--output needs a path")?;
                parsed.output = Some(PathBuf::from(value));
            },
            "--units" => {
                let value = rest.next().context("--units needs a value")?;
                parsed.units = Some(value.parse::<i64>().with_context(|| format!("invalid unit index {value:?}"))?);
            },
            "--digits" => {
                let value = rest.next().context("--digits needs a value")?;
                parsed.digits = Some(value.parse::<usize>().with_context(|| format!("invalid digit count {value:?}"))?);
            },
            "--multi-file" => parsed.multi_file = true,
            "--overwrite" => parsed.overwrite = true,
            "--flatten-only" => parsed.flatten_only = true,
            other => bail!("unknown option: {other}"),
        }
    }
    Ok(Some(parsed))
}

fn run(args: Args) -> Result<()> {
    let json = fs::read_to_string(&args.model_path)
        .with_context(|| format!("reading {}", args.model_path.display()))?;
    let model = ModelData::from_json(&json)
        .with_context(|| format!("parsing {}", args.model_path.display()))?;

    let flattened = flatten_faces(&model.faces).context("flattening faces")?;
    for (i, flat) in flattened.iter().enumerate() {
        let (w, h) = flat.face.width_height();
        tracing::info!(
            face = i,
            width = %model.units.format_inches(w, 3),
            height = %model.units.format_inches(h, 3),
            degrees = flat.degrees,
            "face ready"
        );
    }
    let faces: Vec<Face2d> = flattened.into_iter().map(|f| f.face).collect();

    if args.flatten_only {
        println!("{}", serde_json::to_string_pretty(&faces)?);
        return Ok(());
    }

    let units = match args.units {
        Some(index) => Units::from_index(index)?,
        None => model.units,
    };

    let prefs = model.user_prefs();
    let mut options = ExportOptions::from_prefs(&prefs, units);
    if let Some(output) = args.output {
        options.destination = output;
    }
    options.use_multi_file |= args.multi_file;
    options.overwrite |= args.overwrite;
    if let Some(digits) = args.digits {
        options.svg.fraction_digits = digits;
    }

    let written = export_faces(&faces, &options).context("exporting SVG")?;
    for path in written {
        println!("{}", path.display());
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    match parse_args()? {
        Some(args) => run(args),
        None => {
            print_usage();
            Ok(())
        },
    }
}
