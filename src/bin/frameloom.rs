use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "frameloom", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a scenario JSON document and exit.
    Validate(ValidateArgs),
    /// Evaluate one frame and print the element transforms as JSON.
    Eval(EvalArgs),
    /// Print per-frame state fingerprints for a frame range.
    Fingerprint(FingerprintArgs),
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input scenario JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct EvalArgs {
    /// Input scenario JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

#[derive(Parser, Debug)]
struct FingerprintArgs {
    /// Input scenario JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame range as `start..end` (end exclusive); defaults to the whole
    /// scenario.
    #[arg(long)]
    frames: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Eval(args) => cmd_eval(args),
        Command::Fingerprint(args) => cmd_fingerprint(args),
    }
}

fn read_scenario_json(path: &Path) -> anyhow::Result<frameloom::Scenario> {
    let f = File::open(path).with_context(|| format!("open scenario '{}'", path.display()))?;
    let r = BufReader::new(f);
    let scenario: frameloom::Scenario =
        serde_json::from_reader(r).with_context(|| "parse scenario JSON")?;
    Ok(scenario)
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let scenario = read_scenario_json(&args.in_path)?;
    scenario.validate()?;
    eprintln!("{} is valid", args.in_path.display());
    Ok(())
}

fn cmd_eval(args: EvalArgs) -> anyhow::Result<()> {
    let scenario = read_scenario_json(&args.in_path)?;
    let composer = frameloom::SceneComposer::new(&scenario)?;
    let state = composer.render_state(frameloom::FrameIndex(args.frame))?;

    let out = if args.pretty {
        serde_json::to_string_pretty(&state)?
    } else {
        serde_json::to_string(&state)?
    };
    println!("{out}");
    Ok(())
}

fn cmd_fingerprint(args: FingerprintArgs) -> anyhow::Result<()> {
    let scenario = read_scenario_json(&args.in_path)?;
    let composer = frameloom::SceneComposer::new(&scenario)?;

    let (start, end) = match &args.frames {
        None => (0, composer.total_frames().0),
        Some(spec) => parse_frame_range(spec)?,
    };
    if end > composer.total_frames().0 {
        anyhow::bail!(
            "range end {end} exceeds scenario total {}",
            composer.total_frames().0
        );
    }

    for f in start..end {
        let frame = frameloom::FrameIndex(f);
        let state = composer.render_state(frame)?;
        let fp = frameloom::fingerprint_state(frame, &state);
        println!("{f}\t{:016x}{:016x}", fp.hi, fp.lo);
    }
    Ok(())
}

fn parse_frame_range(spec: &str) -> anyhow::Result<(u64, u64)> {
    let (a, b) = spec
        .split_once("..")
        .with_context(|| format!("frame range '{spec}' must look like 'start..end'"))?;
    let start: u64 = a.trim().parse().with_context(|| "parse range start")?;
    let end: u64 = b.trim().parse().with_context(|| "parse range end")?;
    if start > end {
        anyhow::bail!("range start {start} exceeds end {end}");
    }
    Ok((start, end))
}
