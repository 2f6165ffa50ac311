use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use marquee::{BrandReveal, RevealConfig, Seconds, build_stage};

#[derive(Parser, Debug)]
#[command(name = "marquee", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the reveal's cue sheet.
    Cues(CuesArgs),
    /// Play the reveal headlessly, printing every visible change.
    Play(PlayArgs),
}

#[derive(Parser, Debug)]
struct CuesArgs {
    /// Reveal configuration JSON; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit the cue sheet as JSON instead of a table.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Parser, Debug)]
struct PlayArgs {
    /// Reveal configuration JSON; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Steps per second of sequence time.
    #[arg(long, default_value_t = 30.0)]
    fps: f64,

    /// Stop after this many seconds. Defaults to one breathing period past
    /// the idle-loop start.
    #[arg(long)]
    until: Option<f64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Cues(args) => cmd_cues(args),
        Command::Play(args) => cmd_play(args),
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<RevealConfig> {
    match path {
        Some(path) => RevealConfig::from_path(path)
            .with_context(|| format!("loading reveal config from {}", path.display())),
        None => Ok(RevealConfig::default()),
    }
}

fn cmd_cues(args: CuesArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_ref())?;
    let (_, targets) = build_stage(&config);
    let reveal = BrandReveal::build(config, &targets).context("building reveal")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(reveal.cue_sheet())?);
        return Ok(());
    }

    for cue in reveal.cue_sheet() {
        println!("{:>6.2}s  {}", cue.at.0, cue.text);
    }
    println!("{:>6.2}s  [finalizing]", reveal.final_start().0);
    println!("{:>6.2}s  [idle loop]", reveal.idle_start().0);
    Ok(())
}

fn cmd_play(args: PlayArgs) -> anyhow::Result<()> {
    anyhow::ensure!(
        args.fps.is_finite() && args.fps > 0.0,
        "--fps must be positive"
    );

    let config = load_config(args.config.as_ref())?;
    let (mut stage, targets) = build_stage(&config);
    let mut reveal = BrandReveal::build(config, &targets).context("building reveal")?;

    let until = args.until.unwrap_or(reveal.idle_start().0 + 5.0);
    let dt = 1.0 / args.fps;
    let label = targets.label;
    let grid = targets.grid;

    let mut last_text = String::new();
    let mut last_grid_visible = false;
    let mut step = 0u64;
    loop {
        let t = step as f64 * dt;
        if t > until {
            break;
        }
        reveal
            .advance_to(Seconds(t), &mut stage)
            .context("advancing reveal")?;

        if let Some(node) = label.and_then(|id| stage.node(id)) {
            if node.text != last_text {
                last_text = node.text.clone();
                println!(
                    "{t:>6.2}s  [{:?}] \"{last_text}\"",
                    reveal.phase_at(Seconds(t))
                );
            }
        }
        if let Some(node) = grid.and_then(|id| stage.node(id)) {
            if node.props.visible != last_grid_visible {
                last_grid_visible = node.props.visible;
                println!("{t:>6.2}s  grid visible: {last_grid_visible}");
            }
        }
        step += 1;
    }

    reveal.teardown();
    Ok(())
}
