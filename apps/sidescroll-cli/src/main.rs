use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use sidescroll_input::{InputScript, InputState, KeyBindings};
use sidescroll_kernel::{SimConfig, Simulation};
use sidescroll_physics::LevelKind;
use sidescroll_render::{DebugTextRenderer, FrameView, Renderer};
use sidescroll_tools::SimInspector;

#[derive(Parser)]
#[command(name = "sidescroll-cli", about = "Headless driver for the sidescroll demo levels")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum LevelArg {
    /// 800x600 world that fits one screen
    Single,
    /// 8000x1200 world with a following camera
    Scrolling,
}

impl From<LevelArg> for LevelKind {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::Single => LevelKind::SingleScreen,
            LevelArg::Scrolling => LevelKind::Scrolling,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print crate info
    Info,
    /// Print the default configuration as JSON
    DefaultConfig,
    /// Run a level under scripted input and print frames
    Run {
        #[arg(short, long, value_enum, default_value = "single")]
        level: LevelArg,
        /// Number of ticks to simulate
        #[arg(short, long, default_value = "300")]
        ticks: u64,
        /// Input script (`<tick> press|release <key>` per line); defaults to a built-in demo
        #[arg(short, long)]
        script: Option<PathBuf>,
        /// JSON config overriding the default tunables
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Print a frame every N ticks (0 disables)
        #[arg(short, long, default_value = "60")]
        every: u64,
    },
    /// Run the same input twice and compare final state hashes
    Determinism {
        #[arg(short, long, value_enum, default_value = "scrolling")]
        level: LevelArg,
        #[arg(short, long, default_value = "600")]
        ticks: u64,
        #[arg(short, long)]
        script: Option<PathBuf>,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("sidescroll-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("kernel: {}", sidescroll_kernel::crate_info());
            println!("physics: {}", sidescroll_physics::crate_info());
            println!("input: {}", sidescroll_input::crate_info());
            println!("render: {}", sidescroll_render::crate_info());
            println!("tools: {}", sidescroll_tools::crate_info());
        }
        Commands::DefaultConfig => {
            println!("{}", SimConfig::default().to_json_pretty()?);
        }
        Commands::Run {
            level,
            ticks,
            script,
            config,
            every,
        } => {
            let config = load_config(config.as_deref())?;
            let script = load_script(script.as_deref())?;
            let renderer = DebugTextRenderer::new();

            let sim = run(level.into(), &config, &script, ticks, |sim| {
                if every > 0 && sim.tick() % every == 0 {
                    print!("{}", renderer.render(&FrameView::capture(sim)));
                }
            });
            println!("{}", SimInspector::summary(&sim));
        }
        Commands::Determinism {
            level,
            ticks,
            script,
            config,
        } => {
            let config = load_config(config.as_deref())?;
            let script = load_script(script.as_deref())?;

            let first = run(level.into(), &config, &script, ticks, |_| {});
            let second = run(level.into(), &config, &script, ticks, |_| {});
            println!("Run 1: {}", SimInspector::summary(&first));
            println!("Run 2: {}", SimInspector::summary(&second));

            if first.state_hash() != second.state_hash() {
                anyhow::bail!("state hash mismatch after {ticks} ticks");
            }
            println!("Match: OK");
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<SimConfig> {
    match path {
        Some(path) => SimConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(SimConfig::default()),
    }
}

fn load_script(path: Option<&Path>) -> anyhow::Result<InputScript> {
    let Some(path) = path else {
        return Ok(InputScript::demo());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading input script {}", path.display()))?;
    let script = InputScript::parse(&text, &KeyBindings::default())
        .with_context(|| format!("parsing input script {}", path.display()))?;
    Ok(script)
}

/// Drive one level for `ticks` steps, calling `on_step` after each.
fn run(
    level: LevelKind,
    config: &SimConfig,
    script: &InputScript,
    ticks: u64,
    mut on_step: impl FnMut(&Simulation),
) -> Simulation {
    let mut sim = level.layout().build(config);
    let mut input = InputState::new();

    for tick in 0..ticks {
        for event in script.events_at(tick) {
            input.apply(event);
        }
        let actions = input.actions();
        let report = sim.step(&actions);
        if report.jumped || report.landed || report.clamped {
            tracing::debug!(?report, "step");
        }
        on_step(&sim);
    }

    tracing::info!(ticks, hash = sim.state_hash(), "run complete");
    sim
}
