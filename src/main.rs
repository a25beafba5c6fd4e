use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::fs;
use std::path::PathBuf;
use strokematch::Config;
use strokematch::replay::{Replay, parse_script};

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("STROKEMATCH_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "strokematch")]
#[command(version = VERSION, about = "Replay input scripts through a shortcut profile")]
struct Cli {
    /// Shortcut profile to load (defaults to ~/.config/strokematch/config.toml)
    #[arg(long, short = 'p', value_name = "PATH")]
    profile: Option<PathBuf>,

    /// Event script to replay, one step per line
    #[arg(
        long,
        short = 's',
        value_name = "PATH",
        required_unless_present_any = ["print_profile", "init_config"]
    )]
    script: Option<PathBuf>,

    /// Print the effective profile as TOML and exit
    #[arg(long, action = ArgAction::SetTrue)]
    print_profile: bool,

    /// Write the built-in profile to the default config path
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "profile")]
    init_config: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::get_config_path()?;
        if path.exists() {
            anyhow::bail!("Config already exists at {}", path.display());
        }
        Config::default().save()?;
        println!("Wrote built-in profile to {}", path.display());
        return Ok(());
    }

    let config = match &cli.profile {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let mut replay = Replay::from_config(&config).context("Failed to install profile")?;

    if cli.print_profile {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let Some(script_path) = cli.script else {
        anyhow::bail!("No script given");
    };
    let text = fs::read_to_string(&script_path)
        .with_context(|| format!("Failed to read script {}", script_path.display()))?;
    let script = parse_script(&text)
        .with_context(|| format!("Invalid script {}", script_path.display()))?;

    log::info!("Replaying {} steps", script.len());
    for report in replay.run(&script) {
        println!("{report}");
    }

    if replay.matcher().is_running() {
        println!("Script ended with a stroke still running");
    }
    Ok(())
}
