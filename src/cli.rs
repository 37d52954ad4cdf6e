use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use lib_game::Difficulty;
use strum::VariantArray;

pub type ErrBox = Box<dyn Error + Send + Sync>;

/// Catch falling bananas with your index finger.
#[derive(Parser, Debug)]
#[command(version)]
pub struct Args {
    /// Skips the menus and starts a session right away.
    #[arg(long, value_name = "DIFFICULTY", value_parser = parse_difficulty)]
    pub difficulty: Option<Difficulty>,
    /// Plays a recorded list of hand landmarks instead of following the mouse.
    #[arg(long, value_name = "FILE")]
    pub replay: Option<PathBuf>,
    /// Starts the recording over once it runs out.
    #[arg(long, requires = "replay")]
    pub loop_replay: bool,
    /// Seed for the object spawner.
    #[arg(long)]
    pub seed: Option<u64>,
    /// A RON file with game tunables.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

fn parse_difficulty(s: &str) -> Result<Difficulty, ErrBox> {
    let name = s.to_lowercase();

    Difficulty::VARIANTS
        .iter()
        .copied()
        .find(|difficulty| <&'static str>::from(*difficulty) == name)
        .ok_or_else(|| {
            let known: Vec<&'static str> = Difficulty::VARIANTS.iter().map(|&d| d.into()).collect();
            format!("Unknown difficulty. Known are: {known:?}").into()
        })
}
