use app::App;
use clap::Parser;
use cli::Args;
use debug::init_on_screen_log;
use lib_game::{Rush, RushCfg};
use log::{error, info};
use macroquad::prelude::*;
use ::rand::SeedableRng;
use ::rand::rngs::StdRng;
use tracker::{HandTracker, MouseHand, ReplayHand};

mod app;
mod cli;
mod debug;
mod input;
mod render;
mod tracker;
mod ui;

fn window_conf() -> Conf {
    Conf {
        window_title: "Banana Rush".to_owned(),
        high_dpi: true,
        window_width: 800,
        window_height: 600,
        fullscreen: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        error!("Driver panicked:\n{info}");
        hook(info);
    }));

    if let Err(e) = run().await {
        error!("Driver exited with error:\n{e:?}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    init_on_screen_log(log::STATIC_MAX_LEVEL)?;

    let args = Args::parse();
    info!("Project version: {}", env!("CARGO_PKG_VERSION"));

    let cfg = match &args.config {
        Some(path) => RushCfg::load(path)?,
        None => RushCfg::default(),
    };
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let tracker: Box<dyn HandTracker> = match &args.replay {
        Some(path) => Box::new(ReplayHand::load(path, args.loop_replay)?),
        None => Box::new(MouseHand::new()),
    };

    let mut rush = Rush::new(cfg, rng);
    if let Some(difficulty) = args.difficulty {
        rush.start_session(difficulty);
    }

    App::new(&window_conf(), tracker).run(rush).await
}
