mod app;
mod scene;
mod script;
mod tui;

use anyhow::Result;
use clap::Parser;
use stride::ControllerConfig;

#[derive(Parser)]
#[command(name = "stride-viewer")]
#[command(about = "Top-down terminal viewer for the third-person character controller")]
struct Args {
    #[arg(long, help = "Run the scripted walkthrough and log it instead of opening the TUI")]
    headless: bool,

    #[arg(long, default_value_t = 60, help = "Frame cap (TUI) or fixed step rate (headless)")]
    fps: u32,

    #[arg(long, default_value_t = 2.0, help = "Walk speed in units per second")]
    walk_speed: f32,

    #[arg(long, default_value_t = 5.0, help = "Run speed in units per second")]
    run_speed: f32,

    #[arg(long, default_value_t = 0.2, help = "Animation cross-fade in seconds")]
    fade: f32,

    #[arg(long, default_value_t = 12.0, help = "Turn rate in radians per second")]
    turn_speed: f32,
}

fn main() -> Result<()> {
    let args = Args::parse();
    anyhow::ensure!(args.fps > 0, "--fps must be at least 1");

    let config = ControllerConfig {
        walk_speed: args.walk_speed,
        run_speed: args.run_speed,
        fade_duration: args.fade,
        turn_speed: args.turn_speed,
        ..Default::default()
    };

    if args.headless {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
        script::run(config, args.fps)?;
    } else {
        app::run(config, args.fps)?;
    }

    Ok(())
}
