use clap::Parser;
use log::{error, info};

use safari_app::autopilot::Autopilot;
use safari_app::runner;
use safari_app::state::AppState;
use safari_core::state::GameReport;
use safari_sim::assets::SpriteManifest;
use safari_sim::SimConfig;

/// Arcade safari shooting gallery, played by the autopilot
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// RNG seed; the same seed replays the same game
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Run on the 60Hz game loop thread instead of as fast as possible
    #[arg(short, long)]
    realtime: bool,

    /// Print the final report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    safari_app::init_logging(args.verbose);

    let config = SimConfig {
        seed: args.seed,
        ..Default::default()
    };
    let pilot = Autopilot::default();
    let assets = SpriteManifest::complete();

    let result = if args.realtime {
        let state = AppState::new();
        runner::play_realtime(&state, config, assets, &pilot).map_err(Box::<dyn std::error::Error>::from)
    } else {
        runner::play_headless(config, assets, &pilot).map_err(Box::<dyn std::error::Error>::from)
    };

    let report = match result {
        Ok(report) => report,
        Err(err) => {
            error!("game aborted: {err}");
            return Err(err);
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    info!("done");
    Ok(())
}

fn print_report(report: &GameReport) {
    println!("{}", if report.victory { "VICTORY" } else { "GAME OVER" });
    println!("  rhino    {}", report.rhino_kills);
    println!("  bizon    {}", report.bizon_kills);
    println!("  gazelle  {}", report.gazelle_kills);
    println!("  shots    {}", report.shots_fired);
    println!("  time     {:.1}s", report.elapsed_secs);
}
