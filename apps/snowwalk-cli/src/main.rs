use clap::{Parser, Subcommand};
use snowwalk_input::Binding;
use snowwalk_sim::{SimConfig, WalkSim};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "snowwalk-cli", about = "Headless walkabout driver")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Run the walkabout headless for a number of ticks
    Soak {
        /// Number of ticks to simulate
        #[arg(short, long, default_value = "3600")]
        ticks: u64,
        /// Fixed tick duration in seconds
        #[arg(long, default_value = "0.016666668")]
        dt: f32,
        /// RNG seed for the snow field
        #[arg(short, long, default_value = "42")]
        seed: u64,
        /// Optional YAML configuration file
        #[arg(long)]
        config: Option<String>,
        /// Override the configured snowflake count
        #[arg(long)]
        snow_count: Option<usize>,
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
            println!("snowwalk-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("sim: {}", snowwalk_sim::crate_info());
            println!("input: {}", snowwalk_input::crate_info());
        }
        Commands::Soak {
            ticks,
            dt,
            seed,
            config,
            snow_count,
        } => {
            let mut config = match &config {
                Some(path) => SimConfig::load(path)?,
                None => SimConfig::default(),
            };
            if let Some(count) = snow_count {
                config.snow.count = count;
            }
            println!(
                "Soak: ticks={ticks}, dt={dt}, seed={seed}, snow={}",
                config.snow.count
            );

            let ground = config.movement.ground_height;
            let mut sim = WalkSim::new(config, seed);

            // Scripted walker: hold forward, sprint on even seconds, jump
            // once a second.
            sim.key_event(Binding::Forward, true);
            for tick in 0..ticks {
                let second = (tick as f32 * dt) as u64;
                sim.key_event(Binding::Sprint, second % 2 == 0);
                if tick % 60 == 0 {
                    sim.key_event(Binding::Jump, true);
                    sim.key_event(Binding::Jump, false);
                }
                sim.step(dt);

                let y = sim.camera.position.y;
                anyhow::ensure!(
                    y >= ground - 1e-4,
                    "tick {tick}: camera sank below the ground plane (y={y})"
                );
            }

            let pos = sim.camera.position;
            println!(
                "Final: tick={}, camera=({:.2}, {:.2}, {:.2}), grounded={}",
                sim.tick_count(),
                pos.x,
                pos.y,
                pos.z,
                sim.body().can_jump
            );

            let flakes = sim.snow().positions();
            let (mut y_min, mut y_max) = (f32::MAX, f32::MIN);
            for flake in flakes {
                y_min = y_min.min(flake.y);
                y_max = y_max.max(flake.y);
            }
            println!(
                "Snow: flakes={}, y range [{:.2}, {:.2}]",
                flakes.len(),
                y_min,
                y_max
            );
            anyhow::ensure!(y_min >= 0.0, "flake escaped below the recycle plane");

            println!("Soak: OK");
        }
    }

    Ok(())
}
