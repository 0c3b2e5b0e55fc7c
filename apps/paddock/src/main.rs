//! paddock: sheep try to slip out of a walled paddock while dogs patrol.
//!
//! Every sheep and dog runs on its own thread; the main thread redraws the
//! grid until the first sheep reaches a gate.
//!
//! ```text
//! paddock --width 20 --height 14 --sheep 3 --dogs 4
//! paddock --no-render --max-ticks 500 --json
//! RUST_LOG=sd_sim=debug paddock --seed 7
//! ```

mod render;

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use sd_core::{EnclosureConfig, SimConfig};
use sd_sim::{NoopObserver, SimBuilder};
use tracing::info;
use tracing_subscriber::EnvFilter;

use render::TerminalRenderer;

const DEFAULT_LOG_FILTER: &str = "paddock=info,sd_sim=info,sd_grid=info";

#[derive(Parser, Debug)]
#[command(name = "paddock")]
#[command(about = "Concurrent sheep-and-dogs enclosure simulation")]
struct Args {
    /// Grid width in cells, borders included (a multiple of 3 plus 2)
    #[arg(long, default_value_t = 20)]
    width: i32,

    /// Grid height in cells, borders included (a multiple of 3 plus 2)
    #[arg(long, default_value_t = 14)]
    height: i32,

    /// Sheep placed at random in the inner zone
    #[arg(long, default_value_t = 3)]
    sheep: usize,

    /// Dogs placed at random outside the inner zone
    #[arg(long, default_value_t = 4)]
    dogs: usize,

    /// Placement and agent RNG seed (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds each agent sleeps between moves
    #[arg(long, default_value_t = 200)]
    tick_ms: u64,

    /// Milliseconds between redraws
    #[arg(long, default_value_t = 200)]
    frame_ms: u64,

    /// Stop every agent after this many ticks even if no sheep escaped
    #[arg(long)]
    max_ticks: Option<u64>,

    /// Skip the terminal display; log only
    #[arg(long)]
    no_render: bool,

    /// Print the final report as JSON on stdout
    #[arg(long)]
    json: bool,
}

impl Args {
    fn enclosure_config(&self, seed: u64) -> EnclosureConfig {
        EnclosureConfig {
            width:  self.width,
            height: self.height,
            sheep:  self.sheep,
            dogs:   self.dogs,
            seed,
        }
    }

    fn sim_config(&self) -> SimConfig {
        SimConfig {
            tick_interval:  Duration::from_millis(self.tick_ms),
            frame_interval: Duration::from_millis(self.frame_ms),
            tick_limit:     self.max_ticks,
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, "paddock starting");

    let mut sim = SimBuilder::new(args.enclosure_config(seed), args.sim_config())
        .build()
        .context("invalid paddock configuration")?;

    let report = if args.no_render {
        sim.run(&mut NoopObserver)?
    } else {
        let mut renderer = TerminalRenderer::new(io::stdout().lock());
        let report = sim.run(&mut renderer)?;
        renderer.finish().context("writing to the terminal")?;
        report
    };

    if report.panicked_agents > 0 {
        tracing::warn!(count = report.panicked_agents, "some agent threads panicked");
    }
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if args.no_render {
        match &report.winner {
            Some(escape) => println!("{escape}"),
            None => println!("no sheep escaped within the tick limit"),
        }
    }
    Ok(())
}
