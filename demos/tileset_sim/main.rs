//! Tileset simulation utility.
//!
//! Provides two subcommands:
//! - `validate`: build the tile catalog from a tileset file and report every
//!   degraded tile type.
//! - `simulate`: place tiles on a grid, replay a signal schedule and print the
//!   frame of every tile after each tick.
//!
//! # Usage Examples
//!
//! ```bash
//! # Check a tileset
//! cargo run --example tileset_sim -- validate demos/data/fryline_tiles.json
//!
//! # Run the bundled schedule with 25ms ticks
//! cargo run --example tileset_sim -- simulate demos/data/fryline_tiles.json -c demos/data/sim.toml --tick-ms 25
//! ```
//!
//! Every key of the schedule file can also be set through a `FRYLINE_`
//! environment variable, e.g. `FRYLINE_TICKS=100`.

use std::{
	fs,
	path::{Path, PathBuf},
	time::Duration,
};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use fryline_rs::prelude::*;
use log::{debug, info, warn};
use serde::Deserialize;

fn main() -> Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	match cli.command {
		Command::Validate(opts) => run_validate(&opts),
		Command::Simulate(opts) => run_simulate(&opts),
	}
}

#[derive(Parser)]
#[command(name = "tileset_sim")]
#[command(author = "fryline-rs project")]
#[command(version)]
#[command(about = "Validate tilesets and simulate tile animations", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Build the tile catalog and report diagnostics
	Validate(ValidateArgs),
	/// Replay a signal schedule and print the rendered frames
	Simulate(SimulateArgs),
}

#[derive(Args)]
struct ValidateArgs {
	/// Tileset JSON file
	#[arg(value_name = "TILESET")]
	tileset: PathBuf,

	/// Fail on malformed animation payloads instead of degrading them
	#[arg(long, default_value_t = false)]
	strict: bool,

	/// Print every tile type, not only the degraded ones
	#[arg(short, long, default_value_t = false)]
	verbose: bool,
}

#[derive(Args)]
struct SimulateArgs {
	/// Tileset JSON file
	#[arg(value_name = "TILESET")]
	tileset: PathBuf,

	/// Schedule file (TOML)
	#[arg(short, long, value_name = "FILE", default_value = "demos/data/sim.toml")]
	config: PathBuf,

	/// Override the tick length in milliseconds
	#[arg(long, value_name = "MS")]
	tick_ms: Option<u64>,

	/// Override the number of ticks
	#[arg(long, value_name = "COUNT")]
	ticks: Option<u32>,
}

/// Simulation schedule
#[derive(Debug, Deserialize)]
struct SimConfig {
	#[serde(default = "default_tick_ms")]
	tick_ms: u64,
	#[serde(default = "default_ticks")]
	ticks: u32,
	#[serde(default)]
	parity_rule: ParityRule,
	#[serde(default)]
	strict: bool,
	#[serde(default)]
	placements: Vec<Placement>,
	#[serde(default)]
	signals: Vec<SignalEvent>,
}

fn default_tick_ms() -> u64 {
	50
}

fn default_ticks() -> u32 {
	20
}

#[derive(Debug, Deserialize)]
struct Placement {
	type_id: String,
	x: i32,
	y: i32,
	#[serde(default)]
	on: bool,
}

/// Logical signal delivered to `placements[placement]` at tick `tick`
#[derive(Debug, Deserialize)]
struct SignalEvent {
	tick: u32,
	placement: usize,
	on: bool,
}

fn load_tileset(path: &Path) -> Result<RawTileset> {
	let text = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
	serde_json::from_str(&text).with_context(|| format!("Failed to parse tileset {}", path.display()))
}

fn load_sim_config(opts: &SimulateArgs) -> Result<SimConfig> {
	let settings = config::Config::builder()
		.add_source(config::File::from(opts.config.as_path()))
		.add_source(config::Environment::with_prefix("FRYLINE"))
		.set_override_option("tick_ms", opts.tick_ms)?
		.set_override_option("ticks", opts.ticks)?
		.build()
		.with_context(|| format!("Failed to load schedule {}", opts.config.display()))?;

	let sim: SimConfig = settings.try_deserialize().context("Invalid schedule")?;
	if sim.tick_ms == 0 {
		bail!("tick_ms must be positive");
	}
	Ok(sim)
}

fn run_validate(opts: &ValidateArgs) -> Result<()> {
	let tileset = load_tileset(&opts.tileset)?;
	let config = if opts.strict {
		BuildConfig::strict()
	} else {
		BuildConfig::lenient()
	};

	let catalog = Catalog::build_with_config(&tileset, &config)
		.with_context(|| format!("Tileset {} rejected", opts.tileset.display()))?;

	info!("{}: {} tile types, {} frames", opts.tileset.display(), catalog.len(), catalog.frames().count());

	if opts.verbose {
		for (key, definition) in catalog.iter() {
			let parities: Vec<_> = definition.parity_variants().keys().map(|parity| parity.as_str()).collect();
			println!(
				"{:>3} {:<12} base {:>3}  {:<14} variants [{}]",
				key.index(),
				definition.type_id(),
				definition.base_frame(),
				definition.animation().kind(),
				parities.join(", ")
			);
		}
	}

	for diagnostic in catalog.diagnostics() {
		println!("  degraded: {diagnostic}");
	}

	if catalog.diagnostics().is_empty() {
		println!("OK");
	} else {
		println!("{} diagnostics", catalog.diagnostics().len());
	}
	Ok(())
}

fn run_simulate(opts: &SimulateArgs) -> Result<()> {
	let tileset = load_tileset(&opts.tileset)?;
	let sim = load_sim_config(opts)?;
	debug!("Loaded schedule: {sim:?}");

	let config = BuildConfig::new(sim.parity_rule, sim.strict);
	let catalog = Catalog::build_with_config(&tileset, &config)
		.with_context(|| format!("Tileset {} rejected", opts.tileset.display()))?;

	let mut grid = TileGrid::new();
	let mut ids = Vec::with_capacity(sim.placements.len());
	for placement in &sim.placements {
		let position = GridPos::new(placement.x, placement.y);
		let id = grid
			.place(&catalog, &placement.type_id, position, placement.on)
			.with_context(|| format!("Cannot place tile at {position}"))?;
		ids.push(id);
	}

	for event in &sim.signals {
		if event.placement >= ids.len() {
			warn!("Signal at tick {} targets missing placement {}", event.tick, event.placement);
		}
	}

	let dt = Duration::from_millis(sim.tick_ms);
	print_frames(&grid, &catalog, 0, Duration::ZERO);

	for tick in 1..=sim.ticks {
		let signals = sim
			.signals
			.iter()
			.filter(|event| event.tick == tick)
			.filter_map(|event| ids.get(event.placement).map(|&id| (id, event.on)));

		let report = grid.tick(&catalog, dt, signals);
		debug!("Tick {tick}: {report}");
		print_frames(&grid, &catalog, tick, dt * tick);
	}

	Ok(())
}

fn print_frames(grid: &TileGrid, catalog: &Catalog, tick: u32, time: Duration) {
	let cells: Vec<String> = grid
		.iter()
		.map(|(_, instance)| {
			let name = catalog
				.declared(instance.type_ref())
				.map_or("?", |definition| definition.type_id().as_str());
			format!("{name}{}={:<2} {:<14}", instance.position(), instance.current_frame(), instance.phase())
		})
		.collect();

	println!("{tick:>4} {:>6}ms  {}", time.as_millis(), cells.join(" "));
}
