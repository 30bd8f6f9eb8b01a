use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use crafting_character::{Character, CharacterConfig, HeadlessHost};
use crafting_common::{CommonType, Rotator, Transform};
use crafting_input::{InputBindings, KeyEvent};
use crafting_inventory::Pickup;
use crafting_kernel::World;
use crafting_tools::InventoryInspector;
use glam::Vec3;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "crafting-cli", about = "CLI tool for the crafting character")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Character config file (YAML); defaults apply when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Walk through a row of pickups, then open the inventory and switch panels
    Demo {
        /// Maximum number of frames to simulate after opening the inventory
        #[arg(short, long, default_value = "120")]
        ticks: u32,
        /// Frame time in seconds
        #[arg(long, default_value = "0.016666668")]
        dt: f32,
        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the effective character config as YAML
    Config,
    /// List the input binding names
    Bindings,
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<CharacterConfig> {
    match path {
        Some(path) => CharacterConfig::load(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(CharacterConfig::default()),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Commands::Info => {
            let character = Character::new(config, Transform::default());
            println!("crafting-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("kernel: tick={}", World::new().tick());
            println!("common types: {}", CommonType::ALL.len());
            println!(
                "ui: panel={} speed={}",
                character.active_panel(),
                character.config().ui_speed
            );
            println!(
                "input: axes={} buttons={}",
                InputBindings::default().axis_names().count(),
                InputBindings::default().button_names().count()
            );
        }
        Commands::Demo { ticks, dt, json } => {
            run_demo(config, ticks, dt, json)?;
        }
        Commands::Config => {
            print!("{}", config.to_yaml_string()?);
        }
        Commands::Bindings => {
            let bindings = InputBindings::default();
            for name in bindings.axis_names() {
                println!("axis   {name}");
            }
            for name in bindings.button_names() {
                println!("button {name}");
            }
        }
    }

    Ok(())
}

fn run_demo(config: CharacterConfig, ticks: u32, dt: f32, json: bool) -> anyhow::Result<()> {
    let mut world = World::new();
    let row = [
        Pickup::new(CommonType::Scrap),
        Pickup::new(CommonType::Scrap),
        Pickup::new(CommonType::Electrics).with_name("Copper Wiring"),
        Pickup::new(CommonType::Chemicals).rare(),
        Pickup::new(CommonType::Scrap),
    ];
    for (i, pickup) in row.into_iter().enumerate() {
        let x = 150.0 * (i as f32 + 1.0);
        world.spawn_pickup(Transform::from_position(Vec3::new(x, 0.0, 0.0)), pickup);
    }
    tracing::info!(pickups = world.pickup_count(), "scene ready");

    let mut host = HeadlessHost::default();
    let mut character = Character::new(config, Transform::default());
    let bindings = InputBindings::default();

    // Walk along +X until every pickup is collected.
    let mut x = 0.0;
    while world.pickup_count() > 0 && x <= 1000.0 {
        character.set_transform(Transform::from_position(Vec3::new(x, 0.0, 0.0)));
        character.pick_up_overlapping(&mut world);
        world.step(dt);
        x += 25.0;
    }

    // Turn to face back along the row; the host reports the new control rotation.
    character.handle_action(bindings.axis("Turn", 180.0)?, &mut host);
    character.set_control_rotation(Rotator::new(host.pitch, host.yaw, 0.0));

    if let Some(action) = bindings.button("Inventory", KeyEvent::Pressed)? {
        character.handle_action(action, &mut host);
    }
    character.switch_to_recipe_list();

    let mut frames = 0;
    while frames < ticks {
        character.tick(dt, &host);
        world.step(dt);
        frames += 1;
        if !character.rotation().is_animating() {
            break;
        }
    }
    tracing::info!(frames, world_tick = world.tick(), "demo finished");

    let summary = InventoryInspector::summary(&character);
    let entries = InventoryInspector::list_entries(character.ledger());
    if json {
        let out = serde_json::json!({
            "summary": summary,
            "entries": entries,
            "frames": frames,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{summary}");
        for entry in &entries {
            println!("  {entry}");
        }
        println!("frames: {frames}");
    }

    Ok(())
}
