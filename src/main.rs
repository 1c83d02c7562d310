//! Game of Life CLI - Run a simulation from JSON configuration in the terminal.

use std::fs;
use std::num::ParseIntError;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use conway_life::{
    control::Simulation,
    schema::{Pattern, Seed, SimulationConfig},
};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <config.json> [generations]", args[0]);
        eprintln!();
        eprintln!("Run a Game of Life simulation from JSON configuration.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  config.json  Path to simulation configuration file");
        eprintln!("  generations  Number of generations (default: max_generations, else until extinct)");
        eprintln!();
        eprintln!("Example configuration is generated with --example flag.");
        std::process::exit(1);
    }

    if args[1] == "--example" {
        print_example_config();
        return;
    }

    let config_path = PathBuf::from(&args[1]);

    let config = SimulationConfig::from_json_file(&config_path).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });

    let generations = parse_generations(args.get(2).map(String::as_str)).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });

    // Load seed if present next to the config
    let seed_path = config_path.with_extension("seed.json");
    let seed: Seed = if seed_path.exists() {
        let seed_str = fs::read_to_string(&seed_path).unwrap_or_else(|e| {
            eprintln!("Error reading seed file: {}", e);
            std::process::exit(1);
        });
        serde_json::from_str(&seed_str).unwrap_or_else(|e| {
            eprintln!("Error parsing seed: {}", e);
            std::process::exit(1);
        })
    } else {
        Seed::default()
    };

    let mut sim = Simulation::with_seed(config, &seed).unwrap_or_else(|e| {
        eprintln!("Error creating simulation: {}", e);
        std::process::exit(1);
    });

    let interval = Duration::from_millis(sim.config().tick_interval_ms);
    let limit = generations.or(sim.config().max_generations);

    println!("Game of Life");
    println!("============");
    println!("Grid: {}x{}", sim.store().rows(), sim.store().cols());
    println!("Interval: {}ms", interval.as_millis());
    match limit {
        Some(n) => println!("Generations: {}", n),
        None => println!("Generations: until extinct"),
    }
    println!();
    print!("{}", sim.store().current());

    sim.start_pause();
    while sim.is_running() {
        if limit.is_some_and(|n| sim.generation() >= n) {
            break;
        }
        if sim.store().current().is_extinct() {
            log::info!("Population extinct at generation {}", sim.generation());
            break;
        }

        thread::sleep(interval);
        sim.tick();

        let stats = sim.stats();
        println!();
        println!("Generation {}: {} live", stats.generation, stats.live_cells);
        print!("{}", sim.store().current());
    }

    let stats = sim.stats();
    println!();
    println!(
        "Stopped after {} generations with {} live cells",
        stats.generation, stats.live_cells
    );
}

/// Parse the optional generation-count argument. Malformed input is an error.
fn parse_generations(arg: Option<&str>) -> Result<Option<u64>, String> {
    arg.map(|s| {
        s.parse()
            .map_err(|e: ParseIntError| format!("Invalid generation count '{}': {}", s, e))
    })
    .transpose()
}

fn print_example_config() {
    let config = SimulationConfig {
        max_generations: Some(20),
        ..Default::default()
    };
    let seed = Seed::new(Pattern::Glider { row: 1, col: 1 });

    println!("Example configuration (config.json):");
    println!(
        "{}",
        serde_json::to_string_pretty(&config).unwrap_or_default()
    );
    println!();
    println!("Example seed (config.seed.json):");
    println!("{}", serde_json::to_string_pretty(&seed).unwrap_or_default());
}
