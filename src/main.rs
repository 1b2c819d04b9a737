use std::path::PathBuf;
use std::process;

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use portolan::{render, Map, MapConfig};

#[derive(Parser, Debug)]
#[command(name = "portolan")]
#[command(about = "Generate a settlement map and price trade routes across it")]
struct Args {
    /// Random seed (uses a random seed if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of settlements to place
    #[arg(short, long, default_value = "25")]
    cities: usize,

    /// JSON config overriding the default tunables
    #[arg(long)]
    config: Option<PathBuf>,

    /// Price a route between two settlements, e.g. --cost "Denver,Boston"
    #[arg(long)]
    cost: Option<String>,

    /// Width of the ASCII chart
    #[arg(long, default_value = "80")]
    width: usize,

    /// Height of the ASCII chart
    #[arg(long, default_value = "50")]
    height: usize,

    /// Skip the ASCII chart
    #[arg(long)]
    no_render: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match MapConfig::from_json_file(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("failed to load {}: {err}", path.display());
                process::exit(1);
            }
        },
        None => MapConfig::default(),
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    println!("Seed: {seed}");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut map = Map::new(config);
    if let Err(err) = map.generate(args.cities, &mut rng) {
        eprintln!("map generation failed: {err}");
        process::exit(1);
    }

    if !args.no_render {
        println!("{}", render::render(&map, args.width, args.height));
        println!();
    }
    println!("{}", render::city_report(&map));
    println!();
    println!("{}", render::water_report(&map));

    if let Some(query) = &args.cost {
        let Some((from, to)) = query.split_once(',') else {
            eprintln!("--cost expects \"From,To\"");
            process::exit(1);
        };
        let (from, to) = (from.trim(), to.trim());
        match map.transport_cost(from, to) {
            Ok(cost) => println!("\nTransport {from} -> {to}: {cost:.4}"),
            Err(err) => {
                eprintln!("{err}");
                process::exit(1);
            }
        }
    }
}
