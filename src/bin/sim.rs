use battleship_hunter::stats::run_games;
use battleship_hunter::{HunterConfig, HuntingKind, TargetingKind};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [games]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: usize = match args.get(2) {
        Some(n) => n.parse()?,
        None => 100,
    };

    let mut results = serde_json::Map::new();
    for targeting in [
        TargetingKind::Adjacency,
        TargetingKind::FitAware,
        TargetingKind::Directional,
    ] {
        for hunting in [HuntingKind::Checkerboard, HuntingKind::Clusters] {
            let config = HunterConfig::new(hunting, targeting);
            let report = run_games(config, games, seed)?.report();
            let key = format!("{:?}/{:?}", targeting, hunting);
            results.insert(key, serde_json::to_value(report)?);
        }
    }

    let result = json!({
        "seed": seed,
        "games": games,
        "results": results,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
