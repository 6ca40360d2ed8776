use hangman::{run_game, AiPlayer, EngineConfig, GameEngine, GameStatus, Level};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 || args.len() > 4 {
        eprintln!("Usage: {} <seed> <games> [level]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: u32 = args[2].parse()?;
    let level = args.get(3).map(|l| Level::from_name(l)).unwrap_or_default();

    let mut engine = GameEngine::new(EngineConfig::new(level), SmallRng::seed_from_u64(seed));
    let words = engine.pool().words().to_vec();

    let (mut wins, mut losses, mut quits) = (0u32, 0u32, 0u32);
    let (mut points, mut hints) = (0u32, 0u32);
    for _ in 0..games {
        let mut state = engine.start(None);
        let mut ai = AiPlayer::with_candidates(&words);
        match run_game(&mut engine, &mut state, &mut ai) {
            GameStatus::Won => wins += 1,
            GameStatus::Lost => losses += 1,
            GameStatus::InProgress => quits += 1,
        }
        points += state.points();
        hints += u32::from(state.hints_used());
    }

    let result = json!({
        "seed": seed,
        "level": level.name(),
        "games": games,
        "wins": wins,
        "losses": losses,
        "abandoned": quits,
        "points": points,
        "hints_used": hints,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
