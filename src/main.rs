use clap::{Args, Parser, Subcommand, ValueEnum};
use hangman::{
    init_logging, print_game_view, run_game, AiPlayer, CliPlayer, EngineConfig, GameEngine,
    GameState, GameStatus, Level, BASIC_WORDS, INTERMEDIATE_PHRASES, MAX_LIVES,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum LevelArg {
    Basic,
    Intermediate,
}

impl From<LevelArg> for Level {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::Basic => Level::Basic,
            LevelArg::Intermediate => Level::Intermediate,
        }
    }
}

#[derive(Args, Debug)]
struct GameArgs {
    #[arg(long, value_enum, default_value_t = LevelArg::Basic)]
    level: LevelArg,
    #[arg(long, default_value_t = MAX_LIVES, help = "Lives at the start of the game")]
    lives: u8,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Play this answer instead of a random one")]
    answer: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game at the terminal.
    Play(GameArgs),
    /// Watch the built-in AI play a game.
    Auto(GameArgs),
}

fn build_engine(args: &GameArgs) -> anyhow::Result<GameEngine<SmallRng>> {
    let config = EngineConfig::new(args.level.into())
        .with_lives(args.lives)
        .map_err(|e| anyhow::anyhow!(e))?;
    if let Some(s) = args.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let rng = match args.seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };
    Ok(GameEngine::new(config, rng))
}

fn print_result(state: &GameState, status: GameStatus) {
    println!("\n════════════════════════════════════════");
    print_game_view(state);
    match status {
        GameStatus::Won => {
            println!("\n🎉 SOLVED! The answer was {}.", state.answer());
            println!("Points: {}", state.points());
        }
        GameStatus::Lost => println!("\n💀 HANGED. The answer was {}.", state.answer()),
        GameStatus::InProgress => println!("\nGame abandoned. The answer was {}.", state.answer()),
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => {
            let mut engine = build_engine(&args)?;
            let mut state = engine.start(args.answer.as_deref());
            println!("Starting a {} game with {} lives.", engine.config().level(), state.lives());
            let mut player = CliPlayer::new();
            let status = run_game(&mut engine, &mut state, &mut player);
            print_result(&state, status);
        }
        Commands::Auto(args) => {
            let mut engine = build_engine(&args)?;
            let mut state = engine.start(args.answer.as_deref());
            let words = match engine.config().level() {
                Level::Basic => BASIC_WORDS,
                Level::Intermediate => INTERMEDIATE_PHRASES,
            };
            let mut ai = AiPlayer::with_candidates(words);
            println!("AI playing a {} game with {} lives...", engine.config().level(), state.lives());
            let status = run_game(&mut engine, &mut state, &mut ai);
            print_result(&state, status);
        }
    }
    Ok(())
}
