use std::io::Cursor;

use hangman::{
    run_game, Action, AiPlayer, CliPlayer, EngineConfig, GameEngine, GameState, GameStatus,
    GuessOutcome, Level, Player, BASIC_WORDS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn engine(seed: u64) -> GameEngine<SmallRng> {
    GameEngine::new(EngineConfig::new(Level::Basic), SmallRng::seed_from_u64(seed))
}

/// Replays a fixed list of actions and records every outcome it is told about.
struct ScriptedPlayer {
    actions: Vec<Action>,
    outcomes: Vec<GuessOutcome>,
    hints: Vec<Option<char>>,
}

impl ScriptedPlayer {
    fn new(actions: Vec<Action>) -> Self {
        Self {
            actions: actions.into_iter().rev().collect(),
            outcomes: Vec::new(),
            hints: Vec::new(),
        }
    }
}

impl Player for ScriptedPlayer {
    fn next_action(&mut self, _state: &GameState) -> Action {
        self.actions.pop().unwrap_or(Action::Quit)
    }

    fn handle_outcome(&mut self, _guess: &str, outcome: GuessOutcome, _state: &GameState) {
        self.outcomes.push(outcome);
    }

    fn handle_hint(&mut self, revealed: Option<char>, _state: &GameState) {
        self.hints.push(revealed);
    }
}

fn guess(letter: &str) -> Action {
    Action::Guess(letter.to_string())
}

#[test]
fn test_scripted_game_reports_outcomes() {
    let mut engine = engine(1);
    let mut state = engine.start(Some("hi"));
    let mut player = ScriptedPlayer::new(vec![guess("h"), guess("h"), guess("9"), guess("z"), guess("i")]);
    let status = run_game(&mut engine, &mut state, &mut player);
    assert_eq!(status, GameStatus::Won);
    assert_eq!(
        player.outcomes,
        vec![
            GuessOutcome::Correct,
            GuessOutcome::AlreadyGuessed,
            GuessOutcome::Invalid,
            GuessOutcome::Wrong,
            GuessOutcome::Solved,
        ]
    );
    assert_eq!(state.points(), 1);
}

#[test]
fn test_quit_leaves_game_in_progress() {
    let mut engine = engine(2);
    let mut state = engine.start(Some("apple"));
    let mut player = ScriptedPlayer::new(vec![guess("a"), Action::Quit, guess("p")]);
    let status = run_game(&mut engine, &mut state, &mut player);
    assert_eq!(status, GameStatus::InProgress);
    assert_eq!(state.masked_answer(), "A____");
}

#[test]
fn test_hint_results_reach_player() {
    let config = EngineConfig::default().with_lives(2).unwrap();
    let mut engine = GameEngine::new(config, SmallRng::seed_from_u64(3));
    let mut state = engine.start(Some("apple"));
    let mut player = ScriptedPlayer::new(vec![Action::Hint, Action::Hint]);
    run_game(&mut engine, &mut state, &mut player);
    assert_eq!(player.hints.len(), 2);
    assert!(player.hints[0].is_some());
    assert_eq!(player.hints[1], None);
}

#[test]
fn test_ai_solves_known_candidate_without_mistakes() {
    let mut engine = engine(4);
    let mut state = engine.start(Some("apple"));
    let mut ai = AiPlayer::with_candidates(&["kiwi", "apple", "banana"]);
    let status = run_game(&mut engine, &mut state, &mut ai);
    assert_eq!(status, GameStatus::Won);
    assert!(state.wrong_letters().is_empty());
    assert_eq!(state.lives(), 7);
    assert_eq!(state.points(), 1);
}

#[test]
fn test_ai_frequency_order_without_hints() {
    let mut engine = engine(5);
    let mut state = engine.start(Some("hi"));
    let mut ai = AiPlayer::new().without_hints();
    let status = run_game(&mut engine, &mut state, &mut ai);
    assert_eq!(status, GameStatus::Won);
    assert_eq!(state.wrong_letters(), &['E', 'T', 'A', 'O', 'N', 'S']);
    assert_eq!(state.lives(), 1);
    assert_eq!(state.hints_used(), 0);
}

#[test]
fn test_ai_asks_for_hint_when_low() {
    let mut ai = AiPlayer::new();
    let state = GameState::new("apple", 3);
    assert_eq!(ai.next_action(&state), Action::Hint);
    let state = GameState::new("apple", 4);
    assert!(matches!(ai.next_action(&state), Action::Guess(_)));
}

#[test]
fn test_ai_always_finishes_basic_games() {
    let mut engine = engine(6);
    for _ in 0..25 {
        let mut state = engine.start(None);
        let mut ai = AiPlayer::with_candidates(BASIC_WORDS);
        let status = run_game(&mut engine, &mut state, &mut ai);
        assert_ne!(status, GameStatus::InProgress);
    }
}

#[test]
fn test_ai_wins_always_score() {
    let mut engine = engine(11);
    let mut wins = 0;
    for _ in 0..200 {
        let mut state = engine.start(None);
        let mut ai = AiPlayer::new();
        if run_game(&mut engine, &mut state, &mut ai) == GameStatus::Won {
            wins += 1;
            assert_eq!(state.points(), 1, "won {} without a point", state.answer());
        }
    }
    assert!(wins > 0);
}

#[test]
fn test_cli_player_reads_commands() {
    let input = "help\n\n7\nh\nhint\nquit\n";
    let mut player = CliPlayer::from_reader(Box::new(Cursor::new(input.as_bytes().to_vec())));
    let state = GameState::new("hi", 7);
    assert_eq!(player.next_action(&state), Action::Guess("h".to_string()));
    assert_eq!(player.next_action(&state), Action::Hint);
    assert_eq!(player.next_action(&state), Action::Quit);
    // end of input quits
    assert_eq!(player.next_action(&state), Action::Quit);
}

#[test]
fn test_cli_player_plays_to_the_end() {
    let mut engine = engine(7);
    let mut state = engine.start(Some("hi"));
    let input = "h\ni\n";
    let mut player = CliPlayer::from_reader(Box::new(Cursor::new(input.as_bytes().to_vec())));
    let status = run_game(&mut engine, &mut state, &mut player);
    assert_eq!(status, GameStatus::Won);
}
