use crate::config::GameConfig;
use crate::field::{Field, Side};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// What a single swipe did to the game.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Turn {
    pub moved: bool,
    pub score_delta: u64,
    /// The win value appeared for the first time in this game.
    pub just_won: bool,
    pub over: bool,
}

pub struct Game<R = StdRng> {
    config: GameConfig,
    field: Field,
    score: u64,
    best_score: u64,
    won: bool,
    over: bool,
    moves: usize,
    rng: R,
}

impl Game<StdRng> {
    pub fn seeded(config: GameConfig, seed: u64) -> Self {
        Self::new(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    /// Starts a game on a fresh field with `config.start_tiles` tiles.
    pub fn new(config: GameConfig, rng: R) -> Self {
        let mut game = Self::with_field(Field::new(config.size), config, rng);
        game.reset();
        game
    }

    /// Continues play from an existing field. Panics on an invalid config.
    pub fn with_field(field: Field, config: GameConfig, rng: R) -> Self {
        if let Err(e) = config.validate() {
            panic!("invalid game config: {}", e);
        }
        assert_eq!(
            field.size(),
            config.size,
            "field size does not match configured size"
        );
        let won = field.has_reached(u64::from(config.win_value));
        let over = !field.has_legal_move();
        Self {
            config,
            field,
            score: 0,
            best_score: 0,
            won,
            over,
            moves: 0,
            rng,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
    pub fn field(&self) -> &Field {
        &self.field
    }
    pub fn score(&self) -> u64 {
        self.score
    }
    /// Highest score reached by this instance, surviving `reset`.
    pub fn best_score(&self) -> u64 {
        self.best_score
    }
    pub fn is_won(&self) -> bool {
        self.won
    }
    pub fn is_over(&self) -> bool {
        self.over
    }
    /// Number of swipes that changed the field.
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Sides a swipe toward which would change the field.
    pub fn legal_sides(&self) -> Vec<Side> {
        Side::ALL
            .iter()
            .copied()
            .filter(|&side| self.field.swipe(side).moved)
            .collect()
    }

    pub fn reset(&mut self) {
        let mut field = Field::new(self.config.size);
        for _ in 0..self.config.start_tiles {
            field.append_tile(&mut self.rng, self.config.four_probability);
        }
        self.won = field.has_reached(u64::from(self.config.win_value));
        self.over = !field.has_legal_move();
        self.field = field;
        self.score = 0;
        self.moves = 0;
        info!(
            "new {0}x{0} game, playing to {1}",
            self.config.size, self.config.win_value
        );
    }

    pub fn swipe(&mut self, side: Side) -> Turn {
        if self.over {
            return Turn {
                over: true,
                ..Turn::default()
            };
        }
        let swipe = self.field.swipe(side);
        if !swipe.moved {
            debug!("swipe {} changed nothing", side);
            return Turn::default();
        }
        let mut field = swipe.field;
        field.append_tile(&mut self.rng, self.config.four_probability);
        self.field = field;
        self.score += swipe.score;
        self.best_score = self.best_score.max(self.score);
        self.moves += 1;
        debug!(
            "swipe {}: +{} points, score {}, move {}",
            side, swipe.score, self.score, self.moves
        );

        let just_won =
            !self.won && self.field.has_reached(u64::from(self.config.win_value));
        if just_won {
            self.won = true;
            info!(
                "reached {} after {} moves, score {}",
                self.config.win_value, self.moves, self.score
            );
        }
        self.over = !self.field.has_legal_move();
        if self.over {
            info!(
                "no moves left after {} moves, final score {}",
                self.moves, self.score
            );
        }
        Turn {
            moved: true,
            score_delta: swipe.score,
            just_won,
            over: self.over,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr2;

    fn small_config() -> GameConfig {
        GameConfig {
            size: 2,
            four_probability: 0.0,
            ..GameConfig::default()
        }
    }

    fn game_on(values: ndarray::Array2<u64>, config: GameConfig) -> Game {
        Game::with_field(Field::from_array(values), config, StdRng::seed_from_u64(9))
    }

    #[test]
    fn test_new_game_spawns_start_tiles() {
        let game = Game::seeded(GameConfig::default(), 1);
        assert_eq!(game.field().size(), 4);
        assert_eq!(game.field().tiles().count(), 2);
        assert!(game.field().tiles().all(|t| t.is_new()));
        assert_eq!(game.score(), 0);
        assert_eq!(game.moves(), 0);
        assert!(!game.is_over());
        assert!(!game.is_won());
    }

    #[test]
    fn test_seeded_games_are_reproducible() {
        let play = |seed| {
            let mut game = Game::seeded(GameConfig::default(), seed);
            for &side in [Side::Left, Side::Up, Side::Right, Side::Down].iter().cycle().take(40) {
                game.swipe(side);
            }
            (game.field().to_array(), game.score())
        };
        assert_eq!(play(11), play(11));
    }

    #[test]
    fn test_unmoved_swipe_spawns_nothing() {
        let mut game = game_on(arr2(&[[2, 0], [0, 0]]), small_config());
        let turn = game.swipe(Side::Left);
        assert_eq!(turn, Turn::default());
        assert_eq!(game.field().to_array(), arr2(&[[2, 0], [0, 0]]));
        assert_eq!(game.moves(), 0);
    }

    #[test]
    fn test_moved_swipe_spawns_and_scores() {
        let mut game = game_on(arr2(&[[2, 2], [4, 4]]), small_config());
        let turn = game.swipe(Side::Left);
        assert!(turn.moved);
        assert_eq!(turn.score_delta, 12);
        assert_eq!(game.score(), 12);
        assert_eq!(game.best_score(), 12);
        assert_eq!(game.moves(), 1);
        assert_eq!(game.field().tiles().count(), 3);
        assert_eq!(game.field().tiles().filter(|t| t.is_new()).count(), 1);
        assert_eq!(game.field().tiles().filter(|t| t.is_merged()).count(), 2);
    }

    #[test]
    fn test_win_is_reported_once() {
        let config = GameConfig {
            win_value: 8,
            ..GameConfig::default()
        };
        let mut game = game_on(
            arr2(&[[4, 4, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]),
            config,
        );
        let turn = game.swipe(Side::Left);
        assert!(turn.just_won);
        assert!(game.is_won());
        assert!(!turn.over);

        let side = game.legal_sides()[0];
        let turn = game.swipe(side);
        assert!(turn.moved);
        assert!(!turn.just_won);
        assert!(game.is_won());
    }

    #[test]
    fn test_game_over_stops_play() {
        let mut game = game_on(arr2(&[[2, 0], [4, 8]]), small_config());
        let turn = game.swipe(Side::Up);
        assert!(turn.moved);
        assert!(turn.over);
        assert!(game.is_over());
        assert_eq!(game.field().to_array(), arr2(&[[2, 8], [4, 2]]));
        assert!(game.legal_sides().is_empty());

        let before = game.field().clone();
        let turn = game.swipe(Side::Down);
        assert!(!turn.moved);
        assert!(turn.over);
        assert_eq!(game.field(), &before);
    }

    #[test]
    fn test_reset_keeps_best_score() {
        let mut game = game_on(arr2(&[[2, 2], [4, 4]]), small_config());
        game.swipe(Side::Left);
        game.reset();
        assert_eq!(game.score(), 0);
        assert_eq!(game.best_score(), 12);
        assert_eq!(game.moves(), 0);
        assert!(!game.is_won());
        assert_eq!(game.field().tiles().count(), 2);
    }

    #[test]
    fn test_legal_sides() {
        let game = game_on(arr2(&[[2, 0], [0, 0]]), small_config());
        let mut sides = game.legal_sides();
        sides.sort_by_key(|side| side.to_string());
        assert_eq!(sides, vec![Side::Down, Side::Right]);
    }

    #[test]
    #[should_panic(expected = "invalid game config")]
    fn test_new_rejects_invalid_config() {
        let config = GameConfig {
            four_probability: 1.5,
            ..GameConfig::default()
        };
        Game::seeded(config, 1);
    }

    #[test]
    fn test_score_beyond_u32_range() {
        let big = 1u64 << 31;
        let config = GameConfig {
            size: 2,
            win_value: 1 << 31,
            ..GameConfig::default()
        };
        let mut game = game_on(arr2(&[[big, big], [0, 0]]), config);
        assert!(game.is_won());
        let turn = game.swipe(Side::Left);
        assert_eq!(turn.score_delta, 1 << 32);
        assert_eq!(game.score(), 1 << 32);
        assert!(!turn.just_won);
    }

    #[test]
    #[should_panic(expected = "does not match")]
    fn test_with_field_rejects_size_mismatch() {
        game_on(arr2(&[[2, 0], [0, 0]]), GameConfig::default());
    }
}
