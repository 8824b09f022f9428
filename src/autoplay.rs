use clap::ValueEnum;
use log::debug;
use model::{Game, Side};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Order in which sides are tried; also breaks ties.
const PREFERENCE: [Side; 4] = [Side::Left, Side::Down, Side::Right, Side::Up];

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum Strategy {
    /// First legal side in the fixed preference order
    Cycle,
    /// Uniformly random legal side
    Random,
    /// Legal side with the highest immediate score
    Greedy,
}

pub struct Chooser {
    strategy: Strategy,
    rng: StdRng,
}

impl Chooser {
    pub fn new(strategy: Strategy, seed: u64) -> Self {
        Self {
            strategy,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Picks the next side, or `None` when no swipe would change the field.
    pub fn choose<R: Rng>(&mut self, game: &Game<R>) -> Option<Side> {
        let legal = game.legal_sides();
        let ordered: Vec<Side> = PREFERENCE
            .iter()
            .copied()
            .filter(|side| legal.contains(side))
            .collect();
        match self.strategy {
            Strategy::Cycle => ordered.first().copied(),
            Strategy::Random => {
                if ordered.is_empty() {
                    None
                } else {
                    Some(ordered[self.rng.gen_range(0..ordered.len())])
                }
            }
            Strategy::Greedy => {
                let mut best: Option<(Side, u64)> = None;
                for side in ordered {
                    let score = game.field().swipe(side).score;
                    if best.map_or(true, |(_, top)| score > top) {
                        best = Some((side, score));
                    }
                }
                best.map(|(side, _)| side)
            }
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Summary {
    pub moves: usize,
    pub score: u64,
    pub best_tile: u64,
    pub won: bool,
    pub over: bool,
}

/// Plays until no move is left or `max_moves` swipes have changed the field.
pub fn play<R: Rng>(game: &mut Game<R>, chooser: &mut Chooser, max_moves: usize) -> Summary {
    while !game.is_over() && game.moves() < max_moves {
        let side = match chooser.choose(game) {
            Some(side) => side,
            None => break,
        };
        let turn = game.swipe(side);
        debug!("{}: {:?}\n{}", side, turn, game.field());
    }
    Summary {
        moves: game.moves(),
        score: game.score(),
        best_tile: game.field().max_value(),
        won: game.is_won(),
        over: game.is_over(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::{Field, GameConfig};
    use ndarray::arr2;

    fn game_on(values: ndarray::Array2<u64>) -> Game {
        let config = GameConfig {
            size: values.nrows(),
            ..GameConfig::default()
        };
        Game::with_field(Field::from_array(values), config, StdRng::seed_from_u64(5))
    }

    #[test]
    fn test_cycle_prefers_left() {
        let game = game_on(arr2(&[[0, 2], [0, 0]]));
        let mut chooser = Chooser::new(Strategy::Cycle, 0);
        assert_eq!(chooser.choose(&game), Some(Side::Left));

        let game = game_on(arr2(&[[2, 0], [0, 0]]));
        assert_eq!(chooser.choose(&game), Some(Side::Down));
    }

    #[test]
    fn test_greedy_takes_biggest_merge() {
        let game = game_on(arr2(&[[2, 2, 0], [8, 8, 0], [0, 0, 0]]));
        let mut chooser = Chooser::new(Strategy::Greedy, 0);
        assert_eq!(chooser.choose(&game), Some(Side::Left));

        let game = game_on(arr2(&[[2, 2, 4], [16, 0, 4], [16, 0, 0]]));
        assert_eq!(chooser.choose(&game), Some(Side::Down));
    }

    #[test]
    fn test_random_picks_legal_side() {
        let game = game_on(arr2(&[[2, 0], [0, 0]]));
        let mut chooser = Chooser::new(Strategy::Random, 3);
        for _ in 0..20 {
            let side = chooser.choose(&game).unwrap();
            assert!(side == Side::Down || side == Side::Right);
        }
    }

    #[test]
    fn test_locked_field_has_no_choice() {
        let game = game_on(arr2(&[[2, 4], [4, 2]]));
        for &strategy in [Strategy::Cycle, Strategy::Random, Strategy::Greedy].iter() {
            assert_eq!(Chooser::new(strategy, 1).choose(&game), None);
        }
    }

    #[test]
    fn test_play_runs_to_the_end() {
        for &strategy in [Strategy::Cycle, Strategy::Random, Strategy::Greedy].iter() {
            let mut game = Game::seeded(GameConfig::default(), 17);
            let summary = play(&mut game, &mut Chooser::new(strategy, 17), 100_000);
            assert!(summary.over);
            assert!(summary.moves > 0);
            assert_eq!(summary.best_tile, game.field().max_value());
            assert_eq!(summary.score, game.score());
        }
    }

    #[test]
    fn test_play_respects_move_cap() {
        let mut game = Game::seeded(GameConfig::default(), 2);
        let summary = play(&mut game, &mut Chooser::new(Strategy::Greedy, 2), 10);
        assert_eq!(summary.moves, 10);
        assert!(!summary.over);
    }

    #[test]
    fn test_play_is_reproducible() {
        let run = || {
            let mut game = Game::seeded(GameConfig::default(), 99);
            play(&mut game, &mut Chooser::new(Strategy::Random, 99), 500)
        };
        assert_eq!(run(), run());
    }
}
