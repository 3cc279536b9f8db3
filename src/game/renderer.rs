use std::time::Duration;

use crate::board::Player;
use crate::game::engine::Engine;

pub trait GameRenderer {
    fn render(&self, engine: &Engine, current_turn: Player);
    fn frame_delay(&self) -> Option<Duration>;
}

/// Human-facing board plus a prompt.
pub struct SimpleRenderer;

impl GameRenderer for SimpleRenderer {
    fn render(&self, engine: &Engine, current_turn: Player) {
        println!("{}\n", engine.board());
        println!("{} to move. Enter a cell (1-9 or a1-c3):", current_turn);
    }

    fn frame_delay(&self) -> Option<Duration> {
        None
    }
}

/// Board followed by the searcher's statistics, for computer turns.
pub struct StatsRenderer {
    pub delay_between_moves: Option<Duration>,
}

impl GameRenderer for StatsRenderer {
    fn render(&self, engine: &Engine, current_turn: Player) {
        println!("{}", format_state(engine, current_turn));
    }

    fn frame_delay(&self) -> Option<Duration> {
        self.delay_between_moves
    }
}

pub struct ConditionalRenderer {
    pub human_player: Player,
}

impl GameRenderer for ConditionalRenderer {
    fn render(&self, engine: &Engine, current_turn: Player) {
        if current_turn == self.human_player {
            SimpleRenderer.render(engine, current_turn);
        } else {
            StatsRenderer {
                delay_between_moves: None,
            }
            .render(engine, current_turn);
        }
    }

    fn frame_delay(&self) -> Option<Duration> {
        None
    }
}

fn format_state(engine: &Engine, current_turn: Player) -> String {
    let stats = engine.search_stats();
    format!(
        "{}\n* Last move: {}\n* Score: {}\n* Positions searched: {} (cache hits: {})\n* Move took: {}\n* {} to move\n*************",
        engine.board(),
        engine
            .last_move()
            .map_or("-".to_string(), |index| (index + 1).to_string()),
        engine
            .last_score()
            .map_or("-".to_string(), |score| score.to_string()),
        stats.positions_searched,
        stats.cache_hits,
        stats
            .last_search_duration
            .map_or("-".to_string(), |d| format!("{:?}", d)),
        current_turn,
    )
}
