//! Aggregated session state shown by the HUD.
//!
//! Mutated only through the registration and report calls below; the engine
//! is the sole owner.

use tracing::info;

use skyfire_core::config::RulesConfig;
use skyfire_core::enums::GameStatus;
use skyfire_core::state::GameStateView;

#[derive(Debug, Clone)]
pub struct GameState {
    rules: RulesConfig,
    score: i64,
    adversary_count: u32,
    player_health: i32,
    status: GameStatus,
}

impl GameState {
    pub fn new(rules: RulesConfig) -> Self {
        let player_health = rules.max_health;
        Self {
            rules,
            score: 0,
            adversary_count: 0,
            player_health,
            status: GameStatus::Playing,
        }
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn adversary_count(&self) -> u32 {
        self.adversary_count
    }

    pub fn player_health(&self) -> i32 {
        self.player_health
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn register_adversary(&mut self) {
        self.adversary_count += 1;
    }

    pub fn unregister_adversary(&mut self) {
        self.adversary_count = self.adversary_count.saturating_sub(1);
    }

    /// Credit a destroyed adversary. Reaching the victory score ends the session.
    pub fn report_hit(&mut self, score_delta: i64) {
        if self.status.is_terminal() {
            return;
        }
        self.score += score_delta;
        if self.score >= self.rules.victory_score {
            self.set_status(GameStatus::Victory);
        }
    }

    /// Apply collision damage. Running out of health ends the session.
    pub fn report_collision(&mut self) {
        if self.status.is_terminal() {
            return;
        }
        self.player_health = (self.player_health - self.rules.collision_damage).max(0);
        if self.player_health == 0 {
            self.set_status(GameStatus::Defeat);
        }
    }

    /// Enter or leave the paused state. Terminal states cannot be paused.
    pub fn set_paused(&mut self, paused: bool) {
        match (self.status, paused) {
            (GameStatus::Playing, true) => self.set_status(GameStatus::Paused),
            (GameStatus::Paused, false) => self.set_status(GameStatus::Playing),
            _ => {}
        }
    }

    pub fn view(&self) -> GameStateView {
        GameStateView {
            score: self.score,
            adversary_count: self.adversary_count,
            player_health: self.player_health,
            status: self.status,
        }
    }

    fn set_status(&mut self, status: GameStatus) {
        if self.status != status {
            info!(from = ?self.status, to = ?status, score = self.score, "game status changed");
            self.status = status;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hits_accumulate_until_victory() {
        let mut gs = GameState::new(RulesConfig {
            victory_score: 300,
            ..Default::default()
        });
        gs.report_hit(100);
        gs.report_hit(100);
        assert_eq!(gs.status(), GameStatus::Playing);
        gs.report_hit(100);
        assert_eq!(gs.status(), GameStatus::Victory);
        gs.report_hit(100);
        assert_eq!(gs.score(), 300, "no scoring after the session ends");
    }

    #[test]
    fn test_collisions_lead_to_defeat() {
        let mut gs = GameState::new(RulesConfig {
            max_health: 50,
            collision_damage: 20,
            ..Default::default()
        });
        gs.report_collision();
        gs.report_collision();
        assert_eq!(gs.player_health(), 10);
        gs.report_collision();
        assert_eq!(gs.player_health(), 0);
        assert_eq!(gs.status(), GameStatus::Defeat);
        gs.set_paused(true);
        assert_eq!(gs.status(), GameStatus::Defeat, "cannot pause a finished session");
    }

    #[test]
    fn test_adversary_count_never_underflows() {
        let mut gs = GameState::new(RulesConfig::default());
        gs.register_adversary();
        gs.unregister_adversary();
        gs.unregister_adversary();
        assert_eq!(gs.adversary_count(), 0);
    }

    #[test]
    fn test_pause_round_trip() {
        let mut gs = GameState::new(RulesConfig::default());
        gs.set_paused(true);
        assert_eq!(gs.status(), GameStatus::Paused);
        gs.set_paused(true);
        assert_eq!(gs.status(), GameStatus::Paused);
        gs.set_paused(false);
        assert_eq!(gs.status(), GameStatus::Playing);
    }
}
