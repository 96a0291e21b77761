//! BetBuddy: teams take turns betting on a challenge.
//!
//! - Up to 10 teams, at least 2 to start
//! - Each turn shows a random challenge and records the team's bet
//! - A round is one full pass through all teams; the game ends after
//!   5 rounds by default

use crate::content::{builtin, Prompt, PromptPool};
use crate::core::{
    Attribute, AttributeUpdate, CountingUnit, GameVariant, Participant, ParticipantResult, Result,
    RoundLimit, Session, SessionConfig, SessionStatus, VariantConfig,
};

/// BetBuddy game.
#[derive(Clone, Debug)]
pub struct BetBuddy {
    session: Session,
    challenges: PromptPool,
}

impl BetBuddy {
    /// New game with the built-in challenges.
    pub fn new(seed: u64) -> Self {
        Self {
            session: Session::new(VariantConfig::for_variant(GameVariant::BetBuddy), seed),
            challenges: builtin::bet_challenges(),
        }
    }

    /// Replace the challenge pool.
    #[must_use]
    pub fn with_challenges(mut self, challenges: PromptPool) -> Self {
        self.challenges = challenges;
        self
    }

    /// Underlying session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Add a team with a zero bet.
    pub fn add_team(&mut self, name: &str) -> Result<Participant> {
        self.session.add_participant(name, Some(Attribute::Wager(0)))
    }

    pub fn remove_team(&mut self, index: usize) -> Result<Participant> {
        self.session.remove_participant(index)
    }

    /// Start with the default 5 rounds.
    pub fn start(&mut self) -> Result<()> {
        let config = self.session.config().default_session();
        self.start_with(config)
    }

    /// Start with a custom number of rounds.
    pub fn start_with_rounds(&mut self, rounds: u32) -> Result<()> {
        self.start_with(SessionConfig::fixed(rounds, CountingUnit::Passes))
    }

    fn start_with(&mut self, config: SessionConfig) -> Result<()> {
        self.session.start_session(config)?;
        tracing::info!("BetBuddy started with {} teams", self.session.participant_count());
        Ok(())
    }

    /// Team whose turn it is.
    pub fn current_team(&self) -> Result<&Participant> {
        self.session.current_participant()
    }

    /// Draw a challenge for the current team.
    pub fn current_challenge(&mut self) -> Result<Prompt> {
        self.session.select_prompt(&self.challenges, None)
    }

    /// Record the current team's bet and move on.
    pub fn submit_bet(&mut self, points: u32) -> Result<SessionStatus> {
        let status = self.session.record_turn_and_advance(Some(AttributeUpdate::wager(points)))?;
        if status == SessionStatus::Finished {
            tracing::info!("BetBuddy finished after {} rounds", self.round());
        }
        Ok(status)
    }

    /// 1-based round being played; stays on the last round once finished.
    #[must_use]
    pub fn round(&self) -> u32 {
        let round = self.session.progress().pass_number;
        match self.session.state().round_limit {
            RoundLimit::Fixed { per_person_rounds, .. } => round.min(per_person_rounds),
            RoundLimit::Unbounded => round,
        }
    }

    /// "Runde x — Team y/n" header.
    pub fn round_info(&self) -> String {
        format!(
            "Runde {} — Team {}/{}",
            self.round(),
            self.session.state().current_index + 1,
            self.session.participant_count()
        )
    }

    /// Teams and their last bet.
    pub fn results(&self) -> Vec<ParticipantResult> {
        self.session.results()
    }

    /// Back to an empty setup.
    pub fn reset(&mut self) {
        self.session.reset_session();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bet_rounds() {
        let mut game = BetBuddy::new(1);
        game.add_team("Rot").unwrap();
        game.add_team("Blau").unwrap();
        game.start_with_rounds(2).unwrap();

        assert_eq!(game.round_info(), "Runde 1 — Team 1/2");
        assert!(!game.current_challenge().unwrap().is_fallback());

        assert_eq!(game.submit_bet(10).unwrap(), SessionStatus::Active);
        assert_eq!(game.submit_bet(3).unwrap(), SessionStatus::Active);
        assert_eq!(game.round_info(), "Runde 2 — Team 1/2");
        assert_eq!(game.submit_bet(5).unwrap(), SessionStatus::Active);
        assert_eq!(game.submit_bet(8).unwrap(), SessionStatus::Finished);
        assert_eq!(game.round(), 2);

        let bets: Vec<_> = game.results().iter().map(|r| r.attribute).collect();
        assert_eq!(bets, vec![Some(Attribute::Wager(5)), Some(Attribute::Wager(8))]);
    }

    #[test]
    fn test_default_five_rounds() {
        let mut game = BetBuddy::new(1);
        for name in ["A", "B", "C"] {
            game.add_team(name).unwrap();
        }
        game.start().unwrap();

        let mut turns = 0;
        while game.submit_bet(1).unwrap() == SessionStatus::Active {
            turns += 1;
        }
        assert_eq!(turns + 1, 15);
    }

    #[test]
    fn test_ten_team_ceiling() {
        let mut game = BetBuddy::new(1);
        for i in 0..10 {
            game.add_team(&format!("Team {i}")).unwrap();
        }
        assert!(game.add_team("Team 10").is_err());
    }
}
