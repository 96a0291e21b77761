//! Question-round games: "Ich hab noch nie" and "Wer würde eher".
//!
//! Both share one loop: players take turns, each turn shows one question
//! (rerollable), and the game runs for a fixed number of questions per
//! player or until stopped.

use crate::content::{builtin, Prompt, PromptPool};
use crate::core::{
    CountingUnit, GameVariant, Participant, ParticipantResult, Result, Session, SessionConfig,
    SessionStatus, VariantConfig,
};

/// A question-round game.
#[derive(Clone, Debug)]
pub struct QuestionGame {
    session: Session,
    pool: PromptPool,
    prefix: &'static str,
    current: Option<Prompt>,
}

impl QuestionGame {
    /// "Ich hab noch nie" with the built-in statements.
    pub fn never_have_i_ever(seed: u64) -> Self {
        Self::new(GameVariant::NeverHaveIEver, builtin::never_have_i_ever(), "🍻 Ich hab noch nie ", seed)
    }

    /// "Wer würde eher" with the built-in questions.
    pub fn who_would_rather(seed: u64) -> Self {
        Self::new(GameVariant::WhoWouldRather, builtin::who_would_rather(), "👥 ", seed)
    }

    fn new(variant: GameVariant, pool: PromptPool, prefix: &'static str, seed: u64) -> Self {
        Self {
            session: Session::new(VariantConfig::for_variant(variant), seed),
            pool,
            prefix,
            current: None,
        }
    }

    /// Replace the question pool.
    #[must_use]
    pub fn with_pool(mut self, pool: PromptPool) -> Self {
        self.pool = pool;
        self
    }

    /// Underlying session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn add_player(&mut self, name: &str) -> Result<Participant> {
        self.session.add_participant(name, None)
    }

    pub fn remove_player(&mut self, index: usize) -> Result<Participant> {
        self.session.remove_participant(index)
    }

    /// Start with `rounds` questions per player.
    pub fn start_limited(&mut self, rounds: u32) -> Result<()> {
        self.start(SessionConfig::fixed(rounds, CountingUnit::Turns))
    }

    /// Start without a limit.
    pub fn start_unlimited(&mut self) -> Result<()> {
        self.start(SessionConfig::unbounded())
    }

    pub fn start(&mut self, config: SessionConfig) -> Result<()> {
        self.session.start_session(config)?;
        self.current = None;
        tracing::info!(
            "{} started with {} players",
            self.session.config().variant,
            self.session.participant_count()
        );
        Ok(())
    }

    /// Player whose turn it is.
    pub fn current_player(&self) -> Result<&Participant> {
        self.session.current_participant()
    }

    /// Draw a question for the current turn, formatted for display.
    pub fn question(&mut self) -> Result<String> {
        let prompt = self.session.select_prompt(&self.pool, None)?;
        let text = format!("{}{}", self.prefix, prompt);
        self.current = Some(prompt);
        Ok(text)
    }

    /// Replace the current question.
    pub fn reroll(&mut self) -> Result<String> {
        self.question()
    }

    /// Question drawn for this turn, if any.
    pub fn current_question(&self) -> Option<&Prompt> {
        self.current.as_ref()
    }

    /// Move to the next player.
    pub fn next_player(&mut self) -> Result<SessionStatus> {
        let status = self.session.record_turn_and_advance(None)?;
        self.current = None;
        if status == SessionStatus::Finished {
            tracing::info!(
                "{} finished after {} questions",
                self.session.config().variant,
                self.session.state().turns_completed
            );
        }
        Ok(status)
    }

    /// End an unlimited game.
    pub fn stop(&mut self) -> Result<()> {
        self.session.finish_session()
    }

    /// "Frage x von y" or "Frage x (∞)".
    pub fn round_label(&self) -> String {
        let progress = self.session.progress();
        match progress.total {
            Some(total) => format!("Frage {} von {}", progress.turn_number, total),
            None => format!("Frage {} (∞)", progress.turn_number),
        }
    }

    pub fn results(&self) -> Vec<ParticipantResult> {
        self.session.results()
    }

    pub fn reset(&mut self) {
        self.session.reset_session();
        self.current = None;
    }
}
