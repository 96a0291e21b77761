//! Game bindings for Python.

use pyo3::prelude::*;

use crate::content::{load_deck_or_fallback, Choice};
use crate::core::{CountingUnit, Group, SessionConfig};
use crate::games::{default_categories, BetBuddy, QuestionGame, TruthOrDare};
use crate::persistence::FileStore;

use super::py_core::{status_name, to_py_err, PyParticipant, PyParticipantResult, PyProgress};

fn value_error(msg: String) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(msg)
}

fn parse_group(group: &str) -> PyResult<Group> {
    match group {
        "male" => Ok(Group::Male),
        "female" => Ok(Group::Female),
        "neutral" => Ok(Group::Neutral),
        "any" => Ok(Group::Any),
        other => Err(value_error(format!("unknown group '{}'", other))),
    }
}

fn parse_choice(choice: &str) -> PyResult<Choice> {
    match choice {
        "truth" => Ok(Choice::Truth),
        "dare" => Ok(Choice::Dare),
        other => Err(value_error(format!("unknown choice '{}'", other))),
    }
}

/// Python wrapper for BetBuddy.
#[pyclass(name = "BetBuddy")]
pub struct PyBetBuddy {
    game: BetBuddy,
}

#[pymethods]
impl PyBetBuddy {
    #[new]
    #[pyo3(signature = (seed = 42))]
    fn new(seed: u64) -> Self {
        Self {
            game: BetBuddy::new(seed),
        }
    }

    fn add_team(&mut self, name: &str) -> PyResult<PyParticipant> {
        self.game.add_team(name).map(PyParticipant).map_err(to_py_err)
    }

    fn remove_team(&mut self, index: usize) -> PyResult<PyParticipant> {
        self.game.remove_team(index).map(PyParticipant).map_err(to_py_err)
    }

    /// Start the game; `rounds` defaults to 5.
    #[pyo3(signature = (rounds = None))]
    fn start(&mut self, rounds: Option<u32>) -> PyResult<()> {
        match rounds {
            Some(rounds) => self.game.start_with_rounds(rounds),
            None => self.game.start(),
        }
        .map_err(to_py_err)
    }

    fn current_team(&self) -> PyResult<PyParticipant> {
        self.game.current_team().cloned().map(PyParticipant).map_err(to_py_err)
    }

    fn challenge(&mut self) -> PyResult<String> {
        self.game
            .current_challenge()
            .map(|p| p.to_string())
            .map_err(to_py_err)
    }

    /// Record a bet; returns the session status name.
    fn submit_bet(&mut self, points: u32) -> PyResult<&'static str> {
        self.game.submit_bet(points).map(status_name).map_err(to_py_err)
    }

    #[getter]
    fn round(&self) -> u32 {
        self.game.round()
    }

    fn round_info(&self) -> String {
        self.game.round_info()
    }

    fn results(&self) -> Vec<PyParticipantResult> {
        self.game.results().into_iter().map(PyParticipantResult).collect()
    }

    fn reset(&mut self) {
        self.game.reset();
    }

    fn __repr__(&self) -> String {
        format!(
            "BetBuddy(teams={}, status={})",
            self.game.session().participant_count(),
            status_name(self.game.session().status())
        )
    }
}

/// Python wrapper for the question-round games.
#[pyclass(name = "QuestionGame")]
pub struct PyQuestionGame {
    game: QuestionGame,
}

#[pymethods]
impl PyQuestionGame {
    /// "Ich hab noch nie".
    #[staticmethod]
    #[pyo3(signature = (seed = 42))]
    fn never_have_i_ever(seed: u64) -> Self {
        Self {
            game: QuestionGame::never_have_i_ever(seed),
        }
    }

    /// "Wer würde eher".
    #[staticmethod]
    #[pyo3(signature = (seed = 42))]
    fn who_would_rather(seed: u64) -> Self {
        Self {
            game: QuestionGame::who_would_rather(seed),
        }
    }

    fn add_player(&mut self, name: &str) -> PyResult<PyParticipant> {
        self.game.add_player(name).map(PyParticipant).map_err(to_py_err)
    }

    fn remove_player(&mut self, index: usize) -> PyResult<PyParticipant> {
        self.game.remove_player(index).map(PyParticipant).map_err(to_py_err)
    }

    fn start_limited(&mut self, rounds: u32) -> PyResult<()> {
        self.game.start_limited(rounds).map_err(to_py_err)
    }

    fn start_unlimited(&mut self) -> PyResult<()> {
        self.game.start_unlimited().map_err(to_py_err)
    }

    fn current_player(&self) -> PyResult<PyParticipant> {
        self.game.current_player().cloned().map(PyParticipant).map_err(to_py_err)
    }

    fn question(&mut self) -> PyResult<String> {
        self.game.question().map_err(to_py_err)
    }

    fn reroll(&mut self) -> PyResult<String> {
        self.game.reroll().map_err(to_py_err)
    }

    /// Advance; returns the session status name.
    fn next_player(&mut self) -> PyResult<&'static str> {
        self.game.next_player().map(status_name).map_err(to_py_err)
    }

    fn stop(&mut self) -> PyResult<()> {
        self.game.stop().map_err(to_py_err)
    }

    fn progress(&self) -> PyProgress {
        PyProgress(self.game.session().progress())
    }

    fn round_label(&self) -> String {
        self.game.round_label()
    }

    fn results(&self) -> Vec<PyParticipantResult> {
        self.game.results().into_iter().map(PyParticipantResult).collect()
    }

    fn reset(&mut self) {
        self.game.reset();
    }

    fn __repr__(&self) -> String {
        format!(
            "QuestionGame({}, players={}, status={})",
            self.game.session().config().variant,
            self.game.session().participant_count(),
            status_name(self.game.session().status())
        )
    }
}

/// Python wrapper for TruthOrDare.
#[pyclass(name = "TruthOrDare")]
pub struct PyTruthOrDare {
    game: TruthOrDare,
}

#[pymethods]
impl PyTruthOrDare {
    /// Create a game.
    ///
    /// # Arguments
    /// - seed: RNG seed
    /// - deck_path: wop-questions.json; the built-in deck is used if missing
    /// - store_dir: directory for resumable snapshots
    #[new]
    #[pyo3(signature = (seed = 42, deck_path = None, store_dir = None))]
    fn new(seed: u64, deck_path: Option<String>, store_dir: Option<String>) -> Self {
        let game = match deck_path {
            Some(path) => TruthOrDare::new(load_deck_or_fallback(path), seed),
            None => TruthOrDare::with_builtin_deck(seed),
        };
        let game = match store_dir {
            Some(dir) => game.with_store(Box::new(FileStore::new(dir))),
            None => game,
        };
        Self { game }
    }

    /// Add a player with group "male", "female", "neutral" or "any".
    fn add_player(&mut self, name: &str, group: &str) -> PyResult<PyParticipant> {
        let group = parse_group(group)?;
        self.game.add_player(name, group).map(PyParticipant).map_err(to_py_err)
    }

    fn remove_player(&mut self, index: usize) -> PyResult<PyParticipant> {
        self.game.remove_player(index).map(PyParticipant).map_err(to_py_err)
    }

    /// Start; `rounds=None` plays without a limit, `categories=None` selects all.
    #[pyo3(signature = (rounds = Some(10), categories = None))]
    fn start(&mut self, rounds: Option<u32>, categories: Option<Vec<String>>) -> PyResult<()> {
        let config = match rounds {
            Some(rounds) => SessionConfig::fixed(rounds, CountingUnit::Turns),
            None => SessionConfig::unbounded(),
        }
        .with_categories(categories.unwrap_or_else(default_categories));
        self.game.start(config).map_err(to_py_err)
    }

    fn current_player(&self) -> PyResult<PyParticipant> {
        self.game.current_player().cloned().map(PyParticipant).map_err(to_py_err)
    }

    /// Draw a "truth" or "dare".
    fn choose(&mut self, choice: &str) -> PyResult<String> {
        let choice = parse_choice(choice)?;
        self.game.choose(choice).map_err(to_py_err)
    }

    fn penalty(&mut self) -> PyResult<Option<String>> {
        self.game.penalty().map_err(to_py_err)
    }

    fn next_player(&mut self) -> PyResult<&'static str> {
        self.game.next_player().map(status_name).map_err(to_py_err)
    }

    fn stop(&mut self) -> PyResult<()> {
        self.game.stop().map_err(to_py_err)
    }

    fn progress(&self) -> PyProgress {
        PyProgress(self.game.session().progress())
    }

    fn results(&self) -> Vec<PyParticipantResult> {
        self.game.results().into_iter().map(PyParticipantResult).collect()
    }

    fn save(&mut self) {
        self.game.save();
    }

    fn reset(&mut self) {
        self.game.reset();
    }

    fn __repr__(&self) -> String {
        format!(
            "TruthOrDare(players={}, status={})",
            self.game.session().participant_count(),
            status_name(self.game.session().status())
        )
    }
}
