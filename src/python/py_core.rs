//! Core type bindings for Python.

use pyo3::prelude::*;

use crate::core::{Attribute, EngineError, Participant, ParticipantResult, Progress, SessionStatus};

/// Convert an engine error into a Python `ValueError`.
pub(crate) fn to_py_err(e: EngineError) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("{}", e))
}

/// Status name exposed to Python.
pub(crate) fn status_name(status: SessionStatus) -> &'static str {
    match status {
        SessionStatus::Setup => "setup",
        SessionStatus::Active => "active",
        SessionStatus::Finished => "finished",
    }
}

fn attribute_label(attribute: Option<Attribute>) -> Option<String> {
    match attribute {
        Some(Attribute::Group(group)) => Some(group.to_string()),
        Some(Attribute::Wager(points)) => Some(points.to_string()),
        None => None,
    }
}

/// Python wrapper for Participant.
#[pyclass(name = "Participant")]
#[derive(Clone, Debug)]
pub struct PyParticipant(pub Participant);

#[pymethods]
impl PyParticipant {
    /// Get the raw ID value.
    #[getter]
    fn id(&self) -> u32 {
        self.0.id().raw()
    }

    #[getter]
    fn name(&self) -> String {
        self.0.name().to_string()
    }

    /// Avatar letter.
    #[getter]
    fn initial(&self) -> String {
        self.0.initial()
    }

    /// Wager (bet games) or group label (truth or dare).
    #[getter]
    fn attribute(&self) -> Option<String> {
        attribute_label(self.0.attribute)
    }

    fn __repr__(&self) -> String {
        format!("Participant({}, {:?})", self.0.id(), self.0.name())
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        self.0.id().raw() as u64
    }
}

/// Python wrapper for Progress.
#[pyclass(name = "Progress")]
#[derive(Clone, Debug)]
pub struct PyProgress(pub Progress);

#[pymethods]
impl PyProgress {
    #[getter]
    fn turn_number(&self) -> u32 {
        self.0.turn_number
    }

    /// Total turns, or None when unlimited.
    #[getter]
    fn total(&self) -> Option<u32> {
        self.0.total
    }

    #[getter]
    fn pass_number(&self) -> u32 {
        self.0.pass_number
    }

    #[getter]
    fn fraction(&self) -> Option<f32> {
        self.0.fraction
    }

    fn __repr__(&self) -> String {
        format!("Progress(turn={}, total={:?})", self.0.turn_number, self.0.total)
    }
}

/// Python wrapper for one results row.
#[pyclass(name = "ParticipantResult")]
#[derive(Clone, Debug)]
pub struct PyParticipantResult(pub ParticipantResult);

#[pymethods]
impl PyParticipantResult {
    #[getter]
    fn seat(&self) -> usize {
        self.0.seat
    }

    #[getter]
    fn name(&self) -> String {
        self.0.name.clone()
    }

    #[getter]
    fn attribute(&self) -> Option<String> {
        attribute_label(self.0.attribute)
    }

    #[getter]
    fn turns_taken(&self) -> u32 {
        self.0.turns_taken
    }

    fn __repr__(&self) -> String {
        format!("ParticipantResult({}. {})", self.0.seat, self.0.name)
    }
}
