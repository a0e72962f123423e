//! Python bindings, enabled by the `pyo3` feature.
use std::hash::{Hash, Hasher};

use pyo3::prelude::*;

use crate::classify::classify;

/// Any hashable Python object used as a vertex.
///
/// Equality follows Python's `==`, so `1`, `1.0` and `True` name the same vertex.
#[derive(Debug, Clone)]
struct PyVertex {
    object: PyObject,
    hash: isize,
}

impl<'source> FromPyObject<'source> for PyVertex {
    fn extract(ob: &'source PyAny) -> PyResult<Self> {
        Ok(Self {
            hash: ob.hash()?,
            object: ob.into_py(ob.py()),
        })
    }
}

impl Hash for PyVertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash.hash(state);
    }
}

impl PartialEq for PyVertex {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
            && Python::with_gil(|py| {
                self.object
                    .as_ref(py)
                    .eq(other.object.as_ref(py))
                    .unwrap_or(false)
            })
    }
}

impl Eq for PyVertex {}

/// Classifies the undirected graph given by a list of `(u, v)` tuples.
///
/// Vertices may be any hashable objects. Returns the description of the classification.
#[pyfunction]
fn classify_eulerian(edges: Vec<(PyVertex, PyVertex)>) -> String {
    classify(edges).to_string()
}

#[pymodule]
fn eulergraph(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(classify_eulerian, m)?)?;
    Ok(())
}
