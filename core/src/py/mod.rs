use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::error::TrainingError;
use crate::metrics::Metrics;
use crate::package::read_package;
use crate::report::summarize_packages_json;
use crate::training::Training;

fn to_py_err(e: TrainingError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Én pakke → meldingslinje.
#[pyfunction]
fn training_info(workout_type: &str, data: Vec<f64>) -> PyResult<String> {
    let workout = read_package(workout_type, &data).map_err(to_py_err)?;
    Ok(workout.show_training_info().get_message())
}

/// Liste med pakker (str eller Python-objekt) → JSON-liste med meldinger.
#[pyfunction]
fn summarize_packages(py: Python<'_>, payload: &PyAny) -> PyResult<String> {
    // Tillat både str og list/dict (serialiseres via json.dumps)
    let json_in: String = if let Ok(s) = payload.extract::<&str>() {
        s.to_owned()
    } else {
        let json_mod = py
            .import("json")
            .map_err(|e| PyValueError::new_err(format!("failed to import json: {e}")))?;
        json_mod
            .call_method1("dumps", (payload,))
            .and_then(|o| o.extract::<String>())
            .map_err(|e| PyValueError::new_err(format!("failed to serialize payload with json.dumps: {e}")))?
    };

    let metrics = Metrics::new().map_err(to_py_err)?;
    summarize_packages_json(&json_in, &metrics).map_err(to_py_err)
}

// ──────────────────────────────────────────────────────────────────────────────
// PyO3-MODUL
// ──────────────────────────────────────────────────────────────────────────────

#[pymodule]
fn training_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(training_info, m)?)?;
    m.add_function(wrap_pyfunction!(summarize_packages, m)?)?;
    Ok(())
}
