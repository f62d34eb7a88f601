//! PyO3 bindings for `tristrip`.
//!
//! Notes
//! - Keep bindings thin: triangles and strips cross the boundary as lists of
//!   Python ints. Rows are validated by `tristrip::triangles_from_rows`, so
//!   negative or oversized indices and wrong arity raise `ValueError`.
//! - No configuration surface; Python callers get the default settings.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use tristrip::{InputError, Vertex};

fn map_input_err(err: InputError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Strips of a host index list; each strip must be non-negative.
fn strips_from_rows(strips: Vec<Vec<i64>>) -> PyResult<Vec<Vec<Vertex>>> {
    strips
        .into_iter()
        .enumerate()
        .map(|(row, s)| {
            s.into_iter()
                .map(|v| {
                    Vertex::try_from(v).map_err(|_| {
                        PyValueError::new_err(format!("strip {row} has an invalid index ({v})"))
                    })
                })
                .collect()
        })
        .collect()
}

/// Convert a list of index triples into triangle strips.
#[pyfunction]
fn stripify(triangles: Vec<Vec<i64>>) -> PyResult<Vec<Vec<Vertex>>> {
    let tris = tristrip::triangles_from_rows(&triangles).map_err(map_input_err)?;
    Ok(tristrip::stripify(&tris))
}

/// Decode strips into triangles with alternating winding.
#[pyfunction]
fn triangulate(strips: Vec<Vec<i64>>) -> PyResult<Vec<(Vertex, Vertex, Vertex)>> {
    let strips = strips_from_rows(strips)?;
    Ok(tristrip::triangulate(&strips)
        .into_iter()
        .map(|[a, b, c]| (a, b, c))
        .collect())
}

/// Join strips into a single strip through degenerate steps.
#[pyfunction]
fn stitch_strips(strips: Vec<Vec<i64>>) -> PyResult<Vec<Vertex>> {
    let strips = strips_from_rows(strips)?;
    Ok(tristrip::stitch_strips(&strips))
}

#[pymodule]
fn tristrip_native(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(stripify, m)?)?;
    m.add_function(wrap_pyfunction!(triangulate, m)?)?;
    m.add_function(wrap_pyfunction!(stitch_strips, m)?)?;
    m.add("__version__", tristrip::VERSION)?;
    Ok(())
}
