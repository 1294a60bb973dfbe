use crate::fp::{FittedFpGrowth, FpGrowth, Transaction};
use numpy::PyReadonlyArray2;
use once_cell::sync::Lazy;
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::{pymodule, types::PyModule, Bound, PyErr, PyResult};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

enum Session {
    Ingesting(FpGrowth),
    Fitted(FittedFpGrowth),
}

// Global storage for mining sessions
static SESSIONS: Lazy<Mutex<HashMap<usize, Session>>> = Lazy::new(|| Mutex::new(HashMap::new()));
static NEXT_PID: Lazy<Mutex<usize>> = Lazy::new(|| Mutex::new(0));

fn lock<T>(mutex: &Mutex<T>) -> PyResult<MutexGuard<'_, T>> {
    mutex
        .lock()
        .map_err(|e| PyRuntimeError::new_err(format!("Lock error: {}", e)))
}

fn invalid_pid() -> PyErr {
    PyValueError::new_err("Invalid session ID")
}

fn not_ingesting() -> PyErr {
    PyRuntimeError::new_err("Tree already built for this session")
}

fn not_fitted() -> PyErr {
    PyRuntimeError::new_err("Tree not built yet")
}

#[pymodule]
fn fpgrowth(m: &Bound<'_, PyModule>) -> PyResult<()> {
    #[pyfn(m)]
    #[pyo3(name = "create_fp_growth")]
    fn create_fp_growth_py(min_support: f64) -> PyResult<usize> {
        let session =
            FpGrowth::new(min_support).map_err(|e| PyValueError::new_err(e.to_string()))?;

        let mut pid_lock = lock(&*NEXT_PID)?;
        let pid = *pid_lock;
        *pid_lock += 1;
        drop(pid_lock);

        lock(&*SESSIONS)?.insert(pid, Session::Ingesting(session));
        Ok(pid)
    }

    #[pyfn(m)]
    #[pyo3(name = "insert")]
    fn insert_py(pid: usize, id: u64, items: Option<Vec<String>>) -> PyResult<()> {
        let mut sessions = lock(&*SESSIONS)?;
        match sessions.get_mut(&pid).ok_or_else(invalid_pid)? {
            Session::Ingesting(fpg) => fpg
                .insert(items.map(|items| Transaction { id, items }))
                .map_err(|e| PyValueError::new_err(e.to_string())),
            Session::Fitted(_) => Err(not_ingesting()),
        }
    }

    #[pyfn(m)]
    #[pyo3(name = "insert_matrix")]
    fn insert_matrix_py(
        pid: usize,
        transactions: PyReadonlyArray2<i32>,
        labels: Vec<String>,
    ) -> PyResult<()> {
        let mut sessions = lock(&*SESSIONS)?;
        match sessions.get_mut(&pid).ok_or_else(invalid_pid)? {
            Session::Ingesting(fpg) => {
                fpg.insert_matrix(transactions.as_array(), &labels);
                Ok(())
            }
            Session::Fitted(_) => Err(not_ingesting()),
        }
    }

    #[pyfn(m)]
    #[pyo3(name = "build_tree")]
    fn build_tree_py(pid: usize) -> PyResult<()> {
        let mut sessions = lock(&*SESSIONS)?;
        let session = sessions.remove(&pid).ok_or_else(invalid_pid)?;
        let fitted = match session {
            Session::Ingesting(fpg) => fpg.build_tree(),
            Session::Fitted(mut fitted) => {
                fitted.rebuild();
                fitted
            }
        };
        sessions.insert(pid, Session::Fitted(fitted));
        Ok(())
    }

    #[pyfn(m)]
    #[pyo3(name = "frequent_items")]
    fn frequent_items_py(pid: usize, min_support: f64) -> PyResult<Vec<String>> {
        let sessions = lock(&*SESSIONS)?;
        Ok(match sessions.get(&pid).ok_or_else(invalid_pid)? {
            Session::Ingesting(fpg) => fpg.frequent_items(min_support),
            Session::Fitted(fitted) => fitted.frequent_items(min_support),
        })
    }

    #[pyfn(m)]
    #[pyo3(name = "pattern_bases")]
    fn pattern_bases_py(pid: usize) -> PyResult<Vec<(String, Vec<(String, usize)>)>> {
        let sessions = lock(&*SESSIONS)?;
        let Session::Fitted(fitted) = sessions.get(&pid).ok_or_else(invalid_pid)? else {
            return Err(not_fitted());
        };

        Ok(fitted
            .pattern_bases()
            .iter()
            .map(|base| {
                let pairs = base
                    .sub_pattern_base
                    .iter()
                    .map(|ic| (ic.item.clone(), ic.count))
                    .collect();
                (base.item.clone(), pairs)
            })
            .collect())
    }

    #[pyfn(m)]
    #[pyo3(name = "cleanup")]
    fn cleanup_py(pid: usize) -> PyResult<()> {
        lock(&*SESSIONS)?
            .remove(&pid)
            .map(|_| ())
            .ok_or_else(invalid_pid)
    }

    Ok(())
}
