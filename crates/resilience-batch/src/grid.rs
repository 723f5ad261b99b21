//! Dense `[scenarios × time]` representation of a batch.
//!
//! Shape contract:
//! - `time`: `Array1`, length `T >= 2`, finite, strictly increasing
//! - `performance`: `Array2`, shape `[N, T]`, finite, `N >= 1`
//! - `baselines`: `Array1`, length `N`, finite
//!
//! Ragged batches are rejected; there is no padding.

use ndarray::{Array1, Array2};
use recovery_curve::{validate_time_grid, CurveError, RecoveryCurve, ScenarioBatch, ScenarioId};
use tracing::debug;

use crate::error::{BatchError, BatchResult};

/// A batch of curves sharing one time grid.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveGrid {
    ids: Vec<ScenarioId>,
    time: Array1<f64>,
    performance: Array2<f64>,
    baselines: Array1<f64>,
}

impl CurveGrid {
    /// Build a grid from raw arrays. Rows are identified by position.
    pub fn new(
        time: Array1<f64>,
        performance: Array2<f64>,
        baselines: Array1<f64>,
    ) -> BatchResult<Self> {
        let (rows, cols) = performance.dim();
        if rows == 0 {
            return Err(BatchError::EmptyBatch);
        }
        if cols != time.len() {
            return Err(BatchError::ShapeMismatch(format!(
                "performance has {} columns, time grid has {} samples",
                cols,
                time.len()
            )));
        }
        if baselines.len() != rows {
            return Err(BatchError::ShapeMismatch(format!(
                "{} baselines for {} scenarios",
                baselines.len(),
                rows
            )));
        }

        validate_time_grid(&time.to_vec())?;
        if let Some((index, &value)) = baselines.indexed_iter().find(|(_, v)| !v.is_finite()) {
            return Err(CurveError::NonFinite {
                field: "baseline",
                index,
                value,
            }
            .into());
        }
        if let Some(((row, col), &value)) =
            performance.indexed_iter().find(|(_, v)| !v.is_finite())
        {
            return Err(CurveError::NonFinite {
                field: "performance",
                index: row * cols + col,
                value,
            }
            .into());
        }

        Ok(Self {
            ids: (0..rows).map(ScenarioId::Index).collect(),
            time,
            performance,
            baselines,
        })
    }

    /// Build a grid with one baseline for every row.
    pub fn with_common_baseline(
        time: Array1<f64>,
        performance: Array2<f64>,
        baseline: f64,
    ) -> BatchResult<Self> {
        let rows = performance.nrows();
        Self::new(time, performance, Array1::from_elem(rows, baseline))
    }

    /// Stack a batch into a grid. Every curve must share the first curve's
    /// time grid exactly.
    pub fn from_batch(batch: &ScenarioBatch) -> BatchResult<Self> {
        let first = batch.get(0).ok_or(BatchError::EmptyBatch)?;
        let grid = first.curve.time();
        let cols = grid.len();

        for (index, scenario) in batch.iter().enumerate() {
            let time = scenario.curve.time();
            if time.len() != cols {
                return Err(BatchError::RaggedBatch {
                    index,
                    expected: cols,
                    found: time.len(),
                });
            }
            if time != grid {
                return Err(BatchError::GridMismatch { index });
            }
        }

        let values: Vec<f64> = batch
            .iter()
            .flat_map(|s| s.curve.performance().iter().copied())
            .collect();
        let performance = Array2::from_shape_vec((batch.len(), cols), values)
            .map_err(|e| BatchError::ShapeMismatch(e.to_string()))?;
        let baselines: Array1<f64> = batch.iter().map(|s| s.curve.baseline()).collect();

        debug!(scenarios = batch.len(), samples = cols, "Batch stacked into grid");

        Ok(Self {
            ids: batch.iter().map(|s| s.id.clone()).collect(),
            time: Array1::from(grid.to_vec()),
            performance,
            baselines,
        })
    }

    pub fn ids(&self) -> &[ScenarioId] {
        &self.ids
    }

    pub fn time(&self) -> &Array1<f64> {
        &self.time
    }

    pub fn performance(&self) -> &Array2<f64> {
        &self.performance
    }

    pub fn baselines(&self) -> &Array1<f64> {
        &self.baselines
    }

    /// Number of scenarios (rows).
    pub fn len(&self) -> usize {
        self.performance.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of time samples (columns).
    pub fn samples(&self) -> usize {
        self.time.len()
    }

    pub fn duration(&self) -> f64 {
        self.time[self.time.len() - 1] - self.time[0]
    }

    /// Row `index` as a standalone curve.
    pub fn row_curve(&self, index: usize) -> BatchResult<RecoveryCurve> {
        if index >= self.len() {
            return Err(BatchError::ShapeMismatch(format!(
                "row {} out of range for {} scenarios",
                index,
                self.len()
            )));
        }
        Ok(RecoveryCurve::new(
            self.time.to_vec(),
            self.performance.row(index).to_vec(),
            self.baselines[index],
        )?)
    }

    /// Back to a batch, keeping scenario ids.
    pub fn to_batch(&self) -> BatchResult<ScenarioBatch> {
        let mut batch = ScenarioBatch::new();
        for (index, id) in self.ids.iter().enumerate() {
            let curve = self.row_curve(index)?;
            match id {
                ScenarioId::Index(_) => batch.push(curve),
                ScenarioId::Label(label) => batch.push_labeled(label.clone(), curve),
            };
        }
        Ok(batch)
    }
}
