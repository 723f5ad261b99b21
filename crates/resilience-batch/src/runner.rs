//! Batch runner: applies the metrics engine to every scenario in a batch.

use std::borrow::Cow;

use ndarray::{s, Array2, ArrayView1, Axis};
use recovery_curve::{onset_index, trough_index, ScenarioBatch, ScenarioId};
use resilience_metrics::{
    evaluate, index_from_loss, recovery_from_samples, MetricResult, MetricsConfig, MetricsResult,
};
use tracing::{debug, info, instrument, warn};

use crate::config::BatchConfig;
use crate::error::{BatchError, BatchResult};
use crate::grid::CurveGrid;
use crate::report::{BatchReport, ScenarioFailure, ScenarioOutcome};

/// Runs metrics over batches of scenarios.
///
/// Scenarios never share state. Failure handling follows
/// [`BatchConfig::strict`].
pub struct BatchRunner {
    config: BatchConfig,
}

impl BatchRunner {
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }

    pub fn with_default_config() -> Self {
        Self::new(BatchConfig::default())
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Evaluate each curve independently.
    #[instrument(skip(self, batch), fields(scenarios = batch.len(), strict = self.config.strict))]
    pub fn run(&self, batch: &ScenarioBatch) -> BatchResult<BatchReport> {
        let mut report = BatchReport::with_capacity(batch.len());
        for (index, scenario) in batch.iter().enumerate() {
            let result = evaluate(&scenario.curve, &self.config.metrics);
            self.record(&mut report, index, &scenario.id, result)?;
        }
        Self::summarize(&report);
        Ok(report)
    }

    /// Stack the batch into a [`CurveGrid`] and run the vectorized path.
    ///
    /// Fails with [`BatchError::RaggedBatch`] or [`BatchError::GridMismatch`]
    /// when the curves do not share one time grid.
    pub fn run_vectorized(&self, batch: &ScenarioBatch) -> BatchResult<BatchReport> {
        let grid = CurveGrid::from_batch(batch)?;
        self.run_grid(&grid)
    }

    /// Evaluate every row of a grid with array-wide operations.
    ///
    /// Produces the same values as [`BatchRunner::run`] on the equivalent
    /// batch, up to floating-point summation order.
    #[instrument(skip(self, grid), fields(scenarios = grid.len(), strict = self.config.strict))]
    pub fn run_grid(&self, grid: &CurveGrid) -> BatchResult<BatchReport> {
        let time = grid.time();
        let performance = grid.performance();
        let baselines = grid.baselines();
        let (rows, cols) = performance.dim();
        let duration = grid.duration();

        // Interval widths, shape [T-1].
        let dt = &time.slice(s![1..]) - &time.slice(s![..cols - 1]);

        // Deficit below each row's baseline, shape [N, T].
        let deficit = (&baselines.view().insert_axis(Axis(1)) - performance).mapv(|d| d.max(0.0));

        // Trapezoid areas per interval, shape [N, T-1].
        let trapezoids =
            (&deficit.slice(s![.., ..cols - 1]) + &deficit.slice(s![.., 1..])) * 0.5 * &dt;

        let row_slices: Vec<Cow<'_, [f64]>> =
            performance.outer_iter().map(row_samples).collect();
        let onsets: Vec<Option<usize>> = row_slices
            .iter()
            .zip(baselines.iter())
            .map(|(row, &baseline)| onset_index(row, baseline))
            .collect();

        // Intervals before the onset sample contribute nothing.
        let mask = Array2::from_shape_fn((rows, cols - 1), |(r, i)| match onsets[r] {
            Some(onset) if i >= onset => 1.0,
            _ => 0.0,
        });
        let areas = (trapezoids * &mask).sum_axis(Axis(1));

        debug!(rows, cols, "Grid loss integrated");

        let time_samples = row_samples(time.view());
        let mut report = BatchReport::with_capacity(rows);
        for (index, row) in row_slices.iter().enumerate() {
            let result = row_metrics(
                row,
                &time_samples,
                baselines[index],
                onsets[index],
                areas[index],
                duration,
                &self.config.metrics,
            );
            self.record(&mut report, index, &grid.ids()[index], result)?;
        }
        Self::summarize(&report);
        Ok(report)
    }

    fn record(
        &self,
        report: &mut BatchReport,
        index: usize,
        id: &ScenarioId,
        result: MetricsResult<MetricResult>,
    ) -> BatchResult<()> {
        let result = match result {
            Ok(metrics) => Ok(metrics),
            Err(source) if self.config.strict => {
                warn!(scenario = %id, index, error = %source, "Scenario failed, aborting batch");
                return Err(BatchError::ScenarioFailed {
                    index,
                    id: id.clone(),
                    source,
                });
            }
            Err(source) => {
                warn!(
                    scenario = %id,
                    index,
                    error = %source,
                    "Scenario failed, recorded in report"
                );
                Err(ScenarioFailure::from(&source))
            }
        };
        report.push(ScenarioOutcome {
            index,
            id: id.clone(),
            result,
        });
        Ok(())
    }

    fn summarize(report: &BatchReport) {
        let failed = report.failures().count();
        let recovered = report
            .successes()
            .filter(|o| o.metrics().is_some_and(|m| m.recovered))
            .count();
        info!(
            scenarios = report.len(),
            failed,
            recovered,
            "Batch completed"
        );
    }
}

/// Borrow a row as a slice, copying only when it is not contiguous.
fn row_samples(row: ArrayView1<'_, f64>) -> Cow<'_, [f64]> {
    match row.to_slice() {
        Some(samples) => Cow::Borrowed(samples),
        None => Cow::Owned(row.to_vec()),
    }
}

/// Remaining per-row metrics once the loss integral is known.
fn row_metrics(
    row: &[f64],
    time: &[f64],
    baseline: f64,
    onset: Option<usize>,
    area: f64,
    duration: f64,
    config: &MetricsConfig,
) -> MetricsResult<MetricResult> {
    let threshold = config.recovery_threshold.resolve(baseline)?;
    let recovery = recovery_from_samples(time, row, onset, threshold);
    let index = index_from_loss(area, baseline, duration)?;
    let trough = trough_index(row);

    Ok(MetricResult {
        ttr: recovery.ttr,
        recovered: recovery.recovered,
        area_of_loss: area,
        resilience_index: index,
        min_performance: row[trough],
        onset_time: recovery.onset_time,
        trough_time: time[trough],
        recovery_time: recovery.recovery_time,
    })
}
