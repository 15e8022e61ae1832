//! Sparse-to-dense pivoting of cost observations
//!
//! This module turns a flat list of (date, service, cost) observations into
//! the dense date-by-service table the renderer and forecaster consume.
//! The table is built as a mapping of mappings and only materialized into a
//! fixed-order grid at the end, so the grouping logic stays independent of
//! any tabular library.

use crate::types::{DailyDate, Observation, ServiceName};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Dense cost table indexed by date (rows) and service (columns)
///
/// Rows are ordered chronologically. Columns keep the first-seen order from
/// the observation sequence, which for Cost Explorer data is the order of
/// the raw response; it is deterministic but not sorted. Cells not backed by
/// an observation are zero, and columns that are zero across every row are
/// dropped before the table is considered final.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PivotedSeries {
    dates: Vec<DailyDate>,
    services: Vec<ServiceName>,
    values: Vec<Vec<f64>>,
}

impl PivotedSeries {
    /// True when the table has no rows
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Number of date rows
    pub fn num_rows(&self) -> usize {
        self.dates.len()
    }

    /// Number of service columns
    pub fn num_cols(&self) -> usize {
        self.services.len()
    }

    /// Row keys, chronologically ordered
    pub fn dates(&self) -> &[DailyDate] {
        &self.dates
    }

    /// Column keys, in first-seen order
    pub fn services(&self) -> &[ServiceName] {
        &self.services
    }

    /// Cell value at (row, col)
    pub fn value(&self, row: usize, col: usize) -> f64 {
        self.values[row][col]
    }

    /// All cell values for one date row
    pub fn row(&self, row: usize) -> &[f64] {
        &self.values[row]
    }

    /// Total cost across all services for one date row
    pub fn row_total(&self, row: usize) -> f64 {
        self.values[row].iter().sum()
    }

    /// Total cost across the whole table
    pub fn total(&self) -> f64 {
        (0..self.num_rows()).map(|row| self.row_total(row)).sum()
    }
}

/// Pivot observations into a dense [`PivotedSeries`]
///
/// Observations are grouped by (date, service), summing cost when duplicate
/// pairs occur. The normalizer should not produce duplicates, but summation
/// makes the pivot safe against any observation sequence. An empty input
/// yields an empty table with zero rows and zero columns.
pub fn pivot(observations: &[Observation]) -> PivotedSeries {
    let mut cells: BTreeMap<DailyDate, HashMap<ServiceName, f64>> = BTreeMap::new();
    let mut services: Vec<ServiceName> = Vec::new();

    for obs in observations {
        if !services.contains(&obs.service) {
            services.push(obs.service.clone());
        }
        *cells
            .entry(obs.date)
            .or_default()
            .entry(obs.service.clone())
            .or_insert(0.0) += obs.cost;
    }

    let dates: Vec<DailyDate> = cells.keys().copied().collect();

    // Materialize the dense grid, filling missing (date, service) cells with zero
    let values: Vec<Vec<f64>> = dates
        .iter()
        .map(|date| {
            let row = &cells[date];
            services
                .iter()
                .map(|service| row.get(service).copied().unwrap_or(0.0))
                .collect()
        })
        .collect();

    drop_zero_columns(dates, services, values)
}

/// Remove columns whose values are zero across every row
fn drop_zero_columns(
    dates: Vec<DailyDate>,
    services: Vec<ServiceName>,
    values: Vec<Vec<f64>>,
) -> PivotedSeries {
    let keep: Vec<usize> = (0..services.len())
        .filter(|&col| values.iter().any(|row| row[col] != 0.0))
        .collect();

    if keep.len() == services.len() {
        return PivotedSeries {
            dates,
            services,
            values,
        };
    }

    let services = keep.iter().map(|&col| services[col].clone()).collect();
    let values = values
        .iter()
        .map(|row| keep.iter().map(|&col| row[col]).collect())
        .collect();

    PivotedSeries {
        dates,
        services,
        values,
    }
}
