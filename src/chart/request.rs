use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::model::Table;

// ---------------------------------------------------------------------------
// Chart kind
// ---------------------------------------------------------------------------

/// The three supported chart primitives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    #[default]
    Scatter,
    Bar,
    Histogram,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [ChartKind::Scatter, ChartKind::Bar, ChartKind::Histogram];

    /// Scatter and bar charts plot y against x; a histogram only needs x.
    pub fn needs_y(self) -> bool {
        !matches!(self, ChartKind::Histogram)
    }

    /// Human-readable name shown in the chart-type selector.
    pub fn label(self) -> &'static str {
        match self {
            ChartKind::Scatter => "Scatter Plot",
            ChartKind::Bar => "Bar Chart",
            ChartKind::Histogram => "Histogram",
        }
    }
}

// ---------------------------------------------------------------------------
// Validation errors
// ---------------------------------------------------------------------------

/// Which axis selection a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "X-axis"),
            Axis::Y => write!(f, "Y-axis"),
        }
    }
}

/// Why a chart request cannot be plotted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    #[error("no {0} variable selected")]
    MissingAxis(Axis),
    #[error("column '{0}' does not exist in the loaded table")]
    UnknownColumn(String),
}

// ---------------------------------------------------------------------------
// Chart request + validation
// ---------------------------------------------------------------------------

/// The user's current chart selections, exactly as entered in the UI.
/// An empty string means "nothing selected".
#[derive(Debug, Clone, Default)]
pub struct ChartRequest {
    pub kind: ChartKind,
    pub x_column: String,
    pub y_column: String,
}

/// A column selection that passed validation: trimmed name plus its
/// position in the table schema.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisColumn {
    pub name: String,
    pub index: usize,
}

/// A request that passed validation, normalized and ready for dispatch.
/// The variants make an axis-less scatter or bar chart unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidatedRequest {
    Scatter { x: AxisColumn, y: AxisColumn },
    Bar { x: AxisColumn, y: AxisColumn },
    Histogram { x: AxisColumn },
}

impl ChartRequest {
    /// Check the selections against the table schema.
    ///
    /// Empty selections are reported before column lookups, mirroring the
    /// order a user would fix them in.
    pub fn validate(&self, table: &Table) -> Result<ValidatedRequest, ChartError> {
        let x_name = self.x_column.trim();
        if x_name.is_empty() {
            return Err(ChartError::MissingAxis(Axis::X));
        }
        let y_name = self.y_column.trim();
        if self.kind.needs_y() && y_name.is_empty() {
            return Err(ChartError::MissingAxis(Axis::Y));
        }

        let x = resolve(table, x_name)?;
        Ok(match self.kind {
            ChartKind::Scatter => ValidatedRequest::Scatter {
                x,
                y: resolve(table, y_name)?,
            },
            ChartKind::Bar => ValidatedRequest::Bar {
                x,
                y: resolve(table, y_name)?,
            },
            ChartKind::Histogram => ValidatedRequest::Histogram { x },
        })
    }
}

fn resolve(table: &Table, name: &str) -> Result<AxisColumn, ChartError> {
    table
        .column_index(name)
        .map(|index| AxisColumn {
            name: name.to_string(),
            index,
        })
        .ok_or_else(|| ChartError::UnknownColumn(name.to_string()))
}
