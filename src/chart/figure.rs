use crate::data::model::{CellValue, Table};

use super::request::{AxisColumn, ValidatedRequest};

// ---------------------------------------------------------------------------
// Figure – plot-ready data for the three chart primitives
// ---------------------------------------------------------------------------

/// One bar of a bar chart: a category and the mean of its y values.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBar {
    pub label: String,
    pub mean: f64,
}

/// One histogram bin.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub center: f64,
    pub count: usize,
}

/// Plot-ready figure data.  Owns its values, so it stays renderable after
/// the table it was built from has been replaced.
#[derive(Debug, Clone)]
pub enum Figure {
    Scatter {
        x_label: String,
        y_label: String,
        points: Vec<[f64; 2]>,
    },
    Bar {
        x_label: String,
        y_label: String,
        bars: Vec<CategoryBar>,
    },
    Histogram {
        x_label: String,
        bin_width: f64,
        bins: Vec<HistogramBin>,
        /// Gaussian kernel density curve, scaled to the count axis.
        density: Vec<[f64; 2]>,
    },
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Map a validated request onto plot-ready figure data.
///
/// Never fails: rows whose cells are not numeric where a number is needed
/// are skipped, so the worst case is an empty figure.
pub fn build_figure(table: &Table, request: &ValidatedRequest) -> Figure {
    match request {
        ValidatedRequest::Scatter { x, y } => scatter_figure(table, x, y),
        ValidatedRequest::Bar { x, y } => bar_figure(table, x, y),
        ValidatedRequest::Histogram { x } => histogram_figure(table, x),
    }
}

fn scatter_figure(table: &Table, x: &AxisColumn, y: &AxisColumn) -> Figure {
    let points = table
        .rows()
        .iter()
        .filter_map(|row| {
            let xv = row.get(x.index)?.as_f64()?;
            let yv = row.get(y.index)?.as_f64()?;
            Some([xv, yv])
        })
        .collect();

    Figure::Scatter {
        x_label: x.name.clone(),
        y_label: y.name.clone(),
        points,
    }
}

/// Group rows by the x cell's display text (first-appearance order) and
/// take the mean of the numeric y values in each group.
fn bar_figure(table: &Table, x: &AxisColumn, y: &AxisColumn) -> Figure {
    let mut groups: Vec<(String, Vec<f64>)> = Vec::new();

    for row in table.rows() {
        let label = match row.get(x.index) {
            None | Some(CellValue::Null) => continue,
            Some(cell) => cell.to_string(),
        };
        let Some(yv) = row.get(y.index).and_then(CellValue::as_f64) else {
            continue;
        };
        match groups.iter_mut().find(|(l, _)| *l == label) {
            Some((_, values)) => values.push(yv),
            None => groups.push((label, vec![yv])),
        }
    }

    let bars = groups
        .into_iter()
        .map(|(label, values)| CategoryBar {
            mean: values.iter().sum::<f64>() / values.len() as f64,
            label,
        })
        .collect();

    Figure::Bar {
        x_label: x.name.clone(),
        y_label: y.name.clone(),
        bars,
    }
}

fn histogram_figure(table: &Table, x: &AxisColumn) -> Figure {
    let values: Vec<f64> = table
        .rows()
        .iter()
        .filter_map(|row| row.get(x.index)?.as_f64())
        .filter(|v| v.is_finite())
        .collect();

    let (bins, bin_width) = bin_values(&values);
    let density = density_curve(&values, bin_width);

    Figure::Histogram {
        x_label: x.name.clone(),
        bin_width,
        bins,
        density,
    }
}

// ---------------------------------------------------------------------------
// Histogram helpers
// ---------------------------------------------------------------------------

/// Bin values with Sturges' rule.  Returns the bins and the bin width.
fn bin_values(values: &[f64]) -> (Vec<HistogramBin>, f64) {
    if values.is_empty() {
        return (Vec::new(), 1.0);
    }

    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    if span <= 0.0 {
        // All values identical: one bin holding everything.
        let bins = vec![HistogramBin {
            center: min,
            count: values.len(),
        }];
        return (bins, 1.0);
    }

    let n_bins = ((values.len() as f64).log2().ceil() as usize + 1).max(1);
    let width = span / n_bins as f64;

    let mut counts = vec![0usize; n_bins];
    for &v in values {
        // The maximum lands exactly on the upper edge; clamp it into range.
        let idx = (((v - min) / width) as usize).min(n_bins - 1);
        counts[idx] += 1;
    }

    let bins = counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            center: min + (i as f64 + 0.5) * width,
            count,
        })
        .collect();

    (bins, width)
}

/// Gaussian kernel density estimate with Scott's bandwidth, scaled by
/// `n * bin_width` so the curve overlays the count-axis histogram bars.
fn density_curve(values: &[f64], bin_width: f64) -> Vec<[f64; 2]> {
    let n = values.len();
    if n < 2 || bin_width <= 0.0 {
        return Vec::new();
    }

    let mean = values.iter().sum::<f64>() / n as f64;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    let std_dev = variance.sqrt();
    if !(std_dev > 0.0) {
        return Vec::new();
    }

    let bandwidth = std_dev * (n as f64).powf(-0.2);
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let lo = min - 3.0 * bandwidth;
    let hi = max + 3.0 * bandwidth;

    const GRID: usize = 128;
    let norm = 1.0 / (n as f64 * bandwidth * (2.0 * std::f64::consts::PI).sqrt());
    let scale = n as f64 * bin_width;

    (0..GRID)
        .map(|i| {
            let gx = lo + (hi - lo) * i as f64 / (GRID - 1) as f64;
            let density: f64 = values
                .iter()
                .map(|&v| (-0.5 * ((gx - v) / bandwidth).powi(2)).exp())
                .sum::<f64>()
                * norm;
            [gx, density * scale]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::request::{ChartKind, ChartRequest};

    fn validated(table: &Table, kind: ChartKind, x: &str, y: &str) -> ValidatedRequest {
        ChartRequest {
            kind,
            x_column: x.to_string(),
            y_column: y.to_string(),
        }
        .validate(table)
        .unwrap()
    }

    fn int(v: i64) -> CellValue {
        CellValue::Integer(v)
    }

    fn text(s: &str) -> CellValue {
        CellValue::String(s.to_string())
    }

    #[test]
    fn scatter_skips_non_numeric_rows() {
        let table = Table::new(
            vec!["A".to_string(), "B".to_string()],
            vec![
                vec![int(1), int(10)],
                vec![text("oops"), int(20)],
                vec![int(3), CellValue::Null],
                vec![int(4), CellValue::Float(40.0)],
            ],
        );
        let request = validated(&table, ChartKind::Scatter, "A", "B");

        let Figure::Scatter { points, .. } = build_figure(&table, &request) else {
            panic!("expected scatter figure");
        };
        assert_eq!(points, vec![[1.0, 10.0], [4.0, 40.0]]);
    }

    #[test]
    fn scatter_carries_axis_labels() {
        let table = Table::new(
            vec!["A".to_string(), "B".to_string()],
            vec![vec![int(1), int(2)]],
        );
        let request = validated(&table, ChartKind::Scatter, "A", "B");

        let Figure::Scatter {
            x_label, y_label, ..
        } = build_figure(&table, &request)
        else {
            panic!("expected scatter figure");
        };
        assert_eq!(x_label, "A");
        assert_eq!(y_label, "B");
    }

    #[test]
    fn bar_aggregates_mean_per_category_in_first_appearance_order() {
        let table = Table::new(
            vec!["Region".to_string(), "Sales".to_string()],
            vec![
                vec![text("South"), int(1)],
                vec![text("North"), int(3)],
                vec![text("South"), int(3)],
                vec![text("North"), CellValue::Null],
            ],
        );
        let request = validated(&table, ChartKind::Bar, "Region", "Sales");

        let Figure::Bar { bars, .. } = build_figure(&table, &request) else {
            panic!("expected bar figure");
        };
        assert_eq!(
            bars,
            vec![
                CategoryBar {
                    label: "South".to_string(),
                    mean: 2.0
                },
                CategoryBar {
                    label: "North".to_string(),
                    mean: 3.0
                },
            ]
        );
    }

    #[test]
    fn histogram_counts_every_numeric_value() {
        let rows: Vec<Vec<CellValue>> = (0..16).map(|i| vec![int(i)]).collect();
        let table = Table::new(vec!["A".to_string()], rows);
        let request = validated(&table, ChartKind::Histogram, "A", "");

        let Figure::Histogram { bins, density, .. } = build_figure(&table, &request) else {
            panic!("expected histogram figure");
        };
        // Sturges: ceil(log2(16)) + 1 = 5 bins.
        assert_eq!(bins.len(), 5);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 16);
        assert!(!density.is_empty());
        assert!(density.iter().all(|p| p[1] >= 0.0));
        assert!(density.iter().any(|p| p[1] > 0.0));
    }

    #[test]
    fn histogram_of_identical_values_uses_single_bin() {
        let table = Table::new(
            vec!["A".to_string()],
            vec![vec![int(5)], vec![int(5)], vec![int(5)]],
        );
        let request = validated(&table, ChartKind::Histogram, "A", "");

        let Figure::Histogram { bins, density, .. } = build_figure(&table, &request) else {
            panic!("expected histogram figure");
        };
        assert_eq!(
            bins,
            vec![HistogramBin {
                center: 5.0,
                count: 3
            }]
        );
        // Zero spread: no density curve.
        assert!(density.is_empty());
    }

    #[test]
    fn non_numeric_column_yields_empty_histogram() {
        let table = Table::new(
            vec!["A".to_string()],
            vec![vec![text("x")], vec![text("y")]],
        );
        let request = validated(&table, ChartKind::Histogram, "A", "");

        let Figure::Histogram { bins, density, .. } = build_figure(&table, &request) else {
            panic!("expected histogram figure");
        };
        assert!(bins.is_empty());
        assert!(density.is_empty());
    }
}
