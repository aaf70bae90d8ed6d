use std::path::{Path, PathBuf};

use plotters::prelude::*;
use thiserror::Error;

use crate::domain::pool::Pool;
use crate::services::capacity_simulation::CapacityRun;

pub const HISTOGRAM_BINS: usize = 40;

#[derive(Error, Debug)]
pub enum HistogramError {
    #[error("failed to create plot directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to render histogram: {0}")]
    Render(String),
}

/// Equal-width bins spanning `[min, max]` of the finite values.
#[derive(Debug, Clone, PartialEq)]
pub struct Bins {
    pub min: f64,
    pub width: f64,
    pub counts: Vec<usize>,
}

impl Bins {
    pub fn from_values(values: &[f64], bins: usize) -> Option<Self> {
        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if finite.is_empty() || bins == 0 {
            return None;
        }
        let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
        let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        // A constant sample still gets a visible bar.
        let width = if max - min > f64::EPSILON {
            (max - min) / bins as f64
        } else {
            1.0
        };

        let mut counts = vec![0usize; bins];
        for value in finite {
            let index = (((value - min) / width) as usize).min(bins - 1);
            counts[index] += 1;
        }
        Some(Self { min, width, counts })
    }

    pub fn max(&self) -> f64 {
        self.min + self.width * self.counts.len() as f64
    }
}

pub fn write_histogram_png<P: AsRef<Path>>(
    output_path: P,
    title: &str,
    values: &[f64],
    marker: Option<f64>,
) -> Result<(), HistogramError> {
    let Some(bins) = Bins::from_values(values, HISTOGRAM_BINS) else {
        return Ok(());
    };
    render_histogram_png(output_path.as_ref(), title, &bins, marker)
}

/// Writes the demand histogram and one required-hours histogram per pool into
/// `output_dir`. Pool charts mark the pool's capacity.
pub fn write_run_histograms<P: AsRef<Path>>(
    output_dir: P,
    run: &CapacityRun,
) -> Result<Vec<PathBuf>, HistogramError> {
    let output_dir = output_dir.as_ref();
    std::fs::create_dir_all(output_dir).map_err(|source| HistogramError::CreateDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::new();
    let demand_path = output_dir.join("demand.png");
    write_histogram_png(&demand_path, "Demand Distribution", &run.samples.demand, None)?;
    written.push(demand_path);

    for pool in Pool::ALL {
        let metrics = run.metrics.pool(pool);
        let path = output_dir.join(format!("{}.png", pool.file_stem()));
        let title = format!("Required Hours - {}", pool.label());
        write_histogram_png(&path, &title, &metrics.required_hours, Some(metrics.capacity))?;
        written.push(path);
    }
    tracing::info!(dir = %output_dir.display(), charts = written.len(), "wrote histograms");
    Ok(written)
}

fn render_histogram_png(
    output_path: &Path,
    title: &str,
    bins: &Bins,
    marker: Option<f64>,
) -> Result<(), HistogramError> {
    let max_count = bins.counts.iter().copied().max().unwrap_or(1);
    let marker = marker.filter(|value| value.is_finite());
    let mut x_min = bins.min;
    let mut x_max = bins.max();
    if let Some(value) = marker {
        x_min = x_min.min(value);
        x_max = x_max.max(value + bins.width);
    }

    let root = BitMapBackend::new(output_path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(title, ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(x_min..x_max, 0..(max_count + 1))
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .y_desc("Frequency")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_label_formatter(&|value| format!("{value:.0}"))
        .draw()
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    let bar_color = RGBColor(30, 122, 204);
    let bar_style = ShapeStyle::from(&bar_color).filled();
    chart
        .draw_series(bins.counts.iter().enumerate().map(|(index, count)| {
            let left = bins.min + bins.width * index as f64;
            Rectangle::new([(left, 0), (left + bins.width, *count)], bar_style)
        }))
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    if let Some(value) = marker {
        let line_style = ShapeStyle::from(&RED).stroke_width(2);
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(value, 0), (value, max_count + 1)],
                line_style,
            )))
            .map_err(|e| HistogramError::Render(e.to_string()))?;
    }

    root.present()
        .map_err(|e| HistogramError::Render(e.to_string()))?;
    Ok(())
}
