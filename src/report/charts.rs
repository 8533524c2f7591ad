//! @ai:module:intent ROC chart rendering
//! @ai:module:layer infrastructure
//! @ai:module:public_api ChartGenerator
//! @ai:module:stateless true

use crate::config::ChartConfig;
use crate::error::{Error, Result};
use crate::roc::{CurveAggregator, RocPoints};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::{Path, PathBuf};

/// @ai:intent Trait for ROC chart generation
pub trait ChartGeneratorTrait: Send + Sync {
    /// @ai:intent Render the aggregator's ROC curve to a file
    ///
    /// Returns `Ok(None)` without writing anything when there is no data.
    fn generate(
        &self,
        aggregator: &CurveAggregator,
        output_path: &Path,
        config: &ChartConfig,
    ) -> Result<Option<PathBuf>>;
}

/// @ai:intent Image format chosen from the output file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartFormat {
    Png,
    Svg,
}

impl ChartFormat {
    /// @ai:intent `.svg` selects SVG; everything else is a bitmap
    /// @ai:effects pure
    pub fn from_path(path: &Path) -> Self {
        let is_svg = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("svg"))
            .unwrap_or(false);

        if is_svg {
            ChartFormat::Svg
        } else {
            ChartFormat::Png
        }
    }
}

/// @ai:intent Draws ROC curves against the chance diagonal
pub struct ChartGenerator;

impl ChartGenerator {
    /// @ai:intent Create a new chart generator
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Caption with the AUC appended when it is defined
    /// @ai:effects pure
    fn caption(title: &str, auc: Option<f64>) -> String {
        match auc {
            Some(auc) => format!("{} (AUC = {:.3})", title, auc),
            None => title.to_string(),
        }
    }

    /// @ai:intent Draw curve, markers, diagonal and legend onto a drawing area
    /// @ai:effects io
    fn draw_curve<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        points: &RocPoints,
        caption: &str,
    ) -> Result<()> {
        root.fill(&WHITE).map_err(chart_error)?;

        let mut chart = ChartBuilder::on(root)
            .caption(caption, ("sans-serif", 25))
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(0f64..1f64, 0f64..1f64)
            .map_err(chart_error)?;

        chart
            .configure_mesh()
            .x_desc("False Alarm Rate")
            .y_desc("Hit Rate")
            .draw()
            .map_err(chart_error)?;

        chart
            .draw_series(LineSeries::new(
                vec![(0.0, 0.0), (1.0, 1.0)],
                BLACK.mix(0.4).stroke_width(1),
            ))
            .map_err(chart_error)?
            .label("Chance")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK.mix(0.4).stroke_width(1)));

        chart
            .draw_series(LineSeries::new(points.iter(), BLUE.stroke_width(2)))
            .map_err(chart_error)?
            .label("ROC")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(2)));

        chart
            .draw_series(points.iter().map(|point| Circle::new(point, 4, BLUE.filled())))
            .map_err(chart_error)?;

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::LowerRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(chart_error)?;

        root.present().map_err(chart_error)?;
        Ok(())
    }
}

/// @ai:intent Flatten backend-specific drawing errors
/// @ai:effects pure
fn chart_error(err: impl std::fmt::Display) -> Error {
    Error::Chart(err.to_string())
}

impl Default for ChartGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartGeneratorTrait for ChartGenerator {
    /// @ai:intent Render the ROC chart, skipping when no conditions exist
    /// @ai:effects fs:write
    fn generate(
        &self,
        aggregator: &CurveAggregator,
        output_path: &Path,
        config: &ChartConfig,
    ) -> Result<Option<PathBuf>> {
        let points = match aggregator.sorted_points() {
            Ok(points) => points,
            Err(Error::EmptyInput) => {
                tracing::warn!("No conditions to plot; skipping {}", output_path.display());
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let caption = Self::caption(&config.title, aggregator.compute_auc().ok());
        let size = (config.width, config.height);

        match ChartFormat::from_path(output_path) {
            ChartFormat::Svg => {
                let root = SVGBackend::new(output_path, size).into_drawing_area();
                Self::draw_curve(&root, &points, &caption)?;
            }
            ChartFormat::Png => {
                let root = BitMapBackend::new(output_path, size).into_drawing_area();
                Self::draw_curve(&root, &points, &caption)?;
            }
        }

        tracing::info!("ROC chart written to {}", output_path.display());
        Ok(Some(output_path.to_path_buf()))
    }
}
