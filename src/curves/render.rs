//! Rendering training-curve figures with plotters

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use plotters::coord::Shift;
use plotters::prelude::*;
use svg2pdf::usvg;

use super::figure::{Panel, TrainingCurveFigure};
use crate::error::{EvalError, Result};

// Sizes in typographic points, scaled by dpi / 72.
const CAPTION_PT: f64 = 16.0;
const LABEL_PT: f64 = 12.0;
const LABEL_AREA_PT: f64 = 40.0;
const MARGIN_PT: f64 = 8.0;
const LINE_PT: f64 = 1.75;

/// Image formats with a rendering backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Pdf,
    Png,
    Jpeg,
    Bmp,
    Svg,
}

impl FromStr for ImageFormat {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim_start_matches('.').to_lowercase().as_str() {
            "pdf" => Ok(ImageFormat::Pdf),
            "png" => Ok(ImageFormat::Png),
            "jpeg" | "jpg" => Ok(ImageFormat::Jpeg),
            "bmp" => Ok(ImageFormat::Bmp),
            "svg" => Ok(ImageFormat::Svg),
            _ => Err(EvalError::UnsupportedFormat {
                format: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ImageFormat::Pdf => "pdf",
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Bmp => "bmp",
            ImageFormat::Svg => "svg",
        };
        write!(f, "{name}")
    }
}

impl TrainingCurveFigure {
    /// Pixel size of the whole grid
    pub fn pixel_size(&self, panel_px: u32) -> (u32, u32) {
        (
            panel_px.saturating_mul(self.cols() as u32),
            panel_px.saturating_mul(self.rows() as u32),
        )
    }

    /// Render to `path`; the bitmap encoder follows the path's extension
    ///
    /// `font_scale` converts points to pixels (dpi / 72). PDF output is the
    /// SVG rendering converted page-for-page, one pixel per PDF point.
    pub fn save(&self, path: &Path, format: ImageFormat, panel_px: u32, font_scale: f64) -> Result<()> {
        let size = self.pixel_size(panel_px);
        match format {
            ImageFormat::Svg => {
                draw_figure(SVGBackend::new(path, size).into_drawing_area(), self, font_scale)
            }
            ImageFormat::Pdf => {
                let mut svg = String::new();
                let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
                draw_figure(root, self, font_scale)?;
                let pdf = svg_to_pdf(&svg)?;
                fs::write(path, pdf)
                    .map_err(|e| EvalError::io(format!("writing {}", path.display()), e))
            }
            ImageFormat::Png | ImageFormat::Jpeg | ImageFormat::Bmp => {
                draw_figure(BitMapBackend::new(path, size).into_drawing_area(), self, font_scale)
            }
        }
    }
}

fn svg_to_pdf(svg: &str) -> Result<Vec<u8>> {
    // Text is converted to outlines, so the font database must be populated.
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &options).map_err(EvalError::render)?;
    svg2pdf::to_pdf(&tree, svg2pdf::ConversionOptions::default(), svg2pdf::PageOptions::default())
        .map_err(EvalError::render)
}

fn draw_figure<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    figure: &TrainingCurveFigure,
    font_scale: f64,
) -> Result<()> {
    root.fill(&WHITE).map_err(EvalError::render)?;

    let areas = root.split_evenly((figure.rows(), figure.cols()));
    for (area, panel) in areas.iter().zip(figure.panels.iter()) {
        draw_panel(area, panel, figure.grouped, font_scale)?;
    }

    root.present().map_err(EvalError::render)?;
    Ok(())
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &Panel,
    grouped: bool,
    font_scale: f64,
) -> Result<()> {
    let px = |pt: f64| ((pt * font_scale).round() as u32).max(1);

    let mut chart = ChartBuilder::on(area)
        .caption(format!("loss = {}", panel.metric), ("sans-serif", px(CAPTION_PT)))
        .margin(px(MARGIN_PT))
        .x_label_area_size(px(LABEL_AREA_PT))
        .y_label_area_size(px(LABEL_AREA_PT))
        .build_cartesian_2d(panel.x_range(), panel.y_range())
        .map_err(EvalError::render)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc("epoch")
        .y_desc("val")
        .label_style(("sans-serif", px(LABEL_PT)))
        .axis_desc_style(("sans-serif", px(LABEL_PT)))
        .draw()
        .map_err(EvalError::render)?;

    let line_width = px(LINE_PT);
    for (i, series) in panel.series.iter().enumerate() {
        let color = Palette99::pick(i).to_rgba();
        let anno = chart
            .draw_series(LineSeries::new(
                series.points.iter().copied(),
                color.stroke_width(line_width),
            ))
            .map_err(EvalError::render)?;

        if let Some(label) = &series.label {
            anno.label(label.as_str()).legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(line_width))
            });
        }
    }

    if grouped {
        chart
            .configure_series_labels()
            .label_font(("sans-serif", px(LABEL_PT)))
            .border_style(&BLACK)
            .background_style(&WHITE.mix(0.8))
            .draw()
            .map_err(EvalError::render)?;
    }

    Ok(())
}
