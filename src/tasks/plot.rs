use crate::tasks::{
    chart::{ChartLayout, GroupedBarChart, TextAnchor},
    color::{FONT_SIZE, STROKE_WIDTH, TITLE_FONT_SIZE},
    scenarios::Scenario,
};
use anyhow::Result;
use log::{debug, error, info, warn};
use plotters::{
    prelude::*,
    style::text_anchor::{HPos, Pos, VPos},
};
use std::{
    fs,
    path::{Path, PathBuf},
};

fn hpos(anchor: TextAnchor) -> HPos {
    match anchor {
        TextAnchor::Center => HPos::Center,
        TextAnchor::Right => HPos::Right,
    }
}

pub struct Plot {}

impl Plot {
    pub const CHART_WIDTH_PX: u32 = 640;
    pub const CHART_HEIGHT_PX: u32 = 480;

    pub fn plot_path(out_dir: &Path, scenario: &Scenario) -> PathBuf {
        out_dir.join(format!("{scenario}.svg"))
    }

    /// Render the chart of one scenario into `out_dir`, returning the path of
    /// the generated file.
    pub fn plot_scenario(scenario: &Scenario, out_dir: &Path) -> Result<PathBuf> {
        let chart = scenario.chart()?;

        let fastest = chart.fastest();
        if fastest != chart.winner() {
            warn!(
                "{scenario}: legend marks {} as winner, but {fastest} is fastest for the largest category",
                chart.winner()
            );
        }

        let plot_path = Self::plot_path(out_dir, scenario);
        Self::render(&chart, &plot_path)?;
        Ok(plot_path)
    }

    pub fn render(chart: &GroupedBarChart, plot_path: &Path) -> Result<()> {
        if let Some(parent) = plot_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    let reason = format!(
                        "error creating plot directory (path={}, error={e:?})",
                        parent.display()
                    );
                    error!("{reason}");
                    anyhow::anyhow!(reason)
                })?;
            }
        }

        let layout = chart.layout();
        debug!(
            "{}: drawing {} bars and {} annotations",
            layout.x_desc,
            layout.bars.len(),
            layout.annotations.len()
        );

        Self::draw(&layout, plot_path).map_err(|e| {
            let reason = format!(
                "error drawing plot (path={}, error={e:?})",
                plot_path.display()
            );
            error!("{reason}");
            anyhow::anyhow!(reason)
        })?;

        info!("generated plot at: {}", plot_path.display());
        Ok(())
    }

    fn draw(layout: &ChartLayout, plot_path: &Path) -> Result<()> {
        let root = SVGBackend::new(plot_path, (Self::CHART_WIDTH_PX, Self::CHART_HEIGHT_PX))
            .into_drawing_area();
        root.fill(&WHITE)?;

        let (x_min, x_max) = layout.x_range;
        let mut chart = ChartBuilder::on(&root)
            .caption(
                layout.title.as_str(),
                ("sans-serif", TITLE_FONT_SIZE).into_font(),
            )
            .x_label_area_size(60)
            .y_label_area_size(70)
            .margin(10)
            .build_cartesian_2d(x_min..x_max, 0f64..layout.y_max)?;

        chart
            .configure_mesh()
            .light_line_style(WHITE)
            .y_labels(10)
            .y_label_style(("sans-serif", FONT_SIZE).into_font())
            .y_label_formatter(&|y| format!("{:.0}", y))
            .y_desc(layout.y_desc.as_str())
            .axis_desc_style(("sans-serif", FONT_SIZE).into_font())
            .disable_x_mesh()
            .disable_x_axis()
            .draw()?;

        // Draw bars
        let mut bars = Vec::with_capacity(layout.bars.len());
        for bar in &layout.bars {
            let bar_style = ShapeStyle {
                color: bar.database.get_color()?.into(),
                filled: true,
                stroke_width: STROKE_WIDTH,
            };
            bars.push(Rectangle::new(
                [(bar.left(), 0.0), (bar.right(), bar.height)],
                bar_style,
            ));
        }
        chart.draw_series(bars)?;

        // Draw solid lines arround bars
        chart.draw_series(layout.bars.iter().map(|bar| {
            PathElement::new(
                vec![
                    (bar.left(), 0.0),
                    (bar.left(), bar.height),
                    (bar.right(), bar.height),
                    (bar.right(), 0.0),
                ],
                BLACK.stroke_width(STROKE_WIDTH),
            )
        }))?;

        // Annotate the last bar of each series
        for annotation in &layout.annotations {
            chart.plotting_area().draw(&Text::new(
                annotation.text.clone(),
                (annotation.x, annotation.y),
                ("sans-serif", FONT_SIZE)
                    .into_font()
                    .color(&BLACK)
                    .pos(Pos::new(hpos(annotation.anchor), VPos::Bottom)),
            ))?;
        }

        // x axis: baseline, ticks, and one label per category
        chart.plotting_area().draw(&PathElement::new(
            vec![(x_min, 0.0), (x_max, 0.0)],
            BLACK.stroke_width(STROKE_WIDTH),
        ))?;
        for tick in &layout.ticks {
            let (x_px, y_px) = chart.plotting_area().map_coordinate(&(tick.x, 0.0));
            root.draw(&PathElement::new(
                vec![(x_px, y_px), (x_px, y_px + 5)],
                BLACK.stroke_width(STROKE_WIDTH),
            ))?;
            root.draw(&Text::new(
                tick.label.clone(),
                (x_px, y_px + 8),
                ("sans-serif", FONT_SIZE)
                    .into_font()
                    .color(&BLACK)
                    .pos(Pos::new(HPos::Center, VPos::Top)),
            ))?;
        }

        let (x_px_range, y_px_range) = chart.plotting_area().get_pixel_range();
        root.draw(&Text::new(
            layout.x_desc.clone(),
            ((x_px_range.start + x_px_range.end) / 2, y_px_range.end + 32),
            ("sans-serif", FONT_SIZE)
                .into_font()
                .color(&BLACK)
                .pos(Pos::new(HPos::Center, VPos::Top)),
        ))?;

        // Manually draw the legend in the upper left corner of the grid
        let legend_x = x_px_range.start + 10;
        let legend_y = y_px_range.start + 10;
        let entry_height = FONT_SIZE + 6;
        let longest = layout
            .legend
            .iter()
            .map(|entry| entry.label.len())
            .max()
            .unwrap_or(0) as i32;
        let legend_width = 40 + longest * FONT_SIZE * 6 / 10;
        let legend_height = layout.legend.len() as i32 * entry_height + 6;

        root.draw(&Rectangle::new(
            [
                (legend_x, legend_y),
                (legend_x + legend_width, legend_y + legend_height),
            ],
            WHITE.filled(),
        ))?;
        root.draw(&Rectangle::new(
            [
                (legend_x, legend_y),
                (legend_x + legend_width, legend_y + legend_height),
            ],
            BLACK.stroke_width(STROKE_WIDTH),
        ))?;

        for (idx, entry) in layout.legend.iter().enumerate() {
            let x_pos = legend_x + 6;
            let y_pos = legend_y + 6 + idx as i32 * entry_height;

            // Draw the color box (Rectangle) + frame
            root.draw(&Rectangle::new(
                [(x_pos, y_pos), (x_pos + 20, y_pos + FONT_SIZE)],
                entry.database.get_color()?.filled(),
            ))?;
            root.draw(&Rectangle::new(
                [(x_pos, y_pos), (x_pos + 20, y_pos + FONT_SIZE)],
                BLACK.stroke_width(STROKE_WIDTH),
            ))?;

            // Draw the database label (Text)
            root.draw(&Text::new(
                entry.label.clone(),
                (x_pos + 28, y_pos + FONT_SIZE / 2),
                ("sans-serif", FONT_SIZE)
                    .into_font()
                    .color(&BLACK)
                    .pos(Pos::new(HPos::Left, VPos::Center)),
            ))?;
        }

        root.present()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_path() {
        let path = Plot::plot_path(Path::new("/tmp/plots"), &Scenario::UpdateWithFilters);
        assert_eq!(path, PathBuf::from("/tmp/plots/update-with-filters.svg"));
    }

    #[test]
    fn test_hpos() {
        assert!(matches!(hpos(TextAnchor::Center), HPos::Center));
        assert!(matches!(hpos(TextAnchor::Right), HPos::Right));
    }
}
