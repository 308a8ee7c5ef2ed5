//! # Grouped Bar Chart
//!
//! Backend-independent layout of a grouped bar chart comparing the latency of
//! the three databases. Each category (x tick) gets one group of three bars,
//! and only the last bar of every series is annotated with its value.
//!
//! The layout is computed in data coordinates: group `i` is centered at
//! `x = i`, and the bars of a group are shifted by `-BAR_WIDTH`, `0`, and
//! `+BAR_WIDTH` respectively.

use crate::tasks::databases::Database;
use log::error;

/// Width of a single bar in data coordinates. It is also the offset between
/// two neighbouring bars of the same group.
pub const BAR_WIDTH: f64 = 0.25;

/// Number of series every chart compares.
pub const NUM_SERIES: usize = 3;

/// Suffix added to the legend label of the fastest database.
pub const WINNER_SUFFIX: &str = " (Winner)";

/// Headroom above the tallest bar so that annotations fit in the chart.
const Y_HEADROOM: f64 = 1.1;

/// # Description
///
/// Horizontal alignment of an annotation with respect to its anchor point.
/// Annotations are always bottom-aligned, so they sit on top of their bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Center,
    Right,
}

/// # Description
///
/// The latencies (in milliseconds) of one database, one value per category.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub database: Database,
    pub values: Vec<f64>,
    /// Alignment of the annotation on the last bar.
    pub anchor: TextAnchor,
}

impl Series {
    pub fn new(database: Database, values: &[f64]) -> Self {
        Self {
            database,
            values: values.to_vec(),
            anchor: TextAnchor::Center,
        }
    }

    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub database: Database,
    /// Index of the category (group) this bar belongs to.
    pub category: usize,
    /// Horizontal center of the bar.
    pub x: f64,
    pub width: f64,
    pub height: f64,
}

impl Bar {
    pub fn left(&self) -> f64 {
        self.x - self.width / 2.0
    }

    pub fn right(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Annotation {
    pub database: Database,
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub anchor: TextAnchor,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub x: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub database: Database,
    pub label: String,
}

impl LegendEntry {
    pub fn is_winner(&self) -> bool {
        self.label.ends_with(WINNER_SUFFIX)
    }
}

/// # Description
///
/// Everything needed to draw a chart, independent of the drawing backend.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartLayout {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub bars: Vec<Bar>,
    pub annotations: Vec<Annotation>,
    pub ticks: Vec<Tick>,
    pub legend: Vec<LegendEntry>,
    pub x_range: (f64, f64),
    pub y_max: f64,
}

#[derive(Clone, Debug)]
pub struct GroupedBarChart {
    title: String,
    x_desc: String,
    y_desc: String,
    categories: Vec<String>,
    series: Vec<Series>,
    winner: Database,
}

/// # Description
///
/// Format a latency without losing precision. Integral values keep one
/// decimal, so `1038.0` reads `"1038.0"` and not `"1038"`.
pub fn format_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

impl GroupedBarChart {
    pub fn new(
        title: &str,
        x_desc: &str,
        y_desc: &str,
        categories: Vec<String>,
        series: Vec<Series>,
        winner: Database,
    ) -> anyhow::Result<Self> {
        if categories.is_empty() {
            error!("chart needs at least one category (title={title})");
            anyhow::bail!("chart needs at least one category (title={title})");
        }

        if series.len() != NUM_SERIES {
            let reason = format!(
                "chart needs exactly {NUM_SERIES} series (title={title}, num_series={})",
                series.len()
            );
            error!("{reason}");
            anyhow::bail!(reason);
        }

        for s in &series {
            if s.values.len() != categories.len() {
                let reason = format!(
                    "series length does not match category axis (database={}, len={}, categories={})",
                    s.database,
                    s.values.len(),
                    categories.len()
                );
                error!("{reason}");
                anyhow::bail!(reason);
            }
        }

        if !series.iter().any(|s| s.database == winner) {
            error!("winner is not one of the series (winner={winner})");
            anyhow::bail!("winner is not one of the series (winner={winner})");
        }

        Ok(Self {
            title: title.to_string(),
            x_desc: x_desc.to_string(),
            y_desc: y_desc.to_string(),
            categories,
            series,
            winner,
        })
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn winner(&self) -> Database {
        self.winner
    }

    /// Database with the lowest latency for the largest category.
    pub fn fastest(&self) -> Database {
        let last = self.categories.len() - 1;
        self.series
            .iter()
            .min_by(|a, b| a.values[last].total_cmp(&b.values[last]))
            .map(|s| s.database)
            .unwrap_or(self.winner)
    }

    /// Offset of the `index`-th series with respect to the group's center.
    pub fn offset(index: usize) -> f64 {
        (index as f64 - (NUM_SERIES / 2) as f64) * BAR_WIDTH
    }

    pub fn layout(&self) -> ChartLayout {
        let num_categories = self.categories.len();

        let mut bars = Vec::with_capacity(NUM_SERIES * num_categories);
        let mut annotations = Vec::with_capacity(NUM_SERIES);
        for (s_idx, series) in self.series.iter().enumerate() {
            let offset = Self::offset(s_idx);
            for (c_idx, value) in series.values.iter().enumerate() {
                bars.push(Bar {
                    database: series.database,
                    category: c_idx,
                    x: c_idx as f64 + offset,
                    width: BAR_WIDTH,
                    height: *value,
                });
            }

            // Only the rightmost bar of each series is annotated
            if let Some(last) = bars.last() {
                annotations.push(Annotation {
                    database: series.database,
                    text: format_value(last.height),
                    x: last.x,
                    y: last.height,
                    anchor: series.anchor,
                });
            }
        }

        let ticks = self
            .categories
            .iter()
            .enumerate()
            .map(|(idx, label)| Tick {
                x: idx as f64,
                label: label.clone(),
            })
            .collect();

        let legend = self
            .series
            .iter()
            .map(|s| {
                let mut label = s.database.legend_name().to_string();
                if s.database == self.winner {
                    label.push_str(WINNER_SUFFIX);
                }
                LegendEntry {
                    database: s.database,
                    label,
                }
            })
            .collect();

        let tallest = bars.iter().map(|b| b.height).fold(0.0, f64::max);
        let y_max = if tallest > 0.0 {
            tallest * Y_HEADROOM
        } else {
            1.0
        };

        // Leave half a group of space on both sides
        let x_range = (-0.5, num_categories as f64 - 0.5);

        ChartLayout {
            title: self.title.clone(),
            x_desc: self.x_desc.clone(),
            y_desc: self.y_desc.clone(),
            bars,
            annotations,
            ticks,
            legend,
            x_range,
            y_max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> Vec<String> {
        ["10", "20"].iter().map(|s| s.to_string()).collect()
    }

    fn series() -> Vec<Series> {
        vec![
            Series::new(Database::MySql, &[3.0, 4.5]),
            Series::new(Database::MongoDb, &[2.0, 1.5]),
            Series::new(Database::Elasticsearch, &[5.0, 6.0]),
        ]
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(1038.0), "1038.0");
        assert_eq!(format_value(598.9), "598.9");
        assert_eq!(format_value(17.7), "17.7");
        assert_eq!(format_value(147346.0), "147346.0");
        assert_eq!(format_value(0.0), "0.0");
    }

    #[test]
    fn test_offsets() {
        assert_eq!(GroupedBarChart::offset(0), -0.25);
        assert_eq!(GroupedBarChart::offset(1), 0.0);
        assert_eq!(GroupedBarChart::offset(2), 0.25);
    }

    #[test]
    fn test_layout() {
        let chart =
            GroupedBarChart::new("t", "x", "y", categories(), series(), Database::MongoDb)
                .unwrap();
        let layout = chart.layout();

        assert_eq!(layout.bars.len(), 6);
        assert_eq!(layout.ticks.len(), 2);
        assert_eq!(layout.annotations.len(), 3);
        assert_eq!(layout.annotations[0].text, "4.5");
        assert_eq!(layout.annotations[1].text, "1.5");
        assert_eq!(layout.annotations[2].text, "6.0");
        assert_eq!(layout.annotations[2].x, 1.25);
        assert_eq!(layout.annotations[2].y, 6.0);
        assert_eq!(layout.x_range, (-0.5, 1.5));
        assert!(layout.y_max > 6.0);

        let winners: Vec<_> = layout.legend.iter().filter(|e| e.is_winner()).collect();
        assert_eq!(winners.len(), 1);
        assert_eq!(winners[0].label, "MongoDB (Winner)");
    }

    #[test]
    fn test_bars_do_not_overlap() {
        let chart =
            GroupedBarChart::new("t", "x", "y", categories(), series(), Database::MySql).unwrap();
        let mut bars = chart.layout().bars;
        bars.sort_by(|a, b| a.x.total_cmp(&b.x));
        for pair in bars.windows(2) {
            assert!(pair[0].right() <= pair[1].left() + 1e-9);
        }
    }

    #[test]
    fn test_fastest() {
        let chart =
            GroupedBarChart::new("t", "x", "y", categories(), series(), Database::MySql).unwrap();
        assert_eq!(chart.fastest(), Database::MongoDb);
    }

    #[test]
    fn test_rejects_malformed_charts() {
        // Length mismatch
        let mut bad = series();
        bad[1].values.pop();
        assert!(GroupedBarChart::new("t", "x", "y", categories(), bad, Database::MySql).is_err());

        // Wrong number of series
        let mut bad = series();
        bad.pop();
        assert!(GroupedBarChart::new("t", "x", "y", categories(), bad, Database::MySql).is_err());

        // No categories
        let empty = vec![
            Series::new(Database::MySql, &[]),
            Series::new(Database::MongoDb, &[]),
            Series::new(Database::Elasticsearch, &[]),
        ];
        assert!(GroupedBarChart::new("t", "x", "y", vec![], empty, Database::MySql).is_err());

        // Winner not in the chart
        let mut bad = series();
        bad[2].database = Database::MySql;
        assert!(
            GroupedBarChart::new("t", "x", "y", categories(), bad, Database::Elasticsearch)
                .is_err()
        );
    }
}
