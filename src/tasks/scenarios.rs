use crate::tasks::{
    chart::{GroupedBarChart, Series, TextAnchor},
    databases::Database,
};
use anyhow::Result;
use clap::ValueEnum;
use std::fmt;

pub const CHART_TITLE: &str = "Database Performance Comparison";
pub const Y_DESC: &str = "Milliseconds";

/// Number of users each benchmark run operated on. Shared by every scenario.
pub const USER_COUNTS: [u64; 4] = [10000, 100000, 300000, 500000];

/// Benchmarked operations. Each one has its own hardcoded dataset and renders
/// to its own chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum)]
pub enum Scenario {
    Aggregation,
    DeleteWithoutFilters,
    Insertion,
    ReadWithoutFilters,
    UpdateWithFilters,
    UpdateWithoutFilters,
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scenario::Aggregation => write!(f, "aggregation"),
            Scenario::DeleteWithoutFilters => write!(f, "delete-without-filters"),
            Scenario::Insertion => write!(f, "insertion"),
            Scenario::ReadWithoutFilters => write!(f, "read-without-filters"),
            Scenario::UpdateWithFilters => write!(f, "update-with-filters"),
            Scenario::UpdateWithoutFilters => write!(f, "update-without-filters"),
        }
    }
}

impl Scenario {
    pub fn iter_variants() -> std::slice::Iter<'static, Scenario> {
        static VARIANTS: [Scenario; 6] = [
            Scenario::Aggregation,
            Scenario::DeleteWithoutFilters,
            Scenario::Insertion,
            Scenario::ReadWithoutFilters,
            Scenario::UpdateWithFilters,
            Scenario::UpdateWithoutFilters,
        ];
        VARIANTS.iter()
    }

    pub fn x_desc(&self) -> &'static str {
        match self {
            Scenario::Aggregation => "Number of aggregated users",
            Scenario::DeleteWithoutFilters => "Number of Deleted Users without filters",
            Scenario::Insertion => "Number of Inserted Users",
            Scenario::ReadWithoutFilters
            | Scenario::UpdateWithFilters
            | Scenario::UpdateWithoutFilters => "Number of users",
        }
    }

    /// Database marked as winner in the legend.
    pub fn winner(&self) -> Database {
        match self {
            Scenario::Aggregation | Scenario::Insertion => Database::Elasticsearch,
            Scenario::ReadWithoutFilters => Database::MySql,
            Scenario::DeleteWithoutFilters
            | Scenario::UpdateWithFilters
            | Scenario::UpdateWithoutFilters => Database::MongoDb,
        }
    }

    /// Measured latencies in milliseconds, one entry per `USER_COUNTS` entry.
    pub fn latencies(&self, database: Database) -> [f64; 4] {
        match (self, database) {
            (Scenario::Aggregation, Database::MySql) => [31.9, 161.0, 501.1, 1038.0],
            (Scenario::Aggregation, Database::MongoDb) => [29.0, 133.9, 351.1, 598.9],
            (Scenario::Aggregation, Database::Elasticsearch) => [21.3, 24.7, 14.1, 17.7],

            (Scenario::DeleteWithoutFilters, Database::MySql) => [122.1, 821.6, 6413.4, 9424.9],
            (Scenario::DeleteWithoutFilters, Database::MongoDb) => [73.8, 630.6, 1645.9, 2665.2],
            (Scenario::DeleteWithoutFilters, Database::Elasticsearch) => {
                [464.5, 4133.2, 13771.2, 24322.4]
            }

            (Scenario::Insertion, Database::MySql) => [1887.7, 13086.5, 37792.8, 147346.0],
            (Scenario::Insertion, Database::MongoDb) => [1289.9, 11915.8, 39257.1, 64214.3],
            (Scenario::Insertion, Database::Elasticsearch) => [929.8, 8130.1, 29371.8, 42326.3],

            (Scenario::ReadWithoutFilters, Database::MySql) => [266.0, 2013.6, 6167.4, 11330.7],
            (Scenario::ReadWithoutFilters, Database::MongoDb) => [290.4, 2056.3, 6755.5, 11909.3],
            (Scenario::ReadWithoutFilters, Database::Elasticsearch) => {
                [290.3, 2479.3, 7799.1, 13555.3]
            }

            (Scenario::UpdateWithFilters, Database::MySql) => [53.4, 267.8, 738.7, 1251.4],
            (Scenario::UpdateWithFilters, Database::MongoDb) => [17.6, 104.5, 289.7, 546.1],
            (Scenario::UpdateWithFilters, Database::Elasticsearch) => [78.0, 157.8, 570.4, 913.1],

            (Scenario::UpdateWithoutFilters, Database::MySql) => [86.7, 505.4, 1479.1, 2661.9],
            (Scenario::UpdateWithoutFilters, Database::MongoDb) => [47.4, 331.8, 943.2, 1606.1],
            (Scenario::UpdateWithoutFilters, Database::Elasticsearch) => {
                [1095.7, 10748.7, 45734.0, 68685.8]
            }
        }
    }

    /// Alignment of the annotation on the last bar of `database`.
    pub fn anchor(&self, database: Database) -> TextAnchor {
        // FIXME: the MySQL annotation of this scenario has always been
        // right-aligned, unlike every other one. Kept as-is until someone
        // confirms whether it was intended.
        match (self, database) {
            (Scenario::UpdateWithoutFilters, Database::MySql) => TextAnchor::Right,
            _ => TextAnchor::Center,
        }
    }

    pub fn chart(&self) -> Result<GroupedBarChart> {
        let categories = USER_COUNTS.iter().map(|n| n.to_string()).collect();
        let series = Database::iter_variants()
            .map(|db| Series::new(*db, &self.latencies(*db)).with_anchor(self.anchor(*db)))
            .collect();

        GroupedBarChart::new(
            CHART_TITLE,
            self.x_desc(),
            Y_DESC,
            categories,
            series,
            self.winner(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_cli_name() {
        // File names use `Display`, the command line uses `ValueEnum`
        for scenario in Scenario::iter_variants() {
            let value = scenario.to_possible_value().unwrap();
            assert_eq!(value.get_name(), scenario.to_string());
        }
    }

    #[test]
    fn test_every_scenario_builds() {
        for scenario in Scenario::iter_variants() {
            let chart = scenario.chart().unwrap();
            assert_eq!(chart.categories().len(), USER_COUNTS.len());
            assert_eq!(chart.series().len(), 3);
        }
    }

    #[test]
    fn test_declared_winner_is_fastest() {
        for scenario in Scenario::iter_variants() {
            let chart = scenario.chart().unwrap();
            assert_eq!(chart.fastest(), scenario.winner(), "scenario: {scenario}");
        }
    }

    #[test]
    fn test_right_anchor_only_in_update_without_filters() {
        for scenario in Scenario::iter_variants() {
            for db in Database::iter_variants() {
                let expected = if *scenario == Scenario::UpdateWithoutFilters
                    && *db == Database::MySql
                {
                    TextAnchor::Right
                } else {
                    TextAnchor::Center
                };
                assert_eq!(scenario.anchor(*db), expected, "{scenario}/{db}");
            }
        }
    }
}
