use crate::tasks::color::get_color_from_label;
use anyhow::Result;
use plotters::prelude::RGBColor;
use std::fmt;

/// Database systems compared in every chart. The variant order is the order
/// of the bars inside each group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Database {
    MySql,
    MongoDb,
    Elasticsearch,
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Database::MySql => write!(f, "mysql"),
            Database::MongoDb => write!(f, "mongodb"),
            Database::Elasticsearch => write!(f, "elasticsearch"),
        }
    }
}

impl Database {
    pub fn iter_variants() -> std::slice::Iter<'static, Database> {
        static VARIANTS: [Database; 3] = [
            Database::MySql,
            Database::MongoDb,
            Database::Elasticsearch,
        ];
        VARIANTS.iter()
    }

    /// Name shown in the chart legend.
    pub fn legend_name(&self) -> &'static str {
        match self {
            Database::MySql => "MySQL",
            Database::MongoDb => "MongoDB",
            Database::Elasticsearch => "Elasticsearch",
        }
    }

    pub fn get_color(&self) -> Result<RGBColor> {
        match self {
            Database::MySql => get_color_from_label("mysql-blue"),
            Database::MongoDb => get_color_from_label("mongodb-green"),
            Database::Elasticsearch => get_color_from_label("dark-orange"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        let names: Vec<String> = Database::iter_variants().map(|db| db.to_string()).collect();
        assert_eq!(names, vec!["mysql", "mongodb", "elasticsearch"]);

        let legend: Vec<&str> = Database::iter_variants().map(|db| db.legend_name()).collect();
        assert_eq!(legend, vec!["MySQL", "MongoDB", "Elasticsearch"]);
    }

    #[test]
    fn test_every_database_has_a_color() {
        for db in Database::iter_variants() {
            assert!(db.get_color().is_ok(), "missing color for {db}");
        }
    }
}
