// List the different tasks here
pub mod chart;
pub mod color;
pub mod databases;
pub mod plot;
pub mod scenarios;
pub mod viewer;
