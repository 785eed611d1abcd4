//! bucket_tui - Interactive explorer for multiplicative damage buckets

pub mod app;
pub mod logger;
pub mod report;
pub mod ui;
