pub mod commands;
pub mod opts;
pub mod report;
