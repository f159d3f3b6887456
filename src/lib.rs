pub mod args;
pub mod commands;
pub mod error;
pub mod factory;
pub mod logging;
pub mod output;
pub mod report;
pub mod source;
pub mod visuals;
