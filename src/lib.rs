pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod launch;
pub mod logging;
pub mod news;
pub mod share;
pub mod ui;
