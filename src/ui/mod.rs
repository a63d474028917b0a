//! Full-screen terminal reader.

pub mod app;
pub mod background;
pub mod cards;
pub mod context;
pub mod detail;
pub mod events;
pub mod feed;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
