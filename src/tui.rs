//! Terminal table: one human seat against three bots.

pub mod app;
pub mod controller;
mod ui;
