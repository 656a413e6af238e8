//! Reactive dashboard layer for the Madeira sales charts.
//!
//! This crate provides:
//! - `figure`: serializable bar/pie chart specifications
//! - `state`: the UI state snapshot (selected species, last bar click)
//! - `rules`: the pure rules computing each UI output from the table and state
//! - `callbacks`: the explicit input → output graph that drives the rules
//! - `assets`: the HTML page and D3.js renderers, embedded at compile time

pub mod assets;
pub mod callbacks;
pub mod figure;
pub mod rules;
pub mod state;

pub use callbacks::{CallbackGraph, Dispatch, Event, Input, Output, OutputUpdate, OutputValue};
pub use figure::Figure;
pub use state::{ClickData, DashboardError, DashboardState, Display};
