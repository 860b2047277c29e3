//! Table loading and CSV rendering.

pub mod csv;

pub use csv::{load, load_content, render, save};
