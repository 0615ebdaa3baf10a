//! Exploratory analysis of football match event and player-tracking data.
//! Converts normalised dataset coordinates to metres, summarises event logs, and renders goals
//! and player movement onto a to-scale pitch diagram.

pub mod config;
pub mod coords;
pub mod csv;
pub mod dataset;
pub mod domain;
pub mod error;
pub mod events;
pub mod file;
pub mod overlay;
pub mod pitch;
pub mod print;
pub mod surface;
pub mod svg;
pub mod table;
pub mod tracking;

#[cfg(test)]
pub(crate) mod testing;

#[doc = include_str!("../README.md")]
#[cfg(doc)]
fn readme() {}
