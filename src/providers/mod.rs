//! Bundled provider adapters.

pub mod open_meteo;
