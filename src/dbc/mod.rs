//! Main module for DBC library functionality

pub mod builder;
pub mod line_provider;
pub mod loader;
pub mod model;
pub mod observer;
pub mod parsing;
pub mod testing;
