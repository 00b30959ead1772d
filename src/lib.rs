// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod params;

pub mod cache;
pub mod csv;
pub mod dates;
pub mod extract;
pub mod fetch;
pub mod file;
pub mod links;
pub mod net;
pub mod progress;
pub mod records;
pub mod runner;
pub mod theme;
