// src/lib.rs

pub mod data;
pub mod error;
pub mod input;
pub mod net;
pub mod params;
pub mod report;
pub mod scrape;
