//! Domain modules

pub mod communication;
pub mod posts;
