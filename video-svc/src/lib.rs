pub mod blob;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod layer;
mod macros;
pub mod routes;
pub mod state;
