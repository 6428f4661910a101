//! Support code for the `flatmat` demonstration binary: JSON configuration
//! and text reports over a [`flatmat::FlatMatrix`].
pub mod config;
pub mod report;
