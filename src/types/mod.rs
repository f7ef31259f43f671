pub mod config;
pub mod observation;
pub mod report;
pub mod scoring;
pub mod weights;
