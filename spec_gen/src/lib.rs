pub mod catalog;
pub mod fixture;
pub mod generator;
pub mod tracer;
pub mod tracing;
