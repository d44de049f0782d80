//! Struct `Sample` represents a labeled batch sample.

// Provides sample struct.
pub(crate) mod sample_struct;

// Provides a struct that reads a file.
pub(crate) mod sample_reader;


pub use sample_reader::{SampleReader, IRIS_CLASSES};
pub use sample_struct::Sample;
