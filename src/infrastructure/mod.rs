pub mod audio;
pub mod classifier;
pub mod observability;
