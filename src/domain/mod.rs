pub mod buffer;
pub mod estimate;
pub mod fit;
pub mod resampler;
