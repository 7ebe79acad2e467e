//! Domain types — samples, timeframes, series.

pub mod sample;
pub mod series;
pub mod timeframe;

pub use sample::Sample;
pub use series::Series;
pub use timeframe::Timeframe;
