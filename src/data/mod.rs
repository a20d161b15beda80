//! Data module - CSV loading into a period/value series

mod loader;
mod series;

pub use loader::{LoaderError, SeriesLoader};
pub use series::Series;
