mod category;
mod dataset;

pub use category::Category;
pub use dataset::{QualityMap, SeasonFolder, SeasonMap, SeriesTree, StreamDataset};
