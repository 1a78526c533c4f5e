mod volume;

pub use volume::PrismVolume;
