pub mod bucket;
pub mod trade;

pub use bucket::{BucketAccumulator, BucketKey, VwapRow};
pub use trade::Trade;
