pub mod reader;

pub use reader::{Compression, FeedReader};
