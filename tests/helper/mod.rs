pub mod source;

pub use source::{FailingSource, StaticSource, unreachable_base_url};
