// Price sources: anything that can produce a PriceSnapshot.

pub mod sample;

use crate::model::{FetchError, PriceSnapshot};

#[async_trait::async_trait]
pub trait PriceSource: Send + Sync {
    async fn fetch(&self) -> Result<PriceSnapshot, FetchError>;
}

pub use sample::SampleSource;
