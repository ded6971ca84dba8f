use std::num::NonZeroUsize;

use crate::domain::model::{ShopifyOrder, TransformResult};
use crate::utils::error::Result;

/// File access for the importer and exporter. Each call acquires and
/// releases its own handle.
pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    /// Directory the input is read from and the label files are written to.
    fn base_dir(&self) -> &str;
    fn input_file(&self) -> &str;
    fn output_prefix(&self) -> &str;
    fn max_labels_per_file(&self) -> usize;

    /// `{prefix}-0.csv`, `{prefix}-1.csv`, ...
    fn output_file_name(&self, batch_index: usize) -> String {
        format!("{}-{}.csv", self.output_prefix(), batch_index)
    }
}

pub trait Pipeline {
    /// Upper bound on orders handed to a single `transform`/`load` pass.
    fn max_batch_size(&self) -> Result<NonZeroUsize>;
    fn extract(&self) -> Result<Vec<ShopifyOrder>>;
    fn transform(&self, orders: &[ShopifyOrder]) -> TransformResult;
    /// Writes one batch and returns the path it was written to.
    fn load(&self, batch_index: usize, result: &TransformResult) -> Result<String>;
}
