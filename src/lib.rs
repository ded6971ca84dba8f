pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{local::LocalStorage, LabelConfig};
pub use crate::core::{etl::EtlEngine, etl::RunSummary, pipeline::ClickpostPipeline};
pub use domain::model::{ClickpostLabel, ShopifyOrder};
pub use utils::error::{EtlError, LabelError, Result};
