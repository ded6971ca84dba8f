pub mod batch;
pub mod encoding;
pub mod etl;
pub mod export;
pub mod import;
pub mod pipeline;
pub mod validate;

pub use crate::domain::model::{ClickpostLabel, RejectedOrder, ShopifyOrder, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
