pub mod local;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_positive_number, Validate,
};

pub const DEFAULT_INPUT_FILE: &str = "shopify-orders.csv";
pub const DEFAULT_OUTPUT_PREFIX: &str = "clickpost-shipping-labels";
/// Click Post accepts at most 40 labels per bulk upload.
pub const MAX_CLICKPOST_LABELS: usize = 40;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelConfig {
    pub base_dir: String,
    pub input_file: String,
    pub output_prefix: String,
    pub max_labels_per_file: usize,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            base_dir: ".".to_string(),
            input_file: DEFAULT_INPUT_FILE.to_string(),
            output_prefix: DEFAULT_OUTPUT_PREFIX.to_string(),
            max_labels_per_file: MAX_CLICKPOST_LABELS,
        }
    }
}

impl ConfigProvider for LabelConfig {
    fn base_dir(&self) -> &str {
        &self.base_dir
    }

    fn input_file(&self) -> &str {
        &self.input_file
    }

    fn output_prefix(&self) -> &str {
        &self.output_prefix
    }

    fn max_labels_per_file(&self) -> usize {
        self.max_labels_per_file
    }
}

impl Validate for LabelConfig {
    fn validate(&self) -> Result<()> {
        validate_path("base_dir", &self.base_dir)?;
        validate_path("input_file", &self.input_file)?;
        validate_path("output_prefix", &self.output_prefix)?;
        validate_non_empty_string("output_prefix", &self.output_prefix)?;
        validate_positive_number("max_labels_per_file", self.max_labels_per_file, 1)?;
        Ok(())
    }
}
