use std::num::NonZeroUsize;
use std::path::Path;

use crate::core::export::write_labels;
use crate::core::import::parse_orders;
use crate::core::validate::{check_encodable, validate_label};
use crate::core::{ConfigProvider, Pipeline, RejectedOrder, ShopifyOrder, Storage, TransformResult};
use crate::utils::error::{EtlError, Result};

/// Shopify order export in, Click Post label files out.
pub struct ClickpostPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ClickpostPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for ClickpostPipeline<S, C> {
    fn max_batch_size(&self) -> Result<NonZeroUsize> {
        NonZeroUsize::new(self.config.max_labels_per_file()).ok_or_else(|| EtlError::ConfigError {
            message: "max_labels_per_file must be at least 1".to_string(),
        })
    }

    fn extract(&self) -> Result<Vec<ShopifyOrder>> {
        tracing::debug!("Importing orders from {}", self.config.input_file());
        let data = self.storage.read_file(self.config.input_file())?;
        parse_orders(&data)
    }

    fn transform(&self, orders: &[ShopifyOrder]) -> TransformResult {
        let mut result = TransformResult::default();

        for order in orders {
            let label = order.to_clickpost_label();
            match validate_label(&label).and_then(|()| check_encodable(&label)) {
                Ok(()) => result.labels.push(label),
                Err(reason) => {
                    tracing::warn!(order = %order.name, reason = %reason, "Skipping order");
                    result.rejected.push(RejectedOrder {
                        order_name: order.name.clone(),
                        reason,
                    });
                }
            }
        }

        result
    }

    fn load(&self, batch_index: usize, result: &TransformResult) -> Result<String> {
        let file_name = self.config.output_file_name(batch_index);
        let data = write_labels(&result.labels)?;

        tracing::debug!(
            "Writing {} labels ({} bytes) to {}",
            result.labels.len(),
            data.len(),
            file_name
        );
        self.storage.write_file(&file_name, &data)?;

        Ok(Path::new(self.config.base_dir())
            .join(&file_name)
            .display()
            .to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LabelConfig;
    use crate::utils::error::LabelError;
    use encoding_rs::SHIFT_JIS;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn with_file(path: &str, data: &str) -> Self {
            let storage = Self::default();
            storage
                .files
                .lock()
                .unwrap()
                .insert(path.to_string(), data.as_bytes().to_vec());
            storage
        }

        fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            self.files.lock().unwrap().get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            self.get_file(path).ok_or_else(|| {
                EtlError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            self.files
                .lock()
                .unwrap()
                .insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    fn order(name: &str, shipping_name: &str) -> ShopifyOrder {
        ShopifyOrder {
            name: name.to_string(),
            shipping_name: shipping_name.to_string(),
            shipping_street: "千代田".to_string(),
            shipping_address1: "1-1".to_string(),
            shipping_address2: String::new(),
            shipping_city: "千代田区".to_string(),
            shipping_zip: "100-0001".to_string(),
            shipping_province: "東京都".to_string(),
        }
    }

    #[test]
    fn test_extract_reads_configured_file() {
        let csv = "Name,Shipping Name,Shipping Street,Shipping Address1,Shipping Address2,Shipping City,Shipping Zip,Shipping Province\n#1001,山田太郎,千代田,1-1,,千代田区,100-0001,東京都\n";
        let storage = MockStorage::with_file("shopify-orders.csv", csv);
        let pipeline = ClickpostPipeline::new(storage, LabelConfig::default());

        let orders = pipeline.extract().unwrap();

        assert_eq!(orders, vec![order("#1001", "山田太郎")]);
    }

    #[test]
    fn test_extract_missing_file_is_io_error() {
        let pipeline = ClickpostPipeline::new(MockStorage::default(), LabelConfig::default());

        assert!(matches!(pipeline.extract(), Err(EtlError::IoError(_))));
    }

    #[test]
    fn test_transform_drops_invalid_orders_and_keeps_the_rest() {
        let pipeline = ClickpostPipeline::new(MockStorage::default(), LabelConfig::default());
        let orders = vec![
            order("#1001", "山田太郎"),
            order("#1002", &"山".repeat(21)),
            order("#1003", ""),
            order("#1004", "佐藤花子"),
        ];

        let result = pipeline.transform(&orders);

        let names: Vec<&str> = result.labels.iter().map(|l| l.shipping_name.as_str()).collect();
        assert_eq!(names, vec!["山田太郎", "佐藤花子"]);
        assert_eq!(
            result.rejected,
            vec![
                RejectedOrder {
                    order_name: "#1002".to_string(),
                    reason: LabelError::NameTooLong,
                },
                RejectedOrder {
                    order_name: "#1003".to_string(),
                    reason: LabelError::NameRequired,
                },
            ]
        );
    }

    #[test]
    fn test_transform_rejects_unencodable_order() {
        let pipeline = ClickpostPipeline::new(MockStorage::default(), LabelConfig::default());

        let result = pipeline.transform(&[order("#1001", "山田😀")]);

        assert!(result.labels.is_empty());
        assert!(matches!(
            result.rejected[0].reason,
            LabelError::Unencodable { character: '😀', .. }
        ));
    }

    #[test]
    fn test_load_writes_numbered_shift_jis_file() {
        let storage = MockStorage::default();
        let pipeline = ClickpostPipeline::new(storage.clone(), LabelConfig::default());
        let result = pipeline.transform(&[order("#1001", "山田太郎")]);

        let path = pipeline.load(1, &result).unwrap();

        assert_eq!(
            Path::new(&path),
            Path::new(".").join("clickpost-shipping-labels-1.csv")
        );
        let data = storage.get_file("clickpost-shipping-labels-1.csv").unwrap();
        let (text, _, had_errors) = SHIFT_JIS.decode(&data);
        assert!(!had_errors);
        assert!(text.ends_with("100-0001,山田太郎,様,東京都千代田区,千代田東京都千代田区,,,サプリメント\r\n"));
    }

    #[test]
    fn test_zero_batch_size_is_config_error() {
        let config = LabelConfig {
            max_labels_per_file: 0,
            ..LabelConfig::default()
        };
        let pipeline = ClickpostPipeline::new(MockStorage::default(), config);

        assert!(matches!(
            pipeline.max_batch_size(),
            Err(EtlError::ConfigError { .. })
        ));
    }
}
