use std::io::Read;

use crate::core::ShopifyOrder;
use crate::utils::error::{EtlError, Result};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Parses a Shopify order export. Every column in [`ShopifyOrder::COLUMNS`]
/// must be present in the header; extra columns are ignored.
pub fn read_orders<R: Read>(reader: R) -> Result<Vec<ShopifyOrder>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?;
    if let Some(column) = ShopifyOrder::COLUMNS
        .iter()
        .find(|column| !headers.iter().any(|h| h == **column))
    {
        return Err(EtlError::MissingColumnError {
            column: column.to_string(),
        });
    }

    let mut orders = Vec::new();
    for row in csv_reader.deserialize() {
        let order: ShopifyOrder = row?;
        orders.push(order);
    }

    tracing::debug!("Parsed {} orders", orders.len());
    Ok(orders)
}

/// Same as [`read_orders`] for an in-memory export, tolerating a leading BOM.
pub fn parse_orders(data: &[u8]) -> Result<Vec<ShopifyOrder>> {
    read_orders(data.strip_prefix(UTF8_BOM).unwrap_or(data))
}
