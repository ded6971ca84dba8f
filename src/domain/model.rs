use serde::{Deserialize, Serialize};

use crate::utils::error::LabelError;

/// Honorific printed after the recipient name on every label.
pub const NAME_TITLE: &str = "様";

/// Contents description declared on every label.
pub const SHIPPING_CONTENTS: &str = "サプリメント";

/// One row of the Shopify order export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopifyOrder {
    /// Order number shown in the store admin, e.g. `#1001`.
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Shipping Name")]
    pub shipping_name: String,
    #[serde(rename = "Shipping Street")]
    pub shipping_street: String,
    #[serde(rename = "Shipping Address1")]
    pub shipping_address1: String,
    /// Often empty.
    #[serde(rename = "Shipping Address2")]
    pub shipping_address2: String,
    #[serde(rename = "Shipping City")]
    pub shipping_city: String,
    #[serde(rename = "Shipping Zip")]
    pub shipping_zip: String,
    #[serde(rename = "Shipping Province")]
    pub shipping_province: String,
}

impl ShopifyOrder {
    /// Columns that must be present in the export header. Order is irrelevant
    /// on import; any other columns are ignored.
    pub const COLUMNS: [&'static str; 8] = [
        "Name",
        "Shipping Name",
        "Shipping Street",
        "Shipping Address1",
        "Shipping Address2",
        "Shipping City",
        "Shipping Zip",
        "Shipping Province",
    ];

    pub fn to_clickpost_label(&self) -> ClickpostLabel {
        let shipping_address1 = format!("{}{}", self.shipping_province, self.shipping_city);
        let shipping_address2 = format!("{}{}", self.shipping_street, shipping_address1);

        ClickpostLabel {
            shipping_zip: self.shipping_zip.clone(),
            shipping_name: self.shipping_name.clone(),
            shipping_name_title: NAME_TITLE.to_string(),
            shipping_address1,
            shipping_address2,
            shipping_address3: self.shipping_address2.clone(),
            shipping_address4: String::new(),
            shipping_contents: SHIPPING_CONTENTS.to_string(),
        }
    }
}

/// One row of the Click Post bulk label upload.
///
/// Field order matches [`ClickpostLabel::HEADERS`]; the exporter writes the
/// header itself and serializes rows positionally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickpostLabel {
    #[serde(rename = "お届け先郵便番号")]
    pub shipping_zip: String,
    #[serde(rename = "お届け先氏名")]
    pub shipping_name: String,
    #[serde(rename = "お届け先敬称")]
    pub shipping_name_title: String,
    #[serde(rename = "お届け先住所1行目")]
    pub shipping_address1: String,
    #[serde(rename = "お届け先住所2行目")]
    pub shipping_address2: String,
    #[serde(rename = "お届け先住所3行目")]
    pub shipping_address3: String,
    #[serde(rename = "お届け先住所4行目")]
    pub shipping_address4: String,
    #[serde(rename = "内容品")]
    pub shipping_contents: String,
}

impl ClickpostLabel {
    pub const HEADERS: [&'static str; 8] = [
        "お届け先郵便番号",
        "お届け先氏名",
        "お届け先敬称",
        "お届け先住所1行目",
        "お届け先住所2行目",
        "お届け先住所3行目",
        "お届け先住所4行目",
        "内容品",
    ];

    /// Field values paired with their header, in column order.
    pub fn fields(&self) -> [(&'static str, &str); 8] {
        [
            (Self::HEADERS[0], &self.shipping_zip),
            (Self::HEADERS[1], &self.shipping_name),
            (Self::HEADERS[2], &self.shipping_name_title),
            (Self::HEADERS[3], &self.shipping_address1),
            (Self::HEADERS[4], &self.shipping_address2),
            (Self::HEADERS[5], &self.shipping_address3),
            (Self::HEADERS[6], &self.shipping_address4),
            (Self::HEADERS[7], &self.shipping_contents),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedOrder {
    pub order_name: String,
    pub reason: LabelError,
}

/// Output of transforming one batch of orders.
#[derive(Debug, Clone, Default)]
pub struct TransformResult {
    pub labels: Vec<ClickpostLabel>,
    pub rejected: Vec<RejectedOrder>,
}
