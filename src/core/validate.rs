use crate::core::encoding::first_unencodable;
use crate::core::ClickpostLabel;
use crate::utils::error::LabelError;
use crate::utils::validation::char_len;

/// Click Post limits, in full-width characters.
pub const MAX_NAME_CHARS: usize = 20;
pub const MAX_ADDRESS_LINE_CHARS: usize = 20;
pub const MAX_CONTENTS_CHARS: usize = 15;

/// Checks a label against the upload rules, stopping at the first failure.
pub fn validate_label(label: &ClickpostLabel) -> Result<(), LabelError> {
    if label.shipping_zip.is_empty() {
        return Err(LabelError::PostalCodeRequired);
    }
    if label.shipping_name.is_empty() {
        return Err(LabelError::NameRequired);
    }
    if char_len(&label.shipping_name) > MAX_NAME_CHARS {
        return Err(LabelError::NameTooLong);
    }
    if label.shipping_address1.is_empty() {
        return Err(LabelError::AddressLine1Required);
    }
    if char_len(&label.shipping_address1) > MAX_ADDRESS_LINE_CHARS {
        return Err(LabelError::AddressLine1TooLong);
    }
    if label.shipping_address2.is_empty() {
        return Err(LabelError::AddressLine2Required);
    }
    if char_len(&label.shipping_address2) > MAX_ADDRESS_LINE_CHARS {
        return Err(LabelError::AddressLine2TooLong);
    }
    if char_len(&label.shipping_address3) > MAX_ADDRESS_LINE_CHARS {
        return Err(LabelError::AddressLine3TooLong);
    }
    if char_len(&label.shipping_address4) > MAX_ADDRESS_LINE_CHARS {
        return Err(LabelError::AddressLine4TooLong);
    }
    if char_len(&label.shipping_contents) > MAX_CONTENTS_CHARS {
        return Err(LabelError::ContentsTooLong);
    }
    Ok(())
}

/// Rejects a label holding any character the Shift_JIS upload cannot carry.
pub fn check_encodable(label: &ClickpostLabel) -> Result<(), LabelError> {
    for (field, value) in label.fields() {
        if let Some(character) = first_unencodable(value) {
            return Err(LabelError::Unencodable { field, character });
        }
    }
    Ok(())
}
