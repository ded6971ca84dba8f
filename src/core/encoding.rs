use encoding_rs::SHIFT_JIS;
use std::borrow::Cow;

/// Encodes `text` as Shift_JIS, or returns the first character the encoding
/// cannot represent.
pub fn encode_shift_jis(text: &str) -> std::result::Result<Cow<'_, [u8]>, char> {
    let (bytes, _, had_errors) = SHIFT_JIS.encode(text);
    if had_errors {
        return Err(first_unencodable(text).unwrap_or(char::REPLACEMENT_CHARACTER));
    }
    Ok(bytes)
}

pub fn first_unencodable(text: &str) -> Option<char> {
    let (_, _, had_errors) = SHIFT_JIS.encode(text);
    if !had_errors {
        return None;
    }

    let mut buf = [0u8; 4];
    text.chars().find(|c| {
        let (_, _, bad) = SHIFT_JIS.encode(c.encode_utf8(&mut buf));
        bad
    })
}
