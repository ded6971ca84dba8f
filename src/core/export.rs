use std::borrow::Cow;
use std::io;

use crate::core::encoding::encode_shift_jis;
use crate::core::ClickpostLabel;
use crate::utils::error::{EtlError, Result};

/// Serializes labels as a Click Post upload file: Japanese header row, CRLF
/// line endings, Shift_JIS bytes. An empty slice yields the header alone.
pub fn write_labels(labels: &[ClickpostLabel]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(ClickpostLabel::HEADERS)?;
    for label in labels {
        writer.write_record(
            label
                .fields()
                .iter()
                .map(|(_, value)| normalize_line_breaks(value).into_owned()),
        )?;
    }

    let utf8 = writer
        .into_inner()
        .map_err(|e| EtlError::IoError(e.into_error()))?;
    let text = String::from_utf8(utf8)
        .map_err(|e| EtlError::IoError(io::Error::new(io::ErrorKind::InvalidData, e)))?;

    match encode_shift_jis(&text) {
        Ok(bytes) => Ok(bytes.into_owned()),
        Err(character) => {
            let line = text
                .split("\r\n")
                .position(|row| row.contains(character))
                .map_or(0, |i| i + 1);
            Err(EtlError::EncodingError { line, character })
        }
    }
}

/// Rewrites every line break inside a field (`\n`, `\r` or `\r\n`) as `\r\n`.
fn normalize_line_breaks(value: &str) -> Cow<'_, str> {
    if !value.contains(|c| c == '\r' || c == '\n') {
        return Cow::Borrowed(value);
    }
    Cow::Owned(
        value
            .replace("\r\n", "\n")
            .replace('\r', "\n")
            .replace('\n', "\r\n"),
    )
}
