use crate::charset::resolve_charset;
use crate::error::DataUrlError;
use crate::mime::resolve_mime_type;
use base64::{Engine as _, engine::general_purpose};
use std::fs;
use std::path::Path;

/// Builds the complete `data:` URI for `bytes`, resolving the MIME type and
/// charset from `filename` and the optional overrides.
///
/// The payload is standard base64 with `=` padding and no line wrapping. The
/// charset segment is omitted entirely when no charset applies.
pub fn build_data_url(
    bytes: &[u8],
    filename: &str,
    mime_override: Option<&str>,
    charset_override: Option<&str>,
) -> Result<String, DataUrlError> {
    let mime_type = resolve_mime_type(filename, mime_override)?;
    let charset = resolve_charset(filename, charset_override);

    let mut data_url = String::from("data:");
    data_url.push_str(&mime_type);
    if let Some(charset) = charset {
        data_url.push_str(";charset=");
        data_url.push_str(&charset);
    }
    data_url.push_str(";base64,");
    data_url.push_str(&general_purpose::STANDARD.encode(bytes));

    Ok(data_url)
}

/// Reads `path` fully into memory as raw bytes and converts it into a
/// `data:` URI. Resolution runs against the path's file-name component.
pub fn file_to_data_url<P: AsRef<Path>>(
    path: P,
    mime_override: Option<&str>,
    charset_override: Option<&str>,
) -> Result<String, DataUrlError> {
    let path = path.as_ref();
    let data = fs::read(path)?;
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();
    build_data_url(&data, filename, mime_override, charset_override)
}
