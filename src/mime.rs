use thiserror::Error;

/// Image formats the converter recognizes by extension.
const IMAGE_TYPES: &[(&str, &str)] = &[
    ("gif", "image/gif"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
];

/// Text formats the converter recognizes by extension.
const TEXT_TYPES: &[(&str, &str)] = &[
    ("htm", "text/html"),
    ("html", "text/html"),
    ("xml", "application/xml"),
    ("xhtml", "application/xhtml+xml"),
    ("js", "application/x-javascript"),
    ("css", "text/css"),
    ("txt", "text/plain"),
];

#[derive(Error, Debug, PartialEq)]
pub enum ResolutionError {
    #[error("no MIME type provided and none could be determined for '{0}'")]
    UnknownType(String),
}

/// Returns everything after the final `.` in `filename`, or an empty string
/// when there is no `.` or the `.` is the last character. Case-sensitive.
fn file_extension(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(idx) if idx + 1 < filename.len() => &filename[idx + 1..],
        _ => "",
    }
}

fn lookup(table: &'static [(&'static str, &'static str)], extension: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, mime)| *mime)
}

/// Checks whether the filename's extension is one of the recognized image
/// formats. Charset labels are never attached to those.
pub fn is_image_file(filename: &str) -> bool {
    lookup(IMAGE_TYPES, file_extension(filename)).is_some()
}

/// Resolves the effective MIME type for `filename`.
///
/// A non-empty override wins unconditionally and is not validated against the
/// tables. Otherwise the extension is looked up in the image table first,
/// then the text table; an extension found in neither is an error.
pub fn resolve_mime_type(
    filename: &str,
    mime_override: Option<&str>,
) -> Result<String, ResolutionError> {
    if let Some(mime) = mime_override.filter(|m| !m.is_empty()) {
        return Ok(mime.to_owned());
    }

    let extension = file_extension(filename);
    match lookup(IMAGE_TYPES, extension).or_else(|| lookup(TEXT_TYPES, extension)) {
        Some(mime) => {
            log::info!("No MIME type provided, defaulting to '{mime}'.");
            Ok(mime.to_owned())
        }
        None => Err(ResolutionError::UnknownType(filename.to_owned())),
    }
}
