use crate::mime::is_image_file;

/// Charset labels accepted in the `;charset=` position, compared
/// case-insensitively. Common IANA names and aliases.
const RECOGNIZED_CHARSETS: &[&str] = &[
    "us-ascii",
    "ascii",
    "utf-8",
    "utf8",
    "utf-16",
    "utf-16be",
    "utf-16le",
    "iso-8859-1",
    "iso-8859-2",
    "iso-8859-3",
    "iso-8859-4",
    "iso-8859-5",
    "iso-8859-6",
    "iso-8859-7",
    "iso-8859-8",
    "iso-8859-9",
    "iso-8859-13",
    "iso-8859-15",
    "latin1",
    "windows-1250",
    "windows-1251",
    "windows-1252",
    "windows-1253",
    "windows-1254",
    "windows-1255",
    "windows-1256",
    "windows-1257",
    "windows-1258",
    "koi8-r",
    "koi8-u",
    "shift_jis",
    "euc-jp",
    "iso-2022-jp",
    "euc-kr",
    "gb2312",
    "gbk",
    "gb18030",
    "big5",
    "macintosh",
];

fn is_recognized(label: &str) -> bool {
    RECOGNIZED_CHARSETS
        .iter()
        .any(|charset| charset.eq_ignore_ascii_case(label))
}

/// Resolves the effective charset label for `filename`.
///
/// Returns `None` whenever no charset belongs in the URI: the override is
/// absent, not a recognized label, or the file is an image type. An
/// unrecognized override is dropped, not treated as an error.
pub fn resolve_charset(filename: &str, charset_override: Option<&str>) -> Option<String> {
    let Some(charset) = charset_override.filter(|c| !c.is_empty()) else {
        log::info!("Charset not specified, skipping.");
        return None;
    };

    if !is_recognized(charset) {
        log::info!("Charset '{charset}' is not recognized, skipping.");
        return None;
    }

    if is_image_file(filename) {
        log::info!("Image file detected, skipping charset '{charset}'.");
        return None;
    }

    log::info!("Using charset '{charset}'.");
    Some(charset.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passes_valid_charset_through_unchanged() {
        assert_eq!(
            resolve_charset("page.html", Some("UTF-8")),
            Some("UTF-8".to_string()),
            "The label must be returned exactly as supplied, not normalized"
        );
    }

    #[test]
    fn test_recognition_is_case_insensitive() {
        assert_eq!(
            resolve_charset("notes.txt", Some("utf-8")),
            Some("utf-8".to_string())
        );
        assert_eq!(
            resolve_charset("notes.txt", Some("Windows-1252")),
            Some("Windows-1252".to_string())
        );
    }

    #[test]
    fn test_absent_override_yields_no_charset() {
        assert_eq!(resolve_charset("page.html", None), None);
        assert_eq!(resolve_charset("page.html", Some("")), None);
    }

    #[test]
    fn test_unrecognized_override_is_silently_dropped() {
        assert_eq!(resolve_charset("page.txt", Some("bogus-charset-xyz")), None);
    }

    #[test]
    fn test_charset_never_applies_to_images() {
        assert_eq!(
            resolve_charset("icon.gif", Some("UTF-8")),
            None,
            "Even a valid charset must be skipped for image extensions"
        );
        assert_eq!(resolve_charset("photo.png", Some("ISO-8859-1")), None);
    }

    #[test]
    fn test_unknown_extension_still_gets_charset() {
        // The image check keys off the extension only; an unknown extension
        // is not an image, so a valid override passes through.
        assert_eq!(
            resolve_charset("notes.dat", Some("UTF-8")),
            Some("UTF-8".to_string())
        );
    }
}
