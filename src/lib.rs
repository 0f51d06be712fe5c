//! # datauri
//!
//! Convert local files into base64-encoded `data:` URIs for inlining into
//! HTML, CSS, or anywhere else a self-contained resource is useful.
//!
//! The MIME type is resolved from the file extension using a fixed table of
//! common web formats (or taken verbatim from an override), an optional
//! charset label is attached for text formats, and the file's raw bytes are
//! base64-encoded into the payload:
//!
//! ```text
//! data:<mime-type>[;charset=<charset>];base64,<payload>
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use datauri::data_url::build_data_url;
//!
//! # fn main() -> Result<(), datauri::error::DataUrlError> {
//! let data_url = build_data_url(b"<p>hello</p>", "hello.html", None, Some("UTF-8"))?;
//! assert!(data_url.starts_with("data:text/html;charset=UTF-8;base64,"));
//! # Ok(())
//! # }
//! ```
//!
//! Reading straight from disk:
//!
//! ```rust,no_run
//! use datauri::data_url::file_to_data_url;
//!
//! # fn main() -> Result<(), datauri::error::DataUrlError> {
//! let data_url = file_to_data_url("logo.png", None, None)?;
//! # Ok(())
//! # }
//! ```

pub mod charset;
pub mod data_url;
pub mod error;
pub mod logger;
pub mod mime;
