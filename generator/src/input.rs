use std::{fs, path::PathBuf};

use encoding_rs::{Encoding, UTF_8};
use roxmltree::{Document, ParsingOptions};
use tracing::{info, warn};

use crate::error::CatalogError;

fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Reads the schema text from a file path or an `http(s)` URL.
///
/// The bytes are decoded as UTF-8 unless a byte order mark says otherwise.
pub fn read_input(source: &str) -> Result<String, CatalogError> {
    let bytes = if is_url(source) {
        fetch(source)?
    } else {
        fs::read(source).map_err(|source_err| CatalogError::InputRead {
            path: PathBuf::from(source),
            source: source_err,
        })?
    };

    let (text, encoding, had_errors) = Encoding::decode(UTF_8, &bytes);
    if had_errors {
        warn!(
            encoding = encoding.name(),
            "schema contains malformed sequences"
        );
    }
    info!(bytes = bytes.len(), source, "read schema");
    Ok(text.into_owned())
}

fn fetch(url: &str) -> Result<Vec<u8>, CatalogError> {
    reqwest::blocking::get(url)
        .and_then(|response| response.error_for_status())
        .and_then(|response| response.bytes())
        .map(|bytes| bytes.to_vec())
        .map_err(|source| CatalogError::InputFetch {
            url: url.to_string(),
            source,
        })
}

pub fn parse_document(text: &str, allow_dtd: bool) -> Result<Document<'_>, CatalogError> {
    let options = ParsingOptions {
        allow_dtd,
        ..ParsingOptions::default()
    };
    Ok(Document::parse_with_options(text, options)?)
}
