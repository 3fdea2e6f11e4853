//! Content reference types

use log::debug;
use std::path::PathBuf;
use url::Url;

use crate::constants::{CONTENT_SCHEME, FILE_SCHEME};

/// A scheme-tagged reference to some file content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentReference {
    /// Served by a content provider; the identifier is the full reference
    Provider(String),
    /// Embeds a filesystem path directly
    File(PathBuf),
    /// Any other scheme, or text that is not a reference at all
    Unsupported(String),
}

impl ContentReference {
    /// Classifies a reference by its scheme. Scheme matching ignores case.
    pub fn parse(uri: &str) -> Self {
        let url = match Url::parse(uri) {
            Ok(url) => url,
            Err(e) => {
                debug!("Unparseable content reference {:?}: {}", uri, e);
                return ContentReference::Unsupported(String::new());
            }
        };

        let scheme = url.scheme();
        if scheme.eq_ignore_ascii_case(CONTENT_SCHEME) {
            ContentReference::Provider(uri.to_string())
        } else if scheme.eq_ignore_ascii_case(FILE_SCHEME) {
            ContentReference::File(decode_path(url.path()))
        } else {
            ContentReference::Unsupported(scheme.to_string())
        }
    }
}

/// Percent-decodes a `file` reference path. Decoded bytes need not be UTF-8.
#[cfg(unix)]
fn decode_path(encoded: &str) -> PathBuf {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let bytes = urlencoding::decode_binary(encoded.as_bytes());
    PathBuf::from(OsStr::from_bytes(&bytes))
}

#[cfg(not(unix))]
fn decode_path(encoded: &str) -> PathBuf {
    let bytes = urlencoding::decode_binary(encoded.as_bytes()).into_owned();
    match String::from_utf8(bytes) {
        Ok(decoded) => PathBuf::from(decoded),
        Err(e) => {
            debug!("Keeping {:?} encoded: {}", encoded, e);
            PathBuf::from(encoded)
        }
    }
}
