//! Hand-built `multipart/form-data` bodies and `Content-Disposition` parsing.

use crate::FilePayload;
use crate::params::ParameterMap;
use regex::Regex;
use std::sync::LazyLock;
use std::time::{SystemTime, UNIX_EPOCH};

/// Part name the service expects for every uploaded file.
pub(crate) const FILE_PART_NAME: &str = "filefoobarname";

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

// First literal `filename=` token; quoted or bare up to the next `;`.
static FILENAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"filename=(?:"([^"]*)"|([^;]*))"#).expect("filename pattern is valid")
});

/// Generate a boundary token that will not appear in ordinary payloads.
pub(crate) fn boundary() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    format!("----------------{nanos:x}{:08x}", rand::random::<u32>())
}

/// Value for the request's `Content-Type` header.
pub(crate) fn content_type(boundary: &str) -> String {
    format!("multipart/form-data; boundary={boundary}")
}

/// Escape a part header parameter value so it cannot end the quoted string
/// or start a new header line.
fn escape_param(value: &str) -> String {
    value
        .replace('"', "%22")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Build the full request body: field parts, file parts, closing boundary.
pub(crate) fn encode(boundary: &str, fields: &ParameterMap, files: &[FilePayload]) -> Vec<u8> {
    let mut body = Vec::new();

    for (name, value) in fields.iter() {
        let name = escape_param(name);
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }

    for file in files {
        let content_type = file
            .content_type
            .as_deref()
            .unwrap_or(DEFAULT_CONTENT_TYPE)
            .replace(['\r', '\n'], "");
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"{FILE_PART_NAME}\"; filename=\"{}\"\r\nContent-Type: {content_type}\r\n\r\n",
                escape_param(&file.file_name)
            )
            .as_bytes(),
        );
        body.extend_from_slice(&file.content);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());
    body
}

/// Extract the file name from a `Content-Disposition` header value.
///
/// Matching is case-sensitive on `filename=` and the first token wins.
pub fn extract_filename(header: &str) -> Option<String> {
    let captures = FILENAME_RE.captures(header)?;
    captures
        .get(1)
        .or_else(|| captures.get(2))
        .map(|m| m.as_str().trim().to_string())
}
