//! Data-URL image decoding at the HTTP boundary.
//!
//! Clients attach images as `data:<mime>;base64,<payload>` strings.
//! Malformed payloads are rejected here, before the router runs, so no
//! session state is mutated for a bad upload.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use std::fmt;

/// Errors from decoding a data URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageDataError {
    /// The string does not start with `data:`.
    MissingScheme,
    /// No `;base64,` marker separating media type and payload.
    MissingBase64Marker,
    /// The payload is not valid base64.
    InvalidPayload { reason: String },
}

impl fmt::Display for ImageDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingScheme => write!(f, "image data is not a data: URL"),
            Self::MissingBase64Marker => {
                write!(f, "image data has no base64 marker")
            }
            Self::InvalidPayload { reason } => {
                write!(f, "image payload is not valid base64: {reason}")
            }
        }
    }
}

impl std::error::Error for ImageDataError {}

/// Decodes a data URL into raw bytes and a media type.
pub fn parse_data_url(data_url: &str) -> Result<(Vec<u8>, String), ImageDataError> {
    let rest = data_url
        .strip_prefix("data:")
        .ok_or(ImageDataError::MissingScheme)?;
    let (media_type, payload) = rest
        .split_once(";base64,")
        .ok_or(ImageDataError::MissingBase64Marker)?;
    let bytes = BASE64
        .decode(payload.trim())
        .map_err(|e| ImageDataError::InvalidPayload {
            reason: e.to_string(),
        })?;
    Ok((bytes, media_type.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_png_data_url() {
        let url = format!("data:image/png;base64,{}", BASE64.encode([0x89, 0x50, 0x4e, 0x47]));
        let (bytes, media_type) = parse_data_url(&url).expect("decode");
        assert_eq!(bytes, vec![0x89, 0x50, 0x4e, 0x47]);
        assert_eq!(media_type, "image/png");
    }

    #[test]
    fn rejects_non_data_url() {
        assert_eq!(
            parse_data_url("https://ejemplo.com/foto.png"),
            Err(ImageDataError::MissingScheme)
        );
    }

    #[test]
    fn rejects_missing_base64_marker() {
        assert_eq!(
            parse_data_url("data:image/png,payload"),
            Err(ImageDataError::MissingBase64Marker)
        );
    }

    #[test]
    fn rejects_invalid_base64() {
        let result = parse_data_url("data:image/png;base64,!!!not-base64!!!");
        assert!(matches!(result, Err(ImageDataError::InvalidPayload { .. })));
    }
}
