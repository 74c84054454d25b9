use std::sync::LazyLock;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use fractic_server_error::ServerError;
use regex::Regex;
use serde_json::{Map, Value};
use tracing::warn;

use crate::{
    entities::{PhotoDisplay, PhotoPayload, StorageEncoding},
    errors::InvalidPhotoDataUrl,
};

const HEX_MARKER: &str = "\\x";
const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

static DATA_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)^data:[a-z]+/[a-z0-9.+-]+(?:;[a-z0-9.+-]+=[^;,]*)*(?P<base64>;base64)?,(?P<payload>.+)$")
        .expect("hardcoded regex should be valid")
});
static BASE64_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9+/]+={0,2}$").expect("hardcoded regex should be valid")
});

impl PhotoPayload {
    /// Classifies a stored photo value. Checks run in a fixed order: absent,
    /// hex-escaped, data URL, bare base64, byte array.
    pub fn classify(value: &Value) -> Self {
        match value {
            Value::Null => PhotoPayload::Absent,
            Value::String(text) => Self::classify_text(text),
            Value::Object(map) => byte_array_object(map)
                .map_or(PhotoPayload::Unrecognized, PhotoPayload::ByteArray),
            Value::Array(items) => {
                byte_array(items).map_or(PhotoPayload::Unrecognized, PhotoPayload::ByteArray)
            }
            Value::Bool(_) | Value::Number(_) => PhotoPayload::Unrecognized,
        }
    }

    pub fn classify_text(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return PhotoPayload::Absent;
        }
        if let Some(hex_digits) = trimmed.strip_prefix(HEX_MARKER) {
            return PhotoPayload::HexEscaped(hex_digits.to_string());
        }
        if is_data_url(trimmed) {
            return PhotoPayload::DataUrl(trimmed.to_string());
        }
        let compact: String = trimmed.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        if BASE64_TEXT.is_match(&compact) {
            return PhotoPayload::Base64(compact);
        }
        PhotoPayload::Unrecognized
    }

    /// Never fails: anything that cannot be shown becomes the placeholder.
    pub fn decode(self) -> PhotoDisplay {
        match self {
            PhotoPayload::Absent | PhotoPayload::Unrecognized => PhotoDisplay::Placeholder,
            PhotoPayload::HexEscaped(hex_digits) => match hex::decode(&hex_digits) {
                Ok(bytes) => match std::str::from_utf8(&bytes).map(str::trim) {
                    // The store sometimes holds a data URL that was itself
                    // written as bytes.
                    Ok(text) if is_data_url(text) => PhotoDisplay::DataUrl(text.to_string()),
                    _ => wrap_bytes(&bytes),
                },
                Err(_) => PhotoDisplay::Placeholder,
            },
            PhotoPayload::DataUrl(url) => PhotoDisplay::DataUrl(url),
            PhotoPayload::Base64(payload) => {
                let mime = sniff_base64_mime(&payload);
                PhotoDisplay::DataUrl(format!("data:{};base64,{}", mime, payload))
            }
            PhotoPayload::ByteArray(bytes) => wrap_bytes(&bytes),
        }
    }

    fn variant_name(&self) -> &'static str {
        match self {
            PhotoPayload::Absent => "absent",
            PhotoPayload::HexEscaped(_) => "hex-escaped",
            PhotoPayload::DataUrl(_) => "data URL",
            PhotoPayload::Base64(_) => "base64",
            PhotoPayload::ByteArray(_) => "byte array",
            PhotoPayload::Unrecognized => "unrecognized",
        }
    }
}

/// Turns any stored photo value into something displayable.
pub fn decode_photo(value: &Value) -> PhotoDisplay {
    log_fallback(PhotoPayload::classify(value))
}

pub fn decode_photo_text(text: &str) -> PhotoDisplay {
    log_fallback(PhotoPayload::classify_text(text))
}

/// Strips the data URL prefix, leaving the base64 payload the store expects.
/// Text without a prefix is returned as is (trimmed).
pub fn encode_photo(data_url: &str) -> String {
    let trimmed = data_url.trim();
    if trimmed.starts_with("data:") {
        if let Some((_, payload)) = trimmed.split_once(";base64,") {
            return payload.to_string();
        }
    }
    trimmed.to_string()
}

pub fn encode_photo_as(data_url: &str, encoding: StorageEncoding) -> Result<String, ServerError> {
    let payload = encode_photo(data_url);
    match encoding {
        StorageEncoding::Base64 => Ok(payload),
        StorageEncoding::HexEscaped => {
            let bytes = STANDARD
                .decode(payload.as_bytes())
                .map_err(|e| InvalidPhotoDataUrl::with_debug(&e))?;
            Ok(format!("{}{}", HEX_MARKER, hex::encode(bytes)))
        }
    }
}

/// Data URL for freshly captured image bytes.
pub fn encode_photo_bytes(bytes: &[u8]) -> PhotoDisplay {
    wrap_bytes(bytes)
}

fn log_fallback(payload: PhotoPayload) -> PhotoDisplay {
    let variant = payload.variant_name();
    let is_absent = payload == PhotoPayload::Absent;
    let display = payload.decode();
    if display.is_placeholder() && !is_absent {
        warn!("{} photo payload could not be decoded, showing placeholder", variant);
    }
    display
}

/// `data:<mime>[;param=value]*[;base64],<payload>`. A base64 payload may be
/// line-wrapped but must otherwise be valid base64; any other payload only
/// needs to be non-empty.
fn is_data_url(text: &str) -> bool {
    let Some(captures) = DATA_URL.captures(text) else {
        return false;
    };
    let payload = &captures["payload"];
    if captures.name("base64").is_none() {
        return !payload.trim().is_empty();
    }
    let compact: String = payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    BASE64_TEXT.is_match(&compact)
}

fn wrap_bytes(bytes: &[u8]) -> PhotoDisplay {
    if bytes.is_empty() {
        return PhotoDisplay::Placeholder;
    }
    PhotoDisplay::DataUrl(format!(
        "data:{};base64,{}",
        sniff_mime(bytes),
        STANDARD.encode(bytes)
    ))
}

fn byte_array(items: &[Value]) -> Option<Vec<u8>> {
    items.iter().map(byte).collect()
}

fn byte_array_object(map: &Map<String, Value>) -> Option<Vec<u8>> {
    if let Some(Value::Array(items)) = map.get("data") {
        return byte_array(items);
    }
    // Array-like object: {"0": 137, "1": 80, ..., "length": n}.
    let length = map.get("length")?.as_u64()?;
    if length >= map.len() as u64 {
        return None;
    }
    (0..length)
        .map(|i| map.get(&i.to_string()).and_then(byte))
        .collect()
}

fn byte(value: &Value) -> Option<u8> {
    value.as_u64().and_then(|n| u8::try_from(n).ok())
}

fn sniff_mime(bytes: &[u8]) -> &'static str {
    match bytes {
        [0x89, b'P', b'N', b'G', ..] => "image/png",
        [0xFF, 0xD8, 0xFF, ..] => "image/jpeg",
        [b'G', b'I', b'F', b'8', ..] => "image/gif",
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => "image/webp",
        [b'B', b'M', ..] => "image/bmp",
        _ => DEFAULT_IMAGE_MIME,
    }
}

fn sniff_base64_mime(payload: &str) -> &'static str {
    // 16 base64 characters cover the 12 bytes the signatures need.
    let usable = payload.len().min(16) / 4 * 4;
    STANDARD
        .decode(&payload.as_bytes()[..usable])
        .map_or(DEFAULT_IMAGE_MIME, |head| sniff_mime(&head))
}
