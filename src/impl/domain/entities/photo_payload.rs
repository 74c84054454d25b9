/// Encodings a stored photo may arrive in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoPayload {
    /// Null, missing or blank.
    Absent,
    /// Hex digits that followed a `\x` marker (e.g. Postgres `bytea` output).
    HexEscaped(String),
    /// A complete `data:<mime>[;params][;base64],<payload>` URL.
    DataUrl(String),
    /// Bare base64 text, whitespace removed.
    Base64(String),
    /// A numeric byte buffer such as `{"type":"Buffer","data":[..]}`.
    ByteArray(Vec<u8>),
    Unrecognized,
}

/// What the UI shows for a photo field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoDisplay {
    DataUrl(String),
    /// No usable photo.
    Placeholder,
}

/// Form the storage layer expects on write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageEncoding {
    #[default]
    Base64,
    HexEscaped,
}

// --

impl PhotoDisplay {
    pub fn display_url(&self) -> Option<&str> {
        match self {
            PhotoDisplay::DataUrl(url) => Some(url),
            PhotoDisplay::Placeholder => None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, PhotoDisplay::Placeholder)
    }
}
