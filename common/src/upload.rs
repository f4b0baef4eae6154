//! Menu file selected for upload, and the server's receipt.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::search_const::{ACCEPTED_UPLOAD_EXTENSIONS, ADVISORY_MAX_UPLOAD_BYTES};

/// A file picked in the upload form. Lives only until the submission finishes.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadTarget {
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: u64,
    /// Sent as a base64 string; server function arguments travel as JSON.
    #[serde(with = "base64_bytes")]
    pub bytes: Vec<u8>,
}

// omits `bytes`
impl std::fmt::Debug for UploadTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadTarget")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("size_bytes", &self.size_bytes)
            .finish()
    }
}

impl UploadTarget {
    /// Builds a target from what the browser reported. A missing or empty
    /// MIME type is guessed from the extension.
    pub fn new(file_name: impl Into<String>, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = content_type
            .filter(|ct| !ct.trim().is_empty())
            .unwrap_or_else(|| content_type_for_name(&file_name).to_string());
        Self {
            size_bytes: bytes.len() as u64,
            file_name,
            content_type,
            bytes,
        }
    }

    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }

    /// `data:` URL for the preview pane. Only images get one.
    pub fn preview_data_url(&self) -> Option<String> {
        if !self.is_image() {
            return None;
        }
        Some(format!("data:{};base64,{}", self.content_type, STANDARD.encode(&self.bytes)))
    }

    pub fn size_label(&self) -> String {
        human_size(self.size_bytes)
    }
}

mod base64_bytes {
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD.decode(encoded.as_bytes()).map_err(serde::de::Error::custom)
    }
}

/// Hint under the drop zone, e.g. `PDF, JPG, PNG (máx. 10MB)`.
pub fn upload_hint() -> String {
    format!("PDF, JPG, PNG (máx. {}MB)", ADVISORY_MAX_UPLOAD_BYTES / (1024 * 1024))
}

/// MIME type by extension, matching what the upload service stores.
pub fn content_type_for_name(file_name: &str) -> &'static str {
    match extension_of(file_name).as_deref() {
        Some("pdf") => "application/pdf",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

pub fn is_accepted_file_name(file_name: &str) -> bool {
    extension_of(file_name).is_some_and(|ext| ACCEPTED_UPLOAD_EXTENSIONS.contains(&ext.as_str()))
}

/// Value for the file input's `accept` attribute: `.pdf,.jpg,.jpeg,.png`.
pub fn accept_attribute() -> String {
    ACCEPTED_UPLOAD_EXTENSIONS.iter().map(|ext| format!(".{ext}")).collect::<Vec<_>>().join(",")
}

fn extension_of(file_name: &str) -> Option<String> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

fn human_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    let b = bytes as f64;
    if b < KB {
        format!("{} B", bytes)
    } else if b < KB * KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{:.1} MB", b / (KB * KB))
    }
}

/// Returned by the upload service once the file is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadReceipt {
    pub stored_name: String,
    pub url: String,
}
