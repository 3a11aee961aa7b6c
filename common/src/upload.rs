use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

/// Largest accepted image file, in bytes.
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// Progress added per tick while an upload is in flight.
pub const PROGRESS_STEP: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadPolicy {
    pub max_bytes: u64,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_bytes: MAX_UPLOAD_BYTES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("{name} is not an image file")]
    NotAnImage { name: String },
    #[error("{name} is larger than {limit}")]
    TooLarge { name: String, limit: String },
    #[error("Failed to upload image. Please try again.")]
    Read(String),
}

/// File contents the upload stub turns into a data URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Validate a file from its metadata, before any bytes are read.
pub fn check_upload(
    name: &str,
    mime_type: Option<&str>,
    size: u64,
    policy: &UploadPolicy,
) -> Result<(), UploadError> {
    let is_image = mime_type.is_some_and(|m| m.trim().to_ascii_lowercase().starts_with("image/"));
    if !is_image {
        return Err(UploadError::NotAnImage { name: name.to_string() });
    }
    if size > policy.max_bytes {
        return Err(UploadError::TooLarge {
            name: name.to_string(),
            limit: format_size(policy.max_bytes),
        });
    }
    Ok(())
}

/// Human-readable byte count for messages: "5 MB", "1.5 MB", "512 KB".
pub fn format_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * 1024;
    if bytes >= MIB {
        if bytes % MIB == 0 {
            format!("{} MB", bytes / MIB)
        } else {
            format!("{:.1} MB", bytes as f64 / MIB as f64)
        }
    } else if bytes >= KIB {
        if bytes % KIB == 0 {
            format!("{} KB", bytes / KIB)
        } else {
            format!("{:.1} KB", bytes as f64 / KIB as f64)
        }
    } else {
        format!("{bytes} bytes")
    }
}

/// `data:<mime>;base64,<payload>`
pub fn to_data_url(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
}

impl UploadFile {
    pub fn check(&self, policy: &UploadPolicy) -> Result<(), UploadError> {
        check_upload(&self.name, Some(self.mime_type.as_str()), self.bytes.len() as u64, policy)
    }

    pub fn into_data_url(self) -> String {
        to_data_url(&self.mime_type, &self.bytes)
    }
}

/// State of the image control's upload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UploadState {
    #[default]
    Idle,
    Uploading { progress: u8 },
    Uploaded(String),
    Failed(String),
}

impl UploadState {
    pub fn started() -> Self {
        UploadState::Uploading { progress: 0 }
    }

    /// Advance the simulated progress bar. Never passes 100.
    pub fn tick(&mut self) {
        if let UploadState::Uploading { progress } = self {
            *progress = progress.saturating_add(PROGRESS_STEP).min(100);
        }
    }

    pub fn is_uploading(&self) -> bool {
        matches!(self, UploadState::Uploading { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            UploadState::Failed(msg) => Some(msg.as_str()),
            _ => None,
        }
    }

    pub fn finish(result: Result<String, UploadError>) -> Self {
        match result {
            Ok(url) => UploadState::Uploaded(url),
            Err(e) => UploadState::Failed(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_image() {
        let err = check_upload("notes.txt", Some("text/plain"), 10, &UploadPolicy::default())
            .unwrap_err();
        assert_eq!(err, UploadError::NotAnImage { name: "notes.txt".into() });
        assert!(check_upload("blob", None, 10, &UploadPolicy::default()).is_err());
    }

    #[test]
    fn test_size_limit() {
        let policy = UploadPolicy::default();
        assert!(check_upload("a.png", Some("image/png"), MAX_UPLOAD_BYTES, &policy).is_ok());
        let err = check_upload("a.png", Some("image/png"), MAX_UPLOAD_BYTES + 1, &policy)
            .unwrap_err();
        assert_eq!(err.to_string(), "a.png is larger than 5 MB");
    }

    #[test]
    fn test_small_limit_in_message() {
        let policy = UploadPolicy { max_bytes: 512 * 1024 };
        let err = check_upload("a.png", Some("image/png"), 600 * 1024, &policy).unwrap_err();
        assert_eq!(err.to_string(), "a.png is larger than 512 KB");

        assert_eq!(format_size(MAX_UPLOAD_BYTES), "5 MB");
        assert_eq!(format_size(1536 * 1024), "1.5 MB");
        assert_eq!(format_size(1500), "1.5 KB");
        assert_eq!(format_size(100), "100 bytes");
    }

    #[test]
    fn test_data_url() {
        let file = UploadFile {
            name: "dot.gif".into(),
            mime_type: "image/gif".into(),
            bytes: b"GIF89a".to_vec(),
        };
        assert!(file.check(&UploadPolicy::default()).is_ok());
        assert_eq!(file.into_data_url(), "data:image/gif;base64,R0lGODlh");
    }

    #[test]
    fn test_progress_caps_at_100() {
        let mut state = UploadState::started();
        for _ in 0..15 {
            state.tick();
        }
        assert_eq!(state, UploadState::Uploading { progress: 100 });

        let mut idle = UploadState::Idle;
        idle.tick();
        assert_eq!(idle, UploadState::Idle);
    }

    #[test]
    fn test_finish_reports_message() {
        let failed = UploadState::finish(Err(UploadError::Read("eof".into())));
        assert_eq!(failed.error(), Some("Failed to upload image. Please try again."));
        assert!(!failed.is_uploading());
    }
}
