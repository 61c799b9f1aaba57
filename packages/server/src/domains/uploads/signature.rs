use sha2::{Digest, Sha256};

/// Sign an upload request for the media host
///
/// The signed parameters are serialized in alphabetical order as
/// `key=value` pairs joined by `&`, the API secret is appended, and the whole
/// string is hashed with SHA-256 (hex encoded).
pub fn sign_upload(folder: &str, timestamp: i64, api_secret: &str) -> String {
    let to_sign = format!("folder={}&timestamp={}{}", folder, timestamp, api_secret);

    let mut hasher = Sha256::new();
    hasher.update(to_sign.as_bytes());
    format!("{:x}", hasher.finalize())
}
