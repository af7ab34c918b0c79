/// Validation utilities for the mint form
use std::path::Path;

/// On-chain token names are capped at 32 bytes.
pub const MAX_NAME_LEN: usize = 32;

/// Image extensions the create form accepts.
const ALLOWED_IMAGE_EXTENSIONS: [&str; 3] = ["jpeg", "jpg", "png"];

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Validate the NFT display name
pub fn validate_name(name: &str) -> ValidationResult {
    if name.trim().is_empty() {
        return ValidationResult::err("Name is required");
    }

    if name.len() > MAX_NAME_LEN {
        return ValidationResult::err(format!("Name must be at most {} bytes", MAX_NAME_LEN));
    }

    ValidationResult::ok()
}

/// Validate the NFT description
pub fn validate_description(description: &str) -> ValidationResult {
    if description.trim().is_empty() {
        return ValidationResult::err("Description is required");
    }

    ValidationResult::ok()
}

/// Validate the selected image file: exactly one file, jpeg/jpg/png
pub fn validate_image(path: Option<&Path>) -> ValidationResult {
    let path = match path {
        Some(p) => p,
        None => return ValidationResult::err("Image is required"),
    };

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension {
        Some(ext) if ALLOWED_IMAGE_EXTENSIONS.contains(&ext.as_str()) => ValidationResult::ok(),
        _ => ValidationResult::err("Image must be a .jpeg, .jpg or .png file"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_name_validation() {
        assert!(validate_name("Solana Monkey #42").is_valid);
        assert!(!validate_name("").is_valid);
        assert!(!validate_name("   ").is_valid);
        assert!(!validate_name(&"x".repeat(33)).is_valid);
        assert!(validate_name(&"x".repeat(32)).is_valid);
    }

    #[test]
    fn test_description_validation() {
        assert!(validate_description("A monkey on a rocket").is_valid);
        assert!(!validate_description("").is_valid);
        assert!(!validate_description("  ").is_valid);
    }

    #[test]
    fn test_image_validation() {
        let png = PathBuf::from("/tmp/artwork.png");
        let jpg = PathBuf::from("/tmp/artwork.jpg");
        let jpeg = PathBuf::from("/tmp/ARTWORK.JPEG");
        let gif = PathBuf::from("/tmp/artwork.gif");
        let bare = PathBuf::from("/tmp/artwork");

        assert!(validate_image(Some(&png)).is_valid);
        assert!(validate_image(Some(&jpg)).is_valid);
        assert!(validate_image(Some(&jpeg)).is_valid);
        assert!(!validate_image(Some(&gif)).is_valid);
        assert!(!validate_image(Some(&bare)).is_valid);
        assert!(!validate_image(None).is_valid);
    }

    #[test]
    fn test_missing_image_message() {
        let result = validate_image(None);
        assert_eq!(result.error.as_deref(), Some("Image is required"));
    }
}
