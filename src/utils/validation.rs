use crate::core::compositor::MAX_SPACING;
use crate::utils::error::{Result, SpreadError};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: impl ToString, reason: impl Into<String>) -> SpreadError {
    SpreadError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// The spread is written to a single file, so the path must name one.
pub fn validate_output_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(invalid(field_name, path, "the spread needs an output file name"));
    }

    if path.contains('\0') {
        return Err(invalid(field_name, path, "output file name contains a NUL byte"));
    }

    if path.ends_with(['/', '\\']) || Path::new(path).is_dir() {
        return Err(invalid(
            field_name,
            path,
            "output points at a directory, not a PNG file",
        ));
    }

    Ok(())
}

pub fn validate_cards_dir(field_name: &str, dir: &str) -> Result<()> {
    if dir.trim().is_empty() {
        return Err(invalid(field_name, dir, "card image directory is not set"));
    }
    Ok(())
}

pub fn validate_spacing(field_name: &str, spacing: u32) -> Result<()> {
    if spacing > MAX_SPACING {
        return Err(invalid(
            field_name,
            spacing,
            format!("gap between cards must be at most {} pixels", MAX_SPACING),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_output_path() {
        assert!(validate_output_path("output", "spread.png").is_ok());
        assert!(validate_output_path("output", "").is_err());
        assert!(validate_output_path("output", "bad\0name.png").is_err());
        assert!(validate_output_path("output", "readings/").is_err());
    }

    #[test]
    fn test_existing_directory_is_not_an_output_file() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().to_str().unwrap();

        match validate_output_path("output", dir) {
            Err(SpreadError::InvalidConfigValueError { field, reason, .. }) => {
                assert_eq!(field, "output");
                assert!(reason.contains("directory"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_validate_cards_dir() {
        assert!(validate_cards_dir("cards_dir", "cards").is_ok());
        assert!(validate_cards_dir("cards_dir", "   ").is_err());
    }

    #[test]
    fn test_validate_spacing() {
        assert!(validate_spacing("spacing", 20).is_ok());
        assert!(validate_spacing("spacing", 0).is_ok());
        assert!(validate_spacing("spacing", MAX_SPACING).is_ok());

        let err = validate_spacing("spacing", MAX_SPACING + 1).unwrap_err();
        assert!(err.to_string().contains("at most 4096 pixels"));
    }
}
