use crate::utils::error::{DescriptorError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(DescriptorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(DescriptorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// The output file lives directly inside the scanned folder, so only a bare
/// `*.json` file name is accepted.
pub fn validate_output_filename(field_name: &str, filename: &str) -> Result<()> {
    validate_non_empty_string(field_name, filename)?;

    if filename.contains('/') || filename.contains('\\') || filename == "." || filename == ".." {
        return Err(DescriptorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: filename.to_string(),
            reason: "Must be a file name, not a path".to_string(),
        });
    }

    let is_json = std::path::Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if !is_json {
        return Err(DescriptorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: filename.to_string(),
            reason: "Output file must have a .json extension".to_string(),
        });
    }

    Ok(())
}

pub fn validate_extensions(field_name: &str, extensions: &[String]) -> Result<()> {
    for ext in extensions {
        validate_non_empty_string(field_name, ext)?;

        if ext.starts_with('.') {
            return Err(DescriptorError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: ext.clone(),
                reason: format!("Write extensions without the leading dot, e.g. '{}'", &ext[1..]),
            });
        }
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| DescriptorError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DescriptorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("path", "./assets").is_ok());
        assert!(validate_path("path", "").is_err());
        assert!(validate_path("path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_output_filename() {
        assert!(validate_output_filename("output_file", "descriptors.json").is_ok());
        assert!(validate_output_filename("output_file", "Cards.JSON").is_ok());
        assert!(validate_output_filename("output_file", "").is_err());
        assert!(validate_output_filename("output_file", "out/descriptors.json").is_err());
        assert!(validate_output_filename("output_file", "descriptors.txt").is_err());
    }

    #[test]
    fn test_validate_extensions() {
        let exts = vec!["json".to_string(), "txt".to_string()];
        assert!(validate_extensions("exclude_ext", &exts).is_ok());

        let dotted = vec![".json".to_string()];
        assert!(validate_extensions("exclude_ext", &dotted).is_err());

        let blank = vec![" ".to_string()];
        assert!(validate_extensions("exclude_ext", &blank).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("assets".to_string());
        assert_eq!(validate_required_field("path", &present).unwrap(), "assets");

        let missing: Option<String> = None;
        assert!(matches!(
            validate_required_field("path", &missing),
            Err(DescriptorError::MissingConfigError { .. })
        ));
    }
}
