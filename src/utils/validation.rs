use crate::utils::error::{ExpError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let text = path.to_string_lossy();

    if text.is_empty() {
        return Err(ExpError::InvalidConfigValue {
            field: field_name.to_string(),
            value: text.into_owned(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if text.contains('\0') {
        return Err(ExpError::InvalidConfigValue {
            field: field_name.to_string(),
            value: text.into_owned(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_absolute_path(field_name: &str, path: &Path) -> Result<()> {
    validate_path(field_name, path)?;

    if !path.is_absolute() {
        return Err(ExpError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.display().to_string(),
            reason: "Path must be absolute".to_string(),
        });
    }

    Ok(())
}
