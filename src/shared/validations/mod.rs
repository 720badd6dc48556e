use super::types::DomainError;

/// Trim a required text field; empty after trimming is a validation error.
pub fn require_text(field: &str, value: &str) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Validation(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}

/// Trim an optional text field, collapsing blank values to `None`.
pub fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_text_trims() {
        assert_eq!(require_text("roll_number", "  R1 ").unwrap(), "R1");
    }

    #[test]
    fn require_text_rejects_blank() {
        let err = require_text("first_name", "   ").unwrap_err();
        assert_eq!(err.to_string(), "Validation: first_name is required");
    }

    #[test]
    fn optional_text_collapses_blank() {
        assert_eq!(optional_text(Some("  ")), None);
        assert_eq!(optional_text(None), None);
        assert_eq!(optional_text(Some(" Doe")), Some("Doe".to_string()));
    }
}
