use crate::utils::error::{LocatorError, Result};
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn pincode_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d{6}$").expect("pincode pattern compiles"))
}

pub fn is_valid_pincode(pincode: &str) -> bool {
    pincode_pattern().is_match(pincode)
}

pub fn validate_pincode(pincode: &str) -> Result<()> {
    if is_valid_pincode(pincode) {
        Ok(())
    } else {
        Err(LocatorError::InvalidPincode {
            pincode: pincode.to_string(),
        })
    }
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(LocatorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(LocatorError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(LocatorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LocatorError::InvalidConfigValueError {
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
    fn test_validate_pincode() {
        assert!(validate_pincode("400001").is_ok());
        assert!(validate_pincode("000000").is_ok());
        assert!(validate_pincode("40001").is_err());
        assert!(validate_pincode("4000011").is_err());
        assert!(validate_pincode("40000a").is_err());
        assert!(validate_pincode(" 400001").is_err());
        assert!(validate_pincode("").is_err());
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("lookup_endpoint", "https://example.com").is_ok());
        assert!(validate_url("lookup_endpoint", "http://example.com").is_ok());
        assert!(validate_url("lookup_endpoint", "").is_err());
        assert!(validate_url("lookup_endpoint", "invalid-url").is_err());
        assert!(validate_url("lookup_endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("storage_path", "./data").is_ok());
        assert!(validate_non_empty_string("storage_path", "   ").is_err());
    }
}
