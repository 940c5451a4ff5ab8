use crate::utils::error::{CalcError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 重量欄位：必須是有限且不小於 0 的克數
pub fn validate_grams(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid_value(
            field_name,
            value,
            "Weight must be a finite number",
        ));
    }
    if value < 0.0 {
        return Err(CalcError::invalid_value(
            field_name,
            value,
            "Weight cannot be negative",
        ));
    }
    Ok(())
}

pub fn validate_ratio(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(CalcError::invalid_value(
            field_name,
            value,
            "Ratio must be a finite number not below 0",
        ));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    // NaN 比較皆為 false，需要明確擋下
    if !(value >= min && value <= max) {
        return Err(CalcError::invalid_value(
            field_name,
            value,
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CalcError::invalid_value(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_unique_ids<'a, I>(field_name: &str, ids: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CalcError::invalid_value(
                field_name,
                id,
                "Duplicate preset id",
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_grams() {
        assert!(validate_grams("flour", 500.0).is_ok());
        assert!(validate_grams("flour", 0.0).is_ok());
        assert!(validate_grams("flour", -1.0).is_err());
        assert!(validate_grams("flour", f64::NAN).is_err());
        assert!(validate_grams("flour", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("rice.ratio", 1.3, 1.0, 3.0).is_ok());
        assert!(validate_range("rice.ratio", 3.0, 1.0, 3.0).is_ok());
        assert!(validate_range("rice.ratio", 0.9, 1.0, 3.0).is_err());
        assert!(validate_range("rice.ratio", f64::NAN, 1.0, 3.0).is_err());
    }

    #[test]
    fn test_validate_unique_ids() {
        assert!(validate_unique_ids("rice", ["a", "b"]).is_ok());
        assert!(validate_unique_ids("rice", ["a", "a"]).is_err());
    }
}
