use uuid::Uuid;

use crate::server::error::AppError;

/// Parses a UUID from a client-supplied string.
///
/// # Arguments
/// - `field` - Name of the request field, used in the error message
/// - `value` - The string to parse
///
/// # Returns
/// - `Ok(Uuid)` - Successfully parsed id
/// - `Err(AppError::BadRequest)` - The value is not a valid UUID
pub fn parse_id(field: &str, value: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(value.trim())
        .map_err(|_| AppError::BadRequest(format!("{} inválido: '{}'", field, value)))
}

/// Parses a required id field.
///
/// # Returns
/// - `Ok(Uuid)` - Successfully parsed id
/// - `Err(AppError::BadRequest)` - The field is missing, blank or not a valid UUID
pub fn required_id(field: &str, value: Option<&str>) -> Result<Uuid, AppError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => parse_id(field, v),
        None => Err(AppError::BadRequest(format!("{} é obrigatório", field))),
    }
}

/// Parses an optional id field. A blank string counts as absent.
pub fn optional_id(field: &str, value: Option<&str>) -> Result<Option<Uuid>, AppError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(|v| parse_id(field, v))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_uuid() {
        let id = Uuid::new_v4();

        let parsed = required_id("id", Some(&format!(" {} ", id))).unwrap();

        assert_eq!(parsed, id);
    }

    #[test]
    fn rejects_missing_and_invalid_ids() {
        assert!(matches!(
            required_id("id", None),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            required_id("id", Some("  ")),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            required_id("id", Some("42")),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn treats_blank_optional_id_as_absent() {
        assert_eq!(optional_id("biomeId", Some("")).unwrap(), None);
        assert_eq!(optional_id("biomeId", None).unwrap(), None);
        assert!(optional_id("biomeId", Some("nope")).is_err());
    }
}
