//! Request-side models and the validation rules applied before any write.

use serde::Deserialize;

use crate::ServiceError;

/// Maximum body length, counted in characters after trimming.
pub const MAX_BODY_CHARS: usize = 1000;

/// Wire shape accepted on create. `id` and `completed` may be present in the
/// payload but are ignored; the store assigns the id and new todos start open.
/// A missing or `null` body reads as empty.
#[derive(Debug, Deserialize)]
struct CreateTodoDto {
    #[serde(default)]
    body: Option<String>,
}

/// A validated todo body, ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    body: String,
}

impl NewTodo {
    /// Parse an untyped create payload and validate it.
    ///
    /// Rules apply in order and the first failure wins: JSON shape, trim,
    /// non-empty, length.
    pub fn parse(payload: &[u8]) -> Result<Self, ServiceError> {
        let dto: CreateTodoDto = serde_json::from_slice(payload)
            .map_err(|e| ServiceError::InvalidFormat(e.to_string()))?;
        Self::from_body(dto.body.as_deref().unwrap_or_default())
    }

    /// Validate an already-extracted body.
    pub fn from_body(body: &str) -> Result<Self, ServiceError> {
        let body = body.trim();
        if body.is_empty() {
            return Err(ServiceError::EmptyBody);
        }
        let len = body.chars().count();
        if len > MAX_BODY_CHARS {
            return Err(ServiceError::BodyTooLong { len });
        }
        Ok(Self { body: body.to_owned() })
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Parse a path identifier. Only positive integers name a todo.
pub fn parse_id(raw: &str) -> Result<i32, ServiceError> {
    match parse_lookup_id(raw)? {
        id if id > 0 => Ok(id),
        _ => Err(ServiceError::InvalidId(raw.to_owned())),
    }
}

/// Parse a path identifier used only to look a row up. Any integer is
/// accepted; one the sequence never produces simply matches nothing.
pub fn parse_lookup_id(raw: &str) -> Result<i32, ServiceError> {
    raw.parse::<i32>()
        .map_err(|_| ServiceError::InvalidId(raw.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_is_trimmed() {
        let todo = NewTodo::parse(br#"{"body":"  buy milk \n"}"#).unwrap();
        assert_eq!(todo.body(), "buy milk");
    }

    #[test]
    fn extra_fields_are_ignored() {
        let todo = NewTodo::parse(br#"{"id":42,"body":"x","completed":true}"#).unwrap();
        assert_eq!(todo.body(), "x");
    }

    #[test]
    fn malformed_json_is_invalid_format() {
        let err = NewTodo::parse(b"{not json").unwrap_err();
        assert!(matches!(err, ServiceError::InvalidFormat(_)));
    }

    #[test]
    fn non_string_body_is_invalid_format() {
        let err = NewTodo::parse(br#"{"body":12}"#).unwrap_err();
        assert!(matches!(err, ServiceError::InvalidFormat(_)));
    }

    #[test]
    fn missing_body_counts_as_empty() {
        let err = NewTodo::parse(b"{}").unwrap_err();
        assert!(matches!(err, ServiceError::EmptyBody));
    }

    #[test]
    fn null_body_counts_as_empty() {
        let err = NewTodo::parse(br#"{"body":null}"#).unwrap_err();
        assert!(matches!(err, ServiceError::EmptyBody));
    }

    #[test]
    fn lookup_ids_accept_any_integer() {
        assert_eq!(parse_lookup_id("0").unwrap(), 0);
        assert_eq!(parse_lookup_id("-4").unwrap(), -4);
        for bad in ["abc", "1.5", "", "99999999999"] {
            assert!(matches!(parse_lookup_id(bad), Err(ServiceError::InvalidId(_))), "{bad}");
        }
    }

    #[test]
    fn whitespace_only_body_is_empty() {
        let err = NewTodo::from_body(" \t\n ").unwrap_err();
        assert!(matches!(err, ServiceError::EmptyBody));
    }

    #[test]
    fn length_limit_counts_characters_after_trim() {
        let exactly = "é".repeat(MAX_BODY_CHARS);
        assert!(NewTodo::from_body(&format!("  {exactly}  ")).is_ok());

        let over = "a".repeat(MAX_BODY_CHARS + 1);
        let err = NewTodo::from_body(&over).unwrap_err();
        assert!(matches!(err, ServiceError::BodyTooLong { len } if len == MAX_BODY_CHARS + 1));
    }

    #[test]
    fn ids_must_be_positive_integers() {
        assert_eq!(parse_id("7").unwrap(), 7);
        for bad in ["0", "-3", "abc", "1.5", "", "99999999999"] {
            assert!(matches!(parse_id(bad), Err(ServiceError::InvalidId(_))), "{bad}");
        }
    }
}
