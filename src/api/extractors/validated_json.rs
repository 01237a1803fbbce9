//! Validated JSON extractor.
//!
//! Deserializes the request body and runs the payload's field
//! constraints before the handler sees it. The stores never
//! re-validate, so bypassing this extractor bypasses validation.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::AppError;

pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        value
            .validate()
            .map_err(|e| AppError::validation(collect_violations(&e)))?;

        Ok(ValidatedJson(value))
    }
}

/// Flatten validation errors into "field: code: message" lines, one
/// per violated constraint.
fn collect_violations(errors: &validator::ValidationErrors) -> String {
    let mut violations: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map_or_else(|| "invalid value".to_string(), ToString::to_string);
                format!("{}: {}: {}", field, e.code, message)
            })
        })
        .collect();

    // field_errors() iterates a HashMap; sort for a stable message
    violations.sort();
    violations.join("; ")
}

#[cfg(test)]
mod tests {
    use super::collect_violations;
    use crate::domain::UserPayload;
    use validator::Validate;

    #[test]
    fn violations_are_sorted_and_coded() {
        let payload = UserPayload {
            id: None,
            username: "a".to_string(),
            age: 10,
            password: String::new(),
        };

        let errors = payload.validate().unwrap_err();
        let rendered = collect_violations(&errors);

        assert!(rendered.contains("id: required"));
        assert!(rendered.contains("username: length"));
        assert_eq!(rendered.matches("; ").count(), 3);
    }
}
