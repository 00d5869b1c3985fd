use serde_json::Value;

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

/// Failure of a complex-feature query.
///
/// `Service` carries the service's `error` payload exactly as it was sent
/// (`Value::Null` when the failed response had no such field).
#[derive(Debug, Clone, PartialEq)]
pub enum QueryError {
    Service(Value),
    MalformedResponse(String),
}

impl QueryError {
    /// The service-supplied error value, if this is a service failure.
    pub fn service_value(&self) -> Option<&Value> {
        match self {
            QueryError::Service(value) => Some(value),
            QueryError::MalformedResponse(_) => None,
        }
    }
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryError::Service(Value::String(s)) => write!(f, "{s}"),
            QueryError::Service(Value::Null) => write!(f, "service request failed"),
            QueryError::Service(other) => write!(f, "{other}"),
            QueryError::MalformedResponse(reason) => write!(f, "malformed service response: {reason}"),
        }
    }
}

impl std::error::Error for QueryError {}

impl From<QueryError> for AppError {
    fn from(err: QueryError) -> Self {
        AppError::new(4, format!("Complex feature query failed: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn service_error_displays_string_payload_verbatim() {
        let err = QueryError::Service(json!("bad identifiers"));
        assert_eq!(err.to_string(), "bad identifiers");
        assert_eq!(err.service_value(), Some(&json!("bad identifiers")));
    }

    #[test]
    fn query_error_maps_to_data_exit_code() {
        let app: AppError = QueryError::MalformedResponse("missing features".into()).into();
        assert_eq!(app.exit_code(), 4);
        assert!(app.to_string().contains("missing features"));
    }
}
