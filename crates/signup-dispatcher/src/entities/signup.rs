use serde::{Deserialize, Serialize};

/// Body of the signup submission sent on every iteration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub accept: bool,
}

impl SignupRequest {
    /// Create a request for `email` with the terms accepted
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            accept: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_request_accepts_by_default() {
        let request = SignupRequest::new("user@example.com");
        assert_eq!(request.email, "user@example.com");
        assert!(request.accept);
    }

    #[test]
    fn test_signup_request_wire_shape() {
        let value = serde_json::to_value(SignupRequest::new("a@b.c")).unwrap();
        assert_eq!(value, serde_json::json!({"email": "a@b.c", "accept": true}));
    }
}
