//! Registration form payload

use std::fmt;

use serde::Deserialize;

/// Wire names of the registration form fields.
pub mod fields {
    pub const FULL_NAME: &str = "fullName";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const PASSWORD: &str = "password";
    pub const CONFIRM_PASSWORD: &str = "confirmPassword";
}

/// A submitted registration form.
///
/// Every field is optional at the type level: an absent key and an explicit
/// `null` both decode to `None` and are reported by the validator as missing.
/// A value of any other JSON type fails deserialization.
#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

impl fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |value: &Option<String>| value.as_ref().map(|_| "<redacted>");
        f.debug_struct("RegistrationRequest")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("password", &redact(&self.password))
            .field("confirm_password", &redact(&self.confirm_password))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_camel_case_fields() {
        let request: RegistrationRequest = serde_json::from_str(
            r#"{"fullName":"Jane Doe","email":"jane@example.com","phone":"0812345678",
                "password":"secret123","confirmPassword":"secret123"}"#,
        )
        .unwrap();

        assert_eq!(request.full_name.as_deref(), Some("Jane Doe"));
        assert_eq!(request.confirm_password.as_deref(), Some("secret123"));
    }

    #[test]
    fn test_missing_and_null_fields_decode_to_none() {
        let request: RegistrationRequest =
            serde_json::from_str(r#"{"email":null,"unknown":1}"#).unwrap();

        assert!(request.full_name.is_none());
        assert!(request.email.is_none());
    }

    #[test]
    fn test_non_string_field_is_rejected() {
        let result = serde_json::from_str::<RegistrationRequest>(r#"{"phone":1234567890}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_debug_redacts_passwords() {
        let request = RegistrationRequest {
            password: Some("secret123".to_string()),
            ..Default::default()
        };

        let rendered = format!("{:?}", request);
        assert!(!rendered.contains("secret123"));
        assert!(rendered.contains("<redacted>"));
    }
}
