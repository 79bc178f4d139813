use serde::{Deserialize, Serialize};

/// Author identity merged into generated documents.
///
/// Loaded once at startup from a JSON profile file. Every field may be
/// empty; a partial profile is not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "linkedIn")]
    pub linked_in: String,
    pub location: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linked_in_uses_camel_case_key() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"linkedIn": "linkedin.com/in/jane"}"#).unwrap();
        assert_eq!(profile.linked_in, "linkedin.com/in/jane");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let profile: UserProfile = serde_json::from_str(r#"{"name": "Jane Doe"}"#).unwrap();
        assert_eq!(profile.name, "Jane Doe");
        assert_eq!(profile.email, "");
        assert_eq!(profile.location, "");
    }
}
