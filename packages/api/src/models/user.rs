//! # User projection
//!
//! The backend owns the user record; the pages only ever hold the subset
//! returned by `GET /user/details`:
//!
//! ```json
//! { "name": "Ada", "email": "ada@example.com",
//!   "preferences": { "defaultLanguage": "en", "darkMode": true, "textSize": "large" } }
//! ```
//!
//! Every preference field has a default so that older accounts without a
//! `preferences` object, or with a partial one, still load. An explicit
//! `null` counts as absent, and an unknown `textSize` reads as medium.

use serde::{Deserialize, Deserializer, Serialize};

/// The authenticated user as seen by the client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub preferences: Preferences,
}

impl User {
    /// Up to two uppercase initials for the header avatar.
    pub fn initials(&self) -> String {
        let initials: String = self
            .name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect();
        if initials.is_empty() {
            "?".to_string()
        } else {
            initials
        }
    }
}

/// Per-user display preferences, edited on the profile page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default, deserialize_with = "null_as_default")]
    pub default_language: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dark_mode: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub text_size: TextSize,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl TextSize {
    pub const ALL: [TextSize; 3] = [TextSize::Small, TextSize::Medium, TextSize::Large];

    pub fn as_str(&self) -> &'static str {
        match self {
            TextSize::Small => "small",
            TextSize::Medium => "medium",
            TextSize::Large => "large",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TextSize::Small => "Small",
            TextSize::Medium => "Medium",
            TextSize::Large => "Large",
        }
    }

    /// Parse a form value; unknown values fall back to the default.
    pub fn from_value(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|size| size.as_str() == value)
            .unwrap_or_default()
    }
}

impl<'de> Deserialize<'de> for TextSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(value) => Ok(Self::from_value(&value)),
            _ => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_full_user() {
        let user: User = serde_json::from_value(json!({
            "_id": "65f0c0ffee",
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "preferences": { "defaultLanguage": "en", "darkMode": true, "textSize": "large" }
        }))
        .unwrap();

        assert_eq!(user.name, "Ada Lovelace");
        assert_eq!(user.preferences.default_language, "en");
        assert!(user.preferences.dark_mode);
        assert_eq!(user.preferences.text_size, TextSize::Large);
    }

    #[test]
    fn test_missing_preferences_default() {
        let user: User =
            serde_json::from_value(json!({ "name": "Ada", "email": "ada@example.com" })).unwrap();
        assert_eq!(user.preferences, Preferences::default());
        assert_eq!(user.preferences.text_size, TextSize::Medium);
    }

    #[test]
    fn test_preferences_encode_camel_case() {
        let prefs = Preferences {
            default_language: "fr".to_string(),
            dark_mode: true,
            text_size: TextSize::Small,
        };
        assert_eq!(
            serde_json::to_value(&prefs).unwrap(),
            json!({ "defaultLanguage": "fr", "darkMode": true, "textSize": "small" })
        );
    }

    #[test]
    fn test_initials() {
        let mut user = User::default();
        assert_eq!(user.initials(), "?");
        user.name = "aaliya khadija".to_string();
        assert_eq!(user.initials(), "AK");
        user.name = "Grace Brewster Hopper".to_string();
        assert_eq!(user.initials(), "GB");
        user.name = "  plato ".to_string();
        assert_eq!(user.initials(), "P");
    }

    #[test]
    fn test_null_preferences_default() {
        let user: User = serde_json::from_value(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "preferences": null
        }))
        .unwrap();
        assert_eq!(user.name, "Ada");
        assert_eq!(user.preferences, Preferences::default());
    }

    #[test]
    fn test_null_preference_fields_default() {
        let prefs: Preferences = serde_json::from_value(json!({
            "defaultLanguage": null,
            "darkMode": null,
            "textSize": null
        }))
        .unwrap();
        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn test_unknown_text_size_is_medium() {
        let prefs: Preferences = serde_json::from_value(json!({
            "defaultLanguage": "en",
            "darkMode": true,
            "textSize": "x-large"
        }))
        .unwrap();
        assert_eq!(prefs.text_size, TextSize::Medium);
        assert_eq!(prefs.default_language, "en");
        assert!(prefs.dark_mode);
    }

    #[test]
    fn test_text_size_from_value() {
        assert_eq!(TextSize::from_value("large"), TextSize::Large);
        assert_eq!(TextSize::from_value("huge"), TextSize::Medium);
    }
}
