//! Lead-capture form entity and payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::hex_color::validate_hex_color;

/// A single field definition within a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFieldDef {
    pub name: String,
    pub label: String,
    /// Input kind, e.g. `text`, `email`, `phone`.
    pub field_type: String,
    pub required: bool,
}

/// Visual theme applied to a form's submit button.
#[derive(Debug, Clone, PartialEq, Eq, Validate, Serialize, Deserialize)]
pub struct FormTheme {
    #[validate(custom(function = validate_hex_color))]
    pub button_color: String,
}

impl Default for FormTheme {
    fn default() -> Self {
        Self {
            button_color: "#007AFF".to_string(),
        }
    }
}

/// A lead-capture form. Links reference forms by id without owning them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Form {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Ordered field definitions rendered top to bottom.
    pub fields: Vec<FormFieldDef>,
    pub theme: FormTheme,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input data for creating a form.
#[derive(Debug, Clone, Validate, Serialize, Deserialize)]
pub struct NewForm {
    #[validate(length(min = 1, message = "form name must not be empty"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub fields: Vec<FormFieldDef>,
    #[validate(nested)]
    #[serde(default)]
    pub theme: FormTheme,
}

/// Partial update for an existing form. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct FormPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub fields: Option<Vec<FormFieldDef>>,
    pub theme: Option<FormTheme>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_new_form_requires_name() {
        let new_form = NewForm {
            name: String::new(),
            description: "desc".to_string(),
            fields: vec![],
            theme: FormTheme::default(),
        };

        assert!(new_form.validate().is_err());
    }

    #[test]
    fn test_new_form_valid() {
        let new_form = NewForm {
            name: "Newsletter Signup".to_string(),
            description: String::new(),
            fields: vec![FormFieldDef {
                name: "email".to_string(),
                label: "Email".to_string(),
                field_type: "email".to_string(),
                required: true,
            }],
            theme: FormTheme::default(),
        };

        assert!(new_form.validate().is_ok());
    }

    #[test]
    fn test_theme_rejects_invalid_color() {
        let theme = FormTheme {
            button_color: "red".to_string(),
        };

        assert!(theme.validate().is_err());
    }
}
