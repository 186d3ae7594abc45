//! Declarative field schema for user records.
//!
//! A [`FieldSchema`] is plain data: an ordered list of [`FieldDescriptor`]s
//! that the validation engine interprets generically and the form UI renders
//! from. It is built once at startup (either [`FieldSchema::user_default`] or
//! loaded from JSON) and shared immutably afterwards.

use std::collections::HashSet;
use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::CoreError;

/// Input kind of a field. Drives presentation; only `Select` carries options.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Email,
    Tel,
    Number,
    Date,
    Select,
}

/// One allowed choice of a `select` field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldOption {
    pub label: String,
    pub value: String,
}

/// Format constraint attached to a field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldValidation {
    pub pattern: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A single schema entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    /// Wire name of the record attribute (e.g. `firstName`).
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<FieldOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<FieldValidation>,
}

impl FieldDescriptor {
    pub fn new(name: &str, label: &str, field_type: FieldType) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            field_type,
            required: false,
            placeholder: None,
            options: Vec::new(),
            validation: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }

    pub fn pattern(mut self, pattern: &str, message: &str) -> Self {
        self.validation = Some(FieldValidation {
            pattern: pattern.to_string(),
            message: Some(message.to_string()),
        });
        self
    }

    pub fn options(mut self, options: &[(&str, &str)]) -> Self {
        self.options = options
            .iter()
            .map(|(label, value)| FieldOption {
                label: label.to_string(),
                value: value.to_string(),
            })
            .collect();
        self
    }
}

/// Pattern used by the built-in schema for `email`.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Pattern used by the built-in schema for `phone`.
pub const PHONE_PATTERN: &str = r"^\+?[\d\s-]{10,}$";

#[derive(Debug, Clone)]
struct CompiledField {
    descriptor: FieldDescriptor,
    pattern: Option<Regex>,
}

/// Ordered, immutable set of field descriptors with their patterns compiled.
#[derive(Debug, Clone)]
pub struct FieldSchema {
    fields: Vec<CompiledField>,
}

impl FieldSchema {
    /// Build a schema, compiling every pattern.
    ///
    /// Rejects duplicate field names, `select` fields without options and
    /// patterns that do not compile.
    pub fn new(descriptors: Vec<FieldDescriptor>) -> Result<Self, CoreError> {
        let mut seen = HashSet::new();
        let mut fields = Vec::with_capacity(descriptors.len());

        for descriptor in descriptors {
            if descriptor.name.trim().is_empty() {
                return Err(CoreError::Validation(
                    "Field schema entry has an empty name".into(),
                ));
            }
            if !seen.insert(descriptor.name.clone()) {
                return Err(CoreError::Validation(format!(
                    "Duplicate field '{}' in schema",
                    descriptor.name
                )));
            }
            if descriptor.field_type == FieldType::Select && descriptor.options.is_empty() {
                return Err(CoreError::Validation(format!(
                    "Select field '{}' must declare at least one option",
                    descriptor.name
                )));
            }

            let pattern = match &descriptor.validation {
                Some(v) => Some(Regex::new(&v.pattern).map_err(|e| {
                    CoreError::Validation(format!(
                        "Invalid pattern for field '{}': {e}",
                        descriptor.name
                    ))
                })?),
                None => None,
            };

            fields.push(CompiledField {
                descriptor,
                pattern,
            });
        }

        Ok(Self { fields })
    }

    /// The built-in user schema.
    pub fn user_default() -> Self {
        Self::new(default_user_fields()).expect("built-in user schema is valid")
    }

    /// Parse a schema from a JSON array of descriptors.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let descriptors: Vec<FieldDescriptor> = serde_json::from_str(json)
            .map_err(|e| CoreError::Validation(format!("Invalid field schema JSON: {e}")))?;
        Self::new(descriptors)
    }

    /// Load a schema from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, CoreError> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            CoreError::Internal(format!(
                "Failed to read field schema {}: {e}",
                path.display()
            ))
        })?;
        Self::from_json(&json)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Look up a descriptor by field name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields
            .iter()
            .find(|f| f.descriptor.name == name)
            .map(|f| &f.descriptor)
    }

    /// Descriptors in presentation order.
    pub fn descriptors(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().map(|f| &f.descriptor)
    }

    /// Descriptors paired with their compiled pattern, in schema order.
    pub(crate) fn compiled(&self) -> impl Iterator<Item = (&FieldDescriptor, Option<&Regex>)> {
        self.fields
            .iter()
            .map(|f| (&f.descriptor, f.pattern.as_ref()))
    }
}

impl Serialize for FieldSchema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.descriptors())
    }
}

fn default_user_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::new("firstName", "First Name", FieldType::Text)
            .required()
            .placeholder("Enter first name"),
        FieldDescriptor::new("lastName", "Last Name", FieldType::Text)
            .required()
            .placeholder("Enter last name"),
        FieldDescriptor::new("email", "Email Address", FieldType::Email)
            .required()
            .placeholder("john@example.com")
            .pattern(EMAIL_PATTERN, "Please enter a valid email address"),
        FieldDescriptor::new("phone", "Phone Number", FieldType::Tel)
            .required()
            .placeholder("123-456-7890")
            .pattern(PHONE_PATTERN, "Enter a valid phone number (min 10 digits)"),
        FieldDescriptor::new("role", "Role", FieldType::Select)
            .required()
            .options(&[("Admin", "admin"), ("User", "user"), ("Guest", "guest")]),
    ]
}
