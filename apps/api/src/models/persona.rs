use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// The static candidate identity injected into every persona prompt.
///
/// Individual fields never fail the document: `null` reads as absent, a
/// non-string name or background is rendered to text, and record lists keep
/// whatever JSON they hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonaProfile {
    #[serde(
        default,
        deserialize_with = "text_or_absent",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "text_or_absent",
        skip_serializing_if = "Option::is_none"
    )]
    pub background: Option<String>,
    #[serde(default)]
    pub skills: SkillsRepresentation,
    #[serde(default = "empty_records", deserialize_with = "records")]
    pub experience: Value,
    #[serde(default = "empty_records", deserialize_with = "records")]
    pub education: Value,
    #[serde(default = "empty_records", deserialize_with = "records")]
    pub projects: Value,
    /// Any other top-level keys in the document, returned untouched by GET /persona.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PersonaProfile {
    /// Profile served when no persona document is available.
    pub fn placeholder() -> Self {
        Self {
            name: Some("Sample User".to_string()),
            background: Some(
                "No persona data found. Please create persona_data.json".to_string(),
            ),
            skills: SkillsRepresentation::default(),
            experience: empty_records(),
            education: empty_records(),
            projects: empty_records(),
            extra: Map::new(),
        }
    }
}

fn empty_records() -> Value {
    Value::Array(Vec::new())
}

fn text_or_absent<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        other => Some(value_to_text(&other)),
    })
}

fn records<'de, D>(deserializer: D) -> Result<Value, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => empty_records(),
        other => other,
    })
}

/// The shapes a persona's `skills` field may take, resolved once at load time.
///
/// Serializes back to the shape it was read from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum SkillsRepresentation {
    /// `{"frontend": ["React"], "backend": ["Rust", "SQL"]}`, in document order.
    /// Categories whose value is not a list are dropped.
    Mapping(Vec<(String, Vec<String>)>),
    /// `["React", "Rust"]`
    FlatList(Vec<String>),
    /// Anything else, rendered as-is.
    Scalar(Value),
}

impl Default for SkillsRepresentation {
    fn default() -> Self {
        SkillsRepresentation::FlatList(Vec::new())
    }
}

impl SkillsRepresentation {
    /// Renders every skill as one comma-separated string.
    /// Mapping order is category order, then list order.
    pub fn flatten(&self) -> String {
        match self {
            SkillsRepresentation::Mapping(categories) => categories
                .iter()
                .flat_map(|(_, skills)| skills.iter().map(String::as_str))
                .collect::<Vec<_>>()
                .join(", "),
            SkillsRepresentation::FlatList(skills) => skills.join(", "),
            SkillsRepresentation::Scalar(value) => value_to_text(value),
        }
    }
}

impl From<Value> for SkillsRepresentation {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => SkillsRepresentation::Mapping(
                map.into_iter()
                    .filter_map(|(category, skills)| match skills {
                        Value::Array(items) => Some((category, strings(items))),
                        _ => None,
                    })
                    .collect(),
            ),
            Value::Array(items) => SkillsRepresentation::FlatList(strings(items)),
            Value::Null => SkillsRepresentation::default(),
            other => SkillsRepresentation::Scalar(other),
        }
    }
}

impl From<SkillsRepresentation> for Value {
    fn from(skills: SkillsRepresentation) -> Self {
        match skills {
            SkillsRepresentation::Mapping(categories) => Value::Object(
                categories
                    .into_iter()
                    .map(|(category, skills)| (category, Value::from(skills)))
                    .collect(),
            ),
            SkillsRepresentation::FlatList(skills) => Value::from(skills),
            SkillsRepresentation::Scalar(value) => value,
        }
    }
}

fn strings(items: Vec<Value>) -> Vec<String> {
    items.iter().map(value_to_text).collect()
}

/// Strings render without quotes; everything else renders as JSON.
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mapping_flattens_in_category_then_list_order() {
        let skills = SkillsRepresentation::from(json!({"a": ["x", "y"], "b": ["z"]}));
        assert_eq!(skills.flatten(), "x, y, z");
    }

    #[test]
    fn test_mapping_keeps_document_order_not_alphabetical() {
        let skills: SkillsRepresentation =
            serde_json::from_str(r#"{"zeta": ["Go"], "alpha": ["Rust"]}"#).unwrap();
        assert_eq!(skills.flatten(), "Go, Rust");
    }

    #[test]
    fn test_mapping_skips_non_list_categories() {
        let skills = SkillsRepresentation::from(json!({"a": ["x"], "note": "n/a", "b": ["z"]}));
        assert_eq!(skills.flatten(), "x, z");
    }

    #[test]
    fn test_flat_list_joins_directly() {
        let skills = SkillsRepresentation::from(json!(["React", "Node.js"]));
        assert_eq!(skills, SkillsRepresentation::FlatList(vec!["React".into(), "Node.js".into()]));
        assert_eq!(skills.flatten(), "React, Node.js");
    }

    #[test]
    fn test_scalar_is_rendered_as_is() {
        assert_eq!(SkillsRepresentation::from(json!("Rust and Go")).flatten(), "Rust and Go");
        assert_eq!(SkillsRepresentation::from(json!(42)).flatten(), "42");
    }

    #[test]
    fn test_empty_skills_flatten_to_empty_string() {
        assert_eq!(SkillsRepresentation::default().flatten(), "");
        assert_eq!(SkillsRepresentation::from(json!({})).flatten(), "");
    }

    #[test]
    fn test_skills_serialize_back_to_original_shape() {
        let original = json!({"frontend": ["React"], "backend": ["Rust", "SQL"]});
        let skills = SkillsRepresentation::from(original.clone());
        assert_eq!(serde_json::to_value(&skills).unwrap(), original);
    }

    #[test]
    fn test_profile_defaults_missing_fields() {
        let profile: PersonaProfile = serde_json::from_str(r#"{"background": "CS grad"}"#).unwrap();
        assert_eq!(profile.name, None);
        assert_eq!(profile.background.as_deref(), Some("CS grad"));
        assert_eq!(profile.experience, json!([]));
        assert_eq!(profile.projects, json!([]));
        assert_eq!(profile.skills.flatten(), "");
    }

    #[test]
    fn test_profile_keeps_unknown_keys() {
        let profile: PersonaProfile =
            serde_json::from_str(r#"{"name": "Asha", "location": "Pune"}"#).unwrap();
        assert_eq!(profile.extra.get("location"), Some(&json!("Pune")));
        let back = serde_json::to_value(&profile).unwrap();
        assert_eq!(back["location"], "Pune");
        assert_eq!(back["name"], "Asha");
    }

    #[test]
    fn test_placeholder_profile() {
        let profile = PersonaProfile::placeholder();
        assert_eq!(profile.name.as_deref(), Some("Sample User"));
        assert!(profile.background.unwrap().contains("persona_data.json"));
        assert_eq!(profile.skills, SkillsRepresentation::FlatList(Vec::new()));
        assert_eq!(profile.experience, json!([]));
    }

    #[test]
    fn test_absent_name_is_not_serialized() {
        let profile: PersonaProfile = serde_json::from_str(r#"{"background": "CS grad"}"#).unwrap();
        let back = serde_json::to_value(&profile).unwrap();
        assert!(back.get("name").is_none());
        assert_eq!(back["background"], "CS grad");
    }

    #[test]
    fn test_null_and_mistyped_fields_keep_the_document() {
        let profile: PersonaProfile = serde_json::from_str(
            r#"{"name": "Asha Rao", "background": null, "skills": null,
                "experience": "2 years", "projects": null}"#,
        )
        .unwrap();
        assert_eq!(profile.name.as_deref(), Some("Asha Rao"));
        assert_eq!(profile.background, None);
        assert_eq!(profile.skills, SkillsRepresentation::default());
        assert_eq!(profile.experience, json!("2 years"));
        assert_eq!(profile.projects, json!([]));
    }

    #[test]
    fn test_non_string_name_is_rendered_as_text() {
        let profile: PersonaProfile = serde_json::from_str(r#"{"name": 42}"#).unwrap();
        assert_eq!(profile.name.as_deref(), Some("42"));
    }
}
