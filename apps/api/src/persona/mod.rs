//! Persona store — reads the candidate profile from a local JSON document.
//!
//! Never fails: a missing, unreadable or malformed document yields
//! `PersonaProfile::placeholder()`. The file is re-read on every call so edits
//! show up without a restart.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::models::persona::PersonaProfile;

#[derive(Debug, Clone)]
pub struct PersonaStore {
    path: PathBuf,
}

impl PersonaStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> PersonaProfile {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(
                    "Persona file {} not found, serving placeholder",
                    self.path.display()
                );
                return PersonaProfile::placeholder();
            }
            Err(e) => {
                warn!(
                    "Failed to read persona file {}: {e}, serving placeholder",
                    self.path.display()
                );
                return PersonaProfile::placeholder();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(profile) => profile,
            Err(e) => {
                warn!(
                    "Persona file {} is not a valid profile: {e}, serving placeholder",
                    self.path.display()
                );
                PersonaProfile::placeholder()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::persona::SkillsRepresentation;

    fn write_persona(dir: &tempfile::TempDir, contents: &str) -> PersonaStore {
        let path = dir.path().join("persona_data.json");
        std::fs::write(&path, contents).unwrap();
        PersonaStore::new(path)
    }

    #[tokio::test]
    async fn test_load_valid_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = write_persona(
            &dir,
            r#"{
                "name": "Asha Rao",
                "background": "B.Tech CSE graduate",
                "skills": {"frontend": ["React", "CSS"], "backend": ["Node.js"]},
                "experience": [{"company": "Acme", "role": "Intern"}],
                "education": [{"degree": "B.Tech"}],
                "projects": []
            }"#,
        );

        let profile = store.load().await;
        assert_eq!(profile.name.as_deref(), Some("Asha Rao"));
        assert_eq!(profile.skills.flatten(), "React, CSS, Node.js");
        assert_eq!(profile.experience.as_array().map(Vec::len), Some(1));
        assert_eq!(profile.education[0]["degree"], "B.Tech");
    }

    #[tokio::test]
    async fn test_missing_file_returns_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let store = PersonaStore::new(dir.path().join("absent.json"));

        let profile = store.load().await;
        assert_eq!(profile, PersonaProfile::placeholder());
        assert_eq!(profile.name.as_deref(), Some("Sample User"));
    }

    #[tokio::test]
    async fn test_malformed_file_returns_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let store = write_persona(&dir, "{ not json");

        assert_eq!(store.load().await, PersonaProfile::placeholder());
    }

    #[tokio::test]
    async fn test_document_without_name_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let store = write_persona(&dir, r#"{"skills": ["Rust"]}"#);

        let profile = store.load().await;
        assert_eq!(profile.name, None);
        assert_eq!(profile.skills, SkillsRepresentation::FlatList(vec!["Rust".into()]));
    }

    #[tokio::test]
    async fn test_file_is_reread_on_every_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = write_persona(&dir, r#"{"name": "First"}"#);
        assert_eq!(store.load().await.name.as_deref(), Some("First"));

        std::fs::write(store.path(), r#"{"name": "Second"}"#).unwrap();
        assert_eq!(store.load().await.name.as_deref(), Some("Second"));
    }

    #[tokio::test]
    async fn test_null_fields_do_not_discard_the_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = write_persona(
            &dir,
            r#"{"name": "Asha Rao", "background": "CS grad", "projects": null,
                "experience": "2 years as a freelancer"}"#,
        );

        let profile = store.load().await;
        assert_eq!(profile.name.as_deref(), Some("Asha Rao"));
        assert_eq!(profile.background.as_deref(), Some("CS grad"));
        assert_eq!(profile.projects, serde_json::json!([]));
        assert_eq!(profile.experience, serde_json::json!("2 years as a freelancer"));
    }
}
