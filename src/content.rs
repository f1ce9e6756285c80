//! Content store - read-only tables behind every view
//!
//! The built-in tables are compiled in from `assets/content.json`; a
//! replacement file with the same schema can be supplied at startup.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Experience, LocalizedAbout, Owner, Photo, Project, Skill};

const BUILTIN_CONTENT: &str = include_str!("../assets/content.json");

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("duplicate project id '{0}'")]
    DuplicateProject(String),
    #[error("duplicate photo id '{0}'")]
    DuplicatePhoto(String),
    #[error("photo '{0}' must have a positive width and height")]
    InvalidAspect(String),
    #[error("skill '{name}' level {level} is above 100")]
    SkillOutOfRange { name: String, level: u8 },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentStore {
    #[serde(default)]
    pub owner: Owner,
    #[serde(default)]
    pub about: LocalizedAbout,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

impl ContentStore {
    /// 内置内容
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_CONTENT).context("Failed to load built-in content")
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let store: ContentStore = serde_json::from_str(json).context("Invalid content JSON")?;
        store.validate()?;
        Ok(store)
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read content file {}", path.display()))?;
        Self::from_json_str(&json)
            .with_context(|| format!("Failed to load content file {}", path.display()))
    }

    /// Custom file if given and loadable, otherwise the built-in tables.
    /// Never fails: broken content degrades to an empty store.
    pub fn load_or_builtin(custom: Option<&Path>) -> Self {
        if let Some(path) = custom {
            match Self::load_from_file(path) {
                Ok(store) => {
                    tracing::info!(path = %path.display(), projects = store.projects.len(), "loaded custom content");
                    return store;
                }
                Err(e) => tracing::warn!("{:#}, falling back to built-in content", e),
            }
        }
        match Self::builtin() {
            Ok(store) => store,
            Err(e) => {
                tracing::error!("{:#}", e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        let mut seen = HashSet::new();
        for project in &self.projects {
            if !seen.insert(project.id.as_str()) {
                return Err(ContentError::DuplicateProject(project.id.clone()));
            }
        }

        let mut seen = HashSet::new();
        for photo in &self.photos {
            if !seen.insert(photo.id.as_str()) {
                return Err(ContentError::DuplicatePhoto(photo.id.clone()));
            }
            if photo.width == 0 || photo.height == 0 {
                return Err(ContentError::InvalidAspect(photo.id.clone()));
            }
        }

        if let Some(skill) = self.skills.iter().find(|s| s.level > 100) {
            return Err(ContentError::SkillOutOfRange {
                name: skill.name.clone(),
                level: skill.level,
            });
        }
        Ok(())
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn photo(&self, id: &str) -> Option<&Photo> {
        self.photos.iter().find(|p| p.id == id)
    }
}
