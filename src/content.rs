use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::IslandError;
use crate::island::Stage;

const EMBEDDED_CONTENT: &str = include_str!("../assets/content.json");

/// Where a stage card's button leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    About,
    Projects,
    Contact,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageCard {
    pub stage: Stage,
    pub text: String,
    #[serde(default)]
    pub link: Option<Section>,
    #[serde(default)]
    pub link_label: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub date: String,
    #[serde(default)]
    pub accent: Option<String>,
    pub points: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub theme: Option<String>,
    pub description: String,
    pub link: String,
}

/// Everything the portfolio displays besides the island.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub stages: Vec<StageCard>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub experiences: Vec<Experience>,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Content {
    pub fn embedded() -> Result<Self, IslandError> {
        Ok(serde_json::from_str(EMBEDDED_CONTENT)?)
    }

    pub fn load(path: &Path) -> Result<Self, IslandError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn stage_card(&self, stage: Stage) -> Option<&StageCard> {
        self.stages.iter().find(|card| card.stage == stage)
    }
}
