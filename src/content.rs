#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

/// The content document compiled into the bundle.
const SHIPPED_CONTENT: &str = include_str!("../content/site.json");

/// Authoring defects found while loading the content document.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{list}[{index}].{field} must not be empty")]
    EmptyField {
        list: &'static str,
        index: usize,
        field: &'static str,
    },
    #[error("phases[{index}] is numbered {found}, expected {expected}")]
    PhaseSequence {
        index: usize,
        expected: u32,
        found: u32,
    },
    #[error("command `{0}` must start with '/'")]
    CommandPrefix(String),
    #[error("command `{0}` is listed more than once")]
    DuplicateCommand(String),
}

/// Icon slot shown at the top of feature and role cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    CommandLine,
    UserGroup,
    Cog,
    ChatBubble,
    ShieldCheck,
    Eye,
    Moon,
    User,
    UserMinus,
    UserPlus,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::CommandLine => "⌨️",
            Icon::UserGroup => "👥",
            Icon::Cog => "⚙️",
            Icon::ChatBubble => "💬",
            Icon::ShieldCheck => "🛡️",
            Icon::Eye => "👁️",
            Icon::Moon => "🌙",
            Icon::User => "👤",
            Icon::UserMinus => "👻",
            Icon::UserPlus => "🎭",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Icon::CommandLine => "icon-command-line",
            Icon::UserGroup => "icon-user-group",
            Icon::Cog => "icon-cog",
            Icon::ChatBubble => "icon-chat-bubble",
            Icon::ShieldCheck => "icon-shield-check",
            Icon::Eye => "icon-eye",
            Icon::Moon => "icon-moon",
            Icon::User => "icon-user",
            Icon::UserMinus => "icon-user-minus",
            Icon::UserPlus => "icon-user-plus",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Faction {
    VillagerTeam,
    WerewolfTeam,
}

impl Faction {
    pub fn label(self) -> &'static str {
        match self {
            Faction::VillagerTeam => "村人陣営",
            Faction::WerewolfTeam => "人狼陣営",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Faction::VillagerTeam => "faction-villager",
            Faction::WerewolfTeam => "faction-werewolf",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FeatureEntry {
    pub icon: Icon,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RoleEntry {
    pub icon: Icon,
    pub title: String,
    pub faction: Faction,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PhaseEntry {
    pub number: u32,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CommandEntry {
    pub command: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HeroContent {
    pub title: String,
    pub tagline: String,
    pub invite_label: String,
    pub features_label: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SectionHeadings {
    pub features: String,
    pub roles: String,
    pub game_flow: String,
    pub commands: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FooterContent {
    pub copyright: String,
    pub links: Vec<FooterLink>,
}

/// Everything the landing page displays, in presentation order.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SiteContent {
    pub hero: HeroContent,
    pub headings: SectionHeadings,
    pub features: Vec<FeatureEntry>,
    pub roles: Vec<RoleEntry>,
    pub phases: Vec<PhaseEntry>,
    pub commands: Vec<CommandEntry>,
    pub footer: FooterContent,
}

impl SiteContent {
    /// Loads the document embedded at build time.
    pub fn shipped() -> Result<Self, ContentError> {
        Self::from_json(SHIPPED_CONTENT)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        for (index, feature) in self.features.iter().enumerate() {
            require_text("features", index, "title", &feature.title)?;
            require_text("features", index, "description", &feature.description)?;
        }

        for (index, role) in self.roles.iter().enumerate() {
            require_text("roles", index, "title", &role.title)?;
            require_text("roles", index, "description", &role.description)?;
        }

        for (index, phase) in self.phases.iter().enumerate() {
            // Numbering is 1..N in list order, no gaps or repeats.
            let expected = index as u32 + 1;
            if phase.number != expected {
                return Err(ContentError::PhaseSequence {
                    index,
                    expected,
                    found: phase.number,
                });
            }
            require_text("phases", index, "title", &phase.title)?;
            require_text("phases", index, "description", &phase.description)?;
        }

        let mut seen = HashSet::new();
        for (index, command) in self.commands.iter().enumerate() {
            require_text("commands", index, "command", &command.command)?;
            require_text("commands", index, "description", &command.description)?;
            if !command.command.starts_with('/') {
                return Err(ContentError::CommandPrefix(command.command.clone()));
            }
            if !seen.insert(command.command.as_str()) {
                return Err(ContentError::DuplicateCommand(command.command.clone()));
            }
        }

        Ok(())
    }
}

fn require_text(
    list: &'static str,
    index: usize,
    field: &'static str,
    value: &str,
) -> Result<(), ContentError> {
    if value.trim().is_empty() {
        return Err(ContentError::EmptyField { list, index, field });
    }
    Ok(())
}
