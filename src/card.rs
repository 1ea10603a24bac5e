use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::menu::{self, MenuAction};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileInfo {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub company: Option<String>,
    pub location: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkSet {
    pub email: String,
    pub resume: String,
    pub portfolio: String,
    pub github: String,
    pub linkedin: String,
    #[serde(default)]
    pub twitter: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tempo {
    Slow,
    Normal,
    Fast,
}

impl Default for Tempo {
    fn default() -> Self {
        Tempo::Normal
    }
}

impl Tempo {
    /// how long the in-progress spinner lingers after the launch call
    pub fn settle_millis(&self) -> u64 {
        match self {
            Tempo::Slow => 900,
            Tempo::Normal => 450,
            Tempo::Fast => 150,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub border: String,
    /// panel background, terminal default when unset
    #[serde(default)]
    pub background: Option<String>,
    pub accent: String,
    pub spinner: String,
    #[serde(default)]
    pub tempo: Tempo,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: "cyan".to_string(),
            background: None,
            accent: "green".to_string(),
            spinner: "white".to_string(),
            tempo: Tempo::Normal,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub profile: ProfileInfo,
    pub links: LinkSet,
    #[serde(default)]
    pub theme: Theme,
}

impl LinkSet {
    /// resolve a menu action to its configured URL
    pub fn url_for(&self, action: MenuAction) -> Option<&str> {
        match action {
            MenuAction::Email => Some(self.email.as_str()),
            MenuAction::Resume => Some(self.resume.as_str()),
            MenuAction::Portfolio => Some(self.portfolio.as_str()),
            MenuAction::Github => Some(self.github.as_str()),
            MenuAction::Linkedin => Some(self.linkedin.as_str()),
            MenuAction::Twitter => self.twitter.as_deref(),
            MenuAction::Quit => None,
        }
    }
}

impl Card {
    /// load a card: explicit path, then the user config dir, then the built-in card
    pub fn load(config: Option<&Path>) -> Result<Card> {
        let card = if let Some(path) = config {
            Self::read_file(path)?
        } else {
            match Self::default_config_path() {
                Some(path) if path.exists() => Self::read_file(&path)?,
                _ => Card::default(),
            }
        };

        card.validate()?;
        Ok(card)
    }

    fn read_file(path: &Path) -> Result<Card> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read card config: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("invalid card config: {}", path.display()))
    }

    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("termcard").join("card.json"))
    }

    /// startup-time contract check, so a broken card never reaches the dispatch loop
    pub fn validate(&self) -> Result<()> {
        if self.profile.name.trim().is_empty() {
            bail!("card config has an empty name");
        }
        if !self.links.email.starts_with("mailto:") {
            bail!("email link must be a mailto: URI, got '{}'", self.links.email);
        }

        let choices = menu::choices(&self.links);
        if choices.len() < 2 {
            bail!("menu has no actions besides quit");
        }
        for choice in &choices {
            if choice.action != MenuAction::Quit && self.links.url_for(choice.action).is_none() {
                bail!("menu entry '{}' has no configured link", choice.action.id());
            }
            if self
                .links
                .url_for(choice.action)
                .is_some_and(|url| url.trim().is_empty())
            {
                bail!("menu entry '{}' has an empty link", choice.action.id());
            }
        }

        Ok(())
    }
}

impl Default for Card {
    fn default() -> Self {
        Card {
            profile: ProfileInfo {
                name: "Jordan Reyes".to_string(),
                title: "Systems & Web Developer".to_string(),
                company: Some("Freelance".to_string()),
                location: "Lisbon, Portugal".to_string(),
                skills: vec![
                    "Rust".to_string(),
                    "TypeScript".to_string(),
                    "Go".to_string(),
                    "PostgreSQL".to_string(),
                    "Linux".to_string(),
                ],
            },
            links: LinkSet {
                email: "mailto:jordan@jreyes.dev".to_string(),
                resume: "https://jreyes.dev/resume.pdf".to_string(),
                portfolio: "https://jreyes.dev".to_string(),
                github: "https://github.com/jordanreyes".to_string(),
                linkedin: "https://linkedin.com/in/jordanreyes".to_string(),
                twitter: Some("https://twitter.com/jordanreyesdev".to_string()),
            },
            theme: Theme::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn default_card_is_valid() {
        assert!(Card::default().validate().is_ok());
    }

    #[test]
    fn load_from_file_round_trips() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("card.json");
        fs::write(&path, serde_json::to_string_pretty(&Card::default())?)?;

        let card = Card::load(Some(path.as_path()))?;
        assert_eq!(card.profile.name, "Jordan Reyes");
        assert_eq!(card.links.url_for(MenuAction::Email), Some("mailto:jordan@jreyes.dev"));

        Ok(())
    }

    #[test]
    fn load_rejects_missing_explicit_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.json");
        assert!(Card::load(Some(path.as_path())).is_err());
    }

    #[test]
    fn validate_rejects_non_mailto_email() {
        let mut card = Card::default();
        card.links.email = "jordan@jreyes.dev".to_string();
        assert!(card.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_link() {
        let mut card = Card::default();
        card.links.resume = "  ".to_string();
        assert!(card.validate().is_err());
    }

    #[test]
    fn missing_twitter_resolves_to_none() {
        let mut card = Card::default();
        card.links.twitter = None;
        assert_eq!(card.links.url_for(MenuAction::Twitter), None);
        // still a valid card, twitter just drops off the menu
        assert!(card.validate().is_ok());
    }

    #[test]
    fn tempo_parses_lowercase() -> Result<()> {
        let theme: Theme = serde_json::from_str(
            r#"{"border":"blue","accent":"yellow","spinner":"white","tempo":"fast"}"#,
        )?;
        assert_eq!(theme.tempo, Tempo::Fast);
        assert_eq!(theme.background, None);
        Ok(())
    }

    #[test]
    fn background_is_optional_and_parses() -> Result<()> {
        let theme: Theme = serde_json::from_str(
            r#"{"border":"blue","background":"black","accent":"yellow","spinner":"white"}"#,
        )?;
        assert_eq!(theme.background.as_deref(), Some("black"));
        Ok(())
    }
}
