use serde::{Deserialize, Serialize};

use crate::i18n::Language;

/// About 页面的个人简介（每种语言一份）
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AboutContent {
    pub intro: String,
    /// 正文段落，按顺序逐段打字显示
    pub paragraphs: Vec<String>,
    pub modules: Vec<CapabilityModule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LocalizedAbout {
    pub en: AboutContent,
    pub zh: AboutContent,
}

impl LocalizedAbout {
    pub fn get(&self, lang: Language) -> &AboutContent {
        match lang {
            Language::En => &self.en,
            Language::Zh => &self.zh,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityModule {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub period: String,
    #[serde(rename = "desc")]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// 0..=100
    pub level: u8,
}

impl Skill {
    pub fn fraction(&self) -> f32 {
        f32::from(self.level.min(100)) / 100.0
    }
}

/// Site owner identity (nav brand, contact, footer links)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub name: String,
    pub brand: String,
    #[serde(default)]
    pub brand_suffix: String,
    pub email: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub links: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_fraction_is_clamped() {
        let skill = Skill { name: "x".to_string(), level: 250 };
        assert_eq!(skill.fraction(), 1.0);
        let skill = Skill { name: "x".to_string(), level: 80 };
        assert!((skill.fraction() - 0.8).abs() < f32::EPSILON);
    }

    #[test]
    fn test_localized_about_picks_language() {
        let about = LocalizedAbout {
            en: AboutContent { intro: "hi".to_string(), ..Default::default() },
            zh: AboutContent { intro: "你好".to_string(), ..Default::default() },
        };
        assert_eq!(about.get(Language::Zh).intro, "你好");
        assert_eq!(about.get(Language::En).intro, "hi");
    }
}
