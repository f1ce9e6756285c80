use serde::{Deserialize, Serialize};

/// 作品集项目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// 唯一 ID，同时作为路由状态
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub tags: Vec<String>,
    pub description: String,
    /// 封面图 URL
    pub image: String,
    pub metrics: Vec<Metric>,
    pub case_study: CaseStudy,
    #[serde(default)]
    pub sections: Vec<ProjectSection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStudy {
    pub problem: String,
    pub role: String,
    pub solution: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionCard {
    pub title: String,
    pub content: String,
}

/// Long-form content block of a project.
///
/// On the wire the variant is chosen by a `layout` tag, with the
/// variant-specific fields (`items`, `cards`, `code`) sitting next to it.
/// Fields that don't belong to the active layout are dropped on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawSection", into = "RawSection")]
pub struct ProjectSection {
    pub title: String,
    /// Rich text (`**bold**` spans)
    pub content: String,
    pub layout: SectionLayout,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionLayout {
    Standard { items: Vec<String> },
    Split { items: Vec<String> },
    GridCards { cards: Vec<SectionCard> },
    Terminal { code: Option<String> },
}

impl SectionLayout {
    pub fn tag(&self) -> &'static str {
        match self {
            SectionLayout::Standard { .. } => "standard",
            SectionLayout::Split { .. } => "split",
            SectionLayout::GridCards { .. } => "grid-cards",
            SectionLayout::Terminal { .. } => "terminal",
        }
    }
}

impl Default for SectionLayout {
    fn default() -> Self {
        SectionLayout::Standard { items: Vec::new() }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RawSection {
    title: String,
    #[serde(default)]
    content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    layout: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    items: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cards: Option<Vec<SectionCard>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl From<RawSection> for ProjectSection {
    fn from(raw: RawSection) -> Self {
        let items = raw.items.unwrap_or_default();
        let layout = match raw.layout.as_deref() {
            None | Some("standard") => SectionLayout::Standard { items },
            Some("split") => SectionLayout::Split { items },
            Some("grid-cards") => SectionLayout::GridCards {
                cards: raw.cards.unwrap_or_default(),
            },
            Some("terminal") => SectionLayout::Terminal { code: raw.code },
            Some(other) => {
                tracing::warn!(layout = other, section = %raw.title, "unknown section layout, using standard");
                SectionLayout::Standard { items }
            }
        };
        Self {
            title: raw.title,
            content: raw.content,
            layout,
        }
    }
}

impl From<ProjectSection> for RawSection {
    fn from(section: ProjectSection) -> Self {
        let mut raw = RawSection {
            title: section.title,
            content: section.content,
            layout: Some(section.layout.tag().to_string()),
            ..Default::default()
        };
        match section.layout {
            SectionLayout::Standard { items } | SectionLayout::Split { items } => {
                raw.items = (!items.is_empty()).then_some(items);
            }
            SectionLayout::GridCards { cards } => raw.cards = Some(cards),
            SectionLayout::Terminal { code } => raw.code = code,
        }
        raw
    }
}

impl ProjectSection {
    /// 目录标签：标题中第一个冒号之前的部分
    pub fn short_title(&self) -> &str {
        self.title.split(':').next().unwrap_or(&self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn section(json: &str) -> ProjectSection {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_missing_layout_is_standard() {
        let s = section(r#"{"title":"T","content":"c","items":["x"]}"#);
        assert_eq!(s.layout, SectionLayout::Standard { items: vec!["x".to_string()] });
    }

    #[test]
    fn test_unknown_layout_is_standard() {
        let s = section(r#"{"title":"T","content":"c","layout":"carousel"}"#);
        assert_eq!(s.layout, SectionLayout::Standard { items: vec![] });
    }

    #[test]
    fn test_irrelevant_fields_are_ignored() {
        let s = section(r#"{"title":"T","content":"c","layout":"terminal","items":["x"],"code":"ls"}"#);
        assert_eq!(s.layout, SectionLayout::Terminal { code: Some("ls".to_string()) });
    }

    #[test]
    fn test_grid_cards_keep_order() {
        let s = section(
            r#"{"title":"T","content":"c","layout":"grid-cards",
                "cards":[{"title":"a","content":"1"},{"title":"b","content":"2"}]}"#,
        );
        match s.layout {
            SectionLayout::GridCards { cards } => {
                let titles: Vec<_> = cards.iter().map(|c| c.title.as_str()).collect();
                assert_eq!(titles, ["a", "b"]);
            }
            other => panic!("unexpected layout {other:?}"),
        }
    }

    #[test]
    fn test_short_title() {
        let s = section(r#"{"title":"Phase 1: Component Systemization","content":""}"#);
        assert_eq!(s.short_title(), "Phase 1");
        let s = section(r#"{"title":"Understanding the Users","content":""}"#);
        assert_eq!(s.short_title(), "Understanding the Users");
    }

    #[test]
    fn test_serialize_writes_layout_tag() {
        let s = section(r#"{"title":"T","content":"c","layout":"split","items":["x"]}"#);
        let value = serde_json::to_value(&s).unwrap();
        assert_eq!(value["layout"], "split");
        assert_eq!(value["items"][0], "x");
    }
}
