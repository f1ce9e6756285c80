//! Content renderer - turns a project record into page regions
//!
//! Pure data; the GUI walks the result and draws it.

use crate::models::{Metric, Project, ProjectSection, SectionLayout};
use crate::richtext::{self, Span};

pub const NO_CODE_PLACEHOLDER: &str = "// No code snippet provided.";

pub type RichText<'a> = Vec<Span<'a>>;

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectPage<'a> {
    pub title: &'a str,
    pub subtitle: &'a str,
    pub image: &'a str,
    pub tags: &'a [String],
    pub toc: Vec<TocEntry<'a>>,
    pub stats: &'a [Metric],
    pub overview: RichText<'a>,
    pub role: &'a str,
    pub sections: Vec<SectionRegion<'a>>,
    pub outcome: RichText<'a>,
}

/// 目录跳转目标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    Overview,
    Role,
    Section(usize),
    Outcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TocEntry<'a> {
    pub anchor: Anchor,
    /// Only sections carry their own label; the fixed anchors are localized
    /// by the view.
    pub label: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SectionRegion<'a> {
    Standard {
        title: &'a str,
        body: RichText<'a>,
        items: Vec<RichText<'a>>,
    },
    Split {
        title: &'a str,
        body: RichText<'a>,
        outcomes: Vec<RichText<'a>>,
    },
    GridCards {
        title: &'a str,
        body: RichText<'a>,
        cards: Vec<CardRegion<'a>>,
    },
    Terminal {
        title: &'a str,
        body: RichText<'a>,
        code: &'a str,
    },
}

impl<'a> SectionRegion<'a> {
    pub fn title(&self) -> &'a str {
        match self {
            SectionRegion::Standard { title, .. }
            | SectionRegion::Split { title, .. }
            | SectionRegion::GridCards { title, .. }
            | SectionRegion::Terminal { title, .. } => *title,
        }
    }

    /// Same tag as the [`SectionLayout`] this region was built from
    pub fn layout_tag(&self) -> &'static str {
        match self {
            SectionRegion::Standard { .. } => "standard",
            SectionRegion::Split { .. } => "split",
            SectionRegion::GridCards { .. } => "grid-cards",
            SectionRegion::Terminal { .. } => "terminal",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardRegion<'a> {
    /// 1-based
    pub number: usize,
    pub title: &'a str,
    pub body: RichText<'a>,
}

pub fn project_page(project: &Project) -> ProjectPage<'_> {
    let mut toc = vec![
        TocEntry { anchor: Anchor::Overview, label: None },
        TocEntry { anchor: Anchor::Role, label: None },
    ];
    toc.extend(project.sections.iter().enumerate().map(|(idx, section)| TocEntry {
        anchor: Anchor::Section(idx),
        label: Some(section.short_title()),
    }));
    toc.push(TocEntry { anchor: Anchor::Outcome, label: None });

    ProjectPage {
        title: &project.title,
        subtitle: &project.subtitle,
        image: &project.image,
        tags: &project.tags,
        toc,
        stats: &project.metrics,
        overview: richtext::parse(&project.case_study.problem),
        role: &project.case_study.role,
        sections: project.sections.iter().map(section_region).collect(),
        outcome: richtext::parse(&project.case_study.solution),
    }
}

pub fn section_region(section: &ProjectSection) -> SectionRegion<'_> {
    let title = section.title.as_str();
    let body = richtext::parse(&section.content);
    match &section.layout {
        SectionLayout::Standard { items } => SectionRegion::Standard {
            title,
            body,
            items: rich_list(items),
        },
        SectionLayout::Split { items } => SectionRegion::Split {
            title,
            body,
            outcomes: rich_list(items),
        },
        SectionLayout::GridCards { cards } => SectionRegion::GridCards {
            title,
            body,
            cards: cards
                .iter()
                .enumerate()
                .map(|(idx, card)| CardRegion {
                    number: idx + 1,
                    title: &card.title,
                    body: richtext::parse(&card.content),
                })
                .collect(),
        },
        SectionLayout::Terminal { code } => SectionRegion::Terminal {
            title,
            body,
            code: code
                .as_deref()
                .filter(|c| !c.is_empty())
                .unwrap_or(NO_CODE_PLACEHOLDER),
        },
    }
}

fn rich_list(items: &[String]) -> Vec<RichText<'_>> {
    items.iter().map(|item| richtext::parse(item)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SectionCard;
    use pretty_assertions::assert_eq;

    fn section(layout: SectionLayout) -> ProjectSection {
        ProjectSection {
            title: "Phase 9: Wrap-up".to_string(),
            content: "a **b** c".to_string(),
            layout,
        }
    }

    #[test]
    fn test_grid_cards_one_region_per_card() {
        let s = section(SectionLayout::GridCards {
            cards: vec![
                SectionCard { title: "first".to_string(), content: "x".to_string() },
                SectionCard { title: "second".to_string(), content: "**y**".to_string() },
            ],
        });
        let SectionRegion::GridCards { cards, .. } = section_region(&s) else {
            panic!("expected grid cards");
        };
        assert_eq!(cards.len(), 2);
        assert_eq!((cards[0].number, cards[0].title), (1, "first"));
        assert_eq!((cards[1].number, cards[1].title), (2, "second"));
        assert_eq!(cards[1].body, vec![Span::bold("y")]);
    }

    #[test]
    fn test_standard_without_items_renders_no_list() {
        let s = section(SectionLayout::default());
        let region = section_region(&s);
        assert_eq!(
            region,
            SectionRegion::Standard {
                title: "Phase 9: Wrap-up",
                body: vec![Span::plain("a "), Span::bold("b"), Span::plain(" c")],
                items: vec![],
            }
        );
    }

    #[test]
    fn test_terminal_without_code_uses_placeholder() {
        let s = section(SectionLayout::Terminal { code: None });
        let SectionRegion::Terminal { code, .. } = section_region(&s) else {
            panic!("expected terminal");
        };
        assert_eq!(code, NO_CODE_PLACEHOLDER);
    }

    #[test]
    fn test_split_items_become_outcomes() {
        let s = section(SectionLayout::Split { items: vec!["**Result**: fast".to_string()] });
        let SectionRegion::Split { outcomes, .. } = section_region(&s) else {
            panic!("expected split");
        };
        assert_eq!(outcomes, vec![vec![Span::bold("Result"), Span::plain(": fast")]]);
    }

    #[test]
    fn test_region_keeps_layout_tag() {
        for layout in [
            SectionLayout::default(),
            SectionLayout::Split { items: vec![] },
            SectionLayout::GridCards { cards: vec![] },
            SectionLayout::Terminal { code: Some("ls".to_string()) },
        ] {
            let s = section(layout);
            let region = section_region(&s);
            assert_eq!(region.layout_tag(), s.layout.tag());
            assert_eq!(region.title(), "Phase 9: Wrap-up");
        }
    }
}
