//! Cross-module behavior: router + content store + renderer + chat

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};

use neo_folio::chat::gateway::{InferenceBackend, InferenceError, InferenceRequest};
use neo_folio::chat::{FALLBACK_REPLY, WELCOME_MESSAGE};
use neo_folio::render::{self, SectionRegion};
use neo_folio::richtext::{self, Span};
use neo_folio::{ChatSession, ChatState, ContentStore, InferenceGateway, Language, Page, Role, ViewRouter};
use pretty_assertions::assert_eq;

/// Replies r1, r2, ... in call order
struct Numbered {
    calls: Mutex<usize>,
}

impl InferenceBackend for Numbered {
    fn generate(&self, _request: &InferenceRequest) -> Result<String, InferenceError> {
        let mut calls = self.calls.lock().unwrap();
        *calls += 1;
        Ok(format!("r{}", *calls))
    }
}

struct AlwaysFails;

impl InferenceBackend for AlwaysFails {
    fn generate(&self, _request: &InferenceRequest) -> Result<String, InferenceError> {
        Err(InferenceError::Status { status: 503, body: "overloaded".to_string() })
    }
}

struct Gate {
    release: Mutex<Receiver<()>>,
}

impl InferenceBackend for Gate {
    fn generate(&self, _request: &InferenceRequest) -> Result<String, InferenceError> {
        let _ = self.release.lock().unwrap().recv();
        Ok("done".to_string())
    }
}

fn gated() -> (Arc<InferenceGateway>, Sender<()>) {
    let (tx, rx) = mpsc::channel();
    (Arc::new(InferenceGateway::new(Box::new(Gate { release: Mutex::new(rx) }))), tx)
}

fn send(session: &mut ChatSession, gateway: &Arc<InferenceGateway>, text: &str) {
    session.input = text.to_string();
    assert!(session.submit(gateway));
    session.wait();
}

#[test]
fn test_every_project_resolves_and_renders() {
    let store = ContentStore::builtin().unwrap();
    assert!(!store.projects.is_empty());

    let mut router = ViewRouter::new();
    for project in &store.projects {
        router.select_project(project.id.clone());
        let Page::ProjectDetail(found) = router.resolve(&store) else {
            panic!("project {} did not resolve", project.id);
        };
        let page = render::project_page(found);
        assert_eq!(page.title, project.title);
        assert_eq!(page.tags, project.tags.as_slice());
        assert_eq!(page.sections.len(), project.sections.len());
        for (region, section) in page.sections.iter().zip(&project.sections) {
            assert_eq!(region.title(), section.title);
            assert_eq!(region.layout_tag(), section.layout.tag());
        }
    }
}

#[test]
fn test_unknown_project_is_not_found() {
    let store = ContentStore::builtin().unwrap();
    let mut router = ViewRouter::new();
    router.select_project("does-not-exist");
    assert_eq!(router.resolve(&store), Page::NotFound);

    router.go_home();
    assert_eq!(router.resolve(&store), Page::Home);
    assert_eq!(router.selected_project_id(), None);
}

#[test]
fn test_language_toggle_twice_is_identity() {
    for start in [Language::En, Language::Zh] {
        let mut lang = start;
        lang.toggle();
        assert_ne!(lang, start);
        lang.toggle();
        assert_eq!(lang, start);
    }
}

#[test]
fn test_transcript_order() {
    let gateway = Arc::new(InferenceGateway::new(Box::new(Numbered { calls: Mutex::new(0) })));
    let mut session = ChatSession::new();
    send(&mut session, &gateway, "a");
    send(&mut session, &gateway, "b");

    let turns: Vec<(Role, &str)> = session.messages().iter().map(|m| (m.role, m.text.as_str())).collect();
    assert_eq!(
        turns,
        vec![
            (Role::Model, WELCOME_MESSAGE),
            (Role::User, "a"),
            (Role::Model, "r1"),
            (Role::User, "b"),
            (Role::Model, "r2"),
        ]
    );
    assert_eq!(session.state(), ChatState::Idle);
}

#[test]
fn test_submit_while_awaiting_is_ignored() {
    let (gateway, release) = gated();
    let mut session = ChatSession::new();
    session.input = "first".to_string();
    assert!(session.submit(&gateway));
    assert_eq!(session.state(), ChatState::Awaiting);

    session.input = "second".to_string();
    assert!(!session.can_submit());
    assert!(!session.submit(&gateway));
    assert_eq!(session.input, "second");
    assert_eq!(session.messages().len(), 2);

    release.send(()).unwrap();
    session.wait();
    assert_eq!(session.state(), ChatState::Idle);
    assert_eq!(session.messages().len(), 3);
    assert_eq!(session.messages()[2].text, "done");
}

#[test]
fn test_failing_backend_appends_one_fallback() {
    let gateway = Arc::new(InferenceGateway::new(Box::new(AlwaysFails)));
    let mut session = ChatSession::new();
    send(&mut session, &gateway, "hello?");

    let messages = session.messages();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[2].role, Role::Model);
    assert_eq!(messages[2].text, FALLBACK_REPLY);
    assert_eq!(messages.iter().filter(|m| m.text == FALLBACK_REPLY).count(), 1);
    assert_eq!(session.state(), ChatState::Idle);
}

#[test]
fn test_section_layout_dispatch() {
    let store = ContentStore::from_json_str(
        r#"{
            "projects": [{
                "id": "x", "title": "X", "subtitle": "", "tags": [], "description": "",
                "image": "", "metrics": [],
                "caseStudy": { "problem": "", "role": "", "solution": "" },
                "sections": [
                    { "title": "Cards", "content": "", "layout": "grid-cards",
                      "cards": [{ "title": "one", "content": "1" }, { "title": "two", "content": "2" }] },
                    { "title": "Plain", "content": "no layout here" }
                ]
            }]
        }"#,
    )
    .unwrap();

    let page = render::project_page(store.project("x").unwrap());
    match &page.sections[0] {
        SectionRegion::GridCards { cards, .. } => {
            let numbered: Vec<(usize, &str)> = cards.iter().map(|c| (c.number, c.title)).collect();
            assert_eq!(numbered, vec![(1, "one"), (2, "two")]);
        }
        other => panic!("expected grid cards, got {other:?}"),
    }
    assert!(matches!(&page.sections[1], SectionRegion::Standard { items, .. } if items.is_empty()));
}

#[test]
fn test_bold_markup() {
    assert_eq!(
        richtext::parse("a **b** c"),
        vec![Span::plain("a "), Span::bold("b"), Span::plain(" c")]
    );
    assert_eq!(richtext::parse("**unterminated"), vec![Span::plain("**unterminated")]);
}
