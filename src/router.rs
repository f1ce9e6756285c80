//! View router - which page is on screen

use crate::content::ContentStore;
use crate::models::Project;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    About,
    Gallery,
    ProjectDetail,
}

/// Resolved page, ready for the view layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Page<'a> {
    Home,
    About,
    Gallery,
    ProjectDetail(&'a Project),
    /// Detail view whose project id no longer resolves; renders empty.
    NotFound,
}

#[derive(Debug, Clone, Default)]
pub struct ViewRouter {
    view: View,
    selected_project_id: Option<String>,
    scroll_reset: bool,
}

impl ViewRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn selected_project_id(&self) -> Option<&str> {
        self.selected_project_id.as_deref()
    }

    pub fn go_home(&mut self) {
        self.enter(View::Home);
    }

    pub fn go_about(&mut self) {
        self.enter(View::About);
    }

    pub fn go_gallery(&mut self) {
        self.enter(View::Gallery);
    }

    /// 进入项目详情。id 是否存在留到渲染时再判断
    pub fn select_project(&mut self, id: impl Into<String>) {
        let id = id.into();
        tracing::debug!(project = %id, "select project");
        self.view = View::ProjectDetail;
        self.selected_project_id = Some(id);
        self.scroll_reset = true;
    }

    fn enter(&mut self, view: View) {
        if self.view != view {
            tracing::debug!(?view, "navigate");
        }
        self.view = view;
        self.selected_project_id = None;
    }

    /// One-shot flag raised on entry to a project detail; the render layer
    /// consumes it and scrolls to the top.
    pub fn take_scroll_reset(&mut self) -> bool {
        std::mem::take(&mut self.scroll_reset)
    }

    pub fn resolve<'a>(&self, store: &'a ContentStore) -> Page<'a> {
        match self.view {
            View::Home => Page::Home,
            View::About => Page::About,
            View::Gallery => Page::Gallery,
            View::ProjectDetail => self
                .selected_project_id
                .as_deref()
                .and_then(|id| store.project(id))
                .map_or(Page::NotFound, Page::ProjectDetail),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ContentStore {
        ContentStore::builtin().unwrap()
    }

    #[test]
    fn test_starts_home() {
        let router = ViewRouter::new();
        assert_eq!(router.view(), View::Home);
        assert_eq!(router.selected_project_id(), None);
    }

    #[test]
    fn test_select_then_home_clears_id() {
        let mut router = ViewRouter::new();
        router.select_project("p2");
        assert_eq!(router.view(), View::ProjectDetail);
        assert_eq!(router.selected_project_id(), Some("p2"));
        router.go_home();
        assert_eq!(router.view(), View::Home);
        assert_eq!(router.selected_project_id(), None);
    }

    #[test]
    fn test_other_views_clear_id() {
        let mut router = ViewRouter::new();
        router.select_project("p1");
        router.go_gallery();
        assert_eq!(router.selected_project_id(), None);
        router.select_project("p1");
        router.go_about();
        assert_eq!(router.view(), View::About);
        assert_eq!(router.selected_project_id(), None);
    }

    #[test]
    fn test_resolve_known_and_unknown() {
        let store = store();
        let mut router = ViewRouter::new();
        router.select_project("p3");
        match router.resolve(&store) {
            Page::ProjectDetail(p) => assert_eq!(p.title, "Equinox Analytics"),
            other => panic!("unexpected page {other:?}"),
        }
        router.select_project("ghost");
        assert_eq!(router.view(), View::ProjectDetail);
        assert_eq!(router.resolve(&store), Page::NotFound);
    }

    #[test]
    fn test_scroll_reset_is_one_shot() {
        let mut router = ViewRouter::new();
        assert!(!router.take_scroll_reset());
        router.select_project("p1");
        assert!(router.take_scroll_reset());
        assert!(!router.take_scroll_reset());
        router.go_gallery();
        assert!(!router.take_scroll_reset());
    }
}
