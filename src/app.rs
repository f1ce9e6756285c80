//! App module - main application logic and UI

use std::sync::Arc;
use std::time::Duration;

use eframe::egui;
use neo_folio::i18n::Translation;
use neo_folio::render;
use neo_folio::router::{Page, View, ViewRouter};
use neo_folio::{ChatSession, ContentStore, InferenceGateway, Language};

use crate::theme::ThemeConfig;
use crate::ui::{gallery, project_detail, project_list, AboutView, ChatWidget, Hero, HeroAction, ProjectDetailView};

const CONTENT_MAX_WIDTH: f32 = 1100.0;
/// 动画运行时的重绘间隔，与最快的打字机节拍一致
const ANIMATION_REPAINT: Duration = Duration::from_millis(15);
/// 导航栏: 翻译键 -> 目标视图
const NAV_ITEMS: [(&str, View); 3] = [("nav_work", View::Home), ("nav_about", View::About), ("nav_visuals", View::Gallery)];

pub struct PortfolioApp {
    pub store: ContentStore,
    pub router: ViewRouter,
    pub language: Language,
    pub effects_enabled: bool,

    pub current_theme: ThemeConfig,
    pub first_frame: bool,

    /// 当前已挂载动画的视图
    mounted: Option<View>,
    scroll_to_projects: bool,

    hero: Hero,
    about: AboutView,
    detail: ProjectDetailView,

    chat: ChatSession,
    chat_widget: ChatWidget,
    gateway: Arc<InferenceGateway>,
}

impl PortfolioApp {
    pub fn new(store: ContentStore, gateway: InferenceGateway, language: Language, effects_enabled: bool) -> Self {
        Self {
            store,
            router: ViewRouter::new(),
            language,
            effects_enabled,
            current_theme: ThemeConfig::neo(),
            first_frame: true,
            mounted: None,
            scroll_to_projects: false,
            hero: Hero::new(language.translation()),
            about: AboutView::default(),
            detail: ProjectDetailView::default(),
            chat: ChatSession::new(),
            chat_widget: ChatWidget::default(),
            gateway: Arc::new(gateway),
        }
    }

    fn static_text(lang: Language) -> &'static Translation {
        lang.translation()
    }

    /// Stop the effects of the view being left and start those of the new one
    fn sync_mounted(&mut self, now: f64) {
        let view = self.router.view();
        if self.mounted == Some(view) {
            return;
        }
        match self.mounted {
            Some(View::Home) => self.hero.unmount(),
            Some(View::About) => self.about.unmount(),
            Some(View::ProjectDetail) => self.detail.reset(),
            Some(View::Gallery) | None => {}
        }
        if view == View::Home {
            self.hero.mount(now, self.effects_enabled);
        }
        self.mounted = Some(view);
    }

    fn nav_bar(&mut self, ui: &mut egui::Ui) {
        let theme = &self.current_theme;
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            let brand = ui
                .add(
                    egui::Label::new(
                        egui::RichText::new(format!("⬡ {}", self.store.owner.brand))
                            .monospace()
                            .strong()
                            .color(theme.text_strong),
                    )
                    .sense(egui::Sense::click()),
                )
                .on_hover_cursor(egui::CursorIcon::PointingHand);
            ui.label(egui::RichText::new(&self.store.owner.brand_suffix).monospace().strong().color(theme.brand));
            if brand.clicked() {
                self.router.go_home();
            }

            ui.add_space(32.0);
            let current = self.router.view();
            for (key, view) in NAV_ITEMS {
                let label = self.language.text(key);
                let color = if current == view { theme.text_strong } else { theme.text_muted };
                if ui.selectable_label(current == view, egui::RichText::new(label).color(color)).clicked() {
                    match view {
                        View::Home => self.router.go_home(),
                        View::About => self.router.go_about(),
                        _ => self.router.go_gallery(),
                    }
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add_space(8.0);
                let toggle = egui::Button::new(
                    egui::RichText::new(format!("🌐 {}", self.language.badge())).monospace().size(11.0).color(theme.brand),
                )
                .stroke(egui::Stroke::new(1.0, theme.border))
                .rounding(12.0);
                if ui.add(toggle).clicked() {
                    self.language.toggle();
                    tracing::debug!(lang = ?self.language, "language toggled");
                }
            });
        });
    }

    fn footer(&self, ui: &mut egui::Ui, text: &Translation) {
        let theme = &self.current_theme;
        ui.add_space(60.0);
        ui.separator();
        ui.add_space(24.0);
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                let owner = &self.store.owner;
                ui.label(
                    egui::RichText::new(format!("{}{}", owner.brand, owner.brand_suffix))
                        .monospace()
                        .strong()
                        .size(18.0)
                        .color(theme.text_strong),
                );
                ui.label(egui::RichText::new(text.footer_tagline).color(theme.text_muted));
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                for link in self.store.owner.links.iter().rev() {
                    ui.hyperlink_to(
                        egui::RichText::new(&link.label).monospace().size(11.0),
                        &link.url,
                    );
                }
            });
        });
        ui.add_space(24.0);
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            self.current_theme.apply(ctx);
            self.first_frame = false;
        }

        let now = ctx.input(|i| i.time);
        self.chat.poll();

        egui::TopBottomPanel::top("nav_bar")
            .frame(
                egui::Frame::none()
                    .fill(self.current_theme.bg_panel)
                    .stroke(egui::Stroke::new(1.0, self.current_theme.border))
                    .inner_margin(egui::Margin::symmetric(12.0, 10.0)),
            )
            .show(ctx, |ui| self.nav_bar(ui));

        // 语言可能刚被切换
        let text = Self::static_text(self.language);
        self.sync_mounted(now);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(self.current_theme.bg))
            .show(ctx, |ui| {
                let mut scroll = egui::ScrollArea::vertical()
                    .id_salt("main_scroll")
                    .auto_shrink([false, false]);
                // 进入项目详情时回到顶部
                if self.router.take_scroll_reset() {
                    scroll = scroll.vertical_scroll_offset(0.0);
                }

                scroll.show(ui, |ui| {
                    let width = ui.available_width().min(CONTENT_MAX_WIDTH);
                    let margin = ((ui.available_width() - width) / 2.0).max(0.0);
                    egui::Frame::none()
                        .inner_margin(egui::Margin::symmetric(margin.max(24.0), 0.0))
                        .show(ui, |ui| {
                            let theme = &self.current_theme;
                            let page = self.router.resolve(&self.store);
                            match page {
                                Page::Home => {
                                    let action = self.hero.show(ui, text, &self.store.owner, theme, now, self.effects_enabled);
                                    match action {
                                        Some(HeroAction::ViewProjects) => self.scroll_to_projects = true,
                                        Some(HeroAction::Contact) => {
                                            ctx.open_url(egui::OpenUrl::new_tab(format!("mailto:{}", self.store.owner.email)));
                                        }
                                        None => {}
                                    }
                                    let scroll_here = std::mem::take(&mut self.scroll_to_projects);
                                    if let Some(id) = project_list::show(ui, &self.store.projects, text, theme, scroll_here) {
                                        self.router.select_project(id);
                                        ctx.request_repaint();
                                    }
                                }
                                Page::About => {
                                    ui.add_space(40.0);
                                    self.about.show(ui, &self.store, self.language, text, theme, now, self.effects_enabled);
                                }
                                Page::Gallery => {
                                    ui.add_space(40.0);
                                    gallery::show(ui, &self.store.photos, text, theme);
                                }
                                Page::ProjectDetail(project) => {
                                    ui.add_space(32.0);
                                    let rendered = render::project_page(project);
                                    if self.detail.show(ui, &rendered, text, theme) {
                                        self.router.go_home();
                                        ctx.request_repaint();
                                    }
                                }
                                Page::NotFound => {
                                    ui.add_space(32.0);
                                    if project_detail::show_not_found(ui, text, theme) {
                                        self.router.go_home();
                                        ctx.request_repaint();
                                    }
                                }
                            }
                        });
                    self.footer(ui, text);
                });
            });

        self.chat_widget.show(ctx, &mut self.chat, &self.gateway, text, &self.current_theme);

        if self.hero.is_animating() || self.about.is_animating() {
            ctx.request_repaint_after(ANIMATION_REPAINT);
        }
    }
}
