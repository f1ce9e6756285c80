//! UI module - contains UI rendering components

pub mod about;
pub mod chat;
pub mod gallery;
pub mod hero;
pub mod project_detail;
pub mod project_list;
pub mod remote_image;
pub mod rich_text;

pub use about::AboutView;
pub use chat::ChatWidget;
pub use hero::{Hero, HeroAction};
pub use project_detail::ProjectDetailView;
