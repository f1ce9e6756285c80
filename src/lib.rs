pub mod chat;
pub mod content;
pub mod effects;
pub mod i18n;
pub mod models;
pub mod render;
pub mod richtext;
pub mod router;

// Re-export commonly used types
pub use chat::{ChatSession, ChatState, InferenceGateway};
pub use content::ContentStore;
pub use i18n::Language;
pub use models::{ChatMessage, Photo, Project, ProjectSection, Role, SectionLayout};
pub use router::{Page, View, ViewRouter};
