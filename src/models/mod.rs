pub mod chat;
pub mod photo;
pub mod profile;
pub mod project;

pub use chat::{ChatMessage, Role};
pub use photo::Photo;
pub use profile::{AboutContent, CapabilityModule, Experience, LocalizedAbout, Owner, Skill, SocialLink};
pub use project::{CaseStudy, Metric, Project, ProjectSection, SectionCard, SectionLayout};
