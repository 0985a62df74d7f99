//! Static portfolio content shared across folio crates.
//!
//! Every collection here is fixed at compile time and handed out as a
//! `&'static` slice; nothing in this crate mutates or persists data.
#![allow(missing_docs)]

pub mod card;
pub mod certificate;
pub mod error;
pub mod experience;
pub mod project;
pub mod skill;

pub use card::CardLike;
pub use certificate::{CERTIFICATES, Certificate};
pub use error::ModelError;
pub use experience::{ExperienceKind, WORK_EXPERIENCE, WorkExperience};
pub use project::{
    PROJECTS, Project, ProjectCategory, all_projects, featured_projects,
    project_by_id,
};
pub use skill::{SKILLS, Skill, SkillCategory, skills_by_category};
