//! Resume data model and merge rules

pub mod merge;
pub mod types;

pub use merge::merge;
pub use types::{
    Certification, Course, CustomField, Education, Experience, Language, Project, ResumeRecord,
};
