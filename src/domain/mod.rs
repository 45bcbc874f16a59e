//! Domain layer types and invariants.

pub mod entities;
pub mod error;

pub use entities::{
    AboutMe, Certificate, Comment, Experience, Hero, HomeData, Post, Project, Skill, Tag,
};
pub use error::DomainError;
