//! HTTP controllers, one module per resource.

pub mod about;
pub mod contact;
pub mod education;
pub mod experience;
pub mod extract;
pub mod forms;
pub mod profile;
pub mod project;
pub mod response;
pub mod service;
pub mod settings;
pub mod skill;
