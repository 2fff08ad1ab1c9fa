//! Portfolio CMS backend: authenticated CRUD over MongoDB-backed resources
//! with an S3-compatible blob store for uploaded assets.

pub mod api;
pub mod assets;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;
pub mod storage;
