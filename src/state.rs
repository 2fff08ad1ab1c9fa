use std::sync::Arc;

use crate::db::{
    ContactStore, MongoContactStore, MongoOwnedStore, MongoSingletonStore, MongoUserStore,
    OwnedStore, SingletonStore, UserStore,
};
use crate::models::{
    About, Education, Experience, Profile, Project, Service, SiteSettings, Skill,
};
use crate::storage::BlobStore;

/// Shared application state: one handle per store, constructed once at
/// startup and cloned into every handler. No ambient globals.
#[derive(Clone)]
pub struct AppState {
    pub profiles: Arc<dyn SingletonStore<Profile>>,
    pub abouts: Arc<dyn SingletonStore<About>>,
    pub settings: Arc<dyn SingletonStore<SiteSettings>>,
    pub education: Arc<dyn OwnedStore<Education>>,
    pub experience: Arc<dyn OwnedStore<Experience>>,
    pub projects: Arc<dyn OwnedStore<Project>>,
    pub services: Arc<dyn OwnedStore<Service>>,
    pub skills: Arc<dyn OwnedStore<Skill>>,
    pub contacts: Arc<dyn ContactStore>,
    pub users: Arc<dyn UserStore>,
    pub blobs: Arc<dyn BlobStore>,
    pub jwt_secret: String,
}

impl AppState {
    /// Wire every store to its MongoDB collection.
    pub fn new(db: &mongodb::Database, blobs: Arc<dyn BlobStore>, jwt_secret: String) -> Self {
        Self {
            profiles: Arc::new(MongoSingletonStore::new(db)),
            abouts: Arc::new(MongoSingletonStore::new(db)),
            settings: Arc::new(MongoSingletonStore::new(db)),
            education: Arc::new(MongoOwnedStore::new(db)),
            experience: Arc::new(MongoOwnedStore::new(db)),
            projects: Arc::new(MongoOwnedStore::new(db)),
            services: Arc::new(MongoOwnedStore::new(db)),
            skills: Arc::new(MongoOwnedStore::new(db)),
            contacts: Arc::new(MongoContactStore::new(db)),
            users: Arc::new(MongoUserStore::new(db)),
            blobs,
            jwt_secret,
        }
    }
}
