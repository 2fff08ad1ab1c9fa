//! Store traits and their MongoDB implementations.
//!
//! Traits keep the database behind a seam so tests can swap in in-memory
//! fakes; the Mongo types are thin wrappers over one typed collection each.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::options::FindOptions;
use mongodb::Collection;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::AppError;
use crate::models::{
    About, ContactMessage, ContactStatus, Education, Experience, Profile, Project, Service,
    SiteSettings, Skill, User,
};

/// A document type with a dedicated collection.
pub trait Resource: Serialize + DeserializeOwned + Unpin + Send + Sync {
    const COLLECTION: &'static str;
}

/// A list-type resource with a canonical listing order.
pub trait ListedResource: Resource {
    fn sort() -> Document;
}

impl Resource for Profile {
    const COLLECTION: &'static str = "profiles";
}

impl Resource for About {
    const COLLECTION: &'static str = "abouts";
}

impl Resource for SiteSettings {
    const COLLECTION: &'static str = "site_settings";
}

impl Resource for Education {
    const COLLECTION: &'static str = "education";
}

impl ListedResource for Education {
    fn sort() -> Document {
        doc! { "display_order": 1, "start_date": -1 }
    }
}

impl Resource for Experience {
    const COLLECTION: &'static str = "experience";
}

impl ListedResource for Experience {
    fn sort() -> Document {
        doc! { "display_order": 1, "start_date": -1 }
    }
}

impl Resource for Project {
    const COLLECTION: &'static str = "projects";
}

impl ListedResource for Project {
    fn sort() -> Document {
        doc! { "display_order": 1, "created_at": -1 }
    }
}

impl Resource for Service {
    const COLLECTION: &'static str = "services";
}

impl ListedResource for Service {
    fn sort() -> Document {
        doc! { "display_order": 1 }
    }
}

impl Resource for Skill {
    const COLLECTION: &'static str = "skills";
}

impl ListedResource for Skill {
    fn sort() -> Document {
        doc! { "display_order": 1 }
    }
}

impl Resource for ContactMessage {
    const COLLECTION: &'static str = "contacts";
}

impl Resource for User {
    const COLLECTION: &'static str = "users";
}

/// Store for one-per-owner resources (Profile, About, SiteSettings).
///
/// Uniqueness is enforced by the controller (find-then-insert); concurrent
/// duplicate creates by the same owner are not defended beyond that.
#[async_trait]
pub trait SingletonStore<T>: Send + Sync {
    async fn insert(&self, document: &T) -> Result<(), AppError>;

    async fn find(&self, owner_id: &str) -> Result<Option<T>, AppError>;

    async fn replace(&self, owner_id: &str, document: &T) -> Result<(), AppError>;

    /// Returns `false` when no document existed for this owner.
    async fn delete(&self, owner_id: &str) -> Result<bool, AppError>;
}

/// Store for many-per-owner resources. Every point lookup filters by
/// `(id, owner_id)` so one owner can never reach another owner's documents.
#[async_trait]
pub trait OwnedStore<T>: Send + Sync {
    async fn insert(&self, document: &T) -> Result<(), AppError>;

    async fn find(&self, id: &str, owner_id: &str) -> Result<Option<T>, AppError>;

    /// List the owner's documents matching `filter`, in the resource's
    /// canonical order. Pass an empty document for no extra restriction.
    async fn list(&self, owner_id: &str, filter: Document) -> Result<Vec<T>, AppError>;

    async fn replace(&self, id: &str, owner_id: &str, document: &T) -> Result<(), AppError>;

    async fn delete(&self, id: &str, owner_id: &str) -> Result<bool, AppError>;
}

/// Store for the global contact-message inbox.
#[async_trait]
pub trait ContactStore: Send + Sync {
    async fn insert(&self, message: &ContactMessage) -> Result<(), AppError>;

    async fn find(&self, id: &str) -> Result<Option<ContactMessage>, AppError>;

    /// Newest first, optionally restricted to one status.
    async fn list(&self, status: Option<ContactStatus>) -> Result<Vec<ContactMessage>, AppError>;

    async fn replace(&self, id: &str, message: &ContactMessage) -> Result<(), AppError>;

    async fn delete(&self, id: &str) -> Result<bool, AppError>;

    async fn count(&self, status: Option<ContactStatus>) -> Result<u64, AppError>;
}

/// Resolves token subjects to owner accounts.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find(&self, id: &str) -> Result<Option<User>, AppError>;
}

// --- MongoDB implementations ---

pub struct MongoSingletonStore<T> {
    collection: Collection<T>,
}

impl<T: Resource> MongoSingletonStore<T> {
    pub fn new(db: &mongodb::Database) -> Self {
        Self {
            collection: db.collection(T::COLLECTION),
        }
    }
}

#[async_trait]
impl<T: Resource + 'static> SingletonStore<T> for MongoSingletonStore<T> {
    async fn insert(&self, document: &T) -> Result<(), AppError> {
        self.collection.insert_one(document).await?;
        Ok(())
    }

    async fn find(&self, owner_id: &str) -> Result<Option<T>, AppError> {
        Ok(self
            .collection
            .find_one(doc! { "owner_id": owner_id })
            .await?)
    }

    async fn replace(&self, owner_id: &str, document: &T) -> Result<(), AppError> {
        self.collection
            .replace_one(doc! { "owner_id": owner_id }, document)
            .await?;
        Ok(())
    }

    async fn delete(&self, owner_id: &str) -> Result<bool, AppError> {
        let result = self
            .collection
            .delete_one(doc! { "owner_id": owner_id })
            .await?;
        Ok(result.deleted_count > 0)
    }
}

pub struct MongoOwnedStore<T> {
    collection: Collection<T>,
}

impl<T: ListedResource> MongoOwnedStore<T> {
    pub fn new(db: &mongodb::Database) -> Self {
        Self {
            collection: db.collection(T::COLLECTION),
        }
    }
}

#[async_trait]
impl<T: ListedResource + 'static> OwnedStore<T> for MongoOwnedStore<T> {
    async fn insert(&self, document: &T) -> Result<(), AppError> {
        self.collection.insert_one(document).await?;
        Ok(())
    }

    async fn find(&self, id: &str, owner_id: &str) -> Result<Option<T>, AppError> {
        Ok(self
            .collection
            .find_one(doc! { "_id": id, "owner_id": owner_id })
            .await?)
    }

    async fn list(&self, owner_id: &str, filter: Document) -> Result<Vec<T>, AppError> {
        let mut query = doc! { "owner_id": owner_id };
        query.extend(filter);

        let options = FindOptions::builder().sort(T::sort()).build();
        let mut cursor = self.collection.find(query).with_options(options).await?;

        let mut documents = Vec::new();
        while let Some(document) = cursor.try_next().await? {
            documents.push(document);
        }
        Ok(documents)
    }

    async fn replace(&self, id: &str, owner_id: &str, document: &T) -> Result<(), AppError> {
        self.collection
            .replace_one(doc! { "_id": id, "owner_id": owner_id }, document)
            .await?;
        Ok(())
    }

    async fn delete(&self, id: &str, owner_id: &str) -> Result<bool, AppError> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id, "owner_id": owner_id })
            .await?;
        Ok(result.deleted_count > 0)
    }
}

pub struct MongoContactStore {
    collection: Collection<ContactMessage>,
}

impl MongoContactStore {
    pub fn new(db: &mongodb::Database) -> Self {
        Self {
            collection: db.collection(ContactMessage::COLLECTION),
        }
    }

    fn status_filter(status: Option<ContactStatus>) -> Result<Document, AppError> {
        match status {
            Some(status) => {
                let value = mongodb::bson::ser::to_bson(&status)
                    .map_err(|e| AppError::Internal(e.to_string()))?;
                Ok(doc! { "status": value })
            }
            None => Ok(doc! {}),
        }
    }
}

#[async_trait]
impl ContactStore for MongoContactStore {
    async fn insert(&self, message: &ContactMessage) -> Result<(), AppError> {
        self.collection.insert_one(message).await?;
        Ok(())
    }

    async fn find(&self, id: &str) -> Result<Option<ContactMessage>, AppError> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    async fn list(&self, status: Option<ContactStatus>) -> Result<Vec<ContactMessage>, AppError> {
        let filter = Self::status_filter(status)?;
        let options = FindOptions::builder()
            .sort(doc! { "created_at": -1 })
            .build();
        let mut cursor = self.collection.find(filter).with_options(options).await?;

        let mut messages = Vec::new();
        while let Some(message) = cursor.try_next().await? {
            messages.push(message);
        }
        Ok(messages)
    }

    async fn replace(&self, id: &str, message: &ContactMessage) -> Result<(), AppError> {
        self.collection
            .replace_one(doc! { "_id": id }, message)
            .await?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }

    async fn count(&self, status: Option<ContactStatus>) -> Result<u64, AppError> {
        let filter = Self::status_filter(status)?;
        Ok(self.collection.count_documents(filter).await?)
    }
}

pub struct MongoUserStore {
    collection: Collection<User>,
}

impl MongoUserStore {
    pub fn new(db: &mongodb::Database) -> Self {
        Self {
            collection: db.collection(User::COLLECTION),
        }
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn find(&self, id: &str) -> Result<Option<User>, AppError> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }
}
