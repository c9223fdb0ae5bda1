//! Catalog operations over the tiered fetcher
//!
//! Maps domain requests (list page, one entity, type list) to request
//! signatures, runs them through the `ResourceFetcher`, and decodes the payloads.

use std::sync::Arc;

use log::debug;

use super::batch::{BatchOptions, load_in_batches};
use super::models::{CollectionPage, Entity, EntityReference};
use super::Transport;
use crate::cache::{RequestSignature, ResourceFetcher};
use crate::error::Result;

/// Collection endpoint for entities
const ENTITY_COLLECTION: &str = "/pokemon";
/// Type list endpoint
const TYPE_COLLECTION: &str = "/type";
/// Type tags the API lists but no entity in the catalog carries
const HIDDEN_TYPES: [&str; 2] = ["shadow", "unknown"];

/// Catalog facade used by every command.
pub struct Catalog<T: Transport> {
    fetcher: Arc<ResourceFetcher<T>>,
    batch: BatchOptions,
}

impl<T: Transport> Catalog<T> {
    pub fn new(fetcher: Arc<ResourceFetcher<T>>, batch: BatchOptions) -> Self {
        Self { fetcher, batch }
    }

    #[cfg(test)]
    pub fn fetcher(&self) -> &Arc<ResourceFetcher<T>> {
        &self.fetcher
    }

    /// Fetch one page of entity references.
    pub async fn fetch_page(&self, offset: u32, limit: u32) -> Result<CollectionPage> {
        let offset = offset.to_string();
        let limit = limit.to_string();
        let signature = RequestSignature::new(
            ENTITY_COLLECTION,
            &[("offset", offset.as_str()), ("limit", limit.as_str())],
        );

        let payload = self.fetcher.fetch(&signature).await?;
        Ok(CollectionPage::decode(&payload)?)
    }

    /// Fetch one entity by id or name.
    pub async fn fetch_entity(&self, id_or_name: &str) -> Result<Entity> {
        let key = id_or_name.trim().to_lowercase();
        let signature = RequestSignature::new(&format!("{}/{}", ENTITY_COLLECTION, key), &[]);

        let payload = self.fetcher.fetch(&signature).await?;
        Ok(Entity::decode(&payload)?)
    }

    /// Fetch the type tags usable as filters.
    pub async fn fetch_types(&self) -> Result<Vec<String>> {
        let payload = self
            .fetcher
            .fetch(&RequestSignature::new(TYPE_COLLECTION, &[]))
            .await?;
        let page = CollectionPage::decode(&payload)?;

        Ok(page
            .names()
            .filter(|name| !HIDDEN_TYPES.contains(name))
            .map(str::to_string)
            .collect())
    }

    /// Load the first `limit` entities with full details.
    ///
    /// A failure fetching the reference page propagates unchanged; individual
    /// detail failures are dropped by the batch loader.
    pub async fn load_first(&self, limit: u32) -> Result<Vec<Entity>> {
        let page = self.fetch_page(0, limit).await?;
        debug!("Reference page lists {} entries", page.results.len());

        self.load_details(page.results).await
    }

    /// Hydrate references into entities in paced batches.
    pub async fn load_details(&self, references: Vec<EntityReference>) -> Result<Vec<Entity>> {
        load_in_batches(
            references,
            |reference| async move { self.fetch_entity(&reference.name).await },
            &self.batch,
        )
        .await
    }
}
