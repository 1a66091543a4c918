use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use shared::domain::{Creature, CreatureId};
use tracing::debug;

#[derive(Debug, Deserialize)]
struct CatalogRecord {
    id: u16,
    name: String,
    #[serde(default)]
    sprites: SpriteSet,
}

#[derive(Debug, Default, Deserialize)]
struct SpriteSet {
    front_default: Option<String>,
}

impl CatalogRecord {
    fn into_creature(self) -> Creature {
        Creature {
            id: CreatureId(self.id),
            name: self.name,
            sprite_url: self.sprites.front_default.unwrap_or_default(),
        }
    }
}

/// Looks up one creature record by catalog id. Transport faults, non-success
/// statuses and undecodable bodies all surface as the same failure.
#[async_trait]
pub trait CatalogFetcher: Send + Sync {
    async fn fetch(&self, id: CreatureId) -> Result<Creature>;
}

pub struct MissingCatalog;

#[async_trait]
impl CatalogFetcher for MissingCatalog {
    async fn fetch(&self, id: CreatureId) -> Result<Creature> {
        Err(anyhow!(
            "no catalog configured; cannot fetch creature {}",
            id.0
        ))
    }
}

pub struct HttpCatalog {
    http: Client,
    target: String,
}

impl HttpCatalog {
    pub fn new(target: impl Into<String>) -> Self {
        let mut target = target.into();
        while target.ends_with('/') {
            target.pop();
        }
        Self {
            http: Client::new(),
            target,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

#[async_trait]
impl CatalogFetcher for HttpCatalog {
    async fn fetch(&self, id: CreatureId) -> Result<Creature> {
        let record: CatalogRecord = self
            .http
            .get(format!("{}/pokemon/{}", self.target, id))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!(%id, name = %record.name, "fetched catalog record");
        Ok(record.into_creature())
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
