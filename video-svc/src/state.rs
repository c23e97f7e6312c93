use anyhow::Context;
use axum::extract::State;
use std::sync::Arc;

use crate::{
  blob::BlobStore,
  catalog::{Catalog, IdAllocator, MemCatalog, PgCatalog},
  config::Config,
};

pub type AppState = State<Arc<App>>;

pub struct App {
  pub catalog: Box<dyn Catalog>,
  pub blob: BlobStore,
  pub ids: IdAllocator,
  pub config: Config,
}

impl App {
  /// Builds the shared state for either catalog variant. The allocator is
  /// seeded from the highest persisted id so generated ids stay monotonic
  /// across restarts of the durable variant.
  pub async fn new(config: Config, database_url: Option<&str>) -> anyhow::Result<Self> {
    let catalog: Box<dyn Catalog> = match database_url {
      Some(url) => Box::new(PgCatalog::connect(url).await?),
      None => {
        log::info!("No database url given, keeping the catalog in process memory");
        Box::new(MemCatalog::new())
      },
    };

    let last = catalog
      .last_id()
      .await
      .context("Failed to read the highest assigned video id")?;
    let blob = BlobStore::open(&config.storage.data_dir).await?;

    Ok(Self {
      catalog,
      blob,
      ids: IdAllocator::starting_after(last),
      config,
    })
  }

  /// Advisory data url for a video, `<base>/video/<id>/data`. The base is
  /// the configured public url when set, otherwise the `Host` the client
  /// reached us on.
  pub fn data_url(&self, host: &str, id: i64) -> String {
    let base = match &self.config.public_base_url {
      Some(base) => base.trim_end_matches('/').to_string(),
      None => format!("http://{host}"),
    };
    format!("{base}/video/{id}/data")
  }
}
