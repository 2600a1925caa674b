//! Application state - shared across all handlers.

use std::sync::Arc;

use cookbook_core::RecipeService;
use cookbook_infra::{DatabaseConfig, InMemoryRecipeStore};

#[cfg(feature = "database")]
use cookbook_infra::{DatabaseConnections, SqlRecipeStore};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub recipes: RecipeService,
    /// Owns the database pool when the SQL store is in use.
    #[cfg(feature = "database")]
    pub sql_store: Option<Arc<SqlRecipeStore>>,
}

impl AppState {
    /// Build the application state with the appropriate recipe store.
    #[cfg(feature = "database")]
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        let Some(config) = db_config else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return Self::in_memory();
        };

        match Self::open_database(config).await {
            Ok(connections) => {
                let store = Arc::new(SqlRecipeStore::new(connections.main));
                tracing::info!("Application state initialized");
                Self {
                    recipes: RecipeService::new(store.clone()),
                    sql_store: Some(store),
                }
            }
            Err(e) => {
                tracing::error!("Failed to open database: {}. Using in-memory fallback.", e);
                Self::in_memory()
            }
        }
    }

    #[cfg(not(feature = "database"))]
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        if db_config.is_some() {
            tracing::warn!("DATABASE_URL ignored: built without the database feature");
        }
        tracing::info!("Running without database feature - using in-memory store");
        Self::in_memory()
    }

    #[cfg(feature = "database")]
    async fn open_database(config: &DatabaseConfig) -> Result<DatabaseConnections, sea_orm::DbErr> {
        let connections = DatabaseConnections::init(config).await?;
        connections.ensure_schema().await?;
        Ok(connections)
    }

    /// State backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self {
            recipes: RecipeService::new(Arc::new(InMemoryRecipeStore::new())),
            #[cfg(feature = "database")]
            sql_store: None,
        }
    }

    /// Release the database pool, if one was opened.
    #[cfg(feature = "database")]
    pub async fn shutdown(&self) {
        let Some(store) = &self.sql_store else {
            return;
        };
        if let Err(e) = store.close().await {
            tracing::error!("Failed to close database: {}", e);
        }
    }

    #[cfg(not(feature = "database"))]
    pub async fn shutdown(&self) {}
}
