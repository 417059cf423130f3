// src/config.rs

use std::{env, sync::Arc, time::Duration};

use anyhow::Context;
use axum::extract::FromRef;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{
    db::PgStore,
    models::{Area, Category, Product, Role, User, Warehouse},
    services::ResourceService,
};

const DEFAULT_PORT: u16 = 3800;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 3;
const DEFAULT_PUBLIC_DIR: &str = "public";

// ---
// Configuração lida do ambiente
// ---

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub database_url: String,
    pub port: u16,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub public_dir: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Monta a configuração a partir de qualquer fonte chave → valor.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL deve ser definida")?;

        let port = parse_or(&lookup, "API_PORT", DEFAULT_PORT)?;
        let max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        let acquire_timeout_secs =
            parse_or(&lookup, "DB_ACQUIRE_TIMEOUT_SECS", DEFAULT_ACQUIRE_TIMEOUT_SECS)?;

        let public_dir = lookup("PUBLIC_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PUBLIC_DIR.to_string());

        Ok(Self {
            database_url,
            port,
            max_connections,
            acquire_timeout: Duration::from_secs(acquire_timeout_secs),
            public_dir,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} inválido: '{raw}'")),
        None => Ok(default),
    }
}

pub async fn connect_database(config: &AppConfig) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.database_url)
        .await
        .context("Falha ao conectar ao banco de dados")?;

    tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");
    Ok(pool)
}

// ---
// Estado compartilhado
// ---
// Cada handler extrai só o serviço do seu recurso via `State<ResourceService<_>>`.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub areas: ResourceService<Area>,
    pub categories: ResourceService<Category>,
    pub products: ResourceService<Product>,
    pub roles: ResourceService<Role>,
    pub users: ResourceService<User>,
    pub warehouses: ResourceService<Warehouse>,
}

impl AppState {
    pub fn from_pool(pool: PgPool) -> Self {
        Self {
            areas: ResourceService::new(Arc::new(PgStore::new(pool.clone()))),
            categories: ResourceService::new(Arc::new(PgStore::new(pool.clone()))),
            products: ResourceService::new(Arc::new(PgStore::new(pool.clone()))),
            roles: ResourceService::new(Arc::new(PgStore::new(pool.clone()))),
            users: ResourceService::new(Arc::new(PgStore::new(pool.clone()))),
            warehouses: ResourceService::new(Arc::new(PgStore::new(pool))),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_database_url_is_set() {
        let config = AppConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/inv")])).unwrap();
        assert_eq!(config.port, 3800);
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.acquire_timeout, Duration::from_secs(3));
        assert_eq!(config.public_dir, "public");
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = AppConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://db/inv"),
            ("API_PORT", "8080"),
            ("DB_MAX_CONNECTIONS", "20"),
            ("DB_ACQUIRE_TIMEOUT_SECS", "10"),
            ("PUBLIC_DIR", "static"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.max_connections, 20);
        assert_eq!(config.acquire_timeout, Duration::from_secs(10));
        assert_eq!(config.public_dir, "static");
    }

    #[test]
    fn missing_database_url_is_an_error() {
        let error = AppConfig::from_lookup(lookup(&[("API_PORT", "8080")])).unwrap_err();
        assert!(error.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn invalid_port_names_the_key() {
        let error = AppConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://db/inv"),
            ("API_PORT", "porta"),
        ]))
        .unwrap_err();
        assert!(error.to_string().contains("API_PORT"));
    }
}
