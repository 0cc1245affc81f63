use std::env;
use std::path::PathBuf;

use crate::auth;

/// Which persistence adapter backs the recipe store. Selected once at
/// startup; nothing above the store layer branches on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Relational store via Diesel's typed DSL.
    Postgres,
    /// The same relational store driven by raw parameterized SQL.
    PostgresRaw,
    /// Graph store via the Neo4j transactional HTTP endpoint.
    Neo4j,
    /// In-memory store, for tests and local hacking without a database.
    Memory,
}

impl Backend {
    fn from_env() -> Self {
        match env::var("RECIPE_BACKEND").as_deref() {
            Ok("postgres") | Err(_) => Backend::Postgres,
            Ok("postgres-raw") => Backend::PostgresRaw,
            Ok("neo4j") => Backend::Neo4j,
            Ok("memory") => Backend::Memory,
            Ok(other) => panic!(
                "Unknown RECIPE_BACKEND {other:?}; expected postgres, postgres-raw, neo4j or memory"
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub backend: Backend,
    pub database_url: Option<String>,
    pub neo4j_uri: String,
    pub neo4j_user: String,
    pub neo4j_password: String,
    pub storage_url: Option<String>,
    pub storage_key: Option<String>,
    pub storage_bucket: String,
    pub upload_dir: PathBuf,
    pub production: bool,
    pub admin_username: String,
    pub admin_password_hash: String,
    pub session_secret: String,
    pub port: u16,
}

impl Config {
    /// Read configuration from the environment. Missing required values are
    /// a startup failure, not something to limp along without.
    pub fn load() -> Self {
        // Prefer a pre-computed argon2 hash; hashing a plaintext
        // ADMIN_PASSWORD at startup is the dev convenience path.
        let admin_password_hash = match env::var("ADMIN_PASSWORD_HASH") {
            Ok(hash) => hash,
            Err(_) => {
                let password = env::var("ADMIN_PASSWORD")
                    .expect("ADMIN_PASSWORD_HASH or ADMIN_PASSWORD must be set");
                auth::hash_password(&password).expect("Failed to hash ADMIN_PASSWORD")
            }
        };

        Self {
            backend: Backend::from_env(),
            database_url: env::var("DATABASE_URL").ok(),
            neo4j_uri: env::var("NEO4J_URI")
                .unwrap_or_else(|_| "http://localhost:7474".to_string()),
            neo4j_user: env::var("NEO4J_USER").unwrap_or_else(|_| "neo4j".to_string()),
            neo4j_password: env::var("NEO4J_PASSWORD").unwrap_or_else(|_| "password".to_string()),
            storage_url: env::var("STORAGE_URL").ok(),
            storage_key: env::var("STORAGE_KEY").ok(),
            storage_bucket: env::var("STORAGE_BUCKET")
                .unwrap_or_else(|_| "recipe-images".to_string()),
            upload_dir: env::var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("public/uploads")),
            production: env::var("APP_ENV").map(|v| v == "production").unwrap_or(false),
            admin_username: env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string()),
            admin_password_hash,
            session_secret: env::var("SESSION_SECRET").expect("SESSION_SECRET must be set"),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
        }
    }
}
