//! Server runtime
//!
//! [`ServerHandle`] owns the full lifecycle: database init, migrations,
//! default admin, REST API and graceful shutdown.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use crate::config::AppConfig;
use crate::domain::{CreateUserDto, RepositoryProvider, UserRole};
use crate::infrastructure::crypto::jwt::JwtConfig;
use crate::infrastructure::crypto::password::hash_password_with_cost;
use crate::infrastructure::database::migrator::Migrator;
use crate::shared::shutdown::{ShutdownCoordinator, ShutdownSignal};
use crate::{create_api_router, init_database, DatabaseConfig, SeaOrmRepositoryProvider};

/// Options for starting the server.
pub struct ServerOptions {
    pub config: AppConfig,
    /// Run database migrations on startup (default: true).
    pub auto_migrate: bool,
    /// Create the configured admin when no users exist (default: true).
    pub create_default_admin: bool,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            auto_migrate: true,
            create_default_admin: true,
        }
    }
}

/// Handle to a running API server.
///
/// ```rust,no_run
/// use restaurant_api::server::{ServerHandle, ServerOptions};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let handle = ServerHandle::start(ServerOptions::default()).await?;
///     handle.shutdown().await;
///     Ok(())
/// }
/// ```
pub struct ServerHandle {
    pub repos: Arc<dyn RepositoryProvider>,
    /// The configuration the server was started with.
    pub config: AppConfig,
    /// Port the API is bound to.
    pub api_port: u16,

    db: DatabaseConnection,
    shutdown: ShutdownCoordinator,
    api_task: tokio::task::JoinHandle<()>,
}

impl ServerHandle {
    pub async fn start(opts: ServerOptions) -> Result<Self, Box<dyn std::error::Error>> {
        let app_cfg = opts.config;

        info!("Starting restaurant API...");

        let db_config = DatabaseConfig::from(&app_cfg.database);
        let jwt_config = JwtConfig::from(&app_cfg.security);
        info!(
            "JWT configured with {}h token expiration",
            jwt_config.expiration_hours
        );

        let db = init_database(&db_config).await?;

        if opts.auto_migrate {
            info!("Running database migrations...");
            Migrator::up(&db, None).await?;
            info!("Migrations completed");
        }

        let repos: Arc<dyn RepositoryProvider> =
            Arc::new(SeaOrmRepositoryProvider::new(db.clone()));

        if opts.create_default_admin {
            create_default_admin(repos.as_ref(), &app_cfg).await;
        }

        let shutdown = ShutdownCoordinator::new(app_cfg.server.shutdown_timeout);
        let shutdown_signal = shutdown.signal();

        let api_router = create_api_router(
            db.clone(),
            repos.clone(),
            jwt_config,
            app_cfg.security.bcrypt_cost,
        );

        let api_addr = format!("{}:{}", app_cfg.server.api_host, app_cfg.server.api_port);
        let listener = tokio::net::TcpListener::bind(&api_addr).await?;
        let api_port = listener.local_addr()?.port();
        info!("REST API server listening on http://{}", api_addr);
        info!("Swagger UI available at http://{}/docs/", api_addr);

        let api_shutdown = shutdown_signal.clone();
        let api_server = axum::serve(listener, api_router).with_graceful_shutdown(async move {
            api_shutdown.wait().await;
            info!("🛑 REST API server received shutdown signal");
        });

        let api_task = tokio::spawn(async move {
            if let Err(e) = api_server.await {
                error!("REST API server error: {}", e);
            }
        });

        Ok(Self {
            repos,
            config: app_cfg,
            api_port,
            db,
            shutdown,
            api_task,
        })
    }

    pub fn shutdown_signal(&self) -> ShutdownSignal {
        self.shutdown.signal()
    }

    /// Install OS signal listeners (SIGTERM, SIGINT) that trigger shutdown.
    pub fn install_signal_handler(&self) {
        self.shutdown.start_signal_listener();
    }

    /// Trigger graceful shutdown without waiting.
    pub fn trigger_shutdown(&self) {
        self.shutdown.signal().trigger();
    }

    /// Wait for the server to stop after shutdown has been triggered.
    ///
    /// In-flight requests get `server.shutdown_timeout` seconds to drain.
    pub async fn wait(self) {
        info!("⏳ Waiting for the API server to stop...");

        let api_task = self.api_task;
        let drained = self
            .shutdown
            .drain(async move {
                match api_task.await {
                    Ok(()) => info!("REST API server stopped"),
                    Err(e) => error!("REST API server task panicked: {}", e),
                }
            })
            .await;
        if !drained {
            warn!("Abandoning in-flight requests");
        }

        if let Err(e) = self.db.close().await {
            warn!("Error closing database connection: {}", e);
        } else {
            info!("✅ Database connection closed");
        }

        info!("👋 Restaurant API shutdown complete");
    }

    /// Trigger shutdown and wait for completion.
    pub async fn shutdown(self) {
        self.trigger_shutdown();
        self.wait().await;
    }

    pub fn is_running(&self) -> bool {
        !self.api_task.is_finished()
    }
}

/// Seed the configured admin account when the user table is empty.
async fn create_default_admin(repos: &dyn RepositoryProvider, app_cfg: &AppConfig) {
    let users = match repos.users().count_users().await {
        Ok(count) => count,
        Err(e) => {
            error!("Failed to count users: {}", e);
            return;
        }
    };
    if users > 0 {
        return;
    }

    info!("Creating default admin user...");
    let password_hash =
        match hash_password_with_cost(&app_cfg.admin.password, app_cfg.security.bcrypt_cost) {
            Ok(hash) => hash,
            Err(e) => {
                error!("Failed to hash admin password: {}", e);
                return;
            }
        };

    let admin = CreateUserDto {
        email: app_cfg.admin.email.clone(),
        password_hash,
        role: UserRole::Admin,
        first_name: None,
        last_name: None,
        nationality: None,
        date_of_birth: None,
    };

    match repos.users().create_user(admin).await {
        Ok(user) => {
            info!(user_id = %user.id, "Default admin created: {}", user.email);
            warn!("⚠️  Please change the admin password immediately!");
        }
        Err(e) => error!("Failed to create admin user: {}", e),
    }
}

/// Initialize tracing from the logging section.
///
/// Call once at process startup, before [`ServerHandle::start`].
pub fn init_tracing(config: &AppConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    match config.logging.format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_options() -> ServerOptions {
        let mut config = AppConfig::default();
        config.server.api_host = "127.0.0.1".into();
        config.server.api_port = 0;
        config.server.shutdown_timeout = 5;
        config.database.url = "sqlite::memory:".into();
        config.database.max_connections = 1;
        config.security.bcrypt_cost = 4;
        ServerOptions {
            config,
            ..ServerOptions::default()
        }
    }

    #[tokio::test]
    async fn starts_seeds_admin_and_shuts_down() {
        let handle = ServerHandle::start(test_options()).await.unwrap();
        assert!(handle.is_running());
        assert_ne!(handle.api_port, 0);

        let admin = handle
            .repos
            .users()
            .get_user_by_email("admin@restaurant-api.local")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(admin.role, UserRole::Admin);

        handle.shutdown().await;
    }

    #[tokio::test]
    async fn admin_is_seeded_only_into_empty_table() {
        let handle = ServerHandle::start(test_options()).await.unwrap();
        let mut config = handle.config.clone();
        config.admin.email = "second@restaurant-api.local".into();

        create_default_admin(handle.repos.as_ref(), &config).await;
        assert_eq!(handle.repos.users().count_users().await.unwrap(), 1);

        handle.shutdown().await;
    }
}
