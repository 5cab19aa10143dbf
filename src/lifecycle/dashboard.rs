use crate::clients::{ProductClient, UserClient};
use crate::config::DashboardConfig;
use crate::model::{Product, User};
use crate::router::{RouteTable, Router};
use crate::session::{Principal, SessionStore};
use store_framework::{HttpCollection, RemoteCollection};
use thiserror::Error;
use tracing::{error, info};

/// Errors raised while starting or stopping the dashboard.
#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Store task failed: {0}")]
    StoreTask(#[from] tokio::task::JoinError),
}

/// Figures shown on the dashboard view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSummary {
    pub principal: Option<Principal>,
    pub total_products: usize,
    pub total_users: usize,
}

/// The runtime orchestrator for the dashboard application.
///
/// `Dashboard` is responsible for:
/// - **Lifecycle Management**: starting the product and user stores and stopping them
/// - **Dependency Wiring**: sharing one session between the views and the router
///
/// # Example
///
/// ```ignore
/// let dashboard = Dashboard::new(&DashboardConfig::from_env()?)?;
///
/// dashboard.session.login("alice", "pw")?;
/// dashboard.products.fetch_products().await?;
/// println!("{:?}", dashboard.summary());
///
/// dashboard.shutdown().await?;
/// ```
pub struct Dashboard {
    /// Client for the product catalogue store
    pub products: ProductClient,

    /// Client for the read-only user store
    pub users: UserClient,

    /// Shared authentication state
    pub session: SessionStore,

    /// Guarded route table
    pub router: Router,

    /// Task handles for the running stores (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Dashboard {
    /// Starts the dashboard against the HTTP API described by `config`.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: &DashboardConfig) -> Result<Self, LifecycleError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("resource-dashboard/", env!("CARGO_PKG_VERSION")))
            .build()?;
        info!(api_base = %config.api_base, "Starting dashboard");

        Ok(Self::with_remotes(
            HttpCollection::<Product>::new(http.clone(), config.products_url()),
            HttpCollection::<User>::new(http, config.users_url()),
            config.mailbox,
        ))
    }

    /// Starts the dashboard on arbitrary remote collections.
    pub fn with_remotes<P, U>(products: P, users: U, mailbox: usize) -> Self
    where
        P: RemoteCollection<Product> + 'static,
        U: RemoteCollection<User> + 'static,
    {
        let (product_store, products) = crate::product_store::new(products, mailbox);
        let (user_store, users) = crate::user_store::new(users, mailbox);

        let product_handle = tokio::spawn(product_store.run());
        let user_handle = tokio::spawn(user_store.run());

        let session = SessionStore::new();
        let router = Router::new(RouteTable::standard(), session.clone());

        Self {
            products,
            users,
            session,
            router,
            handles: vec![product_handle, user_handle],
        }
    }

    pub fn summary(&self) -> DashboardSummary {
        DashboardSummary {
            principal: self.session.principal(),
            total_products: self.products.total_products(),
            total_users: self.users.total_users(),
        }
    }

    /// Gracefully shuts down every store.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all stores shut down cleanly
    /// - `Err(LifecycleError::StoreTask)` if a store task panicked
    pub async fn shutdown(self) -> Result<(), LifecycleError> {
        info!("Shutting down dashboard...");

        // Closing the channels is what ends each store's loop
        drop(self.products);
        drop(self.users);
        self.session.logout();

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Store task failed: {:?}", e);
                return Err(LifecycleError::StoreTask(e));
            }
        }

        info!("Dashboard shutdown complete.");
        Ok(())
    }
}
