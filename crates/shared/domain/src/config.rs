//! Runtime configuration, deserialized by the kernel loader from a file plus `PANTRY__*`
//! environment overrides. Every section has defaults, so an empty source is valid.

use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Port the server listens on when none is configured.
pub const DEFAULT_PORT: u16 = 4583;

#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfigInner {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
}

/// Shared configuration handle. Clones share one allocation; writing through
/// `DerefMut` detaches the writer's copy first.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(flatten, default)]
    inner: Arc<ApiConfigInner>,
}

impl Deref for ApiConfig {
    type Target = ApiConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ApiConfig {
    fn deref_mut(&mut self) -> &mut ApiConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Listener settings. TLS is enabled by the presence of `ssl`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
    pub ssl: Option<SslConfig>,
}

impl ServerConfig {
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.address, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { address: IpAddr::V4(Ipv4Addr::UNSPECIFIED), port: DEFAULT_PORT, ssl: None }
    }
}

/// PEM certificate chain and private key.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SslConfig {
    pub cert: PathBuf,
    pub key: PathBuf,
}

impl Default for SslConfig {
    fn default() -> Self {
        Self { cert: PathBuf::from("cert.pem"), key: PathBuf::from("key.pem") }
    }
}

/// Where the catalog comes from.
///
/// `seed` names a JSON file with `{ "recipes": [...], "ingredients": [...] }`.
/// When absent the catalog embedded in the binary is used.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub seed: Option<PathBuf>,
}
