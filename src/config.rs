use std::path::PathBuf;

/// Which cars the registry holds when the server starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inventory {
    /// The four bundled sample listings.
    Sample,
    /// No cars at all.
    Empty,
}

#[derive(Debug, Clone)]
pub struct RegistryConfig {
    pub inventory: Inventory,
    pub port: Option<u16>,
    pub host: String,
    /// Directory holding `swagger.json` and `swagger-ui/`. Docs routes are
    /// only mounted when this is set.
    pub docs_dir: Option<PathBuf>,
}

impl RegistryConfig {
    pub fn new(inventory: Inventory) -> Self {
        Self {
            inventory,
            port: None,
            host: "127.0.0.1".to_string(),
            docs_dir: None,
        }
    }

    pub fn sample() -> Self {
        Self::new(Inventory::Sample)
    }

    pub fn empty() -> Self {
        Self::new(Inventory::Empty)
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_docs_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.docs_dir = Some(path.into());
        self
    }

    pub(crate) fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port.unwrap_or(0))
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::sample()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_sample_inventory_on_ephemeral_port() {
        let config = RegistryConfig::default();
        assert_eq!(config.inventory, Inventory::Sample);
        assert_eq!(config.bind_addr(), "127.0.0.1:0");
        assert!(config.docs_dir.is_none());
    }

    #[test]
    fn builders_override_fields() {
        let config = RegistryConfig::empty()
            .with_host("0.0.0.0")
            .with_port(8080)
            .with_docs_dir("docs");
        assert_eq!(config.inventory, Inventory::Empty);
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.docs_dir, Some(PathBuf::from("docs")));
    }
}
