use super::domain::ClientChannel;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read portfolio catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid portfolio catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid portfolio record at {path}: {reason}")]
    Invalid { path: String, reason: String },
}

impl CatalogError {
    fn invalid(path: String, reason: impl Into<String>) -> Self {
        Self::Invalid {
            path,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    clients: Vec<ClientChannel>,
}

/// Validated, immutable set of client channels loaded once per process.
///
/// Any malformed record rejects the whole catalog so that ranking never sees
/// a partially valid dataset.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PortfolioCatalog {
    clients: Vec<ClientChannel>,
}

impl PortfolioCatalog {
    pub fn new(clients: Vec<ClientChannel>) -> Result<Self, CatalogError> {
        validate(&clients)?;
        Ok(Self { clients })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(raw)?;
        Self::new(document.clients)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_reader(reader)?;
        Self::new(document.clients)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_reader(BufReader::new(file))?;
        info!(
            path = %path.display(),
            clients = catalog.len(),
            "portfolio catalog loaded"
        );
        Ok(catalog)
    }

    pub fn clients(&self) -> &[ClientChannel] {
        &self.clients
    }

    pub fn client(&self, id: &str) -> Option<&ClientChannel> {
        self.clients.iter().find(|client| client.id == id)
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

fn validate(clients: &[ClientChannel]) -> Result<(), CatalogError> {
    let mut client_ids = HashSet::new();

    for (index, client) in clients.iter().enumerate() {
        let base = format!("clients.{index}");

        if client.id.trim().is_empty() {
            return Err(CatalogError::invalid(format!("{base}.id"), "id must not be blank"));
        }
        if client.name.trim().is_empty() {
            return Err(CatalogError::invalid(
                format!("{base}.name"),
                "name must not be blank",
            ));
        }
        if !client_ids.insert(client.id.as_str()) {
            return Err(CatalogError::invalid(
                format!("{base}.id"),
                format!("duplicate client id '{}'", client.id),
            ));
        }

        let mut artifact_ids = HashSet::new();
        for (artifact_index, artifact) in client.artifacts.iter().enumerate() {
            if !artifact_ids.insert(artifact.id.as_str()) {
                return Err(CatalogError::invalid(
                    format!("{base}.artifacts.{artifact_index}.id"),
                    format!("duplicate artifact id '{}' for client '{}'", artifact.id, client.id),
                ));
            }
        }

        for (kpi_index, kpi) in client.kpis.iter().enumerate() {
            if !kpi.value.is_finite() {
                return Err(CatalogError::invalid(
                    format!("{base}.kpis.{kpi_index}.value"),
                    "value must be a finite number",
                ));
            }
        }

        debug!(
            client = %client.id,
            artifacts = client.artifacts.len(),
            kpis = client.kpis.len(),
            "validated portfolio client"
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_empty_catalog() {
        let catalog = PortfolioCatalog::from_json_str("{}").expect("empty catalog loads");
        assert!(catalog.is_empty());
        assert!(catalog.client("anything").is_none());
    }

    #[test]
    fn blank_names_are_reported_with_path() {
        let raw = r#"{"clients":[{"id":"acme","name":"  ","industry":"Retail"}]}"#;
        let err = PortfolioCatalog::from_json_str(raw).expect_err("blank name rejected");
        match err {
            CatalogError::Invalid { path, .. } => assert_eq!(path, "clients.0.name"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
