//! Types d'erreurs pour le crate couche-layer

use thiserror::Error;

use couche_crs::CrsError;

/// Erreurs pouvant survenir sur une couche
///
/// Les échecs du service de CRS (SRID inconnu, pas de chemin de
/// transformation) traversent telles quelles : aucune opération ne les
/// rattrape ni ne les retente.
#[derive(Debug, Error)]
pub enum LayerError {
    /// Échec de résolution de CRS ou d'application d'une transformation
    #[error(transparent)]
    Crs(#[from] CrsError),

    /// Erreur d'I/O lors du chargement d'une configuration
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration de couche invalide
    #[error("Invalid layer configuration: {0}")]
    Config(#[from] serde_json::Error),
}
