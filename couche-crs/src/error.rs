//! Types d'erreurs pour le crate couche-crs

use std::fmt;

/// Erreurs pouvant survenir lors de la résolution de CRS ou de l'application
/// d'une transformation
#[derive(Debug)]
pub enum CrsError {
    /// SRID inconnu du registre
    UnknownSrid(i32),

    /// Aucun chemin de transformation entre les deux CRS
    NoTransformPath { source: i32, target: i32 },

    /// Coordonnée hors du domaine de validité de la projection
    OutOfDomain { x: f64, y: f64 },

    /// Erreur de la bibliothèque de projection sous-jacente
    Projection(String),
}

impl fmt::Display for CrsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSrid(srid) => write!(f, "Unknown SRID: {srid}"),
            Self::NoTransformPath { source, target } => {
                write!(f, "No transformation path from EPSG:{source} to EPSG:{target}")
            }
            Self::OutOfDomain { x, y } => {
                write!(f, "Coordinate ({x}, {y}) outside projection domain")
            }
            Self::Projection(msg) => write!(f, "Projection error: {msg}"),
        }
    }
}

impl std::error::Error for CrsError {}

impl CrsError {
    /// Crée une erreur de chemin de transformation manquant
    pub fn no_path(source: i32, target: i32) -> Self {
        Self::NoTransformPath { source, target }
    }
}
