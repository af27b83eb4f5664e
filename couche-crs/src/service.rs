//! Interface du service de CRS
//!
//! C'est la frontière entre une couche cartographique et la machinerie de
//! projection : résolution d'un code d'autorité, création d'une
//! transformation entre deux CRS résolus, et fourniture des fabriques de
//! géométries. Les tests l'implémentent avec des doublures comptant les
//! appels.

use crate::error::CrsError;
use crate::geometry::GeometryFactory;
use crate::registry::Crs;
use crate::transform::ArcTransform;

/// Service de résolution de CRS et de création de transformations
pub trait CrsService {
    /// Résout le CRS associé à un code d'autorité
    fn coordinate_system(&self, srid: i32) -> Result<Crs, CrsError>;

    /// Crée la transformation source → cible entre deux CRS résolus
    fn create_transformation(&self, source: &Crs, target: &Crs) -> Result<ArcTransform, CrsError>;

    /// Fournit une fabrique de géométries liée à un SRID
    ///
    /// Chaque couche résout ses propres instances, même si deux couches
    /// partagent un SRID.
    fn geometry_factory(&self, srid: i32) -> GeometryFactory {
        GeometryFactory::new(srid)
    }
}
