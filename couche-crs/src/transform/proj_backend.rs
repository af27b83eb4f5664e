//! Transformation via PROJ pour les paires EPSG non couvertes nativement
//!
//! Ce module est disponible uniquement avec le feature `reproject`.

use std::sync::Arc;

use geo::Coord;
use proj::Proj;

use super::{ArcTransform, MathTransform};
use crate::error::CrsError;

/// Transformation adossée à la bibliothèque PROJ
pub struct ProjTransform {
    proj: Proj,
    source_srid: i32,
    target_srid: i32,
}

impl ProjTransform {
    /// Crée une transformation PROJ entre deux codes EPSG
    pub fn new(source_srid: i32, target_srid: i32) -> Result<Self, CrsError> {
        let source = format!("EPSG:{}", source_srid);
        let target = format!("EPSG:{}", target_srid);

        let proj = Proj::new_known_crs(&source, &target, None).map_err(|e| {
            CrsError::Projection(format!(
                "Failed to create projection from {} to {}: {}",
                source, target, e
            ))
        })?;

        Ok(Self {
            proj,
            source_srid,
            target_srid,
        })
    }
}

impl MathTransform for ProjTransform {
    fn source_srid(&self) -> i32 {
        self.source_srid
    }

    fn target_srid(&self) -> i32 {
        self.target_srid
    }

    fn apply(&self, coord: Coord<f64>) -> Result<Coord<f64>, CrsError> {
        let (x, y) = self
            .proj
            .convert((coord.x, coord.y))
            .map_err(|e| CrsError::Projection(format!("Coordinate transformation failed: {}", e)))?;
        Ok(Coord { x, y })
    }

    fn inverted(&self) -> Result<ArcTransform, CrsError> {
        Ok(Arc::new(Self::new(self.target_srid, self.source_srid)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lambert93_vers_wgs84() {
        // Point connu: Paris (environ)
        let t = ProjTransform::new(2154, 4326).unwrap();
        let c = t
            .apply(Coord {
                x: 652381.0,
                y: 6862047.0,
            })
            .unwrap();

        assert!(c.x > 2.0 && c.x < 3.0, "lon={}", c.x);
        assert!(c.y > 48.0 && c.y < 49.0, "lat={}", c.y);
    }

    #[test]
    fn test_epsg_invalide() {
        assert!(ProjTransform::new(99999, 4326).is_err());
    }
}
