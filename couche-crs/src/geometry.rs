//! Géométries étiquetées par leur SRID et fabriques associées

use geo::{BoundingRect, Coord, Geometry, Point, Rect};

/// Une géométrie `geo` accompagnée du SRID du CRS dans lequel ses
/// coordonnées sont exprimées
#[derive(Debug, Clone, PartialEq)]
pub struct SridGeometry {
    /// Code d'autorité du CRS des coordonnées
    pub srid: i32,

    /// La géométrie elle-même
    pub geometry: Geometry<f64>,
}

impl SridGeometry {
    pub fn new(srid: i32, geometry: Geometry<f64>) -> Self {
        Self { srid, geometry }
    }

    /// Boîte englobante alignée sur les axes, si la géométrie n'est pas vide
    pub fn bounding_rect(&self) -> Option<Rect<f64>> {
        self.geometry.bounding_rect()
    }
}

/// Fabrique de géométries liée à un SRID : toute géométrie construite par
/// elle porte ce SRID
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeometryFactory {
    srid: i32,
}

impl GeometryFactory {
    pub fn new(srid: i32) -> Self {
        Self { srid }
    }

    /// SRID dont la fabrique étiquette ses géométries
    pub fn srid(&self) -> i32 {
        self.srid
    }

    /// Étiquette une géométrie existante
    pub fn geometry(&self, geometry: Geometry<f64>) -> SridGeometry {
        SridGeometry::new(self.srid, geometry)
    }

    /// Construit un point étiqueté
    pub fn point(&self, x: f64, y: f64) -> SridGeometry {
        self.geometry(Geometry::Point(Point::from(Coord { x, y })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_etiquetage() {
        let factory = GeometryFactory::new(4326);
        let p = factory.point(2.35, 48.85);

        assert_eq!(p.srid, 4326);
        assert!(matches!(p.geometry, Geometry::Point(_)));
    }

    #[test]
    fn test_bounding_rect() {
        let factory = GeometryFactory::new(4326);
        let p = factory.point(2.35, 48.85);
        let rect = p.bounding_rect().unwrap();

        assert_eq!(rect.min().x, 2.35);
        assert_eq!(rect.max().y, 48.85);
    }
}
