//! Transformations de coordonnées entre CRS
//!
//! Le cœur est le trait [`MathTransform`] : une fonction de correspondance
//! point à point entre deux CRS, identifiés par leurs codes d'autorité, avec
//! une inversion **pure** ([`MathTransform::inverted`] retourne une nouvelle
//! transformation au lieu de muter l'originale).
//!
//! L'implémentation native [`ChainTransform`] passe par les coordonnées
//! géographiques (radians) : source → géographique → cible.

pub mod ellipsoid;
mod lambert;
mod mercator;
#[cfg(feature = "reproject")]
mod proj_backend;
mod utm;

pub use lambert::Lambert93;
pub use mercator::WebMercator;
#[cfg(feature = "reproject")]
pub use proj_backend::ProjTransform;
pub use utm::UtmZone;

use std::sync::Arc;

use geo::{Coord, Geometry, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon, Rect};

use crate::error::CrsError;
use crate::registry::{Crs, CrsKind};

/// Point en coordonnées géographiques (radians)
#[derive(Debug, Clone, Copy)]
pub struct Geographic {
    /// Longitude en radians
    pub lon: f64,
    /// Latitude en radians
    pub lat: f64,
}

impl Geographic {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Convertit en degrés
    pub fn to_degrees(self) -> (f64, f64) {
        (self.lon.to_degrees(), self.lat.to_degrees())
    }

    /// Crée depuis des degrés
    pub fn from_degrees(lon_deg: f64, lat_deg: f64) -> Self {
        Self {
            lon: lon_deg.to_radians(),
            lat: lat_deg.to_radians(),
        }
    }
}

/// Une projection cartographique : aller-retour entre coordonnées
/// géographiques et coordonnées projetées
pub trait Projection {
    /// Géographique → projeté
    fn forward(&self, geo: Geographic) -> Result<Coord<f64>, CrsError>;

    /// Projeté → géographique
    fn inverse(&self, coord: Coord<f64>) -> Result<Geographic, CrsError>;
}

/// "Projection" identité pour EPSG:4326 : les coordonnées projetées sont
/// simplement les degrés décimaux
pub(crate) struct PlateCarree;

impl Projection for PlateCarree {
    fn forward(&self, geo: Geographic) -> Result<Coord<f64>, CrsError> {
        let (lon, lat) = geo.to_degrees();
        Ok(Coord { x: lon, y: lat })
    }

    fn inverse(&self, coord: Coord<f64>) -> Result<Geographic, CrsError> {
        Ok(Geographic::from_degrees(coord.x, coord.y))
    }
}

/// Transformation de coordonnées entre deux CRS identifiés par leur SRID
pub trait MathTransform {
    /// Code d'autorité du CRS source
    fn source_srid(&self) -> i32;

    /// Code d'autorité du CRS cible
    fn target_srid(&self) -> i32;

    /// Applique la transformation à une coordonnée
    fn apply(&self, coord: Coord<f64>) -> Result<Coord<f64>, CrsError>;

    /// Retourne la transformation inverse (cible → source)
    ///
    /// Inversion pure : `self` reste inchangé, utilisable dans sa direction
    /// d'origine après l'appel.
    fn inverted(&self) -> Result<ArcTransform, CrsError>;
}

/// Handle partageable sur une transformation
pub type ArcTransform = Arc<dyn MathTransform>;

fn projection_for(crs: &Crs) -> Result<Box<dyn Projection>, CrsError> {
    match crs.kind() {
        CrsKind::Geographic => Ok(Box::new(PlateCarree)),
        CrsKind::WebMercator => Ok(Box::new(WebMercator)),
        CrsKind::Lambert93 => Ok(Box::new(Lambert93::new())),
        CrsKind::Utm { zone, south } => Ok(Box::new(UtmZone::new(zone, south))),
        #[cfg(feature = "reproject")]
        CrsKind::External => Err(CrsError::UnknownSrid(crs.srid())),
    }
}

/// Transformation native en deux étapes : source → géographique → cible
pub struct ChainTransform {
    source: Crs,
    target: Crs,
    from: Box<dyn Projection>,
    to: Box<dyn Projection>,
}

impl ChainTransform {
    /// Construit la transformation entre deux CRS supportés nativement
    pub fn for_pair(source: Crs, target: Crs) -> Result<Self, CrsError> {
        let from = projection_for(&source)?;
        let to = projection_for(&target)?;
        Ok(Self {
            source,
            target,
            from,
            to,
        })
    }
}

impl MathTransform for ChainTransform {
    fn source_srid(&self) -> i32 {
        self.source.srid()
    }

    fn target_srid(&self) -> i32 {
        self.target.srid()
    }

    fn apply(&self, coord: Coord<f64>) -> Result<Coord<f64>, CrsError> {
        let geo = self.from.inverse(coord)?;
        let out = self.to.forward(geo)?;

        if !out.x.is_finite() || !out.y.is_finite() {
            return Err(CrsError::OutOfDomain {
                x: coord.x,
                y: coord.y,
            });
        }
        Ok(out)
    }

    fn inverted(&self) -> Result<ArcTransform, CrsError> {
        Ok(Arc::new(Self::for_pair(self.target, self.source)?))
    }
}

/// Transforme une enveloppe : projette les quatre coins et retourne la boîte
/// englobante alignée sur les axes des points obtenus
pub fn transform_rect(transform: &dyn MathTransform, rect: Rect<f64>) -> Result<Rect<f64>, CrsError> {
    let (min, max) = (rect.min(), rect.max());
    let corners = [
        Coord { x: min.x, y: min.y },
        Coord { x: max.x, y: min.y },
        Coord { x: max.x, y: max.y },
        Coord { x: min.x, y: max.y },
    ];

    let mut lo = Coord {
        x: f64::INFINITY,
        y: f64::INFINITY,
    };
    let mut hi = Coord {
        x: f64::NEG_INFINITY,
        y: f64::NEG_INFINITY,
    };

    for corner in corners {
        let c = transform.apply(corner)?;
        lo.x = lo.x.min(c.x);
        lo.y = lo.y.min(c.y);
        hi.x = hi.x.max(c.x);
        hi.y = hi.y.max(c.y);
    }

    Ok(Rect::new(lo, hi))
}

/// Transforme toutes les coordonnées d'une géométrie
pub fn transform_geometry(
    transform: &dyn MathTransform,
    geom: &Geometry<f64>,
) -> Result<Geometry<f64>, CrsError> {
    match geom {
        Geometry::Point(p) => {
            let c = transform.apply(p.0)?;
            Ok(Geometry::Point(Point::from(c)))
        }
        Geometry::Line(l) => {
            let start = transform.apply(l.start)?;
            let end = transform.apply(l.end)?;
            Ok(Geometry::Line(geo::Line::new(start, end)))
        }
        Geometry::LineString(ls) => Ok(Geometry::LineString(transform_line_string(transform, ls)?)),
        Geometry::Polygon(p) => Ok(Geometry::Polygon(transform_polygon(transform, p)?)),
        Geometry::MultiPoint(mp) => {
            let points: Result<Vec<Point<f64>>, CrsError> =
                mp.0.iter()
                    .map(|p| Ok(Point::from(transform.apply(p.0)?)))
                    .collect();
            Ok(Geometry::MultiPoint(MultiPoint::new(points?)))
        }
        Geometry::MultiLineString(mls) => {
            let lines: Result<Vec<LineString<f64>>, CrsError> = mls
                .0
                .iter()
                .map(|ls| transform_line_string(transform, ls))
                .collect();
            Ok(Geometry::MultiLineString(MultiLineString::new(lines?)))
        }
        Geometry::MultiPolygon(mp) => {
            let polys: Result<Vec<Polygon<f64>>, CrsError> =
                mp.0.iter().map(|p| transform_polygon(transform, p)).collect();
            Ok(Geometry::MultiPolygon(MultiPolygon::new(polys?)))
        }
        Geometry::GeometryCollection(gc) => {
            let geoms: Result<Vec<Geometry<f64>>, CrsError> =
                gc.0.iter().map(|g| transform_geometry(transform, g)).collect();
            Ok(Geometry::GeometryCollection(geo::GeometryCollection(geoms?)))
        }
        Geometry::Rect(r) => Ok(Geometry::Rect(transform_rect(transform, *r)?)),
        Geometry::Triangle(t) => {
            let a = transform.apply(t.0)?;
            let b = transform.apply(t.1)?;
            let c = transform.apply(t.2)?;
            Ok(Geometry::Triangle(geo::Triangle::new(a, b, c)))
        }
    }
}

fn transform_line_string(
    transform: &dyn MathTransform,
    ls: &LineString<f64>,
) -> Result<LineString<f64>, CrsError> {
    let coords: Result<Vec<Coord<f64>>, CrsError> =
        ls.0.iter().map(|c| transform.apply(*c)).collect();
    Ok(LineString::new(coords?))
}

fn transform_polygon(
    transform: &dyn MathTransform,
    p: &Polygon<f64>,
) -> Result<Polygon<f64>, CrsError> {
    let exterior = transform_line_string(transform, p.exterior())?;
    let interiors: Result<Vec<LineString<f64>>, CrsError> = p
        .interiors()
        .iter()
        .map(|ring| transform_line_string(transform, ring))
        .collect();
    Ok(Polygon::new(exterior, interiors?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::CrsRegistry;
    use crate::service::CrsService;

    fn chain(source: i32, target: i32) -> ChainTransform {
        let registry = CrsRegistry::new();
        let src = registry.coordinate_system(source).unwrap();
        let tgt = registry.coordinate_system(target).unwrap();
        ChainTransform::for_pair(src, tgt).unwrap()
    }

    #[test]
    fn test_wgs84_vers_web_mercator() {
        let t = chain(4326, 3857);
        let c = t.apply(Coord { x: 1.0, y: 1.0 }).unwrap();

        // Valeurs de référence EPSG:3857 pour (1°, 1°)
        assert!((c.x - 111319.49079327358).abs() < 0.01, "x={}", c.x);
        assert!((c.y - 111325.1428663851).abs() < 0.01, "y={}", c.y);
    }

    #[test]
    fn test_inversion_pure() {
        let t = chain(4326, 3857);
        let inv = t.inverted().unwrap();

        // L'originale continue de projeter dans sa direction déclarée
        let projected = t.apply(Coord { x: 2.35, y: 48.85 }).unwrap();
        assert!((projected.x - 261600.0).abs() < 10.0, "x={}", projected.x);

        // L'inverse revient au point de départ
        let back = inv.apply(projected).unwrap();
        assert!((back.x - 2.35).abs() < 1e-9, "lon={}", back.x);
        assert!((back.y - 48.85).abs() < 1e-9, "lat={}", back.y);

        assert_eq!(inv.source_srid(), 3857);
        assert_eq!(inv.target_srid(), 4326);
    }

    #[test]
    fn test_transform_rect() {
        let t = chain(4326, 3857);
        let rect = Rect::new(Coord { x: -1.0, y: -1.0 }, Coord { x: 1.0, y: 1.0 });
        let out = transform_rect(&t, rect).unwrap();

        assert!((out.min().x + 111319.49079327358).abs() < 0.01);
        assert!((out.max().x - 111319.49079327358).abs() < 0.01);
        assert!((out.min().y + 111325.1428663851).abs() < 0.01);
        assert!((out.max().y - 111325.1428663851).abs() < 0.01);
    }

    #[test]
    fn test_transform_polygon() {
        let t = chain(2154, 4326);

        // Petit carré en Lambert-93 autour de Paris
        let poly = Geometry::Polygon(Polygon::new(
            LineString::from(vec![
                (652381.0, 6862047.0),
                (652481.0, 6862047.0),
                (652481.0, 6862147.0),
                (652381.0, 6862147.0),
                (652381.0, 6862047.0),
            ]),
            vec![],
        ));

        let result = transform_geometry(&t, &poly).unwrap();

        if let Geometry::Polygon(p) = result {
            assert_eq!(p.exterior().0.len(), 5);
            let first = &p.exterior().0[0];
            assert!(first.x > 2.0 && first.x < 3.0, "lon={}", first.x);
            assert!(first.y > 48.0 && first.y < 49.0, "lat={}", first.y);
        } else {
            panic!("Expected Polygon geometry");
        }
    }

    #[test]
    fn test_hors_domaine() {
        let t = chain(4326, 3857);
        // Longitude aberrante : tan/ln finissent en NaN ou infini
        let result = t.apply(Coord {
            x: f64::NAN,
            y: 0.0,
        });
        assert!(result.is_err());
    }
}
