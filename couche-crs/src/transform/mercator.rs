//! Projection Web Mercator (EPSG:3857)
//!
//! Aussi connue sous le nom de Pseudo-Mercator ou Spherical Mercator.
//! Utilisée par Google Maps, OpenStreetMap, etc.

use geo::Coord;

use super::ellipsoid::WGS84;
use super::{Geographic, Projection};
use crate::error::CrsError;

/// Projection Web Mercator sur le modèle sphérique (rayon équatorial WGS84)
pub struct WebMercator;

impl Projection for WebMercator {
    fn forward(&self, geo: Geographic) -> Result<Coord<f64>, CrsError> {
        let r = WGS84.a;

        // Limiter la latitude pour éviter l'infini
        let lat = geo.lat.clamp(-85.0_f64.to_radians(), 85.0_f64.to_radians());

        let x = r * geo.lon;
        let y = r * (std::f64::consts::FRAC_PI_4 + lat / 2.0).tan().ln();

        Ok(Coord { x, y })
    }

    fn inverse(&self, coord: Coord<f64>) -> Result<Geographic, CrsError> {
        let r = WGS84.a;

        let lon = coord.x / r;
        let lat = 2.0 * (coord.y / r).exp().atan() - std::f64::consts::FRAC_PI_2;

        Ok(Geographic::new(lon, lat))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paris_vers_web_mercator() {
        // Paris: 2.35°E, 48.85°N
        let geo = Geographic::from_degrees(2.35, 48.85);
        let c = WebMercator.forward(geo).unwrap();

        // X ≈ 261600, Y ≈ 6250000
        assert!((c.x - 261600.0).abs() < 1000.0, "x={}", c.x);
        assert!((c.y - 6250000.0).abs() < 10000.0, "y={}", c.y);
    }

    #[test]
    fn test_aller_retour() {
        let geo = Geographic::from_degrees(2.35, 48.85);
        let c = WebMercator.forward(geo).unwrap();
        let geo2 = WebMercator.inverse(c).unwrap();
        let (lon, lat) = geo2.to_degrees();

        assert!((lon - 2.35).abs() < 0.001, "lon={}", lon);
        assert!((lat - 48.85).abs() < 0.001, "lat={}", lat);
    }
}
