//! Projection Lambert 93 (EPSG:2154)
//!
//! Lambert Conformal Conic avec 2 parallèles standards, sur l'ellipsoïde
//! GRS80. Les constantes de la projection sont précalculées à la
//! construction.

use geo::Coord;

use super::ellipsoid::GRS80;
use super::{Geographic, Projection};
use crate::error::CrsError;

/// Calcule la latitude isométrique
fn isometric_latitude(lat: f64, e: f64) -> f64 {
    let sin_lat = lat.sin();
    let term = ((1.0 - e * sin_lat) / (1.0 + e * sin_lat)).powf(e / 2.0);
    ((std::f64::consts::FRAC_PI_4 + lat / 2.0).tan() * term).ln()
}

/// Calcule la latitude depuis la latitude isométrique (itératif)
fn latitude_from_isometric(iso_lat: f64, e: f64) -> f64 {
    let mut lat = 2.0 * iso_lat.exp().atan() - std::f64::consts::FRAC_PI_2;

    for _ in 0..10 {
        let sin_lat = lat.sin();
        let term = ((1.0 + e * sin_lat) / (1.0 - e * sin_lat)).powf(e / 2.0);
        let new_lat = 2.0 * (iso_lat.exp() * term).atan() - std::f64::consts::FRAC_PI_2;

        if (new_lat - lat).abs() < 1e-12 {
            return new_lat;
        }
        lat = new_lat;
    }
    lat
}

/// Projection Lambert 93 avec ses constantes précalculées
pub struct Lambert93 {
    /// Exposant de la projection
    n: f64,
    /// Constante C
    c: f64,
    /// Rayon à l'origine
    r0: f64,
    /// Longitude origine (3°E)
    lon0: f64,
    /// False easting
    x0: f64,
    /// False northing
    y0: f64,
}

impl Lambert93 {
    pub fn new() -> Self {
        let lon0 = 3.0_f64.to_radians();
        let lat0 = 46.5_f64.to_radians();
        let lat1 = 44.0_f64.to_radians();
        let lat2 = 49.0_f64.to_radians();

        let a = GRS80.a;
        let e = GRS80.e;
        let e2 = GRS80.e2;

        // Grandes normales aux parallèles standards
        let n1 = a / (1.0 - e2 * lat1.sin().powi(2)).sqrt();
        let n2 = a / (1.0 - e2 * lat2.sin().powi(2)).sqrt();

        let l0 = isometric_latitude(lat0, e);
        let l1 = isometric_latitude(lat1, e);
        let l2 = isometric_latitude(lat2, e);

        let n = ((n1 * lat1.cos()).ln() - (n2 * lat2.cos()).ln()) / (l2 - l1);
        let c = (n1 * lat1.cos() / n) * (n * l1).exp();
        let r0 = c * (-n * l0).exp();

        Self {
            n,
            c,
            r0,
            lon0,
            x0: 700000.0,
            y0: 6600000.0,
        }
    }
}

impl Default for Lambert93 {
    fn default() -> Self {
        Self::new()
    }
}

impl Projection for Lambert93 {
    fn forward(&self, geo: Geographic) -> Result<Coord<f64>, CrsError> {
        let iso_lat = isometric_latitude(geo.lat, GRS80.e);

        let r = self.c * (-self.n * iso_lat).exp();
        let gamma = self.n * (geo.lon - self.lon0);

        let x = self.x0 + r * gamma.sin();
        let y = self.y0 + self.r0 - r * gamma.cos();

        Ok(Coord { x, y })
    }

    fn inverse(&self, coord: Coord<f64>) -> Result<Geographic, CrsError> {
        // Coordonnées centrées
        let dx = coord.x - self.x0;
        let dy = coord.y - self.y0;

        // Rayon et angle
        let r = (dx.powi(2) + (self.r0 - dy).powi(2)).sqrt();
        let r = if self.n < 0.0 { -r } else { r };

        let gamma = (dx / (self.r0 - dy)).atan();

        // Latitude isométrique puis géographique
        let iso_lat = -(r / self.c).ln() / self.n;
        let lat = latitude_from_isometric(iso_lat, GRS80.e);

        let lon = self.lon0 + gamma / self.n;

        Ok(Geographic::new(lon, lat))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paris() {
        // Tour Eiffel approximativement
        let geo = Lambert93::new()
            .inverse(Coord {
                x: 648237.0,
                y: 6862107.0,
            })
            .unwrap();
        let (lon, lat) = geo.to_degrees();

        // Tour Eiffel: 2.2945°E, 48.8584°N
        assert!((lon - 2.2945).abs() < 0.01, "lon={}", lon);
        assert!((lat - 48.8584).abs() < 0.01, "lat={}", lat);
    }

    #[test]
    fn test_marseille() {
        // Vieux-Port approximativement
        let geo = Lambert93::new()
            .inverse(Coord {
                x: 893193.0,
                y: 6245829.0,
            })
            .unwrap();
        let (lon, lat) = geo.to_degrees();

        // Marseille: 5.37°E, 43.30°N
        assert!((lon - 5.37).abs() < 0.1, "lon={}", lon);
        assert!((lat - 43.30).abs() < 0.1, "lat={}", lat);
    }

    #[test]
    fn test_aller_retour() {
        let proj = Lambert93::new();
        let geo = proj
            .inverse(Coord {
                x: 652381.0,
                y: 6862047.0,
            })
            .unwrap();
        let c = proj.forward(geo).unwrap();

        assert!((c.x - 652381.0).abs() < 0.01, "x={}", c.x);
        assert!((c.y - 6862047.0).abs() < 0.01, "y={}", c.y);
    }
}
