//! Définitions des ellipsoïdes de référence

/// Paramètres d'un ellipsoïde de révolution
#[derive(Debug, Clone, Copy)]
pub struct Ellipsoid {
    /// Demi-grand axe (rayon équatorial) en mètres
    pub a: f64,
    /// Aplatissement
    pub f: f64,
    /// Première excentricité
    pub e: f64,
    /// Première excentricité au carré
    pub e2: f64,
    /// Deuxième excentricité au carré
    pub ep2: f64,
}

/// Ellipsoïde WGS84 (UTM, Web Mercator sphérique)
pub const WGS84: Ellipsoid = Ellipsoid {
    a: 6378137.0,
    f: 1.0 / 298.257223563,
    e: 0.0818191908426215,
    e2: 2.0 * (1.0 / 298.257223563) - (1.0 / 298.257223563) * (1.0 / 298.257223563),
    ep2: (2.0 * (1.0 / 298.257223563) - (1.0 / 298.257223563) * (1.0 / 298.257223563))
        / (1.0 - (2.0 * (1.0 / 298.257223563) - (1.0 / 298.257223563) * (1.0 / 298.257223563))),
};

/// Ellipsoïde GRS80 (Lambert 93)
/// Quasi identique à WGS84, différence < 0.1mm
pub const GRS80: Ellipsoid = Ellipsoid {
    a: 6378137.0,
    f: 1.0 / 298.257222101,
    e: 0.0818191910428158,
    e2: 2.0 * (1.0 / 298.257222101) - (1.0 / 298.257222101) * (1.0 / 298.257222101),
    ep2: (2.0 * (1.0 / 298.257222101) - (1.0 / 298.257222101) * (1.0 / 298.257222101))
        / (1.0 - (2.0 * (1.0 / 298.257222101) - (1.0 / 298.257222101) * (1.0 / 298.257222101))),
};
