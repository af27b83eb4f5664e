//! Le trait de capacité `Layer` et ses collaborateurs de rendu
//!
//! Une couche est une interface (enveloppe, rendu, accès au cœur) dont le
//! comportement commun vit dans [`LayerCore`] : les variantes concrètes le
//! composent. Le dessin lui-même est délégué à une [`RenderSurface`]
//! externe ; la seule obligation du rendu est de déclencher la notification
//! de fin de rendu.

use geo::Rect;

use couche_crs::SridGeometry;

use crate::core::LayerCore;
use crate::error::LayerError;
use crate::style::Style;

/// Fenêtre de rendu : emprise en CRS de présentation, zoom et échelle
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    /// Emprise visible, dans le CRS de présentation de la carte
    pub extent: Rect<f64>,

    /// Largeur de la vue en unités carte
    pub zoom: f64,

    /// Dénominateur d'échelle
    pub scale: f64,
}

impl Viewport {
    pub fn new(extent: Rect<f64>, zoom: f64, scale: f64) -> Self {
        Self {
            extent,
            zoom,
            scale,
        }
    }
}

/// Surface de dessin externe : la couche lui remet des géométries déjà
/// reprojetées, la rastérisation ne la concerne pas
pub trait RenderSurface {
    fn draw(&mut self, geometry: &SridGeometry, style: &Style);
}

/// Une couche cartographique
pub trait Layer {
    /// Cœur composable portant l'état CRS, le style et les notifications
    fn core(&self) -> &LayerCore;

    fn core_mut(&mut self) -> &mut LayerCore;

    /// Enveloppe de la couche, dans le CRS de présentation
    fn envelope(&mut self) -> Result<Option<Rect<f64>>, LayerError>;

    /// Dessine la couche sur la surface puis notifie la fin de rendu
    fn render(
        &mut self,
        surface: &mut dyn RenderSurface,
        viewport: &Viewport,
    ) -> Result<(), LayerError>;

    fn name(&self) -> &str {
        self.core().name()
    }

    /// Vrai si le style rend la couche visible pour cette fenêtre
    fn is_visible(&self, viewport: &Viewport) -> bool {
        self.core()
            .style()
            .visible_at(viewport.zoom, viewport.scale)
    }
}
