//! Cœur composable d'une couche : état CRS, caches et notifications
//!
//! [`LayerCore`] porte le comportement commun à toutes les couches : le SRID
//! source et le SRID cible optionnel, la résolution paresseuse des
//! transformations directe et inverse via un [`CrsService`], les fabriques
//! de géométries, le style et les listes d'observateurs. Les variantes
//! concrètes de couches le composent au lieu d'en hériter.
//!
//! Conception strictement monothread : les accesseurs paresseux prennent
//! `&mut self` et la mémoïsation se fait sans verrou.

use std::sync::Arc;

use tracing::debug;

use couche_crs::{ArcTransform, CrsRegistry, CrsService, GeometryFactory, SRID_NONE, SRID_UNSET};

use crate::cache::Cached;
use crate::error::LayerError;
use crate::events::{
    NameChanged, ObserverList, RenderCompleted, SridChanged, StyleChanged, TransformationChanged,
};
use crate::style::Style;

/// État et comportement partagés par toutes les couches
pub struct LayerCore {
    name: String,
    srid: i32,
    target_srid: Option<i32>,
    style: Style,
    service: Box<dyn CrsService>,

    forward: Cached<ArcTransform>,
    reverse: Cached<ArcTransform>,
    source_factory: Cached<GeometryFactory>,
    target_factory: Cached<GeometryFactory>,

    srid_changed: ObserverList<SridChanged>,
    transformation_changed: ObserverList<TransformationChanged>,
    style_changed: ObserverList<StyleChanged>,
    name_changed: ObserverList<NameChanged>,
    render_completed: ObserverList<RenderCompleted>,
}

impl LayerCore {
    /// Crée un cœur de couche adossé au registre de CRS par défaut
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_service(name, Box::new(CrsRegistry::new()))
    }

    /// Crée un cœur de couche adossé à un service de CRS fourni
    pub fn with_service(name: impl Into<String>, service: Box<dyn CrsService>) -> Self {
        Self {
            name: name.into(),
            srid: SRID_UNSET,
            target_srid: None,
            style: Style::default(),
            service,
            forward: Cached::default(),
            reverse: Cached::default(),
            source_factory: Cached::default(),
            target_factory: Cached::default(),
            srid_changed: ObserverList::new(),
            transformation_changed: ObserverList::new(),
            style_changed: ObserverList::new(),
            name_changed: ObserverList::new(),
            render_completed: ObserverList::new(),
        }
    }

    // --- Nom et style (propriétés simples) ---

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renomme la couche et notifie, sauf si le nom est identique
    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        if name == self.name {
            return;
        }
        let event = NameChanged {
            previous: std::mem::replace(&mut self.name, name.clone()),
            current: name,
        };
        self.name_changed.fire(&event);
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Remplace le style et notifie, sauf si la valeur est logiquement égale
    pub fn set_style(&mut self, style: Style) {
        if style == self.style {
            return;
        }
        self.style = style;
        self.style_changed.fire(&StyleChanged);
    }

    // --- État CRS ---

    /// SRID des géométries stockées
    pub fn srid(&self) -> i32 {
        self.srid
    }

    /// Change le SRID source
    ///
    /// No-op si la valeur est inchangée. Sinon : recalcule la fabrique
    /// source, invalide les deux transformations mémorisées et notifie.
    pub fn set_srid(&mut self, srid: i32) {
        if srid == self.srid {
            return;
        }
        debug!(
            couche = %self.name,
            ancien = self.srid,
            nouveau = srid,
            "changement de SRID, invalidation des transformations"
        );

        let previous = std::mem::replace(&mut self.srid, srid);
        self.source_factory.set(self.service.geometry_factory(srid));
        self.forward.invalidate();
        self.reverse.invalidate();

        self.srid_changed.fire(&SridChanged {
            previous,
            current: srid,
        });
    }

    /// SRID de présentation : la valeur explicite si posée, sinon le SRID
    /// source (défaut dynamique, réévalué à chaque lecture)
    pub fn target_srid(&self) -> i32 {
        self.target_srid.unwrap_or(self.srid)
    }

    /// Pose un SRID cible explicite (même égal au SRID source) et recalcule
    /// la fabrique cible
    ///
    /// Ne purge pas les transformations mémorisées, contrairement à
    /// [`set_srid`](Self::set_srid) : une transformation déjà résolue reste
    /// servie telle quelle tant que le SRID source ne change pas.
    pub fn set_target_srid(&mut self, srid: i32) {
        self.target_srid = Some(srid);
        self.target_factory.set(self.service.geometry_factory(srid));
    }

    /// Vrai si présenter les géométries demande une transformation
    ///
    /// Le SRID sentinelle `0` ("pas de CRS") est exclu du test.
    pub fn needs_transformation(&self) -> bool {
        let target = self.target_srid();
        self.srid != SRID_NONE && target != SRID_NONE && self.srid != target
    }

    // --- Résolution des transformations ---

    /// Transformation source → cible, résolue paresseusement
    ///
    /// `None` quand aucune transformation n'est requise. Les échecs du
    /// service (SRID inconnu, pas de chemin) remontent à l'appelant.
    pub fn forward_transformation(&mut self) -> Result<Option<ArcTransform>, LayerError> {
        if let Some(t) = self.forward.get() {
            return Ok(Some(Arc::clone(t)));
        }
        if !self.needs_transformation() {
            return Ok(None);
        }

        let target_srid = self.target_srid();
        debug!(
            couche = %self.name,
            source = self.srid,
            cible = target_srid,
            "résolution de la transformation directe"
        );

        let source = self.service.coordinate_system(self.srid)?;
        let target = self.service.coordinate_system(target_srid)?;
        let t = self.service.create_transformation(&source, &target)?;

        self.forward.set(Arc::clone(&t));
        Ok(Some(t))
    }

    /// Remplace la transformation directe
    ///
    /// No-op si `transformation` est le handle déjà mémorisé. Pour un handle
    /// non nul, les codes d'autorité déclarés par la transformation sont
    /// reportés sur le SRID et le SRID cible (avec leurs effets de bord
    /// habituels) avant la mémorisation, puis la notification est émise.
    pub fn set_forward_transformation(&mut self, transformation: Option<ArcTransform>) {
        let unchanged = match (self.forward.get(), &transformation) {
            (None, None) => true,
            (Some(current), Some(new)) => Arc::ptr_eq(current, new),
            _ => false,
        };
        if unchanged {
            return;
        }

        match transformation {
            Some(t) => {
                self.set_srid(t.source_srid());
                self.set_target_srid(t.target_srid());
                self.forward.set(t);
            }
            None => self.forward.invalidate(),
        }

        let event = TransformationChanged {
            source: self.srid,
            target: self.target_srid(),
        };
        self.transformation_changed.fire(&event);
    }

    /// Transformation cible → source, résolue paresseusement
    ///
    /// Résolue comme une demande directe dans le sens inverse, jamais en
    /// inversant la transformation directe : toutes les transformations ne
    /// sont pas inversibles.
    pub fn reverse_transformation(&mut self) -> Result<Option<ArcTransform>, LayerError> {
        if let Some(t) = self.reverse.get() {
            return Ok(Some(Arc::clone(t)));
        }
        if !self.needs_transformation() {
            return Ok(None);
        }

        let target_srid = self.target_srid();
        debug!(
            couche = %self.name,
            source = target_srid,
            cible = self.srid,
            "résolution de la transformation inverse"
        );

        let source = self.service.coordinate_system(self.srid)?;
        let target = self.service.coordinate_system(target_srid)?;
        let t = self.service.create_transformation(&target, &source)?;

        self.reverse.set(Arc::clone(&t));
        Ok(Some(t))
    }

    /// Pose directement la transformation cible → source
    ///
    /// Pour les CRS dont la transformation directe n'est pas inversible par
    /// la bibliothèque sous-jacente. Aucun effet de bord sur les SRID.
    pub fn set_reverse_transformation(&mut self, transformation: Option<ArcTransform>) {
        match transformation {
            Some(t) => self.reverse.set(t),
            None => self.reverse.invalidate(),
        }
    }

    // --- Fabriques de géométries ---

    /// Fabrique liée au SRID source ; s'initialise d'elle-même à la première
    /// lecture
    pub fn source_factory(&mut self) -> GeometryFactory {
        if let Some(f) = self.source_factory.get() {
            return *f;
        }
        let f = self.service.geometry_factory(self.srid);
        self.source_factory.set(f);
        f
    }

    /// Fabrique liée au SRID cible, avec repli sur la fabrique source quand
    /// aucune fabrique cible distincte n'a été résolue
    pub fn target_factory(&mut self) -> GeometryFactory {
        if let Some(f) = self.target_factory.get() {
            return *f;
        }
        self.source_factory()
    }

    // --- Notifications ---

    pub fn on_srid_changed(&mut self) -> &mut ObserverList<SridChanged> {
        &mut self.srid_changed
    }

    pub fn on_transformation_changed(&mut self) -> &mut ObserverList<TransformationChanged> {
        &mut self.transformation_changed
    }

    pub fn on_style_changed(&mut self) -> &mut ObserverList<StyleChanged> {
        &mut self.style_changed
    }

    pub fn on_name_changed(&mut self) -> &mut ObserverList<NameChanged> {
        &mut self.name_changed
    }

    pub fn on_render_completed(&mut self) -> &mut ObserverList<RenderCompleted> {
        &mut self.render_completed
    }

    /// À appeler par les variantes concrètes à la fin de leur rendu
    pub fn notify_render_completed(&mut self) {
        self.render_completed.fire(&RenderCompleted);
    }
}

impl std::fmt::Debug for LayerCore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayerCore")
            .field("name", &self.name)
            .field("srid", &self.srid)
            .field("target_srid", &self.target_srid)
            .field("forward_cached", &self.forward.is_resolved())
            .field("reverse_cached", &self.reverse.is_resolved())
            .finish()
    }
}
