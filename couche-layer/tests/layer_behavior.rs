//! Tests d'intégration : invalidation observable, court-circuits et rendu

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use geo::{Coord, Geometry, Point, Rect};

use couche_layer::crs::{
    ArcTransform, Crs, CrsError, CrsRegistry, CrsService, GeometryFactory, SridGeometry,
};
use couche_layer::{Layer, LayerCore, RenderSurface, Style, VectorLayer, Viewport};

/// Doublure de service : délègue au registre réel en comptant les appels
struct CountingService {
    registry: CrsRegistry,
    lookups: Rc<Cell<usize>>,
    creations: Rc<Cell<usize>>,
}

impl CountingService {
    fn new() -> (Self, Rc<Cell<usize>>, Rc<Cell<usize>>) {
        let lookups = Rc::new(Cell::new(0));
        let creations = Rc::new(Cell::new(0));
        let service = Self {
            registry: CrsRegistry::new(),
            lookups: Rc::clone(&lookups),
            creations: Rc::clone(&creations),
        };
        (service, lookups, creations)
    }
}

impl CrsService for CountingService {
    fn coordinate_system(&self, srid: i32) -> Result<Crs, CrsError> {
        self.lookups.set(self.lookups.get() + 1);
        self.registry.coordinate_system(srid)
    }

    fn create_transformation(&self, source: &Crs, target: &Crs) -> Result<ArcTransform, CrsError> {
        self.creations.set(self.creations.get() + 1);
        self.registry.create_transformation(source, target)
    }
}

#[test]
fn test_changement_de_srid_invalide_les_caches() {
    let (service, _, creations) = CountingService::new();
    let mut core = LayerCore::with_service("test", Box::new(service));

    core.set_srid(4326);
    core.set_target_srid(3857);

    // Deux lectures, une seule résolution
    core.forward_transformation().unwrap().unwrap();
    core.forward_transformation().unwrap().unwrap();
    assert_eq!(creations.get(), 1);

    // Nouveau SRID : caches purgés, la prochaine lecture re-résout
    core.set_srid(2154);
    assert_eq!(creations.get(), 1);

    let t = core.forward_transformation().unwrap().unwrap();
    assert_eq!(creations.get(), 2);
    assert_eq!(t.source_srid(), 2154);
    assert_eq!(t.target_srid(), 3857);
}

#[test]
fn test_asymetrie_du_srid_cible() {
    let (service, _, creations) = CountingService::new();
    let mut core = LayerCore::with_service("test", Box::new(service));

    core.set_srid(4326);
    core.set_target_srid(3857);
    let t1 = core.forward_transformation().unwrap().unwrap();
    assert_eq!(creations.get(), 1);

    // Changer le SRID cible ne purge PAS la transformation mémorisée :
    // la lecture suivante rend le handle déjà résolu, même périmé
    core.set_target_srid(2154);
    let t2 = core.forward_transformation().unwrap().unwrap();
    assert_eq!(creations.get(), 1);
    assert_eq!(t2.target_srid(), t1.target_srid());
}

#[test]
fn test_court_circuit_sans_appel_service() {
    let (service, lookups, creations) = CountingService::new();
    let mut core = LayerCore::with_service("test", Box::new(service));

    core.set_srid(4326);
    core.set_target_srid(3857);

    // Géométrie déjà dans le CRS cible : aucun appel au service
    let g = SridGeometry::new(3857, Geometry::Point(Point::new(261600.0, 6250000.0)));
    let out = core.geometry_to_target(g.clone()).unwrap();

    assert_eq!(out, g);
    assert_eq!(lookups.get(), 0);
    assert_eq!(creations.get(), 0);
}

#[test]
fn test_identite_quand_srid_egaux() {
    let mut core = LayerCore::new("test");
    core.set_srid(3857);
    core.set_target_srid(3857);

    assert!(!core.needs_transformation());

    let rect = Rect::new(
        Coord {
            x: 100.0,
            y: 200.0,
        },
        Coord {
            x: 300.0,
            y: 400.0,
        },
    );
    assert_eq!(core.envelope_to_target(rect).unwrap(), rect);

    let g = SridGeometry::new(3857, Geometry::Point(Point::new(100.0, 200.0)));
    assert_eq!(core.geometry_to_target(g.clone()).unwrap(), g);
}

/// Surface de dessin factice enregistrant les SRID des géométries reçues
#[derive(Default)]
struct RecordingSurface {
    drawn: Vec<i32>,
}

impl RenderSurface for RecordingSurface {
    fn draw(&mut self, geometry: &SridGeometry, _style: &Style) {
        self.drawn.push(geometry.srid);
    }
}

fn viewport() -> Viewport {
    Viewport::new(
        Rect::new(
            Coord {
                x: -20000000.0,
                y: -20000000.0,
            },
            Coord {
                x: 20000000.0,
                y: 20000000.0,
            },
        ),
        1000.0,
        25000.0,
    )
}

#[test]
fn test_rendu_reprojete_et_notifie() {
    let mut layer = VectorLayer::new("parcelles", 2154);
    layer.add_feature(Geometry::Point(Point::new(652381.0, 6862047.0)));
    layer.add_feature(Geometry::Point(Point::new(893193.0, 6245829.0)));
    layer.core_mut().set_target_srid(3857);

    let completed = Rc::new(RefCell::new(0));
    let c = Rc::clone(&completed);
    layer
        .core_mut()
        .on_render_completed()
        .subscribe(move |_| *c.borrow_mut() += 1);

    let mut surface = RecordingSurface::default();
    layer.render(&mut surface, &viewport()).unwrap();

    // Les deux géométries arrivent reprojetées dans le CRS de présentation
    assert_eq!(surface.drawn, vec![3857, 3857]);
    assert_eq!(*completed.borrow(), 1);
}

#[test]
fn test_rendu_couche_invisible() {
    let mut layer = VectorLayer::new("parcelles", 4326);
    layer.add_feature(Geometry::Point(Point::new(2.35, 48.85)));

    let mut style = layer.core().style().clone();
    style.min_visible = 1_000_000.0;
    layer.core_mut().set_style(style);

    let completed = Rc::new(RefCell::new(0));
    let c = Rc::clone(&completed);
    layer
        .core_mut()
        .on_render_completed()
        .subscribe(move |_| *c.borrow_mut() += 1);

    let mut surface = RecordingSurface::default();
    layer.render(&mut surface, &viewport()).unwrap();

    // Rien n'est dessiné mais la fin de rendu est tout de même notifiée
    assert!(surface.drawn.is_empty());
    assert_eq!(*completed.borrow(), 1);
}

#[test]
fn test_enveloppe_de_couche_reprojetee() {
    let mut layer = VectorLayer::new("points", 4326);
    layer.add_feature(Geometry::Point(Point::new(-1.0, -1.0)));
    layer.add_feature(Geometry::Point(Point::new(1.0, 1.0)));
    layer.core_mut().set_target_srid(3857);

    let rect = layer.envelope().unwrap().unwrap();

    assert!((rect.min().x + 111319.49079327358).abs() < 0.01);
    assert!((rect.max().y - 111325.1428663851).abs() < 0.01);
}

#[test]
fn test_srid_inconnu_remonte() {
    let mut core = LayerCore::new("test");
    core.set_srid(123456);
    core.set_target_srid(3857);

    // Échec du service propagé tel quel à la résolution paresseuse
    assert!(core.forward_transformation().is_err());
}

#[test]
fn test_factory_fournie_par_le_service() {
    let registry = CrsRegistry::new();
    let factory: GeometryFactory = registry.geometry_factory(2154);
    assert_eq!(factory.srid(), 2154);
}
