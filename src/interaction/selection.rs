use tracing::debug;

use crate::lifecycle::collaborators::RayCaster;
use crate::math::Point2;
use crate::operations::query::Describe;
use crate::scene::{Camera, SceneSession, SolidId};

/// Turns pointer clicks into selections.
///
/// The front-most solid under the pointer becomes the selection, its
/// properties go to the info panel, and it starts bouncing. A click that
/// hits nothing leaves the previous selection and panel as they were.
pub struct SelectionController<'a, C: RayCaster + ?Sized> {
    caster: &'a C,
    camera: &'a Camera,
}

impl<'a, C: RayCaster + ?Sized> SelectionController<'a, C> {
    #[must_use]
    pub fn new(caster: &'a C, camera: &'a Camera) -> Self {
        Self { caster, camera }
    }

    /// Selects the solid under `ndc`, if any, and returns it.
    ///
    /// Hits on handles that are not in the store are skipped.
    pub fn select_at(&self, session: &mut SceneSession, ndc: &Point2) -> Option<SolidId> {
        let hit = self
            .caster
            .intersect(ndc, self.camera, &session.store)
            .into_iter()
            .find(|hit| session.store.contains(hit.solid))?;
        let id = hit.solid;

        session.selection = Some(id);
        let text = Describe::new(id)
            .execute(&session.store)
            .map(|props| props.to_string());
        session.info.show(text);
        session.bounce.start_bounce(id);

        debug!(?id, distance = hit.distance, "selected solid");
        Some(id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{Color, Shape};
    use crate::interaction::AnalyticPicker;
    use crate::lifecycle::collaborators::RayHit;
    use crate::math::Point3;
    use crate::scene::{SceneStore, SolidData};

    /// Reports a fixed list of solids as hit, in the given order.
    struct ScriptedCaster(Vec<SolidId>);

    impl RayCaster for ScriptedCaster {
        fn intersect(&self, _ndc: &Point2, _camera: &Camera, _store: &SceneStore) -> Vec<RayHit> {
            self.0
                .iter()
                .enumerate()
                .map(|(i, &solid)| RayHit {
                    solid,
                    distance: i as f64,
                    point: Point3::origin(),
                })
                .collect()
        }
    }

    fn session_with_two() -> (SceneSession, SolidId, SolidId) {
        let mut session = SceneSession::new();
        let a = session.store_mut().add_solid(SolidData::resting(
            Shape::sphere(1.0).unwrap(),
            0.0,
            0.0,
            Color::from_hex(0x0011_2233),
        ));
        let b = session.store_mut().add_solid(SolidData::resting(
            Shape::cuboid(1.0, 1.0, 1.0).unwrap(),
            3.0,
            0.0,
            Color::default(),
        ));
        (session, a, b)
    }

    #[test]
    fn hit_selects_front_most() {
        let (mut session, a, b) = session_with_two();
        let caster = ScriptedCaster(vec![b, a]);
        let camera = Camera::default();

        let picked = SelectionController::new(&caster, &camera).select_at(&mut session, &Point2::origin());

        assert_eq!(picked, Some(b));
        assert_eq!(session.selected(), Some(b));
        assert!(session.bounce().is_bouncing(b));
        assert!(!session.bounce().is_bouncing(a));
        assert!(session.info().export_enabled());
        assert!(session
            .info()
            .text()
            .unwrap()
            .starts_with("Geometric figure: Rectangular prism"));
    }

    #[test]
    fn miss_keeps_previous_selection() {
        let (mut session, a, _) = session_with_two();
        let camera = Camera::default();
        SelectionController::new(&ScriptedCaster(vec![a]), &camera)
            .select_at(&mut session, &Point2::origin());
        let panel = session.info().clone();

        let picked = SelectionController::new(&ScriptedCaster(vec![]), &camera)
            .select_at(&mut session, &Point2::origin());

        assert!(picked.is_none());
        assert_eq!(session.selected(), Some(a));
        assert_eq!(*session.info(), panel);
    }

    #[test]
    fn reselecting_does_not_restart_bounce() {
        let (mut session, a, _) = session_with_two();
        let camera = Camera::default();
        let caster = ScriptedCaster(vec![a]);
        let controller = SelectionController::new(&caster, &camera);

        controller.select_at(&mut session, &Point2::origin());
        session.bounce.step(0.1, &mut session.store);
        let before = *session.bounce().state(a).unwrap();

        controller.select_at(&mut session, &Point2::origin());
        assert_eq!(*session.bounce().state(a).unwrap(), before);
    }

    #[test]
    fn stale_hits_are_skipped() {
        let (mut session, a, b) = session_with_two();
        session.store_mut().remove_solid(b);
        let camera = Camera::default();

        let picked = SelectionController::new(&ScriptedCaster(vec![b]), &camera)
            .select_at(&mut session, &Point2::origin());
        assert!(picked.is_none());
        assert!(session.selected().is_none());
        assert!(!session.info().export_enabled());
        assert_eq!(session.bounce().tracked_count(), 0);

        let picked = SelectionController::new(&ScriptedCaster(vec![b, a]), &camera)
            .select_at(&mut session, &Point2::origin());
        assert_eq!(picked, Some(a));
        assert!(!session.bounce().is_bouncing(b));
    }

    #[test]
    fn works_with_analytic_picker() {
        let (mut session, a, _) = session_with_two();
        let camera = Camera {
            position: Point3::new(0.0, 1.0, 10.0),
            target: Point3::new(0.0, 1.0, 0.0),
            ..Camera::default()
        };
        let picked = SelectionController::new(&AnalyticPicker, &camera)
            .select_at(&mut session, &Point2::origin());
        assert_eq!(picked, Some(a));
        assert!(session.info().text().unwrap().contains("Color: #112233"));
    }
}
