use slotmap::SecondaryMap;
use tracing::debug;

use crate::scene::{SceneStore, SolidId};

/// Constants of the damped bounce.
///
/// Velocities and heights are in scene units per frame step; `gravity` is
/// scaled by the frame delta in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BounceParams {
    /// Deceleration while rising, acceleration while falling.
    pub gravity: f64,
    /// Fraction of the impact velocity kept on a rebound.
    pub damping: f64,
    /// Upward velocity given to a solid when its bounce starts.
    pub initial_velocity: f64,
    /// Impact velocity at or below which the solid settles instead of rebounding.
    pub rebound_threshold: f64,
}

impl Default for BounceParams {
    fn default() -> Self {
        Self {
            gravity: 0.98,
            damping: 0.65,
            initial_velocity: 0.2,
            rebound_threshold: 0.1,
        }
    }
}

impl BounceParams {
    #[must_use]
    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    #[must_use]
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    #[must_use]
    pub fn with_initial_velocity(mut self, initial_velocity: f64) -> Self {
        self.initial_velocity = initial_velocity;
        self
    }

    #[must_use]
    pub fn with_rebound_threshold(mut self, rebound_threshold: f64) -> Self {
        self.rebound_threshold = rebound_threshold;
        self
    }
}

/// Direction of travel of a bouncing solid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BouncePhase {
    Rising,
    Falling,
}

/// Transient bounce state of one solid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BounceState {
    velocity: f64,
    height: f64,
    phase: BouncePhase,
}

impl BounceState {
    fn launch(params: &BounceParams) -> Self {
        Self {
            velocity: params.initial_velocity,
            height: 0.0,
            phase: BouncePhase::Rising,
        }
    }

    /// Signed velocity. Positive means "moving in the phase's direction" while
    /// rising or falling; a fresh rebound is negative until it turns over.
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Offset above the rest height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn phase(&self) -> BouncePhase {
        self.phase
    }

    /// Advances one frame. Returns `false` once the bounce has settled.
    fn advance(&mut self, dt: f64, params: &BounceParams) -> bool {
        match self.phase {
            BouncePhase::Rising => {
                self.velocity -= params.gravity * dt;
                self.height += self.velocity;
                if self.velocity <= 0.0 {
                    self.phase = BouncePhase::Falling;
                }
                true
            }
            BouncePhase::Falling => {
                self.velocity += params.gravity * dt;
                self.height -= self.velocity;
                if self.height > 0.0 {
                    return true;
                }
                self.height = 0.0;
                if self.velocity > params.rebound_threshold {
                    self.velocity = -self.velocity * params.damping;
                    true
                } else {
                    false
                }
            }
        }
    }
}

/// Animates the bounce of selected solids.
///
/// Bounce state lives in a side table keyed by [`SolidId`]; a solid without
/// an entry is at rest. Each [`step`](Self::step) writes
/// `rest_height + height` back into the solid's `position.y`.
#[derive(Debug, Default)]
pub struct BounceSimulator {
    params: BounceParams,
    states: SecondaryMap<SolidId, BounceState>,
}

impl BounceSimulator {
    /// Creates a simulator with the given constants.
    #[must_use]
    pub fn new(params: BounceParams) -> Self {
        Self {
            params,
            states: SecondaryMap::new(),
        }
    }

    #[must_use]
    pub fn params(&self) -> &BounceParams {
        &self.params
    }

    /// Starts bouncing `solid`. Returns `false` and leaves the current state
    /// untouched if it is already bouncing.
    pub fn start_bounce(&mut self, solid: SolidId) -> bool {
        if self.states.contains_key(solid) {
            return false;
        }
        self.states.insert(solid, BounceState::launch(&self.params));
        true
    }

    /// Advances every bouncing solid by `dt` seconds.
    ///
    /// Solids that settle are dropped from tracking and left at rest height.
    /// Entries whose solid is no longer in `store` are dropped as well.
    pub fn step(&mut self, dt: f64, store: &mut SceneStore) {
        let params = self.params;
        self.states.retain(|id, state| {
            let Ok(solid) = store.solid_mut(id) else {
                return false;
            };
            let active = state.advance(dt, &params);
            solid.position.y = solid.rest_height() + state.height;
            if !active {
                debug!(?id, "bounce settled");
            }
            active
        });
    }

    #[must_use]
    pub fn is_bouncing(&self, solid: SolidId) -> bool {
        self.states.contains_key(solid)
    }

    #[must_use]
    pub fn state(&self, solid: SolidId) -> Option<&BounceState> {
        self.states.get(solid)
    }

    /// Number of solids currently bouncing.
    #[must_use]
    pub fn tracked_count(&self) -> usize {
        self.states.len()
    }

    /// Stops every bounce without touching solid positions.
    pub fn clear(&mut self) {
        self.states.clear();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{Color, Shape};
    use crate::scene::SolidData;
    use approx::assert_relative_eq;

    fn scene_with_box() -> (SceneStore, SolidId) {
        let mut store = SceneStore::new();
        let id = store.add_solid(SolidData::resting(
            Shape::cuboid(1.0, 2.0, 1.0).unwrap(),
            0.0,
            0.0,
            Color::default(),
        ));
        (store, id)
    }

    #[test]
    fn first_step_rises() {
        let (mut store, id) = scene_with_box();
        let mut sim = BounceSimulator::default();
        assert!(sim.start_bounce(id));

        sim.step(0.1, &mut store);

        let state = sim.state(id).unwrap();
        assert_relative_eq!(state.velocity(), 0.102, epsilon = 1e-12);
        assert_relative_eq!(state.height(), 0.102, epsilon = 1e-12);
        assert_eq!(state.phase(), BouncePhase::Rising);
        assert_relative_eq!(store.solid(id).unwrap().position.y, 1.102, epsilon = 1e-12);
    }

    #[test]
    fn restart_while_bouncing_is_ignored() {
        let (mut store, id) = scene_with_box();
        let mut sim = BounceSimulator::default();
        sim.start_bounce(id);
        sim.step(0.1, &mut store);
        let before = *sim.state(id).unwrap();

        assert!(!sim.start_bounce(id));
        assert!(!sim.start_bounce(id));

        assert_eq!(*sim.state(id).unwrap(), before);
        assert_eq!(sim.tracked_count(), 1);
    }

    #[test]
    fn turns_over_when_velocity_runs_out() {
        let (mut store, id) = scene_with_box();
        let mut sim = BounceSimulator::default();
        sim.start_bounce(id);
        // 0.2 - 0.98 * 0.3 < 0
        sim.step(0.3, &mut store);
        assert_eq!(sim.state(id).unwrap().phase(), BouncePhase::Falling);
    }

    #[test]
    fn slow_contact_settles() {
        let (mut store, id) = scene_with_box();
        let mut sim = BounceSimulator::default();
        sim.states.insert(
            id,
            BounceState {
                velocity: 0.05,
                height: 0.01,
                phase: BouncePhase::Falling,
            },
        );

        // velocity 0.05 + 0.0098 <= 0.1 at ground contact
        sim.step(0.01, &mut store);

        assert!(!sim.is_bouncing(id));
        assert_relative_eq!(store.solid(id).unwrap().position.y, 1.0);
    }

    #[test]
    fn contact_at_threshold_settles() {
        let (mut store, id) = scene_with_box();
        let mut sim = BounceSimulator::default();
        sim.states.insert(
            id,
            BounceState {
                velocity: 0.1,
                height: 0.05,
                phase: BouncePhase::Falling,
            },
        );

        sim.step(0.0, &mut store);

        assert!(!sim.is_bouncing(id));
        assert_eq!(sim.tracked_count(), 0);
        assert_relative_eq!(store.solid(id).unwrap().position.y, 1.0);
    }

    #[test]
    fn fast_contact_rebounds() {
        let (mut store, id) = scene_with_box();
        let mut sim = BounceSimulator::default();
        sim.states.insert(
            id,
            BounceState {
                velocity: 0.5,
                height: 0.1,
                phase: BouncePhase::Falling,
            },
        );

        sim.step(0.0, &mut store);

        let state = sim.state(id).unwrap();
        assert_relative_eq!(state.height(), 0.0);
        assert_relative_eq!(state.velocity(), -0.325, epsilon = 1e-12);
        assert_eq!(state.phase(), BouncePhase::Falling);
        assert_relative_eq!(store.solid(id).unwrap().position.y, 1.0);
    }

    #[test]
    fn bounce_settles_back_to_rest() {
        let (mut store, id) = scene_with_box();
        let mut sim = BounceSimulator::default();
        sim.start_bounce(id);

        let mut peak = 0.0_f64;
        let mut frames = 0;
        while sim.is_bouncing(id) && frames < 10_000 {
            sim.step(1.0 / 60.0, &mut store);
            let y = store.solid(id).unwrap().position.y;
            assert!(y >= 1.0 - 1e-12, "sank below rest at frame {frames}: {y}");
            peak = peak.max(y);
            frames += 1;
        }

        assert!(!sim.is_bouncing(id), "bounce never settled");
        assert!(peak > 1.5, "peak {peak} too low");
        assert_relative_eq!(store.solid(id).unwrap().position.y, 1.0);
    }

    #[test]
    fn idle_solids_are_not_moved() {
        let (mut store, id) = scene_with_box();
        store.solid_mut(id).unwrap().position.y = 7.0;
        let mut sim = BounceSimulator::default();
        sim.step(0.5, &mut store);
        assert_relative_eq!(store.solid(id).unwrap().position.y, 7.0);
    }

    #[test]
    fn removed_solid_is_dropped() {
        let (mut store, id) = scene_with_box();
        let mut sim = BounceSimulator::default();
        sim.start_bounce(id);
        store.remove_solid(id);
        sim.step(0.016, &mut store);
        assert_eq!(sim.tracked_count(), 0);
    }

    #[test]
    fn custom_params_apply() {
        let params = BounceParams::default()
            .with_initial_velocity(1.0)
            .with_gravity(2.0)
            .with_damping(0.5)
            .with_rebound_threshold(0.3);
        let (mut store, id) = scene_with_box();
        let mut sim = BounceSimulator::new(params);
        sim.start_bounce(id);
        sim.step(0.25, &mut store);
        assert_relative_eq!(sim.state(id).unwrap().velocity(), 0.5, epsilon = 1e-12);
        assert_relative_eq!(sim.params().damping, 0.5);
    }
}
