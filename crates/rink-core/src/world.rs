//! Destination and collision geometry on the wrap-around domain.

use crate::{ChoiceId, CollisionModel, Compass, Point, RinkConfig, RinkResult, Torus};

/// Immutable geometry for one run.
///
/// Built from a validated [`RinkConfig`]; both operations are pure.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct World {
    torus:            Torus,
    compass:          Compass,
    collision_radius: f64,
    step_size:        f64,
    collision_model:  CollisionModel,
}

impl World {
    /// Validate `config` and extract its geometry.
    pub fn from_config(config: &RinkConfig) -> RinkResult<Self> {
        config.validate()?;
        Ok(Self {
            torus:            Torus::new(config.width, config.height),
            compass:          Compass::new(config.choice_count),
            collision_radius: config.collision_radius,
            step_size:        config.step_size,
            collision_model:  config.collision_model,
        })
    }

    #[inline]
    pub fn torus(&self) -> &Torus {
        &self.torus
    }

    #[inline]
    pub fn compass(&self) -> &Compass {
        &self.compass
    }

    #[inline]
    pub fn collision_radius(&self) -> f64 {
        self.collision_radius
    }

    #[inline]
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    #[inline]
    pub fn collision_model(&self) -> CollisionModel {
        self.collision_model
    }

    /// Where an agent at `from` lands after one step along `choice`'s heading.
    pub fn destination(&self, from: Point, choice: ChoiceId) -> Point {
        let (dx, dy) = self.compass.unit_vector(choice);
        self.torus.wrap(from.translate(dx * self.step_size, dy * self.step_size))
    }

    /// `true` if `a` and `b` are closer than the collision radius.
    ///
    /// Symmetric in its arguments under both collision models.
    pub fn collides(&self, a: Point, b: Point) -> bool {
        match self.collision_model {
            CollisionModel::PositiveWrap => {
                let (w, h) = (self.torus.width, self.torus.height);
                self.within_radius(a, b)
                    || self.within_radius(a.translate(w, 0.0), b)
                    || self.within_radius(a.translate(0.0, h), b)
                    || self.within_radius(a, b.translate(w, 0.0))
                    || self.within_radius(a, b.translate(0.0, h))
            }
            CollisionModel::MinimumImage => {
                self.torus.distance(a, b) < self.collision_radius
            }
        }
    }

    #[inline]
    fn within_radius(&self, a: Point, b: Point) -> bool {
        a.distance(b) < self.collision_radius
    }
}
