//! Steering behaviors and their composition.
//!
//! Every behavior follows Reynolds' "desired minus current" pattern: build a
//! desired direction from the qualifying neighbors, rescale it to
//! `max_speed`, subtract the boid's own velocity, and clamp the result to
//! `max_force`.  A behavior that finds nothing to react to returns
//! [`Vec2::ZERO`].
//!
//! A neighbor qualifies when its distance is strictly between `0` and
//! `max_distance`.  The zero bound excludes the boid itself (spatial queries
//! return the querying boid too) and any boid stacked exactly on top of it,
//! which has no direction to react to.

use boids_core::{CoreResult, Vec2};

use crate::{Boid, Params};

impl Boid {
    /// Reset acceleration and accumulate `weight × behavior` for each enabled
    /// behavior.
    ///
    /// # Errors
    /// Propagates vector-math failures from the behaviors.  None occur for
    /// finite inputs; a non-finite position would surface here instead of
    /// turning into NaN velocity.
    pub fn flock(&mut self, neighbors: &[&Boid], params: &Params) -> CoreResult<()> {
        self.acceleration = self.steering(neighbors, params)?;
        Ok(())
    }

    /// The acceleration [`flock`](Self::flock) would store, computed without
    /// mutating `self`.  Lets the tick loop run this phase over a shared
    /// borrow of every boid.
    pub fn steering(&self, neighbors: &[&Boid], params: &Params) -> CoreResult<Vec2> {
        let mut acceleration = Vec2::ZERO;

        if Params::applies(params.alignment_weight) {
            acceleration += self.alignment(neighbors, params)? * params.alignment_weight;
        }
        if Params::applies(params.cohesion_weight) {
            acceleration += self.cohesion(neighbors, params)? * params.cohesion_weight;
        }
        if Params::applies(params.separation_weight) {
            acceleration += self.separation(neighbors, params)? * params.separation_weight;
        }
        if Params::applies(params.edge_avoidance_weight) {
            acceleration += self.avoid_edges(params)? * params.edge_avoidance_weight;
        }

        Ok(acceleration)
    }

    /// Steer toward the average heading of nearby boids.
    pub fn alignment(&self, neighbors: &[&Boid], params: &Params) -> CoreResult<Vec2> {
        let mut sum = Vec2::ZERO;
        let mut count = 0_u32;
        for other in self.qualifying(neighbors, params) {
            sum += other.velocity;
            count += 1;
        }
        if count == 0 {
            return Ok(Vec2::ZERO);
        }
        let average = sum.divide(count as f32)?;
        Ok(self.steer_towards(average, params))
    }

    /// Steer toward the average position of nearby boids.
    pub fn cohesion(&self, neighbors: &[&Boid], params: &Params) -> CoreResult<Vec2> {
        let mut sum = Vec2::ZERO;
        let mut count = 0_u32;
        for other in self.qualifying(neighbors, params) {
            sum += other.position;
            count += 1;
        }
        if count == 0 {
            return Ok(Vec2::ZERO);
        }
        let center = sum.divide(count as f32)?;
        Ok(self.steer_towards(center - self.position, params))
    }

    /// Steer away from nearby boids.  Each neighbor contributes the unit
    /// vector pointing away from it divided by its distance, so the repulsion
    /// grows as `1 / d`.
    pub fn separation(&self, neighbors: &[&Boid], params: &Params) -> CoreResult<Vec2> {
        let mut sum = Vec2::ZERO;
        let mut count = 0_u32;
        for other in self.qualifying(neighbors, params) {
            let away = self.position - other.position;
            let distance = away.magnitude();
            sum += away.normalize()?.divide(distance)?;
            count += 1;
        }
        if count == 0 {
            return Ok(Vec2::ZERO);
        }
        let average = sum.divide(count as f32)?;
        Ok(self.steer_towards(average, params))
    }

    /// Steer away from world edges closer than `max_edge_distance`.  Each such
    /// edge pushes along its inward normal with strength
    /// `max_edge_distance - distance`.
    pub fn avoid_edges(&self, params: &Params) -> CoreResult<Vec2> {
        let reach = params.max_edge_distance;
        let width = self.world_width as f32;
        let height = self.world_height as f32;
        let Vec2 { x, y } = self.position;

        let edges = [
            (x, Vec2::new(1.0, 0.0)),           // left
            (y, Vec2::new(0.0, 1.0)),           // top
            (width - x, Vec2::new(-1.0, 0.0)),  // right
            (height - y, Vec2::new(0.0, -1.0)), // bottom
        ];

        let mut sum = Vec2::ZERO;
        let mut count = 0_u32;
        for (distance, inward) in edges {
            if distance <= reach {
                sum += inward * (reach - distance);
                count += 1;
            }
        }
        if count == 0 {
            return Ok(Vec2::ZERO);
        }
        let average = sum.divide(count as f32)?;
        Ok(self.steer_towards(average, params))
    }

    fn qualifying<'a>(
        &'a self,
        neighbors: &'a [&'a Boid],
        params:    &'a Params,
    ) -> impl Iterator<Item = &'a Boid> + 'a {
        neighbors.iter().copied().filter(move |other| {
            let d = self.position.distance(other.position);
            d > 0.0 && d < params.max_distance
        })
    }

    /// Desired velocity at `max_speed` along `direction`, minus current
    /// velocity, clamped.  A zero `direction` has no heading and is not
    /// rescaled.
    fn steer_towards(&self, direction: Vec2, params: &Params) -> Vec2 {
        let desired = direction.with_magnitude(params.max_speed);
        Self::limit_force(desired - self.velocity, params)
    }
}
