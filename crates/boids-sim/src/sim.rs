//! The `Sim` struct and its tick loop.

use boids_agent::{Boid, Params};
use boids_core::{AgentId, CoreResult, Tick, Vec2};
use boids_spatial::{NeighborIndex, QuadTree};
use tracing::{debug, info, trace, warn};

use crate::{NoopObserver, SimConfig, SimError, SimObserver, SimResult, TickStats};

/// The simulation context: owns the population and the neighborhood index.
///
/// Each tick runs three phases over the whole population:
///
/// 1. **Rebuild**: clear the index and insert every boid's current position.
/// 2. **Compute** (read-only, parallel with the `parallel` feature): query
///    each boid's neighbors within `max_distance` and compute its steering.
///    Every boid sees the same pre-tick snapshot.
/// 3. **Commit** (parallel with the `parallel` feature): store the steering
///    as acceleration, then `update` and `check_bounds` every boid.
///
/// Nothing written in phase 3 is visible to any query in phase 2.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<I: NeighborIndex = QuadTree> {
    /// Fixed at build: the index and every boid were sized from it.
    pub(crate) config:       SimConfig,
    pub(crate) params:       Params,
    pub(crate) current_tick: Tick,

    /// Never resized or reordered after build; slot `i` is `AgentId(i)`.
    pub(crate) boids: Vec<Boid>,
    pub(crate) index: I,

    // Per-tick scratch, reused across ticks.
    pub(crate) snapshot: Vec<Vec2>,
    pub(crate) forces:   Vec<Vec2>,
}

impl<I: NeighborIndex> Sim<I> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick to `config.end_tick()` with the stored
    /// [`Params`].
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let end = self.config.end_tick();
        info!(from = self.current_tick.0, to = end.0, "run started");
        while self.current_tick < end {
            let params = self.params;
            self.step_with(&params, observer)?;
        }
        observer.on_sim_end(self.current_tick);
        info!(final_tick = self.current_tick.0, "run finished");
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            let params = self.params;
            self.step_with(&params, observer)?;
        }
        Ok(())
    }

    /// Advance the whole population by one tick under `params`.
    ///
    /// The host entry point: `params` may differ on every call (e.g. driven
    /// by UI sliders).  The stored parameters are not touched.
    pub fn step(&mut self, params: &Params) -> SimResult<TickStats> {
        self.step_with(params, &mut NoopObserver)
    }

    /// [`step`](Self::step) with observer hooks.
    pub fn step_with<O: SimObserver>(
        &mut self,
        params:   &Params,
        observer: &mut O,
    ) -> SimResult<TickStats> {
        params.validate()?;

        let now = self.current_tick;
        observer.on_tick_start(now);
        let stats = self.process_tick(now, params, observer)?;
        observer.on_tick_end(&stats);
        if now.is_multiple_of(self.config.output_interval_ticks) {
            observer.on_snapshot(now, &self.boids);
        }
        self.current_tick = now.next();

        trace!(
            tick = now.0,
            neighbor_pairs = stats.neighbor_pairs,
            mean_speed = stats.mean_speed,
            "tick complete",
        );
        Ok(stats)
    }

    /// The tick the next `step` will execute.
    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.current_tick
    }

    #[inline]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    #[inline]
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Replace the parameters used by `run`/`run_ticks` from the next tick.
    pub fn set_params(&mut self, params: Params) -> SimResult<()> {
        params.validate()?;
        self.params = params;
        Ok(())
    }

    #[inline]
    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    /// The index as left by the last rebuild (empty before the first tick).
    #[inline]
    pub fn index(&self) -> &I {
        &self.index
    }

    // ── Flat buffers ──────────────────────────────────────────────────────
    //
    // Paired-coordinate layout: boid `i` occupies `[2i]` (x) and `[2i + 1]` (y).

    /// Copy every position into `out`, which must hold `2 × population` floats.
    pub fn write_positions(&self, out: &mut [f32]) -> SimResult<()> {
        write_pairs(&self.boids, out, "positions buffer", |b| b.position)
    }

    /// Copy every velocity into `out`, which must hold `2 × population` floats.
    pub fn write_velocities(&self, out: &mut [f32]) -> SimResult<()> {
        write_pairs(&self.boids, out, "velocities buffer", |b| b.velocity)
    }

    pub fn positions(&self) -> Vec<f32> {
        self.boids.iter().flat_map(|b| [b.position.x, b.position.y]).collect()
    }

    pub fn velocities(&self) -> Vec<f32> {
        self.boids.iter().flat_map(|b| [b.velocity.x, b.velocity.y]).collect()
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: SimObserver>(
        &mut self,
        now:      Tick,
        params:   &Params,
        observer: &mut O,
    ) -> SimResult<TickStats> {
        // ── Phase 1: rebuild ──────────────────────────────────────────────
        self.snapshot.clear();
        self.snapshot.extend(self.boids.iter().map(|b| b.position));
        let rejected_inserts = self.index.rebuild(&self.snapshot);
        if rejected_inserts > 0 {
            warn!(tick = now.0, rejected_inserts, "positions outside the index boundary");
        }

        // ── Phase 2: compute (read-only) ──────────────────────────────────
        let neighbor_pairs = self.compute_forces(params)?;

        for (boid, &force) in self.boids.iter_mut().zip(&self.forces) {
            boid.acceleration = force;
        }
        observer.on_forces(now, &self.boids);

        // ── Phase 3: commit ───────────────────────────────────────────────
        let mean_speed = self.commit(params);

        debug!(tick = now.0, neighbor_pairs, rejected_inserts, "tick processed");
        Ok(TickStats {
            tick: now,
            neighbor_pairs,
            rejected_inserts,
            mean_speed,
        })
    }

    /// Fill `self.forces` with every boid's steering.  Returns the total
    /// neighbor count.
    fn compute_forces(&mut self, params: &Params) -> SimResult<usize> {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let boids  = self.boids.as_slice();
        let index  = &self.index;
        let forces = &mut self.forces;
        forces.clear();

        #[cfg(not(feature = "parallel"))]
        {
            let mut ids = Vec::new();
            let mut refs = Vec::new();
            let mut pairs = 0;
            for i in 0..boids.len() {
                let (force, hits) = steer_one(boids, index, i, params, &mut ids, &mut refs)?;
                forces.push(force);
                pairs += hits;
            }
            Ok(pairs)
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            let results: CoreResult<Vec<(Vec2, usize)>> = (0..boids.len())
                .into_par_iter()
                .map_init(
                    || (Vec::<AgentId>::new(), Vec::<&Boid>::new()),
                    |(ids, refs), i| steer_one(boids, index, i, params, ids, refs),
                )
                .collect();

            let mut pairs = 0;
            for (force, hits) in results.map_err(SimError::from)? {
                forces.push(force);
                pairs += hits;
            }
            Ok(pairs)
        }
    }

    /// Integrate and wrap every boid.  Returns the mean resulting speed.
    fn commit(&mut self, params: &Params) -> f32 {
        #[cfg(not(feature = "parallel"))]
        let total: f32 = self
            .boids
            .iter_mut()
            .map(|boid| {
                boid.update(params);
                boid.check_bounds();
                boid.velocity.magnitude()
            })
            .sum();

        #[cfg(feature = "parallel")]
        let total: f32 = {
            use rayon::prelude::*;
            // Summed sequentially so float rounding matches the serial build.
            self.boids
                .par_iter_mut()
                .map(|boid| {
                    boid.update(params);
                    boid.check_bounds();
                    boid.velocity.magnitude()
                })
                .collect::<Vec<f32>>()
                .into_iter()
                .sum()
        };

        if self.boids.is_empty() {
            0.0
        } else {
            total / self.boids.len() as f32
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Steering for boid `i` plus its neighbor count.  `ids` and `refs` are
/// caller-owned scratch buffers.
fn steer_one<'a, I: NeighborIndex>(
    boids:  &'a [Boid],
    index:  &I,
    i:      usize,
    params: &Params,
    ids:    &mut Vec<AgentId>,
    refs:   &mut Vec<&'a Boid>,
) -> CoreResult<(Vec2, usize)> {
    let boid = &boids[i];

    ids.clear();
    index.neighbors_within(boid.position, params.max_distance, ids);

    refs.clear();
    refs.extend(ids.iter().filter_map(|id| boids.get(id.index())));
    let hits = ids.iter().filter(|id| id.index() != i).count();

    Ok((boid.steering(refs.as_slice(), params)?, hits))
}

fn write_pairs(
    boids: &[Boid],
    out:   &mut [f32],
    what:  &'static str,
    field: impl Fn(&Boid) -> Vec2,
) -> SimResult<()> {
    let expected = boids.len() * 2;
    if out.len() != expected {
        return Err(SimError::AgentCountMismatch {
            expected,
            got: out.len(),
            what,
        });
    }
    for (slot, boid) in out.chunks_exact_mut(2).zip(boids) {
        let v = field(boid);
        slot[0] = v.x;
        slot[1] = v.y;
    }
    Ok(())
}
