//! Ghost decision policy: which way a ghost turns when it reaches a cell.

use glam::IVec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use smallvec::SmallVec;
use tracing::trace;

use crate::constants::GHOST_WANDER_CHANCE;
use crate::entity::actor::Motion;
use crate::entity::ghost::Ghost;
use crate::map::{direction::Direction, grid::Grid};

/// The source of randomness behind ghost decisions.
///
/// Kept behind a trait so tests can script both branches of the policy.
pub trait DecisionSource {
    /// Whether this decision should ignore the heuristic and pick any legal direction.
    fn wander(&mut self) -> bool;

    /// A uniformly chosen index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// [`DecisionSource`] backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomSource<R = SmallRng> {
    rng: R,
    wander_chance: f64,
}

impl<R: Rng> RandomSource<R> {
    pub fn new(rng: R, wander_chance: f64) -> Self {
        Self { rng, wander_chance }
    }
}

impl RandomSource<SmallRng> {
    /// A generator seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::new(SmallRng::from_os_rng(), GHOST_WANDER_CHANCE)
    }

    /// A reproducible generator.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed), GHOST_WANDER_CHANCE)
    }
}

impl<R: Rng> DecisionSource for RandomSource<R> {
    fn wander(&mut self) -> bool {
        self.rng.random_bool(self.wander_chance)
    }

    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// The directions an idle actor may take from its cell, paired with the cell each leads to.
///
/// Reversing is only offered when it is the sole way out.
pub fn legal_directions(grid: &Grid, motion: &Motion) -> SmallVec<[(Direction, IVec2); 4]> {
    let all: SmallVec<[(Direction, IVec2); 4]> = Direction::DIRECTIONS
        .iter()
        .filter_map(|&dir| grid.neighbor(motion.cell, dir).map(|cell| (dir, cell)))
        .collect();

    let reverse = motion.direction.map(|d| d.opposite());
    let forward: SmallVec<[(Direction, IVec2); 4]> = all.iter().copied().filter(|(dir, _)| Some(*dir) != reverse).collect();

    if forward.is_empty() {
        all
    } else {
        forward
    }
}

/// Chooses the next direction for an idle ghost hunting (or fleeing) `target`.
///
/// Calm ghosts take the direction whose next cell is closest to the target by Manhattan
/// distance, frightened ghosts the farthest; ties go to the earliest of up, down, left, right.
/// Either way the source may substitute a random legal direction.
/// Returns `None` if the ghost is boxed in.
pub fn choose_direction<D: DecisionSource + ?Sized>(
    ghost: &Ghost,
    grid: &Grid,
    target: IVec2,
    source: &mut D,
) -> Option<Direction> {
    let options = legal_directions(grid, &ghost.motion);

    match options.len() {
        0 => {
            trace!(ghost = ghost.ghost_type.as_ref(), cell = ?ghost.motion.cell, "Ghost has no way out");
            return None;
        }
        1 => return Some(options[0].0),
        _ => {}
    }

    if source.wander() {
        let (direction, _) = options[source.pick(options.len())];
        trace!(ghost = ghost.ghost_type.as_ref(), ?direction, "Ghost wandering");
        return Some(direction);
    }

    let distance = |cell: IVec2| (cell - target).abs().element_sum();
    let mut best = options[0];
    for &option in options.iter().skip(1) {
        let better = if ghost.frightened {
            distance(option.1) > distance(best.1)
        } else {
            distance(option.1) < distance(best.1)
        };
        if better {
            best = option;
        }
    }

    Some(best.0)
}
