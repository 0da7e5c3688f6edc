//! Line-of-sight ray walk between an observer and a single target tile.
//!
//! A strict-definition supercover walk rather than a thin Bresenham line:
//! each step is chosen by the perpendicular deviation of the candidate tile
//! from the ideal observer→target line, and the walk may step diagonally
//! when neither single-axis step stays close enough to the line.

use bevy_math::IVec2;

use crate::grid::TileGrid;

/// Terminal state of a single sight ray.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RayOutcome {
    /// The ray reached its target; the target was lit and discovered.
    Reached,
    /// An occluding tile stopped the ray; that tile was discovered.
    Occluded,
    /// The walk left the map before reaching the target; nothing was touched.
    OutOfBounds,
}

/// Walk a sight ray from `origin` to `target`, mutating `grid` along the way.
///
/// Occluding tiles encountered mid-ray are discovered but not lit and stop
/// the ray; everything past them is left untouched. A reached target is lit
/// and discovered, and activated when in bounds. A zero-length ray
/// (`target == origin`) takes the reached path immediately: the observer
/// always sees its own tile.
pub fn cast_sight_ray<G: TileGrid + ?Sized>(
    grid: &mut G,
    origin: IVec2,
    target: IVec2,
) -> RayOutcome {
    let run = target.x - origin.x;
    let rise = target.y - origin.y;

    // Step signs pick the quadrant the walk climbs through. A coincident
    // coordinate defaults its sign to -1; the deviation test never selects
    // that axis in the coincident case, so the default stays inert.
    let sx = if origin.x < target.x { 1 } else { -1 };
    let sy = if origin.y < target.y { 1 } else { -1 };

    let dist = f64::from(run * run + rise * rise).sqrt();

    let mut cur = origin;
    while cur != target {
        if grid.is_out_of_bounds(cur) {
            return RayOutcome::OutOfBounds;
        }
        if grid.blocks_sight(cur) {
            grid.mark_discovered(cur);
            return RayOutcome::Occluded;
        }

        // Perpendicular point-to-line deviation of each candidate step,
        // threshold half a tile. The test order (x-only, y-only, diagonal)
        // determines which of the geometrically valid supercover paths the
        // ray follows; do not reorder.
        let x_step_deviation =
            f64::from(rise * (cur.x - origin.x + sx) - run * (cur.y - origin.y)).abs() / dist;
        let y_step_deviation =
            f64::from(rise * (cur.x - origin.x) - run * (cur.y - origin.y + sy)).abs() / dist;

        if x_step_deviation < 0.5 {
            cur.x += sx;
        } else if y_step_deviation < 0.5 {
            cur.y += sy;
        } else {
            cur.x += sx;
            cur.y += sy;
        }
    }

    grid.set_lit(target);
    grid.mark_discovered(target);
    if !grid.is_out_of_bounds(target) {
        grid.activate(target);
    }
    RayOutcome::Reached
}
