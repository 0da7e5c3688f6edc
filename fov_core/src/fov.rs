//! Visibility refresh pipeline: light reset, candidate sweep, ray dispatch.

use bevy_math::IVec2;

use crate::grid::TileGrid;
use crate::raycast::{cast_sight_ray, RayOutcome};

/// Recompute visibility for one observer.
///
/// Clears the lit flags in the square around `origin`, then sweeps every
/// tile inside the circular radius and casts a sight ray at each. All
/// results land on `grid`: lighting reflects only this call, discovery
/// accumulates across calls.
///
/// `radius` must be non-negative. Radius 0 reveals nothing at all, not even
/// the origin (the strict circle test rejects it); callers that want
/// self-visibility pass at least 1.
///
/// The call assumes exclusive access to `grid` for its full duration;
/// concurrent refreshes against one grid must be serialized by the host.
pub fn refresh_visibility<G: TileGrid + ?Sized>(grid: &mut G, origin: IVec2, radius: i32) {
    debug_assert!(radius >= 0, "visibility radius must be non-negative");

    let _span = tracing::debug_span!(
        target: "delve::visibility",
        "refresh_visibility",
        origin_x = origin.x,
        origin_y = origin.y,
        radius,
    )
    .entered();

    clear_light(grid, origin, radius);
    let stats = sweep(grid, origin, radius);

    tracing::debug!(
        target: "delve::visibility",
        rays_cast = stats.rays_cast,
        rays_reached = stats.rays_reached,
        rays_occluded = stats.rays_occluded,
        rays_out_of_bounds = stats.rays_out_of_bounds,
        "visibility.refresh complete"
    );
}

/// Darken every tile a previous refresh could have lit.
///
/// The swept square runs one tile past the lightable area on every side,
/// which also covers tiles lit by an earlier refresh one step away or one
/// radius larger. `clear_lit` runs unguarded; out-of-bounds tolerance is
/// part of the grid contract.
fn clear_light<G: TileGrid + ?Sized>(grid: &mut G, origin: IVec2, radius: i32) {
    for x in (origin.x - radius - 1)..(origin.x + radius + 1) {
        for y in (origin.y - radius - 1)..(origin.y + radius + 1) {
            grid.clear_lit(IVec2::new(x, y));
        }
    }
}

#[derive(Debug, Default)]
struct SweepStats {
    rays_cast: u32,
    rays_reached: u32,
    rays_occluded: u32,
    rays_out_of_bounds: u32,
}

/// Enumerate candidate targets inside the circular radius and cast one
/// sight ray at each.
///
/// The offset square is inclusive on both ends while the circle test is a
/// strict inequality, so tiles exactly on the radius boundary are skipped
/// and radius 0 casts no rays.
fn sweep<G: TileGrid + ?Sized>(grid: &mut G, origin: IVec2, radius: i32) -> SweepStats {
    let mut stats = SweepStats::default();
    for i in -radius..=radius {
        for j in -radius..=radius {
            if i * i + j * j < radius * radius {
                let target = IVec2::new(origin.x + i, origin.y + j);
                stats.rays_cast += 1;
                match cast_sight_ray(grid, origin, target) {
                    RayOutcome::Reached => stats.rays_reached += 1,
                    RayOutcome::Occluded => stats.rays_occluded += 1,
                    RayOutcome::OutOfBounds => stats.rays_out_of_bounds += 1,
                }
            }
        }
    }
    stats
}
