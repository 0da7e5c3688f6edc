use bevy_math::IVec2;

/// Capability contract between the visibility core and an externally owned
/// tile grid.
///
/// Every operation must run in O(1) amortized time; the sweep's linear-time
/// bound depends on it. `blocks_sight` must stay stable for the duration of
/// a single [`refresh_visibility`](crate::refresh_visibility) call, and
/// discovery is permanent: once a tile is discovered an implementation must
/// never reset it.
pub trait TileGrid {
    /// Whether `pos` lies outside the playable map.
    fn is_out_of_bounds(&self, pos: IVec2) -> bool;

    /// Whether the tile at `pos` stops sight rays passing through it.
    fn blocks_sight(&self, pos: IVec2) -> bool;

    /// Permanently mark `pos` as having been seen at least once.
    /// Out-of-bounds coordinates must be tolerated as a no-op.
    fn mark_discovered(&mut self, pos: IVec2);

    /// Mark `pos` as visible in the current refresh.
    /// Out-of-bounds coordinates must be tolerated as a no-op.
    fn set_lit(&mut self, pos: IVec2);

    /// Clear the transient visibility flag at `pos`.
    /// Out-of-bounds coordinates must be tolerated as a no-op.
    fn clear_lit(&mut self, pos: IVec2);

    /// Notification that `pos` became fully visible this refresh (trigger
    /// traps, wake AI). Must be idempotent within one refresh.
    fn activate(&mut self, pos: IVec2);
}
