//! Dense tile-map implementation of the grid capability contract.

use bevy_math::IVec2;
use bitflags::bitflags;

use crate::grid::TileGrid;

bitflags! {
    /// Per-tile state packed into one byte.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TileFlags: u8 {
        /// Sight rays stop at this tile.
        const BLOCKS_SIGHT = 1 << 0;
        /// Visible in the current refresh.
        const LIT = 1 << 1;
        /// Seen at least once; never cleared.
        const DISCOVERED = 1 << 2;
        /// Queued in the activation list since the last drain.
        const ACTIVATION_QUEUED = 1 << 3;
    }
}

/// Row-major dense grid of tile flags with an activation queue.
///
/// Bundled [`TileGrid`] implementation for hosts that keep their level in a
/// rectangular buffer; anything providing the six capability operations
/// works just as well. Coordinates outside `width × height` are out of
/// bounds: reads answer neutrally and writes are dropped.
#[derive(Debug, Clone)]
pub struct DungeonMap {
    pub width: u32,
    pub height: u32,
    tiles: Vec<TileFlags>,
    activations: Vec<IVec2>,
}

impl DungeonMap {
    /// Create an all-floor map with nothing discovered.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            tiles: vec![TileFlags::empty(); (width * height) as usize],
            activations: Vec::new(),
        }
    }

    /// Build a map from ASCII rows: `#` is a sight-blocking wall, anything
    /// else is open floor. Rows must share one length.
    pub fn from_ascii(rows: &[&str]) -> Self {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |row| row.len() as u32);
        let mut map = Self::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            debug_assert_eq!(row.len() as u32, width, "ragged ascii map row {y}");
            for (x, glyph) in row.bytes().enumerate() {
                if glyph == b'#' {
                    map.tiles[y * width as usize + x] = TileFlags::BLOCKS_SIGHT;
                }
            }
        }
        map
    }

    #[inline]
    fn index(&self, pos: IVec2) -> Option<usize> {
        if pos.x >= 0 && pos.y >= 0 && (pos.x as u32) < self.width && (pos.y as u32) < self.height {
            Some((pos.y as u32 * self.width + pos.x as u32) as usize)
        } else {
            None
        }
    }

    /// Flags at `pos`, or the empty set out of bounds.
    #[inline]
    pub fn flags(&self, pos: IVec2) -> TileFlags {
        self.index(pos).map_or(TileFlags::empty(), |idx| self.tiles[idx])
    }

    pub fn is_lit(&self, pos: IVec2) -> bool {
        self.flags(pos).contains(TileFlags::LIT)
    }

    pub fn is_discovered(&self, pos: IVec2) -> bool {
        self.flags(pos).contains(TileFlags::DISCOVERED)
    }

    pub fn is_blocking(&self, pos: IVec2) -> bool {
        self.flags(pos).contains(TileFlags::BLOCKS_SIGHT)
    }

    /// Place or remove a sight-blocking wall. Not to be called while a
    /// refresh is in flight; the occlusion predicate must stay stable for
    /// the duration of one call.
    pub fn set_blocking(&mut self, pos: IVec2, blocking: bool) {
        if let Some(idx) = self.index(pos) {
            self.tiles[idx].set(TileFlags::BLOCKS_SIGHT, blocking);
        }
    }

    /// Drain the tiles activated since the last call, in activation order.
    pub fn take_activations(&mut self) -> Vec<IVec2> {
        let drained = std::mem::take(&mut self.activations);
        for pos in &drained {
            if let Some(idx) = self.index(*pos) {
                self.tiles[idx].remove(TileFlags::ACTIVATION_QUEUED);
            }
        }
        drained
    }

    /// Count tiles by exploration state: (unexplored, discovered, lit).
    /// A lit tile counts only in the lit bucket.
    pub fn count_by_state(&self) -> (usize, usize, usize) {
        let mut unexplored = 0;
        let mut discovered = 0;
        let mut lit = 0;
        for tile in &self.tiles {
            if tile.contains(TileFlags::LIT) {
                lit += 1;
            } else if tile.contains(TileFlags::DISCOVERED) {
                discovered += 1;
            } else {
                unexplored += 1;
            }
        }
        (unexplored, discovered, lit)
    }

    /// Export exploration state as a flat byte raster (row-major):
    /// 0 = unexplored, 1 = discovered, 2 = currently lit.
    pub fn to_byte_raster(&self) -> Vec<u8> {
        self.tiles
            .iter()
            .map(|tile| {
                if tile.contains(TileFlags::LIT) {
                    2
                } else if tile.contains(TileFlags::DISCOVERED) {
                    1
                } else {
                    0
                }
            })
            .collect()
    }

    /// Iterate over all tiles with their coordinates.
    pub fn iter_tiles(&self) -> impl Iterator<Item = (IVec2, TileFlags)> + '_ {
        let width = self.width;
        self.tiles.iter().enumerate().map(move |(idx, flags)| {
            let x = (idx as u32 % width) as i32;
            let y = (idx as u32 / width) as i32;
            (IVec2::new(x, y), *flags)
        })
    }
}

impl TileGrid for DungeonMap {
    fn is_out_of_bounds(&self, pos: IVec2) -> bool {
        self.index(pos).is_none()
    }

    fn blocks_sight(&self, pos: IVec2) -> bool {
        self.flags(pos).contains(TileFlags::BLOCKS_SIGHT)
    }

    fn mark_discovered(&mut self, pos: IVec2) {
        if let Some(idx) = self.index(pos) {
            self.tiles[idx].insert(TileFlags::DISCOVERED);
        }
    }

    fn set_lit(&mut self, pos: IVec2) {
        if let Some(idx) = self.index(pos) {
            self.tiles[idx].insert(TileFlags::LIT);
        }
    }

    fn clear_lit(&mut self, pos: IVec2) {
        if let Some(idx) = self.index(pos) {
            self.tiles[idx].remove(TileFlags::LIT);
        }
    }

    fn activate(&mut self, pos: IVec2) {
        if let Some(idx) = self.index(pos) {
            if !self.tiles[idx].contains(TileFlags::ACTIVATION_QUEUED) {
                self.tiles[idx].insert(TileFlags::ACTIVATION_QUEUED);
                self.activations.push(pos);
            }
        }
    }
}
