#![allow(dead_code)]

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Once;

use bevy_math::IVec2;
use fov_core::TileGrid;

static INIT: Once = Once::new();

pub fn ensure_test_config() {
    INIT.call_once(|| {
        let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join("test_fov_config.json");

        debug_assert!(
            config_path.exists(),
            "missing test fov config at {}",
            config_path.display()
        );

        std::env::set_var("FOV_CONFIG_PATH", &config_path);
    });
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Sparse grid that records every mutation unguarded, including ones at
/// out-of-bounds coordinates, so tests can observe exactly what a refresh
/// writes where a bounds-checked map would silently drop it.
#[derive(Debug, Default)]
pub struct ScriptedGrid {
    pub width: i32,
    pub height: i32,
    pub walls: HashSet<IVec2>,
    pub lit: HashSet<IVec2>,
    pub discovered: HashSet<IVec2>,
    pub activated: Vec<IVec2>,
}

impl ScriptedGrid {
    pub fn open(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }
}

impl TileGrid for ScriptedGrid {
    fn is_out_of_bounds(&self, pos: IVec2) -> bool {
        pos.x < 0 || pos.y < 0 || pos.x >= self.width || pos.y >= self.height
    }

    fn blocks_sight(&self, pos: IVec2) -> bool {
        self.walls.contains(&pos)
    }

    fn mark_discovered(&mut self, pos: IVec2) {
        self.discovered.insert(pos);
    }

    fn set_lit(&mut self, pos: IVec2) {
        self.lit.insert(pos);
    }

    fn clear_lit(&mut self, pos: IVec2) {
        self.lit.remove(&pos);
    }

    fn activate(&mut self, pos: IVec2) {
        self.activated.push(pos);
    }
}
