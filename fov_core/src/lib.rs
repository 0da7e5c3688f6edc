//! Field-of-view and exploration tracking for the Delve grid-crawler
//! prototype.
//!
//! Computes which tiles are visible from an observer within a radius and
//! records which tiles have ever been seen. All results land on the host's
//! grid through the [`TileGrid`] capability trait when
//! [`refresh_visibility`] is invoked; [`DungeonMap`] is a bundled dense
//! implementation for hosts without their own.

pub mod config;
mod fov;
mod grid;
mod raycast;
mod visibility;

pub use config::{
    load_fov_config_from_env, FovConfig, FovConfigError, FovConfigHandle, SightRangeConfig,
};
pub use fov::refresh_visibility;
pub use grid::TileGrid;
pub use raycast::{cast_sight_ray, RayOutcome};
pub use visibility::{DungeonMap, TileFlags};
