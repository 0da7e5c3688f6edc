mod common;

use fov_core::load_fov_config_from_env;

#[test]
fn env_override_points_at_the_fixture() {
    common::ensure_test_config();
    let config = load_fov_config_from_env();

    assert_eq!(config.sight_radius_for("Explorer"), 12);
    assert_eq!(config.sight_radius_for("Bat"), 2);
    // Kinds missing from the fixture use its default.
    assert_eq!(config.sight_radius_for("Warden"), 5);
}

#[test]
fn builtin_config_is_well_formed() -> anyhow::Result<()> {
    let parsed: serde_json::Value = serde_json::from_str(fov_core::config::BUILTIN_FOV_CONFIG)?;

    assert!(parsed.get("default_radius").is_some());
    assert!(parsed.get("sight_ranges").is_some());
    Ok(())
}
