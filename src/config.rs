//! Host-side configuration conventions. Nothing here is process-global: the core
//! (`CoverageTracker`) never reads the environment itself, it only accepts a radius
//! via its constructor. These are pure helpers for hosts that want the env-var
//! convention the wider system already uses.

const RADIUS_ENV_VAR: &str = "GAMECOV_RADIUS";

/// Reads `GAMECOV_RADIUS` from the environment, falling back to `default` if unset or
/// unparseable. Values above 64 are clamped the same way `CoverageTracker::new` would
/// clamp them, so a host can pass the result straight through.
pub fn radius_from_env(default: u8) -> u8 {
    std::env::var(RADIUS_ENV_VAR)
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(default)
        .min(64)
}
