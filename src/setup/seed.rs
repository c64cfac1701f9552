use crate::core::env::EnvStore;

/// Environment variable carrying the render seed.
pub const SEED_VAR: &str = "REPORT_SEED";

/// Deterministic seed for a report render, if one is configured.
///
/// Reads [`SEED_VAR`] from `env`. An unparsable value is logged as a warning
/// and treated as unset. Which generators get seeded is up to the renderer.
pub fn render_seed<E: EnvStore>(env: &E) -> Option<u64> {
    let raw = env.get(SEED_VAR)?;
    match raw.trim().parse() {
        Ok(seed) => Some(seed),
        Err(_) => {
            log::warn!("Ignoring invalid {SEED_VAR} value: {raw:?}");
            None
        }
    }
}
