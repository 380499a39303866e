use tracing::Level;

/// Install a stdout subscriber for native builds.
///
/// Uses `try_init` so a subscriber installed by the Dioxus launcher (or by a
/// previous call) is left in place.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_tracing(level: Level) {
    let installed = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .is_ok();
    if installed {
        tracing::debug!(%level, "tracing initialized");
    }
}

/// Browser builds log to the console through the Dioxus logger.
#[cfg(target_arch = "wasm32")]
pub fn init_tracing(level: Level) {
    let _ = dioxus::logger::init(level);
}
