// Settings: store (data & persistence). Re-exported so callers use app::settings::*.

pub mod store;

pub use store::{init_settings, AppSettings, APP_SETTINGS};

/// Read settings through a closure without holding the guard at the call site.
pub fn with_settings<F, R>(f: F) -> R
where
    F: FnOnce(&AppSettings) -> R,
{
    let st = APP_SETTINGS
        .read()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    f(&st)
}

/// Write access for the same global; the guard is dropped when `f` returns.
pub fn with_settings_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut AppSettings) -> R,
{
    let mut st = APP_SETTINGS
        .write()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    f(&mut st)
}
