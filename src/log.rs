#[cfg(not(target_arch = "wasm32"))]
use log::LevelFilter;

/// Environment variable that turns on debug logging in the CLI.
pub const DEBUG_ENV_VAR: &str = "WORD_FINDER_DEBUG";

/// Initialize logging for the word finder.
///
/// # Behavior
/// - **Native (CLI):** `Debug` if `debug_enabled` or [`DEBUG_ENV_VAR`] is switched on,
///   otherwise `Info`; `RUST_LOG` overrides both.
/// - **WASM:** uses `Debug` level if `debug_enabled` is true, otherwise `Info` level.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logger(debug_enabled: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let level = if debug_enabled {
            log::Level::Debug
        } else {
            log::Level::Info
        };

        match console_log::init_with_level(level) {
            Ok(_) => {
                log::info!("WASM logger initialized at {level:?} level");
            }
            Err(e) => {
                let msg = format!("Failed to initialize console_log: {}. Logging will be unavailable.", e);
                web_sys::console::error_1(&msg.into());
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let level = native_level(debug_enabled, std::env::var(DEBUG_ENV_VAR).ok().as_deref());

        let mut builder = env_logger::Builder::new();
        builder
            .filter(None, level)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false);

        // RUST_LOG wins over both the flag and WORD_FINDER_DEBUG
        if let Ok(filters) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filters);
        }

        if builder.try_init().is_ok() {
            log::debug!("Native logger initialized at {level:?} level");
        }
    }
}

/// Level for the CLI: `Debug` when asked for by flag or by `WORD_FINDER_DEBUG`.
///
/// An empty value, `0`, or `false` leaves the variable switched off.
#[cfg(not(target_arch = "wasm32"))]
fn native_level(debug_enabled: bool, env_flag: Option<&str>) -> LevelFilter {
    let env_enabled = env_flag
        .map(str::trim)
        .is_some_and(|v| !v.is_empty() && v != "0" && !v.eq_ignore_ascii_case("false"));
    if debug_enabled || env_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_native_level_defaults_to_info() {
        assert_eq!(native_level(false, None), LevelFilter::Info);
    }

    #[test]
    fn test_native_level_flag_or_env_enables_debug() {
        assert_eq!(native_level(true, None), LevelFilter::Debug);
        assert_eq!(native_level(false, Some("1")), LevelFilter::Debug);
        assert_eq!(native_level(false, Some("yes")), LevelFilter::Debug);
    }

    #[test]
    fn test_native_level_env_switched_off_values() {
        for value in ["", "0", "false", "FALSE", " 0 "] {
            assert_eq!(native_level(false, Some(value)), LevelFilter::Info, "value {value:?}");
        }
        assert_eq!(native_level(true, Some("0")), LevelFilter::Debug);
    }
}
