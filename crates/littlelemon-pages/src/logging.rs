//! Logging that works on both WASM and native targets.
//!
//! The plain functions always log — [`console_info`] backs the reservation
//! submission record, which is part of the observable contract, not a
//! diagnostic. The `*_log!` macros wrap them with a `debug_assertions` gate
//! for development-only chatter.
//!
//! On `wasm32` output goes to the browser console; natively to stderr.

/// Logs an informational message unconditionally.
pub fn console_info(message: &str) {
	#[cfg(target_arch = "wasm32")]
	web_sys::console::info_1(&message.into());
	#[cfg(not(target_arch = "wasm32"))]
	eprintln!("[INFO] {message}");
}

/// Logs a warning unconditionally.
pub fn console_warn(message: &str) {
	#[cfg(target_arch = "wasm32")]
	web_sys::console::warn_1(&message.into());
	#[cfg(not(target_arch = "wasm32"))]
	eprintln!("[WARN] {message}");
}

/// Logs an error unconditionally.
pub fn console_error(message: &str) {
	#[cfg(target_arch = "wasm32")]
	web_sys::console::error_1(&message.into());
	#[cfg(not(target_arch = "wasm32"))]
	eprintln!("[ERROR] {message}");
}

/// Logs an info message in debug builds; compiles to nothing in release.
#[macro_export]
macro_rules! info_log {
	($($arg:tt)*) => {{
		if cfg!(debug_assertions) {
			$crate::logging::console_info(&format!($($arg)*));
		}
	}};
}

/// Logs a warning in debug builds; compiles to nothing in release.
#[macro_export]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		if cfg!(debug_assertions) {
			$crate::logging::console_warn(&format!($($arg)*));
		}
	}};
}

/// Logs an error in debug builds; compiles to nothing in release.
#[macro_export]
macro_rules! error_log {
	($($arg:tt)*) => {{
		if cfg!(debug_assertions) {
			$crate::logging::console_error(&format!($($arg)*));
		}
	}};
}
