//! Logging abstraction
//!
//! Provides unified logging macros that work across different targets:
//! - Embedded (feather52): uses defmt
//! - Host tests: uses println!
//! - Host non-test: no-op

/// Log informational message
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        #[cfg(feature = "feather52")]
        ::defmt::info!($($arg)*);

        #[cfg(all(not(feature = "feather52"), test))]
        println!("[INFO] {}", format!($($arg)*));
    }};
}

/// Log warning message
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "feather52")]
        ::defmt::warn!($($arg)*);

        #[cfg(all(not(feature = "feather52"), test))]
        println!("[WARN] {}", format!($($arg)*));
    }};
}

/// Log error message
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        #[cfg(feature = "feather52")]
        ::defmt::error!($($arg)*);

        #[cfg(all(not(feature = "feather52"), test))]
        eprintln!("[ERROR] {}", format!($($arg)*));
    }};
}

/// Log debug message
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "feather52")]
        ::defmt::debug!($($arg)*);

        #[cfg(all(not(feature = "feather52"), test))]
        println!("[DEBUG] {}", format!($($arg)*));
    }};
}

/// Log trace message
#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "feather52")]
        ::defmt::trace!($($arg)*);

        #[cfg(all(not(feature = "feather52"), test))]
        println!("[TRACE] {}", format!($($arg)*));
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_log_macros_accept_format_args() {
        log_info!("bring-up step {} of {}", 1, 4);
        log_warn!("chip select drive failed");
        log_error!("transfer error: {:?}", 0u8);
        log_debug!("lfclk running");
        log_trace!("edge on pin {}", 31);
    }
}
