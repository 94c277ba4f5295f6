// Thin wrappers around `log` so the whole crate logs through one place.
// They expand through the re-export so callers don't need their own `log` dependency.

#[macro_export]
macro_rules! hikari_warn {
    ($($arg:tt)+) => {
        $crate::log::warn!($($arg)+)
    };
}

#[macro_export]
macro_rules! hikari_info {
    ($($arg:tt)+) => {
        $crate::log::info!($($arg)+)
    };
}

#[macro_export]
macro_rules! hikari_debug {
    ($($arg:tt)+) => {
        $crate::log::debug!($($arg)+)
    };
}
