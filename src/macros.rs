/// Emits a `tracing` event when the `tracing` feature is enabled, and
/// compiles to nothing otherwise.
macro_rules! rail_log {
    ($level:ident, $($arg:tt)+) => {{
        #[cfg(feature = "tracing")]
        ::tracing::$level!($($arg)+);
    }};
}
