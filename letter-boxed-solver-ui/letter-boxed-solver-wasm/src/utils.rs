/// Install a panic hook that forwards Rust panics to `console.error` when
/// the `console_error_panic_hook` feature is enabled. Cheap to call more
/// than once; only the first call has any effect.
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
