//! Logging setup for tests.
//!
//! Hooks `env_logger` up so that RUST_LOG works under `cargo test`.

/// Set up the test logger.  Safe to call from every test.
pub fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}
