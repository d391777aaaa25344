/// Shared helpers for integration tests
#[allow(dead_code)]
pub mod mocks;

#[allow(dead_code)]
pub mod log_recorder;

/// Installs a test logger so suppressed load failures show up with `RUST_LOG=info`
#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
