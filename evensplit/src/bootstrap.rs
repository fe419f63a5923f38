/// Installs the global fmt subscriber for the process.
pub fn init_logging() {
    tracing_subscriber::fmt::init();
}
