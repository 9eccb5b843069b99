/// Installs the process-wide `env_logger`. `RUST_LOG` wins over the `info`
/// default. Call once, first thing in `main`.
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .format_module_path(false)
        .init();
}
