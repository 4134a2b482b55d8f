pub fn app_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
