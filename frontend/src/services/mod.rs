pub mod api;
pub mod category_cache;
pub mod config;
pub mod logging;
pub mod session;

#[cfg(test)]
pub mod fake_api;
