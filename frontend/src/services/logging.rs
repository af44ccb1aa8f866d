use log::Level;

/// Component-tagged logging on top of the `log` facade.
///
/// The browser sink is installed once in `main`; without it (native tests)
/// every call is a no-op.
pub struct Logger;

impl Logger {
    pub fn init(level: Level) {
        wasm_logger::init(wasm_logger::Config::new(level));
    }

    pub fn debug_with_component(component: &str, message: &str) {
        Self::log(Level::Debug, component, message);
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::log(Level::Info, component, message);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::log(Level::Warn, component, message);
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::log(Level::Error, component, message);
    }

    fn log(level: Level, component: &str, message: &str) {
        log::log!(level, "[{}] {}", component, message);
    }
}
