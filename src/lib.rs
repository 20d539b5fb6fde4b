// Library surface for headless/integration tests and reuse.
// The terminal front end (App, ui) stays in the binary.
pub mod app_dirs;
pub mod config;
pub mod highlight;
pub mod runtime;
pub mod session;
pub mod time_series;
pub mod timer;
pub mod util;
pub mod vocabulary;
pub mod word_generator;
