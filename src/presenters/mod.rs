pub mod file;
#[cfg(feature = "gui")]
pub mod pixels;
