pub mod autoscroll;
pub mod content;
pub mod logging;
pub mod navigation;
pub mod parallax;
pub mod pointer;
pub mod scroll;
pub mod theme;
pub mod visibility;

#[cfg(not(target_arch = "wasm32"))]
pub mod config;
#[cfg(not(target_arch = "wasm32"))]
pub mod server;

#[cfg(target_arch = "wasm32")]
pub mod frontend;
