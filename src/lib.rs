// Reusable library API - visible to both CLI and WASM builds
pub mod coords;
pub mod direction;
pub mod errors;
pub mod finder;
pub mod grid;
pub mod heatmap;
pub mod log;
pub mod word_list;

// Terminal output needs a real terminal; not built for wasm32.
#[cfg(not(target_arch = "wasm32"))]
pub mod render;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;
