//! Backend implementations for TinyLingo
//!
//! - `winit`: Windowed mode (X11 or Wayland desktop, touch laptops, tablets)

pub mod winit;
