pub mod renderer;
pub mod renderer_cairo;
pub mod renderer_recording;
pub mod window_x11;
