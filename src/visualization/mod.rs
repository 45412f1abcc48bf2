pub mod gravsim_vis2d;
pub mod headless;
mod systems;
