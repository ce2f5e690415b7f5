//! Drawing surfaces, the layout renderer and presentation backends.

pub mod backend;
pub mod cpu;
pub mod display_list;
pub mod scene;
pub mod style;
pub mod surface;
pub mod svg;
mod text;
