//! Input handling module
//!
//! Maps keys to viewer actions and winit window events to gesture input.

mod input_mapper;
mod winit_translator;

pub use input_mapper::{InputMapper, InputAction};
pub use winit_translator::WinitTranslator;
