//! Design tokens for theming
//!
//! Every token maps to one CSS custom property on the render root:
//! - Colors (`--color-*`) and the brand `--glow`
//! - Effects: blur, shadow
//! - Font family bindings (`--font-*`)
//! - Syntax and code block colors

mod color;
mod effects;
mod fonts;
mod syntax;

pub use color::*;
pub use effects::*;
pub use fonts::*;
pub use syntax::*;
