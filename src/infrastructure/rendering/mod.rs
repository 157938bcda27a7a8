pub mod price_animator;
pub mod sparkline_renderer;

pub use price_animator::*;
pub use sparkline_renderer::*;
