/// Cover text block planning and drawing.
pub mod plan;
/// Greedy word wrapping.
pub mod wrap;
