/// Page geometry, typography ratios and colors.
pub mod config;
/// Validated cover request.
pub mod request;
