/// Text-length driven color derivation.
pub mod color;
