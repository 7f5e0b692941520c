use std::io::{Cursor, Write as _};
use std::path::PathBuf;

use crate::foundation::error::{TapitaError, TapitaResult};
use crate::render::pipeline::RenderedCover;

/// Where a rendered cover is written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputTarget {
    /// Standard output (`-` on the command line).
    Stdout,
    /// A file path. Parent directories are created as needed.
    File(PathBuf),
}

impl OutputTarget {
    /// Interpret a command-line argument: `-` is stdout, anything else a path.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Self::Stdout
        } else {
            Self::File(PathBuf::from(arg))
        }
    }
}

/// Encode the cover as PNG bytes.
pub fn encode_png(cover: &RenderedCover) -> TapitaResult<Vec<u8>> {
    let mut buf = Vec::new();
    cover
        .image
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| TapitaError::output(format!("encode png: {e}")))?;
    Ok(buf)
}

/// Write the cover as PNG to `target`.
pub fn write_png(cover: &RenderedCover, target: &OutputTarget) -> TapitaResult<()> {
    match target {
        OutputTarget::Stdout => {
            let bytes = encode_png(cover)?;
            let mut out = std::io::stdout().lock();
            out.write_all(&bytes)
                .and_then(|()| out.flush())
                .map_err(|e| TapitaError::output(format!("write png to stdout: {e}")))
        }
        OutputTarget::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|e| {
                    TapitaError::output(format!(
                        "create output dir '{}': {e}",
                        parent.display()
                    ))
                })?;
            }
            image::save_buffer_with_format(
                path,
                cover.image.as_raw(),
                cover.width(),
                cover.height(),
                image::ColorType::Rgb8,
                image::ImageFormat::Png,
            )
            .map_err(|e| TapitaError::output(format!("write png '{}': {e}", path.display())))
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/output.rs"]
mod tests;
