use crate::foundation::error::{TapitaError, TapitaResult};

/// Text content of one cover. Validated on construction and immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoverRequest {
    title: String,
    subtitle: Option<String>,
    author: String,
}

impl CoverRequest {
    /// Validate and build a request.
    ///
    /// Title and author must contain non-whitespace text. A blank subtitle is treated as absent.
    pub fn new(
        title: impl Into<String>,
        subtitle: Option<String>,
        author: impl Into<String>,
    ) -> TapitaResult<Self> {
        let title = title.into();
        let author = author.into();

        if title.trim().is_empty() {
            return Err(TapitaError::validation("title is required"));
        }
        if author.trim().is_empty() {
            return Err(TapitaError::validation("author is required"));
        }
        let subtitle = subtitle.filter(|s| !s.trim().is_empty());

        Ok(Self {
            title,
            subtitle,
            author,
        })
    }

    /// Book title. Also the identicon seed.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Optional subtitle.
    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    /// Author line.
    pub fn author(&self) -> &str {
        &self.author
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cover/request.rs"]
mod tests;
