use crate::error::{Result, UnstitchError};

/// Marker literal used when none is configured.
pub const DEFAULT_MARKER: &str = ">>>>";

/// Suffix separating a base path from its chunk number, as in `src/lib.rs:part3`.
pub const DEFAULT_CHUNK_TAG: &str = ":part";

/// Textual conventions of one archive flavour.
///
/// The parser only recognizes `marker` at the start of a line, followed by
/// horizontal whitespace and a path. The reconstructor splits
/// `<base><chunk_tag><N>` paths into a base path and chunk number `N`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Format {
    pub marker: String,
    pub chunk_tag: String,
}

impl Default for Format {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            chunk_tag: DEFAULT_CHUNK_TAG.to_string(),
        }
    }
}

impl Format {
    pub fn new(marker: impl Into<String>, chunk_tag: impl Into<String>) -> Result<Self> {
        let format = Self {
            marker: marker.into(),
            chunk_tag: chunk_tag.into(),
        };
        format.validate()?;
        Ok(format)
    }

    pub fn validate(&self) -> Result<()> {
        check_literal("marker", &self.marker)?;
        check_literal("chunk tag", &self.chunk_tag)?;
        if self.marker.starts_with(char::is_whitespace) {
            return Err(UnstitchError::Config(format!(
                "marker must not start with whitespace: {:?}",
                self.marker
            )));
        }
        Ok(())
    }
}

fn check_literal(what: &str, lit: &str) -> Result<()> {
    if lit.is_empty() {
        return Err(UnstitchError::Config(format!("{what} must not be empty")));
    }
    if lit.contains(['\n', '\r']) {
        return Err(UnstitchError::Config(format!(
            "{what} must fit on one line: {lit:?}"
        )));
    }
    Ok(())
}
