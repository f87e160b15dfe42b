use std::fmt;

/// A share link submitted by a caller, trimmed and guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLink(String);

impl SourceLink {
    pub fn parse(raw: Option<&str>) -> Result<Self, InvalidInput> {
        let raw = raw.ok_or(InvalidInput::MissingLink)?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(InvalidInput::EmptyLink);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourceLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInput {
    #[error("source link is missing")]
    MissingLink,
    #[error("source link is empty")]
    EmptyLink,
}
