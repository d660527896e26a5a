use crate::typography::TextStyle;

/// A run of text with its own style overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub text: String,
    pub style: TextStyle,
}

impl Span {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), style: TextStyle::default() }
    }

    pub fn style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }
}

/// What a text widget displays.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// One uniformly styled string.
    Plain(String),
    /// Several styled spans laid out left to right.
    Rich(Vec<Span>),
}

impl Content {
    /// The string when the content is plain.
    pub fn as_plain(&self) -> Option<&str> {
        match self {
            Content::Plain(s) => Some(s),
            Content::Rich(_) => None,
        }
    }

    /// Concatenates every span, dropping per-span styles.
    pub fn flatten(&self) -> String {
        match self {
            Content::Plain(s) => s.clone(),
            Content::Rich(spans) => spans.iter().map(|s| s.text.as_str()).collect(),
        }
    }
}

impl From<&str> for Content {
    fn from(s: &str) -> Self {
        Content::Plain(s.to_string())
    }
}

impl From<String> for Content {
    fn from(s: String) -> Self {
        Content::Plain(s)
    }
}

impl From<Vec<Span>> for Content {
    fn from(spans: Vec<Span>) -> Self {
        Content::Rich(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flatten_joins_spans() {
        let c = Content::from(vec![Span::new("Know"), Span::new("ledge")]);
        assert_eq!(c.as_plain(), None);
        assert_eq!(c.flatten(), "Knowledge");
    }

    #[test]
    fn plain_flattens_to_itself() {
        let c = Content::from("Feed");
        assert_eq!(c.as_plain(), Some("Feed"));
        assert_eq!(c.flatten(), "Feed");
    }
}
