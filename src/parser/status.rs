use scraper::{ElementRef, Html, Node, Selector};

/// First alert box on the tracking page; holds the status sentence
pub const STATUS_SELECTOR: &str = "div.alert-box:nth-child(1)";

/// Errors raised while extracting the status text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("status element not found ({0})")]
    ElementNotFound(&'static str),

    #[error("status element is empty ({0})")]
    EmptyElement(&'static str),

    #[error("invalid selector '{0}': {1}")]
    InvalidSelector(&'static str, String),
}

/// Extract the tracking status from the page markup.
///
/// Returns the leading content of the first alert box, trimmed. Comments and
/// whitespace-only text are skipped; when the box starts with markup, the
/// text of that element is used.
pub fn parse_status(html: &str) -> Result<String, ParseError> {
    let selector = Selector::parse(STATUS_SELECTOR)
        .map_err(|e| ParseError::InvalidSelector(STATUS_SELECTOR, e.to_string()))?;

    let document = Html::parse_document(html);
    let element = document
        .select(&selector)
        .next()
        .ok_or(ParseError::ElementNotFound(STATUS_SELECTOR))?;

    let status = element
        .children()
        .find_map(|child| {
            let text = match child.value() {
                Node::Text(text) => text.trim().to_string(),
                Node::Element(_) => ElementRef::wrap(child)?
                    .text()
                    .collect::<String>()
                    .trim()
                    .to_string(),
                _ => return None,
            };
            (!text.is_empty()).then_some(text)
        })
        .ok_or(ParseError::EmptyElement(STATUS_SELECTOR))?;

    Ok(status)
}
