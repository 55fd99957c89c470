use scraper::{ElementRef, Html, Selector};

use super::ParseError;

/// Value of `data-react-class` on the element holding the calendar props.
pub const CALENDAR_CONTAINER_CLASS: &str = "CalendarContainer";

/// Attribute carrying the JSON-serialized React props.
pub const PROPS_ATTRIBUTE: &str = "data-react-props";

const TITLE_SELECTOR: &str = "title";
const DESCRIPTION_SELECTOR: &str = r#"meta[name="description"]"#;

/// Fields extracted from a calendar page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPage {
    /// Text of the first `<title>`, trimmed. Empty if absent.
    pub title: String,
    /// `content` of the first `<meta name="description">`. Empty if absent.
    pub description: String,
    /// Raw JSON from the container's `data-react-props` attribute.
    pub props: String,
}

/// Parses raw page bytes and extracts the title, description and props blob.
///
/// Invalid UTF-8 is replaced rather than rejected; HTML parsing itself never
/// fails. The only hard requirement is the props-carrying container.
///
/// # Errors
///
/// Returns [`ParseError::PropNotFound`] if no element has
/// `data-react-class="CalendarContainer"`, or the first one has no
/// `data-react-props` attribute.
pub fn parse_page(bytes: &[u8]) -> Result<ParsedPage, ParseError> {
    let text = String::from_utf8_lossy(bytes);
    let document = Html::parse_document(&text);

    let title = first_match(&document, TITLE_SELECTOR)?
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default();

    let description = first_match(&document, DESCRIPTION_SELECTOR)?
        .and_then(|el| el.value().attr("content"))
        .unwrap_or_default()
        .to_string();

    let container_selector = format!(r#"[data-react-class="{CALENDAR_CONTAINER_CLASS}"]"#);
    let props = first_match(&document, &container_selector)?
        .and_then(|el| el.value().attr(PROPS_ATTRIBUTE))
        .ok_or(ParseError::PropNotFound)?
        .to_string();

    Ok(ParsedPage {
        title,
        description,
        props,
    })
}

fn first_match<'a>(
    document: &'a Html,
    selector: &str,
) -> Result<Option<ElementRef<'a>>, ParseError> {
    let selector = Selector::parse(selector).map_err(|e| ParseError::Selector {
        selector: selector.to_string(),
        message: e.to_string(),
    })?;
    Ok(document.select(&selector).next())
}
