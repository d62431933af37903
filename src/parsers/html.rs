use scraper::{Html, Selector};

use crate::parsers::ExtractError;

/// Collects every anchor href value from raw markup, in document order.
///
/// Duplicates are kept and anchors without an href are skipped. Malformed
/// markup is parsed best-effort rather than rejected, so arbitrary input
/// yields whatever anchors the parser can still recover.
pub fn extract_hrefs(html: &str) -> Result<Vec<String>, ExtractError> {
    let doc = Html::parse_document(html);

    let link_selector =
        Selector::parse("a").map_err(|e| ExtractError::selector("a", format!("{e:?}")))?;

    let hrefs = doc
        .select(&link_selector)
        .filter_map(|e| e.value().attr("href"))
        .map(|s| s.to_string())
        .collect::<Vec<String>>();

    ::log::debug!("HTML parser found {} hrefs", hrefs.len());

    Ok(hrefs)
}
