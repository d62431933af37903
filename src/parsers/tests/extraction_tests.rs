use crate::parsers::html;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_hrefs_document_order() {
        let content = "<html><body>\
            <p>Intro <a href=\"https://first.example\">one</a></p>\
            <div><a href=\"https://second.example\">two</a></div>\
            <a href=\"https://third.example\">three</a>\
            </body></html>";
        let hrefs = html::extract_hrefs(content).unwrap();
        assert_eq!(
            hrefs,
            vec![
                "https://first.example",
                "https://second.example",
                "https://third.example"
            ]
        );
    }

    #[test]
    fn test_extract_hrefs_keeps_duplicates() {
        let content = "<a href=\"https://same.example\">a</a>\
            <a href=\"https://same.example\">b</a>";
        let hrefs = html::extract_hrefs(content).unwrap();
        assert_eq!(
            hrefs,
            vec!["https://same.example", "https://same.example"]
        );
    }

    #[test]
    fn test_extract_hrefs_skips_anchors_without_href() {
        let content = "<a name=\"top\">anchor</a><a href=\"https://kept.example\">kept</a>";
        let hrefs = html::extract_hrefs(content).unwrap();
        assert_eq!(hrefs, vec!["https://kept.example"]);
    }

    #[test]
    fn test_extract_hrefs_relative_values_pass_through() {
        // The primitive reports every href; scheme filtering happens in the worker
        let content = "<a href=\"/local\">l</a><a href=\"page.html\">p</a>";
        let hrefs = html::extract_hrefs(content).unwrap();
        assert_eq!(hrefs, vec!["/local", "page.html"]);
    }

    #[test]
    fn test_extract_hrefs_empty_document() {
        assert!(html::extract_hrefs("").unwrap().is_empty());
        assert!(
            html::extract_hrefs("<html><body><p>no links</p></body></html>")
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn test_extract_hrefs_tolerates_garbage_input() {
        let garbage = "\u{0}\u{1}%PDF-1.4 \u{fffd}\u{fffd} not markup at all <<<>>>";
        let hrefs = html::extract_hrefs(garbage).unwrap();
        assert!(hrefs.is_empty());
    }

    #[test]
    fn test_extract_hrefs_unclosed_markup() {
        // Truncated documents still yield the anchors the parser recovers
        let content = "<html><body><a href=\"https://kept.example\">cut off";
        let hrefs = html::extract_hrefs(content).unwrap();
        assert_eq!(hrefs, vec!["https://kept.example"]);
    }
}
