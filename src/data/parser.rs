use regex::Regex;

use crate::model::storyboard::Page;

/// A page marker is "Page" + whitespace + digits, case-insensitive.
/// The matched text doubles as the page title, original casing kept.
const PAGE_MARKER: &str = r"(?i)Page\s+\d+";

fn marker_regex() -> Regex {
    Regex::new(PAGE_MARKER).unwrap()
}

/// Split generated storyboard text into a header and its pages.
///
/// Everything before the first marker is the header. When no marker exists
/// the whole text is the header and there are no pages. Each page's content
/// runs from its marker to the next one, trimmed.
pub fn split_storyboard(text: &str) -> (String, Vec<Page>) {
    let re = marker_regex();

    let first = match re.find(text) {
        Some(m) => m,
        None => return (text.to_string(), Vec::new()),
    };

    let header = text[..first.start()].trim().to_string();
    let body = &text[first.start()..];

    // body starts with a marker, so the first split segment is always empty
    let segments: Vec<&str> = re.split(body).collect();
    let markers: Vec<&str> = re.find_iter(body).map(|m| m.as_str()).collect();

    let pages = segments
        .into_iter()
        .skip(1)
        .zip(markers)
        .map(|(segment, marker)| Page::new(marker, segment.trim()))
        .collect();

    (header, pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_marker_keeps_whole_text_as_header() {
        let text = "Just a moody synopsis.\nNo sections here.";
        let (header, pages) = split_storyboard(text);
        assert_eq!(header, text);
        assert!(pages.is_empty());
    }

    #[test]
    fn splits_header_and_pages() {
        let (header, pages) = split_storyboard("H\nPage 1\nA\nPage 2\nB");
        assert_eq!(header, "H");
        assert_eq!(
            pages,
            vec![Page::new("Page 1", "A"), Page::new("Page 2", "B")]
        );
    }

    #[test]
    fn marker_match_is_case_insensitive_and_casing_is_kept() {
        let (header, pages) = split_storyboard("intro\npage 1\nlow\nPAGE 2\nloud");
        assert_eq!(header, "intro");
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].title, "page 1");
        assert_eq!(pages[0].content, "low");
        assert_eq!(pages[1].title, "PAGE 2");
        assert_eq!(pages[1].content, "loud");
    }

    #[test]
    fn trailing_marker_yields_empty_content() {
        let (_, pages) = split_storyboard("H\nPage 1\nA\nPage 2");
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1].title, "Page 2");
        assert_eq!(pages[1].content, "");
    }

    #[test]
    fn header_is_trimmed_when_pages_exist() {
        let (header, pages) = split_storyboard("  Title and mood notes  \n\nPage 1\nstuff");
        assert_eq!(header, "Title and mood notes");
        assert_eq!(pages.len(), 1);
    }

    #[test]
    fn multi_digit_and_spacing_survive_in_titles() {
        let (_, pages) = split_storyboard("h\nPage  10\nten\nPage 11\neleven");
        assert_eq!(pages[0].title, "Page  10");
        assert_eq!(pages[1].title, "Page 11");
    }

    #[test]
    fn page_word_without_number_is_not_a_marker() {
        let (header, pages) = split_storyboard("This page has no number anywhere.");
        assert_eq!(header, "This page has no number anywhere.");
        assert!(pages.is_empty());
    }

    #[test]
    fn content_keeps_interior_blank_lines() {
        let (_, pages) = split_storyboard("h\nPage 1\npanel one\n\npanel two\n");
        assert_eq!(pages[0].content, "panel one\n\npanel two");
    }
}
