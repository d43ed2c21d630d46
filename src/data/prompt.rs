use crate::model::storyboard::Page;

/// Instruction shown at the top of the combined page view and sent as the
/// leading part of single-page image prompts. The two U+200B characters
/// after "languages " are part of the original prompt text; reconciliation
/// matches this string byte for byte, so they must stay.
pub const PAGE_VIEW_PREAMBLE: &str = "Draw a graphic novel based on the following storyboard. \
You can draw graphic novels only in the language you provided, but you can use other languages \
\u{200b}\u{200b}if you need to quote from the work.\
This graphic novel's page format is 1:1.4 width-to-height. Please make the panels taller.";

/// Shorter instruction used for generate-all prompts.
pub const BATCH_PREAMBLE: &str = "Draw a graphic novel based on the following storyboard.";

/// Build the text-generation request prompt around the source novel text.
pub fn storyboard_request(source: &str) -> String {
    format!(
        "다음 텍스트를 그래픽 노블의 스토리보드로 변환해주세요.\n\
         \n\
         스토리보드 작성 규칙:\n\
         1. 전체적인 헤드 프롬프트를 먼저 작성하세요:\n   \
         - 제목\n   \
         - 그래픽 노블의 전체적인 분위기와 기조\n   \
         - 중요 등장인물들의 요약된 외모\n   \n\
         2. 각 페이지는 \"Page 1\", \"Page 2\" 등으로 명확히 구분하세요.\n\
         \n\
         3. 입력받은 언어로 스토리보드를 작성하되, 작중 인용이 필요한 경우 다른 언어를 사용할 수 있습니다.\n\
         \n\
         4. 모든 내레이션과 대사는 제공된 텍스트 그대로 사용하세요.\n\
         \n\
         5. 각 페이지마다 시각적 구성, 대사, 내레이션을 상세히 설명하세요.\n\
         \n\
         입력 텍스트:\n\
         {source}\n\
         \n\
         스토리보드를 작성해주세요:"
    )
}

/// Combined editable view for one page: preamble, header, title, content,
/// joined by blank lines. This exact string is also the single-page image
/// prompt after reconciliation.
pub fn compose_page_view(header: &str, page: &Page) -> String {
    format!(
        "{PAGE_VIEW_PREAMBLE}\n\n{header}\n\n{}\n\n{}",
        page.title, page.content
    )
}

/// Image prompt for one page during generate-all, assembled from the stored
/// fields rather than the editable view.
pub fn compose_batch_prompt(header: &str, page: &Page) -> String {
    format!(
        "{BATCH_PREAMBLE}\n\n{header}\n\n{}\n\n{}",
        page.title, page.content
    )
}

/// Fold edits made in the combined view back into a page.
///
/// Strips the exact preamble, then the exact header, then splits the rest on
/// the first newline into title and content. If either prefix does not match
/// the edit is treated as best-effort and the prior page comes back
/// unchanged. If no title line can be separated out, the prior title is kept
/// and the whole remainder becomes the content.
pub fn reconcile_page(combined: &str, header: &str, prior: &Page) -> Page {
    let text = combined.trim();

    let text = match text.strip_prefix(PAGE_VIEW_PREAMBLE) {
        Some(rest) => rest.trim(),
        None => return prior.clone(),
    };

    let text = match text.strip_prefix(header) {
        Some(rest) => rest.trim(),
        None => return prior.clone(),
    };

    match text.split_once('\n') {
        Some((first, rest)) if !first.trim().is_empty() && !rest.trim().is_empty() => {
            Page::new(first.trim(), rest.trim())
        }
        _ => Page {
            title: prior.title.clone(),
            content: text.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_then_reconcile_round_trips() {
        let header = "제목: 달빛\n분위기: 차분한 수채화";
        let page = Page::new("Page 3", "골목길. 소년이 고양이를 따라간다.");
        let combined = compose_page_view(header, &page);
        let got = reconcile_page(&combined, header, &Page::new("old", "old"));
        assert_eq!(got, page);
    }

    #[test]
    fn edits_to_title_and_content_are_picked_up() {
        let header = "H";
        let combined = format!("{PAGE_VIEW_PREAMBLE}\n\n{header}\n\nPage 2\n\nnew content");
        let got = reconcile_page(&combined, header, &Page::new("Page 2", "old content"));
        assert_eq!(got.title, "Page 2");
        assert_eq!(got.content, "new content");
    }

    #[test]
    fn altered_preamble_keeps_prior_page() {
        let prior = Page::new("Page 1", "keep me");
        let combined = "Draw something else entirely\n\nH\n\nPage 1\n\nedited";
        assert_eq!(reconcile_page(combined, "H", &prior), prior);
    }

    #[test]
    fn altered_header_keeps_prior_page() {
        let prior = Page::new("Page 1", "keep me");
        let combined = format!("{PAGE_VIEW_PREAMBLE}\n\nnot the header\n\nPage 1\n\nedited");
        assert_eq!(reconcile_page(&combined, "the header", &prior), prior);
    }

    #[test]
    fn empty_header_matches_trivially() {
        let combined = format!("{PAGE_VIEW_PREAMBLE}\n\nPage 5\n\nbody");
        let got = reconcile_page(&combined, "", &Page::new("x", "y"));
        assert_eq!(got, Page::new("Page 5", "body"));
    }

    #[test]
    fn single_line_remainder_keeps_prior_title() {
        let combined = format!("{PAGE_VIEW_PREAMBLE}\n\nH\n\nonly one line");
        let got = reconcile_page(&combined, "H", &Page::new("Page 7", "old"));
        assert_eq!(got.title, "Page 7");
        assert_eq!(got.content, "only one line");
    }

    #[test]
    fn batch_prompt_uses_short_preamble() {
        let page = Page::new("Page 1", "content");
        let prompt = compose_batch_prompt("header", &page);
        assert!(prompt.starts_with("Draw a graphic novel based on the following storyboard.\n\n"));
        assert!(prompt.ends_with("header\n\nPage 1\n\ncontent"));
    }

    #[test]
    fn request_template_embeds_source_between_rules_and_closing_line() {
        let prompt = storyboard_request("소설 본문");
        assert!(prompt.contains("입력 텍스트:\n소설 본문\n\n"));
        assert!(prompt.ends_with("스토리보드를 작성해주세요:"));
        assert!(prompt.contains("\"Page 1\", \"Page 2\""));
    }
}
