use std::sync::OnceLock;

use regex::Regex;

use crate::segment::StyledSegment;

fn re_bold() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*(.+?)\*\*").unwrap())
}

fn re_underline() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"__(.+?)__").unwrap())
}

fn re_italic() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Single asterisk only; the bold pass has already claimed every `**` pair.
    RE.get_or_init(|| Regex::new(r"\*([^*]+)\*").unwrap())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpanKind {
    Bold,
    Underline,
    Italic,
}

#[derive(Debug)]
struct RawSpan {
    start: usize,
    end: usize,
    kind: SpanKind,
    content: String,
}

impl RawSpan {
    fn into_segment(self) -> StyledSegment {
        let mut segment = StyledSegment::plain(self.content);
        match self.kind {
            SpanKind::Bold => segment.bold = true,
            SpanKind::Underline => segment.underline = true,
            SpanKind::Italic => segment.italic = true,
        }
        segment
    }
}

fn any_occupied(occupied: &[bool], start: usize, end: usize) -> bool {
    occupied[start..end].iter().any(|&b| b)
}

fn mark_occupied(occupied: &mut [bool], start: usize, end: usize) {
    for b in &mut occupied[start..end] {
        *b = true;
    }
}

/// Collect matches of one span kind, skipping candidates that intersect any
/// already-accepted span. Candidates are visited leftmost-first; a rejected
/// candidate resumes the scan just past its start so a later same-kind match
/// can still be found before the occupied range.
fn collect_spans(
    text: &str,
    re: &Regex,
    kind: SpanKind,
    occupied: &mut [bool],
    spans: &mut Vec<RawSpan>,
) {
    let mut pos = 0;
    while pos < text.len() {
        if occupied[pos] {
            pos += 1;
            continue;
        }
        let Some(caps) = re.captures_at(text, pos) else {
            break;
        };
        let m = caps.get(0).unwrap();
        if any_occupied(occupied, m.start(), m.end()) {
            pos = m.start() + 1;
            continue;
        }
        let content = caps.get(1).map(|g| g.as_str()).unwrap_or_default();
        mark_occupied(occupied, m.start(), m.end());
        spans.push(RawSpan {
            start: m.start(),
            end: m.end(),
            kind,
            content: content.to_string(),
        });
        pos = m.end();
    }
}

/// Parse bold (`**x**`), underline (`__x__`) and italic (`*x*`) spans into an
/// ordered sequence of styled segments.
///
/// Bold and underline are scanned before italic, so an italic candidate never
/// matches inside a claimed range. Unmatched delimiters stay literal text.
pub fn format(markdown: &str) -> Vec<StyledSegment> {
    if markdown.is_empty() {
        return vec![StyledSegment::plain("")];
    }

    let mut occupied = vec![false; markdown.len()];
    let mut spans = Vec::new();
    collect_spans(markdown, re_bold(), SpanKind::Bold, &mut occupied, &mut spans);
    collect_spans(
        markdown,
        re_underline(),
        SpanKind::Underline,
        &mut occupied,
        &mut spans,
    );
    collect_spans(
        markdown,
        re_italic(),
        SpanKind::Italic,
        &mut occupied,
        &mut spans,
    );
    spans.sort_by_key(|s| s.start);

    let mut segments = Vec::new();
    let mut cursor = 0;
    for span in spans {
        if span.start > cursor {
            segments.push(StyledSegment::plain(&markdown[cursor..span.start]));
        }
        cursor = span.end;
        segments.push(span.into_segment());
    }
    if cursor < markdown.len() {
        segments.push(StyledSegment::plain(&markdown[cursor..]));
    }
    if segments.is_empty() {
        segments.push(StyledSegment::plain(markdown));
    }
    segments
}
