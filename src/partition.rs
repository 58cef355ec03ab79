/// Split `text` into chunks of at most `max_chars` characters, preferring
/// paragraph boundaries, then sentence boundaries, then forced cuts.
///
/// Boundary separators are consumed by the split and re-inserted when
/// packing, so the concatenation of all chunks is a close approximation of
/// the source rather than a byte-exact reconstruction. Input that already
/// fits is returned untouched as a single chunk.
pub fn partition(text: &str, max_chars: usize) -> Vec<String> {
    if char_len(text) <= max_chars {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    for paragraph in text.split("\n\n") {
        if packs(&current, paragraph, max_chars) {
            join_onto(&mut current, "\n\n", paragraph);
            continue;
        }
        if !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
        }
        if char_len(paragraph) <= max_chars {
            current.push_str(paragraph);
            continue;
        }
        split_sentences(paragraph, max_chars, &mut chunks, &mut current);
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    if chunks.is_empty() {
        chunks.push(text.to_string());
    }
    chunks
}

/// Pack `". "`-separated sentences of an oversized paragraph. A chunk closed
/// here gets its trailing period restored, so packing keeps one character of
/// the budget spare.
fn split_sentences(
    paragraph: &str,
    max_chars: usize,
    chunks: &mut Vec<String>,
    current: &mut String,
) {
    let budget = max_chars.saturating_sub(1).max(1);
    for sentence in paragraph.split(". ") {
        if packs(current, sentence, budget) {
            join_onto(current, ". ", sentence);
            continue;
        }
        if !current.is_empty() {
            let mut closed = std::mem::take(current);
            if !closed.ends_with('.') {
                closed.push('.');
            }
            chunks.push(closed);
        }
        if char_len(sentence) <= budget {
            current.push_str(sentence);
            continue;
        }
        hard_chunk(sentence, max_chars, budget, chunks, current);
    }
}

/// Force-cut a sentence with no usable boundary: emit `max_chars - 3`
/// characters plus an ellipsis per chunk until the remainder fits, then seed
/// the accumulator with the remainder.
fn hard_chunk(
    sentence: &str,
    max_chars: usize,
    budget: usize,
    chunks: &mut Vec<String>,
    current: &mut String,
) {
    let stride = max_chars.saturating_sub(3).max(1);
    let mut rest: &str = sentence;
    while char_len(rest) > budget {
        let cut = byte_offset(rest, stride);
        chunks.push(format!("{}...", &rest[..cut]));
        rest = &rest[cut..];
    }
    current.push_str(rest);
}

/// Whether `piece` (plus a two-character joiner when the accumulator is
/// non-empty) still fits the budget.
fn packs(current: &str, piece: &str, budget: usize) -> bool {
    let joined = if current.is_empty() {
        char_len(piece)
    } else {
        char_len(current) + 2 + char_len(piece)
    };
    joined <= budget
}

fn join_onto(current: &mut String, separator: &str, piece: &str) {
    if !current.is_empty() {
        current.push_str(separator);
    }
    current.push_str(piece);
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn byte_offset(s: &str, chars: usize) -> usize {
    s.char_indices()
        .nth(chars)
        .map(|(idx, _)| idx)
        .unwrap_or(s.len())
}
