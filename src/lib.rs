mod config;
mod directive;
mod error;
mod inline;
mod layout;
mod parser;
mod partition;
mod segment;

pub use config::{Config, Frame};
pub use directive::{BaseStyle, Directive};
pub use error::Error;
pub use segment::{
    BulletPreset, ContentKind, Dimensions, FontRange, ListItem, StyledSegment, Table,
};

use log::debug;

/// Parse inline bold/italic/underline markup into styled segments.
pub fn format(markdown: &str) -> Vec<StyledSegment> {
    inline::format(markdown)
}

/// Parse indented bullet/numbered lines into list items.
pub fn parse_list(markdown: &str) -> Vec<ListItem> {
    parser::parse_list(markdown)
}

/// Parse a pipe-delimited table; `None` signals malformed markup.
pub fn parse_table(markdown: &str) -> Option<Table> {
    parser::parse_table(markdown)
}

/// Approximate the rendered extent of `text` at `font_size`.
pub fn estimate_size(text: &str, font_size: f64) -> Dimensions {
    layout::estimate_size(text, font_size)
}

/// Pick the largest font size in `range` whose estimate fits the box.
pub fn fit_font_size(text: &str, box_width: f64, box_height: f64, range: &FontRange) -> f64 {
    layout::fit_font_size(text, box_width, box_height, range)
}

/// Split text over the chunk budget along paragraph, sentence, then forced
/// boundaries.
pub fn partition(text: &str, max_chars: usize) -> Vec<String> {
    partition::partition(text, max_chars)
}

/// Compile one markdown block of the given kind into rendering directives.
pub fn compile(
    markdown: &str,
    kind: ContentKind,
    config: &Config,
) -> Result<Vec<Directive>, Error> {
    match kind {
        ContentKind::Title | ContentKind::Body => Ok(compile_text(markdown, kind, config)),
        ContentKind::List => compile_list(markdown, config),
        ContentKind::Table => compile_table(markdown, config),
    }
}

fn base_style(plain: &str, kind: ContentKind, config: &Config) -> BaseStyle {
    let frame = config.frame(kind);
    let range = config.font_range(kind);
    let font_size = if config.text.autofit {
        layout::fit_font_size(plain, frame.width, frame.height, &range)
    } else {
        range.default
    };
    BaseStyle {
        font_size,
        font_family: config.fonts.family.clone(),
    }
}

fn compile_text(markdown: &str, kind: ContentKind, config: &Config) -> Vec<Directive> {
    let frame = config.frame(kind);
    let chunks = partition::partition(markdown, config.text.max_chunk_chars);
    debug!("{kind}: {} chunk(s)", chunks.len());

    let mut directives = Vec::new();
    for (index, chunk) in chunks.iter().enumerate() {
        let object_id = format!("{kind}-{}", index + 1);
        let segments = inline::format(chunk);
        let plain: String = segments.iter().map(|s| s.text.as_str()).collect();
        let base = base_style(&plain, kind, config);
        debug!("{object_id}: font size {}", base.font_size);
        directives.extend(directive::build(&object_id, frame, &segments, &base));
    }
    directives
}

fn compile_list(markdown: &str, config: &Config) -> Result<Vec<Directive>, Error> {
    let items = parser::parse_list(markdown);
    if items.is_empty() {
        return Err(Error::EmptyList);
    }

    // Flatten to the inserted-text shape the client expects: one line per
    // item, nesting expressed as leading tabs.
    let mut segments = Vec::new();
    for item in &items {
        if item.level > 0 {
            segments.push(StyledSegment::plain("\t".repeat(item.level)));
        }
        segments.extend(inline::format(&item.text));
        segments.push(StyledSegment::plain("\n"));
    }

    let plain: String = segments.iter().map(|s| s.text.as_str()).collect();
    let base = base_style(&plain, ContentKind::List, config);
    debug!("list-1: {} item(s), font size {}", items.len(), base.font_size);
    Ok(directive::build(
        "list-1",
        config.frame(ContentKind::List),
        &segments,
        &base,
    ))
}

fn compile_table(markdown: &str, config: &Config) -> Result<Vec<Directive>, Error> {
    let table = parser::parse_table(markdown).ok_or(Error::MalformedTable)?;

    // Project the table onto a plain grid to drive font fitting; the client
    // owns cell creation. Header cells render bold.
    let header_line = table.headers.join("\t");
    let mut lines = vec![header_line.clone()];
    for row in &table.rows {
        lines.push(row.join("\t"));
    }
    let plain = lines.join("\n");

    let base = base_style(&plain, ContentKind::Table, config);
    debug!(
        "table-1: {} column(s) x {} row(s), font size {}",
        table.headers.len(),
        table.rows.len(),
        base.font_size
    );

    let mut header = StyledSegment::plain(header_line.as_str());
    header.bold = true;
    let tail = StyledSegment::plain(&plain[header_line.len()..]);
    let segments = vec![header, tail];

    Ok(directive::build(
        "table-1",
        config.frame(ContentKind::Table),
        &segments,
        &base,
    ))
}
