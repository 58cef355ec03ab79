use serde::Serialize;

use crate::config::Frame;
use crate::segment::StyledSegment;

/// A generic instruction for the external rendering client: either a
/// geometry placement for a content block or a style application over a
/// half-open character range of inserted text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Directive {
    #[serde(rename_all = "camelCase")]
    Place {
        object_id: String,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        scale_x: f64,
        scale_y: f64,
    },
    #[serde(rename_all = "camelCase")]
    StyleRange {
        object_id: String,
        start: usize,
        end: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        bold: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        italic: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        underline: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        font_size: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        font_family: Option<String>,
        /// Names of the attributes this directive actually sets.
        fields: Vec<String>,
    },
}

/// Container-level styling applied to the whole inserted range before any
/// per-segment directive.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseStyle {
    pub font_size: f64,
    pub font_family: String,
}

/// Assemble the directives for one content block: a geometry placement at
/// 1:1 scale, a whole-range base style, then one style range per segment
/// that carries formatting. Unstyled segments only advance the offset.
pub fn build(
    object_id: &str,
    frame: Frame,
    segments: &[StyledSegment],
    base: &BaseStyle,
) -> Vec<Directive> {
    let mut directives = vec![Directive::Place {
        object_id: object_id.to_string(),
        x: frame.x,
        y: frame.y,
        width: frame.width,
        height: frame.height,
        scale_x: 1.0,
        scale_y: 1.0,
    }];

    let total: usize = segments.iter().map(StyledSegment::char_len).sum();
    if total > 0 {
        directives.push(Directive::StyleRange {
            object_id: object_id.to_string(),
            start: 0,
            end: total,
            bold: None,
            italic: None,
            underline: None,
            font_size: Some(base.font_size),
            font_family: Some(base.font_family.clone()),
            fields: vec!["fontSize".to_string(), "fontFamily".to_string()],
        });
    }

    let mut offset = 0;
    for segment in segments {
        let len = segment.char_len();
        if segment.has_style() {
            directives.push(style_range(object_id, offset, offset + len, segment));
        }
        offset += len;
    }
    directives
}

/// A style directive for one formatted segment at `[start, end)`.
pub fn style_range(object_id: &str, start: usize, end: usize, segment: &StyledSegment) -> Directive {
    let mut fields = Vec::new();
    if segment.bold {
        fields.push("bold".to_string());
    }
    if segment.italic {
        fields.push("italic".to_string());
    }
    if segment.underline {
        fields.push("underline".to_string());
    }
    if segment.font_size.is_some() {
        fields.push("fontSize".to_string());
    }
    Directive::StyleRange {
        object_id: object_id.to_string(),
        start,
        end,
        bold: segment.bold.then_some(true),
        italic: segment.italic.then_some(true),
        underline: segment.underline.then_some(true),
        font_size: segment.font_size,
        font_family: None,
        fields,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inline;

    const FRAME: Frame = Frame {
        x: 50.0,
        y: 120.0,
        width: 620.0,
        height: 340.0,
    };

    fn base() -> BaseStyle {
        BaseStyle {
            font_size: 18.0,
            font_family: "Arial".to_string(),
        }
    }

    #[test]
    fn geometry_comes_first_at_identity_scale() {
        let segments = inline::format("plain");
        let directives = build("body-1", FRAME, &segments, &base());
        match &directives[0] {
            Directive::Place {
                object_id,
                x,
                y,
                width,
                height,
                scale_x,
                scale_y,
            } => {
                assert_eq!(object_id, "body-1");
                assert_eq!((*x, *y), (50.0, 120.0));
                assert_eq!((*width, *height), (620.0, 340.0));
                assert_eq!((*scale_x, *scale_y), (1.0, 1.0));
            }
            other => panic!("expected placement, got {other:?}"),
        }
    }

    #[test]
    fn base_style_covers_whole_range_before_segment_styles() {
        let segments = inline::format("Hello **world**");
        let directives = build("body-1", FRAME, &segments, &base());
        assert_eq!(directives.len(), 3);
        match &directives[1] {
            Directive::StyleRange {
                start,
                end,
                font_size,
                font_family,
                fields,
                ..
            } => {
                assert_eq!((*start, *end), (0, 11));
                assert_eq!(*font_size, Some(18.0));
                assert_eq!(font_family.as_deref(), Some("Arial"));
                assert_eq!(fields, &["fontSize", "fontFamily"]);
            }
            other => panic!("expected base style, got {other:?}"),
        }
    }

    #[test]
    fn segment_offsets_are_cumulative() {
        let segments = inline::format("Hello **world** and *friend*");
        let directives = build("body-1", FRAME, &segments, &base());
        // placement + base + bold + italic
        assert_eq!(directives.len(), 4);
        match &directives[2] {
            Directive::StyleRange {
                start, end, bold, fields, ..
            } => {
                assert_eq!((*start, *end), (6, 11));
                assert_eq!(*bold, Some(true));
                assert_eq!(fields, &["bold"]);
            }
            other => panic!("expected bold range, got {other:?}"),
        }
        match &directives[3] {
            Directive::StyleRange {
                start, end, italic, ..
            } => {
                assert_eq!((*start, *end), (16, 22));
                assert_eq!(*italic, Some(true));
            }
            other => panic!("expected italic range, got {other:?}"),
        }
    }

    #[test]
    fn unstyled_segments_emit_no_style_directive() {
        let segments = inline::format("nothing fancy here");
        let directives = build("body-1", FRAME, &segments, &base());
        assert_eq!(directives.len(), 2);
    }

    #[test]
    fn empty_text_emits_geometry_only() {
        let segments = inline::format("");
        let directives = build("body-1", FRAME, &segments, &base());
        assert_eq!(directives.len(), 1);
    }

    #[test]
    fn offsets_count_characters_not_bytes() {
        let segments = inline::format("héé **bold**");
        let directives = build("body-1", FRAME, &segments, &base());
        match &directives[2] {
            Directive::StyleRange { start, end, .. } => {
                assert_eq!((*start, *end), (4, 8));
            }
            other => panic!("expected bold range, got {other:?}"),
        }
    }

    #[test]
    fn serializes_with_camel_case_tags() {
        let segments = inline::format("**b**");
        let directives = build("t-1", FRAME, &segments, &base());
        let json = serde_json::to_value(&directives).unwrap();
        assert_eq!(json[0]["kind"], "place");
        assert_eq!(json[0]["objectId"], "t-1");
        assert_eq!(json[2]["kind"], "styleRange");
        assert_eq!(json[2]["fields"][0], "bold");
        assert!(json[2].get("italic").is_none());
    }
}
