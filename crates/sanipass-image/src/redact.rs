//! Two-layer redaction applicator
//!
//! Each match is drawn twice: an outline around the full matched span, then an
//! opaque fill over the span minus the preserved characters. The outline keeps
//! the whole span visibly bracketed even when some characters stay legible.

use sanipass_core::{Color, OcrBlock, compute_region};

use crate::Surface;

/// How redactions are drawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedactionStyle {
    /// Leading characters of each match left visible
    pub keep_first: usize,
    /// Trailing characters of each match left visible
    pub keep_last: usize,
    pub outline_color: Color,
    pub fill_color: Color,
    pub border_width: u32,
    pub border_padding: u32,
}

impl Default for RedactionStyle {
    fn default() -> Self {
        Self {
            keep_first: 0,
            keep_last: 0,
            outline_color: Color::RED,
            fill_color: Color::BLACK,
            border_width: 1,
            border_padding: 0,
        }
    }
}

/// Redact every recorded match of `block` on `surface`.
///
/// Returns the number of fill layers drawn. Matches whose preserved
/// characters cover the whole span only get the outline.
pub fn redact_block<S: Surface + ?Sized>(
    surface: &mut S,
    block: &OcrBlock,
    style: &RedactionStyle,
) -> usize {
    if surface.has_alpha() {
        surface.make_opaque();
    }

    let mut filled = 0;
    for matched in block.matches() {
        let outline = compute_region(block, matched, 0, 0);
        if outline.is_empty() {
            tracing::debug!("Skipping zero-sized block {:?}", block.text);
            continue;
        }

        tracing::debug!("Redacting {:?} in block {:?}", matched, block.text);
        surface.draw_rectangle(
            &outline,
            Some(style.outline_color),
            None,
            style.border_width,
            style.border_padding,
        );

        let fill = compute_region(block, matched, style.keep_first, style.keep_last);
        if fill.is_empty() {
            continue;
        }

        surface.draw_rectangle(
            &fill,
            Some(style.outline_color),
            Some(style.fill_color),
            style.border_width,
            style.border_padding,
        );
        filled += 1;
    }

    filled
}
