//! Style registry for deduplication

use crate::document::DocumentDescriptor;
use crate::encoder::{SpreadsheetEncoder, StyleId};
use crate::error::Result;
use crate::style::{BorderSide, StyleDescriptor};
use ahash::AHashMap;

/// Maps each distinct style in a document to one encoder style record
///
/// Spreadsheets typically have many cells sharing the same look. The
/// registry creates one record per distinct [`StyleDescriptor`] value, in
/// the order styles first appear, and cells reference records by handle.
///
/// Keys borrow the document, so no style can change while the registry
/// is alive.
#[derive(Debug)]
pub struct StyleRegistry<'d> {
    handles: AHashMap<&'d StyleDescriptor, StyleId>,
}

impl<'d> StyleRegistry<'d> {
    /// Walk every cell of every row of every sheet and create the records
    pub fn build<E: SpreadsheetEncoder>(
        doc: &'d DocumentDescriptor,
        encoder: &mut E,
    ) -> Result<Self> {
        let mut handles: AHashMap<&'d StyleDescriptor, StyleId> = AHashMap::with_capacity(64);

        let styles = doc
            .sheets
            .iter()
            .flat_map(|sheet| sheet.rows.iter())
            .flat_map(|row| row.cells.iter())
            .map(|cell| &cell.style);

        for style in styles {
            if handles.contains_key(style) {
                continue;
            }
            let id = materialize(style, encoder)?;
            log::trace!("style record {} created for {:?}", id, style);
            handles.insert(style, id);
        }

        Ok(Self { handles })
    }

    /// Get the record for a style value
    pub fn handle_for(&self, style: &StyleDescriptor) -> Option<StyleId> {
        self.handles.get(style).copied()
    }

    /// Number of records created
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Check if no record was created
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

/// Create one record and apply the fields the style sets
fn materialize<E: SpreadsheetEncoder>(style: &StyleDescriptor, encoder: &mut E) -> Result<StyleId> {
    let id = encoder.create_style()?;

    if let Some(color) = style.background_color {
        encoder.set_style_fill(id, color)?;
    }

    for side in BorderSide::ALL {
        if let Some(kind) = style.border(side) {
            encoder.set_style_border(id, side, kind)?;
        }
    }

    if let Some(font) = style.font() {
        encoder.set_style_font(id, &font)?;
    }

    if let Some(align) = style.horizontal_alignment {
        encoder.set_style_alignment(id, align)?;
    }

    if let Some(format) = &style.data_format {
        encoder.set_style_data_format(id, format)?;
    }

    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellDescriptor;
    use crate::compile::recording::{Call, RecordingEncoder};
    use crate::style::{BorderKind, Color, DataFormat, FontSpec, HorizontalAlignment};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_deduplication() {
        let mut doc = DocumentDescriptor::new();
        let sheet = doc.add_sheet("A");
        sheet
            .add_row()
            .push(CellDescriptor::text("x").bold())
            .push(CellDescriptor::text("y").bold())
            .push(CellDescriptor::text("z").with_background(Color::RED));
        doc.add_sheet("B")
            .add_row()
            .push(CellDescriptor::number(1).bold());

        let mut encoder = RecordingEncoder::default();
        let registry = StyleRegistry::build(&doc, &mut encoder).unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(encoder.count(|c| matches!(c, Call::CreateStyle(_))), 2);

        let bold = StyleDescriptor::new().bold(true);
        let red = StyleDescriptor::new().background_color(Color::RED);
        assert_eq!(registry.handle_for(&bold), Some(StyleId(0)));
        assert_eq!(registry.handle_for(&red), Some(StyleId(1)));
        assert_eq!(registry.handle_for(&StyleDescriptor::new()), None);
    }

    #[test]
    fn test_empty_document() {
        let doc = DocumentDescriptor::new();
        let mut encoder = RecordingEncoder::default();
        let registry = StyleRegistry::build(&doc, &mut encoder).unwrap();
        assert!(registry.is_empty());
        assert!(encoder.calls.is_empty());
    }

    #[test]
    fn test_materializes_only_present_fields() {
        let mut doc = DocumentDescriptor::new();
        doc.add_sheet("S").add_row().push(
            CellDescriptor::text("t")
                .with_background(Color::YELLOW)
                .border_top()
                .with_border(BorderSide::Right, BorderKind::Dashed)
                .with_font_size(14)
                .with_alignment(HorizontalAlignment::Right)
                .with_builtin_data_format(DataFormat::ID_PERCENT_INT),
        );

        let mut encoder = RecordingEncoder::default();
        StyleRegistry::build(&doc, &mut encoder).unwrap();

        let id = StyleId(0);
        assert_eq!(
            encoder.calls,
            vec![
                Call::CreateStyle(id),
                Call::StyleFill(id, Color::YELLOW),
                Call::StyleBorder(id, BorderSide::Top, BorderKind::Thin),
                Call::StyleBorder(id, BorderSide::Right, BorderKind::Dashed),
                Call::StyleFont(id, FontSpec::new(false).with_size(14)),
                Call::StyleAlignment(id, HorizontalAlignment::Right),
                Call::StyleDataFormat(id, DataFormat::BuiltIn(9)),
            ]
        );
    }

    #[test]
    fn test_plain_style_gets_bare_record() {
        let mut doc = DocumentDescriptor::new();
        doc.add_sheet("S").add_row().push(CellDescriptor::blank());

        let mut encoder = RecordingEncoder::default();
        let registry = StyleRegistry::build(&doc, &mut encoder).unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(encoder.calls, vec![Call::CreateStyle(StyleId(0))]);
    }
}
