//! Compilation of a descriptor tree into an encoder
//!
//! The compiler walks a [`DocumentDescriptor`] once per pass:
//!
//! 1. The [`StyleRegistry`] creates one style record per distinct style.
//! 2. Each sheet, row and cell is created in document order. Cells are
//!    placed left to right, each one starting after the columns covered by
//!    the cells before it; rows are numbered 0, 1, 2, ... regardless of the
//!    row spans they contain.
//! 3. Spanning cells register a merged region, and cells with a non-blank
//!    comment get a comment box anchored next to them.

mod registry;

#[cfg(test)]
pub(crate) mod recording;

pub use registry::StyleRegistry;

use crate::cell::{CellAddress, CellDescriptor, CellRange, CellValue};
use crate::document::DocumentDescriptor;
use crate::encoder::{CommentAnchor, SheetId, SpreadsheetEncoder};
use crate::error::{Error, Result};
use crate::sheet::SheetDescriptor;
use crate::{MAX_COLS, MAX_ROWS};

/// Size of the box a comment is drawn in, counted past the cell itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnchorSize {
    /// Extra columns to the right of the cell
    pub columns: u16,
    /// Extra rows below the cell
    pub rows: u32,
}

impl Default for AnchorSize {
    fn default() -> Self {
        Self { columns: 3, rows: 4 }
    }
}

/// Compile options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CompileOptions {
    /// Comment box size
    pub comment_anchor: AnchorSize,
}

/// Counts gathered during a compile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompileReport {
    /// Sheets created
    pub sheets: usize,
    /// Rows created
    pub rows: usize,
    /// Cells created
    pub cells: usize,
    /// Style records created
    pub styles: usize,
    /// Merged regions registered
    pub merged_regions: usize,
    /// Comments attached
    pub comments: usize,
}

/// Drives a [`SpreadsheetEncoder`] from a [`DocumentDescriptor`]
///
/// ```
/// use sheetwright_core::{CellDescriptor, Compiler, DocumentDescriptor, SpreadsheetEncoder};
///
/// fn build<E: SpreadsheetEncoder>(encoder: &mut E) -> sheetwright_core::Result<()> {
///     let mut doc = DocumentDescriptor::new();
///     doc.add_sheet("Report")
///         .add_row()
///         .push(CellDescriptor::text("Title").title().with_column_span(4));
///
///     let report = Compiler::new(encoder).compile(&doc)?;
///     assert_eq!(report.merged_regions, 1);
///     Ok(())
/// }
/// ```
pub struct Compiler<'e, E: SpreadsheetEncoder> {
    encoder: &'e mut E,
    options: CompileOptions,
}

impl<'e, E: SpreadsheetEncoder> Compiler<'e, E> {
    /// Create a compiler writing into `encoder`
    pub fn new(encoder: &'e mut E) -> Self {
        Self {
            encoder,
            options: CompileOptions::default(),
        }
    }

    /// Replace the options
    pub fn with_options(mut self, options: CompileOptions) -> Self {
        self.options = options;
        self
    }

    /// Compile a whole document
    ///
    /// The first failing encoder call aborts the compile; the encoder is then
    /// left holding a partial document and should be dropped.
    pub fn compile(&mut self, doc: &DocumentDescriptor) -> Result<CompileReport> {
        let registry = StyleRegistry::build(doc, &mut *self.encoder)?;

        let mut report = CompileReport {
            styles: registry.len(),
            ..CompileReport::default()
        };

        for sheet in doc.sheets() {
            self.compile_sheet(sheet, &registry, &mut report)?;
        }

        log::debug!(
            "compiled {} sheet(s): {} rows, {} cells, {} style records, {} merged regions, {} comments",
            report.sheets,
            report.rows,
            report.cells,
            report.styles,
            report.merged_regions,
            report.comments
        );

        Ok(report)
    }

    fn compile_sheet(
        &mut self,
        sheet: &SheetDescriptor,
        registry: &StyleRegistry<'_>,
        report: &mut CompileReport,
    ) -> Result<()> {
        let id = self.encoder.create_sheet(&sheet.name)?;
        log::trace!("sheet '{}' created as {}", sheet.name, id);
        report.sheets += 1;

        let mut merged: Vec<CellRange> = Vec::new();

        for (index, row) in sheet.rows.iter().enumerate() {
            if index as u64 >= MAX_ROWS as u64 {
                return Err(Error::logic(format!(
                    "sheet '{}' has more than {} rows",
                    sheet.name, MAX_ROWS
                )));
            }
            let row_index = index as u32;
            self.encoder.create_row(id, row_index)?;
            report.rows += 1;

            let mut col: u64 = 0;
            for cell in &row.cells {
                let addr = CellAddress::checked(row_index as u64, col)?;
                self.compile_cell(id, addr, cell, registry, report)?;

                if cell.is_merged() {
                    let range = merged_range(addr, cell)?;
                    if let Some(existing) = merged.iter().find(|r| r.overlaps(&range)) {
                        return Err(Error::logic(format!(
                            "merged region {} overlaps {} on sheet '{}'",
                            range, existing, sheet.name
                        )));
                    }
                    self.encoder.add_merged_region(id, range)?;
                    merged.push(range);
                    report.merged_regions += 1;
                }

                col += cell.effective_column_span() as u64;
            }
        }

        Ok(())
    }

    fn compile_cell(
        &mut self,
        sheet: SheetId,
        addr: CellAddress,
        cell: &CellDescriptor,
        registry: &StyleRegistry<'_>,
        report: &mut CompileReport,
    ) -> Result<()> {
        self.encoder.create_cell(sheet, addr)?;
        report.cells += 1;

        let style = registry
            .handle_for(&cell.style)
            .ok_or_else(|| Error::logic(format!("no style record for cell {}", addr)))?;
        self.encoder.set_cell_style(sheet, addr, style)?;

        match &cell.value {
            CellValue::Text(text) => self.encoder.set_cell_text(sheet, addr, text)?,
            CellValue::Number(n) => self.encoder.set_cell_number(sheet, addr, n.to_f64())?,
            CellValue::Blank => self.encoder.set_cell_text(sheet, addr, "")?,
        }

        if let Some(formula) = &cell.formula {
            self.encoder.set_cell_formula(sheet, addr, formula)?;
        }
        if let Some(target) = &cell.hyperlink {
            self.encoder.set_cell_hyperlink(sheet, addr, target)?;
        }

        match cell.visible_comment() {
            Some(text) => {
                let anchor = comment_anchor(addr, self.options.comment_anchor);
                self.encoder.add_comment(sheet, addr, anchor, text)?;
                report.comments += 1;
            }
            None if cell.comment.is_some() => {
                log::warn!("skipping blank comment on cell {}", addr);
            }
            None => {}
        }

        Ok(())
    }
}

/// Rectangle covered by a spanning cell
fn merged_range(addr: CellAddress, cell: &CellDescriptor) -> Result<CellRange> {
    let last_row = addr.row as u64 + cell.effective_row_span() as u64 - 1;
    let last_col = addr.col as u64 + cell.effective_column_span() as u64 - 1;
    let end = CellAddress::checked(last_row, last_col)?;
    Ok(CellRange::new(addr, end))
}

/// Comment box to the right of and below the cell, cut off at the grid edge
fn comment_anchor(addr: CellAddress, size: AnchorSize) -> CommentAnchor {
    CommentAnchor {
        first_col: addr.col,
        first_row: addr.row,
        last_col: addr.col.saturating_add(size.columns).min(MAX_COLS - 1),
        last_row: addr.row.saturating_add(size.rows).min(MAX_ROWS - 1),
    }
}

#[cfg(test)]
mod tests {
    use super::recording::{Call, RecordingEncoder};
    use super::*;
    use crate::encoder::StyleId;
    use crate::style::Color;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn compile(doc: &DocumentDescriptor) -> (RecordingEncoder, CompileReport) {
        let mut encoder = RecordingEncoder::default();
        let report = Compiler::new(&mut encoder).compile(doc).unwrap();
        (encoder, report)
    }

    fn single_row(cells: Vec<CellDescriptor>) -> DocumentDescriptor {
        let mut doc = DocumentDescriptor::new();
        doc.add_sheet("Sheet1").add_row().extend(cells);
        doc
    }

    #[test]
    fn test_column_spans_shift_cursor() {
        let doc = single_row(vec![
            CellDescriptor::text("a").with_column_span(2),
            CellDescriptor::text("b").with_column_span(1),
            CellDescriptor::text("c").with_column_span(3),
        ]);
        let (encoder, report) = compile(&doc);

        let cols: Vec<u16> = encoder.cell_addresses().iter().map(|a| a.col).collect();
        assert_eq!(cols, vec![0, 2, 3]);
        assert_eq!(
            encoder.merges(),
            vec![
                CellRange::from_indices(0, 0, 0, 1),
                CellRange::from_indices(0, 3, 0, 5),
            ]
        );
        assert_eq!(report.merged_regions, 2);
    }

    #[test]
    fn test_zero_span_is_single_cell() {
        let doc = single_row(vec![
            CellDescriptor::text("a").with_column_span(0).with_row_span(0),
            CellDescriptor::text("b"),
        ]);
        let (encoder, _) = compile(&doc);

        let cols: Vec<u16> = encoder.cell_addresses().iter().map(|a| a.col).collect();
        assert_eq!(cols, vec![0, 1]);
        assert!(encoder.merges().is_empty());
    }

    #[test]
    fn test_row_span_merges_down_but_rows_advance_by_one() {
        let mut doc = DocumentDescriptor::new();
        let sheet = doc.add_sheet("S");
        sheet
            .add_row()
            .push(CellDescriptor::text("tall").with_row_span(3))
            .push(CellDescriptor::text("x"));
        sheet.add_row().push(CellDescriptor::blank());
        sheet.add_row();
        sheet
            .add_row()
            .push(CellDescriptor::text("y"))
            .push(CellDescriptor::text("z"));

        let (encoder, report) = compile(&doc);
        assert_eq!(encoder.rows(), vec![0, 1, 2, 3]);
        assert_eq!(report.rows, 4);
        assert_eq!(encoder.merges(), vec![CellRange::from_indices(0, 0, 2, 0)]);
        assert_eq!(
            encoder.cell_addresses(),
            vec![
                CellAddress::new(0, 0),
                CellAddress::new(0, 1),
                CellAddress::new(1, 0),
                CellAddress::new(3, 0),
                CellAddress::new(3, 1),
            ]
        );
    }

    #[test]
    fn test_comment_anchor() {
        let mut doc = DocumentDescriptor::new();
        let sheet = doc.add_sheet("S");
        sheet.add_row();
        sheet.add_row();
        sheet
            .add_row()
            .push(CellDescriptor::blank())
            .push(CellDescriptor::text("noted").with_comment("check this"));

        let (encoder, report) = compile(&doc);
        let comments: Vec<_> = encoder
            .calls
            .iter()
            .filter_map(|c| match c {
                Call::Comment(_, addr, anchor, text) => Some((*addr, *anchor, text.clone())),
                _ => None,
            })
            .collect();

        assert_eq!(
            comments,
            vec![(
                CellAddress::new(2, 1),
                CommentAnchor {
                    first_col: 1,
                    first_row: 2,
                    last_col: 4,
                    last_row: 6,
                },
                "check this".to_string()
            )]
        );
        assert_eq!(report.comments, 1);
    }

    #[test]
    fn test_custom_anchor_size() {
        let doc = single_row(vec![CellDescriptor::text("x").with_comment("c")]);
        let mut encoder = RecordingEncoder::default();
        Compiler::new(&mut encoder)
            .with_options(CompileOptions {
                comment_anchor: AnchorSize { columns: 1, rows: 1 },
            })
            .compile(&doc)
            .unwrap();

        assert!(encoder.calls.iter().any(|c| matches!(
            c,
            Call::Comment(_, _, CommentAnchor { last_col: 1, last_row: 1, .. }, _)
        )));
    }

    #[test]
    fn test_blank_comment_is_skipped() {
        let doc = single_row(vec![
            CellDescriptor::text("a").with_comment(""),
            CellDescriptor::text("b").with_comment("   "),
        ]);
        let (encoder, report) = compile(&doc);
        assert_eq!(report.comments, 0);
        assert_eq!(encoder.count(|c| matches!(c, Call::Comment(..))), 0);
    }

    #[test]
    fn test_blank_value_is_empty_text() {
        let doc = single_row(vec![CellDescriptor::blank()]);
        let (encoder, _) = compile(&doc);
        assert!(encoder
            .calls
            .contains(&Call::CellText(SheetId(0), CellAddress::new(0, 0), String::new())));
    }

    #[test]
    fn test_call_order_for_one_cell() {
        let doc = single_row(vec![CellDescriptor::number(5)
            .with_formula("=2+3")
            .with_hyperlink("https://example.com")]);
        let (encoder, _) = compile(&doc);

        let sheet = SheetId(0);
        let a1 = CellAddress::new(0, 0);
        assert_eq!(
            encoder.calls,
            vec![
                Call::CreateStyle(StyleId(0)),
                Call::CreateSheet(sheet, "Sheet1".to_string()),
                Call::CreateRow(sheet, 0),
                Call::CreateCell(sheet, a1),
                Call::CellStyle(sheet, a1, StyleId(0)),
                Call::CellNumber(sheet, a1, 5.0),
                Call::CellFormula(sheet, a1, "=2+3".to_string()),
                Call::CellHyperlink(sheet, a1, "https://example.com".to_string()),
            ]
        );
    }

    #[test]
    fn test_shared_styles_across_sheets() {
        let mut doc = DocumentDescriptor::new();
        doc.add_sheet("One")
            .add_row()
            .push(CellDescriptor::text("a").header())
            .push(CellDescriptor::text("b").header());
        doc.add_sheet("Two")
            .add_row()
            .push(CellDescriptor::text("c").header())
            .push(CellDescriptor::text("d").header().with_background(Color::RED));

        let (encoder, report) = compile(&doc);
        assert_eq!(report.styles, 2);
        assert_eq!(encoder.count(|c| matches!(c, Call::CreateStyle(_))), 2);
        assert_eq!(report.sheets, 2);
        assert_eq!(report.cells, 4);
    }

    #[test]
    fn test_two_sheets_share_third_differs() {
        let mut doc = DocumentDescriptor::new();
        for name in ["One", "Two"] {
            doc.add_sheet(name)
                .add_row()
                .push(CellDescriptor::text("x").subtitle().border_all());
        }
        doc.add_sheet("Three")
            .add_row()
            .push(CellDescriptor::text("y").border_all().with_background(Color::ORANGE));

        let (encoder, report) = compile(&doc);
        assert_eq!(report.sheets, 3);
        assert_eq!(report.styles, 2);
        assert_eq!(encoder.count(|c| matches!(c, Call::CreateStyle(_))), 2);

        let styles: Vec<StyleId> = encoder
            .calls
            .iter()
            .filter_map(|c| match c {
                Call::CellStyle(_, _, id) => Some(*id),
                _ => None,
            })
            .collect();
        assert_eq!(styles, vec![StyleId(0), StyleId(0), StyleId(1)]);
    }

    #[test]
    fn test_compile_is_deterministic() {
        let mut doc = DocumentDescriptor::new();
        let sheet = doc.add_sheet("S");
        sheet
            .add_row()
            .push(CellDescriptor::text("t").title().with_column_span(3))
            .push(CellDescriptor::number(1.5).currency().with_comment("n"));
        sheet
            .add_row()
            .push(CellDescriptor::text("x").subtitle())
            .push(CellDescriptor::number(2).totalizer());

        let (first, _) = compile(&doc);
        let (second, _) = compile(&doc);
        assert_eq!(first.calls, second.calls);
    }

    #[test]
    fn test_overlapping_merges_fail() {
        let mut doc = DocumentDescriptor::new();
        let sheet = doc.add_sheet("S");
        sheet.add_row().push(CellDescriptor::text("a").with_row_span(2));
        sheet.add_row().push(CellDescriptor::text("b").with_column_span(2));

        let mut encoder = RecordingEncoder::default();
        let err = Compiler::new(&mut encoder).compile(&doc).unwrap_err();
        assert!(err.is_logic_violation());
        assert!(err.to_string().contains("overlaps"));
    }

    #[test]
    fn test_merges_on_different_sheets_do_not_conflict() {
        let mut doc = DocumentDescriptor::new();
        doc.add_sheet("A")
            .add_row()
            .push(CellDescriptor::text("a").with_column_span(2));
        doc.add_sheet("B")
            .add_row()
            .push(CellDescriptor::text("b").with_column_span(2));

        let (_, report) = compile(&doc);
        assert_eq!(report.merged_regions, 2);
    }

    #[test]
    fn test_span_beyond_grid_fails() {
        let doc = single_row(vec![CellDescriptor::text("wide").with_column_span(16_385)]);
        let mut encoder = RecordingEncoder::default();
        let err = Compiler::new(&mut encoder).compile(&doc).unwrap_err();
        assert!(err.is_logic_violation());
    }

    #[test]
    fn test_cursor_beyond_grid_fails() {
        let doc = single_row(vec![
            CellDescriptor::text("a").with_column_span(16_384),
            CellDescriptor::text("b"),
        ]);
        let mut encoder = RecordingEncoder::default();
        let err = Compiler::new(&mut encoder).compile(&doc).unwrap_err();
        assert!(err.is_logic_violation());
    }

    #[test]
    fn test_anchor_stops_at_grid_edge() {
        let anchor = comment_anchor(CellAddress::new(1_048_574, 16_382), AnchorSize::default());
        assert_eq!(anchor.last_col, 16_383);
        assert_eq!(anchor.last_row, 1_048_575);
    }

    #[test]
    fn test_encoder_error_passes_through() {
        let mut doc = DocumentDescriptor::new();
        doc.add_sheet("ok");
        doc.add_sheet("bad");

        let mut encoder = RecordingEncoder::rejecting("bad");
        let err = Compiler::new(&mut encoder).compile(&doc).unwrap_err();
        assert!(err.is_encoding());
    }

    proptest! {
        #[test]
        fn prop_cursor_and_merges(spans in proptest::collection::vec(0u32..6, 0..20)) {
            let doc = single_row(
                spans.iter().map(|&s| CellDescriptor::blank().with_column_span(s)).collect(),
            );
            let (encoder, report) = compile(&doc);

            let mut expected_col = 0u16;
            let mut expected_merges = Vec::new();
            for &span in &spans {
                let width = span.max(1) as u16;
                if width > 1 {
                    let last = expected_col + width - 1;
                    expected_merges.push(CellRange::from_indices(0, expected_col, 0, last));
                }
                expected_col += width;
            }

            let cols: Vec<u16> = encoder.cell_addresses().iter().map(|a| a.col).collect();
            let mut cursor = 0u16;
            let expected_cols: Vec<u16> = spans
                .iter()
                .map(|&s| {
                    let c = cursor;
                    cursor += s.max(1) as u16;
                    c
                })
                .collect();

            prop_assert_eq!(cols, expected_cols);
            prop_assert_eq!(encoder.merges(), expected_merges);
            prop_assert_eq!(report.cells, spans.len());
        }
    }
}
