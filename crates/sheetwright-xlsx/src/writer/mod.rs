//! XLSX package writer

mod comments;
mod worksheet;

use std::io::{Seek, Write};

use chrono::{SecondsFormat, Utc};
use quick_xml::escape::escape;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::error::XlsxResult;
use crate::model::SheetModel;
use crate::settings::XlsxSettings;
use crate::styles::XlsxStyleTable;

const REL_OFFICE_DOCUMENT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
const REL_CORE_PROPERTIES: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
const REL_EXTENDED_PROPERTIES: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties";
const REL_WORKSHEET: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet";
const REL_STYLES: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";

/// Writes the parts of an XLSX package into a ZIP archive
pub(crate) struct XlsxWriter;

impl XlsxWriter {
    pub(crate) fn write<W: Write + Seek>(
        sheets: &[SheetModel],
        styles: &XlsxStyleTable,
        settings: &XlsxSettings,
        writer: W,
    ) -> XlsxResult<()> {
        let mut zip = ZipWriter::new(writer);

        // Determine which sheets have comments
        let sheets_with_comments: Vec<usize> = sheets
            .iter()
            .enumerate()
            .filter(|(_, sheet)| !sheet.comments.is_empty())
            .map(|(i, _)| i)
            .collect();

        Self::write_content_types(&mut zip, sheets.len(), &sheets_with_comments)?;
        Self::write_root_rels(&mut zip)?;
        Self::write_doc_props(&mut zip, sheets, settings)?;
        Self::write_workbook_xml(&mut zip, sheets)?;
        Self::write_workbook_rels(&mut zip, sheets.len())?;

        Self::start_part(&mut zip, "xl/styles.xml")?;
        zip.write_all(styles.to_styles_xml(settings).as_bytes())?;

        // VML shape id blocks are numbered across the whole workbook
        let mut next_shape_block = 1;

        for (i, sheet) in sheets.iter().enumerate() {
            let number = i + 1;
            let rels = worksheet::SheetRels::for_sheet(sheet);

            Self::start_part(&mut zip, &format!("xl/worksheets/sheet{}.xml", number))?;
            zip.write_all(worksheet::worksheet_xml(sheet, &rels).as_bytes())?;

            if !rels.is_empty() {
                Self::start_part(
                    &mut zip,
                    &format!("xl/worksheets/_rels/sheet{}.xml.rels", number),
                )?;
                zip.write_all(rels.to_xml(number).as_bytes())?;
            }

            if !sheet.comments.is_empty() {
                Self::start_part(&mut zip, &format!("xl/comments{}.xml", number))?;
                zip.write_all(comments::comments_xml(sheet, settings).as_bytes())?;

                Self::start_part(&mut zip, &format!("xl/drawings/vmlDrawing{}.vml", number))?;
                zip.write_all(comments::vml_drawing_xml(sheet, next_shape_block).as_bytes())?;
                next_shape_block += comments::shape_blocks(sheet);
            }

            log::trace!(
                "wrote sheet{}.xml '{}': {} rows, {} merged, {} hyperlinks, {} comments",
                number,
                sheet.name,
                sheet.rows.len(),
                sheet.merged.len(),
                sheet.hyperlinks.len(),
                sheet.comments.len()
            );
        }

        zip.finish()?;
        log::debug!(
            "wrote XLSX package: {} sheet(s), {} style record(s)",
            sheets.len(),
            styles.len()
        );
        Ok(())
    }

    fn start_part<W: Write + Seek>(zip: &mut ZipWriter<W>, name: &str) -> XlsxResult<()> {
        zip.start_file(name, SimpleFileOptions::default())?;
        Ok(())
    }

    fn write_content_types<W: Write + Seek>(
        zip: &mut ZipWriter<W>,
        sheet_count: usize,
        sheets_with_comments: &[usize],
    ) -> XlsxResult<()> {
        Self::start_part(zip, "[Content_Types].xml")?;

        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
    <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
    <Default Extension="xml" ContentType="application/xml"/>"#,
        );

        if !sheets_with_comments.is_empty() {
            content.push_str(
                r#"
    <Default Extension="vml" ContentType="application/vnd.openxmlformats-officedocument.vmlDrawing"/>"#,
            );
        }

        content.push_str(
            r#"
    <Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
    <Override PartName="/xl/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"/>
    <Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>
    <Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>"#,
        );

        for i in 0..sheet_count {
            content.push_str(&format!(
                r#"
    <Override PartName="/xl/worksheets/sheet{}.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#,
                i + 1
            ));
        }

        for &i in sheets_with_comments {
            content.push_str(&format!(
                r#"
    <Override PartName="/xl/comments{}.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.comments+xml"/>"#,
                i + 1
            ));
        }

        content.push_str("\n</Types>");

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_root_rels<W: Write + Seek>(zip: &mut ZipWriter<W>) -> XlsxResult<()> {
        Self::start_part(zip, "_rels/.rels")?;

        let content = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="{}" Target="xl/workbook.xml"/>
    <Relationship Id="rId2" Type="{}" Target="docProps/core.xml"/>
    <Relationship Id="rId3" Type="{}" Target="docProps/app.xml"/>
</Relationships>"#,
            REL_OFFICE_DOCUMENT, REL_CORE_PROPERTIES, REL_EXTENDED_PROPERTIES
        );

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_doc_props<W: Write + Seek>(
        zip: &mut ZipWriter<W>,
        sheets: &[SheetModel],
        settings: &XlsxSettings,
    ) -> XlsxResult<()> {
        let created = settings
            .created
            .unwrap_or_else(Utc::now)
            .to_rfc3339_opts(SecondsFormat::Secs, true);
        let creator = escape(settings.creator.as_str());

        Self::start_part(zip, "docProps/core.xml")?;
        let core = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
    <dc:creator>{creator}</dc:creator>
    <cp:lastModifiedBy>{creator}</cp:lastModifiedBy>
    <dcterms:created xsi:type="dcterms:W3CDTF">{created}</dcterms:created>
    <dcterms:modified xsi:type="dcterms:W3CDTF">{created}</dcterms:modified>
</cp:coreProperties>"#
        );
        zip.write_all(core.as_bytes())?;

        Self::start_part(zip, "docProps/app.xml")?;
        let mut titles = String::new();
        for sheet in sheets {
            titles.push_str(&format!(
                "\n            <vt:lpstr>{}</vt:lpstr>",
                escape(sheet.name.as_str())
            ));
        }
        let app = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">
    <Application>sheetwright</Application>
    <TitlesOfParts>
        <vt:vector size="{}" baseType="lpstr">{}
        </vt:vector>
    </TitlesOfParts>
</Properties>"#,
            sheets.len(),
            titles
        );
        zip.write_all(app.as_bytes())?;
        Ok(())
    }

    fn write_workbook_xml<W: Write + Seek>(
        zip: &mut ZipWriter<W>,
        sheets: &[SheetModel],
    ) -> XlsxResult<()> {
        Self::start_part(zip, "xl/workbook.xml")?;

        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
    <sheets>"#,
        );

        for (i, sheet) in sheets.iter().enumerate() {
            content.push_str(&format!(
                r#"
        <sheet name="{}" sheetId="{}" r:id="rId{}"/>"#,
                escape(sheet.name.as_str()),
                i + 1,
                i + 1
            ));
        }

        content.push_str(
            r#"
    </sheets>
</workbook>"#,
        );

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_workbook_rels<W: Write + Seek>(
        zip: &mut ZipWriter<W>,
        sheet_count: usize,
    ) -> XlsxResult<()> {
        Self::start_part(zip, "xl/_rels/workbook.xml.rels")?;

        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );

        for i in 0..sheet_count {
            content.push_str(&format!(
                r#"
    <Relationship Id="rId{}" Type="{}" Target="worksheets/sheet{}.xml"/>"#,
                i + 1,
                REL_WORKSHEET,
                i + 1
            ));
        }

        // Styles relationship
        content.push_str(&format!(
            r#"
    <Relationship Id="rId{}" Type="{}" Target="styles.xml"/>"#,
            sheet_count + 1,
            REL_STYLES
        ));

        content.push_str("\n</Relationships>");

        zip.write_all(content.as_bytes())?;
        Ok(())
    }
}
