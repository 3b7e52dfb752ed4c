//! Example: Build a small sales report and save it as an xlsx file

use sheetwright::prelude::*;

fn main() -> Result<()> {
    let regions = [("North", 120, 1520.5), ("South", 80, 990.25), ("West", 45, 610.0)];

    let mut doc = DocumentDescriptor::new();
    let sheet = doc.add_sheet("Sales");

    // Title spanning the whole table
    sheet
        .add_row()
        .push(CellDescriptor::text("Quarterly sales").title().with_column_span(3));
    sheet
        .add_row()
        .push(CellDescriptor::text("Region").header())
        .push(CellDescriptor::text("Units").header())
        .push(CellDescriptor::text("Revenue").header());

    for (region, units, revenue) in regions {
        sheet
            .add_row()
            .push(CellDescriptor::text(region))
            .push(CellDescriptor::number(units))
            .push(CellDescriptor::number(revenue).currency());
    }

    let last = regions.len() + 2;
    sheet
        .add_row()
        .push(CellDescriptor::text("Total").totalizer())
        .push(
            CellDescriptor::blank()
                .totalizer()
                .with_formula(format!("=SUM(B3:B{})", last)),
        )
        .push(
            CellDescriptor::blank()
                .totalizer()
                .currency()
                .with_formula(format!("=SUM(C3:C{})", last))
                .with_comment("Revenue before returns"),
        );

    let path = std::env::temp_dir().join("sales_report.xlsx");
    let report = doc.save(&path)?;
    println!(
        "Created {} ({} cells, {} style records, {} merged regions)",
        path.display(),
        report.cells,
        report.styles,
        report.merged_regions
    );

    Ok(())
}
