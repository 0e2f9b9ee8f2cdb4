use crate::domain::cart::CartSummary;
use crate::error::Result;
use std::io::Write;

const COLUMN_WIDTH: usize = 15;

/// Renders a `CartSummary` as a plain-text table followed by the total.
pub struct CartWriter<W: Write> {
    writer: W,
}

impl<W: Write> CartWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_summary(&mut self, summary: &CartSummary) -> Result<()> {
        let name_width = summary
            .lines
            .iter()
            .map(|line| line.name.chars().count())
            .chain(std::iter::once("Name".len()))
            .max()
            .unwrap_or_default();

        writeln!(self.writer, "Items present in the cart:")?;
        writeln!(
            self.writer,
            "{:<name_width$}{:>COLUMN_WIDTH$}{:>COLUMN_WIDTH$}",
            "Name", "Quantity", "Price"
        )?;
        for line in &summary.lines {
            writeln!(
                self.writer,
                "{:<name_width$}{:>COLUMN_WIDTH$}{:>COLUMN_WIDTH$}",
                line.name,
                line.quantity.to_string(),
                line.unit_price.to_string()
            )?;
        }
        writeln!(self.writer, "total cost: ${}", summary.total)?;
        self.writer.flush()?;
        Ok(())
    }
}
