//! Output formatting for CLI results

use std::path::Path;

use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;

pub mod html;
pub mod json;
pub mod table;

/// Page title used for generic HTML listings
const LISTING_TITLE: &str = "GovData Dashboard";

/// Trait for types that can be formatted for output
pub trait Formattable {
    /// Format the data according to the specified format
    fn format(&self, format: OutputFormat) -> Result<String>;

    /// Format and print to stdout
    fn print(&self, format: OutputFormat) -> Result<()> {
        println!("{}", self.format(format)?);
        Ok(())
    }
}

impl<T: Tabled + Serialize> Formattable for Vec<T> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Pretty | OutputFormat::Table => Ok(table::format_table(self)),
            OutputFormat::Json => Ok(json::format_json(self)?),
            OutputFormat::Html => Ok(html::render_page(
                LISTING_TITLE,
                &html::format_html_table(self),
            )),
        }
    }
}

/// Write formatted output to a file, or stdout when no path is given
pub fn emit<T: Formattable + ?Sized>(data: &T, format: OutputFormat, path: Option<&Path>) -> Result<()> {
    emit_text(&data.format(format)?, path)
}

/// Write already rendered text to a file, or stdout when no path is given
pub fn emit_text(text: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, format!("{}\n", text))?;
            log::info!("Wrote output to {}", path.display());
        }
        None => println!("{}", text),
    }
    Ok(())
}
