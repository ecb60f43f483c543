//! Terminal rendering of the display primitives

use chat_stock::{Surface, Table};
use comfy_table::presets::UTF8_FULL;

/// Renders the display primitives to stdout
pub struct CliSurface;

impl CliSurface {
    /// Create a new CLI surface
    pub fn new() -> Self {
        Self
    }
}

impl Default for CliSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for CliSurface {
    fn markdown(&mut self, text: &str) {
        println!("{text}");
    }

    fn heading(&mut self, text: &str) {
        println!("\n{text}");
        println!("{}", "─".repeat(text.chars().count().max(8)));
    }

    fn table(&mut self, table: &Table) {
        let mut rendered = comfy_table::Table::new();
        rendered.load_preset(UTF8_FULL);
        rendered.set_header(table.headers.clone());
        for row in &table.rows {
            rendered.add_row(row.clone());
        }
        println!("{rendered}");
    }

    fn bullets(&mut self, items: &[String]) {
        for item in items {
            println!("- {item}");
        }
    }

    fn info(&mut self, text: &str) {
        println!("ℹ {text}");
    }

    fn warning(&mut self, text: &str) {
        println!("⚠ {text}");
    }

    fn error(&mut self, text: &str) {
        eprintln!("{text}");
    }

    fn about(&mut self, text: &str) {
        let rule = "─".repeat(40);
        println!("{rule}");
        println!("{text}");
        println!("{rule}");
    }
}
