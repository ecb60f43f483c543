//! Display surface abstraction
//!
//! A turn-based conversational UI consumes three renderable primitives - a
//! markdown/text block, a tabular block, and a bulleted list - plus a
//! persistent About panel and a few note styles. The CLI implements this
//! against the terminal; tests record the calls.

use crate::sanitize::Table;

/// The primitives a display surface must render
pub trait Surface {
    /// Render a markdown/text block
    fn markdown(&mut self, text: &str);

    /// Render a section heading
    fn heading(&mut self, text: &str);

    /// Render a parsed table
    fn table(&mut self, table: &Table);

    /// Render a bulleted list
    fn bullets(&mut self, items: &[String]);

    /// Render an informational note
    fn info(&mut self, text: &str);

    /// Render a warning note
    fn warning(&mut self, text: &str);

    /// Render an error message
    fn error(&mut self, text: &str);

    /// Render the persistent About panel
    fn about(&mut self, text: &str);
}
