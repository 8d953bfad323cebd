//! HTML renderer implementation.

use crate::config::RenderConfig;
use crate::error::Result;
use crate::table;

use serde::Serialize;
use tracing::{debug, info};

/// Markup closing the containing div, the body, and the document.
const PAGE_FOOTER: &str = "</div></body></html>";

/// Renders serializable values as bootstrap-styled HTML pages.
///
/// Every operation is a pure function of its input and the immutable
/// configuration; a renderer may be shared freely or rebuilt per call.
pub struct HtmlRenderer {
    config: RenderConfig,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

impl HtmlRenderer {
    /// Create a renderer with the given configuration.
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Get the current configuration.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render a single object as a full HTML page.
    ///
    /// The body is the object's field-by-field table; composite field values
    /// expand into nested tables.
    pub fn render_object<T: Serialize>(&self, object: &T) -> Result<String> {
        debug!("rendering object page");
        let mut out = self.page_header(None);
        out.push_str(&self.render_table(object)?);
        out.push_str(PAGE_FOOTER);
        info!(bytes = out.len(), "page rendered");
        Ok(out)
    }

    /// Render a sequence of objects as a full HTML page.
    ///
    /// Each element gets its own independent table, concatenated in input
    /// order with no separator. An empty sequence yields the bare page shell.
    pub fn render_objects<T: Serialize>(&self, objects: &[T]) -> Result<String> {
        debug!(count = objects.len(), "rendering object sequence page");
        let mut out = self.page_header(None);
        for object in objects {
            out.push_str(&self.render_table(object)?);
        }
        out.push_str(PAGE_FOOTER);
        info!(bytes = out.len(), "page rendered");
        Ok(out)
    }

    /// Wrap a caller-supplied HTML fragment in the page shell.
    ///
    /// A non-blank title renders as a level-1 heading immediately before the
    /// body; a missing, empty, or whitespace-only title is omitted entirely.
    pub fn render_page(&self, html_body: &str, title: Option<&str>) -> String {
        let mut out = self.page_header(title);
        out.push_str(html_body);
        out.push_str(PAGE_FOOTER);
        out
    }

    /// Render one object's table fragment without the page shell.
    ///
    /// This is the building block of [`render_object`](Self::render_object)
    /// and [`render_objects`](Self::render_objects); callers embedding tables
    /// in their own pages use it directly.
    pub fn render_table<T: Serialize>(&self, object: &T) -> Result<String> {
        let value = serde_json::to_value(object)?;
        let label = self.config.use_type_name.then(|| self.type_label::<T>());
        table::value_table(&value, &self.config, label.as_deref())
    }

    fn type_label<T: ?Sized>(&self) -> String {
        let full = std::any::type_name::<T>();
        if self.config.use_short_type_name {
            table::short_type_name(full)
        } else {
            full.to_string()
        }
    }

    /// Fixed page boilerplate, identical every call except the heading.
    fn page_header(&self, heading: Option<&str>) -> String {
        let mut out = String::new();
        out.push_str("<!DOCTYPE html>");
        out.push_str("<html lang=\"en\">");
        out.push_str("<head>");
        out.push_str("<meta charset=\"utf-8\">");
        out.push_str("<meta http-equiv=\"X-UA-Compatible\" content=\"IE=edge\">");
        out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">");
        for sheet in &self.config.assets.stylesheets {
            out.push_str("<link rel=\"stylesheet\" href=\"");
            out.push_str(&sheet.url());
            out.push_str("\">");
        }
        for script in &self.config.assets.scripts {
            out.push_str("<script src=\"");
            out.push_str(&script.url());
            out.push_str("\"></script>");
        }
        out.push_str("</head>");
        out.push_str("<body>");
        out.push_str("<div class=\"container\">");
        if let Some(heading) = heading {
            if !heading.trim().is_empty() {
                out.push_str("<h1>");
                out.push_str(heading);
                out.push_str("</h1>");
            }
        }
        out
    }
}
