//! Table of contents accumulated over a run and written to `index.html`.

use crate::html::escape;

pub const INDEX_FILE: &str = "index.html";

/// A linked song: title and file name relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub file_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub pages: Vec<Page>,
}

/// Groups pages under the `{section}` that preceded them.
///
/// Pages registered while no section is active are dropped when the group closes,
/// unless a default section name is configured.
#[derive(Debug, Clone, Default)]
pub struct TableOfContents {
    sections: Vec<Section>,
    current: Option<String>,
    pages: Vec<Page>,
    default_section: Option<String>,
}

impl TableOfContents {
    pub fn new(default_section: Option<String>) -> Self {
        Self {
            default_section,
            ..Self::default()
        }
    }

    pub fn add_page(&mut self, title: impl Into<String>, file_name: impl Into<String>) {
        self.pages.push(Page {
            title: title.into(),
            file_name: file_name.into(),
        });
    }

    /// Close the current group and open `name`.
    pub fn start_section(&mut self, name: impl Into<String>) {
        self.close_section();
        self.current = Some(name.into());
    }

    /// Close the current group. Empty groups are not kept.
    pub fn close_section(&mut self) {
        let pages = std::mem::take(&mut self.pages);
        if pages.is_empty() {
            return;
        }
        let name = self
            .current
            .clone()
            .filter(|name| !name.is_empty())
            .or_else(|| self.default_section.clone());
        if let Some(name) = name {
            self.sections.push(Section { name, pages });
        }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Render the index page: sections sorted by name, pages sorted by title.
    pub fn to_html(&self, heading: &str) -> String {
        let heading = escape(heading);
        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n");
        html.push_str("<HTML>\n");
        html.push_str("  <HEAD>\n");
        html.push_str(&format!("    <TITLE>{}</TITLE>\n", heading));
        html.push_str("  </HEAD>\n");
        html.push_str("  <BODY>\n");
        html.push_str(&format!("    <CENTER><H1>{}</H1></CENTER>\n", heading));
        html.push_str("    <OL>\n");

        let mut sections: Vec<&Section> = self.sections.iter().collect();
        sections.sort_by(|a, b| a.name.cmp(&b.name));
        for section in sections {
            html.push_str(&format!("<LI>{}</LI><UL>\n", escape(&section.name)));
            let mut pages: Vec<&Page> = section.pages.iter().collect();
            pages.sort_by(|a, b| a.title.cmp(&b.title));
            for page in pages {
                html.push_str(&format!(
                    "<LI><A href='{}'>{}</A></LI>\n",
                    escape(&page.file_name),
                    escape(&page.title)
                ));
            }
            html.push_str("</UL>\n");
        }

        html.push_str("    </OL>\n");
        html.push_str("  </BODY>\n");
        html.push_str("</HTML>\n");
        html
    }
}
