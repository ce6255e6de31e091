use chrono::{DateTime, Local};

use crate::builder::page::Page;

const FOOTER_DATE_FORMAT: &str = "%-d %b %Y %H:%M:%S";

/// Footer line closing every generated page
pub fn footer(generated_at: &DateTime<Local>) -> String {
    format!(
        "<sup><sub>generated {} by <a href='{}'>{}</a></sub></sup>\n",
        generated_at.format(FOOTER_DATE_FORMAT),
        env!("CARGO_PKG_REPOSITORY"),
        env!("CARGO_PKG_NAME"),
    )
}

/// Bulleted list of page links, skipping non-content pages.
///
/// A blank line opens each run of pages created in the same month.
pub fn pages_to_list<'p, I>(pages: I) -> String
where
    I: IntoIterator<Item = &'p Page>,
{
    let mut content = String::new();
    let mut prev_month: Option<u32> = None;

    for page in pages {
        if !page.is_content_page() {
            continue;
        }

        let month = page.created_month();
        if month != prev_month {
            content.push('\n');
        }

        content.push_str(&format!("* {}\n", page.link()));

        prev_month = month;
    }

    content
}
