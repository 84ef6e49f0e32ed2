use super::*;

mod dom;
pub(crate) mod form_controls;
mod html;

pub(crate) fn parse_html(html: &str) -> Result<Dom> {
    html::parse_html(html)
}
