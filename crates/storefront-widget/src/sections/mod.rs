//! Section renderers.
//!
//! Each renderer is a pure function from state to markup. Names are stored
//! unescaped and escaped here, at the point they enter HTML.

mod cart_panel;
mod footer;
mod quick_view;

pub use cart_panel::{render_cart, render_cart_items, CartView};
pub use footer::{current_year, render_footer_year};
pub use quick_view::render_quick_view;

/// Escape text for HTML content and attribute values.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#039;Jerry&#039;&lt;/b&gt;"
        );
        assert_eq!(html_escape("Air Classic"), "Air Classic");
    }
}
