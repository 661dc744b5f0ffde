//! Quick-view modal section.

use super::html_escape;
use crate::state::QuickView;

/// Render the modal body for a quick view.
pub fn render_quick_view(view: &QuickView) -> String {
    format!(
        r#"<div class="modal-content" aria-hidden="false">
    <img class="modal-img" src="{image}" alt="{title}">
    <h3 class="modal-title">{title}</h3>
    <p class="modal-brand">{brand}</p>
    <p class="modal-price">{price}</p>
    <input id="modal-qty" type="number" min="1" value="1">
    <button class="modal-add">Agregar</button>
    <button class="close-modal" aria-label="Cerrar">✖</button>
</div>"#,
        image = html_escape(&view.image_url),
        title = html_escape(&view.name),
        brand = html_escape(&view.brand),
        price = html_escape(&view.price_text),
    )
}
