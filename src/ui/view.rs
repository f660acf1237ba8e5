//! View state for the interactive session.
//!
//! The list region is always replaced wholesale from the latest server
//! response; nothing here merges new data into old.

use std::time::Instant;

use super::notice::{NoticeBoard, NoticeKind};
use crate::models::Product;

/// Placeholder shown instead of an empty list container.
pub const NO_PRODUCTS: &str = "No products to display.";
/// Transient text shown while a list request is pending.
pub const LOADING: &str = "Loading products...";

/// State of the list region.
#[derive(Debug, Clone)]
pub enum ListView {
    /// A list request is in flight.
    Loading,
    /// Last response, rendered as-is. May be empty.
    Loaded(Vec<Product>),
    /// Last request failed; the list shows an inline error instead.
    Failed(String),
}

/// The editor overlay's fields, populated from a fetched record.
///
/// The price stays a raw string until submit so invalid input can be
/// shown back to the user for correction.
#[derive(Debug, Clone)]
pub struct EditorForm {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: String,
}

impl EditorForm {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone().unwrap_or_default(),
            price: format!("{}", product.price),
        }
    }
}

/// All visual state of the catalog client in one place.
#[derive(Debug)]
pub struct ViewState {
    pub list: ListView,
    /// Active search filter; `Some` also means the clear-filter
    /// affordance is visible.
    pub filter: Option<String>,
    /// The editor overlay; `None` when closed.
    pub editor: Option<EditorForm>,
    pub list_notices: NoticeBoard,
    pub form_notices: NoticeBoard,
    pub editor_notices: NoticeBoard,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            list: ListView::Loaded(Vec::new()),
            filter: None,
            editor: None,
            list_notices: NoticeBoard::default(),
            form_notices: NoticeBoard::default(),
            editor_notices: NoticeBoard::default(),
        }
    }
}

impl ViewState {
    /// Renders the list region as text.
    pub fn render_list(&self) -> String {
        let mut out = String::new();

        if let Some(filter) = &self.filter {
            out.push_str(&format!(
                "Filter: \"{}\"  (type 'clear' to show all)\n\n",
                filter
            ));
        }

        match &self.list {
            ListView::Loading => out.push_str(LOADING),
            ListView::Failed(message) => {
                out.push_str(&format!("Failed to load products: {}", message));
            }
            ListView::Loaded(products) if products.is_empty() => {
                out.push_str(NO_PRODUCTS);
            }
            ListView::Loaded(products) => {
                for product in products {
                    out.push_str(&product.to_string());
                    out.push('\n');
                }
                out.push_str(&format!("\nTotal: {} product(s)", products.len()));
            }
        }

        out
    }

    /// Renders the editor overlay, or nothing when it is closed.
    pub fn render_editor(&self) -> Option<String> {
        let form = self.editor.as_ref()?;
        Some(format!(
            "--- Edit product {} ---\n  name: {}\n  description: {}\n  price: {}",
            form.id, form.name, form.description, form.price
        ))
    }

    /// Collects the notices still visible at `now`, styled by kind.
    pub fn render_notices(&self, now: Instant) -> Vec<String> {
        [
            &self.list_notices,
            &self.form_notices,
            &self.editor_notices,
        ]
        .iter()
        .filter_map(|board| board.current(now))
        .map(|notice| match notice.kind {
            NoticeKind::Success => format!("[ok] {}", notice.message),
            NoticeKind::Error => format!("[error] {}", notice.message),
        })
        .collect()
    }
}
