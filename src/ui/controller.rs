//! The view controller: every user-triggered operation of the catalog
//! client as a method on one object.
//!
//! Operation failures never surface as `Err`; they degrade to visible
//! state (an inline list error and/or a transient notice), so the session
//! keeps running no matter what the network does. After any successful
//! mutation the controller reconciles by reloading the full, unfiltered
//! list from the server; it never patches the rendered list locally.

use std::io::{self, Write};
use std::time::Instant;

use super::notice::NoticeKind;
use super::view::{EditorForm, ListView, ViewState};
use crate::api::CatalogClient;
use crate::models::ProductDraft;

/// Confirmation gate for destructive actions.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Interactive `[y/N]` prompt on the terminal.
#[derive(Debug, Default)]
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        print!("{} [y/N] ", prompt);
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            return false;
        }
        input.trim().eq_ignore_ascii_case("y")
    }
}

pub struct CatalogController {
    client: CatalogClient,
    view: ViewState,
}

impl CatalogController {
    pub fn new(client: CatalogClient) -> Self {
        Self {
            client,
            view: ViewState::default(),
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Mutable access to the open editor's fields, if any.
    pub fn editor_mut(&mut self) -> Option<&mut EditorForm> {
        self.view.editor.as_mut()
    }

    /// Loads the product list, optionally filtered.
    ///
    /// A trimmed-empty query means no filter. The rendered list is
    /// replaced wholesale by the outcome; on failure the previous list is
    /// gone and an inline error plus a transient notice take its place.
    pub async fn load_products(&mut self, query: Option<&str>) {
        let term = query
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);
        self.view.filter = term.clone();
        self.view.list = ListView::Loading;

        match self.client.list(term.as_deref()).await {
            Ok(products) => {
                self.view.list = ListView::Loaded(products);
            }
            Err(e) => {
                let message = e.user_message();
                self.view.list = ListView::Failed(message.clone());
                self.view.list_notices.post(
                    format!("Failed to load products: {}", message),
                    NoticeKind::Error,
                    Instant::now(),
                );
            }
        }
    }

    /// Creates a product from raw form input.
    ///
    /// Returns `true` when the form should be cleared (creation
    /// succeeded); on any failure the caller keeps the entered values so
    /// the user can correct them.
    pub async fn create_product(&mut self, name: &str, description: &str, price: &str) -> bool {
        let draft = match ProductDraft::parse(name, description, price) {
            Ok(draft) => draft,
            Err(e) => {
                self.view
                    .form_notices
                    .post(e.to_string(), NoticeKind::Error, Instant::now());
                return false;
            }
        };

        match self.client.create(&draft).await {
            Ok(message) => {
                self.view
                    .form_notices
                    .post(message, NoticeKind::Success, Instant::now());
                self.load_products(None).await;
                true
            }
            Err(e) => {
                self.view
                    .form_notices
                    .post(e.user_message(), NoticeKind::Error, Instant::now());
                false
            }
        }
    }

    /// Deletes a product after explicit confirmation.
    ///
    /// Declining the prompt issues no request and leaves every piece of
    /// state untouched. A failed delete leaves the (possibly stale) list
    /// as it was.
    pub async fn delete_product(&mut self, id: i64, confirm: &mut dyn Confirm) {
        let prompt = format!("Delete product {}? This cannot be undone.", id);
        if !confirm.confirm(&prompt) {
            return;
        }

        match self.client.delete(id).await {
            Ok(message) => {
                self.view
                    .list_notices
                    .post(message, NoticeKind::Success, Instant::now());
                self.load_products(None).await;
            }
            Err(e) => {
                self.view
                    .list_notices
                    .post(e.user_message(), NoticeKind::Error, Instant::now());
            }
        }
    }

    /// Phase one of editing: fetches the record and opens the editor.
    ///
    /// Returns whether the editor is now open. On fetch failure it stays
    /// closed and the list region gets the error notice.
    pub async fn open_editor(&mut self, id: i64) -> bool {
        match self.client.get(id).await {
            Ok(product) => {
                self.view.editor_notices.clear();
                self.view.editor = Some(EditorForm::from_product(&product));
                true
            }
            Err(e) => {
                self.view.list_notices.post(
                    format!("Could not load product {} for editing: {}", id, e.user_message()),
                    NoticeKind::Error,
                    Instant::now(),
                );
                false
            }
        }
    }

    /// Phase two of editing: validates the form and sends the
    /// full-replace update.
    ///
    /// Returns `true` when the editor closed (update succeeded). On
    /// validation or request failure the editor stays open for
    /// correction.
    pub async fn submit_edit(&mut self) -> bool {
        let form = match &self.view.editor {
            Some(form) => form.clone(),
            None => return false,
        };

        let draft = match ProductDraft::parse(&form.name, &form.description, &form.price) {
            Ok(draft) => draft,
            Err(e) => {
                self.view
                    .editor_notices
                    .post(e.to_string(), NoticeKind::Error, Instant::now());
                return false;
            }
        };

        match self.client.update(form.id, &draft).await {
            Ok(message) => {
                self.view
                    .editor_notices
                    .post(message, NoticeKind::Success, Instant::now());
                self.view.editor = None;
                self.load_products(None).await;
                true
            }
            Err(e) => {
                self.view
                    .editor_notices
                    .post(e.user_message(), NoticeKind::Error, Instant::now());
                false
            }
        }
    }

    /// Dismisses the editor, discarding unsaved edits.
    pub fn close_editor(&mut self) {
        self.view.editor = None;
    }
}
