//! Server-rendered pages: embedded Tera templates and the view models they render.

use rust_embed::RustEmbed;
use serde::Serialize;
use tera::{Context, Tera};

use crate::db::entities::todo;
use crate::web::models::ToggleTodoRequest;

#[derive(RustEmbed)]
#[folder = "templates/"]
struct TemplateFiles;

/// Builds a `Tera` instance from the templates embedded in the binary.
pub fn load_templates() -> Result<Tera, tera::Error> {
    let mut sources = Vec::new();
    for path in TemplateFiles::iter() {
        let file = TemplateFiles::get(&path)
            .ok_or_else(|| tera::Error::msg(format!("Template {path} disappeared from the embed")))?;
        let source = String::from_utf8(file.data.into_owned())
            .map_err(|e| tera::Error::msg(format!("Template {path} is not valid UTF-8: {e}")))?;
        sources.push((path.into_owned(), source));
    }

    let mut tera = Tera::default();
    tera.add_raw_templates(sources)?;
    Ok(tera)
}

/// Where a click on a row landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Row,
    Actions,
}

/// Client-side state of one table row.
///
/// The displayed completion flag is a local copy of the server record. A click flips it
/// immediately and marks the row pending; the list fetch that follows that row's own toggle
/// overwrites it with whatever the server holds, whether or not the request succeeded.
///
/// Rows are rendered from this state (`data-complete`, `data-pending`), and `assets/app.js`
/// applies the same `click` and `reconcile` transitions to those attributes in the browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowControl {
    id: String,
    is_complete: bool,
    pending: bool,
}

impl RowControl {
    pub fn from_server(record: &todo::Model) -> Self {
        Self {
            id: record.id.clone(),
            is_complete: record.is_complete,
            pending: false,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Applies a click. Returns the toggle request to send, or `None` for clicks on the
    /// action icons, which never toggle.
    pub fn click(&mut self, target: ClickTarget) -> Option<ToggleTodoRequest> {
        if target == ClickTarget::Actions {
            return None;
        }
        self.is_complete = !self.is_complete;
        self.pending = true;
        Some(ToggleTodoRequest {
            id: self.id.clone(),
            is_complete: self.is_complete,
        })
    }

    /// Replaces local state with the re-fetched server value.
    pub fn reconcile(&mut self, server_is_complete: bool) {
        self.is_complete = server_is_complete;
        self.pending = false;
    }
}

#[derive(Debug, Serialize)]
pub struct RowView {
    pub id: String,
    pub name: String,
    pub created_on: String,
    pub control: RowControl,
}

#[derive(Debug, Serialize)]
pub struct TodoListView {
    pub completed_count: usize,
    pub total_count: usize,
    pub show_summary: bool,
    pub rows: Vec<RowView>,
}

impl TodoListView {
    pub fn new(todos: Vec<todo::Model>) -> Self {
        let completed_count = todos.iter().filter(|todo| todo.is_complete).count();
        let total_count = todos.len();
        let rows = todos
            .into_iter()
            .map(|todo| RowView {
                control: RowControl::from_server(&todo),
                created_on: format_date(&todo.created_at),
                id: todo.id,
                name: todo.name,
            })
            .collect();

        Self {
            completed_count,
            total_count,
            show_summary: total_count > 0,
            rows,
        }
    }
}

pub fn format_date(date: &chrono::DateTime<chrono::Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

pub fn render_list(tera: &Tera, view: &TodoListView) -> Result<String, tera::Error> {
    let context = Context::from_serialize(view)?;
    tera.render("index.html", &context)
}

pub fn render_new_form(tera: &Tera, error: Option<&str>, name: &str) -> Result<String, tera::Error> {
    let mut context = Context::new();
    context.insert("error", &error);
    context.insert("name", name);
    tera.render("new.html", &context)
}
