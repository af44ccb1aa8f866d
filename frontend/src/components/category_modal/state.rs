use std::collections::BTreeSet;
use std::rc::Rc;

use shared::CategoryError;
use yew::Reducible;

/// What the modal body shows, in priority order
#[derive(Debug, Clone, PartialEq)]
pub enum RenderMode {
    Hidden,
    CreateForm,
    Loading,
    Error(String),
    Empty,
    List,
}

/// Transient state owned by the category modal
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryModalState {
    deleting: BTreeSet<String>,
    delete_error: Option<CategoryError>,
    show_create_form: bool,
}

pub enum CategoryModalAction {
    BeginDelete(String),
    FinishDelete {
        category_id: String,
        result: Result<(), CategoryError>,
    },
    OpenCreateForm,
    CloseCreateForm,
    /// Modal hidden. Rows with a delete in flight stay marked until their
    /// `FinishDelete` arrives.
    Dismiss,
}

impl CategoryModalState {
    pub fn is_deleting(&self, category_id: &str) -> bool {
        self.deleting.contains(category_id)
    }

    pub fn delete_error(&self) -> Option<&CategoryError> {
        self.delete_error.as_ref()
    }

    pub fn show_create_form(&self) -> bool {
        self.show_create_form
    }

    pub fn render_mode(&self, show: bool, loading: bool, error: &str, category_count: usize) -> RenderMode {
        if !show {
            RenderMode::Hidden
        } else if self.show_create_form {
            RenderMode::CreateForm
        } else if loading {
            RenderMode::Loading
        } else if !error.is_empty() {
            RenderMode::Error(error.to_string())
        } else if category_count == 0 {
            RenderMode::Empty
        } else {
            RenderMode::List
        }
    }

    pub fn apply(&mut self, action: CategoryModalAction) {
        match action {
            CategoryModalAction::BeginDelete(category_id) => {
                self.delete_error = None;
                self.deleting.insert(category_id);
            }
            CategoryModalAction::FinishDelete { category_id, result } => {
                self.deleting.remove(&category_id);
                self.delete_error = result.err();
            }
            CategoryModalAction::OpenCreateForm => self.show_create_form = true,
            CategoryModalAction::CloseCreateForm => self.show_create_form = false,
            CategoryModalAction::Dismiss => {
                self.delete_error = None;
                self.show_create_form = false;
            }
        }
    }
}

impl Reducible for CategoryModalState {
    type Action = CategoryModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

/// Edge detector for the parent-owned visibility flag
#[derive(Debug, Default)]
pub struct VisibilityTracker {
    visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityChange {
    Opened,
    Closed,
    Unchanged,
}

impl VisibilityTracker {
    pub fn observe(&mut self, show: bool) -> VisibilityChange {
        let change = match (self.visible, show) {
            (false, true) => VisibilityChange::Opened,
            (true, false) => VisibilityChange::Closed,
            _ => VisibilityChange::Unchanged,
        };
        self.visible = show;
        change
    }
}
