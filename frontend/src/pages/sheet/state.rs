//! Component state for the fact sheet detail page.

use common::model::fact_sheet::FactSheet;

/// Main state container for the detail page.
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules.
pub struct SheetComponent {
    /// The loaded sheet; `None` while loading, after a failure, or when the
    /// id matched nothing upstream (`not_found` tells those apart).
    pub sheet: Option<FactSheet>,
    pub loading: bool,
    pub error: Option<String>,
    pub not_found: bool,
    /// Bumped on every fetch; async completions carrying an older value are
    /// dropped so a stale response can never overwrite newer state.
    pub generation: u64,
    pub dialog: Dialog,
    /// True while a write is in flight; blocks double submission.
    pub dialog_busy: bool,
}

/// The currently open dialog, with its input buffers. Keeping the buffers
/// here (rather than in the dialog markup) makes submission a pure read of
/// component state.
pub enum Dialog {
    None,
    Add {
        field_id: i64,
        field_name: String,
        title: String,
        description: String,
    },
    Edit {
        value_id: i64,
        title: String,
        description: String,
    },
}

impl SheetComponent {
    pub fn new() -> Self {
        Self {
            sheet: None,
            loading: true,
            error: None,
            not_found: false,
            generation: 0,
            dialog: Dialog::None,
            dialog_busy: false,
        }
    }
}
