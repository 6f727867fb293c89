use yew::{Callback, Properties};

use crate::route::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct SheetProps {
    /// The group alias segment from the URL, kept as-is; the header decodes
    /// it for display.
    pub alias: String,
    pub sheet_id: i64,
    pub on_navigate: Callback<Route>,
}
