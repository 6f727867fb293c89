use common::model::fact_sheet::FactSheet;
use common::model::fact_sheet_value::FactSheetValue;

pub enum Msg {
    /// (Re)fetch the routed sheet.
    Load,
    Loaded {
        generation: u64,
        /// `Ok(None)` is the not-found outcome.
        result: Result<Option<FactSheet>, String>,
    },
    OpenAdd {
        field_id: i64,
        field_name: String,
    },
    OpenEdit {
        value: FactSheetValue,
    },
    CloseDialog,
    TitleInput(String),
    DescriptionInput(String),
    /// Submit the open dialog (create or update).
    Submit,
    /// Delete the value behind the open edit dialog.
    Delete,
    WriteDone {
        generation: u64,
        result: Result<(), String>,
    },
}
