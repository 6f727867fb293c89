pub mod fact_sheet_card;
pub mod insight_card;
pub mod section_card;
pub mod toast;
