use web_sys::MouseEvent;
use yew::{html, Callback, Component, Context, Html, Properties};

use common::model::fact_sheet::FactSheet;

/// Summary tile for one fact sheet on a group page.
pub struct FactSheetCard;

#[derive(Properties, PartialEq)]
pub struct FactSheetCardProps {
    pub sheet: FactSheet,
    pub group_name: String,
    /// Emits the sheet id when the card is opened.
    pub on_open: Callback<i64>,
}

impl Component for FactSheetCard {
    type Message = ();
    type Properties = FactSheetCardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let sheet = &props.sheet;
        let id = sheet.id;
        let on_open = props.on_open.clone();
        let open = Callback::from(move |_: MouseEvent| on_open.emit(id));

        let answered = sheet.values.len();

        html! {
            <div class="fact-sheet-card" onclick={open}>
                <div class="fact-sheet-card-group">{ &props.group_name }</div>
                <h3 class="fact-sheet-card-title">{ &sheet.name }</h3>
                {
                    if let Some(description) = &sheet.description {
                        html! { <p class="fact-sheet-card-description">{ description }</p> }
                    } else {
                        html! {}
                    }
                }
                <div class="fact-sheet-card-meta">
                    { format!("{answered} answered field{}", if answered == 1 { "" } else { "s" }) }
                </div>
            </div>
        }
    }
}
