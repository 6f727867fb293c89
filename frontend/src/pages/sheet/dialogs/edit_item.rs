//! Edit-item dialog: edits one value's title and text in place, and hosts
//! the delete affordance for that value.

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::pages::sheet::messages::Msg;
use crate::pages::sheet::state::SheetComponent;

pub fn edit_item_dialog(
    title: &str,
    description: &str,
    busy: bool,
    link: &Scope<SheetComponent>,
) -> Html {
    let on_title = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::TitleInput(input.value())
    });
    let on_description = link.callback(|e: InputEvent| {
        let input: HtmlTextAreaElement = e.target_unchecked_into();
        Msg::DescriptionInput(input.value())
    });

    html! {
        <div class="modal-backdrop">
            <div class="modal item-modal">
                <div class="modal-header">
                    <h3>{ "Edit Item" }</h3>
                    <button class="modal-close" onclick={link.callback(|_| Msg::CloseDialog)}>
                        { "×" }
                    </button>
                </div>

                <label class="modal-label">{ "Title *" }</label>
                <input
                    type="text"
                    value={title.to_string()}
                    oninput={on_title}
                />

                <label class="modal-label">{ "Description *" }</label>
                <textarea
                    value={description.to_string()}
                    rows="6"
                    oninput={on_description}
                />

                <div class="modal-actions spread">
                    <button class="danger" onclick={link.callback(|_| Msg::Delete)} disabled={busy}>
                        { "Delete" }
                    </button>
                    <div>
                        <button onclick={link.callback(|_| Msg::CloseDialog)} disabled={busy}>
                            { "Cancel" }
                        </button>
                        <button class="primary" onclick={link.callback(|_| Msg::Submit)} disabled={busy}>
                            { if busy { "Saving..." } else { "Save" } }
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
