//! Add-item dialog: collects a title and description for a new value under
//! one field section, then submits through the page's update loop.

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::pages::sheet::messages::Msg;
use crate::pages::sheet::state::SheetComponent;

pub fn add_item_dialog(
    field_name: &str,
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
                    <h3>{ "Add New Item" }</h3>
                    <button class="modal-close" onclick={link.callback(|_| Msg::CloseDialog)}>
                        { "×" }
                    </button>
                </div>

                <label class="modal-label">{ "Group" }</label>
                <input type="text" value={field_name.to_string()} disabled={true} />

                <label class="modal-label">{ "Title *" }</label>
                <input
                    type="text"
                    value={title.to_string()}
                    placeholder="Enter item title"
                    oninput={on_title}
                />

                <label class="modal-label">{ "Description *" }</label>
                <textarea
                    value={description.to_string()}
                    placeholder="Enter item description"
                    rows="6"
                    oninput={on_description}
                />

                <div class="modal-actions">
                    <button onclick={link.callback(|_| Msg::CloseDialog)} disabled={busy}>
                        { "Cancel" }
                    </button>
                    <button class="primary" onclick={link.callback(|_| Msg::Submit)} disabled={busy}>
                        { if busy { "Adding..." } else { "Add Item" } }
                    </button>
                </div>
            </div>
        </div>
    }
}
