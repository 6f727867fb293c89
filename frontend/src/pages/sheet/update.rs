//! Update function for the fact sheet detail page.
//!
//! Elm-style: receives the current state, the `Context`, and a `Msg`,
//! mutates the state, and returns whether the view should re-render.
//! All network completions carry the generation they were started under and
//! are ignored once a newer fetch has been issued.

use yew::platform::spawn_local;
use yew::Context;

use common::model::fact_sheet_value::{FactSheetValuePatch, NewFactSheetValue};

use crate::api;
use crate::components::toast::show_toast;

use super::messages::Msg;
use super::state::{Dialog, SheetComponent};

pub fn update(component: &mut SheetComponent, ctx: &Context<SheetComponent>, msg: Msg) -> bool {
    match msg {
        Msg::Load => {
            component.loading = true;
            component.error = None;
            component.not_found = false;
            // A dialog left open belongs to whatever sheet was shown before
            // this fetch; a write still in flight is orphaned by the
            // generation bump below.
            component.dialog = Dialog::None;
            component.dialog_busy = false;
            component.generation += 1;
            let generation = component.generation;
            let id = ctx.props().sheet_id;
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::get_fact_sheet(id).await;
                link.send_message(Msg::Loaded { generation, result });
            });
            true
        }
        Msg::Loaded { generation, result } => {
            if generation != component.generation {
                return false;
            }
            component.loading = false;
            match result {
                Ok(Some(sheet)) => component.sheet = Some(sheet),
                Ok(None) => {
                    component.sheet = None;
                    component.not_found = true;
                }
                Err(e) => {
                    component.sheet = None;
                    component.error = Some(e);
                }
            }
            true
        }
        Msg::OpenAdd {
            field_id,
            field_name,
        } => {
            component.dialog = Dialog::Add {
                field_id,
                field_name,
                title: String::new(),
                description: String::new(),
            };
            component.dialog_busy = false;
            true
        }
        Msg::OpenEdit { value } => {
            component.dialog = Dialog::Edit {
                value_id: value.id,
                title: value.name,
                description: value.value,
            };
            component.dialog_busy = false;
            true
        }
        Msg::CloseDialog => {
            component.dialog = Dialog::None;
            component.dialog_busy = false;
            true
        }
        Msg::TitleInput(text) => {
            match &mut component.dialog {
                Dialog::Add { title, .. } | Dialog::Edit { title, .. } => *title = text,
                Dialog::None => {}
            }
            false
        }
        Msg::DescriptionInput(text) => {
            match &mut component.dialog {
                Dialog::Add { description, .. } | Dialog::Edit { description, .. } => {
                    *description = text
                }
                Dialog::None => {}
            }
            false
        }
        Msg::Submit => submit_dialog(component, ctx),
        Msg::Delete => delete_value(component, ctx),
        Msg::WriteDone { generation, result } => {
            if generation != component.generation {
                return false;
            }
            component.dialog_busy = false;
            match result {
                Ok(()) => {
                    component.dialog = Dialog::None;
                    show_toast("Saved.");
                    ctx.link().send_message(Msg::Load);
                }
                Err(e) => {
                    // Leave the dialog open so the input survives the retry.
                    show_toast(&format!("Save failed: {e}"));
                }
            }
            true
        }
    }
}

fn submit_dialog(component: &mut SheetComponent, ctx: &Context<SheetComponent>) -> bool {
    if component.dialog_busy {
        return false;
    }

    let generation = component.generation;
    let link = ctx.link().clone();

    match &component.dialog {
        Dialog::Add {
            field_id,
            title,
            description,
            ..
        } => {
            let title = title.trim().to_string();
            let description = description.trim().to_string();
            if title.is_empty() || description.is_empty() {
                show_toast("Please fill in both title and description.");
                return false;
            }
            let payload = NewFactSheetValue {
                name: title,
                value: description,
                ai_generated: false,
                data_group_field_id: *field_id,
                fact_sheet_id: ctx.props().sheet_id,
            };
            component.dialog_busy = true;
            spawn_local(async move {
                let result = api::create_value(&payload).await;
                link.send_message(Msg::WriteDone { generation, result });
            });
            true
        }
        Dialog::Edit {
            value_id,
            title,
            description,
        } => {
            let title = title.trim().to_string();
            let description = description.trim().to_string();
            if title.is_empty() || description.is_empty() {
                show_toast("Please fill in both title and description.");
                return false;
            }
            let id = *value_id;
            let patch = FactSheetValuePatch {
                name: title,
                value: description,
            };
            component.dialog_busy = true;
            spawn_local(async move {
                let result = api::update_value(id, &patch).await;
                link.send_message(Msg::WriteDone { generation, result });
            });
            true
        }
        Dialog::None => false,
    }
}

fn delete_value(component: &mut SheetComponent, ctx: &Context<SheetComponent>) -> bool {
    if component.dialog_busy {
        return false;
    }
    let Dialog::Edit { value_id, .. } = &component.dialog else {
        return false;
    };

    let id = *value_id;
    let generation = component.generation;
    let link = ctx.link().clone();
    component.dialog_busy = true;
    spawn_local(async move {
        let result = api::delete_value(id).await;
        link.send_message(Msg::WriteDone { generation, result });
    });
    true
}
