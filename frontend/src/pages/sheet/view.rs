//! View rendering for the fact sheet detail page.
//!
//! Layout: breadcrumb, a summary panel (group label, sheet name,
//! description), then the answered fields grouped into sections and laid
//! out in two columns by alternating section index — even indices left,
//! odd indices right. The split is stable on purpose; screenshots diff
//! against it.

use yew::prelude::*;

use common::insight::grouping::{group_values, split_columns, FieldSection};

use crate::components::section_card::SectionCard;
use crate::route::Route;

use super::dialogs::add_item::add_item_dialog;
use super::dialogs::edit_item::edit_item_dialog;
use super::helpers::group_label;
use super::messages::Msg;
use super::state::{Dialog, SheetComponent};

pub fn view(component: &SheetComponent, ctx: &Context<SheetComponent>) -> Html {
    let link = ctx.link();
    let props = ctx.props();

    let back_to_group = {
        let on_navigate = props.on_navigate.clone();
        let alias = props.alias.clone();
        Callback::from(move |_: MouseEvent| {
            on_navigate.emit(Route::Group {
                alias: alias.clone(),
            })
        })
    };

    if component.loading {
        return html! {
            <div class="page sheet-page">
                <div class="status-block">{ "Loading..." }</div>
            </div>
        };
    }

    if component.not_found {
        return html! {
            <div class="page sheet-page">
                <div class="status-block">
                    <p>{ "Fact sheet not found" }</p>
                    <button class="primary" onclick={back_to_group}>
                        { format!("← Back to {}", group_label(&props.alias)) }
                    </button>
                </div>
            </div>
        };
    }

    if let Some(error) = &component.error {
        return html! {
            <div class="page sheet-page">
                <div class="status-block error">
                    <p>{ error }</p>
                    <button class="primary" onclick={link.callback(|_| Msg::Load)}>
                        { "Retry" }
                    </button>
                </div>
            </div>
        };
    }

    let Some(sheet) = &component.sheet else {
        // Loading is done and no error is set; nothing sensible to show.
        return html! {};
    };

    let sections = group_values(&sheet.values);
    let (left, right) = split_columns(&sections);

    let on_edit = link.callback(|value| Msg::OpenEdit { value });
    let on_add = link.callback(|(field_id, field_name)| Msg::OpenAdd {
        field_id,
        field_name,
    });

    let render_column = |sections: Vec<&FieldSection>| -> Html {
        html! {
            <div class="section-column">
                { for sections.into_iter().map(|section| html! {
                    <SectionCard
                        key={section.field_id}
                        section={section.clone()}
                        on_edit={on_edit.clone()}
                        on_add={on_add.clone()}
                    />
                }) }
            </div>
        }
    };

    let dialog = match &component.dialog {
        Dialog::None => html! {},
        Dialog::Add {
            field_name,
            title,
            description,
            ..
        } => add_item_dialog(field_name, title, description, component.dialog_busy, link),
        Dialog::Edit {
            title, description, ..
        } => edit_item_dialog(title, description, component.dialog_busy, link),
    };

    html! {
        <div class="page sheet-page">
            <nav class="breadcrumb">
                <button class="breadcrumb-link" onclick={back_to_group.clone()}>
                    { group_label(&props.alias) }
                </button>
                <span class="breadcrumb-sep">{ "/" }</span>
                <span>{ &sheet.name }</span>
            </nav>

            <div class="sheet-layout">
                <aside class="sheet-summary">
                    <h3 class="sheet-summary-group">{ group_label(&props.alias) }</h3>
                    <h2 class="sheet-summary-title">{ &sheet.name }</h2>
                    {
                        if let Some(description) = &sheet.description {
                            html! {
                                <>
                                    <h3 class="sheet-summary-heading">{ "Description" }</h3>
                                    <p class="sheet-summary-text">{ description }</p>
                                </>
                            }
                        } else {
                            html! {}
                        }
                    }
                </aside>

                <div class="sheet-sections">
                    {
                        if sections.is_empty() {
                            html! {
                                <div class="status-block">
                                    { "No answered fields yet." }
                                </div>
                            }
                        } else {
                            html! {
                                <div class="section-grid">
                                    { render_column(left) }
                                    { render_column(right) }
                                </div>
                            }
                        }
                    }
                </div>
            </div>

            { dialog }
        </div>
    }
}
