use std::collections::HashMap;

use web_sys::MouseEvent;
use yew::{classes, html, Callback, Component, Context, Html, Properties};

use common::insight::grouping::FieldSection;
use common::model::fact_sheet_value::FactSheetValue;

/// One field section on the detail page: header with status controls, a
/// card per value, and the add affordance. The apply/checkbox state is
/// deliberately local — it is review bookkeeping, not data, and resets with
/// the component.
pub struct SectionCard {
    checked: HashMap<usize, bool>,
    /// Index awaiting confirmation in the apply dialog, if any.
    confirm: Option<usize>,
    status: SectionStatus,
}

#[derive(Clone, Copy, PartialEq)]
pub enum SectionStatus {
    Accepted,
    Pending,
}

pub enum SectionMsg {
    CheckboxClicked(usize),
    ConfirmApply,
    CancelApply,
    ToggleStatus,
}

#[derive(Properties, PartialEq)]
pub struct SectionCardProps {
    pub section: FieldSection,
    /// Opens the edit dialog for a value.
    pub on_edit: Callback<FactSheetValue>,
    /// Opens the add dialog for this section's field: `(field_id, field_name)`.
    pub on_add: Callback<(i64, String)>,
}

impl SectionCard {
    /// A pending section whose items are all applied displays as accepted.
    fn display_status(&self, item_count: usize) -> SectionStatus {
        let all_applied = item_count > 0
            && self.checked.len() == item_count
            && self.checked.values().all(|&applied| applied);
        if self.status == SectionStatus::Pending && all_applied {
            SectionStatus::Accepted
        } else {
            self.status
        }
    }
}

impl Component for SectionCard {
    type Message = SectionMsg;
    type Properties = SectionCardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            checked: HashMap::new(),
            confirm: None,
            status: SectionStatus::Accepted,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            SectionMsg::CheckboxClicked(index) => {
                if self.checked.get(&index).copied().unwrap_or(false) {
                    self.checked.insert(index, false);
                } else {
                    self.confirm = Some(index);
                }
                true
            }
            SectionMsg::ConfirmApply => {
                if let Some(index) = self.confirm.take() {
                    self.checked.insert(index, true);
                }
                true
            }
            SectionMsg::CancelApply => {
                self.confirm = None;
                true
            }
            SectionMsg::ToggleStatus => {
                self.status = match self.status {
                    SectionStatus::Accepted => SectionStatus::Pending,
                    SectionStatus::Pending => SectionStatus::Accepted,
                };
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let section = &props.section;
        let link = ctx.link();
        let status = self.display_status(section.values.len());
        let pending = status == SectionStatus::Pending;

        let add = {
            let on_add = props.on_add.clone();
            let field = (section.field_id, section.field_name.clone());
            Callback::from(move |_: MouseEvent| on_add.emit(field.clone()))
        };

        html! {
            <div class="section-card">
                <div class="section-header">
                    <h3 class="section-title">{ &section.field_name }</h3>
                    <div class="section-controls">
                        <button
                            class="section-status"
                            title={ if pending { "Pending" } else { "Accepted" } }
                            onclick={link.callback(|_| SectionMsg::ToggleStatus)}
                        >
                            { if pending { "↻" } else { "✓" } }
                        </button>
                    </div>
                </div>

                <div class="section-items">
                    { for section.values.iter().enumerate().map(|(index, value)| {
                        self.render_item(ctx, index, value, pending)
                    }) }
                </div>

                <div class="section-footer">
                    <span class="section-footer-label">{ &section.field_description }</span>
                    <button class="section-add" onclick={add}>{ "+" }</button>
                </div>

                {
                    if self.confirm.is_some() {
                        html! {
                            <div class="modal-backdrop">
                                <div class="modal confirm-modal">
                                    <h3>{ "Confirm Apply" }</h3>
                                    <p>{ "Are you sure you want to apply this item?" }</p>
                                    <div class="modal-actions">
                                        <button onclick={link.callback(|_| SectionMsg::CancelApply)}>
                                            { "Cancel" }
                                        </button>
                                        <button
                                            class="primary"
                                            onclick={link.callback(|_| SectionMsg::ConfirmApply)}
                                        >
                                            { "Apply" }
                                        </button>
                                    </div>
                                </div>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        }
    }
}

impl SectionCard {
    fn render_item(
        &self,
        ctx: &Context<Self>,
        index: usize,
        value: &FactSheetValue,
        pending: bool,
    ) -> Html {
        let props = ctx.props();
        let link = ctx.link();
        let applied = self.checked.get(&index).copied().unwrap_or(false);

        let edit = {
            let on_edit = props.on_edit.clone();
            let value = value.clone();
            Callback::from(move |_: MouseEvent| on_edit.emit(value.clone()))
        };

        let badge = if value.ai_generated { "AI" } else { "HU" };
        let badge_title = format!(
            "{}: {}",
            if value.ai_generated {
                "AI generated"
            } else {
                "Human generated"
            },
            value.data_group_field.name
        );

        html! {
            <div class="section-item">
                <div class="section-item-title">
                    { &value.name }
                    { if applied { html! { <span class="applied-tag">{ "(Applied)" }</span> } } else { html! {} } }
                </div>
                <div class="section-item-body" onclick={edit}>
                    <span class="section-item-text">{ &value.value }</span>
                    <span class={classes!("badge", if value.ai_generated { "badge-ai" } else { "badge-hu" })}
                        title={badge_title}>
                        { badge }
                    </span>
                </div>
                {
                    if pending {
                        html! {
                            <button
                                class={classes!("apply-checkbox", applied.then_some("checked"))}
                                onclick={link.callback(move |_| SectionMsg::CheckboxClicked(index))}
                            >
                                { if applied { "☑" } else { "☐" } }
                            </button>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        }
    }
}
