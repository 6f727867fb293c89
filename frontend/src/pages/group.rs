//! One group's page: resolves the URL alias against the group listing,
//! then shows a card per fact sheet in the group.

use gloo_console::error;
use yew::platform::spawn_local;
use yew::{html, Callback, Component, Context, Html, Properties};

use common::insight::alias::{encode_segment, resolve_alias};
use common::model::data_group::DataGroup;
use common::model::fact_sheet::FactSheet;

use crate::api;
use crate::components::fact_sheet_card::FactSheetCard;
use crate::route::Route;

pub struct GroupPage {
    group: Option<DataGroup>,
    sheets: Vec<FactSheet>,
    loading: bool,
    error: Option<String>,
    generation: u64,
}

pub enum Msg {
    Load,
    Loaded {
        generation: u64,
        /// `Ok(None)` means the alias matched nothing — an expected outcome
        /// rendered as the not-found view, not an error.
        result: Result<Option<(DataGroup, Vec<FactSheet>)>, String>,
    },
}

#[derive(Properties, PartialEq)]
pub struct GroupProps {
    /// Raw URL segment, possibly percent-encoded.
    pub alias: String,
    pub on_navigate: Callback<Route>,
}

async fn fetch_group(alias: &str) -> Result<Option<(DataGroup, Vec<FactSheet>)>, String> {
    let page = api::list_data_groups(0, 100).await?;
    let Some(group) = resolve_alias(alias, &page.data) else {
        return Ok(None);
    };
    let group = group.clone();

    // A failed sheet fetch degrades to an empty list; the group header is
    // still worth showing.
    let sheets = match api::list_fact_sheets(group.id, 100).await {
        Ok(sheets) => sheets,
        Err(e) => {
            error!("fetching fact sheets failed:", e);
            Vec::new()
        }
    };
    Ok(Some((group, sheets)))
}

impl Component for GroupPage {
    type Message = Msg;
    type Properties = GroupProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Load);
        Self {
            group: None,
            sheets: Vec::new(),
            loading: true,
            error: None,
            generation: 0,
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().alias != old_props.alias {
            ctx.link().send_message(Msg::Load);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Load => {
                self.loading = true;
                self.error = None;
                self.group = None;
                self.generation += 1;
                let generation = self.generation;
                let alias = ctx.props().alias.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = fetch_group(&alias).await;
                    link.send_message(Msg::Loaded { generation, result });
                });
                true
            }
            Msg::Loaded { generation, result } => {
                if generation != self.generation {
                    return false;
                }
                self.loading = false;
                match result {
                    Ok(Some((group, sheets))) => {
                        self.group = Some(group);
                        self.sheets = sheets;
                    }
                    Ok(None) => {
                        self.group = None;
                        self.sheets = Vec::new();
                    }
                    Err(e) => self.error = Some(e),
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let back = {
            let on_navigate = ctx.props().on_navigate.clone();
            Callback::from(move |_: web_sys::MouseEvent| on_navigate.emit(Route::Insights))
        };

        if self.loading {
            return html! {
                <div class="page group-page">
                    <div class="status-block">{ "Loading data group..." }</div>
                </div>
            };
        }

        if let Some(error) = &self.error {
            return html! {
                <div class="page group-page">
                    <div class="status-block error">
                        <p>{ error }</p>
                        <button class="primary" onclick={link.callback(|_| Msg::Load)}>
                            { "Retry" }
                        </button>
                    </div>
                </div>
            };
        }

        let Some(group) = &self.group else {
            return html! {
                <div class="page group-page">
                    <div class="status-block">
                        <p>{ "Data group not found" }</p>
                        <button class="primary" onclick={back}>{ "← Back to insights" }</button>
                    </div>
                </div>
            };
        };

        // Sheets are addressed by the resolved group's exact name, even when
        // this page was reached through a kebab alias or an id; the detail
        // breadcrumb then shows the upstream name, not the typed segment.
        let alias = encode_segment(&group.name);
        let on_navigate = ctx.props().on_navigate.clone();
        let open_sheet = Callback::from(move |id: i64| {
            on_navigate.emit(Route::Sheet {
                alias: alias.clone(),
                id,
            })
        });

        html! {
            <div class="page group-page">
                <div class="page-header">
                    <h1>{ &group.name }</h1>
                    {
                        if let Some(description) = &group.description {
                            html! { <p class="page-description">{ description }</p> }
                        } else {
                            html! {}
                        }
                    }
                </div>
                {
                    if self.sheets.is_empty() {
                        html! {
                            <div class="status-block">
                                { format!("No \"{}\" found.", group.name) }
                            </div>
                        }
                    } else {
                        html! {
                            <div class="card-grid">
                                { for self.sheets.iter().map(|sheet| html! {
                                    <FactSheetCard
                                        key={sheet.id}
                                        sheet={sheet.clone()}
                                        group_name={group.name.clone()}
                                        on_open={open_sheet.clone()}
                                    />
                                }) }
                            </div>
                        }
                    }
                }
            </div>
        }
    }
}
