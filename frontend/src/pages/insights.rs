//! Group listing page: one card per data group, with the card variant
//! decoded from `image_path` and refined against the group's item count.

use gloo_console::error;
use yew::platform::spawn_local;
use yew::{html, Callback, Component, Context, Html, Properties};

use common::insight::alias::encode_segment;
use common::insight::display::{CardKind, DisplayVariant};
use common::model::data_group::DataGroup;

use crate::api;
use crate::components::insight_card::InsightCard;
use crate::route::Route;

/// A group ready to render: its record, decoded variant, and the item
/// count fetched for the refinement stage.
pub struct GroupCard {
    pub group: DataGroup,
    pub variant: DisplayVariant,
    pub count: u32,
}

pub struct InsightsPage {
    cards: Vec<GroupCard>,
    loading: bool,
    error: Option<String>,
    /// Bumped on every fetch; responses carrying an older value are stale
    /// and dropped instead of overwriting newer state.
    generation: u64,
}

pub enum Msg {
    Load,
    Loaded {
        generation: u64,
        result: Result<Vec<GroupCard>, String>,
    },
}

#[derive(Properties, PartialEq)]
pub struct InsightsProps {
    pub on_navigate: Callback<Route>,
}

async fn fetch_cards() -> Result<Vec<GroupCard>, String> {
    let page = api::list_data_groups(0, 100).await?;

    let mut cards = Vec::with_capacity(page.data.len());
    for group in page.data {
        let variant = DisplayVariant::parse(group.image_path.as_deref());
        let needs_count = matches!(variant.kind, CardKind::List | CardKind::Count);

        let count = if needs_count {
            match api::fact_sheet_count(group.id).await {
                Ok(count) => count,
                Err(e) => {
                    // A failed count downgrades the card, it does not sink
                    // the whole listing.
                    error!("fact sheet count failed:", e);
                    0
                }
            }
        } else {
            0
        };

        cards.push(GroupCard {
            variant: variant.refine(count),
            count,
            group,
        });
    }
    Ok(cards)
}

impl Component for InsightsPage {
    type Message = Msg;
    type Properties = InsightsProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Load);
        Self {
            cards: Vec::new(),
            loading: true,
            error: None,
            generation: 0,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Load => {
                self.loading = true;
                self.error = None;
                self.generation += 1;
                let generation = self.generation;
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = fetch_cards().await;
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
                    Ok(cards) => self.cards = cards,
                    Err(e) => self.error = Some(e),
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.loading {
            return html! {
                <div class="page insights-page">
                    <div class="status-block">{ "Loading insights..." }</div>
                </div>
            };
        }

        if let Some(error) = &self.error {
            return html! {
                <div class="page insights-page">
                    <div class="status-block error">
                        <p>{ error }</p>
                        <button class="primary" onclick={ctx.link().callback(|_| Msg::Load)}>
                            { "Retry" }
                        </button>
                    </div>
                </div>
            };
        }

        html! {
            <div class="page insights-page">
                <div class="card-grid">
                    {
                        if self.cards.is_empty() {
                            html! { <p class="status-block">{ "No data groups available." }</p> }
                        } else {
                            html! { for self.cards.iter().map(|card| self.render_card(ctx, card)) }
                        }
                    }
                </div>
            </div>
        }
    }
}

impl InsightsPage {
    fn render_card(&self, ctx: &Context<Self>, card: &GroupCard) -> Html {
        let group = &card.group;
        let open = {
            let on_navigate = ctx.props().on_navigate.clone();
            // The link carries the exact name (encoded), so downstream pages
            // can display it without guessing it back out of a lossy alias.
            let alias = encode_segment(&group.name);
            Callback::from(move |_: web_sys::MouseEvent| {
                on_navigate.emit(Route::Group {
                    alias: alias.clone(),
                })
            })
        };

        let footer = html! {
            <div class="card-footer-row">
                <span class="card-footer-note">{ "Last updated 1 week ago" }</span>
                <button class="card-open" onclick={open}>{ "↗" }</button>
            </div>
        };

        let body = match &card.variant.kind {
            CardKind::Logo => html! {},
            CardKind::List => html! {
                <ul class="card-item-list">
                    { for (0..card.count.min(5)).map(|i| html! {
                        <li class="card-item-row">
                            <span>{ format!("Item {}", i + 1) }</span>
                            <span class="card-item-index">{ format!("{:02}", i + 1) }</span>
                        </li>
                    }) }
                </ul>
            },
            CardKind::Image => {
                let src = if card.variant.asset_url.is_empty() {
                    "/placeholder.png".to_string()
                } else {
                    card.variant.asset_url.clone()
                };
                html! {
                    <img class="card-illustration" {src} alt={group.name.clone()} />
                }
            }
            // Count is also the fallback for unknown directive kinds.
            CardKind::Count | CardKind::Other(_) => html! {
                <div class="card-count">
                    <span class="card-count-number">{ card.count }</span>
                    <span class="card-count-label">{ "Items" }</span>
                </div>
            },
        };

        html! {
            <InsightCard
                key={group.id}
                title={group.name.clone()}
                description={group.description.clone()}
                accent={matches!(card.variant.kind, CardKind::Logo)}
                background={
                    matches!(card.variant.kind, CardKind::Logo)
                        .then(|| card.variant.asset_url.clone())
                }
                {footer}
            >
                { body }
            </InsightCard>
        }
    }
}
