use yew::{html, Component, Context, Html, Properties};

/// Card chrome shared by every group tile on the listing page: title,
/// optional description, a body slot, a footer slot, and an optional
/// full-bleed background asset for the logo variant.
pub struct InsightCard;

#[derive(Properties, PartialEq)]
pub struct InsightCardProps {
    pub title: String,
    #[prop_or_default]
    pub description: Option<String>,
    /// Background asset URL; when set the card renders it behind the header
    /// instead of a body.
    #[prop_or_default]
    pub background: Option<String>,
    #[prop_or_default]
    pub accent: bool,
    #[prop_or_default]
    pub children: Html,
    #[prop_or_default]
    pub footer: Html,
}

impl Component for InsightCard {
    type Message = ();
    type Properties = InsightCardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let class = if props.accent {
            "insight-card accent"
        } else {
            "insight-card"
        };

        html! {
            <div {class}>
                {
                    if let Some(src) = &props.background {
                        html! {
                            <div class="insight-card-backdrop">
                                <img src={src.clone()} alt={props.title.clone()} />
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
                <div class="insight-card-header">
                    <div class="insight-card-title">{ &props.title }</div>
                    {
                        if let Some(description) = &props.description {
                            html! { <div class="insight-card-description">{ description }</div> }
                        } else {
                            html! {}
                        }
                    }
                </div>
                <div class="insight-card-body">{ props.children.clone() }</div>
                <div class="insight-card-footer">{ props.footer.clone() }</div>
            </div>
        }
    }
}
