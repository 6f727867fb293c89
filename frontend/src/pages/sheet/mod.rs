//! Fact sheet detail page: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, view rendering,
//! and the add/edit dialogs.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `SheetProps`, `SheetComponent`).
//! - Provide the `Component` implementation that delegates to
//!   `update::update` and `view::view`.
//! - Trigger the initial fetch and refetch when the routed sheet id changes;
//!   stale responses are dropped by the generation guard in `update`.

use yew::{Component, Context, Html};

mod dialogs;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::SheetProps;
pub use state::SheetComponent;

impl Component for SheetComponent {
    type Message = Msg;
    type Properties = SheetProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Load);
        SheetComponent::new()
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().sheet_id != old_props.sheet_id {
            ctx.link().send_message(Msg::Load);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
