use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use yew::{html, Component, Context, Html};

use crate::pages::group::GroupPage;
use crate::pages::insights::InsightsPage;
use crate::pages::sheet::SheetComponent;
use crate::route::Route;

/// Root component. Owns the current route and hands every page explicit
/// navigation callbacks; pages own all of their remaining state themselves,
/// so there are no ambient providers to forget.
pub struct App {
    route: Route,
    // Kept alive for the lifetime of the app; dropping it would detach the
    // popstate handler.
    _popstate: Closure<dyn FnMut(web_sys::Event)>,
}

pub enum AppMsg {
    Navigate(Route),
    /// Browser back/forward changed the location underneath us.
    RouteChanged(Route),
}

fn current_route() -> Route {
    let path = web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default();
    Route::from_path(&path)
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let popstate = Closure::wrap(Box::new(move |_: web_sys::Event| {
            link.send_message(AppMsg::RouteChanged(current_route()));
        }) as Box<dyn FnMut(web_sys::Event)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", popstate.as_ref().unchecked_ref());
        }

        Self {
            route: current_route(),
            _popstate: popstate,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::Navigate(route) => {
                if let Some(window) = web_sys::window() {
                    let _ = window.history().and_then(|h| {
                        h.push_state_with_url(&JsValue::NULL, "", Some(&route.to_path()))
                    });
                }
                self.route = route;
                true
            }
            AppMsg::RouteChanged(route) => {
                self.route = route;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let navigate = ctx.link().callback(AppMsg::Navigate);

        let page = match &self.route {
            Route::Insights => html! {
                <InsightsPage on_navigate={navigate} />
            },
            Route::Group { alias } => html! {
                <GroupPage alias={alias.clone()} on_navigate={navigate} />
            },
            Route::Sheet { alias, id } => html! {
                <SheetComponent alias={alias.clone()} sheet_id={*id} on_navigate={navigate} />
            },
        };

        html! {
            <div class="app-shell">
                { page }
            </div>
        }
    }
}
