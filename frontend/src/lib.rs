pub mod analytics;
pub mod components;
pub mod config;
pub mod effects;
pub mod hooks;
pub mod i18n;
pub mod pages;
pub mod styles;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::i18n::{Locale, LocaleContext};
use crate::pages::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    let locale = use_state(Locale::detect);

    let set_locale = {
        let locale = locale.clone();
        Callback::from(move |new_locale: Locale| {
            new_locale.store();
            locale.set(new_locale);
        })
    };

    let context = LocaleContext {
        locale: *locale,
        set_locale,
    };

    html! {
        <ContextProvider<LocaleContext> context={context}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<LocaleContext>>
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        // The preland is a single page; any path lands on it.
        Route::Home | Route::NotFound => html! { <Home /> },
    }
}
