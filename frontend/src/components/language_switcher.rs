use yew::prelude::*;

use crate::hooks::use_locale;
use crate::i18n::Locale;
use crate::styles;

#[function_component(LanguageSwitcher)]
pub fn language_switcher() -> Html {
    let ctx = use_locale();

    let button = |locale: Locale, label: &'static str| {
        let class = if ctx.locale == locale {
            styles::LANG_BUTTON_ACTIVE
        } else {
            styles::LANG_BUTTON
        };
        let onclick = {
            let set_locale = ctx.set_locale.clone();
            Callback::from(move |_| set_locale.emit(locale))
        };
        html! {
            <button {class} {onclick}>{ label }</button>
        }
    };

    html! {
        <div class={styles::LANG_SWITCH}>
            { button(Locale::Ru, "RU") }
            { button(Locale::En, "EN") }
        </div>
    }
}
