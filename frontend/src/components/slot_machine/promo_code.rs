use shared::constants::PROMO_CODE;
use yew::prelude::*;

use crate::hooks::use_locale;
use crate::i18n::Text;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct PromoCodeProps {
    pub copied: bool,
    pub on_copy: Callback<()>,
}

/// Promo code panel with the copy button and its transient confirmation.
#[function_component(PromoCodePanel)]
pub fn promo_code_panel(props: &PromoCodeProps) -> Html {
    let ctx = use_locale();
    let onclick = {
        let on_copy = props.on_copy.clone();
        Callback::from(move |_| on_copy.emit(()))
    };

    let button_class = if props.copied {
        styles::COPY_BUTTON_DONE
    } else {
        styles::COPY_BUTTON
    };

    html! {
        <div class={styles::PROMO_PANEL}>
            <div class={styles::PROMO_LABEL}>{ ctx.t(Text::PromoCodeLabel) }</div>
            <div class="flex items-center justify-between gap-3">
                <span class={styles::PROMO_CODE_TEXT}>{ PROMO_CODE }</span>
                <button class={button_class} {onclick}>
                    if props.copied {
                        <svg viewBox="0 0 24 24" width="20" height="20" fill="none"
                            stroke="#22c55e" stroke-width="3" stroke-linecap="round">
                            <path d="M 4 12 L 10 18 L 20 6" />
                        </svg>
                    } else {
                        <svg viewBox="0 0 24 24" width="20" height="20" fill="none"
                            stroke="#fbbf24" stroke-width="2" stroke-linecap="round">
                            <rect x="9" y="9" width="12" height="12" rx="2" />
                            <path d="M 5 15 H 4 a 2 2 0 0 1 -2 -2 V 4 a 2 2 0 0 1 2 -2 h 9 a 2 2 0 0 1 2 2 v 1" />
                        </svg>
                    }
                </button>
            </div>
            if props.copied {
                <div class={styles::COPIED_NOTE}>{ ctx.t(Text::Copied) }</div>
            }
        </div>
    }
}
