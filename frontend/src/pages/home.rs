use gloo_timers::callback::Timeout;
use shared::decor;
use yew::prelude::*;

use crate::components::language_switcher::LanguageSwitcher;
use crate::components::live_feed::LiveFeed;
use crate::components::particles::Particles;
use crate::components::slot_machine::SlotMachineWidget;
use crate::hooks::use_locale;
use crate::i18n::Text;
use crate::styles;

const LOADER_DELAY_MS: u32 = 800;

/// The landing page: a short fake loading screen, then the card with the
/// machine. Keyframe CSS is injected into <head> on mount.
#[function_component(Home)]
pub fn home() -> Html {
    let ctx = use_locale();
    let loading = use_state(|| true);

    use_effect_with((), |_| {
        inject_custom_css();
    });

    {
        let loading = loading.clone();
        use_effect_with((), move |_| {
            Timeout::new(LOADER_DELAY_MS, move || loading.set(false)).forget();
        });
    }

    let session = use_memo((), |_| {
        let mut rng = rand::thread_rng();
        (decor::session_id(&mut rng), decor::initial_online_count(&mut rng))
    });
    let (session_id, online_count) = (*session).clone();

    if *loading {
        return html! {
            <div class={styles::PAGE}>
                <div class={styles::PAGE_OVERLAY}></div>
                <div class={styles::LOADER_CARD}>
                    <div class={styles::LOADER_SPINNER}></div>
                    <div class={styles::LOADER_TEXT}>{ ctx.t(Text::Loading) }</div>
                </div>
            </div>
        };
    }

    html! {
        <div class={styles::PAGE}>
            <Particles />
            <div class={styles::PAGE_OVERLAY}></div>
            <div class={styles::CARD}>
                <div class={styles::CARD_TOP_GLOW}></div>

                <div class={styles::TOP_BAR}>
                    <div class={styles::SESSION_BADGE}>
                        <span>{ "🔒" }</span>
                        <span>{ format!("ID: {session_id}") }</span>
                    </div>
                    <div class="flex items-center gap-3">
                        <div class="flex items-center gap-1.5 text-[11px]">
                            <div class={styles::ONLINE_DOT}></div>
                            <span class={styles::ONLINE_COUNT}>{ format_online(online_count) }</span>
                            <span class={styles::ONLINE_LABEL}>{ ctx.t(Text::Online) }</span>
                        </div>
                        <LanguageSwitcher />
                    </div>
                </div>

                <div class={styles::HEADER}>
                    <div class="flex items-center justify-between mb-4">
                        <div class={styles::LOGO}>
                            { "1W" }<span class={styles::LOGO_ACCENT}>{ "IN" }</span>
                        </div>
                        <div class={styles::VIP_BADGE}>
                            <span>{ "⭐" }</span>
                            <span class={styles::VIP_BADGE_TEXT}>{ ctx.t(Text::VipAccess) }</span>
                        </div>
                    </div>
                    <div class={styles::DIVIDER}></div>
                    <h1 class={styles::TITLE}>
                        <span class={styles::TITLE_TOP}>{ ctx.t(Text::TryLuck) }</span>
                        <br />
                        <span class={styles::TITLE_ACCENT}>{ ctx.t(Text::PersonalBonus) }</span>
                    </h1>
                    <p class={styles::SUBTITLE}>{ ctx.t(Text::ExclusiveAccess) }</p>
                </div>

                <div class="px-5 pb-4">
                    <SlotMachineWidget locale={ctx.locale} />
                </div>

                <div class="px-5 pb-4">
                    <LiveFeed />
                </div>

                <div class={styles::FOOTER}>
                    <div class={styles::FOOTER_BADGE}>
                        <span>{ "🛡" }</span>
                        <span>{ ctx.t(Text::Secure) }</span>
                    </div>
                    <div class={styles::FOOTER_BADGE}>
                        <span>{ "🔐" }</span>
                        <span>{ ctx.t(Text::Ssl) }</span>
                    </div>
                    <div class={styles::FOOTER_BADGE}>
                        <span>{ "18+" }</span>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn format_online(count: u32) -> String {
    let thousands = count / 1000;
    let rest = count % 1000;
    format!("{thousands},{rest:03}")
}

fn inject_custom_css() {
    let document = gloo_utils::document();
    if let Some(head) = document.head() {
        if let Ok(style) = document.create_element("style") {
            style.set_text_content(Some(styles::CUSTOM_CSS));
            let _ = head.append_child(&style);
        }
    }
}
