use gloo_timers::callback::Interval;
use shared::decor;
use yew::prelude::*;

use crate::hooks::use_locale;
use crate::i18n::Text;
use crate::styles;

const ROTATE_INTERVAL_MS: u32 = 3_000;

const FEED_MESSAGES: [Text; 3] = [
    Text::FeedGotBonus,
    Text::FeedActivatedSpins,
    Text::FeedWonJackpot,
];

/// Advances the ticker one message, wrapping around the canned list.
fn next_message_index(current: usize) -> usize {
    (current + 1) % FEED_MESSAGES.len()
}

/// Rotating "someone just won" ticker. Entirely decorative; the messages
/// cycle in order and a fresh anonymous visitor tag is generated on every
/// rotation.
#[function_component(LiveFeed)]
pub fn live_feed() -> Html {
    let ctx = use_locale();
    let index = use_state(|| 0usize);
    let tag = use_state(|| decor::visitor_tag(&mut rand::thread_rng()));

    {
        let index = index.clone();
        let tag = tag.clone();
        use_effect_with((), move |_| {
            let mut current = *index;
            let interval = Interval::new(ROTATE_INTERVAL_MS, move || {
                current = next_message_index(current);
                index.set(current);
                tag.set(decor::visitor_tag(&mut rand::thread_rng()));
            });
            move || drop(interval)
        });
    }

    html! {
        <div class={styles::LIVE_FEED}>
            <div class={styles::LIVE_DOT}></div>
            <span class={styles::LIVE_LABEL}>{ "LIVE" }</span>
            <div class={styles::LIVE_SEPARATOR}></div>
            <span key={*index} class={styles::LIVE_MESSAGE}>
                <span class={styles::LIVE_USER}>{ format!("{} ", *tag) }</span>
                { ctx.t(FEED_MESSAGES[*index]) }
            </span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_cycle_in_order() {
        let mut index = 0;
        let mut seen = Vec::new();
        for _ in 0..FEED_MESSAGES.len() {
            index = next_message_index(index);
            seen.push(index);
        }
        assert_eq!(seen, vec![1, 2, 0], "every message shows before any repeats");
    }
}
