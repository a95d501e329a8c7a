use rand::Rng;
use yew::prelude::*;

use crate::styles;

const PIECE_COUNT: usize = 40;
const COLORS: [&str; 5] = ["#fbbf24", "#f59e0b", "#22c55e", "#3b82f6", "#ef4444"];

/// One burst of falling confetti, rendered over the card after a jackpot.
#[function_component(Confetti)]
pub fn confetti() -> Html {
    let pieces = use_memo((), |_| {
        let mut rng = rand::thread_rng();
        (0..PIECE_COUNT)
            .map(|_| {
                (
                    rng.gen_range(0.0..100.0f32),
                    rng.gen_range(0.0..1.5f32),
                    rng.gen_range(2.0..4.0f32),
                    COLORS[rng.gen_range(0..COLORS.len())],
                )
            })
            .collect::<Vec<_>>()
    });

    html! {
        <div class={styles::CONFETTI_LAYER}>
            { for pieces.iter().map(|(left, delay, duration, color)| {
                let style = format!(
                    "left: {left}%; top: -10px; width: 8px; height: 8px; position: absolute; \
                     background: {color}; \
                     animation: confetti-fall {duration}s ease-in {delay}s forwards;"
                );
                html! { <div {style}></div> }
            }) }
        </div>
    }
}
