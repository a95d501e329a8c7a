use rand::Rng;
use yew::prelude::*;

use crate::styles;

const PARTICLE_COUNT: usize = 14;

/// Dim golden specks drifting up behind the card. Positions and timings are
/// randomized once at mount and stay fixed for the session.
#[function_component(Particles)]
pub fn particles() -> Html {
    let specks = use_memo((), |_| {
        let mut rng = rand::thread_rng();
        (0..PARTICLE_COUNT)
            .map(|_| {
                (
                    rng.gen_range(0.0..100.0f32),
                    rng.gen_range(0.0..8.0f32),
                    rng.gen_range(6.0..14.0f32),
                )
            })
            .collect::<Vec<_>>()
    });

    html! {
        <div class={styles::PARTICLE_LAYER}>
            { for specks.iter().map(|(left, delay, duration)| {
                let style = format!(
                    "left: {left}%; bottom: -10px; width: 3px; height: 3px; border-radius: 50%; \
                     background: rgba(251, 191, 36, 0.5); position: absolute; \
                     animation: particle-float {duration}s linear {delay}s infinite;"
                );
                html! { <div {style}></div> }
            }) }
        </div>
    }
}
