use gloo_timers::callback::Interval;
use rand::seq::SliceRandom;
use shared::constants::SYMBOL_CYCLE_INTERVAL_MS;
use shared::slot_machine::{Symbol, JACKPOT_SYMBOL, SYMBOLS};
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ReelProps {
    pub spinning: bool,
    pub symbol: Symbol,
}

pub enum ReelMsg {
    Cycle,
}

/// A single reel window. While `spinning` it flips through random symbols
/// on a fast timer for the blur effect; when the prop drops it snaps to the
/// final `symbol` and plays the settle animation.
pub struct Reel {
    display: Symbol,
    cycle: Option<Interval>,
}

impl Component for Reel {
    type Message = ReelMsg;
    type Properties = ReelProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut reel = Self {
            display: ctx.props().symbol,
            cycle: None,
        };
        if ctx.props().spinning {
            reel.start_cycling(ctx);
        }
        reel
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ReelMsg::Cycle => {
                let mut rng = rand::thread_rng();
                self.display = *SYMBOLS.choose(&mut rng).unwrap_or(&JACKPOT_SYMBOL);
                true
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().spinning && !old_props.spinning {
            self.start_cycling(ctx);
        } else if !ctx.props().spinning {
            self.cycle = None;
            self.display = ctx.props().symbol;
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let spinning = ctx.props().spinning;
        let reel_class = if spinning {
            classes!(styles::REEL)
        } else {
            classes!(styles::REEL, styles::REEL_SETTLED)
        };
        let symbol_class = if spinning {
            styles::REEL_SYMBOL_SPINNING
        } else {
            styles::REEL_SYMBOL
        };

        html! {
            <div class={reel_class}>
                <div class={styles::REEL_SHADE_TOP}></div>
                <div class={styles::REEL_SHADE_BOTTOM}></div>
                <div class={symbol_class}>
                    <div class={styles::REEL_SYMBOL_INNER}>
                        { super::symbols::symbol_svg(self.display) }
                    </div>
                </div>
            </div>
        }
    }
}

impl Reel {
    fn start_cycling(&mut self, ctx: &Context<Self>) {
        let link = ctx.link().clone();
        self.cycle = Some(Interval::new(SYMBOL_CYCLE_INTERVAL_MS, move || {
            link.send_message(ReelMsg::Cycle);
        }));
    }
}
