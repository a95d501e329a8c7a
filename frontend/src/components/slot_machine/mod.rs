mod promo_code;
mod reel;
mod symbols;

use gloo_timers::callback::{Interval, Timeout};
use shared::constants::{COPIED_FLASH_MS, PROMO_CODE, WINNING_ATTEMPT};
use shared::decor;
use shared::slot_machine::{GamePhase, SlotCommand, SlotEvent, SlotMachine, REEL_COUNT};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::confetti::Confetti;
use crate::effects::{self, SoundBank};
use crate::i18n::{tr, Locale, Text};
use crate::{analytics, config, styles};

use promo_code::PromoCodePanel;
use reel::Reel;

const SHAKE_DURATION_MS: u32 = 150;
const SPOTS_TICK_MS: u32 = 8_000;
const COUNTDOWN_TICK_MS: u32 = 1_000;

#[derive(Properties, PartialEq)]
pub struct SlotMachineProps {
    pub locale: Locale,
}

pub enum Msg {
    Game(SlotEvent),
    Copied(bool),
    ClearCopied,
    ShakeDone,
    SpotsTick,
}

/// The machine widget. Holds the pure state machine plus the browser-side
/// bookkeeping it deliberately knows nothing about: live timers, audio, and
/// the transient animation flags.
pub struct SlotMachineWidget {
    machine: SlotMachine,
    reels_spinning: [bool; REEL_COUNT],
    copied: bool,
    shaking: bool,
    celebrating: bool,
    spots_left: u32,
    visitor_tag: String,
    sounds: SoundBank,
    stop_timers: Vec<Timeout>,
    settle_timer: Option<Timeout>,
    countdown_interval: Option<Interval>,
    copied_timer: Option<Timeout>,
    shake_timer: Option<Timeout>,
    _spots_interval: Interval,
}

impl Component for SlotMachineWidget {
    type Message = Msg;
    type Properties = SlotMachineProps;

    fn create(ctx: &Context<Self>) -> Self {
        let spots_interval = {
            let link = ctx.link().clone();
            Interval::new(SPOTS_TICK_MS, move || link.send_message(Msg::SpotsTick))
        };
        Self {
            machine: SlotMachine::new(),
            reels_spinning: [false; REEL_COUNT],
            copied: false,
            shaking: false,
            celebrating: false,
            spots_left: decor::initial_spots_left(&mut rand::thread_rng()),
            visitor_tag: decor::visitor_tag(&mut rand::thread_rng()),
            sounds: SoundBank::new(),
            stop_timers: Vec::new(),
            settle_timer: None,
            countdown_interval: None,
            copied_timer: None,
            shake_timer: None,
            _spots_interval: spots_interval,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Game(event) => {
                let commands = self.machine.handle(event);
                for command in commands {
                    self.run_command(ctx, command);
                }
                // Mirror reel completion into the animation flags.
                for reel in 0..REEL_COUNT {
                    if self.machine.reel_stopped(reel) {
                        self.reels_spinning[reel] = false;
                    }
                }
                true
            }
            Msg::Copied(succeeded) => {
                if succeeded {
                    self.copied = true;
                    let link = ctx.link().clone();
                    self.copied_timer = Some(Timeout::new(COPIED_FLASH_MS, move || {
                        link.send_message(Msg::ClearCopied);
                    }));
                }
                succeeded
            }
            Msg::ClearCopied => {
                self.copied = false;
                self.copied_timer = None;
                true
            }
            Msg::ShakeDone => {
                self.shaking = false;
                self.shake_timer = None;
                true
            }
            Msg::SpotsTick => {
                let next = decor::next_spots_left(&mut rand::thread_rng(), self.spots_left);
                let changed = next != self.spots_left;
                self.spots_left = next;
                changed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match self.machine.phase() {
            GamePhase::Won => self.view_won(ctx),
            _ => self.view_machine(ctx),
        }
    }
}

impl SlotMachineWidget {
    fn run_command(&mut self, ctx: &Context<Self>, command: SlotCommand) {
        match command {
            SlotCommand::SpinReels { stop_delays_ms, .. } => {
                self.reels_spinning = [true; REEL_COUNT];
                self.stop_timers = stop_delays_ms
                    .iter()
                    .enumerate()
                    .map(|(reel, &delay)| {
                        let link = ctx.link().clone();
                        Timeout::new(delay, move || {
                            link.send_message(Msg::Game(SlotEvent::ReelStopped(reel)));
                        })
                    })
                    .collect();
            }
            SlotCommand::ScheduleSettle { delay_ms } => {
                let link = ctx.link().clone();
                self.settle_timer = Some(Timeout::new(delay_ms, move || {
                    link.send_message(Msg::Game(SlotEvent::SettleElapsed));
                }));
            }
            SlotCommand::PlaySound(sound) => self.sounds.play(sound),
            SlotCommand::Vibrate(pattern) => effects::vibrate(pattern),
            SlotCommand::ShakeFrame => {
                self.shaking = true;
                let link = ctx.link().clone();
                self.shake_timer = Some(Timeout::new(SHAKE_DURATION_MS, move || {
                    link.send_message(Msg::ShakeDone);
                }));
            }
            SlotCommand::Track(event) => analytics::track(&event),
            SlotCommand::Celebrate => self.celebrating = true,
            SlotCommand::StartCountdown => {
                let link = ctx.link().clone();
                self.countdown_interval = Some(Interval::new(COUNTDOWN_TICK_MS, move || {
                    link.send_message(Msg::Game(SlotEvent::CountdownTick));
                }));
            }
            SlotCommand::CopyPromoCode => {
                let link = ctx.link().clone();
                spawn_local(async move {
                    let succeeded = effects::copy_to_clipboard(PROMO_CODE).await;
                    link.send_message(Msg::Copied(succeeded));
                });
            }
            SlotCommand::NavigateToClaim => {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href(&config::claim_url());
                }
            }
        }
    }

    fn view_machine(&self, ctx: &Context<Self>) -> Html {
        let locale = ctx.props().locale;
        let spinning = self.machine.phase() == GamePhase::Spinning;
        let outcome = self.machine.outcome();
        let attempt_label = self.machine.display_attempt();

        let frame_class = if self.shaking {
            classes!(styles::MACHINE_FRAME, "animate-frame-shake")
        } else {
            classes!(styles::MACHINE_FRAME)
        };

        let on_spin = ctx
            .link()
            .callback(|_| Msg::Game(SlotEvent::SpinRequested));

        html! {
            <div class={frame_class}>
                { corner_lights() }
                <div class="text-center mb-4">
                    <div class={styles::JACKPOT_LABEL}>
                        <span class={styles::JACKPOT_LABEL_TEXT}>{ tr(locale, Text::MegaJackpot) }</span>
                    </div>
                </div>
                <div class={styles::REELS_ROW}>
                    <div class={styles::PAYLINE}></div>
                    { for (0..REEL_COUNT).map(|reel| html! {
                        <Reel spinning={self.reels_spinning[reel]} symbol={outcome[reel]} />
                    }) }
                </div>
                <div class="text-center mt-3">
                    <span class={styles::STATUS_LINE}>
                        { format!(
                            "{} {attempt_label} {} {WINNING_ATTEMPT}",
                            tr(locale, Text::Attempt),
                            tr(locale, Text::Of),
                        ) }
                    </span>
                    <div class={styles::SPOTS_ROW}>
                        <div class={styles::SPOTS_DOT}></div>
                        <span class={styles::SPOTS_TEXT}>
                            { format!("{} {}", tr(locale, Text::SpotsLeft), self.spots_left) }
                        </span>
                    </div>
                </div>
                if spinning {
                    <div class={styles::SPINNING_BOX}>
                        <div class={styles::SPINNING_SPINNER}></div>
                        <div class={styles::SPINNING_TEXT}>{ tr(locale, Text::Spinning) }</div>
                    </div>
                } else {
                    <button class={styles::SPIN_BUTTON} onclick={on_spin}>
                        { tr(locale, Text::Spin) }
                    </button>
                }
            </div>
        }
    }

    fn view_won(&self, ctx: &Context<Self>) -> Html {
        let locale = ctx.props().locale;
        let on_copy = ctx
            .link()
            .callback(|_| Msg::Game(SlotEvent::CopyCodeRequested));
        let on_claim = ctx
            .link()
            .callback(|_| Msg::Game(SlotEvent::ClaimRequested));

        html! {
            <div class={styles::WIN_CARD}>
                if self.celebrating {
                    <Confetti />
                }
                <div class={styles::WIN_TROPHY}>{ "🏆" }</div>
                <div class={styles::WIN_TITLE}>{ tr(locale, Text::Jackpot) }</div>
                <div class={styles::WIN_SUBTITLE}>{ tr(locale, Text::AccessUnlocked) }</div>
                <div class={styles::WIN_BONUS_LINE}>
                    { tr(locale, Text::BonusReady) }
                    <span class={styles::WIN_BONUS_ACCENT}>{ " +500% " }</span>
                    { tr(locale, Text::BonusReadyEnd) }
                </div>
                <PromoCodePanel copied={self.copied} on_copy={on_copy} />
                <button class={styles::CTA_BUTTON} onclick={on_claim}>
                    { tr(locale, Text::ClaimBonus) }
                </button>
                <div class={styles::RESERVE_ROW}>
                    <span>{ tr(locale, Text::TimeLeft) }</span>
                    <span class={styles::RESERVE_TIME}>{ self.machine.countdown().format() }</span>
                    <span class={styles::RESERVE_TAG}>{ format!("ID: {}", self.visitor_tag) }</span>
                </div>
            </div>
        }
    }
}

fn corner_lights() -> Html {
    let corners = [
        "top: 8px; left: 8px;",
        "top: 8px; right: 8px;",
        "bottom: 8px; left: 8px;",
        "bottom: 8px; right: 8px; animation-delay: 0.75s;",
    ];
    html! {
        <>
            { for corners.iter().map(|position| html! {
                <div class={styles::CORNER_LIGHT} style={*position}></div>
            }) }
        </>
    }
}
