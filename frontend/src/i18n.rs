use serde::{Serialize, Deserialize};
use web_sys::window;
use yew::prelude::*;

const LOCALE_STORAGE_KEY: &str = "locale";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    Ru,
    En,
}

impl Locale {
    fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.to_ascii_lowercase();
        if tag == "ru" {
            Some(Locale::Ru)
        } else if tag == "en" {
            Some(Locale::En)
        } else {
            None
        }
    }

    /// Startup detection: a saved preference wins over the browser language;
    /// Russian is the default. Storage failures are treated as no preference.
    pub fn detect() -> Self {
        let Some(window) = window() else { return Locale::Ru };

        if let Some(storage) = window.local_storage().ok().flatten() {
            if let Ok(Some(saved)) = storage.get_item(LOCALE_STORAGE_KEY) {
                if let Some(locale) = Locale::from_tag(&saved) {
                    return locale;
                }
            }
        }

        if let Some(language) = window.navigator().language() {
            if language.to_ascii_lowercase().starts_with("en") {
                return Locale::En;
            }
        }
        Locale::Ru
    }

    pub fn store(self) {
        if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(LOCALE_STORAGE_KEY, self.tag());
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Locale::Ru => "ru",
            Locale::En => "en",
        }
    }
}

/// Every translatable string on the page. The per-locale mapping below is
/// exhaustive, so a missing translation is a compile error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    VipAccess,
    Online,
    TryLuck,
    PersonalBonus,
    ExclusiveAccess,
    MegaJackpot,
    Attempt,
    Of,
    SpotsLeft,
    Spin,
    Spinning,
    Loading,
    Jackpot,
    AccessUnlocked,
    BonusReady,
    BonusReadyEnd,
    PromoCodeLabel,
    Copied,
    ClaimBonus,
    TimeLeft,
    Secure,
    Ssl,
    FeedGotBonus,
    FeedActivatedSpins,
    FeedWonJackpot,
}

pub fn tr(locale: Locale, text: Text) -> &'static str {
    match locale {
        Locale::Ru => match text {
            Text::VipAccess => "VIP ACCESS",
            Text::Online => "онлайн",
            Text::TryLuck => "Испытай удачу:",
            Text::PersonalBonus => "Твой персональный бонус",
            Text::ExclusiveAccess => "Эксклюзивный доступ к приватному раунду бонусной игры.",
            Text::MegaJackpot => "★ MEGA JACKPOT ★",
            Text::Attempt => "Попытка",
            Text::Of => "из",
            Text::SpotsLeft => "Осталось мест:",
            Text::Spin => "КРУТИТЬ",
            Text::Spinning => "КРУТИМ...",
            Text::Loading => "Загрузка VIP доступа...",
            Text::Jackpot => "ДЖЕКПОТ!",
            Text::AccessUnlocked => "Доступ разблокирован",
            Text::BonusReady => "Бонус",
            Text::BonusReadyEnd => "готов к активации",
            Text::PromoCodeLabel => "ПРОМОКОД:",
            Text::Copied => "Скопировано!",
            Text::ClaimBonus => "ЗАБРАТЬ ВЫИГРЫШ",
            Text::TimeLeft => "Резерв:",
            Text::Secure => "SECURE",
            Text::Ssl => "SSL 256-BIT",
            Text::FeedGotBonus => "получил +500% бонус",
            Text::FeedActivatedSpins => "активировал 70 фриспинов",
            Text::FeedWonJackpot => "выиграл джекпот $15,000",
        },
        Locale::En => match text {
            Text::VipAccess => "VIP ACCESS",
            Text::Online => "online",
            Text::TryLuck => "Try your luck:",
            Text::PersonalBonus => "Your personal bonus",
            Text::ExclusiveAccess => "Exclusive access to private bonus game round.",
            Text::MegaJackpot => "★ MEGA JACKPOT ★",
            Text::Attempt => "Attempt",
            Text::Of => "of",
            Text::SpotsLeft => "Spots left:",
            Text::Spin => "SPIN",
            Text::Spinning => "SPINNING...",
            Text::Loading => "Loading VIP access...",
            Text::Jackpot => "JACKPOT!",
            Text::AccessUnlocked => "Access unlocked",
            Text::BonusReady => "Bonus",
            Text::BonusReadyEnd => "ready to activate",
            Text::PromoCodeLabel => "PROMO CODE:",
            Text::Copied => "Copied!",
            Text::ClaimBonus => "CLAIM BONUS",
            Text::TimeLeft => "Reserved:",
            Text::Secure => "SECURE",
            Text::Ssl => "SSL 256-BIT",
            Text::FeedGotBonus => "got +500% bonus",
            Text::FeedActivatedSpins => "activated 70 free spins",
            Text::FeedWonJackpot => "won jackpot $15,000",
        },
    }
}

/// Locale state shared through the component tree.
#[derive(Clone, PartialEq)]
pub struct LocaleContext {
    pub locale: Locale,
    pub set_locale: Callback<Locale>,
}

impl LocaleContext {
    pub fn t(&self, text: Text) -> &'static str {
        tr(self.locale, text)
    }
}
