//! Best-effort browser effects: audio, haptics, clipboard. Every failure
//! here (autoplay blocked, API unsupported, permission denied) is swallowed;
//! nothing in the game reacts to it.

use js_sys::{Array, Reflect};
use shared::slot_machine::Sound;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

const SPIN_SOUND_URL: &str = "https://assets.mixkit.co/active_storage/sfx/2003/2003-preview.mp3";
const WIN_SOUND_URL: &str = "https://assets.mixkit.co/active_storage/sfx/1435/1435-preview.mp3";
const REEL_STOP_SOUND_URL: &str = "https://assets.mixkit.co/active_storage/sfx/270/270-preview.mp3";

const SOUND_VOLUME: f64 = 0.3;

/// Preloaded audio elements for the three machine sounds. Elements that fail
/// to construct stay `None` and playing them is a no-op.
pub struct SoundBank {
    spin: Option<HtmlAudioElement>,
    reel_stop: Option<HtmlAudioElement>,
    win: Option<HtmlAudioElement>,
}

impl SoundBank {
    pub fn new() -> Self {
        Self {
            spin: load_sound(SPIN_SOUND_URL),
            reel_stop: load_sound(REEL_STOP_SOUND_URL),
            win: load_sound(WIN_SOUND_URL),
        }
    }

    pub fn play(&self, sound: Sound) {
        let audio = match sound {
            Sound::Spin => &self.spin,
            Sound::ReelStop => &self.reel_stop,
            Sound::Win => &self.win,
        };
        if let Some(audio) = audio {
            audio.set_current_time(0.0);
            // Autoplay may be blocked; the rejected promise is dropped.
            let _ = audio.play();
        }
    }
}

impl Default for SoundBank {
    fn default() -> Self {
        Self::new()
    }
}

fn load_sound(url: &str) -> Option<HtmlAudioElement> {
    let audio = HtmlAudioElement::new_with_src(url).ok()?;
    audio.set_volume(SOUND_VOLUME);
    audio.load();
    Some(audio)
}

/// Vibrates with the given millisecond pattern where the API exists.
pub fn vibrate(pattern: &[u32]) {
    let Some(window) = web_sys::window() else { return };
    let navigator = window.navigator();
    // Guard: calling an absent binding would throw.
    if !Reflect::has(&navigator, &JsValue::from_str("vibrate")).unwrap_or(false) {
        return;
    }
    let millis = Array::new();
    for ms in pattern {
        millis.push(&JsValue::from_f64(f64::from(*ms)));
    }
    let _ = navigator.vibrate_with_pattern(&millis);
}

/// Writes `text` to the clipboard, reporting success so the caller can show
/// transient feedback. Denied or unavailable clipboards report `false`.
pub async fn copy_to_clipboard(text: &str) -> bool {
    let Some(window) = web_sys::window() else { return false };
    let clipboard = window.navigator().clipboard();
    JsFuture::from(clipboard.write_text(text)).await.is_ok()
}
