use yew::prelude::*;

use crate::i18n::LocaleContext;

/// Locale context provided at the app root. Falls back to a detached
/// Russian context if a component renders outside the provider.
#[hook]
pub fn use_locale() -> LocaleContext {
    use_context::<LocaleContext>().unwrap_or_else(|| LocaleContext {
        locale: crate::i18n::Locale::Ru,
        set_locale: Callback::noop(),
    })
}
