mod use_locale;

pub use use_locale::use_locale;
