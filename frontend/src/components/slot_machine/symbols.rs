use shared::slot_machine::Symbol;
use yew::prelude::*;

/// Inline SVG for each reel symbol, sized by the surrounding reel cell.
pub fn symbol_svg(symbol: Symbol) -> Html {
    match symbol {
        Symbol::Seven => html! {
            <svg viewBox="0 0 64 64" width="100%" height="100%">
                <defs>
                    <linearGradient id="sym-seven" x1="0" y1="0" x2="0" y2="1">
                        <stop offset="0%" stop-color="#fde68a" />
                        <stop offset="100%" stop-color="#f59e0b" />
                    </linearGradient>
                </defs>
                <text x="32" y="46" text-anchor="middle" font-size="44" font-weight="900"
                    font-family="Arial Black, sans-serif" fill="url(#sym-seven)"
                    stroke="#b45309" stroke-width="1.5">{ "7" }</text>
            </svg>
        },
        Symbol::Diamond => html! {
            <svg viewBox="0 0 64 64" width="100%" height="100%">
                <polygon points="32,6 56,26 32,58 8,26" fill="#60a5fa" stroke="#2563eb" stroke-width="2" />
                <polygon points="32,6 42,26 32,58 22,26" fill="#93c5fd" />
                <line x1="8" y1="26" x2="56" y2="26" stroke="#2563eb" stroke-width="1.5" />
            </svg>
        },
        Symbol::Bar => html! {
            <svg viewBox="0 0 64 64" width="100%" height="100%">
                <rect x="6" y="20" width="52" height="24" rx="5"
                    fill="#1e293b" stroke="#f59e0b" stroke-width="2.5" />
                <text x="32" y="38" text-anchor="middle" font-size="15" font-weight="900"
                    font-family="Arial Black, sans-serif" fill="#fbbf24">{ "BAR" }</text>
            </svg>
        },
        Symbol::Cherry => html! {
            <svg viewBox="0 0 64 64" width="100%" height="100%">
                <path d="M 34 8 Q 22 18 20 38 M 34 8 Q 42 20 46 36"
                    fill="none" stroke="#16a34a" stroke-width="3" stroke-linecap="round" />
                <circle cx="20" cy="44" r="11" fill="#ef4444" stroke="#b91c1c" stroke-width="2" />
                <circle cx="46" cy="42" r="11" fill="#dc2626" stroke="#b91c1c" stroke-width="2" />
                <circle cx="17" cy="40" r="3" fill="#fca5a5" />
            </svg>
        },
        Symbol::Coin => html! {
            <svg viewBox="0 0 64 64" width="100%" height="100%">
                <circle cx="32" cy="32" r="25" fill="#fbbf24" stroke="#b45309" stroke-width="3" />
                <circle cx="32" cy="32" r="18" fill="none" stroke="#b45309" stroke-width="1.5"
                    stroke-dasharray="3 3" />
                <text x="32" y="41" text-anchor="middle" font-size="26" font-weight="900"
                    font-family="Arial Black, sans-serif" fill="#92400e">{ "$" }</text>
            </svg>
        },
        Symbol::Crown => html! {
            <svg viewBox="0 0 64 64" width="100%" height="100%">
                <path d="M 10 46 L 8 20 L 22 32 L 32 14 L 42 32 L 56 20 L 54 46 Z"
                    fill="#fbbf24" stroke="#b45309" stroke-width="2.5" stroke-linejoin="round" />
                <rect x="10" y="46" width="44" height="7" rx="2"
                    fill="#f59e0b" stroke="#b45309" stroke-width="2" />
                <circle cx="32" cy="30" r="3.5" fill="#ef4444" />
            </svg>
        },
    }
}
