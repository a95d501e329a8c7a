pub const PAGE: &str = "min-h-screen flex items-center justify-center p-4 bg-gray-950 relative overflow-hidden";
pub const PAGE_OVERLAY: &str = "absolute inset-0 bg-gradient-to-b from-gray-950/30 via-gray-950/70 to-gray-950/95";
pub const LOADER_CARD: &str = "w-full max-w-[420px] z-10 bg-slate-900 rounded-3xl p-10 text-center";
pub const LOADER_SPINNER: &str = "animate-spin w-12 h-12 mx-auto mb-5 border-[3px] border-blue-500/20 border-t-blue-500 rounded-full";
pub const LOADER_TEXT: &str = "animate-pulse text-slate-400 text-sm";

pub const CARD: &str = "w-full max-w-[420px] z-10 rounded-3xl bg-slate-900/75 backdrop-blur-2xl border border-white/10 shadow-2xl shadow-black/80 overflow-hidden relative animate-card-in";
pub const CARD_TOP_GLOW: &str = "absolute top-0 left-[20%] right-[20%] h-0.5 bg-gradient-to-r from-transparent via-blue-500 to-transparent shadow-[0_0_20px_#3b82f6]";

pub const TOP_BAR: &str = "flex items-center justify-between px-5 py-3.5 border-b border-white/5 bg-black/30";
pub const SESSION_BADGE: &str = "flex items-center gap-2 font-mono text-[10px] text-blue-500 bg-blue-500/10 px-2 py-1 rounded border border-blue-500/20";
pub const ONLINE_DOT: &str = "w-1.5 h-1.5 rounded-full bg-green-500 shadow-[0_0_10px_#22c55e] animate-pulse";
pub const ONLINE_COUNT: &str = "text-green-500 font-bold";
pub const ONLINE_LABEL: &str = "text-slate-400/70";

pub const HEADER: &str = "px-6 pt-6 pb-4";
pub const LOGO: &str = "text-2xl font-black italic tracking-tight text-white";
pub const LOGO_ACCENT: &str = "text-blue-500";
pub const VIP_BADGE: &str = "flex items-center gap-2 px-4 py-2.5 rounded-full bg-gradient-to-br from-blue-500/25 to-violet-500/25 border border-blue-500/50 animate-badge-glow cursor-pointer relative overflow-hidden";
pub const VIP_BADGE_TEXT: &str = "text-[11px] font-bold text-blue-500 tracking-widest relative";
pub const DIVIDER: &str = "h-px mb-5 bg-gradient-to-r from-transparent via-blue-500/40 to-transparent";
pub const TITLE: &str = "text-2xl font-black uppercase leading-tight mb-2 text-center";
pub const TITLE_TOP: &str = "bg-gradient-to-b from-white to-slate-400 bg-clip-text text-transparent";
pub const TITLE_ACCENT: &str = "text-blue-500 drop-shadow-[0_0_40px_rgba(59,130,246,0.6)]";
pub const SUBTITLE: &str = "text-slate-400/80 text-[13px] text-center";

pub const MACHINE_FRAME: &str = "rounded-[20px] p-5 bg-gradient-to-b from-slate-900 to-gray-950 border-[3px] border-amber-400/70 shadow-[0_0_40px_rgba(251,191,36,0.2),inset_0_0_60px_rgba(0,0,0,0.5)] relative overflow-hidden";
pub const CORNER_LIGHT: &str = "absolute w-2 h-2 rounded-full bg-amber-400 shadow-[0_0_15px_#fbbf24] animate-corner-blink";
pub const JACKPOT_LABEL: &str = "inline-block px-6 py-2.5 rounded-full bg-gradient-to-br from-amber-400/20 to-amber-500/30 border-2 border-amber-400/50 animate-jackpot-pulse";
pub const JACKPOT_LABEL_TEXT: &str = "text-sm font-black text-amber-400 tracking-[3px]";
pub const REELS_ROW: &str = "flex items-center justify-center gap-2.5 relative py-2.5";
pub const PAYLINE: &str = "absolute left-[5%] right-[5%] top-1/2 -translate-y-1/2 h-1 bg-gradient-to-r from-transparent via-amber-400 to-transparent shadow-[0_0_15px_#fbbf24] pointer-events-none";
pub const REEL: &str = "w-[90px] h-[110px] rounded-xl relative overflow-hidden bg-gradient-to-b from-slate-900 via-slate-800 to-slate-900 border-[3px] border-amber-500/80 shadow-[inset_0_0_30px_rgba(0,0,0,0.8),0_0_20px_rgba(251,191,36,0.3)]";
pub const REEL_SETTLED: &str = "animate-reel-settle";
pub const REEL_SHADE_TOP: &str = "absolute top-0 inset-x-0 h-[35%] bg-gradient-to-b from-black/90 to-transparent z-[5] pointer-events-none";
pub const REEL_SHADE_BOTTOM: &str = "absolute bottom-0 inset-x-0 h-[35%] bg-gradient-to-t from-black/90 to-transparent z-[5] pointer-events-none";
pub const REEL_SYMBOL: &str = "absolute inset-0 flex items-center justify-center p-[15px]";
pub const REEL_SYMBOL_SPINNING: &str = "absolute inset-0 flex items-center justify-center p-[15px] blur-[4px]";
pub const REEL_SYMBOL_INNER: &str = "w-[65px] h-[65px] animate-symbol-land";
pub const STATUS_LINE: &str = "text-xs text-amber-400/60 font-mono";
pub const SPOTS_ROW: &str = "flex items-center justify-center gap-1.5 mt-3";
pub const SPOTS_DOT: &str = "w-1.5 h-1.5 rounded-full bg-red-500 animate-pulse";
pub const SPOTS_TEXT: &str = "text-[11px] text-red-500 font-semibold";

pub const SPIN_BUTTON: &str = "w-full mt-4 py-5 rounded-2xl font-black text-xl tracking-[3px] text-gray-900 bg-gradient-to-b from-amber-300 via-amber-500 to-amber-600 shadow-[0_4px_0_#b45309,0_8px_30px_rgba(251,191,36,0.4)] hover:scale-[1.02] active:scale-[0.98] active:translate-y-0.5 transition-all relative overflow-hidden";
pub const SPINNING_BOX: &str = "text-center p-6";
pub const SPINNING_SPINNER: &str = "inline-block w-8 h-8 border-[3px] border-amber-400 border-t-transparent rounded-full animate-spin";
pub const SPINNING_TEXT: &str = "mt-3 font-bold text-amber-400 text-sm";

pub const WIN_CARD: &str = "rounded-[20px] p-6 text-center bg-gradient-to-b from-slate-900 to-gray-950 border-[3px] border-amber-400/70 shadow-[0_0_60px_rgba(251,191,36,0.3),inset_0_0_40px_rgba(0,0,0,0.5)] relative overflow-hidden animate-card-in";
pub const WIN_TROPHY: &str = "text-6xl mb-4 animate-trophy-bounce";
pub const WIN_TITLE: &str = "text-3xl font-black mb-2 text-amber-400 drop-shadow-[0_0_30px_rgba(251,191,36,0.6)]";
pub const WIN_SUBTITLE: &str = "text-lg font-bold text-white mb-1";
pub const WIN_BONUS_LINE: &str = "text-sm text-slate-400/80 mb-5";
pub const WIN_BONUS_ACCENT: &str = "text-amber-400 font-bold";

pub const PROMO_PANEL: &str = "rounded-2xl p-5 bg-gradient-to-b from-black/70 to-black/90 border-2 border-amber-400/40 shadow-[inset_0_0_30px_rgba(0,0,0,0.5),0_0_30px_rgba(251,191,36,0.15)] relative overflow-hidden";
pub const PROMO_LABEL: &str = "text-[10px] text-amber-400/60 font-mono mb-2 tracking-[2px]";
pub const PROMO_CODE_TEXT: &str = "text-[28px] font-black tracking-[3px] text-amber-400 font-mono drop-shadow-[0_0_10px_rgba(251,191,36,0.8)]";
pub const COPY_BUTTON: &str = "p-3 rounded-[10px] bg-amber-400/15 border border-amber-400/30 hover:bg-amber-400/25 transition-all";
pub const COPY_BUTTON_DONE: &str = "p-3 rounded-[10px] bg-green-500/20 border border-green-500/50 transition-all";
pub const COPIED_NOTE: &str = "text-center mt-2 text-xs text-green-500 animate-fade-in";

pub const CTA_BUTTON: &str = "w-full mt-4 py-[22px] rounded-2xl font-black text-[17px] tracking-wide text-white bg-gradient-to-b from-green-500 via-green-600 to-green-700 shadow-[0_4px_0_#166534,0_8px_30px_rgba(34,197,94,0.4)] animate-cta-pulse hover:scale-[1.05] active:scale-[0.98] transition-all relative overflow-hidden";
pub const RESERVE_ROW: &str = "flex items-center justify-center gap-2 mt-4 text-[11px] text-slate-400/70";
pub const RESERVE_TIME: &str = "font-mono font-bold text-white";
pub const RESERVE_TAG: &str = "text-amber-400";

pub const LIVE_FEED: &str = "rounded-xl px-4 py-3 bg-black/60 border border-white/5 flex items-center justify-center gap-3";
pub const LIVE_DOT: &str = "w-1.5 h-1.5 rounded-full bg-green-500 animate-pulse";
pub const LIVE_LABEL: &str = "text-[10px] font-bold text-white/40 uppercase tracking-widest";
pub const LIVE_SEPARATOR: &str = "w-px h-3.5 bg-white/10";
pub const LIVE_MESSAGE: &str = "text-[11px] text-white/70 font-mono whitespace-nowrap overflow-hidden text-ellipsis animate-fade-in";
pub const LIVE_USER: &str = "text-slate-500";

pub const FOOTER: &str = "flex items-center justify-center gap-2.5 px-6 py-4 border-t border-white/5 bg-black/20";
pub const FOOTER_BADGE: &str = "flex items-center gap-1.5 px-2.5 py-1.5 rounded-md bg-white/[0.03] border border-white/[0.04] text-[9px] font-semibold text-slate-400/80 tracking-wide";

pub const LANG_SWITCH: &str = "flex gap-1 bg-white/5 rounded-lg p-1 border border-white/10";
pub const LANG_BUTTON: &str = "px-3 py-1.5 rounded-md text-xs font-semibold text-slate-400/70 hover:text-slate-200 transition-all";
pub const LANG_BUTTON_ACTIVE: &str = "px-3 py-1.5 rounded-md text-xs font-semibold bg-blue-500/30 text-blue-500 transition-all";

pub const PARTICLE_LAYER: &str = "fixed inset-0 overflow-hidden pointer-events-none z-0";
pub const CONFETTI_LAYER: &str = "absolute inset-0 overflow-hidden pointer-events-none z-20";

/// Keyframes the utility classes above rely on; injected into <head> when
/// the page mounts.
pub const CUSTOM_CSS: &str = r#"
@keyframes card-in {
    0% { opacity: 0; transform: translateY(20px) scale(0.98); }
    100% { opacity: 1; transform: translateY(0) scale(1); }
}

@keyframes corner-blink {
    0%, 100% { opacity: 0.3; transform: scale(0.8); }
    50% { opacity: 1; transform: scale(1.2); }
}

@keyframes jackpot-pulse {
    0%, 100% { transform: scale(1); text-shadow: 0 0 20px rgba(251, 191, 36, 0.5); }
    50% { transform: scale(1.03); text-shadow: 0 0 40px rgba(251, 191, 36, 0.8); }
}

@keyframes badge-glow {
    0%, 100% { box-shadow: 0 0 15px rgba(59, 130, 246, 0.3); }
    50% { box-shadow: 0 0 30px rgba(139, 92, 246, 0.6); }
}

@keyframes symbol-land {
    0% { transform: scale(0.5) rotateY(180deg); }
    100% { transform: scale(1) rotateY(0deg); }
}

@keyframes reel-settle {
    0% { transform: translateY(0); }
    40% { transform: translateY(-6px); }
    100% { transform: translateY(0); }
}

@keyframes frame-shake {
    0%, 100% { transform: translateX(0); }
    25% { transform: translateX(-4px); }
    55% { transform: translateX(4px); }
    80% { transform: translateX(-2px); }
}

@keyframes trophy-bounce {
    0%, 100% { transform: scale(1) rotate(0deg); }
    25% { transform: scale(1.15) rotate(5deg); }
    75% { transform: scale(1.15) rotate(-5deg); }
}

@keyframes cta-pulse {
    0%, 100% { transform: scale(1); box-shadow: 0 4px 0 #166534, 0 8px 30px rgba(34, 197, 94, 0.4); }
    50% { transform: scale(1.02); box-shadow: 0 4px 0 #166534, 0 15px 50px rgba(34, 197, 94, 0.6); }
}

@keyframes fade-in {
    0% { opacity: 0; }
    100% { opacity: 1; }
}

@keyframes particle-float {
    0% { transform: translateY(0); opacity: 0; }
    20% { opacity: 0.5; }
    80% { opacity: 0.5; }
    100% { transform: translateY(-40vh); opacity: 0; }
}

@keyframes confetti-fall {
    0% { transform: translateY(-10%) rotate(0deg); opacity: 1; }
    100% { transform: translateY(110vh) rotate(720deg); opacity: 0; }
}

.animate-card-in { animation: card-in 0.5s ease-out; }
.animate-corner-blink { animation: corner-blink 1.5s ease-in-out infinite; }
.animate-jackpot-pulse { animation: jackpot-pulse 2s ease-in-out infinite; }
.animate-badge-glow { animation: badge-glow 2s ease-in-out infinite; }
.animate-symbol-land { animation: symbol-land 0.3s cubic-bezier(0.34, 1.56, 0.64, 1); }
.animate-reel-settle { animation: reel-settle 0.3s ease-out; }
.animate-frame-shake { animation: frame-shake 0.12s ease-in-out; }
.animate-trophy-bounce { animation: trophy-bounce 2s ease-in-out infinite; }
.animate-cta-pulse { animation: cta-pulse 1.5s ease-in-out infinite; }
.animate-fade-in { animation: fade-in 0.3s ease-in; }
"#;
