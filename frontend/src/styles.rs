pub const CONTAINER: &str = "min-h-screen w-full bg-white relative flex flex-col items-center justify-center overflow-hidden font-sans";
pub const BG_GLOW: &str = "absolute inset-0 pointer-events-none bg-[radial-gradient(circle_at_50%_10%,rgba(255,107,107,0.08)_0%,rgba(255,255,255,0)_60%)]";
pub const MODAL_OVERLAY: &str = "animate-fade-in fixed inset-0 z-50 flex items-center justify-center bg-white/90 backdrop-blur-md";
pub const MODAL_CARD: &str = "animate-pop-in w-[90%] max-w-[380px] rounded-[32px] bg-white px-6 py-9 text-center shadow-[0_30px_60px_rgba(0,0,0,0.1)] border border-black/5";
pub const MODAL_TITLE: &str = "mb-1 text-2xl font-black text-gray-800";
pub const MODAL_SUBTITLE: &str = "mb-6 text-sm text-gray-400";
pub const INPUT: &str = "mb-5 w-full rounded-2xl border border-gray-100 bg-gray-50 p-4 text-center text-base text-gray-800 outline-none focus:ring-2 focus:ring-rose-300";
pub const BUTTON_GRADIENT: &str = "w-full rounded-2xl border-0 bg-gradient-to-br from-[#FF6B6B] to-[#FF8E99] p-4 text-base font-bold text-white shadow-[0_10px_25px_rgba(255,107,107,0.3)] transition-all duration-300 cursor-pointer";
pub const PRIZE_LIST: &str = "mb-2 flex max-h-[380px] flex-col gap-2.5 overflow-y-auto p-1";
pub const PRIZE_ROW: &str = "flex items-center justify-between rounded-2xl border px-5 py-4 cursor-pointer transition-all duration-200 active:scale-[0.98]";
pub const PRIZE_ROW_EXCLUDED: &str = "border-[#FF6B6B] bg-[rgba(255,107,107,0.03)]";
pub const PRIZE_ROW_KEPT: &str = "border-gray-100 bg-white";
pub const CHECKBOX: &str = "flex h-[22px] w-[22px] items-center justify-center rounded-full border-2";
pub const CHECKBOX_ON: &str = "border-[#FF6B6B] bg-[#FF6B6B]";
pub const CHECKBOX_OFF: &str = "border-gray-300 bg-transparent";
pub const TITLE: &str = "mb-10 text-[32px] font-black tracking-[6px] bg-clip-text text-transparent bg-gradient-to-br from-[#FF6B6B] to-[#FF8E99]";
pub const WHEEL_WRAPPER: &str = "relative rounded-full border border-black/5 bg-white p-4 shadow-[0_20px_60px_rgba(0,0,0,0.06)]";
pub const GO_BUTTON: &str = "absolute left-1/2 top-1/2 flex h-[35%] w-[35%] -translate-x-1/2 -translate-y-1/2 items-center justify-center rounded-full bg-white text-lg font-black text-[#FF6B6B] shadow-lg cursor-pointer select-none";
pub const WARN_TEXT: &str = "animate-fade-in mt-6 font-bold tracking-wide text-[#FF6B6B]";
pub const VISITOR_ID: &str = "mt-8 text-xs text-gray-300";
pub const WHEEL_SCREEN: &str = "animate-rise-in z-10 text-center";
