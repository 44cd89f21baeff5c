pub const DEFAULT_ACCESS_CODE: &str = "666";
pub const DEFAULT_FORM_ENDPOINT: &str = "https://formspree.io/f/xqeqbogb";

pub const PARTICIPATION_KEY_PREFIX: &str = "draw_v2_";
pub const PARTICIPATION_FLAG_VALUE: &str = "true";
pub const FINGERPRINT_LEN: usize = 12;

pub const EXCLUDE_COUNT: usize = 2;
pub const WHEEL_PRIZE_COUNT: usize = 6;
pub const CATALOG_SIZE: usize = EXCLUDE_COUNT + WHEEL_PRIZE_COUNT;

pub const SPIN_DELAY_MS: u32 = 2500;  // Lets the spin-up animation play before a landing slot is committed

pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

pub const CONFIRM_READY_LABEL: &str = "Build my wheel";
pub const ALREADY_PARTICIPATED_NOTICE: &str = "You have already taken part today, come back tomorrow";
