use log::Level;

// Money is shown the way en-KE formats KES
pub const CURRENCY_CODE: &str = "KES";
pub const CURRENCY_SYMBOL: &str = "Ksh";
pub const CURRENCY_FRACTION_DIGITS: usize = 2;

pub const TAX_RATE: f64 = 0.16; // 16% VAT
pub const DISCOUNT_THRESHOLD: u32 = 100;
pub const DISCOUNT_RATE: f64 = 0.1; // 10% off bulk orders

pub const NOTIFICATION_DISPLAY_MS: u32 = 3000;
pub const NOTIFICATION_EXIT_MS: u32 = 300;
pub const NOTIFICATION_TOP_PX: u32 = 20;
pub const NOTIFICATION_STACK_OFFSET_PX: u32 = 64;

pub const BOX_ANIMATION_SECS: u32 = 3;
pub const BOX_PULSE_SECS: u32 = 2;

pub const DEFAULT_SECTION: &str = "services";

// (quantity, price per unit) pairs run through the calculator on startup
pub const SMALL_ORDER: (u32, f64) = (50, 100.0);
pub const LARGE_ORDER: (u32, f64) = (150, 100.0);

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Chatty while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
