/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// One color per day-rating value 1..=5, worst to best.
pub const RATING_COLORS: [&str; 5] = [RED, YELLOW, GREY, CYAN, GREEN];

pub fn color_for_rating(rating: u8) -> &'static str {
    RATING_COLORS
        .get(rating.saturating_sub(1) as usize)
        .copied()
        .unwrap_or(RESET)
}
