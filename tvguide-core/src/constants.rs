/// Reference deployment: the schedule page for a single channel.
pub const DEFAULT_SOURCE_URL: &str = "https://tvschedule.today/in/tv-schedule/hare-krsna";

/// Query parameter the source uses to select a day.
pub const DEFAULT_DAY_PARAM: &str = "date";

pub const DEFAULT_CHANNEL: &str = "Hare Krsna";

/// Fixed UTC offset of the listings (IST).
pub const DEFAULT_UTC_OFFSET: &str = "+05:30";

pub const DEFAULT_DAY_OPTION_SELECTOR: &str = "option";

// The row class string is matched exactly, double space included.
pub const DEFAULT_ROW_SELECTOR: &str =
    "div[class='p-4 shadow rounded-lg flex items-center gap-6  transition-all duration-200 ']";

pub const DEFAULT_TITLE_SELECTOR: &str = "h3.text-xl.font-semibold";

pub const DEFAULT_TIME_RANGE_SELECTOR: &str = "span.text-lg";

/// Token layout of a day-selector value.
pub const DAY_TOKEN_FORMAT: &str = "%Y%m%d";

/// Display layout written back onto a day once its token parses.
pub const DAY_DISPLAY_FORMAT: &str = "%d.%m.%Y";

/// Layout of stored local times.
pub const LOCAL_TIME_FORMAT: &str = "%H:%M";

pub const DEFAULT_OUTPUT: &str = "epg.csv";
