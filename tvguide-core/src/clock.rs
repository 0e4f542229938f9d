//! 12-hour clock strings as printed by the schedule site.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl FromStr for Meridiem {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AM" => Ok(Meridiem::Am),
            "PM" => Ok(Meridiem::Pm),
            _ => Err(()),
        }
    }
}

/// A wall-clock time in `H:MM AM/PM` form.
///
/// Parsing only accepts hours 0-12 and minutes 0-59, so every value
/// converts to a valid 24-hour time. Hour 0 reads as 12 of the same half.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock12 {
    hour: u32,
    minute: u32,
    meridiem: Meridiem,
}

impl Clock12 {
    pub fn meridiem(&self) -> Meridiem {
        self.meridiem
    }

    /// 12 AM is midnight, 12 PM is noon, other PM hours shift by 12.
    pub fn hour24(&self) -> u32 {
        match (self.meridiem, self.hour) {
            (Meridiem::Am, 12) => 0,
            (Meridiem::Pm, 0) => 12,
            (Meridiem::Pm, h) if h != 12 => h + 12,
            (_, h) => h,
        }
    }

    /// Zero-padded `HH:MM`.
    pub fn to_24_hour_string(&self) -> String {
        format!("{:02}:{:02}", self.hour24(), self.minute)
    }
}

impl FromStr for Clock12 {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(' ').collect();
        let [numeral, marker] = parts.as_slice() else {
            return Err(());
        };

        let (hour, minute) = numeral.split_once(':').ok_or(())?;
        let hour: u32 = hour.parse().map_err(|_| ())?;
        let minute: u32 = minute.parse().map_err(|_| ())?;

        if hour > 12 || minute > 59 {
            return Err(());
        }

        Ok(Clock12 {
            hour,
            minute,
            meridiem: marker.parse()?,
        })
    }
}

impl fmt::Display for Clock12 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.meridiem {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        };
        write!(f, "{:02}:{:02} {}", self.hour, self.minute, marker)
    }
}

/// Convert `"H:MM AM/PM"` to `"HH:MM"`.
///
/// Returns `None` for anything that is not a well-formed 12-hour time.
pub fn to_24_hour(time12: &str) -> Option<String> {
    time12
        .parse::<Clock12>()
        .ok()
        .map(|clock| clock.to_24_hour_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midnight_and_noon() {
        assert_eq!(to_24_hour("12:00 AM").as_deref(), Some("00:00"));
        assert_eq!(to_24_hour("12:00 PM").as_deref(), Some("12:00"));
        assert_eq!(to_24_hour("12:45 AM").as_deref(), Some("00:45"));
    }

    #[test]
    fn test_afternoon_hours_shift() {
        assert_eq!(to_24_hour("01:05 PM").as_deref(), Some("13:05"));
        assert_eq!(to_24_hour("11:59 PM").as_deref(), Some("23:59"));
        assert_eq!(to_24_hour("9:30 AM").as_deref(), Some("09:30"));
    }

    #[test]
    fn test_malformed_input_yields_none() {
        assert_eq!(to_24_hour("abc"), None);
        assert_eq!(to_24_hour("13:00"), None);
        assert_eq!(to_24_hour(""), None);
        assert_eq!(to_24_hour("10:00 XM"), None);
        assert_eq!(to_24_hour("10:xx AM"), None);
        assert_eq!(to_24_hour("13:00 PM"), None);
        assert_eq!(to_24_hour("10:60 AM"), None);
        assert_eq!(to_24_hour("10:00  AM"), None);
    }

    #[test]
    fn test_zero_hour() {
        assert_eq!(to_24_hour("00:15 AM").as_deref(), Some("00:15"));
        assert_eq!(to_24_hour("0:15 AM").as_deref(), Some("00:15"));
        assert_eq!(to_24_hour("00:15 PM").as_deref(), Some("12:15"));
    }

    #[test]
    fn test_meridiem_and_display() {
        let clock: Clock12 = "7:05 PM".parse().unwrap();
        assert_eq!(clock.meridiem(), Meridiem::Pm);
        assert_eq!(clock.to_string(), "07:05 PM");
        assert_eq!(clock.hour24(), 19);
    }
}
