//! Localized date labels for the picker and its summary fields.
//!
//! Arabic output uses Arabic-Indic digits and the month names used in Saudi
//! Arabia; English output uses abbreviated Gregorian names and transliterated
//! Hijri names. Day numbers inside the grid always use Latin digits.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::{CalendarSystem, HijriDate, Locale, ViewMonth};

const GREGORIAN_MONTHS_AR: [&str; 12] = [
    "يناير", "فبراير", "مارس", "أبريل", "مايو", "يونيو",
    "يوليو", "أغسطس", "سبتمبر", "أكتوبر", "نوفمبر", "ديسمبر",
];

const GREGORIAN_MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

const HIJRI_MONTHS_AR: [&str; 12] = [
    "محرم", "صفر", "ربيع الأول", "ربيع الآخر", "جمادى الأولى", "جمادى الآخرة",
    "رجب", "شعبان", "رمضان", "شوال", "ذو القعدة", "ذو الحجة",
];

const HIJRI_MONTHS_EN: [&str; 12] = [
    "Muharram", "Safar", "Rabi al-Awwal", "Rabi al-Thani", "Jumada al-Awwal", "Jumada al-Thani",
    "Rajab", "Shaban", "Ramadan", "Shawwal", "Dhu al-Qidah", "Dhu al-Hijjah",
];

// Sunday first, matching `Weekday::num_days_from_sunday`
const WEEKDAYS_SHORT_AR: [&str; 7] = ["أحد", "إثنين", "ثلاثاء", "أربعاء", "خميس", "جمعة", "سبت"];
const WEEKDAYS_LONG_AR: [&str; 7] = ["الأحد", "الإثنين", "الثلاثاء", "الأربعاء", "الخميس", "الجمعة", "السبت"];
const WEEKDAYS_SHORT_EN: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const ARABIC_INDIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];

const HIJRI_SUFFIX_AR: &str = "هـ";
const HIJRI_SUFFIX_EN: &str = "AH";

/// Formats dates for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateFormatter {
    locale: Locale,
}

impl DateFormatter {
    pub const fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Grid cell text: the day of month in Latin digits.
    pub fn day_number(&self, date: NaiveDate) -> String {
        date.day().to_string()
    }

    /// Grid header, e.g. `March 2024` or `مارس ٢٠٢٤`.
    pub fn month_header(&self, view: ViewMonth) -> String {
        let name = self.gregorian_month(view.month().index());
        self.localize_digits(&format!("{name} {}", view.year()))
    }

    /// Summary field label, e.g. `Sun, Mar 10` or `الأحد، ١٠ مارس`.
    pub fn short_label(&self, date: NaiveDate) -> String {
        let weekday = date.weekday().num_days_from_sunday() as usize;
        let month = date.month0() as usize;
        match self.locale {
            Locale::Arabic => self.localize_digits(&format!(
                "{}، {} {}",
                WEEKDAYS_LONG_AR[weekday],
                date.day(),
                GREGORIAN_MONTHS_AR[month]
            )),
            Locale::English => format!(
                "{}, {} {}",
                WEEKDAYS_SHORT_EN[weekday],
                &GREGORIAN_MONTHS_EN[month][..3],
                date.day()
            ),
        }
    }

    /// Hijri label, e.g. `1 Ramadan 1445 AH` or `١ رمضان ١٤٤٥ هـ`.
    pub fn hijri_label(&self, date: NaiveDate) -> String {
        let hijri = HijriDate::from_gregorian(date);
        let index = usize::from(hijri.month().number() - 1);
        let (name, suffix) = match self.locale {
            Locale::Arabic => (HIJRI_MONTHS_AR[index], HIJRI_SUFFIX_AR),
            Locale::English => (HIJRI_MONTHS_EN[index], HIJRI_SUFFIX_EN),
        };
        self.localize_digits(&format!("{} {name} {} {suffix}", hijri.day(), hijri.year()))
    }

    /// Long label in either calendar, e.g. `10 March 2024`.
    pub fn label(&self, date: NaiveDate, calendar: CalendarSystem) -> String {
        match calendar {
            CalendarSystem::Gregorian => {
                let name = self.gregorian_month(date.month0() as usize);
                self.localize_digits(&format!("{} {name} {}", date.day(), date.year()))
            }
            CalendarSystem::Hijri => self.hijri_label(date),
        }
    }

    /// Column header for a weekday
    pub fn weekday_short(&self, weekday: Weekday) -> &'static str {
        let index = weekday.num_days_from_sunday() as usize;
        match self.locale {
            Locale::Arabic => WEEKDAYS_SHORT_AR[index],
            Locale::English => WEEKDAYS_SHORT_EN[index],
        }
    }

    fn gregorian_month(&self, index: usize) -> &'static str {
        match self.locale {
            Locale::Arabic => GREGORIAN_MONTHS_AR[index],
            Locale::English => GREGORIAN_MONTHS_EN[index],
        }
    }

    fn localize_digits(&self, text: &str) -> String {
        match self.locale {
            Locale::English => text.to_owned(),
            Locale::Arabic => text
                .chars()
                .map(|c| c.to_digit(10).map_or(c, |d| ARABIC_INDIC_DIGITS[d as usize]))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Month;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_number_is_latin_in_both_locales() {
        let d = date(2024, 3, 15);
        assert_eq!(DateFormatter::new(Locale::Arabic).day_number(d), "15");
        assert_eq!(DateFormatter::new(Locale::English).day_number(d), "15");
    }

    #[test]
    fn test_month_header() {
        let view = ViewMonth::new(2024, Month::new(3).unwrap()).unwrap();
        assert_eq!(DateFormatter::new(Locale::English).month_header(view), "March 2024");
        assert_eq!(DateFormatter::new(Locale::Arabic).month_header(view), "مارس ٢٠٢٤");
    }

    #[test]
    fn test_short_label() {
        let d = date(2024, 3, 10);
        assert_eq!(DateFormatter::new(Locale::English).short_label(d), "Sun, Mar 10");
        assert_eq!(DateFormatter::new(Locale::Arabic).short_label(d), "الأحد، ١٠ مارس");
    }

    #[test]
    fn test_hijri_label() {
        let d = date(2024, 3, 11);
        assert_eq!(DateFormatter::new(Locale::English).hijri_label(d), "1 Ramadan 1445 AH");
        assert_eq!(DateFormatter::new(Locale::Arabic).hijri_label(d), "١ رمضان ١٤٤٥ هـ");

        let d = date(2024, 1, 12);
        assert_eq!(DateFormatter::new(Locale::Arabic).hijri_label(d), "٣٠ جمادى الآخرة ١٤٤٥ هـ");
        assert_eq!(DateFormatter::new(Locale::English).hijri_label(d), "30 Jumada al-Thani 1445 AH");
    }

    #[test]
    fn test_label_by_calendar() {
        let f = DateFormatter::new(Locale::English);
        let d = date(2023, 7, 19);
        assert_eq!(f.label(d, CalendarSystem::Gregorian), "19 July 2023");
        assert_eq!(f.label(d, CalendarSystem::Hijri), "1 Muharram 1445 AH");
    }

    #[test]
    fn test_weekday_short() {
        assert_eq!(DateFormatter::new(Locale::Arabic).weekday_short(Weekday::Fri), "جمعة");
        assert_eq!(DateFormatter::new(Locale::English).weekday_short(Weekday::Sun), "Sun");
    }
}
