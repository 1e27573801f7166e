//! Destination search card: a city choice plus the date picker.

use chrono::NaiveDate;
use serde::Serialize;

use crate::{
    Locale, PickerConfig, RangePicker, SelectOutcome, SelectionMode, SelectionState, prelude::*,
};

/// A bookable city
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct City {
    pub id:        &'static str,
    pub name_ar:   &'static str,
    pub name_en:   &'static str,
    pub region_ar: &'static str,
    pub region_en: &'static str,
}

const fn city(
    id: &'static str,
    name_ar: &'static str,
    name_en: &'static str,
    region_ar: &'static str,
    region_en: &'static str,
) -> City {
    City {
        id,
        name_ar,
        name_en,
        region_ar,
        region_en,
    }
}

/// Cities offered by the search card, in display order
pub static CITIES: [City; 20] = [
    city("riyadh", "الرياض", "Riyadh", "منطقة الرياض", "Riyadh Region"),
    city("jeddah", "جدة", "Jeddah", "منطقة مكة المكرمة", "Makkah Region"),
    city("makkah", "مكة المكرمة", "Makkah", "منطقة مكة المكرمة", "Makkah Region"),
    city("madinah", "المدينة المنورة", "Madinah", "منطقة المدينة المنورة", "Madinah Region"),
    city("dammam", "الدمام", "Dammam", "المنطقة الشرقية", "Eastern Province"),
    city("dhahran", "الظهران", "Dhahran", "المنطقة الشرقية", "Eastern Province"),
    city("khobar", "الخبر", "Al Khobar", "المنطقة الشرقية", "Eastern Province"),
    city("abha", "أبها", "Abha", "منطقة عسير", "Asir Region"),
    city("tabuk", "تبوك", "Tabuk", "منطقة تبوك", "Tabuk Region"),
    city("hail", "حائل", "Hail", "منطقة حائل", "Hail Region"),
    city("jizan", "جازان", "Jizan", "منطقة جازان", "Jizan Region"),
    city("najran", "نجران", "Najran", "منطقة نجران", "Najran Region"),
    city("baha", "الباحة", "Al Baha", "منطقة الباحة", "Al Baha Region"),
    city("arar", "عرعر", "Arar", "الحدود الشمالية", "Northern Borders"),
    city("sakaka", "سكاكا", "Sakaka", "منطقة الجوف", "Al Jouf Region"),
    city("qassim", "بريدة", "Buraydah", "منطقة القصيم", "Al Qassim Region"),
    city("unaizah", "عنيزة", "Unaizah", "منطقة القصيم", "Al Qassim Region"),
    city("taif", "الطائف", "Taif", "منطقة مكة المكرمة", "Makkah Region"),
    city("yanbu", "ينبع", "Yanbu", "منطقة المدينة المنورة", "Madinah Region"),
    city("jubail", "الجبيل", "Al Jubail", "المنطقة الشرقية", "Eastern Province"),
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("Unknown city: {0}")]
    UnknownCity(String),
}

impl City {
    /// Looks up a city by id.
    ///
    /// # Errors
    /// Returns `SearchError::UnknownCity` if no city has this id.
    pub fn find(id: &str) -> Result<&'static Self, SearchError> {
        CITIES
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| SearchError::UnknownCity(id.to_owned()))
    }

    pub const fn name(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Arabic => self.name_ar,
            Locale::English => self.name_en,
        }
    }

    pub const fn region(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Arabic => self.region_ar,
            Locale::English => self.region_en,
        }
    }
}

/// Handed to the host to run a property search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SearchRequest {
    pub city_id:   &'static str,
    pub check_in:  NaiveDate,
    pub check_out: Option<NaiveDate>,
}

/// Which dropdown is showing; at most one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Popover {
    #[default]
    None,
    Cities,
    Calendar,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCard {
    city:    &'static City,
    picker:  RangePicker,
    popover: Popover,
}

impl SearchCard {
    pub fn new(config: PickerConfig, today: NaiveDate) -> Self {
        Self {
            city:    &CITIES[0],
            picker:  RangePicker::new(config, today),
            popover: Popover::None,
        }
    }

    pub const fn city(&self) -> &'static City {
        self.city
    }

    pub const fn picker(&self) -> &RangePicker {
        &self.picker
    }

    /// Mutable access for hover and month paging.
    pub fn picker_mut(&mut self) -> &mut RangePicker {
        &mut self.picker
    }

    pub const fn popover(&self) -> Popover {
        self.popover
    }

    /// Opens the city list, closing the calendar; a second call closes it.
    pub fn toggle_cities(&mut self) {
        self.popover = match self.popover {
            Popover::Cities => Popover::None,
            Popover::None | Popover::Calendar => Popover::Cities,
        };
    }

    /// Shows the calendar, closing the city list.
    pub fn open_calendar(&mut self) {
        self.popover = Popover::Calendar;
    }

    pub fn close(&mut self) {
        self.popover = Popover::None;
        self.picker.clear_hover();
    }

    /// Switches city and closes the list. Searches right away when the
    /// dates are already complete.
    ///
    /// # Errors
    /// Returns `SearchError::UnknownCity` if no city has this id.
    pub fn select_city(&mut self, id: &str) -> Result<Option<SearchRequest>, SearchError> {
        self.city = City::find(id)?;
        self.popover = Popover::None;
        debug!("Selected city {}", self.city.id);

        let complete = match self.picker.config().mode {
            SelectionMode::Range => self.picker.state() == SelectionState::Complete,
            SelectionMode::Single => self.picker.check_in().is_some(),
        };
        if !complete {
            return Ok(None);
        }
        Ok(self.picker.check_in().map(|check_in| SearchRequest {
            city_id: self.city.id,
            check_in,
            check_out: self.picker.check_out(),
        }))
    }

    /// Forwards a day click; a completed selection closes the calendar and
    /// produces a search.
    pub fn click_day(&mut self, date: NaiveDate) -> Option<SearchRequest> {
        match self.picker.select_day(date) {
            SelectOutcome::Completed(done) => {
                self.popover = Popover::None;
                Some(SearchRequest {
                    city_id:   self.city.id,
                    check_in:  done.check_in,
                    check_out: done.check_out,
                })
            }
            SelectOutcome::Ignored
            | SelectOutcome::Unchanged
            | SelectOutcome::Started
            | SelectOutcome::MovedStart => None,
        }
    }
}
