//! Day availability: raw slots from the service and their partition into
//! morning and afternoon groups for the scheduling screen.

use serde::{Deserialize, Serialize};

/// One bookable hour of a provider's day, as fetched from the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    /// Hour of day, 0–23.
    pub hour: u8,
    pub available: bool,
}

/// A slot with its display label, e.g. hour 9 → `09:00`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourSlot {
    pub hour: u8,
    pub available: bool,
    pub label: String,
}

impl HourSlot {
    fn from_slot(slot: AvailabilitySlot) -> Self {
        Self {
            hour: slot.hour,
            available: slot.available,
            label: format!("{:02}:00", slot.hour),
        }
    }
}

/// The day's slots split into morning (hour < 12) and afternoon
/// (hour >= 12) groups.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DaySchedule {
    pub morning: Vec<HourSlot>,
    pub afternoon: Vec<HourSlot>,
}

impl DaySchedule {
    /// Splits the fetched slots into two labelled groups.
    ///
    /// The groups are disjoint at the noon boundary and each preserves
    /// the input's relative order. An empty input yields two empty
    /// groups.
    pub fn partition(slots: &[AvailabilitySlot]) -> Self {
        let (morning, afternoon): (Vec<&AvailabilitySlot>, Vec<&AvailabilitySlot>) =
            slots.iter().partition(|slot| slot.hour < 12);
        Self {
            morning: morning.into_iter().map(|s| HourSlot::from_slot(*s)).collect(),
            afternoon: afternoon
                .into_iter()
                .map(|s| HourSlot::from_slot(*s))
                .collect(),
        }
    }

    /// Returns every available hour in display order, morning first.
    pub fn available_hours(&self) -> Vec<u8> {
        self.morning
            .iter()
            .chain(self.afternoon.iter())
            .filter(|slot| slot.available)
            .map(|slot| slot.hour)
            .collect()
    }

    /// Returns `true` if the given hour is present and available.
    pub fn is_available(&self, hour: u8) -> bool {
        self.available_hours().contains(&hour)
    }
}
