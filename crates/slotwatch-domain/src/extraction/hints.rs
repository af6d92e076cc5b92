//! Data-driven extraction heuristics.
//!
//! Target pages have unknown, possibly changing markup, so slot discovery is
//! an ordered list of structural hints rather than a schema parse. Extending
//! coverage means adding a descriptor here, not touching extractor control
//! flow.

/// Locator for elements that are plausibly bookable slots.
///
/// An element matches when it satisfies `selector` and carries none of
/// `excluded_classes` (the "not booked" conventions).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotHint {
    pub selector: &'static str,
    pub excluded_classes: &'static [&'static str],
}

/// Ordered slot locators: status-attribute markers first, then availability
/// class conventions, then clickable booking affordances.
pub const SLOT_HINTS: &[SlotHint] = &[
    SlotHint {
        selector: "[data-slot-status=\"available\"]",
        excluded_classes: &[],
    },
    SlotHint {
        selector: ".available-slot",
        excluded_classes: &[],
    },
    SlotHint {
        selector: ".slot",
        excluded_classes: &["booked"],
    },
    SlotHint {
        selector: ".time-slot",
        excluded_classes: &["occupied"],
    },
    SlotHint {
        selector: ".calendar-slot",
        excluded_classes: &["taken"],
    },
    SlotHint {
        selector: ".appointment-slot",
        excluded_classes: &["reserved"],
    },
    SlotHint {
        selector: "button[onclick*=\"slot\"]",
        excluded_classes: &[],
    },
    SlotHint {
        selector: "a[href*=\"book\"]",
        excluded_classes: &[],
    },
    SlotHint {
        selector: ".book-slot",
        excluded_classes: &[],
    },
];

/// Per-field lookup hints: one semantic attribute, then conventional class
/// names, searched in order - first hit wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldHints {
    /// Semantic data attribute, e.g. `data-date`
    pub attribute: &'static str,
    /// Conventional class names, most generic first
    pub classes: &'static [&'static str],
}

pub const DATE_HINTS: FieldHints = FieldHints {
    attribute: "data-date",
    classes: &["date", "slot-date", "appointment-date"],
};

pub const TIME_HINTS: FieldHints = FieldHints {
    attribute: "data-time",
    classes: &["time", "slot-time", "appointment-time"],
};

pub const LOCATION_HINTS: FieldHints = FieldHints {
    attribute: "data-location",
    classes: &["location", "slot-location", "appointment-location"],
};
