mod hints;
mod ports;
mod snapshot;

pub use hints::{FieldHints, SlotHint, DATE_HINTS, LOCATION_HINTS, SLOT_HINTS, TIME_HINTS};
pub use ports::{PageSource, SlotExtractor};
pub use snapshot::PageSnapshot;
