mod match_service;
mod value_objects;

#[cfg(test)]
mod match_service_test;

pub use match_service::SlotMatchService;
pub use value_objects::{MatchedSlot, SlotCandidate, UNKNOWN_FIELD};
