mod value_objects;


pub use value_objects::{Criteria, DEFAULT_CHECK_INTERVAL_MINUTES};
