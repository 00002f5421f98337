pub mod status;

pub use status::{parse_status, ParseError, STATUS_SELECTOR};
