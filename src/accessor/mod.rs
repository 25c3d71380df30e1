pub(crate) mod clock;
pub(crate) mod date_accessor;
pub(crate) mod settings;

pub(crate) use date_accessor::DateAccessor;
pub(crate) use settings::{DateOverride, DateSettings};
