pub mod describe;
pub mod next;
pub mod previous;
pub mod timezones;
pub mod upcoming;
