pub mod buffer;
pub mod buffer_kind;
pub mod channel_math;
