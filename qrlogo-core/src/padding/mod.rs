pub mod kind;
pub mod pipeline;
