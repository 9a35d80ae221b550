pub mod decode;
pub mod save;
