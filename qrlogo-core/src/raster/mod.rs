pub mod alpha;
pub mod composite;
pub mod dilate;
pub mod distance;
pub mod scale;
pub mod shape;
