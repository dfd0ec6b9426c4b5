pub mod pick_session;

pub use pick_session::{parse_point, read_points, PickSession};
