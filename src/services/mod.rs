pub mod attendance_status;
pub mod ticker;
pub mod timezone;
pub mod update;

pub use attendance_status::*;
pub use ticker::*;
pub use timezone::*;
pub use update::*;
