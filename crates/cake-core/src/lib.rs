pub mod calibrate;
pub mod candles;
pub mod constants;
pub mod loudness;
pub mod particles;
pub mod session;

pub use calibrate::*;
pub use candles::*;
pub use constants::*;
pub use loudness::*;
pub use particles::*;
pub use session::*;
