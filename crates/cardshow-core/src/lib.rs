pub mod constants;
pub mod media;
pub mod motion;
pub mod physics;
pub mod routing;
pub mod sequencer;
pub mod stage;
pub mod step;

pub use constants::*;
pub use media::*;
pub use motion::*;
pub use physics::*;
pub use routing::*;
pub use sequencer::*;
pub use stage::*;
pub use step::*;
