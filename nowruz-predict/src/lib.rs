pub mod progress;
pub mod resolver;

pub use progress::{NoopObserver, Phase, PhaseObserver};
pub use resolver::{resolve_nowruz, DayRule, NowruzResolver, Prediction};
