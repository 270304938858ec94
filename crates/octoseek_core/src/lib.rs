//! Octoseek core: pure search state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{
    Account, DebounceToken, MotionPhase, NamePolicy, RequestId, SearchOutcome, WidgetState,
    DEBOUNCE_WINDOW,
};
pub use update::update;
pub use view_model::{Notice, ResultRowView, WidgetViewModel};
