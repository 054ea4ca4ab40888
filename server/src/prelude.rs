pub use crate::core::app::App;
pub use pathlab_types::error::{Error, PlResult};
pub use pathlab_types::principal::Principal;
pub use pathlab_types::types::{ResourceKind, TnId};

pub use tracing::{debug, debug_span, error, error_span, info, info_span, warn, warn_span};

// vim: ts=4
