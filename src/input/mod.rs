//! Pointer input handling and the gesture state machine.

pub mod events;
pub mod state;

// Re-export commonly used types at module level
pub use events::PointerEvent;
pub use state::{DrawingState, InputState};
