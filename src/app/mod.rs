//! Menu navigation: session stack, cancellation and the application loop

pub mod application;
pub mod cancel;
pub mod session;

pub use application::{
    AppState, MenuApplication, MenuApplicationWithQuit, QuitAction, UnresolvedSelection,
};
pub use cancel::CancelHandler;
pub use session::MenuSession;
