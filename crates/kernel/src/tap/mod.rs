//! Tap system for menu providers.
//!
//! Taps are named events that independent providers answer. When an event is
//! dispatched, all providers registered for it are called in weight order
//! (lower = higher priority), ties in registration order.

mod dispatcher;
mod registry;
mod request_state;

pub use dispatcher::{TapDispatcher, TapResult};
pub use registry::{FnProvider, MenuProvider, TapHandler, TapRegistry};
pub use request_state::{ADMINISTER_SITE, RequestContext, UserContext};
