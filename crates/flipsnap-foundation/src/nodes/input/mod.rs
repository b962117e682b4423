pub mod gestures;
pub mod router;
pub mod types;

pub use router::{InputRouter, PlatformGestureFlag};
pub use types::{ClickEvent, PointerEvent, PointerEventKind, PointerSource, PointerTarget};

pub mod prelude {
    pub use super::router::{InputRouter, PlatformGestureFlag};
    pub use super::types::{
        ClickEvent, PointerEvent, PointerEventKind, PointerSource, PointerTarget,
    };
}
