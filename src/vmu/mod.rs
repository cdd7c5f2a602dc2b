pub mod bridge;
pub mod error;
pub mod handle;
pub mod listener;
pub(crate) mod mirror;
pub(crate) mod slot;
pub mod source;
pub mod types;

#[cfg(test)]
mod test_support;

pub use bridge::VmuBridge;
pub use error::BridgeError;
pub use handle::{Consumer, Producer};
pub use listener::UpdateListener;
pub use source::{LcdSource, NoLcd};
pub use types::{Framebuffer, LCD_HEIGHT, LCD_PIXELS, LCD_WIDTH, MAX_VMU_COUNT, VmuButtons};

pub mod prelude {
    pub use super::{
        BridgeError, Consumer, Framebuffer, LCD_HEIGHT, LCD_PIXELS, LCD_WIDTH, LcdSource,
        MAX_VMU_COUNT, NoLcd, Producer, UpdateListener, VmuBridge, VmuButtons,
    };
}
