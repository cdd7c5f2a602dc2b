//! A `no_std`, no-alloc state mirror for Dreamcast VMU displays.
//!
//! This crate bridges a single emulation thread and any number of polling
//! frontend threads: the emulator publishes per-slot LCD frames, connection
//! events, and timestamps, and frontends read a consistent view of that
//! state without ever blocking the emulation loop for more than one small
//! buffer copy.
//!
//! # Features
//!
//! - **Zero heap allocation** - All storage statically sized
//! - **Per-slot dirty tracking** - Test-and-clear flags for efficient polling
//! - **Dual read paths** - Locked snapshot copy or zero-copy live pointer
//! - **Synchronous notifications** - Optional update listener on the
//!   emulation thread
//! - **Idempotent lifecycle** - Atomic init/term gating all operations
//!
//! # Architecture
//!
//! The bridge is a **last-value-wins mirror**, not a queue:
//!
//! ```text
//! ┌────────────────────┐           ┌──────────────────────────┐
//! │  Emulation thread  │           │  Frontend threads        │
//! │                    │           │                          │
//! │  display_update()  │──────────▶│  take_dirty()            │
//! │  (locked mirror    │   dirty   │  copy_framebuffer()      │
//! │   write + flag)    │   flags   │  framebuffer_ptr()       │
//! │                    │           │                          │
//! │  connection_       │──────────▶│  is_active()             │
//! │    change()        │   status  │  connected_count()       │
//! │                    │           │                          │
//! │  buttons()         │◀──────────│  set_buttons()           │
//! └────────────────────┘  buttons  └──────────────────────────┘
//! ```
//!
//! - **Producer writes** overwrite the slot's mirror under its own lock,
//!   then raise the dirty flag, then invoke the registered listener
//! - **Consumer reads** either lock the mirror for a tear-free copy or
//!   take the live upstream pointer and accept torn pixels for latency
//! - **Button state** flows the other way, from frontend to emulator,
//!   through atomic read-modify-write updates
//!
//! Each slot has its own mirror lock, so readers of one VMU never contend
//! with updates to another.
//!
//! # Example
//!
//! ```rust,no_run
//! use vmu_bridge::prelude::*;
//!
//! static BRIDGE: VmuBridge<NoLcd> = VmuBridge::new(NoLcd);
//!
//! // Emulation side: bring the bridge up and publish a frame.
//! BRIDGE.init();
//! let producer = BRIDGE.producer();
//! producer.connection_change(0, true);
//! let frame = [0xFF00_00FF_u32; LCD_PIXELS];
//! producer.display_update(0, &frame, 100);
//!
//! // Frontend side: poll for fresh data and copy it out.
//! let consumer = BRIDGE.consumer();
//! if consumer.take_dirty(0) {
//!     let mut shown = [0u32; LCD_PIXELS];
//!     consumer.copy_framebuffer(0, &mut shown).unwrap();
//! }
//! ```

#![deny(unsafe_code)]
#![no_std]

pub mod vmu;

pub mod prelude {
    pub use crate::vmu::prelude::*;
}
