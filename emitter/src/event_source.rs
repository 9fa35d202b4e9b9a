//! 事件源（EventSource）
//!
//! 让任意类型通过持有一个 `EventEmitter` 获得完整的订阅/触发能力。
//! 只需实现 `event_emitter`，其余方法均委托给内部发射器；`on` / `once` 返回宿主自身，
//! 便于链式注册。通常配合 `emitter_macros::event_source` 宏自动生成实现。
//!
//! ```
//! use emitter::{EventEmitter, EventSource, Listener};
//!
//! struct Door {
//!     events: EventEmitter<bool>,
//! }
//!
//! impl EventSource<bool> for Door {
//!     fn event_emitter(&self) -> &EventEmitter<bool> {
//!         &self.events
//!     }
//! }
//!
//! impl Door {
//!     fn toggle(&self, open: bool) -> emitter::EmitterResult<()> {
//!         self.emit("toggled", &open)
//!     }
//! }
//!
//! let door = Door { events: EventEmitter::new() };
//! door.on("toggled", Listener::infallible(|open: &bool| assert!(*open)))?;
//! door.toggle(true)?;
//! # Ok::<(), emitter::EmitterError>(())
//! ```
//!
use crate::error::EmitterResult;
use crate::event_emitter::EventEmitter;
use crate::event_name::EventName;
use crate::listener::Listener;

/// 事件源能力
pub trait EventSource<A> {
    /// 宿主持有的发射器
    fn event_emitter(&self) -> &EventEmitter<A>;

    fn on(&self, event: impl AsRef<str>, listener: Listener<A>) -> EmitterResult<&Self> {
        self.event_emitter().on(event, listener)?;
        Ok(self)
    }

    fn once(&self, event: impl AsRef<str>, listener: Listener<A>) -> EmitterResult<&Self> {
        self.event_emitter().once(event, listener)?;
        Ok(self)
    }

    fn remove_listener(&self, event: impl AsRef<str>, listener: &Listener<A>) -> EmitterResult<()> {
        self.event_emitter().remove_listener(event, listener)
    }

    fn remove_all_listeners(&self, event: impl AsRef<str>) {
        self.event_emitter().remove_all_listeners(event)
    }

    fn clear_listeners(&self) {
        self.event_emitter().clear()
    }

    fn listeners(&self, event: impl AsRef<str>) -> Vec<Listener<A>> {
        self.event_emitter().listeners(event)
    }

    fn all_listeners(&self) -> Vec<(EventName, Vec<Listener<A>>)> {
        self.event_emitter().all_listeners()
    }

    fn listener_count(&self, event: impl AsRef<str>) -> usize {
        self.event_emitter().listener_count(event)
    }

    fn event_names(&self) -> Vec<EventName> {
        self.event_emitter().event_names()
    }

    fn emit(&self, event: impl AsRef<str>, args: &A) -> EmitterResult<()> {
        self.event_emitter().emit(event, args)
    }
}
