//! 进程内事件发射器（emitter）
//!
//! 提供以事件名为键的同步发布/订阅能力：
//! - 监听器注册（`on` / `once`）与移除（`remove_listener` / `remove_all_listeners` / `clear`）
//! - 同步分发（`emit`）：按注册顺序依次调用，监听器返回的错误原样传回调用方
//! - 快照查询（`listeners` / `all_listeners`）
//! - 嵌入能力（`EventSource`）：任意类型持有一个 `EventEmitter` 即可成为事件源，
//!   配合 `emitter_macros::event_source` 宏自动注入字段与实现
//!
//! 分发在单一调用栈内完成，不涉及异步、跨线程或跨进程投递。
//! 监听器在分发过程中可以重入调用同一发射器上的任意操作。
//!
//! 典型用法：
//! ```
//! use emitter::{EventEmitter, Listener};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = seen.clone();
//! let on_tick = Listener::infallible(move |n: &u32| sink.borrow_mut().push(*n));
//!
//! let emitter = EventEmitter::new();
//! emitter.on("tick", on_tick.clone())?.once("tick", on_tick)?;
//! emitter.emit("tick", &1)?;
//! emitter.emit("tick", &2)?;
//!
//! assert_eq!(*seen.borrow(), vec![1, 1, 2]);
//! # Ok::<(), emitter::EmitterError>(())
//! ```
//!
pub mod config;
pub mod error;
pub mod event_emitter;
pub mod event_name;
pub mod event_source;
pub mod listener;
mod registry;

pub use config::EmitterConfig;
pub use error::{EmitterError, EmitterResult};
pub use event_emitter::EventEmitter;
pub use event_name::EventName;
pub use event_source::EventSource;
pub use listener::Listener;

// 允许在本 crate 内部通过 ::emitter 进行自引用，
// 以便过程宏在本 crate 的单元测试中也能解析到 ::emitter 路径。
extern crate self as emitter;
