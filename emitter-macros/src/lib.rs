//! 事件源过程宏
//!
//! `#[event_source]`：为具名字段结构体注入 `EventEmitter` 字段并实现
//! `::emitter::EventSource`，使其直接获得 `on` / `once` / `emit` 等能力。
//!
use proc_macro::TokenStream;

mod event_source;
mod field_utils;

/// 事件源宏
/// - 若缺失则在字段末尾追加 `event_emitter: ::emitter::EventEmitter<Payload>`
/// - 自动为目标结构体实现 `::emitter::EventSource<Payload>`
/// - 支持参数：`#[event_source(payload = Type, field = ident)]`
///   - `payload` 默认 `()`，多个参数使用元组
///   - `field` 默认 `event_emitter`；同名字段已存在时直接复用
///
/// ```
/// use emitter::{EventSource, Listener};
/// use emitter_macros::event_source;
///
/// #[event_source(payload = u64)]
/// #[derive(Default)]
/// struct Counter {
///     value: std::cell::Cell<u64>,
/// }
///
/// impl Counter {
///     fn incr(&self) -> emitter::EmitterResult<()> {
///         self.value.set(self.value.get() + 1);
///         self.emit("changed", &self.value.get())
///     }
/// }
///
/// let counter = Counter::default();
/// counter.on("changed", Listener::infallible(|v: &u64| assert_eq!(*v, 1)))?;
/// counter.incr()?;
/// # Ok::<(), emitter::EmitterError>(())
/// ```
#[proc_macro_attribute]
pub fn event_source(attr: TokenStream, item: TokenStream) -> TokenStream {
    event_source::expand(attr, item)
}
