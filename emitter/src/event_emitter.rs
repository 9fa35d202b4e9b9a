//! 事件发射器（EventEmitter）
//!
//! 注册表 + 同步分发器：
//! - `on` / `once` 追加监听器，返回自身以便链式注册；
//! - `emit` 在开始时对该事件的条目列表取快照，按快照顺序逐个调用；
//!   每次调用前都会确认条目仍在注册表中，分发途中被移除的监听器不会再被调用，
//!   分发途中新增的监听器要到下一次 `emit` 才会生效；
//! - `once` 监听器在被调用前就从注册表中取出，嵌套的 `emit` 也不会再次触发它；
//! - 监听器返回的错误立即中止本次分发并原样返回，已执行的监听器不回滚。
//!
//! 调用监听器时不持有注册表的借用，监听器可以重入调用本发射器的任意方法。
//! 发射器不是线程安全的（`!Send + !Sync`），跨线程使用时由宿主自行加锁。
//!
use crate::config::EmitterConfig;
use crate::error::{EmitterError, EmitterResult};
use crate::event_name::EventName;
use crate::listener::{Listener, ListenerEntry};
use crate::registry::Registry;
use std::cell::{Cell, RefCell};
use std::fmt;
use tracing::{debug, trace, warn};

/// 进程内同步事件发射器，`A` 为事件载荷类型（多个参数使用元组）
pub struct EventEmitter<A> {
    registry: RefCell<Registry<A>>,
    next_id: Cell<u64>,
    config: Cell<EmitterConfig>,
}

impl<A> Default for EventEmitter<A> {
    fn default() -> Self {
        Self::with_config(EmitterConfig::default())
    }
}

impl<A> EventEmitter<A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EmitterConfig) -> Self {
        Self {
            registry: RefCell::new(Registry::default()),
            next_id: Cell::new(0),
            config: Cell::new(config),
        }
    }

    pub fn config(&self) -> EmitterConfig {
        self.config.get()
    }

    pub fn max_listeners(&self) -> usize {
        self.config.get().max_listeners
    }

    /// 调整单个事件的监听器告警阈值，0 表示关闭告警
    pub fn set_max_listeners(&self, max_listeners: usize) {
        let mut config = self.config.get();
        config.max_listeners = max_listeners;
        self.config.set(config);
    }

    /// 注册监听器，每次 `emit` 都会调用
    ///
    /// 同一个监听器可以重复注册，每次注册都会被单独调用一次。
    ///
    /// ```
    /// use emitter::{EventEmitter, Listener};
    ///
    /// let emitter = EventEmitter::<()>::new();
    /// let noop = Listener::infallible(|_: &()| {});
    ///
    /// emitter.on("open", noop.clone())?.on("close", noop)?;
    /// assert_eq!(emitter.listener_count("open"), 1);
    /// assert!(emitter.on("", Listener::infallible(|_: &()| {})).is_err());
    /// # Ok::<(), emitter::EmitterError>(())
    /// ```
    pub fn on(&self, event: impl AsRef<str>, listener: Listener<A>) -> EmitterResult<&Self> {
        self.register(event.as_ref(), listener, false)?;
        Ok(self)
    }

    /// 注册一次性监听器：最多被调用一次，调用前即从注册表中移除
    ///
    /// 因此监听器在自身调用期间查询 `listeners(event)` 时已看不到自己；
    /// 监听器返回错误时同样不会被放回。
    pub fn once(&self, event: impl AsRef<str>, listener: Listener<A>) -> EmitterResult<&Self> {
        self.register(event.as_ref(), listener, true)?;
        Ok(self)
    }

    fn register(&self, event: &str, listener: Listener<A>, once: bool) -> EmitterResult<()> {
        let name = EventName::new(event)?;
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let count = self
            .registry
            .borrow_mut()
            .push(&name, ListenerEntry { id, listener, once });
        trace!(event, once, listeners = count, "listener registered");

        let config = self.config.get();
        if config.crosses_limit(count) {
            warn!(
                event,
                listeners = count,
                max_listeners = config.max_listeners,
                "possible listener leak: listener count exceeds max_listeners"
            );
        }
        Ok(())
    }

    /// 按引用身份移除该事件下的所有同一监听器；事件或监听器不存在时什么也不做
    pub fn remove_listener(
        &self,
        event: impl AsRef<str>,
        listener: &Listener<A>,
    ) -> EmitterResult<()> {
        let event = event.as_ref();
        EventName::ensure_valid(event)?;

        let removed = self.registry.borrow_mut().remove_listener(event, listener);
        if removed > 0 {
            trace!(event, removed, "listener removed");
        }
        Ok(())
    }

    /// 删除某个事件的全部监听器；事件不存在时什么也不做
    pub fn remove_all_listeners(&self, event: impl AsRef<str>) {
        let event = event.as_ref();
        let removed = self.registry.borrow_mut().remove_event(event);
        if removed > 0 {
            trace!(event, removed, "all listeners of event removed");
        }
    }

    /// 清空所有事件的监听器
    pub fn clear(&self) {
        let removed = self.registry.borrow_mut().clear();
        trace!(removed, "registry cleared");
    }

    /// 该事件当前的监听器快照（按注册顺序，不含 once 标记）
    pub fn listeners(&self, event: impl AsRef<str>) -> Vec<Listener<A>> {
        self.registry.borrow().listeners(event.as_ref())
    }

    /// 所有事件的监听器快照，事件按首次注册顺序排列
    pub fn all_listeners(&self) -> Vec<(EventName, Vec<Listener<A>>)> {
        self.registry.borrow().all_listeners()
    }

    pub fn event_names(&self) -> Vec<EventName> {
        self.registry.borrow().event_names()
    }

    pub fn listener_count(&self, event: impl AsRef<str>) -> usize {
        self.registry.borrow().count(event.as_ref())
    }

    pub fn is_empty(&self) -> bool {
        self.registry.borrow().is_empty()
    }

    /// 同步触发事件
    ///
    /// 没有监听器时直接返回 `Ok(())`。监听器返回错误时中止剩余调用，
    /// 错误以 `EmitterError::Listener` 原样返回。
    ///
    /// ```
    /// use emitter::{EmitterError, EventEmitter, Listener};
    ///
    /// let emitter = EventEmitter::<String>::new();
    /// emitter.on("save", Listener::new(|path: &String| {
    ///     anyhow::ensure!(!path.is_empty(), "empty path");
    ///     Ok(())
    /// }))?;
    ///
    /// emitter.emit("save", &"a.txt".to_string())?;
    /// let err = emitter.emit("save", &String::new()).unwrap_err();
    /// assert_eq!(err.to_string(), "empty path");
    ///
    /// // 没有监听器的事件
    /// emitter.emit("load", &String::new())?;
    /// # Ok::<(), EmitterError>(())
    /// ```
    pub fn emit(&self, event: impl AsRef<str>, args: &A) -> EmitterResult<()> {
        let event = event.as_ref();
        EventName::ensure_valid(event)?;

        let Some(snapshot) = self.registry.borrow().snapshot(event) else {
            return Ok(());
        };
        trace!(event, listeners = snapshot.len(), "dispatching event");

        for entry in snapshot {
            let live = {
                let mut registry = self.registry.borrow_mut();
                if entry.once {
                    registry.take_entry(event, entry.id)
                } else {
                    registry.contains_entry(event, entry.id)
                }
            };
            if !live {
                trace!(event, id = entry.id, "listener removed during dispatch, skipped");
                continue;
            }

            if let Err(err) = entry.listener.call(args) {
                debug!(event, error = %err, "listener failed, dispatch aborted");
                return Err(EmitterError::Listener(err));
            }
        }
        Ok(())
    }
}

impl<A> fmt::Debug for EventEmitter<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("EventEmitter");
        match self.registry.try_borrow() {
            Ok(registry) => {
                let events: Vec<(EventName, usize)> = registry
                    .event_names()
                    .into_iter()
                    .map(|name| {
                        let count = registry.count(name.as_str());
                        (name, count)
                    })
                    .collect();
                out.field("events", &events);
            }
            Err(_) => {
                out.field("events", &"<borrowed>");
            }
        }
        out.field("config", &self.config.get()).finish()
    }
}
