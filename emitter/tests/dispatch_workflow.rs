use anyhow::Result as AnyResult;
use emitter::{EmitterError, EventEmitter, EventSource, Listener};
use emitter_macros::event_source;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

#[event_source(payload = i32)]
#[derive(Debug, Default)]
struct Clock {
    label: String,
}

impl Clock {
    fn shared() -> Rc<Self> {
        Rc::new(Self {
            label: "clock".into(),
            ..Default::default()
        })
    }

    fn tick(&self, n: i32) -> Result<(), EmitterError> {
        self.emit("tick", &n)
    }
}

#[derive(Clone, Default)]
struct Journal {
    calls: Rc<RefCell<Vec<String>>>,
}

impl Journal {
    fn listener(&self, tag: &'static str) -> Listener<i32> {
        let calls = self.calls.clone();
        Listener::infallible(move |n: &i32| calls.borrow_mut().push(format!("{tag}({n})")))
    }

    fn entries(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn count(&self, tag: &str) -> usize {
        let prefix = format!("{tag}(");
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.starts_with(&prefix))
            .count()
    }
}

#[test]
fn on_and_once_scenario() -> AnyResult<()> {
    let clock = Clock::shared();
    let journal = Journal::default();
    let f = journal.listener("f");
    let g = journal.listener("g");

    clock.on("tick", f.clone())?.once("tick", g.clone())?;
    clock.tick(42)?;
    clock.tick(43)?;

    assert_eq!(journal.entries(), vec!["f(42)", "g(42)", "f(43)"]);
    assert_eq!(journal.count("f"), 2);
    assert_eq!(journal.count("g"), 1);
    assert_eq!(clock.listeners("tick"), vec![f]);
    assert_eq!(clock.label, "clock");
    Ok(())
}

#[test]
fn removing_only_listener_drops_event() -> AnyResult<()> {
    let clock = Clock::shared();
    let journal = Journal::default();
    let f = journal.listener("f");
    let other = journal.listener("other");

    clock.on("tick", f.clone())?;
    clock.on("tick", f.clone())?;
    clock.on("alarm", other)?;

    clock.remove_listener("tick", &f)?;
    assert!(clock.listeners("tick").is_empty());

    let names: Vec<String> = clock
        .all_listeners()
        .into_iter()
        .map(|(name, _)| name.into_inner())
        .collect();
    assert_eq!(names, vec!["alarm"]);
    Ok(())
}

#[test]
fn remove_all_listeners_is_scoped() -> AnyResult<()> {
    let clock = Clock::shared();
    let journal = Journal::default();
    clock.on("tick", journal.listener("a"))?;
    clock.on("alarm", journal.listener("b"))?;

    clock.remove_all_listeners("tick");
    assert_eq!(clock.listener_count("tick"), 0);
    assert_eq!(clock.listener_count("alarm"), 1);

    clock.clear_listeners();
    assert!(clock.all_listeners().is_empty());
    Ok(())
}

// 监听器移除尚未调用的同伴，同伴本轮不再被调用
#[test]
fn removed_peer_is_not_invoked_in_same_pass() -> AnyResult<()> {
    let clock = Clock::shared();
    let journal = Journal::default();
    let g = journal.listener("g");

    let weak: Weak<Clock> = Rc::downgrade(&clock);
    let victim = g.clone();
    let remover = Listener::new(move |_: &i32| {
        if let Some(clock) = weak.upgrade() {
            clock.remove_listener("tick", &victim)?;
        }
        Ok(())
    });

    clock.on("tick", remover)?.on("tick", g)?;
    clock.tick(1)?;
    clock.tick(2)?;

    assert_eq!(journal.count("g"), 0);
    assert_eq!(clock.listener_count("tick"), 1);
    Ok(())
}

// 分发中新增的监听器不在本轮触发
#[test]
fn listener_added_during_pass_waits_for_next_emit() -> AnyResult<()> {
    let clock = Clock::shared();
    let journal = Journal::default();

    let weak = Rc::downgrade(&clock);
    let late = journal.listener("late");
    let adder = Listener::new(move |_: &i32| {
        if let Some(clock) = weak.upgrade() {
            clock.on("tick", late.clone())?;
        }
        Ok(())
    });

    clock.once("tick", adder)?;
    clock.tick(1)?;
    assert_eq!(journal.count("late"), 0);

    clock.tick(2)?;
    assert_eq!(journal.entries(), vec!["late(2)"]);
    Ok(())
}

// once 监听器内嵌套 emit 同一事件，不会被再次调用
#[test]
fn nested_emit_does_not_refire_once_listener() -> AnyResult<()> {
    let clock = Clock::shared();
    let journal = Journal::default();
    let calls = journal.calls.clone();

    let weak = Rc::downgrade(&clock);
    let reentrant = Listener::new(move |n: &i32| {
        calls.borrow_mut().push(format!("once({n})"));
        if let Some(clock) = weak.upgrade() {
            clock.tick(n + 1)?;
        }
        Ok(())
    });

    clock.once("tick", reentrant)?;
    clock.on("tick", journal.listener("f"))?;
    clock.tick(10)?;

    assert_eq!(journal.entries(), vec!["once(10)", "f(11)", "f(10)"]);
    assert_eq!(clock.listener_count("tick"), 1);
    Ok(())
}

// 分发中清空注册表，剩余监听器全部跳过
#[test]
fn clearing_mid_pass_skips_remaining() -> AnyResult<()> {
    let clock = Clock::shared();
    let journal = Journal::default();

    let weak = Rc::downgrade(&clock);
    let wiper = Listener::infallible(move |_: &i32| {
        if let Some(clock) = weak.upgrade() {
            clock.clear_listeners();
        }
    });

    clock.on("tick", journal.listener("a"))?;
    clock.on("tick", wiper)?;
    clock.once("tick", journal.listener("b"))?;
    clock.tick(5)?;

    assert_eq!(journal.entries(), vec!["a(5)"]);
    assert!(clock.event_names().is_empty());
    Ok(())
}

#[derive(Debug, thiserror::Error)]
#[error("sensor offline: {0}")]
struct Offline(i32);

// 监听器错误透传且中止本轮，已触发的 once 监听器不回滚
#[test]
fn listener_error_propagates_verbatim() -> AnyResult<()> {
    let clock = Clock::shared();
    let journal = Journal::default();

    clock.once("tick", journal.listener("first"))?;
    clock.on("tick", Listener::new(|n: &i32| Err(Offline(*n).into())))?;
    clock.on("tick", journal.listener("never"))?;

    let err = clock.tick(7).unwrap_err();
    assert_eq!(err.to_string(), "sensor offline: 7");
    let source = err.listener_error().expect("listener error");
    assert_eq!(source.downcast_ref::<Offline>().map(|o| o.0), Some(7));

    assert_eq!(journal.entries(), vec!["first(7)"]);
    assert_eq!(clock.listener_count("tick"), 2);
    Ok(())
}

// 失败的 once 监听器同样已被移除，不会在下一轮重试
#[test]
fn failing_once_listener_stays_removed() -> AnyResult<()> {
    let clock = Clock::shared();
    let attempts = Rc::new(RefCell::new(0));
    let counter = attempts.clone();

    clock.once(
        "tick",
        Listener::new(move |n: &i32| {
            *counter.borrow_mut() += 1;
            Err(Offline(*n).into())
        }),
    )?;

    let err = clock.tick(1).unwrap_err();
    assert_eq!(err.to_string(), "sensor offline: 1");
    assert!(clock.listeners("tick").is_empty());
    assert!(clock.event_names().is_empty());

    clock.tick(2)?;
    assert_eq!(*attempts.borrow(), 1);
    Ok(())
}

#[test]
fn empty_event_name_is_invalid_input() {
    let clock = Clock::shared();
    let f = Journal::default().listener("f");

    assert!(matches!(
        clock.emit("", &0),
        Err(EmitterError::InvalidInput { .. })
    ));
    assert!(matches!(
        clock.on("", f),
        Err(EmitterError::InvalidInput { .. })
    ));
    assert!(clock.event_names().is_empty());
}

// 多参数以元组作为载荷
#[test]
fn tuple_payload_spreads_arguments() -> AnyResult<()> {
    let emitter: EventEmitter<(&'static str, u8, bool)> = EventEmitter::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();

    emitter.on(
        "login",
        Listener::infallible(move |(user, attempts, ok): &(&'static str, u8, bool)| {
            sink.borrow_mut().push(format!("{user}:{attempts}:{ok}"))
        }),
    )?;
    emitter.emit("login", &("ada", 2, true))?;

    assert_eq!(*seen.borrow(), vec!["ada:2:true"]);
    Ok(())
}
