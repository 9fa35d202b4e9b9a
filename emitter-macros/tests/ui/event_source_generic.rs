use emitter::{EventSource, Listener};
use emitter_macros::event_source;
use std::cell::RefCell;
use std::rc::Rc;

#[event_source(payload = T)]
struct Channel<T: Clone + 'static> {
    last: RefCell<Option<T>>,
}

impl<T: Clone + 'static> Channel<T> {
    fn new() -> Self {
        Self {
            last: RefCell::new(None),
            event_emitter: emitter::EventEmitter::new(),
        }
    }

    fn send(&self, value: T) -> emitter::EmitterResult<()> {
        *self.last.borrow_mut() = Some(value.clone());
        self.emit("message", &value)
    }
}

fn main() {
    let channel = Channel::<String>::new();
    let received = Rc::new(RefCell::new(Vec::new()));
    let sink = received.clone();
    channel
        .on("message", Listener::infallible(move |m: &String| sink.borrow_mut().push(m.clone())))
        .unwrap();
    channel.send("hello".to_string()).unwrap();
    assert_eq!(*received.borrow(), vec!["hello".to_string()]);
    assert_eq!(channel.last.borrow().as_deref(), Some("hello"));
}
