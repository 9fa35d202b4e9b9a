use emitter::{EventSource, Listener};
use emitter_macros::event_source;

#[event_source]
#[derive(Debug, Default)]
struct Door {
    name: String,
}

fn main() {
    let door = Door {
        name: "front".into(),
        ..Default::default()
    };
    door.on("opened", Listener::infallible(|_: &()| {}))
        .unwrap()
        .emit("opened", &())
        .unwrap();
    assert_eq!(door.name, "front");
    assert_eq!(door.event_emitter.listener_count("opened"), 1);
}
