use emitter::{EventEmitter, EventSource};
use emitter_macros::event_source;

// 已存在同名字段时保留原定义（这里是 pub）
#[event_source(payload = u8)]
pub struct Gauge {
    pub event_emitter: EventEmitter<u8>,
    level: u8,
}

fn main() {
    let gauge = Gauge {
        event_emitter: EventEmitter::new(),
        level: 3,
    };
    gauge.emit("level", &gauge.level).unwrap();
    assert!(gauge.event_names().is_empty());
}
