use emitter::{EventEmitter, EventSource, Listener};
use emitter_macros::event_source;

#[event_source(payload = (String, i64), field = events)]
struct Account {
    balance: std::cell::Cell<i64>,
}

impl Account {
    fn deposit(&self, amount: i64) -> emitter::EmitterResult<()> {
        self.balance.set(self.balance.get() + amount);
        self.emit("deposited", &("deposit".to_string(), amount))
    }
}

fn main() {
    let account = Account {
        balance: std::cell::Cell::new(0),
        events: EventEmitter::new(),
    };
    account
        .once(
            "deposited",
            Listener::new(|(kind, amount): &(String, i64)| {
                anyhow::ensure!(kind == "deposit" && *amount > 0, "bad deposit");
                Ok(())
            }),
        )
        .unwrap();
    account.deposit(10).unwrap();
    assert_eq!(account.balance.get(), 10);
    assert!(account.listeners("deposited").is_empty());
}
