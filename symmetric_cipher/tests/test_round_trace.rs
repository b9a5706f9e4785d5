use std::sync::Mutex;

use symmetric_cipher::crypto::round_trace::{RoundObserver, RoundTrace};

struct CollectingObserver {
    seen: Mutex<Vec<RoundTrace>>,
}

impl RoundObserver for CollectingObserver {
    fn on_round(&self, trace: RoundTrace) {
        self.seen.lock().unwrap().push(trace);
    }
}

#[test]
fn test_observer_receives_traces_through_trait_object() {
    let observer = CollectingObserver {
        seen: Mutex::new(Vec::new()),
    };
    let dyn_observer: &dyn RoundObserver = &observer;

    let trace = RoundTrace {
        round: 1,
        round_key: 0xe3,
        f_output: 40,
        left: 53,
        right: 10,
    };
    dyn_observer.on_round(trace);

    let seen = observer.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0], trace);
}
