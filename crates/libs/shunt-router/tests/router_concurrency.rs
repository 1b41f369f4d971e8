use std::collections::BTreeSet;
use std::sync::Arc;
use std::thread;

use serde::{Deserialize, Serialize};
use shunt_router::{MessageRouter, MpscDispatch};
use shunt_wire::{frame, MsgpackCodec};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Tick {
    worker: u32,
    payload: Vec<u8>,
}

/// Post-setup, `route` takes `&self` and every call decodes into its own
/// fresh value, so frames routed from many threads must come out intact.
#[test]
fn concurrent_routes_do_not_corrupt_each_other() {
    const WORKERS: u32 = 8;
    const FRAMES_PER_WORKER: u32 = 50;

    let (dispatch, mut rx) = MpscDispatch::new();
    let mut router = MessageRouter::new(MsgpackCodec, Arc::new(dispatch));
    router.register::<Tick>(Some(Arc::new(()))).unwrap();
    let router = Arc::new(router);

    thread::scope(|scope| {
        for worker in 0..WORKERS {
            let router = Arc::clone(&router);
            scope.spawn(move || {
                for n in 0..FRAMES_PER_WORKER {
                    let tick = Tick {
                        worker,
                        payload: vec![worker as u8; (n as usize % 17) + 1],
                    };
                    let (id, body) = router.marshal(&tick).unwrap();
                    let data = frame::assemble(router.byte_order(), id, &body);
                    router.route(&data).unwrap();
                }
            });
        }
    });

    let mut seen = BTreeSet::new();
    let mut count = 0u32;
    while let Ok(envelope) = rx.try_recv() {
        let (tick, _handler) = envelope.downcast::<Tick>().unwrap();
        // Every byte of the payload must match the sending worker.
        assert!(tick.payload.iter().all(|&b| b == tick.worker as u8));
        seen.insert(tick.worker);
        count += 1;
    }

    assert_eq!(count, WORKERS * FRAMES_PER_WORKER);
    assert_eq!(seen.len(), WORKERS as usize);
}
