use crate::sim::{EventId, EventIdGen, EventKind, EventQueue, EventRecord, Principal, SimError, SimTime};

fn push(q: &mut EventQueue, ids: &mut EventIdGen, kind: EventKind, time: f64) -> EventId {
    let e = EventRecord::new(ids, kind, SimTime(time), 0, Principal::Scheduler);
    let id = e.id();
    q.push(e);
    id
}

fn drain(q: &mut EventQueue) -> Vec<EventId> {
    std::iter::from_fn(|| q.pop()).map(|e| e.id()).collect()
}

#[test]
fn event_queue_pops_minimal_event_first() {
    let mut ids = EventIdGen::new();
    let mut q = EventQueue::new();
    let a = push(&mut q, &mut ids, EventKind::NewJob, 10.0);
    let b = push(&mut q, &mut ids, EventKind::NewJob, 5.0);
    let c = push(&mut q, &mut ids, EventKind::NewJob, 10.0);
    let d = push(&mut q, &mut ids, EventKind::TaskFinish, 10.0);

    assert_eq!(q.len(), 4);
    assert_eq!(q.peek().map(EventRecord::id), Some(b));
    assert_eq!(drain(&mut q), vec![b, d, a, c]);
    assert!(q.is_empty());
    assert!(q.pop().is_none());
}

#[test]
fn event_queue_cancel_removes_only_the_target() {
    let mut ids = EventIdGen::new();
    let mut q = EventQueue::new();
    let a = push(&mut q, &mut ids, EventKind::NewJob, 1.0);
    let b = push(&mut q, &mut ids, EventKind::NewJob, 2.0);
    let c = push(&mut q, &mut ids, EventKind::NewJob, 3.0);

    let removed = q.cancel(b).expect("b is queued");
    assert_eq!(removed.id(), b);
    assert!(!q.contains(b));
    assert!(q.cancel(b).is_none());
    assert_eq!(drain(&mut q), vec![a, c]);
}

#[test]
fn event_queue_reschedule_reinserts_with_new_time() {
    let mut ids = EventIdGen::new();
    let mut q = EventQueue::new();
    let a = push(&mut q, &mut ids, EventKind::NewJob, 1.0);
    let b = push(&mut q, &mut ids, EventKind::NewJob, 2.0);

    assert_eq!(q.reschedule(a, SimTime(5.0)).expect("reschedule"), a);
    assert_eq!(q.len(), 2);
    let snapshot = q.sorted_snapshot();
    assert_eq!(snapshot[1].time(), SimTime(5.0));
    assert_eq!(drain(&mut q), vec![b, a]);

    assert!(matches!(
        q.reschedule(a, SimTime(6.0)),
        Err(SimError::UnknownEvent(id)) if id == a
    ));
}

#[test]
fn event_queue_snapshot_does_not_consume() {
    let mut ids = EventIdGen::new();
    let mut q = EventQueue::new();
    let a = push(&mut q, &mut ids, EventKind::NewJob, 2.0);
    let b = push(&mut q, &mut ids, EventKind::JobFinish, 2.0);
    let ids_in_order: Vec<EventId> = q.sorted_snapshot().iter().map(EventRecord::id).collect();
    assert_eq!(ids_in_order, vec![b, a]);
    assert_eq!(q.len(), 2);
}
