use crate::resource::ResourcePack;
use crate::sim::{
    EventIdGen, EventKind, EventPayload, EventRecord, JobId, Principal, Role, SCHEDULER_PRINCIPAL,
    SimTime, TIME_EPS, TaskId, WorkerId,
};
use std::cmp::Ordering;

fn ev(ids: &mut EventIdGen, kind: EventKind, time: f64, priority: i32) -> EventRecord {
    EventRecord::new(ids, kind, SimTime(time), priority, Principal::Scheduler)
}

#[test]
fn event_ids_are_unique_and_increasing() {
    let mut ids = EventIdGen::new();
    let a = ev(&mut ids, EventKind::NewJob, 0.0, 0);
    let b = ev(&mut ids, EventKind::NewJob, 0.0, 0);
    let c = ev(&mut ids, EventKind::TaskFinish, 5.0, 1);
    assert!(a.id() < b.id());
    assert!(b.id() < c.id());
    assert_eq!(ids.issued(), 3);
}

#[test]
fn event_record_accessors_and_mutators() {
    let mut ids = EventIdGen::new();
    let payload = EventPayload::Placement {
        job: JobId(3),
        task: TaskId(1),
        worker: WorkerId(2),
        demand: ResourcePack::new(1.0, 2.0, 3.0, 4.0),
    };
    let mut e = EventRecord::with_payload(
        &mut ids,
        EventKind::PlacementDecision,
        SimTime(1.5),
        7,
        Principal::Job(JobId(3)),
        payload.clone(),
    );
    assert_eq!(e.kind(), EventKind::PlacementDecision);
    assert_eq!(e.time(), SimTime(1.5));
    assert_eq!(e.priority(), 7);
    assert_eq!(e.principal(), Principal::Job(JobId(3)));
    assert_eq!(e.payload(), &payload);

    e.set_time(SimTime(4.0));
    e.set_priority(-1);
    assert_eq!(e.time(), SimTime(4.0));
    assert_eq!(e.priority(), -1);
    assert_eq!(e.into_payload(), payload);
}

#[test]
fn event_orders_by_time_first() {
    let mut ids = EventIdGen::new();
    let late = ev(&mut ids, EventKind::TaskFinish, 2.0, 0);
    let early = ev(&mut ids, EventKind::NewJob, 1.0, 9);
    assert_eq!(early.dispatch_cmp(&late), Ordering::Less);
    assert!(early < late);
}

#[test]
fn event_times_within_eps_fall_through_to_kind_then_priority() {
    let mut ids = EventIdGen::new();
    let a = ev(&mut ids, EventKind::NewJob, 1.0, 0);
    let b = ev(&mut ids, EventKind::TaskFinish, 1.0 + TIME_EPS / 2.0, 0);
    // 时间视为相同，TASK_FINISH 序号更小
    assert!(b < a);

    let c = ev(&mut ids, EventKind::NewJob, 1.0 + TIME_EPS / 2.0, -3);
    assert!(c < a);
    assert!(a.same_slot(&ev(&mut ids, EventKind::NewJob, 1.0, 0)));
    assert!(!a.same_slot(&c));
}

#[test]
fn event_kind_ordinal_breaks_ties() {
    let mut ids = EventIdGen::new();
    let new_job = ev(&mut ids, EventKind::NewJob, 1.0, 0);
    let admission = ev(&mut ids, EventKind::JobAdmission, 1.0, 0);
    assert_eq!(admission.dispatch_cmp(&new_job), Ordering::Less);
}

#[test]
fn event_kind_enumeration_order_is_fixed() {
    let ordinals: Vec<u8> = EventKind::ALL.iter().map(|k| k.ordinal()).collect();
    assert_eq!(ordinals, vec![0, 1, 2, 3, 4, 5, 6]);
    assert_eq!(EventKind::ALL[0], EventKind::TaskFinish);
    assert_eq!(EventKind::ALL[6], EventKind::NewJob);
    assert!(EventKind::ResourceAvailable < EventKind::NewTaskReq);
    assert_eq!(EventKind::PlacementDecision.to_string(), "PLACEMENT_DECISION");
}

#[test]
fn event_kind_direction_matches_addressee() {
    assert_eq!(EventKind::TaskFinish.direction(), Role::JobManager);
    assert_eq!(EventKind::JobAdmission.direction(), Role::JobManager);
    assert_eq!(EventKind::PlacementDecision.direction(), Role::JobManager);
    assert_eq!(EventKind::ResourceAvailable.direction(), Role::Scheduler);
    assert_eq!(EventKind::JobFinish.direction(), Role::Scheduler);
    assert_eq!(EventKind::NewTaskReq.direction(), Role::Scheduler);
    assert_eq!(EventKind::NewJob.direction(), Role::Scheduler);
}

#[test]
fn event_identical_keys_fall_back_to_creation_order() {
    let mut ids = EventIdGen::new();
    let first = ev(&mut ids, EventKind::NewTaskReq, 3.0, 1);
    let second = ev(&mut ids, EventKind::NewTaskReq, 3.0, 1);
    assert!(first.same_slot(&second));
    assert_eq!(first.dispatch_cmp(&second), Ordering::Less);
    assert_eq!(second.dispatch_cmp(&first), Ordering::Greater);
    assert_eq!(first.dispatch_cmp(&first), Ordering::Equal);
    assert_ne!(first, second);
}

#[test]
fn event_order_is_irreflexive_asymmetric_and_transitive() {
    let mut ids = EventIdGen::new();
    let mut events = Vec::new();
    for kind in EventKind::ALL {
        for t in [0.0, 1.0, 1.0 + TIME_EPS / 4.0, 2.0] {
            for prio in [-1, 0, 3] {
                events.push(ev(&mut ids, kind, t, prio));
            }
        }
    }

    for a in &events {
        assert!(!(a < a));
        for b in &events {
            assert!(!(a < b && b < a));
            for c in &events {
                if a < b && b < c {
                    assert!(a < c);
                }
            }
        }
    }
}

#[test]
fn event_sorting_is_reproducible() {
    let build = || {
        let mut ids = EventIdGen::new();
        let mut events = vec![
            ev(&mut ids, EventKind::NewJob, 0.0, 0),
            ev(&mut ids, EventKind::NewJob, 0.0, 0),
            ev(&mut ids, EventKind::TaskFinish, 0.0, 2),
            ev(&mut ids, EventKind::TaskFinish, 0.0, 1),
            ev(&mut ids, EventKind::ResourceAvailable, 1.0, 0),
            ev(&mut ids, EventKind::NewTaskReq, 0.0, 0),
        ];
        events.reverse();
        events.sort();
        events.iter().map(|e| e.id().0).collect::<Vec<_>>()
    };
    let order = build();
    assert_eq!(order, vec![3, 2, 5, 0, 1, 4]);
    assert_eq!(order, build());
}

#[test]
fn principal_raw_form_uses_scheduler_sentinel() {
    assert_eq!(Principal::Scheduler.as_raw(), SCHEDULER_PRINCIPAL);
    assert_eq!(Principal::from_raw(-1), Some(Principal::Scheduler));
    assert_eq!(Principal::from_raw(12), Some(Principal::Job(JobId(12))));
    assert_eq!(Principal::Job(JobId(12)).as_raw(), 12);
    assert_eq!(Principal::from_raw(-2), None);
}
