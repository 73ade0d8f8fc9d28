//! Event stepper tests
//!
//! Server selection, timing fields and server-state updates, driven through
//! the public `assign_server` function and `ServerPool`.

use queue_simulator_core_rs::engine::{assign_server, replay_pairs, ServerPool};
use queue_simulator_core_rs::TimedPair;

#[test]
fn test_earliest_available_server_chosen() {
    let mut servers = vec![8.0, 3.0, 5.0];
    let a = assign_server(&mut servers, 4.0, 2.0).unwrap();

    assert_eq!(a.server, 2);
    assert_eq!(a.wait_time, 0.0);
    assert_eq!(a.start_service_time, 4.0);
    assert_eq!(a.end_service_time, 6.0);
    assert_eq!(servers, vec![8.0, 6.0, 5.0]);
}

#[test]
fn test_all_busy_waits_for_earliest() {
    let mut servers = vec![8.0, 7.0, 9.0];
    let a = assign_server(&mut servers, 4.0, 1.0).unwrap();

    assert_eq!(a.server, 2);
    assert_eq!(a.wait_time, 3.0);
    assert_eq!(a.start_service_time, 7.0);
    assert_eq!(a.end_service_time, 8.0);
}

#[test]
fn test_server_state_matches_end_of_service() {
    let mut pool = ServerPool::new(2).unwrap();
    for (arrival, service) in [(0.0, 5.0), (1.0, 2.0), (2.0, 4.0), (2.5, 1.0)] {
        let a = pool.assign(arrival, service);
        assert_eq!(pool.next_available()[a.server - 1], a.end_service_time);
        assert!(a.wait_time >= 0.0);
        assert_eq!(a.end_service_time, a.start_service_time + service);
    }
}

#[test]
fn test_stepper_is_deterministic() {
    let mut servers_a = vec![1.0, 4.0, 1.0, 0.5];
    let mut servers_b = servers_a.clone();

    for (arrival, service) in [(0.0, 3.0), (0.2, 1.0), (0.9, 2.5), (1.0, 0.1)] {
        let a = assign_server(&mut servers_a, arrival, service);
        let b = assign_server(&mut servers_b, arrival, service);
        assert_eq!(a, b);
    }
    assert_eq!(servers_a, servers_b);
}

#[test]
fn test_two_server_replay() {
    // Arrivals at 0, 1, 2, 3; long first job pins server 1
    let pairs = [
        TimedPair::new(0.0, 10.0),
        TimedPair::new(1.0, 2.0),
        TimedPair::new(1.0, 2.0),
        TimedPair::new(1.0, 1.0),
    ];
    let mut pool = ServerPool::new(2).unwrap();
    let records = replay_pairs(&pairs, &mut pool);

    let servers: Vec<usize> = records.iter().map(|r| r.server).collect();
    assert_eq!(servers, vec![1, 2, 2, 2]);

    // entity 3 arrives at 2, server 2 frees at 3
    assert_eq!(records[2].wait_time, 1.0);
    assert_eq!(records[2].end_service_time, 5.0);
    // entity 4 arrives at 3, server 2 frees at 5
    assert_eq!(records[3].wait_time, 2.0);
    assert_eq!(pool.next_available(), &[10.0, 6.0]);
}

#[test]
fn test_records_carry_zero_uniforms_on_replay() {
    let mut pool = ServerPool::new(1).unwrap();
    let records = replay_pairs(&[TimedPair::new(3.0, 1.0)], &mut pool);
    assert_eq!(records[0].arrival_uniform, 0.0);
    assert_eq!(records[0].service_uniform, 0.0);
}
