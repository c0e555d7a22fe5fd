use std::collections::HashMap;

use cpu_schedule::models::{Policy, Process, ScheduleResult};
use cpu_schedule::scheduler::{compare_all, simulate, ScheduleKpi};
use cpu_schedule::workload::{random_processes, sample_processes, WorkloadConfig};

fn check_invariants(processes: &[Process], r: &ScheduleResult) {
    // Completeness: one metric per process, sorted by id.
    assert_eq!(r.metrics.len(), processes.len(), "{}", r.policy);
    for p in processes {
        assert!(r.metric_for(&p.id).is_some(), "{}: missing {}", r.policy, p.id);
    }
    assert!(r.metrics.windows(2).all(|w| w[0].id < w[1].id));

    // Non-overlap and ordering.
    for i in &r.intervals {
        assert!(i.start < i.end);
    }
    for w in r.intervals.windows(2) {
        assert!(w[0].end <= w[1].start, "{}: overlap {:?}", r.policy, w);
    }

    // Work conservation.
    let mut worked: HashMap<&str, i64> = HashMap::new();
    for i in &r.intervals {
        *worked.entry(i.id.as_str()).or_insert(0) += i.duration();
    }
    for p in processes {
        assert_eq!(worked.get(p.id.as_str()), Some(&p.burst), "{}: {}", r.policy, p.id);
    }

    // Metric identities.
    for m in &r.metrics {
        let process = processes.iter().find(|p| p.id == m.id).unwrap();
        let intervals = r.intervals_for(&m.id);
        let first = intervals.first().unwrap();
        let last = intervals.last().unwrap();

        assert!(first.start >= process.arrival);
        assert_eq!(m.completion, last.end);
        assert_eq!(m.turnaround, m.completion - m.arrival);
        assert_eq!(m.waiting, m.turnaround - m.burst);
        assert_eq!(m.response, first.start - m.arrival);
        assert!(m.waiting >= 0);
        assert!(m.response >= 0);
    }
}

#[test]
fn test_invariants_on_sample() {
    let processes = sample_processes();
    for policy in Policy::ALL {
        for quantum in [1, 2, 3, 10] {
            let r = simulate(policy, &processes, Some(quantum)).unwrap();
            check_invariants(&processes, &r);
        }
    }
}

#[test]
fn test_invariants_on_random_workloads() {
    let config = WorkloadConfig::default()
        .with_count(12)
        .with_max_arrival(40)
        .with_burst_range(1, 9);

    for seed in 0..25 {
        let processes = random_processes(&config, seed);
        for policy in Policy::ALL {
            let r = simulate(policy, &processes, Some(1 + (seed as i64 % 4))).unwrap();
            check_invariants(&processes, &r);
        }
    }
}

#[test]
fn test_fcfs_worked_example() {
    let r = simulate(Policy::Fcfs, &sample_processes(), None).unwrap();
    let completions: Vec<i64> = r.metrics.iter().map(|m| m.completion).collect();
    assert_eq!(completions, vec![5, 8, 16, 22]);

    let kpi = ScheduleKpi::calculate(&r).unwrap();
    assert!((kpi.avg_waiting - 5.75).abs() < 1e-10);
}

#[test]
fn test_sjf_worked_example() {
    let r = simulate(Policy::Sjf, &sample_processes(), None).unwrap();
    let spans: Vec<(&str, i64, i64)> = r
        .intervals
        .iter()
        .map(|i| (i.id.as_str(), i.start, i.end))
        .collect();
    assert_eq!(
        spans,
        vec![("P1", 0, 5), ("P2", 5, 8), ("P4", 8, 14), ("P3", 14, 22)]
    );
}

#[test]
fn test_round_robin_worked_example() {
    let processes = sample_processes();
    let r = simulate(Policy::RoundRobin, &processes, Some(2)).unwrap();
    assert_eq!(&r.dispatch_order()[..3], &["P1", "P2", "P3"]);
    assert_eq!(r.intervals[2].start, 4);
    assert_eq!(r.intervals[2].end, 6);

    let total_burst: i64 = processes.iter().map(|p| p.burst).sum();
    assert_eq!(r.makespan(), total_burst);
    assert_eq!(r.idle_time(), 0);
}

#[test]
fn test_results_are_byte_identical() {
    let processes = random_processes(&WorkloadConfig::default(), 99);
    for policy in Policy::ALL {
        let a = serde_json::to_string(&simulate(policy, &processes, None).unwrap()).unwrap();
        let b = serde_json::to_string(&simulate(policy, &processes, None).unwrap()).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn test_concurrent_policies_share_input() {
    let processes = sample_processes();
    let sequential = compare_all(&processes, None).unwrap();

    let input = &processes;
    let threaded: Vec<ScheduleResult> = std::thread::scope(|s| {
        let handles: Vec<_> = Policy::ALL
            .iter()
            .map(|&policy| s.spawn(move || simulate(policy, input, None).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (entry, result) in sequential.entries.iter().zip(&threaded) {
        assert_eq!(&entry.result, result);
    }
}

#[test]
fn test_sjf_never_worse_than_fcfs_when_all_arrive_together() {
    let config = WorkloadConfig::default().with_count(10).with_max_arrival(0);
    for seed in 0..10 {
        let cmp = compare_all(&random_processes(&config, seed), None).unwrap();
        let fcfs = cmp.get(Policy::Fcfs).unwrap().kpi.avg_waiting;
        let sjf = cmp.get(Policy::Sjf).unwrap().kpi.avg_waiting;
        assert!(sjf <= fcfs);
    }
}
