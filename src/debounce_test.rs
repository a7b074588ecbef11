use super::*;

#[test]
fn burst_collapses_to_last_call_after_wait() {
    let mut d = Debouncer::new(10.0);
    d.call(0.0, "first");
    d.call(5.0, "second");
    d.call(8.0, "third");

    let mut fired = Vec::new();
    for t in 0..=30 {
        if let Some(args) = d.poll(f64::from(t)) {
            fired.push((t, args));
        }
    }
    assert_eq!(fired, vec![(18, "third")]);
}

#[test]
fn poll_before_deadline_keeps_call_pending() {
    let mut d = Debouncer::new(10.0);
    d.call(0.0, 1);
    assert_eq!(d.poll(9.9), None);
    assert!(d.is_pending());
    assert_eq!(d.poll(10.0), Some(1));
    assert!(!d.is_pending());
}

#[test]
fn separate_bursts_fire_separately() {
    let mut d = Debouncer::new(10.0);
    d.call(0.0, 'a');
    assert_eq!(d.poll(10.0), Some('a'));
    d.call(50.0, 'b');
    assert_eq!(d.poll(55.0), None);
    assert_eq!(d.poll(60.0), Some('b'));
}

#[test]
fn each_call_pushes_deadline_back() {
    let mut d = Debouncer::new(300.0);
    d.call(0.0, ());
    assert_eq!(d.due_ms(), Some(300.0));
    d.call(250.0, ());
    assert_eq!(d.due_ms(), Some(550.0));
    assert_eq!(d.poll(300.0), None);
}

#[test]
fn cancel_without_pending_is_noop() {
    let mut d: Debouncer<u8> = Debouncer::new(10.0);
    d.cancel();
    assert!(!d.is_pending());
    assert_eq!(d.poll(100.0), None);
}

#[test]
fn cancel_drops_pending_call() {
    let mut d = Debouncer::new(10.0);
    d.call(0.0, 7);
    d.cancel();
    assert_eq!(d.poll(100.0), None);
}

/// Drive a debouncer the way the browser wrapper does: every call arms a
/// fresh timer for `wait` (cancelling the previous one) and a timer that
/// fires early re-arms for the remainder. `jitter` is subtracted from every
/// timer delay.
fn run_timers(wait: f64, calls: &[(f64, char)], jitter: f64) -> Vec<(f64, char)> {
    let mut d = Debouncer::new(wait);
    let mut timer: Option<f64> = None;
    let mut fired = Vec::new();
    let mut calls = calls.iter().copied().peekable();
    loop {
        let next_call = calls.peek().map(|(t, _)| *t);
        match (next_call, timer) {
            (Some(t), Some(at)) if at < t => {}
            (Some(t), _) => {
                let (_, args) = calls.next().unwrap_or((t, '?'));
                d.call(t, args);
                timer = Some(t + wait - jitter);
                continue;
            }
            (None, None) => return fired,
            (None, Some(_)) => {}
        }
        let Some(at) = timer.take() else { return fired };
        match d.on_timer(at) {
            TimerFired::Run(args) => fired.push((at, args)),
            TimerFired::Rearm(remaining) => timer = Some(at + remaining),
            TimerFired::Idle => {}
        }
    }
}

#[test]
fn timer_burst_runs_once_with_last_args() {
    let fired = run_timers(10.0, &[(0.0, 'a'), (5.0, 'b'), (8.0, 'c')], 0.0);
    assert_eq!(fired, vec![(18.0, 'c')]);
}

#[test]
fn early_timer_rearms_until_deadline() {
    let fired = run_timers(10.0, &[(0.0, 'a'), (5.0, 'b'), (8.0, 'c')], 2.0);
    assert_eq!(fired, vec![(18.0, 'c')]);
}

#[test]
fn early_timer_reports_remaining_wait() {
    let mut d = Debouncer::new(10.0);
    d.call(8.0, ());
    assert_eq!(d.on_timer(15.0), TimerFired::Rearm(3.0));
    assert!(d.is_pending());
    assert_eq!(d.on_timer(18.0), TimerFired::Run(()));
}

#[test]
fn timer_after_run_is_idle() {
    let mut d = Debouncer::new(10.0);
    d.call(0.0, 1);
    assert_eq!(d.on_timer(10.0), TimerFired::Run(1));
    assert_eq!(d.on_timer(20.0), TimerFired::Idle);
}

#[test]
fn timer_after_cancel_is_idle() {
    let mut d = Debouncer::new(10.0);
    d.call(0.0, 1);
    d.cancel();
    assert_eq!(d.on_timer(10.0), TimerFired::Idle);
}

#[test]
fn fires_at_most_once_per_burst() {
    let mut d = Debouncer::new(10.0);
    d.call(0.0, 1);
    assert_eq!(d.poll(10.0), Some(1));
    assert_eq!(d.poll(11.0), None);
    assert_eq!(d.poll(1000.0), None);
}
