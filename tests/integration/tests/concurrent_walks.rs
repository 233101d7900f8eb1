//! Walks that cross thread and task boundaries.

use std::ops::ControlFlow;
use std::thread;
use std::time::Duration;

use pretty_assertions::assert_eq;
use rayon::prelude::*;
use walkabout_core::stream;
use walkabout_core::{CancelToken, Interrupt, Value, WalkConfig, Walkable, Walker, collect};
use walkabout_kit::RequestContext;

struct Profile {
    age: u32,
    city: String,
}

impl Walkable for Profile {
    fn to_value(&self) -> Value {
        Value::record([("Age", self.age.to_value()), ("City", self.city.to_value())])
    }
}

#[test]
fn stream_fed_by_many_threads_delivers_every_item() {
    let (tx, rx) = stream::channel();

    let senders: Vec<_> = (0..4)
        .map(|worker| {
            let tx = tx.clone();
            thread::spawn(move || {
                for i in 0..25 {
                    tx.send(format!("{worker}-{i}")).unwrap();
                }
            })
        })
        .collect();
    drop(tx);

    let mut got = collect(&Value::from(rx));
    for sender in senders {
        sender.join().unwrap();
    }

    let mut want: Vec<String> = (0..4)
        .flat_map(|worker| (0..25).map(move |i| format!("{worker}-{i}")))
        .collect();
    got.sort();
    want.sort();
    assert_eq!(got, want);
}

#[test]
fn stream_of_records_is_walked_depth_first() {
    let (tx, rx) = stream::bounded(0);

    let feeder = thread::spawn(move || {
        tx.send(Profile { age: 33, city: "Berlin".to_string() }).unwrap();
        tx.send(Profile { age: 34, city: "Katowice".to_string() }).unwrap();
    });

    let got = collect(&Value::from(rx));
    feeder.join().unwrap();

    assert_eq!(got, vec!["Berlin", "Katowice"]);
}

#[test]
fn one_walker_serves_many_independent_walks() {
    let walker = Walker::default();
    let cities: Vec<String> = (0..64).map(|i| format!("city-{i}")).collect();

    let results: Vec<Vec<String>> = cities
        .par_iter()
        .map(|city| {
            let profile = Profile { age: 30, city: city.clone() };
            let mut seen = Vec::new();
            let outcome = walker.walk(&profile, &mut |s: &str| seen.push(s.to_string()));
            assert_eq!(outcome, ControlFlow::Continue(()));
            seen
        })
        .collect();

    for (city, seen) in cities.iter().zip(results) {
        assert_eq!(seen, vec![city.clone()]);
    }
}

#[test]
fn timeout_from_json_config_ends_a_stalled_walk() {
    let config = WalkConfig::from_json(r#"{ "stream_timeout_ms": 20 }"#).unwrap();
    let walker = Walker::new(config);

    let (tx, rx) = stream::channel();
    tx.send("first").unwrap();

    let mut seen = Vec::new();
    let outcome = walker.walk(&Value::from(rx), &mut |s: &str| seen.push(s.to_string()));

    assert_eq!(outcome, ControlFlow::Break(Interrupt::TimedOut));
    assert_eq!(seen, vec!["first"]);
    drop(tx);
}

#[tokio::test]
async fn cancelled_request_stops_a_blocking_walk() {
    let (ctx, handle) = RequestContext::with_cancel();
    let token = CancelToken::new();

    let watcher = {
        let token = token.clone();
        tokio::spawn(async move {
            ctx.done().await;
            token.cancel();
        })
    };

    let (tx, rx) = stream::channel();
    tx.send("before cancel").unwrap();

    let walker = Walker::new(WalkConfig::new().cancel_token(token));
    let walk = tokio::task::spawn_blocking(move || {
        let mut seen = Vec::new();
        let outcome = walker.walk(&Value::from(rx), &mut |s: &str| seen.push(s.to_string()));
        (outcome, seen)
    });

    tokio::time::sleep(Duration::from_millis(20)).await;
    handle.cancel();

    let (outcome, seen) = walk.await.unwrap();
    watcher.await.unwrap();

    assert_eq!(outcome, ControlFlow::Break(Interrupt::Cancelled));
    assert_eq!(seen, vec!["before cancel"]);
    drop(tx);
}
