use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use run_queue::{run_queue, run_queue_with_callback, RunSummary, SequentialRunner};
use tokio_util::sync::CancellationToken;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[tokio::test]
async fn test_steps_run_in_order_and_one_at_a_time() {
    init_logger();
    let log = Rc::new(RefCell::new(Vec::new()));

    // Earlier steps sleep longer; only strict sequencing keeps the order.
    let queue = vec![Some(3u64), None, Some(2), Some(1), None];
    let summary = run_queue(queue, |n| {
        let log = Rc::clone(&log);
        async move {
            log.borrow_mut().push(format!("start {}", n));
            tokio::time::sleep(Duration::from_millis(n * 5)).await;
            log.borrow_mut().push(format!("end {}", n));
            Ok(())
        }
    })
    .await
    .unwrap();

    assert_eq!(
        summary,
        RunSummary {
            completed: 3,
            skipped: 2,
            cancelled: false
        }
    );
    assert_eq!(
        *log.borrow(),
        vec!["start 3", "end 3", "start 2", "end 2", "start 1", "end 1"]
    );
}

#[tokio::test]
async fn test_first_error_stops_the_run() {
    init_logger();
    let mut ran = Vec::new();

    let err = run_queue(vec![Some("a"), Some("b"), Some("c")], |name| {
        ran.push(name);
        async move {
            if name == "b" {
                anyhow::bail!("cannot process {}", name);
            }
            Ok(())
        }
    })
    .await
    .unwrap_err();

    assert_eq!(ran, vec!["a", "b"]);
    assert_eq!(err.to_string(), "Step 1 failed");
    assert_eq!(err.root_cause().to_string(), "cannot process b");
}

#[tokio::test]
async fn test_cancellation_between_steps() {
    init_logger();
    let token = CancellationToken::new();
    let mut ran = Vec::new();

    let summary = SequentialRunner::new()
        .with_cancellation(token.clone())
        .run(vec![Some(1), Some(2), Some(3)], |n| {
            ran.push(n);
            if n == 2 {
                token.cancel();
            }
            async { Ok(()) }
        })
        .await
        .unwrap();

    assert!(summary.cancelled);
    assert_eq!(ran, vec![1, 2]);
}

#[tokio::test]
async fn test_cancellation_interrupts_running_step() {
    init_logger();
    let token = CancellationToken::new();
    let finished = Rc::new(RefCell::new(0));

    let summary = SequentialRunner::new()
        .with_cancellation(token.clone())
        .run(vec![Some(()), Some(())], |()| {
            let token = token.clone();
            let finished = Rc::clone(&finished);
            async move {
                token.cancel();
                tokio::time::sleep(Duration::from_secs(60)).await;
                *finished.borrow_mut() += 1;
                Ok(())
            }
        })
        .await
        .unwrap();

    assert!(summary.cancelled);
    assert_eq!(summary.completed, 0);
    assert_eq!(*finished.borrow(), 0);
}

#[tokio::test]
async fn test_callback_called_once_on_success() {
    let mut calls = Vec::new();
    let summary = run_queue_with_callback(
        vec![Some(1), None],
        |_| async { Ok(()) },
        |s| calls.push(*s),
    )
    .await
    .unwrap();

    assert_eq!(calls, vec![summary]);
}

#[tokio::test]
async fn test_callback_not_called_on_failure() {
    let mut called = false;
    let result = run_queue_with_callback(
        vec![Some(1)],
        |_| async { Err(anyhow::anyhow!("boom")) },
        |_| called = true,
    )
    .await;

    assert!(result.is_err());
    assert!(!called);
}
