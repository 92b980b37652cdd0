use std::any::Any;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use thread_decor::{
    thread::panic_message, LoggingPanicHandler, ThreadFactory, ThreadFactoryBuilder,
    ThreadFactoryConfig, UncaughtPanicHandler, MIN_PRIORITY,
};
use tracing_subscriber::EnvFilter;

/// Shows the crate's logs in test output (`RUST_LOG=thread_decor=trace`).
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn started_thread_runs_under_its_decorated_name() {
    let factory = ThreadFactoryBuilder::create()
        .with_name_prefix(Some("Worker"))
        .with_name(Some("IO"))
        .build();

    let (tx, rx) = mpsc::channel();
    let thread = factory
        .new_thread(Box::new(move || {
            let name = thread::current().name().map(str::to_string);
            tx.send(name).unwrap();
        }))
        .unwrap();

    let handle = thread.start().unwrap();
    assert_eq!(handle.name(), "Worker-IO-1");
    handle.join().unwrap();

    assert_eq!(rx.recv().unwrap().as_deref(), Some("Worker-IO-1"));
}

#[test]
fn panic_goes_to_the_configured_handler() {
    init_tracing();

    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_by_handler = seen.clone();
    let handler: Arc<dyn UncaughtPanicHandler> =
        Arc::new(move |name: &str, payload: &(dyn Any + Send)| {
            let message = panic_message(payload).unwrap_or_default().to_string();
            seen_by_handler
                .lock()
                .unwrap()
                .push((name.to_string(), message));
        });

    let factory = ThreadFactoryBuilder::create()
        .with_name(Some("faulty"))
        .with_uncaught_panic_handler(Some(handler))
        .build();

    let handle = factory
        .new_thread(Box::new(|| panic!("kaboom")))
        .unwrap()
        .start()
        .unwrap();

    // the handler took the panic, so the thread ended normally
    assert!(handle.join().is_ok());
    assert_eq!(
        *seen.lock().unwrap(),
        vec![("ESH-faulty-1".to_string(), "kaboom".to_string())]
    );
}

#[test]
fn panic_without_handler_surfaces_through_join() {
    let factory = ThreadFactoryBuilder::create().build();

    let handle = factory
        .new_thread(Box::new(|| panic!("unhandled")))
        .unwrap()
        .start()
        .unwrap();

    let payload = handle.join().unwrap_err();
    assert_eq!(panic_message(payload.as_ref()), Some("unhandled"));
}

#[test]
fn logging_handler_swallows_panics() {
    init_tracing();

    let factory = ThreadFactoryBuilder::create()
        .with_uncaught_panic_handler(Some(Arc::new(LoggingPanicHandler)))
        .build();

    let handle = factory
        .new_thread(Box::new(|| panic!("logged")))
        .unwrap()
        .start()
        .unwrap();

    assert!(handle.join().is_ok());
}

#[test]
fn dropping_non_daemon_handle_waits_for_the_thread() {
    let finished = Arc::new(AtomicBool::new(false));
    let finished_by_thread = finished.clone();

    let factory = ThreadFactoryBuilder::create().build();
    let handle = factory
        .new_thread(Box::new(move || {
            thread::sleep(Duration::from_millis(50));
            finished_by_thread.store(true, Ordering::SeqCst);
        }))
        .unwrap()
        .start()
        .unwrap();

    assert!(!handle.is_daemon());
    drop(handle);
    assert!(finished.load(Ordering::SeqCst));
}

#[test]
fn dropping_daemon_handle_detaches_the_thread() {
    let (release_tx, release_rx) = mpsc::channel::<()>();
    let (done_tx, done_rx) = mpsc::channel();

    let factory = ThreadFactoryBuilder::create()
        .with_daemon_threads(true)
        .build();
    let handle = factory
        .new_thread(Box::new(move || {
            release_rx.recv().unwrap();
            done_tx.send(()).unwrap();
        }))
        .unwrap()
        .start()
        .unwrap();

    assert!(handle.is_daemon());
    // would deadlock if drop joined
    drop(handle);

    release_tx.send(()).unwrap();
    done_rx.recv_timeout(Duration::from_secs(5)).unwrap();
}

#[test]
fn low_priority_thread_still_runs() {
    init_tracing();

    let factory = ThreadFactoryBuilder::create()
        .with_priority(Some(MIN_PRIORITY))
        .unwrap()
        .build();

    let (tx, rx) = mpsc::channel();
    factory
        .new_thread(Box::new(move || tx.send(42).unwrap()))
        .unwrap()
        .start()
        .unwrap()
        .join()
        .unwrap();

    assert_eq!(rx.recv().unwrap(), 42);
}

#[test]
fn factory_from_json_config() {
    let config = ThreadFactoryConfig::from_json(
        r#"{ "name_prefix": "Worker", "name": "IO", "daemon": true, "priority": 7 }"#,
    )
    .unwrap();

    let factory = ThreadFactoryBuilder::from_config(&config).unwrap().build();
    let thread = factory.new_thread(Box::new(|| {})).unwrap();

    assert_eq!(thread.name(), "Worker-IO-1");
    assert!(thread.is_daemon());
    assert_eq!(thread.priority(), 7);
}

#[test]
fn invalid_priority_in_config_is_rejected() {
    let config = ThreadFactoryConfig::from_json(r#"{ "priority": 0 }"#).unwrap();
    assert!(ThreadFactoryBuilder::from_config(&config).is_err());
}

#[test]
fn builder_config_round_trips_through_json() {
    let mut builder = ThreadFactoryBuilder::create();
    builder
        .with_name_prefix(None)
        .with_name(Some("N"))
        .with_priority(Some(4))
        .unwrap();

    let json = builder.config().to_json().unwrap();
    let restored = ThreadFactoryBuilder::from_config(&ThreadFactoryConfig::from_json(&json).unwrap())
        .unwrap();

    assert_eq!(restored.config(), builder.config());
    assert_eq!(restored.config().name_prefix, None);
}

#[test]
fn dropping_handle_of_panicked_thread_does_not_propagate() {
    init_tracing();

    let factory = ThreadFactoryBuilder::create().build();
    let handle = factory
        .new_thread(Box::new(|| panic!("nobody joins me")))
        .unwrap()
        .start()
        .unwrap();

    // the payload is logged on drop instead of being re-raised
    drop(handle);
}

#[cfg(target_os = "linux")]
mod os_priority {
    use std::sync::mpsc;
    use std::thread;

    use thread_decor::{
        thread_priority::set_current_thread_priority, ThreadFactory, ThreadFactoryBuilder,
        MIN_PRIORITY, NORM_PRIORITY,
    };

    use super::init_tracing;

    fn current_nice() -> i32 {
        unsafe {
            let tid = libc::syscall(libc::SYS_gettid) as libc::id_t;
            libc::getpriority(libc::PRIO_PROCESS, tid)
        }
    }

    /// Nice value seen inside a thread created by a factory with `priority`.
    fn nice_of_started_thread(priority: Option<i32>) -> i32 {
        let factory = ThreadFactoryBuilder::create()
            .with_priority(priority)
            .unwrap()
            .build();

        let (tx, rx) = mpsc::channel();
        factory
            .new_thread(Box::new(move || tx.send(current_nice()).unwrap()))
            .unwrap()
            .start()
            .unwrap()
            .join()
            .unwrap();
        rx.recv().unwrap()
    }

    #[test]
    fn configured_priority_reaches_the_os_thread() {
        init_tracing();

        thread::spawn(|| {
            // lowering a nice value needs privileges
            if current_nice() > 4 {
                return;
            }
            assert_eq!(nice_of_started_thread(Some(3)), 4);
        })
        .join()
        .unwrap();
    }

    #[test]
    fn unset_priority_keeps_inherited_nice() {
        thread::spawn(|| {
            // a runner already niced past 8 cannot come back down
            if set_current_thread_priority(MIN_PRIORITY).is_err() {
                return;
            }
            assert_eq!(current_nice(), 8);

            assert_eq!(nice_of_started_thread(None), 8);
        })
        .join()
        .unwrap();
    }

    #[test]
    fn explicit_norm_priority_overrides_inherited_nice() {
        init_tracing();

        thread::spawn(|| {
            if set_current_thread_priority(MIN_PRIORITY).is_err() {
                return;
            }

            // going back from nice 8 to 0 needs privileges; skip without them
            let privileged = thread::spawn(|| set_current_thread_priority(NORM_PRIORITY).is_ok())
                .join()
                .unwrap();
            if !privileged {
                return;
            }

            assert_eq!(nice_of_started_thread(Some(NORM_PRIORITY)), 0);
        })
        .join()
        .unwrap();
    }
}
