#![warn(clippy::all, rust_2018_idioms)]

pub mod event;
pub mod storage;
pub mod string_error;

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use crate::event::{AppEvent, EventQueue};
    use crate::storage::Storage;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Counter {
        value: i64,
    }

    struct Add(i64);

    impl AppEvent for Add {
        type App = Counter;
        fn apply(&self, app: &mut Counter) -> Result<(), String> {
            if self.0 < 0 {
                return Err("negative increment".to_string());
            }
            app.value += self.0;
            Ok(())
        }
        fn describe(&self) -> String {
            format!("add {}", self.0)
        }
    }

    #[test]
    fn test_events_run_in_order_and_failures_do_not_stop_queue() {
        let _ = env_logger::builder().is_test(true).try_init();

        let mut app = Counter::default();
        let mut queue = EventQueue::<Counter>::new();
        queue.queue_event(Box::new(Add(1)));
        queue.queue_event(Box::new(Add(-5)));
        queue.queue_event(Box::new(Add(2)));
        assert_eq!(queue.len(), 3);

        let failed = queue.run_events(&mut app);
        assert_eq!(failed, 1);
        assert_eq!(app.value, 3);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_storage_round_trip() {
        let _ = env_logger::builder().is_test(true).try_init();

        let path = std::env::temp_dir().join(format!(
            "app_core_storage_test_{}.json",
            std::process::id()
        ));
        Storage::new(Counter { value: 7 })
            .save_json(Some(&path))
            .unwrap();
        let loaded = Storage::<Counter>::load_json(Some(&path)).unwrap();
        assert_eq!(loaded.state, Counter { value: 7 });
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_storage_missing_file_is_error() {
        let path = std::env::temp_dir().join("app_core_storage_does_not_exist.json");
        let res = Storage::<Counter>::load_json(Some(&path));
        assert!(res.is_err());
    }
}
