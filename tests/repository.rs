//! End-to-end exercise of a list-backed repository.
//!
//! Models the common consumer shape: a store keeps its records in a
//! [`List`], mirrors every mutation into an audit journal through the
//! notification channels, and serves positional reads for display.

use std::cell::RefCell;
use std::rc::Rc;

use catena::{Error, List, NodeId};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// In-memory record store with an audit trail.
struct Repository {
    items: List<i32>,
    journal: Rc<RefCell<Vec<String>>>,
}

impl Repository {
    fn new() -> Self {
        let mut items = List::new();
        let journal = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&journal);
        items.on_item_added(move |item: &i32| {
            sink.borrow_mut().push(format!("added {item}"));
        });
        let sink = Rc::clone(&journal);
        items.on_item_removed(move |item: &i32| {
            sink.borrow_mut().push(format!("removed {item}"));
        });
        let sink = Rc::clone(&journal);
        items.on_cleared(move || {
            sink.borrow_mut().push("cleared".to_owned());
        });

        Self { items, journal }
    }

    fn add(&mut self, item: i32) -> NodeId<i32> {
        self.items.push_back(item)
    }

    fn remove(&mut self, item: i32) -> bool {
        self.items.remove_value(&item)
    }

    fn get(&self, position: usize) -> Option<i32> {
        self.items.get_at(position).copied()
    }

    fn reset(&mut self) {
        self.items.clear();
    }

    /// Renders a numbered listing, one record per line.
    fn render(&self) -> String {
        let mut out = String::new();
        for (position, item) in self.items.iter().enumerate() {
            out.push_str(&format!("{}. {item}\n", position + 1));
        }
        out
    }

    fn journal(&self) -> Vec<String> {
        self.journal.borrow().clone()
    }
}

#[test]
fn round_trip_keeps_insertion_order() {
    init_tracing();
    let mut repo = Repository::new();

    repo.add(10);
    repo.add(20);
    repo.add(30);

    assert_eq!(repo.items.len(), 3);
    assert_eq!(repo.get(0), Some(10));
    assert_eq!(repo.get(1), Some(20));
    assert_eq!(repo.get(2), Some(30));
    assert_eq!(repo.get(3), None);

    assert!(repo.remove(20));
    assert!(!repo.remove(20));

    let remaining: Vec<_> = repo.items.iter().copied().collect();
    assert_eq!(remaining, vec![10, 30]);
}

#[test]
fn journal_follows_every_mutation() {
    init_tracing();
    let mut repo = Repository::new();

    repo.add(1);
    repo.add(2);
    repo.remove(1);
    repo.reset();
    repo.add(3);

    assert_eq!(
        repo.journal(),
        vec!["added 1", "added 2", "removed 1", "cleared", "added 3"]
    );
}

#[test]
fn rendered_listing_matches_positions() {
    init_tracing();
    let mut repo = Repository::new();

    repo.add(10);
    repo.add(20);
    repo.add(30);

    assert_eq!(repo.render(), "1. 10\n2. 20\n3. 30\n");

    repo.remove(10);
    assert_eq!(repo.render(), "1. 20\n2. 30\n");

    repo.reset();
    assert_eq!(repo.render(), "");
}

#[test]
fn export_snapshot_preserves_prefix() {
    init_tracing();
    let mut repo = Repository::new();

    repo.add(1);
    repo.add(2);
    repo.add(3);

    let mut export = [0i32; 5];
    repo.items.copy_to(&mut export, 2).unwrap();

    assert_eq!(export, [0, 0, 1, 2, 3]);
}

#[test]
fn lookup_errors_carry_context() {
    init_tracing();
    let mut repo = Repository::new();

    repo.add(1);
    repo.add(2);

    let err = repo.items.node_at(5).unwrap_err();
    assert_eq!(err, Error::IndexOutOfRange { index: 5, len: 2 });
    assert_eq!(err.to_string(), "index 5 out of range for list of length 2");

    let mut export = [0i32; 1];
    let err = repo.items.copy_to(&mut export, 0).unwrap_err();
    assert_eq!(
        err,
        Error::InsufficientCapacity {
            required: 2,
            available: 1
        }
    );
}

#[test]
fn handles_stay_valid_across_churn() {
    init_tracing();
    let mut repo = Repository::new();

    let keeper = repo.add(42);
    for item in 0..16 {
        repo.add(item);
    }
    for item in 0..16 {
        repo.remove(item);
    }

    assert_eq!(repo.items.get(keeper), Some(&42));
    assert_eq!(repo.items.len(), 1);

    // Clearing is the one operation that retires every handle.
    repo.reset();
    assert_eq!(repo.items.get(keeper), None);
}
