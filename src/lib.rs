//! Doubly-linked list with stable handles and change notifications.
//!
//! `catena` provides [`List`], a generic doubly-linked container that
//! owns its nodes in a generational arena and hands out copyable
//! [`NodeId`] handles instead of references or raw pointers. Handles
//! make the classic linked-list operations cheap and safe: O(1) removal
//! from the middle, O(1) re-insertion of a detached node, and stale
//! handle detection instead of dangling access.
//!
//! # Design Philosophy
//!
//! - **Arena-backed chain.** Nodes live in a `Vec`; `prev`/`next` are
//!   slot indices, not pointers. No `unsafe`, no `Rc` cycles, and
//!   freeing a node never moves its neighbors.
//! - **Generation-checked handles.** Every slot carries a generation
//!   stamp. Removing a node or clearing the list advances it, so a
//!   handle that outlives its node is detected and reported as absent
//!   rather than resolving to whatever reused the slot.
//! - **Synchronous change notifications.** Added, removed, and cleared
//!   channels fan out to registered listeners in registration order,
//!   after each mutation commits. No background threads, no queues.
//! - **Single-threaded by design.** A `List` is as thread-safe as a
//!   `Vec`: share it across threads behind your own lock, or don't.
//!
//! | Operation                  | Cost             |
//! |----------------------------|------------------|
//! | push/pop front or back     | O(1) amortized   |
//! | remove / detach / attach   | O(1) by handle   |
//! | find / node_at / copy_to   | O(n)             |
//!
//! # Quick Start
//!
//! ```
//! use catena::List;
//!
//! let mut playlist: List<String> = List::new();
//!
//! let opener = playlist.push_back("overture".to_owned());
//! playlist.push_back("interlude".to_owned());
//! playlist.push_back("finale".to_owned());
//!
//! // Handles survive unrelated mutations.
//! playlist.remove_value(&"interlude".to_owned());
//! assert_eq!(playlist.get(opener), Some(&"overture".to_owned()));
//!
//! // Positional and value lookup.
//! assert_eq!(playlist.get_at(1), Some(&"finale".to_owned()));
//! assert!(playlist.contains(&"overture".to_owned()));
//!
//! let order: Vec<_> = playlist.iter().cloned().collect();
//! assert_eq!(order, vec!["overture", "finale"]);
//! ```
//!
//! # Change Notifications
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use catena::List;
//!
//! let mut inventory: List<u32> = List::new();
//! let journal = Rc::new(RefCell::new(Vec::new()));
//!
//! let sink = Rc::clone(&journal);
//! inventory.on_item_added(move |sku: &u32| {
//!     sink.borrow_mut().push(format!("stocked {sku}"));
//! });
//! let sink = Rc::clone(&journal);
//! inventory.on_item_removed(move |sku: &u32| {
//!     sink.borrow_mut().push(format!("shipped {sku}"));
//! });
//!
//! inventory.push_back(11);
//! inventory.push_back(47);
//! inventory.pop_front();
//!
//! assert_eq!(
//!     *journal.borrow(),
//!     vec!["stocked 11", "stocked 47", "shipped 11"]
//! );
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod events;
pub mod key;
pub mod list;

mod storage;

pub use error::{Error, Result};
pub use events::ListenerId;
pub use key::NodeId;
pub use list::{Ids, IntoIter, Iter, List};
