//! Listener registry for change notifications.
//!
//! A list owns one registry with three channels: item added, item
//! removed, and cleared. Registration hands back a [`ListenerId`] that
//! revokes the listener later. Listeners run synchronously on the
//! mutating caller's thread, in registration order, and always after the
//! structural change has fully committed.
//!
//! A listener that panics unwinds out through the mutating call, and
//! listeners registered after it do not run for that event. The list
//! itself stays consistent: notification is the last step of every
//! mutation.

/// Token identifying a registered listener.
///
/// Returned by the subscription methods on [`List`](crate::List); pass
/// it to [`unsubscribe`](crate::List::unsubscribe) to revoke the
/// listener. Tokens are unique within their list and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type ValueListener<T> = Box<dyn FnMut(&T)>;
type UnitListener = Box<dyn FnMut()>;

pub(crate) struct Hooks<T> {
    added: Vec<(ListenerId, ValueListener<T>)>,
    removed: Vec<(ListenerId, ValueListener<T>)>,
    cleared: Vec<(ListenerId, UnitListener)>,
    next_id: u64,
}

impl<T> Hooks<T> {
    pub(crate) const fn new() -> Self {
        Self {
            added: Vec::new(),
            removed: Vec::new(),
            cleared: Vec::new(),
            next_id: 0,
        }
    }

    fn issue(&mut self) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        id
    }

    pub(crate) fn on_added(&mut self, listener: ValueListener<T>) -> ListenerId {
        let id = self.issue();
        self.added.push((id, listener));
        id
    }

    pub(crate) fn on_removed(&mut self, listener: ValueListener<T>) -> ListenerId {
        let id = self.issue();
        self.removed.push((id, listener));
        id
    }

    pub(crate) fn on_cleared(&mut self, listener: UnitListener) -> ListenerId {
        let id = self.issue();
        self.cleared.push((id, listener));
        id
    }

    /// Removes the listener registered under `id`, from whichever
    /// channel holds it. Returns `false` for unknown ids.
    pub(crate) fn unsubscribe(&mut self, id: ListenerId) -> bool {
        if let Some(pos) = self.added.iter().position(|(held, _)| *held == id) {
            self.added.remove(pos);
            return true;
        }
        if let Some(pos) = self.removed.iter().position(|(held, _)| *held == id) {
            self.removed.remove(pos);
            return true;
        }
        if let Some(pos) = self.cleared.iter().position(|(held, _)| *held == id) {
            self.cleared.remove(pos);
            return true;
        }
        false
    }

    pub(crate) fn emit_added(&mut self, value: &T) {
        for (_, listener) in &mut self.added {
            listener(value);
        }
    }

    pub(crate) fn emit_removed(&mut self, value: &T) {
        for (_, listener) in &mut self.removed {
            listener(value);
        }
    }

    pub(crate) fn emit_cleared(&mut self) {
        for (_, listener) in &mut self.cleared {
            listener();
        }
    }
}
