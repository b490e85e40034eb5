//! Orientation Lock
//!
//! Locking goes through fullscreen: a lock request enters fullscreen and
//! marks the compass locked straight away; the platform lock command is
//! issued once the fullscreen-change event confirms fullscreen. Leaving
//! fullscreen for any reason unlocks.
//!
//! Lock commands are fire-and-forget. Their outcome arrives on a
//! [`LockTicket`] which the controller drains and discards. A rejection does
//! not roll back `locked`, so the indicator can claim a lock the platform
//! refused.

use smol::channel::{self, Receiver, Sender, TryRecvError};

use crate::{CapabilityProvider, CompassView, LockRejected, classify};

/// Lock state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LockState {
    #[default]
    Unlocked,
    Locked,
}

/// Outcome channel of one platform lock command
#[derive(Debug)]
pub struct LockTicket {
    outcome: Receiver<Result<(), LockRejected>>,
}

impl LockTicket {
    /// New ticket plus the sender the platform resolves it with
    pub fn pending() -> (Sender<Result<(), LockRejected>>, Self) {
        let (tx, rx) = channel::bounded(1);
        (tx, Self { outcome: rx })
    }

    /// Ticket that is already settled
    pub fn settled(result: Result<(), LockRejected>) -> Self {
        let (tx, ticket) = Self::pending();
        tx.try_send(result).ok();
        ticket
    }

    /// Outcome if the platform has answered.
    ///
    /// A sender dropped without answering counts as a rejection.
    pub fn try_outcome(&self) -> Option<Result<(), LockRejected>> {
        match self.outcome.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Closed) => Some(Err(LockRejected::new("lock request abandoned"))),
        }
    }
}

/// Orientation lock state machine
#[derive(Debug, Default)]
pub struct OrientationLockController {
    lockable: bool,
    locked: bool,
    tickets: Vec<LockTicket>,
}

impl OrientationLockController {
    /// `lockable` is detected once and never changes
    pub fn new(lockable: bool) -> Self {
        Self {
            lockable,
            locked: false,
            tickets: Vec::new(),
        }
    }

    pub fn is_lockable(&self) -> bool {
        self.lockable
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn state(&self) -> LockState {
        if self.locked {
            LockState::Locked
        } else {
            LockState::Unlocked
        }
    }

    /// Lock commands whose outcome has not arrived yet
    pub fn pending_tickets(&self) -> usize {
        self.tickets.len()
    }

    /// User asked to lock or unlock
    pub fn request_lock<P, V>(&mut self, lock: bool, provider: &mut P, view: &mut V)
    where
        P: CapabilityProvider + ?Sized,
        V: CompassView + ?Sized,
    {
        if !self.lockable {
            tracing::debug!("Orientation lock not supported, ignoring request");
            return;
        }

        if lock {
            provider.request_fullscreen();
            self.set_locked(true, view);
        } else {
            provider.unlock_orientation();
            provider.exit_fullscreen();
            self.set_locked(false, view);
            self.drop_tickets();
        }
    }

    /// Fullscreen entered or left, or the screen rotated
    pub fn on_fullscreen_change<P, V>(&mut self, provider: &mut P, view: &mut V)
    where
        P: CapabilityProvider + ?Sized,
        V: CompassView + ?Sized,
    {
        self.discard_settled();

        if !self.lockable {
            return;
        }

        if !provider.is_fullscreen() {
            self.request_lock(false, provider, view);
            return;
        }

        if !self.locked {
            return;
        }

        match classify(&provider.orientation()).known() {
            Some(orientation) => {
                tracing::debug!("Locking orientation to {}", orientation);
                let ticket = provider.lock_orientation(orientation);
                self.tickets.push(ticket);
            }
            None => tracing::debug!("Orientation unknown, lock command skipped"),
        }
    }

    /// Drop every ticket that has settled. Returns how many were dropped.
    pub fn discard_settled(&mut self) -> usize {
        let before = self.tickets.len();
        self.tickets.retain(|ticket| match ticket.try_outcome() {
            None => true,
            Some(Ok(())) => {
                tracing::debug!("Orientation lock accepted");
                false
            }
            Some(Err(rejected)) => {
                tracing::debug!("Orientation lock rejected, ignored: {}", rejected);
                false
            }
        });
        before - self.tickets.len()
    }

    /// Forget every outstanding ticket; the platform may still answer into
    /// a closed channel.
    fn drop_tickets(&mut self) {
        self.discard_settled();
        if !self.tickets.is_empty() {
            tracing::debug!("Dropping {} unanswered lock request(s)", self.tickets.len());
            self.tickets.clear();
        }
    }

    fn set_locked<V: CompassView + ?Sized>(&mut self, locked: bool, view: &mut V) {
        if self.locked != locked {
            tracing::info!("Orientation {}", if locked { "locked" } else { "unlocked" });
        }
        self.locked = locked;
        view.set_lock_active(locked);
    }
}
