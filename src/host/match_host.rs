//! The per-match move intake boundary.
//!
//! All state-machine work is synchronous pure-CPU, but moves arrive from
//! independent per-player sessions; the host's mutex is the single
//! serialization point for a match. Turn validation alone is not enough,
//! since validation itself reads mutable shared state.
//!
//! Observer broadcast is fire-and-forget: observers are notified
//! sequentially after the lock-held mutation, so each observer sees
//! events in order even though no ordering holds across observers.

use parking_lot::Mutex;
use smallvec::SmallVec;
use tracing::{error, warn};

use crate::controller::{
    Controller, MoveFailure, MoveKind, MoveOutcome, MoveRejection, PlayerMove,
};
use crate::core::{PlayerId, PlayerMap};
use crate::scoring::MatchOutcome;

/// A state change pushed to observing view sessions.
#[derive(Clone, Debug)]
pub enum MatchEvent {
    /// An accepted move and what it did.
    MoveApplied {
        player: PlayerId,
        outcome: MoveOutcome,
    },

    /// The ranker produced final scores.
    MatchEnded { outcome: MatchOutcome },

    /// A fatal invariant violation aborted the match.
    MatchAborted,
}

/// An observing view session.
///
/// Notification is fire-and-forget; a slow or failing observer affects
/// nobody else.
pub trait ViewObserver: Send {
    /// Deliver one event. Events arrive in match order per observer.
    fn notify(&mut self, event: &MatchEvent);
}

/// The reply to a submitted move: the result, plus the operations now
/// permitted to that player's session.
#[derive(Clone, Debug)]
pub struct MoveReply {
    /// Acknowledgment or rejection reason.
    pub result: Result<MoveOutcome, MoveRejection>,

    /// The recomputed permitted-operation set.
    pub permitted: SmallVec<[MoveKind; 4]>,
}

struct MatchInner {
    controller: Controller,
    sessions: PlayerMap<bool>,
    observers: Vec<Box<dyn ViewObserver>>,
    aborted: bool,
}

impl MatchInner {
    fn broadcast(&mut self, event: &MatchEvent) {
        for observer in &mut self.observers {
            observer.notify(event);
        }
    }
}

/// One running match behind its serialization boundary.
pub struct MatchHost {
    inner: Mutex<MatchInner>,
}

impl std::fmt::Debug for MatchHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("MatchHost")
            .field("sessions", &inner.sessions)
            .field("aborted", &inner.aborted)
            .finish()
    }
}

impl MatchHost {
    /// Wrap a controller. All sessions start active.
    #[must_use]
    pub fn new(controller: Controller, player_count: usize) -> Self {
        Self {
            inner: Mutex::new(MatchInner {
                controller,
                sessions: PlayerMap::with_value(player_count, true),
                observers: Vec::new(),
                aborted: false,
            }),
        }
    }

    /// Submit a move on behalf of a player session.
    ///
    /// Rejections leave no trace; a fatal error aborts the match cleanly
    /// and is logged as a defect, with the caller seeing only a generic
    /// abort.
    pub fn submit(&self, player: PlayerId, mv: PlayerMove) -> MoveReply {
        let mut inner = self.inner.lock();

        if inner.aborted {
            return MoveReply {
                result: Err(MoveRejection::MatchAborted),
                permitted: SmallVec::new(),
            };
        }

        if !inner.sessions[player] {
            return MoveReply {
                result: Err(MoveRejection::SessionInactive),
                permitted: SmallVec::new(),
            };
        }

        let result = match inner.controller.handle_move(player, mv) {
            Ok(outcome) => {
                let event = MatchEvent::MoveApplied {
                    player,
                    outcome: outcome.clone(),
                };
                inner.broadcast(&event);
                if let MoveOutcome::GameEnded { outcome: final_outcome } = &outcome {
                    let event = MatchEvent::MatchEnded {
                        outcome: final_outcome.clone(),
                    };
                    inner.broadcast(&event);
                }
                Ok(outcome)
            }
            Err(MoveFailure::Rejected(rejection)) => Err(rejection),
            Err(MoveFailure::Fatal(defect)) => {
                error!(%defect, "invariant violation, aborting match");
                inner.aborted = true;
                inner.broadcast(&MatchEvent::MatchAborted);
                Err(MoveRejection::MatchAborted)
            }
        };

        let permitted = if inner.aborted {
            SmallVec::new()
        } else {
            inner.controller.permitted_moves(player)
        };

        MoveReply { result, permitted }
    }

    /// Mark a player's session active or inactive. An inactive session's
    /// moves are refused without reaching the controller; the rest of
    /// the match is unaffected.
    pub fn set_session_active(&self, player: PlayerId, active: bool) {
        let mut inner = self.inner.lock();
        if !active {
            warn!(%player, "session marked inactive");
        }
        inner.sessions[player] = active;
    }

    /// Whether a player's session is currently active.
    #[must_use]
    pub fn session_active(&self, player: PlayerId) -> bool {
        self.inner.lock().sessions[player]
    }

    /// Attach an observing view session.
    pub fn add_observer(&self, observer: Box<dyn ViewObserver>) {
        self.inner.lock().observers.push(observer);
    }

    /// Whether a fatal error ended this match.
    #[must_use]
    pub fn is_aborted(&self) -> bool {
        self.inner.lock().aborted
    }

    /// Read controller state under the lock (for views and tests).
    pub fn with_controller<R>(&self, f: impl FnOnce(&Controller) -> R) -> R {
        f(&self.inner.lock().controller)
    }
}
