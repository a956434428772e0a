//! The match boundary: join flow, serialized move intake, session
//! activity, and observer broadcast.

use std::sync::Arc;

use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use vetrata::controller::{MoveKind, MoveRejection, PlayerMove};
use vetrata::core::GameConfig;
use vetrata::host::{MatchEvent, MatchHost, MatchLobby, ViewObserver};
use vetrata::scoring::{ObjectiveId, Ranker};
use vetrata::toolcards::ToolCardRegistry;
use vetrata::PlayerId;

struct NullRanker;

impl Ranker for NullRanker {
    fn rank(&self, _: &[PlayerId], _: &[ObjectiveId]) -> FxHashMap<PlayerId, i32> {
        FxHashMap::default()
    }
}

/// Collects event labels in delivery order.
struct Recorder {
    log: Arc<Mutex<Vec<String>>>,
}

impl ViewObserver for Recorder {
    fn notify(&mut self, event: &MatchEvent) {
        let label = match event {
            MatchEvent::MoveApplied { player, .. } => format!("move:{}", player.0),
            MatchEvent::MatchEnded { .. } => "ended".to_string(),
            MatchEvent::MatchAborted => "aborted".to_string(),
        };
        self.log.lock().push(label);
    }
}

fn started_host(config: GameConfig) -> MatchHost {
    let config = config
        .with_toolcard_count(ToolCardRegistry::builtin().len())
        .with_objective_count(0);
    let mut lobby = MatchLobby::new(config);
    lobby.join("ada").unwrap();
    lobby.join("grace").unwrap();
    lobby
        .start(42, ToolCardRegistry::builtin(), Box::new(NullRanker), vec![])
        .unwrap()
}

fn current_player(host: &MatchHost) -> PlayerId {
    host.with_controller(|c| c.current_player())
}

#[test]
fn off_turn_moves_are_rejected_without_mutation() {
    let host = started_host(GameConfig::new());
    let acting = current_player(&host);
    let waiting = PlayerId::new(1 - acting.0);

    let reply = host.submit(waiting, PlayerMove::DraftFromPool { die_index: 0 });
    assert_eq!(reply.result, Err(MoveRejection::NotYourTurn));
    assert!(reply.permitted.is_empty());

    // Nothing changed for the acting player.
    assert_eq!(current_player(&host), acting);
    assert_eq!(host.with_controller(|c| c.history().len()), 0);
    assert_eq!(host.with_controller(|c| c.game().round().pool().len()), 5);
}

#[test]
fn replies_carry_the_recomputed_permitted_set() {
    let host = started_host(GameConfig::new());
    let acting = current_player(&host);

    let reply = host.submit(acting, PlayerMove::DraftFromPool { die_index: 0 });
    assert!(reply.result.is_ok());
    assert!(reply.permitted.contains(&MoveKind::Place));
    assert!(reply.permitted.contains(&MoveKind::UseToolCard));
    assert!(reply.permitted.contains(&MoveKind::EndTurn));
    assert!(!reply.permitted.contains(&MoveKind::Draft));
}

#[test]
fn inactive_sessions_are_suppressed_without_blocking_the_match() {
    let host = started_host(GameConfig::new());
    let acting = current_player(&host);

    host.set_session_active(acting, false);
    let reply = host.submit(acting, PlayerMove::EndTurn);
    assert_eq!(reply.result, Err(MoveRejection::SessionInactive));

    // Reconnecting restores the session; the match never moved on.
    host.set_session_active(acting, true);
    assert!(host.session_active(acting));
    let reply = host.submit(acting, PlayerMove::EndTurn);
    assert!(reply.result.is_ok());
}

#[test]
fn observers_see_events_in_match_order() {
    let host = started_host(GameConfig::new());
    let log_a = Arc::new(Mutex::new(Vec::new()));
    let log_b = Arc::new(Mutex::new(Vec::new()));
    host.add_observer(Box::new(Recorder { log: log_a.clone() }));
    host.add_observer(Box::new(Recorder { log: log_b.clone() }));

    let mut expected = Vec::new();
    for _ in 0..3 {
        let acting = current_player(&host);
        let reply = host.submit(acting, PlayerMove::EndTurn);
        assert!(reply.result.is_ok());
        expected.push(format!("move:{}", acting.0));
    }

    // Both observers saw the same ordered stream.
    assert_eq!(*log_a.lock(), expected);
    assert_eq!(*log_b.lock(), expected);
}

#[test]
fn game_end_is_broadcast_after_the_final_move() {
    let host = started_host(GameConfig::new().with_total_rounds(1));
    let log = Arc::new(Mutex::new(Vec::new()));
    host.add_observer(Box::new(Recorder { log: log.clone() }));

    for _ in 0..4 {
        let acting = current_player(&host);
        host.submit(acting, PlayerMove::EndTurn);
    }

    let events = log.lock();
    assert_eq!(events.len(), 5);
    assert_eq!(events.last().unwrap(), "ended");
}

#[test]
fn fatal_errors_abort_the_match_with_a_generic_notice() {
    // One die per color: the round-boundary draw cannot be covered, which
    // is a configuration defect, not gameplay.
    let host = started_host(GameConfig::new().with_dice_per_color(1));
    let log = Arc::new(Mutex::new(Vec::new()));
    host.add_observer(Box::new(Recorder { log: log.clone() }));

    for _ in 0..3 {
        let acting = current_player(&host);
        let reply = host.submit(acting, PlayerMove::EndTurn);
        assert!(reply.result.is_ok());
    }

    let acting = current_player(&host);
    let reply = host.submit(acting, PlayerMove::EndTurn);
    assert_eq!(reply.result, Err(MoveRejection::MatchAborted));
    assert!(reply.permitted.is_empty());
    assert!(host.is_aborted());
    assert_eq!(log.lock().last().unwrap(), "aborted");

    // The match stays cleanly dead.
    let reply = host.submit(acting, PlayerMove::EndTurn);
    assert_eq!(reply.result, Err(MoveRejection::MatchAborted));
}
