//! Session and trigger scheduling tests.

use core::time::Duration;

use parcheesi::{
    Color, GameState, PawnId, PawnStatus, RollError, ScriptedDice, Session, SessionError,
    SessionOptions, Trigger,
};

const CPU: Duration = Duration::from_millis(1000);
const SKIP: Duration = Duration::from_millis(1500);

fn session(faces: &[u8]) -> Session<ScriptedDice> {
    let mut session = Session::with_dice(SessionOptions::default(), ScriptedDice::new(faces));
    session.join("Ada").unwrap();
    session
}

#[test]
fn actions_need_join() {
    let mut session = Session::with_dice(SessionOptions::default(), ScriptedDice::new([3, 2]));

    assert_eq!(session.roll().unwrap_err(), SessionError::NotJoined);
    assert_eq!(session.skip().unwrap_err(), SessionError::NotJoined);
    assert_eq!(session.next_deadline(), None);
    assert!(session.advance(Duration::from_secs(60)).is_empty());
}

#[test]
fn join_needs_a_name() {
    let mut session = Session::with_dice(SessionOptions::default(), ScriptedDice::new([3, 2]));

    assert_eq!(session.join("").unwrap_err(), SessionError::EmptyName);
    assert!(!session.is_joined());
    assert!(!session.state().players[0].has_paid);
    assert_eq!(session.roll().unwrap_err(), SessionError::NotJoined);
}

#[test]
fn join_marks_player_paid() {
    let session = session(&[3, 2]);
    let human = &session.state().players[0];

    assert!(session.is_joined());
    assert_eq!(human.name, "Ada");
    assert!(human.has_paid);
    assert!(session.state().players[1..].iter().all(|p| !p.has_paid));
    // Red moves first, so nothing is scheduled yet.
    assert_eq!(session.next_deadline(), None);
}

#[test]
fn human_turn_end_to_end() {
    let mut session = session(&[3, 2]);
    session.roll().unwrap();
    assert_eq!(session.state().dice.sum(), 5);
    assert_eq!(
        session.roll().unwrap_err(),
        SessionError::Roll(RollError::AlreadyRolled)
    );

    let red = PawnId::new(Color::Red, 0);
    session.click_pawn(red).unwrap();

    let state = session.state();
    assert!(matches!(
        state.pawn(red).map(|p| p.status),
        Some(PawnStatus::OnTrack { position: 4 })
    ));
    assert_eq!(state.current_turn, 1);
    assert_eq!(session.pending(Trigger::CpuTurn), Some(CPU));
    assert_eq!(session.pending(Trigger::AutoSkip), None);
}

#[test]
fn click_needs_a_roll() {
    let mut session = session(&[3, 2]);
    assert_eq!(
        session.click_pawn(PawnId::new(Color::Red, 0)).unwrap_err(),
        SessionError::NotRolled
    );
    assert_eq!(session.skip().unwrap_err(), SessionError::NotRolled);
}

#[test]
fn clicking_foreign_pawn_is_ignored() {
    let mut session = session(&[3, 2]);
    session.roll().unwrap();
    let before = session.state().clone();

    session.click_pawn(PawnId::new(Color::Blue, 0)).unwrap();
    assert_eq!(session.state(), &before);
}

#[test]
fn auto_skip_fires_after_delay() {
    let mut session = session(&[1, 1]);
    session.roll().unwrap();

    assert!(!session.state().has_valid_moves());
    assert_eq!(session.pending(Trigger::AutoSkip), Some(SKIP));

    assert!(session.advance(SKIP - Duration::from_millis(1)).is_empty());
    assert_eq!(session.state().current_turn, 0);

    assert_eq!(
        session.advance(Duration::from_millis(1)),
        vec![Trigger::AutoSkip]
    );
    assert_eq!(session.state().current_turn, 1);
    assert_eq!(session.pending(Trigger::AutoSkip), None);
    assert_eq!(session.pending(Trigger::CpuTurn), Some(SKIP + CPU));
}

#[test]
fn auto_skip_waits_when_a_move_exists() {
    let mut session = session(&[3, 2]);
    session.roll().unwrap();

    assert_eq!(session.pending(Trigger::AutoSkip), None);
    assert!(session.advance(Duration::from_secs(10)).is_empty());
    assert_eq!(session.state().current_turn, 0);
}

#[test]
fn auto_skip_can_be_disabled() {
    let options = SessionOptions::default().with_auto_skip(false);
    let mut session = Session::with_dice(options, ScriptedDice::new([1, 1]));
    session.join("Ada").unwrap();
    session.roll().unwrap();

    assert_eq!(session.pending(Trigger::AutoSkip), None);
    session.skip().unwrap();
    assert_eq!(session.state().current_turn, 1);
}

#[test]
fn manual_skip_cancels_auto_skip() {
    let mut session = session(&[1, 1]);
    session.roll().unwrap();
    session.advance(Duration::from_millis(500));

    session.skip().unwrap();
    assert_eq!(session.pending(Trigger::AutoSkip), None);
    assert_eq!(
        session.pending(Trigger::CpuTurn),
        Some(Duration::from_millis(500) + CPU)
    );

    let fired = session.advance(SKIP);
    assert_eq!(fired, vec![Trigger::CpuTurn]);
    assert_eq!(session.state().current_turn, 2);
}

#[test]
fn cpu_turns_chain_back_to_human() {
    let mut session = session(&[1, 1]);
    session.roll().unwrap();
    session.skip().unwrap();

    let fired = session.advance(Duration::from_secs(60));
    assert_eq!(fired, vec![Trigger::CpuTurn; 3]);
    assert_eq!(session.state().current_turn, 0);
    assert!(session.state().can_roll);
    assert_eq!(session.next_deadline(), None);
    assert_eq!(session.now(), Duration::from_secs(60));
    assert_eq!(
        session.state().logs.last().unwrap(),
        "CPU yellow skipped turn"
    );
}

#[test]
fn humans_cannot_act_on_cpu_turns() {
    let mut session = session(&[1, 1]);
    session.roll().unwrap();
    session.skip().unwrap();

    assert_eq!(session.roll().unwrap_err(), SessionError::NotYourTurn);
    assert_eq!(
        session.click_pawn(PawnId::new(Color::Blue, 0)).unwrap_err(),
        SessionError::NotYourTurn
    );
}

#[test]
fn at_most_one_pending_timer_per_trigger() {
    let mut session = session(&[1, 1]);
    session.roll().unwrap();
    session.skip().unwrap();
    let due = session.pending(Trigger::CpuTurn);

    // Selection does not touch anything the timers depend on.
    session.select_pawn(Some(PawnId::new(Color::Red, 0)));
    assert_eq!(session.pending(Trigger::CpuTurn), due);
    assert_eq!(
        session.state().selected_pawn_id,
        Some(PawnId::new(Color::Red, 0))
    );

    assert_eq!(session.advance(CPU), vec![Trigger::CpuTurn]);
    assert_eq!(session.pending(Trigger::CpuTurn), Some(CPU + CPU));
}

#[test]
fn stalled_cpu_turn_is_skipped() {
    let mut state = GameState::new();
    state.current_turn = Color::Blue.index();
    state.players[Color::Blue.index()].pawns[0].status = PawnStatus::OnTrack { position: 42 };

    let mut session = Session::with_dice(SessionOptions::default(), ScriptedDice::new([6, 6]))
        .with_state(state);
    session.join("Ada").unwrap();

    assert_eq!(session.advance(CPU), vec![Trigger::CpuTurn]);
    let state = session.state();
    assert_eq!(state.current_turn, Color::Green.index());
    assert!(state.can_roll);
    assert_eq!(
        state.players[Color::Blue.index()].pawns[0].status,
        PawnStatus::OnTrack { position: 42 }
    );
}

#[test]
fn stalled_cpu_turn_waits_when_configured() {
    let mut state = GameState::new();
    state.current_turn = Color::Blue.index();
    state.players[Color::Blue.index()].pawns[0].status = PawnStatus::OnTrack { position: 42 };

    let options = SessionOptions::default().with_skip_stalled_cpu(false);
    let mut session = Session::with_dice(options, ScriptedDice::new([6, 6])).with_state(state);
    session.join("Ada").unwrap();

    let fired = session.advance(Duration::from_secs(60));
    assert_eq!(fired, vec![Trigger::CpuTurn; 2]);
    assert_eq!(session.state().current_turn, Color::Blue.index());
    assert!(!session.state().can_roll);
    assert_eq!(session.next_deadline(), None);
}

#[test]
fn finished_game_stops_everything() {
    let mut state = GameState::new();
    state.winner = Some(Color::Green);
    state.current_turn = Color::Blue.index();

    let mut session = Session::with_dice(SessionOptions::default(), ScriptedDice::new([3, 2]))
        .with_state(state);
    assert_eq!(session.join("Ada").unwrap_err(), SessionError::GameOver);
    assert_eq!(session.roll().unwrap_err(), SessionError::NotJoined);
    assert_eq!(session.next_deadline(), None);
}

#[test]
fn seeded_sessions_are_reproducible() {
    let play = |seed| {
        let mut session = Session::new(SessionOptions::default(), seed);
        session.join("Ada").unwrap();
        for _ in 0..20 {
            if session.roll().is_ok() {
                let movable = session.state().movable_pawns();
                match movable.first() {
                    Some(&id) => session.click_pawn(id).unwrap(),
                    None => session.skip().unwrap(),
                }
            }
            session.advance(Duration::from_secs(5));
        }
        session.state().clone()
    };

    assert_eq!(play(9), play(9));
}
