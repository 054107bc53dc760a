use tempfile::TempDir;

use solace::{CoreError, Session, Store, DEFAULT_REPLY, JOURNALING_REPLY};

fn open_store(dir: &TempDir) -> Store {
    Store::open(dir.path().join("solace.sqlite3")).expect("open store")
}

#[tokio::test]
async fn sign_up_login_and_record_mood_flow() {
    let dir = TempDir::new().expect("tempdir");
    let store = open_store(&dir);

    let mut session = Session::new(store.clone());
    let alice = session
        .sign_up("alice", "Alice A")
        .await
        .expect("sign up alice");
    assert_eq!(alice.username, "alice");
    assert_eq!(session.current_user(), Some(&alice));

    // A second window trying the same username gets a recoverable outcome.
    let mut other = Session::new(store.clone());
    let err = other
        .sign_up("alice", "Someone Else")
        .await
        .expect_err("username taken");
    assert!(matches!(err, CoreError::DuplicateUsername));
    assert!(other.current_user().is_none());

    let mut fresh = Session::new(store);
    let logged_in = fresh.login("alice").await.expect("login alice");
    assert_eq!(logged_in.name, "Alice A");

    fresh
        .record_mood(4, Some("ok".into()))
        .await
        .expect("record mood");
    let history = fresh.mood_history(Some(30)).await.expect("mood history");
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].level, 4);
}

#[tokio::test]
async fn login_with_unknown_username_fails() {
    let dir = TempDir::new().expect("tempdir");
    let mut session = Session::new(open_store(&dir));

    let err = session.login("nobody").await.expect_err("unknown user");
    assert!(matches!(err, CoreError::UserNotFound));
    assert!(session.current_user().is_none());
}

#[tokio::test]
async fn operations_require_an_active_session() {
    let dir = TempDir::new().expect("tempdir");
    let mut session = Session::new(open_store(&dir));

    let err = session.record_mood(3, None).await.expect_err("logged out");
    assert!(matches!(err, CoreError::NoActiveSession));
    let err = session
        .save_journal("t", "c")
        .await
        .expect_err("logged out");
    assert!(matches!(err, CoreError::NoActiveSession));
    let err = session.mood_history(None).await.expect_err("logged out");
    assert!(matches!(err, CoreError::NoActiveSession));
    let err = session.recent_journals(None).await.expect_err("logged out");
    assert!(matches!(err, CoreError::NoActiveSession));
    let err = session.send_chat("hello").expect_err("logged out");
    assert!(matches!(err, CoreError::NoActiveSession));

    // Signing out returns the session to the same gated state.
    session.sign_up("alice", "Alice A").await.expect("sign up");
    session.send_chat("hello").expect("chat while logged in");
    session.sign_out();
    let err = session.send_chat("hello").expect_err("signed out");
    assert!(matches!(err, CoreError::NoActiveSession));
}

#[tokio::test]
async fn chat_forwards_to_the_responder() {
    let dir = TempDir::new().expect("tempdir");
    let mut session = Session::new(open_store(&dir));
    session.sign_up("alice", "Alice A").await.expect("sign up");

    assert_eq!(
        session.send_chat("feeling pretty sad tonight").expect("chat"),
        JOURNALING_REPLY
    );
    assert_eq!(session.send_chat("just saying hi").expect("chat"), DEFAULT_REPLY);
}

#[tokio::test]
async fn save_journal_uses_the_bound_user() {
    let dir = TempDir::new().expect("tempdir");
    let store = open_store(&dir);

    let mut alice = Session::new(store.clone());
    alice.sign_up("alice", "Alice A").await.expect("sign up");
    let mut bob = Session::new(store);
    bob.sign_up("bob", "Bob B").await.expect("sign up");

    alice
        .save_journal("morning", "slept well")
        .await
        .expect("alice journal");

    let alices = alice.recent_journals(None).await.expect("alice journals");
    assert_eq!(alices.len(), 1);
    assert_eq!(alices[0].title, "morning");
    let bobs = bob.recent_journals(None).await.expect("bob journals");
    assert!(bobs.is_empty());
}
