// tests/party_state_tests.rs
//
// Владелец партии (PartyState): полный раунд от старта до записи в историю.
//
// 1) start_round валидирует ввод и запоминает недавних игроков;
// 2) обсуждение только после показа всех карточек;
// 3) finish_round пишет историю и сбрасывает активный раунд;
// 4) ошибка хранилища не теряет раунд;
// 5) свои слова обрезаются, самозванцев не больше счётчика экрана.

use std::io;

use chrono::{TimeZone, Utc};

use impostor_engine::api::{ApiError, CategoryChoice, Command, Query, QueryResponse, StartGameCommand};
use impostor_engine::infra::{DeterministicRng, InMemoryKeyValueStore, KeyValueStore, StorageError};
use impostor_engine::storage::{keys, SettingsPatch};
use impostor_engine::time_ctrl::TimerEvent;
use impostor_engine::PartyState;

// -----------------------------
// ВСПОМОГАТЕЛЬНОЕ
// -----------------------------

fn party() -> PartyState<InMemoryKeyValueStore, DeterministicRng> {
    PartyState::new(InMemoryKeyValueStore::new(), DeterministicRng::from_seed(31))
}

fn cmd(names: &[&str]) -> StartGameCommand {
    StartGameCommand {
        player_names: names.iter().map(|s| s.to_string()).collect(),
        category: CategoryChoice::BuiltIn("professions".into()),
        impostor_count: 1,
    }
}

/// Хранилище, в которое нельзя писать историю.
#[derive(Default)]
struct HistoryReadOnly {
    inner: InMemoryKeyValueStore,
}

impl KeyValueStore for HistoryReadOnly {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get_item(key)
    }

    fn set_item(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        if key == keys::GAME_HISTORY {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only").into());
        }
        self.inner.set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.inner.remove_item(key)
    }
}

//
// TEST 1 - полный раунд
//
#[test]
fn full_round_is_recorded() {
    let mut party = party();
    party
        .storage
        .save_settings(&SettingsPatch {
            default_timer_duration: Some(90),
            ..SettingsPatch::default()
        })
        .unwrap();

    let state = party.start_round(&cmd(&[" Ana", "Bo ", "Cy", "Dee"])).unwrap();
    assert_eq!(state.player_count(), 4);
    let mut names = state.player_names();
    names.sort();
    assert_eq!(names, vec!["Ana", "Bo", "Cy", "Dee"], "names are trimmed");

    for _ in 0..4 {
        party.apply(&Command::FinishTurn).unwrap();
    }
    assert_eq!(
        party.query(Query::CurrentTurn).unwrap(),
        QueryResponse::CurrentTurn(None)
    );

    let timer = party.start_discussion().unwrap();
    assert_eq!(timer.duration_secs, 90);
    assert!(timer.running);

    assert_eq!(party.tick_discussion(60), Some(TimerEvent::Running { remaining: 30 }));
    party.pause_discussion();
    assert_eq!(party.tick_discussion(60), Some(TimerEvent::Idle));
    party.resume_discussion();
    assert_eq!(party.tick_discussion(60), Some(TimerEvent::Completed));

    let now = Utc.with_ymd_and_hms(2024, 6, 1, 21, 0, 0).unwrap();
    let session = party.finish_round(now).unwrap();
    assert_eq!(session.game_id, "impostor");
    assert_eq!(session.date, now);
    assert_eq!(session.duration, Some(90));
    assert!(session.id.starts_with(&now.timestamp_millis().to_string()));

    assert!(party.active_game().is_none());
    assert!(party.discussion().is_none());
    assert_eq!(party.storage.history(), vec![session]);

    let mut recent = party.storage.recent_players();
    recent.sort();
    assert_eq!(recent, vec!["Ana", "Bo", "Cy", "Dee"]);
}

//
// TEST 2 - обсуждение до конца показа запрещено
//
#[test]
fn discussion_requires_all_revealed() {
    let mut party = party();
    assert_eq!(party.start_discussion().unwrap_err(), ApiError::NoActiveGame);

    party.start_round(&cmd(&["Ana", "Bo", "Cy"])).unwrap();
    party.apply(&Command::FinishTurn).unwrap();

    assert_eq!(party.start_discussion().unwrap_err(), ApiError::RevealNotFinished);
    assert_eq!(party.tick_discussion(5), None);
}

//
// TEST 3 - ошибки ввода до движка
//
#[test]
fn invalid_input_is_rejected() {
    let mut party = party();

    assert!(matches!(
        party.start_round(&cmd(&["Ana", "ANA", "Cy"])),
        Err(ApiError::InvalidInput(_))
    ));

    let mut custom = cmd(&["Ana", "Bo", "Cy"]);
    custom.category = CategoryChoice::Custom(vec!["one".into(), "two".into()]);
    assert!(matches!(party.start_round(&custom), Err(ApiError::InvalidInput(_))));

    assert!(party.active_game().is_none());
    assert!(party.storage.recent_players().is_empty());
}

//
// TEST 4 - команды без раунда
//
#[test]
fn commands_without_round() {
    let mut party = party();
    assert_eq!(party.apply(&Command::FinishTurn).unwrap_err(), ApiError::NoActiveGame);
    assert_eq!(party.query(Query::Progress).unwrap_err(), ApiError::NoActiveGame);
    assert_eq!(party.finish_round(Utc::now()).unwrap_err(), ApiError::NoActiveGame);
}

//
// TEST 5 - StartGame через apply идёт тем же путём, что и start_round
//
#[test]
fn apply_start_game_validates_too() {
    let mut party = party();
    let err = party
        .apply(&Command::StartGame(cmd(&["Ana", "Bo"])))
        .unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput(_)));

    party.apply(&Command::StartGame(cmd(&["Ana", "Bo", "Cy"]))).unwrap();
    assert!(party.active_game().is_some());
}

//
// TEST 6 - история не записалась: раунд остаётся активным
//
#[test]
fn failed_history_write_keeps_round() {
    let mut party = PartyState::new(HistoryReadOnly::default(), DeterministicRng::from_seed(4));
    party.start_round(&cmd(&["Ana", "Bo", "Cy"])).unwrap();

    let err = party.finish_round(Utc::now()).unwrap_err();
    assert!(matches!(err, ApiError::Storage(_)));
    assert!(party.active_game().is_some());

    // Недавние игроки при этом записались.
    assert_eq!(party.storage.recent_players().len(), 3);
}

//
// TEST 7 - свои слова обрезаются, пустые не попадают в раунд
//
#[test]
fn custom_words_are_cleaned_before_dealing() {
    let words: Vec<String> = ["   ", " Pizza ", "Burger", "Sushi", "Tacos", "Pasta"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let cleaned: Vec<String> = ["Pizza", "Burger", "Sushi", "Tacos", "Pasta"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    for seed in 0..200 {
        let mut party = PartyState::new(InMemoryKeyValueStore::new(), DeterministicRng::from_seed(seed));
        let mut custom = cmd(&["Ana", "Bo", "Cy"]);
        custom.category = CategoryChoice::Custom(words.clone());

        let state = party.start_round(&custom).unwrap();
        assert!(!state.secret_word.is_empty(), "seed {}", seed);
        assert_eq!(state.secret_word, state.secret_word.trim(), "seed {}", seed);
        assert_eq!(state.custom_words.as_ref(), Some(&cleaned));
    }
}

//
// TEST 8 - самозванцев больше, чем разрешает экран настройки
//
#[test]
fn too_many_impostors_is_rejected() {
    let mut party = party();

    let mut four = cmd(&["Ana", "Bo", "Cy", "Dee"]);
    four.impostor_count = 3;
    assert!(matches!(party.start_round(&four), Err(ApiError::InvalidInput(_))));
    assert!(party.active_game().is_none());

    let mut eight = cmd(&["A", "B", "C", "D", "E", "F", "G", "H"]);
    eight.impostor_count = 3;
    assert_eq!(party.start_round(&eight).unwrap().impostor_count, 3);
}

//
// TEST 9 - обсуждение нулевой длины сразу заканчивается
//
#[test]
fn zero_length_discussion_completes() {
    let mut party = party();
    party
        .storage
        .save_settings(&SettingsPatch {
            default_timer_duration: Some(0),
            ..SettingsPatch::default()
        })
        .unwrap();

    party.start_round(&cmd(&["Ana", "Bo", "Cy"])).unwrap();
    for _ in 0..3 {
        party.apply(&Command::FinishTurn).unwrap();
    }

    assert!(party.start_discussion().unwrap().running);
    assert_eq!(party.tick_discussion(1), Some(TimerEvent::Completed));
    assert_eq!(party.tick_discussion(1), Some(TimerEvent::Idle));
}
