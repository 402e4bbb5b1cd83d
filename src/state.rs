use chrono::{DateTime, Utc};

use crate::api::{
    answer, execute, ApiError, CategoryChoice, Command, Query, QueryResponse, StartGameCommand,
};
use crate::domain::game::GameState;
use crate::engine::{
    self, validate_custom_words, validate_impostor_count, validate_player_names, RandomSource,
};
use crate::infra::ids::IdGenerator;
use crate::infra::mapping::session_from_game;
use crate::infra::persistence::KeyValueStore;
use crate::storage::{GameSession, PartyStorage};
use crate::time_ctrl::{DiscussionTimer, TimerEvent};

/// Владелец состояния партии на одном устройстве.
///
/// Движок ничего не хранит: здесь лежит последнее значение `GameState`,
/// которое подаётся в следующую операцию, плюс хранилище и таймер обсуждения.
///
/// Жизненный цикл раунда:
///   start_round -> (apply FinishTurn) x N -> start_discussion -> tick_discussion... -> finish_round
pub struct PartyState<S: KeyValueStore, R: RandomSource> {
    pub storage: PartyStorage<S>,
    rng: R,
    ids: IdGenerator,
    active: Option<GameState>,
    discussion: Option<DiscussionTimer>,
}

impl<S: KeyValueStore, R: RandomSource> PartyState<S, R> {
    pub fn new(kv: S, rng: R) -> Self {
        Self {
            storage: PartyStorage::new(kv),
            rng,
            ids: IdGenerator::new(),
            active: None,
            discussion: None,
        }
    }

    pub fn active_game(&self) -> Option<&GameState> {
        self.active.as_ref()
    }

    pub fn discussion(&self) -> Option<&DiscussionTimer> {
        self.discussion.as_ref()
    }

    /// Старт раунда с проверками экрана настройки (имена, число самозванцев, свои слова).
    /// В движок уходят уже обрезанные имена и слова.
    ///
    /// Имена запоминаются в недавних игроках; ошибка записи раунд не ломает.
    pub fn start_round(&mut self, cmd: &StartGameCommand) -> Result<&GameState, ApiError> {
        let player_names = validate_player_names(&cmd.player_names)?;
        validate_impostor_count(cmd.impostor_count, player_names.len())?;
        let category = match &cmd.category {
            CategoryChoice::Custom(words) => CategoryChoice::Custom(validate_custom_words(words)?),
            builtin => builtin.clone(),
        };

        let cmd = StartGameCommand {
            player_names,
            category,
            impostor_count: cmd.impostor_count,
        };
        let state = execute(None, &Command::StartGame(cmd), &mut self.rng)?;

        if let Err(err) = self.storage.add_recent_players(&state.player_names()) {
            log::warn!("Недавние игроки не сохранены: {}", err);
        }

        self.discussion = None;
        Ok(self.active.insert(state))
    }

    /// Команда хода над активным раундом.
    pub fn apply(&mut self, command: &Command) -> Result<&GameState, ApiError> {
        if let Command::StartGame(cmd) = command {
            return self.start_round(cmd);
        }

        let next = execute(self.active.as_ref(), command, &mut self.rng)?;
        Ok(self.active.insert(next))
    }

    pub fn query(&self, query: Query) -> Result<QueryResponse, ApiError> {
        let state = self.active.as_ref().ok_or(ApiError::NoActiveGame)?;
        Ok(answer(state, query))
    }

    /// Запустить обсуждение. Длительность берётся из настроек.
    pub fn start_discussion(&mut self) -> Result<&DiscussionTimer, ApiError> {
        let state = self.active.as_ref().ok_or(ApiError::NoActiveGame)?;
        if !engine::all_revealed(state) {
            return Err(ApiError::RevealNotFinished);
        }

        let mut timer = DiscussionTimer::new(self.storage.load_settings().default_timer_duration);
        timer.start();
        Ok(self.discussion.insert(timer))
    }

    pub fn pause_discussion(&mut self) {
        if let Some(timer) = self.discussion.as_mut() {
            timer.pause();
        }
    }

    pub fn resume_discussion(&mut self) {
        if let Some(timer) = self.discussion.as_mut() {
            timer.start();
        }
    }

    /// Прошло `delta_secs` секунд. `None`, если обсуждение не начато.
    pub fn tick_discussion(&mut self, delta_secs: u32) -> Option<TimerEvent> {
        let event = self.discussion.as_mut()?.tick(delta_secs);
        if event == TimerEvent::Completed {
            log::info!("Время обсуждения вышло");
        }
        Some(event)
    }

    /// Закончить раунд: записать его в историю и забыть состояние.
    pub fn finish_round(&mut self, now: DateTime<Utc>) -> Result<GameSession, ApiError> {
        let state = self.active.take().ok_or(ApiError::NoActiveGame)?;
        let state = engine::end_game(&state);

        let duration = self.storage.load_settings().default_timer_duration;
        let session = session_from_game(&state, self.ids.next_session_id(now), now, Some(duration));

        if let Err(err) = self.storage.add_session(session.clone()) {
            // Раунд остаётся активным, запись можно повторить.
            self.active = Some(state);
            return Err(err.into());
        }
        self.discussion = None;

        log::info!("Раунд {} записан в историю", session.id);
        Ok(session)
    }
}
