//! Test Doubles
//!
//! In-memory user store and recording collaborators for unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures::channel::oneshot;

use crate::api::UserApi;
use crate::confirm::{Confirm, ConfirmPrompt};
use crate::error::ApiError;
use crate::models::{User, UserId, UserInput};
use crate::notify::{Notice, Notify};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    List,
    Create,
    Update,
    Delete,
}

/// A request the fake store received
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    List,
    Create(UserInput),
    Update(UserId, UserInput),
    Delete(UserId),
}

impl ApiCall {
    fn op(&self) -> Op {
        match self {
            ApiCall::List => Op::List,
            ApiCall::Create(_) => Op::Create,
            ApiCall::Update(..) => Op::Update,
            ApiCall::Delete(_) => Op::Delete,
        }
    }
}

#[derive(Default)]
struct FakeState {
    users: Vec<User>,
    next_id: u64,
    calls: Vec<ApiCall>,
    failures: VecDeque<(Op, ApiError)>,
    list_gates: VecDeque<oneshot::Receiver<()>>,
}

/// In-memory store enforcing unique emails like the real service
#[derive(Default)]
pub struct FakeUserApi {
    state: Mutex<FakeState>,
}

impl FakeUserApi {
    pub fn with_users(users: Vec<User>) -> Self {
        let next_id = users
            .iter()
            .filter_map(|u| match u.id {
                UserId::Number(n) => Some(n),
                UserId::Text(_) => None,
            })
            .max()
            .unwrap_or(0)
            + 1;
        Self {
            state: Mutex::new(FakeState { users, next_id, ..FakeState::default() }),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FakeState> {
        self.state.lock().unwrap()
    }

    /// Make the next request of this kind fail
    pub fn fail_next(&self, op: Op, err: ApiError) {
        self.lock().failures.push_back((op, err));
    }

    /// Hold the next list response until the returned sender fires. The
    /// response carries the users as they were when the request arrived.
    pub fn gate_next_list(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.lock().list_gates.push_back(rx);
        tx
    }

    /// Change the server-side data behind the client's back
    pub fn set_users(&self, users: Vec<User>) {
        self.lock().users = users;
    }

    pub fn users(&self) -> Vec<User> {
        self.lock().users.clone()
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.lock().calls.clone()
    }

    pub fn count(&self, op: Op) -> usize {
        self.lock().calls.iter().filter(|c| c.op() == op).count()
    }

    fn record(&self, call: ApiCall) -> Result<(), ApiError> {
        let mut state = self.lock();
        let op = call.op();
        state.calls.push(call);
        if let Some(pos) = state.failures.iter().position(|(o, _)| *o == op) {
            if let Some((_, err)) = state.failures.remove(pos) {
                return Err(err);
            }
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl UserApi for FakeUserApi {
    async fn list(&self) -> Result<Vec<User>, ApiError> {
        self.record(ApiCall::List)?;
        let (users, gate) = {
            let mut state = self.lock();
            let gate = state.list_gates.pop_front();
            (state.users.clone(), gate)
        };
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        Ok(users)
    }

    async fn create(&self, input: &UserInput) -> Result<(), ApiError> {
        self.record(ApiCall::Create(input.clone()))?;
        let mut state = self.lock();
        if state.users.iter().any(|u| u.email == input.email) {
            return Err(ApiError::Conflict);
        }
        let id = UserId::Number(state.next_id);
        state.next_id += 1;
        state.users.push(User {
            id,
            name: input.name.clone(),
            age: input.age,
            email: input.email.clone(),
        });
        Ok(())
    }

    async fn update(&self, id: &UserId, input: &UserInput) -> Result<(), ApiError> {
        self.record(ApiCall::Update(id.clone(), input.clone()))?;
        let mut state = self.lock();
        if state.users.iter().any(|u| &u.id != id && u.email == input.email) {
            return Err(ApiError::Conflict);
        }
        let user = state
            .users
            .iter_mut()
            .find(|u| &u.id == id)
            .ok_or(ApiError::Status(404))?;
        user.name = input.name.clone();
        user.age = input.age;
        user.email = input.email.clone();
        Ok(())
    }

    async fn delete(&self, id: &UserId) -> Result<(), ApiError> {
        self.record(ApiCall::Delete(id.clone()))?;
        let mut state = self.lock();
        let before = state.users.len();
        state.users.retain(|u| &u.id != id);
        if state.users.len() == before {
            return Err(ApiError::Status(404));
        }
        Ok(())
    }
}

/// Keeps every notice it is given
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<Notice> {
        self.notices.lock().unwrap().last().cloned()
    }
}

impl Notify for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

/// Answers every prompt the same way and remembers what it was asked
pub struct ScriptedConfirmer {
    answer: bool,
    asked: Mutex<Vec<ConfirmPrompt>>,
}

impl ScriptedConfirmer {
    pub fn affirm() -> Self {
        Self { answer: true, asked: Mutex::new(Vec::new()) }
    }

    pub fn decline() -> Self {
        Self { answer: false, asked: Mutex::new(Vec::new()) }
    }

    pub fn asked(&self) -> Vec<ConfirmPrompt> {
        self.asked.lock().unwrap().clone()
    }
}

#[async_trait(?Send)]
impl Confirm for ScriptedConfirmer {
    async fn confirm(&self, prompt: &ConfirmPrompt) -> bool {
        self.asked.lock().unwrap().push(prompt.clone());
        self.answer
    }
}
