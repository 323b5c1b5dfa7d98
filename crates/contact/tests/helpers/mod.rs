use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use folio_contact::{Ack, Error, FormPayload, FormsApi, VerificationToken, Widget};

#[derive(Default)]
pub struct CountingWidget {
    pub resets: u32,
}

impl Widget for CountingWidget {
    fn reset(&mut self) {
        self.resets += 1;
    }
}

#[allow(dead_code)]
#[derive(Clone)]
pub enum Reply {
    Ack,
    Provider(Option<&'static str>),
    Transport,
}

/// Forms service double replaying queued replies, acking once the queue is empty.
#[derive(Default)]
pub struct FakeApi {
    calls: AtomicUsize,
    replies: Mutex<Vec<Reply>>,
    pub sent: Mutex<Vec<(FormPayload, String)>>,
}

#[allow(dead_code)]
impl FakeApi {
    pub fn replying(replies: impl IntoIterator<Item = Reply>) -> Self {
        let mut replies = replies.into_iter().collect::<Vec<_>>();
        replies.reverse();

        Self {
            replies: Mutex::new(replies),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FormsApi for FakeApi {
    async fn submit(
        &self,
        payload: &FormPayload,
        token: Option<&VerificationToken>,
    ) -> folio_contact::Result<Ack> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.sent.lock().unwrap().push((
            payload.clone(),
            token.map(|t| t.as_str().to_owned()).unwrap_or_default(),
        ));

        let reply = self.replies.lock().unwrap().pop().unwrap_or(Reply::Ack);
        match reply {
            Reply::Ack => Ok(Ack::default()),
            Reply::Provider(message) => Err(Error::Provider(message.map(str::to_owned))),
            Reply::Transport => Err(Error::Transport("connection refused".to_owned())),
        }
    }
}

#[allow(dead_code)]
pub fn payload() -> FormPayload {
    FormPayload {
        name: "Jane Doe".to_owned(),
        email: "jane@example.com".to_owned(),
        subject: Some("Backend project".to_owned()),
        message: "I would like to talk about a Spring Boot migration.".to_owned(),
    }
}

#[allow(dead_code)]
pub fn token(value: &str) -> VerificationToken {
    VerificationToken::new(value).expect("non blank token")
}
