use std::sync::Arc;

use crate::corpus::CorpusStore;
use crate::engine::PlagiarismChecker;
use crate::remote::RemoteSearch;
use crate::session::UserDirectory;

pub struct HandlerState<S, R>
where
    S: CorpusStore + 'static,
    R: RemoteSearch + 'static,
{
    pub checker: Arc<PlagiarismChecker<S, R>>,

    pub users: Arc<UserDirectory>,
}

impl<S, R> Clone for HandlerState<S, R>
where
    S: CorpusStore + 'static,
    R: RemoteSearch + 'static,
{
    fn clone(&self) -> Self {
        Self {
            checker: Arc::clone(&self.checker),
            users: Arc::clone(&self.users),
        }
    }
}

impl<S, R> HandlerState<S, R>
where
    S: CorpusStore + 'static,
    R: RemoteSearch + 'static,
{
    pub fn new(checker: Arc<PlagiarismChecker<S, R>>, users: Arc<UserDirectory>) -> Self {
        Self { checker, users }
    }
}
