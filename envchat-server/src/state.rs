use crate::upstream::ModelClient;
use std::sync::Arc;

pub(crate) struct ServerState<C: ModelClient> {
    client: Arc<C>,
}

impl<C: ModelClient> ServerState<C> {
    pub(crate) fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    pub(crate) fn client(&self) -> Arc<C> {
        Arc::clone(&self.client)
    }
}
