use std::sync::Arc;

use crate::fetch::ContentFetcher;
use crate::judge::Judge;
use crate::store::Store;
use crate::validation::Validator;

/// Shared handler state: the orchestrator plus direct store access for the
/// read-only endpoints.
pub struct AppState<J: Judge + 'static, F: ContentFetcher + 'static> {
    pub validator: Arc<Validator<J, F>>,
}

impl<J: Judge, F: ContentFetcher> AppState<J, F> {
    pub fn new(validator: Arc<Validator<J, F>>) -> Self {
        Self { validator }
    }

    pub fn store(&self) -> &Arc<Store> {
        self.validator.store()
    }
}

impl<J: Judge, F: ContentFetcher> Clone for AppState<J, F> {
    fn clone(&self) -> Self {
        Self {
            validator: Arc::clone(&self.validator),
        }
    }
}
