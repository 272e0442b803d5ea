use crate::{AppState, Effect, FeedState, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Activated => {
            // One fetch per activation; a repeated activation signal is ignored.
            if state.is_active() {
                Vec::new()
            } else {
                let request_id = state.activate();
                vec![Effect::FetchProducts { request_id }]
            }
        }
        Msg::Deactivated => {
            state.deactivate();
            Vec::new()
        }
        Msg::RetryClicked => {
            let can_retry =
                state.is_active() && matches!(state.feed(), FeedState::Error { .. });
            if can_retry {
                let request_id = state.begin_fetch();
                vec![Effect::FetchProducts { request_id }]
            } else {
                Vec::new()
            }
        }
        Msg::FeedLoaded {
            request_id,
            products,
        } => {
            // Within one activation requests are not de-duplicated: last arrival wins.
            state.apply_loaded(request_id, products);
            Vec::new()
        }
        Msg::FeedFailed { request_id, cause } => {
            state.apply_failed(request_id, cause);
            Vec::new()
        }
        Msg::AddToCartClicked { product_id } => {
            if !state.is_active() {
                return (state, Vec::new());
            }
            match state.product(product_id) {
                Some(product) => vec![Effect::AddToCartRequested {
                    product_id,
                    name: product.name.clone(),
                }],
                None => Vec::new(),
            }
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
