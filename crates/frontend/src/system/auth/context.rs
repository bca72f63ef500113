use leptos::prelude::*;
use std::time::Duration;

use super::session::{now_ms, Session};
use super::{api, storage};
use crate::config::AppConfig;

/// Restores the stored session and provides it as `RwSignal<Option<Session>>`.
/// The session is dropped again once its expiry passes.
#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    let restored = storage::load_session().filter(|session| {
        let valid = !session.is_expired_at(now_ms());
        if !valid {
            log::info!("Stored session expired, login required");
            storage::clear_session();
        }
        valid
    });
    let session = RwSignal::new(restored);

    Effect::new(move |_| {
        if let Some(current) = session.get() {
            let delay = current.remaining_ms(now_ms()).min(i32::MAX as i64) as u64;
            set_timeout(
                move || {
                    let still_current =
                        session.with_untracked(|s| s.as_ref() == Some(&current));
                    if still_current {
                        log::info!("Session expired");
                        do_logout(session);
                    }
                },
                Duration::from_millis(delay),
            );
        }
    });

    provide_context(session);

    children()
}

pub fn use_session() -> RwSignal<Option<Session>> {
    use_context::<RwSignal<Option<Session>>>().expect("SessionProvider not found in component tree")
}

pub async fn do_login(
    session: RwSignal<Option<Session>>,
    config: &AppConfig,
    email: String,
    password: String,
) -> Result<(), String> {
    let response = api::login(config, email, password).await?;
    let new_session = Session::from_login(&response, now_ms());

    storage::save_session(&new_session);
    log::info!("Logged in, session valid for {}s", response.ttl_secs());
    session.set(Some(new_session));

    Ok(())
}

pub fn do_logout(session: RwSignal<Option<Session>>) {
    storage::clear_session();
    session.set(None);
}
