use std::cell::RefCell;
use std::rc::Rc;

use luckydraw_shared::DrawSession;
use yew::prelude::*;

use crate::browser::{browser_fingerprint, LocalParticipationStore};
use crate::config::draw_config;

/// Shared handle on the visitor's draw session.
///
/// The session lives in a `RefCell` so async continuations (the landing
/// timer, the form submission) always see the latest state. Call `refresh`
/// after mutating it to re-render.
#[derive(Clone)]
pub struct DrawHandle {
    pub session: Rc<RefCell<DrawSession>>,
    rerender: UseForceUpdateHandle,
}

impl DrawHandle {
    pub fn refresh(&self) {
        self.rerender.force_update();
    }
}

#[hook]
pub fn use_draw_session() -> DrawHandle {
    let session = use_mut_ref(|| {
        let fingerprint = browser_fingerprint();
        let store = LocalParticipationStore::open();
        DrawSession::restore(draw_config(), fingerprint.clone(), &store).unwrap_or_else(|e| {
            log::error!("{}, falling back to the built-in settings", e);
            DrawSession::restore_default(fingerprint, &store)
        })
    });
    let rerender = use_force_update();

    DrawHandle { session, rerender }
}
