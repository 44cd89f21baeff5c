use std::cell::RefCell;
use std::fmt;

use log::{debug, error, info, warn};
use rand::Rng;

use crate::config::DrawConfig;
use crate::constants::{CONFIRM_READY_LABEL, EXCLUDE_COUNT, WHEEL_PRIZE_COUNT};
use crate::error::DrawError;
use crate::fingerprint::Fingerprint;
use crate::prize::{Prize, PrizeId};
use crate::spin::{pick_landing_index, SpinPhase, TriggerOutcome, WheelControl, WheelPrize};
use crate::submission::{ParticipationStore, PrizeRecorder, SubmissionPayload};

/// Screen the visitor is currently on. The flow only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    Password,
    Exclude,
    Wheel,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Password => "password",
            Self::Exclude => "exclude",
            Self::Wheel => "wheel",
        })
    }
}

/// What the visitor is told once a spin has been settled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Won { prize: String },
    SaveFailed { prize: String, error: DrawError },
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Self::Won { prize } => {
                format!("Congratulations, you won: {}! Your entry has been recorded.", prize)
            }
            Self::SaveFailed { error, .. } => error.to_string(),
        }
    }
}

/// Per-page-load state of one visitor's draw.
///
/// Only the fingerprint and the participation flag come from outside; every
/// other field starts fresh on each load.
#[derive(Debug, Clone)]
pub struct DrawSession {
    config: DrawConfig,
    step: Step,
    access_input: String,
    excluded: Vec<PrizeId>,
    final_prizes: Vec<Prize>,
    is_submitting: bool,
    has_participated: bool,
    fingerprint: Fingerprint,
    phase: SpinPhase,
}

impl DrawSession {
    /// Start a session on `config`. The config is checked first so the wheel
    /// always ends up with exactly `WHEEL_PRIZE_COUNT` slots.
    pub fn new(config: DrawConfig, fingerprint: Fingerprint, has_participated: bool) -> Result<Self, DrawError> {
        config.validate()?;
        Ok(Self::from_parts(config, fingerprint, has_participated))
    }

    /// Start a session, reading the participation flag from `store`.
    /// An unreadable store is treated as "not yet participated".
    pub fn restore(
        config: DrawConfig,
        fingerprint: Fingerprint,
        store: &dyn ParticipationStore,
    ) -> Result<Self, DrawError> {
        config.validate()?;
        let has_participated = read_participation(&fingerprint, store);
        Ok(Self::from_parts(config, fingerprint, has_participated))
    }

    /// Like `restore`, on the built-in settings
    pub fn restore_default(fingerprint: Fingerprint, store: &dyn ParticipationStore) -> Self {
        let has_participated = read_participation(&fingerprint, store);
        Self::from_parts(DrawConfig::default(), fingerprint, has_participated)
    }

    fn from_parts(config: DrawConfig, fingerprint: Fingerprint, has_participated: bool) -> Self {
        Self {
            config,
            step: Step::Password,
            access_input: String::new(),
            excluded: Vec::with_capacity(EXCLUDE_COUNT),
            final_prizes: Vec::new(),
            is_submitting: false,
            has_participated,
            fingerprint,
            phase: SpinPhase::Idle,
        }
    }

    pub fn config(&self) -> &DrawConfig {
        &self.config
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn access_input(&self) -> &str {
        &self.access_input
    }

    pub fn excluded_ids(&self) -> &[PrizeId] {
        &self.excluded
    }

    pub fn final_prizes(&self) -> &[Prize] {
        &self.final_prizes
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn has_participated(&self) -> bool {
        self.has_participated
    }

    pub fn fingerprint(&self) -> &Fingerprint {
        &self.fingerprint
    }

    pub fn phase(&self) -> &SpinPhase {
        &self.phase
    }

    fn expect_step(&self, expected: Step) -> Result<(), DrawError> {
        if self.step != expected {
            return Err(DrawError::WrongStep {
                expected,
                actual: self.step,
            });
        }
        Ok(())
    }

    // === Gatekeeper ===

    pub fn set_access_input(&mut self, input: impl Into<String>) {
        if self.step == Step::Password {
            self.access_input = input.into();
        }
    }

    /// Compare the entered code against the configured one. A mismatch keeps
    /// the visitor on the password screen with their input intact.
    pub fn verify_access(&mut self) -> Result<(), DrawError> {
        self.expect_step(Step::Password)?;
        if self.access_input != self.config.access_code {
            warn!("Rejected invitation code attempt");
            return Err(DrawError::WrongAccessCode);
        }
        self.step = Step::Exclude;
        debug!("Access granted, moving to {}", self.step);
        Ok(())
    }

    // === Prize exclusion ===

    pub fn remaining_exclusions(&self) -> usize {
        EXCLUDE_COUNT.saturating_sub(self.excluded.len())
    }

    pub fn can_confirm(&self) -> bool {
        self.excluded.len() == EXCLUDE_COUNT
    }

    pub fn confirm_label(&self) -> String {
        if self.can_confirm() {
            CONFIRM_READY_LABEL.to_string()
        } else {
            format!("{} more to go", self.remaining_exclusions())
        }
    }

    /// Flip a prize in or out of the exclusion set. Returns whether the prize
    /// is excluded afterwards.
    pub fn toggle_exclusion(&mut self, id: PrizeId) -> Result<bool, DrawError> {
        self.expect_step(Step::Exclude)?;
        if self.config.prize(id).is_none() {
            return Err(DrawError::UnknownPrize(id));
        }

        if let Some(pos) = self.excluded.iter().position(|&e| e == id) {
            self.excluded.remove(pos);
            return Ok(false);
        }
        if self.excluded.len() >= EXCLUDE_COUNT {
            return Err(DrawError::ExclusionLimit { limit: EXCLUDE_COUNT });
        }
        self.excluded.push(id);
        Ok(true)
    }

    /// Lock in the exclusions and build the wheel from what is left,
    /// keeping catalog order.
    pub fn confirm_exclusions(&mut self) -> Result<&[Prize], DrawError> {
        self.expect_step(Step::Exclude)?;
        if !self.can_confirm() {
            return Err(DrawError::ExclusionIncomplete {
                remaining: self.remaining_exclusions(),
            });
        }

        self.final_prizes = self
            .config
            .catalog
            .iter()
            .filter(|p| !self.excluded.contains(&p.id))
            .cloned()
            .collect();
        self.step = Step::Wheel;
        debug!("Excluded {:?}, wheel has {} prizes", self.excluded, self.final_prizes.len());
        Ok(&self.final_prizes)
    }

    // === Wheel ===

    /// Handle the wheel's GO button.
    ///
    /// Refuses outright once the visitor has taken part. Presses while a
    /// result is being saved, or while the wheel is still turning, are
    /// dropped without telling anyone.
    pub fn trigger_spin(&mut self, wheel: &mut dyn WheelControl) -> Result<TriggerOutcome, DrawError> {
        self.expect_step(Step::Wheel)?;
        if self.has_participated {
            return Err(DrawError::AlreadyParticipated);
        }
        if self.is_submitting || self.phase.is_in_motion() {
            debug!("Ignoring spin trigger while {:?}", self.phase);
            return Ok(TriggerOutcome::Ignored);
        }

        wheel.play();
        self.phase = SpinPhase::Spinning;
        debug!("Wheel spinning");
        Ok(TriggerOutcome::Started)
    }

    /// Called once the spin-up delay has elapsed: pick the landing slot and
    /// hand it to the wheel.
    pub fn request_landing<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        wheel: &mut dyn WheelControl,
    ) -> Result<usize, DrawError> {
        if self.phase != SpinPhase::Spinning {
            return Err(DrawError::NotSpinning);
        }

        let index = pick_landing_index(rng, WHEEL_PRIZE_COUNT);
        wheel.stop(index);
        self.phase = SpinPhase::LandingRequested(index);
        debug!("Landing requested on slot {}", index);
        Ok(index)
    }

    /// The wheel has come to rest. The label it reports is what gets saved.
    pub fn begin_submission(
        &mut self,
        landed: &WheelPrize,
        time: impl Into<String>,
    ) -> Result<SubmissionPayload, DrawError> {
        if self.has_participated {
            return Err(DrawError::AlreadyParticipated);
        }
        let requested = match self.phase {
            SpinPhase::LandingRequested(index) => index,
            _ => return Err(DrawError::NotSpinning),
        };
        if landed.index != requested {
            error!(
                "{}",
                DrawError::WheelMismatch {
                    requested,
                    landed: landed.index,
                }
            );
        }

        self.is_submitting = true;
        self.phase = SpinPhase::Submitting {
            prize: landed.label.clone(),
        };
        Ok(SubmissionPayload::new(landed.label.clone(), &self.fingerprint, time))
    }

    /// Settle a submission. The participation flag is only written when the
    /// recorder confirmed the result.
    pub fn finish_submission(
        &mut self,
        outcome: Result<(), DrawError>,
        store: &mut dyn ParticipationStore,
    ) -> Notice {
        self.is_submitting = false;
        let prize = match &self.phase {
            SpinPhase::Submitting { prize } => prize.clone(),
            other => {
                warn!("Settling a submission from unexpected phase {:?}", other);
                String::new()
            }
        };

        match outcome {
            Ok(()) => {
                if let Err(e) = store.mark_participated(&self.fingerprint) {
                    error!("Could not persist participation flag: {}", e);
                }
                self.has_participated = true;
                self.phase = SpinPhase::Announced {
                    prize: prize.clone(),
                    recorded: true,
                };
                info!("Recorded {} for {}", prize, self.fingerprint);
                Notice::Won { prize }
            }
            Err(e) => {
                warn!("Failed to record {}: {:?}", prize, e);
                self.phase = SpinPhase::Announced {
                    prize: prize.clone(),
                    recorded: false,
                };
                Notice::SaveFailed {
                    prize,
                    error: if matches!(e, DrawError::SubmissionFailed(_)) {
                        e
                    } else {
                        DrawError::SubmissionFailed(e.to_string())
                    },
                }
            }
        }
    }
}

fn read_participation(fingerprint: &Fingerprint, store: &dyn ParticipationStore) -> bool {
    let has_participated = store.has_participated(fingerprint).unwrap_or_else(|e| {
        error!("Could not read participation flag: {}", e);
        false
    });
    if has_participated {
        info!("Visitor {} has already taken part", fingerprint);
    }
    has_participated
}

/// Save a landed result through `recorder`.
///
/// The session is only borrowed around the two synchronous halves, so the
/// page can keep reading it while the request is in flight.
pub async fn submit_result<R: PrizeRecorder + ?Sized>(
    session: &RefCell<DrawSession>,
    recorder: &R,
    store: &mut dyn ParticipationStore,
    landed: &WheelPrize,
    time: String,
) -> Result<Notice, DrawError> {
    let payload = session.borrow_mut().begin_submission(landed, time)?;
    let outcome = recorder.record(&payload).await;
    Ok(session.borrow_mut().finish_submission(outcome, store))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::MemoryStore;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::Cell;

    /// Wheel double that records every command it receives
    #[derive(Default)]
    struct ScriptedWheel {
        plays: usize,
        stops: Vec<usize>,
    }

    impl WheelControl for ScriptedWheel {
        fn play(&mut self) {
            self.plays += 1;
        }

        fn stop(&mut self, landing_index: usize) {
            self.stops.push(landing_index);
        }
    }

    impl ScriptedWheel {
        /// What the widget reports after landing on its last commanded slot
        fn land(&self, session: &DrawSession) -> WheelPrize {
            let index = *self.stops.last().unwrap();
            WheelPrize {
                index,
                label: session.final_prizes()[index].name.clone(),
            }
        }
    }

    struct ScriptedRecorder {
        fail: bool,
        calls: Cell<usize>,
    }

    impl ScriptedRecorder {
        fn new(fail: bool) -> Self {
            Self { fail, calls: Cell::new(0) }
        }
    }

    #[async_trait(?Send)]
    impl PrizeRecorder for ScriptedRecorder {
        async fn record(&self, _payload: &SubmissionPayload) -> Result<(), DrawError> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                Err(DrawError::SubmissionFailed("connection reset".to_string()))
            } else {
                Ok(())
            }
        }
    }

    fn fp() -> Fingerprint {
        Fingerprint::from("TW96aWxsYS81")
    }

    fn session_on_wheel(has_participated: bool) -> DrawSession {
        let mut session = DrawSession::new(DrawConfig::default(), fp(), has_participated).unwrap();
        session.set_access_input("666");
        session.verify_access().unwrap();
        session.toggle_exclusion(1).unwrap();
        session.toggle_exclusion(2).unwrap();
        session.confirm_exclusions().unwrap();
        session
    }

    #[test]
    fn test_correct_code_opens_exclusion_screen() {
        let mut session = DrawSession::new(DrawConfig::default(), fp(), false).unwrap();
        session.set_access_input("666");
        assert_eq!(session.verify_access(), Ok(()));
        assert_eq!(session.step(), Step::Exclude);
    }

    #[test]
    fn test_wrong_codes_keep_password_screen() {
        let mut session = DrawSession::new(DrawConfig::default(), fp(), false).unwrap();
        for attempt in ["000", "", "6666", " 666", "66"] {
            session.set_access_input(attempt);
            assert_eq!(session.verify_access(), Err(DrawError::WrongAccessCode));
            assert_eq!(session.step(), Step::Password);
            assert_eq!(session.access_input(), attempt);
        }
    }

    #[test]
    fn test_configured_code_replaces_default() {
        let config = DrawConfig::default().with_access_code("lucky");
        let mut session = DrawSession::new(config, fp(), false).unwrap();
        session.set_access_input("666");
        assert!(session.verify_access().is_err());
        session.set_access_input("lucky");
        assert!(session.verify_access().is_ok());
    }

    #[test]
    fn test_exclusion_set_never_exceeds_two() {
        let mut session = DrawSession::new(DrawConfig::default(), fp(), false).unwrap();
        session.set_access_input("666");
        session.verify_access().unwrap();

        // Mix of adds, removes and rejected thirds
        let toggles = [3, 5, 7, 3, 7, 8, 1, 8, 5, 2, 4, 6, 6];
        for id in toggles {
            let before = session.excluded_ids().to_vec();
            match session.toggle_exclusion(id) {
                Ok(_) => {}
                Err(e) => {
                    assert_eq!(e, DrawError::ExclusionLimit { limit: 2 });
                    assert_eq!(session.excluded_ids(), before.as_slice());
                }
            }
            assert!(session.excluded_ids().len() <= 2);
        }
    }

    #[test]
    fn test_toggle_removes_unconditionally() {
        let mut session = DrawSession::new(DrawConfig::default(), fp(), false).unwrap();
        session.set_access_input("666");
        session.verify_access().unwrap();

        assert_eq!(session.toggle_exclusion(4), Ok(true));
        assert_eq!(session.toggle_exclusion(6), Ok(true));
        assert_eq!(session.toggle_exclusion(4), Ok(false));
        assert_eq!(session.excluded_ids(), &[6]);
        assert_eq!(session.toggle_exclusion(42), Err(DrawError::UnknownPrize(42)));
    }

    #[test]
    fn test_confirm_requires_exactly_two() {
        let mut session = DrawSession::new(DrawConfig::default(), fp(), false).unwrap();
        session.set_access_input("666");
        session.verify_access().unwrap();
        assert_eq!(session.confirm_label(), "2 more to go");
        assert_eq!(
            session.confirm_exclusions().map(|p| p.len()),
            Err(DrawError::ExclusionIncomplete { remaining: 2 })
        );

        session.toggle_exclusion(5).unwrap();
        assert_eq!(session.confirm_label(), "1 more to go");
        assert!(session.confirm_exclusions().is_err());
        assert_eq!(session.step(), Step::Exclude);

        session.toggle_exclusion(8).unwrap();
        assert_eq!(session.confirm_label(), "Build my wheel");
        let ids: Vec<PrizeId> = session.confirm_exclusions().unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 6, 7]);
        assert_eq!(session.step(), Step::Wheel);
    }

    #[test]
    fn test_excluding_first_two_leaves_rest_in_order() {
        let session = session_on_wheel(false);
        let ids: Vec<PrizeId> = session.final_prizes().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_steps_only_move_forward() {
        let mut session = session_on_wheel(false);
        assert!(matches!(session.verify_access(), Err(DrawError::WrongStep { .. })));
        assert!(matches!(session.toggle_exclusion(3), Err(DrawError::WrongStep { .. })));

        let mut fresh = DrawSession::new(DrawConfig::default(), fp(), false).unwrap();
        let mut wheel = ScriptedWheel::default();
        assert_eq!(
            fresh.trigger_spin(&mut wheel),
            Err(DrawError::WrongStep {
                expected: Step::Wheel,
                actual: Step::Password
            })
        );
        assert_eq!(wheel.plays, 0);
    }

    #[test]
    fn test_spin_lifecycle_records_result() {
        let session = RefCell::new(session_on_wheel(false));
        let mut wheel = ScriptedWheel::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut store = MemoryStore::new();

        let outcome = session.borrow_mut().trigger_spin(&mut wheel);
        assert_eq!(outcome, Ok(TriggerOutcome::Started));
        assert_eq!(session.borrow().phase(), &SpinPhase::Spinning);

        let index = session.borrow_mut().request_landing(&mut rng, &mut wheel).unwrap();
        assert!(index < 6);
        assert_eq!(wheel.stops, vec![index]);

        let landed = wheel.land(&session.borrow());
        let recorder = ScriptedRecorder::new(false);
        let notice = block_on(submit_result(
            &session,
            &recorder,
            &mut store,
            &landed,
            "2026/10/16 10:00:00".to_string(),
        ))
        .unwrap();

        assert_eq!(notice, Notice::Won { prize: landed.label.clone() });
        assert!(notice.message().contains(&landed.label));
        assert_eq!(store.get("draw_v2_TW96aWxsYS81"), Some("true"));

        let session = session.borrow();
        assert!(session.has_participated());
        assert!(!session.is_submitting());
        assert_eq!(
            session.phase(),
            &SpinPhase::Announced {
                prize: landed.label,
                recorded: true
            }
        );
    }

    #[test]
    fn test_failed_submission_leaves_flag_unset() {
        let session = RefCell::new(session_on_wheel(false));
        let mut wheel = ScriptedWheel::default();
        let mut rng = StdRng::seed_from_u64(2);
        let mut store = MemoryStore::new();

        session.borrow_mut().trigger_spin(&mut wheel).unwrap();
        session.borrow_mut().request_landing(&mut rng, &mut wheel).unwrap();
        let landed = wheel.land(&session.borrow());

        let recorder = ScriptedRecorder::new(true);
        let notice = block_on(submit_result(&session, &recorder, &mut store, &landed, String::new())).unwrap();

        assert!(matches!(notice, Notice::SaveFailed { .. }));
        assert_eq!(
            notice.message(),
            "Saving failed, please keep a screenshot of this result as proof."
        );
        assert_eq!(store.get("draw_v2_TW96aWxsYS81"), None);
        assert!(!session.borrow().has_participated());
        assert!(!session.borrow().is_submitting());

        // Nothing stops another attempt in the same page load
        assert_eq!(session.borrow_mut().trigger_spin(&mut wheel), Ok(TriggerOutcome::Started));
        assert_eq!(wheel.plays, 2);
    }

    #[test]
    fn test_participated_visitor_cannot_spin() {
        let session = RefCell::new(session_on_wheel(true));
        let mut wheel = ScriptedWheel::default();
        let recorder = ScriptedRecorder::new(false);
        let mut store = MemoryStore::new();

        for _ in 0..3 {
            assert_eq!(
                session.borrow_mut().trigger_spin(&mut wheel),
                Err(DrawError::AlreadyParticipated)
            );
        }
        assert_eq!(wheel.plays, 0);
        assert_eq!(session.borrow().phase(), &SpinPhase::Idle);

        // A stray end-of-spin report must not reach the network either
        let landed = WheelPrize { index: 0, label: "Prize 3".into() };
        let settled = block_on(submit_result(&session, &recorder, &mut store, &landed, String::new()));
        assert_eq!(settled, Err(DrawError::AlreadyParticipated));
        assert_eq!(recorder.calls.get(), 0);
        assert!(!session.borrow().is_submitting());
    }

    #[test]
    fn test_restore_reads_flag_from_store() {
        let mut store = MemoryStore::new();
        store.insert("draw_v2_TW96aWxsYS81", "yes");
        let session = DrawSession::restore(DrawConfig::default(), fp(), &store).unwrap();
        assert!(session.has_participated());

        let other = DrawSession::restore_default(Fingerprint::from("T3BlcmEvOS44"), &store);
        assert!(!other.has_participated());
        assert!(DrawSession::restore_default(fp(), &store).has_participated());
    }

    #[test]
    fn test_presses_during_spin_or_save_are_ignored() {
        let mut session = session_on_wheel(false);
        let mut wheel = ScriptedWheel::default();
        let mut rng = StdRng::seed_from_u64(3);

        session.trigger_spin(&mut wheel).unwrap();
        assert_eq!(session.trigger_spin(&mut wheel), Ok(TriggerOutcome::Ignored));

        session.request_landing(&mut rng, &mut wheel).unwrap();
        assert_eq!(session.trigger_spin(&mut wheel), Ok(TriggerOutcome::Ignored));

        let landed = wheel.land(&session);
        session.begin_submission(&landed, "now").unwrap();
        assert!(session.is_submitting());
        assert_eq!(session.trigger_spin(&mut wheel), Ok(TriggerOutcome::Ignored));
        assert_eq!(wheel.plays, 1);
        assert_eq!(wheel.stops.len(), 1);
    }

    #[test]
    fn test_landing_needs_a_running_spin() {
        let mut session = session_on_wheel(false);
        let mut wheel = ScriptedWheel::default();
        let mut rng = StdRng::seed_from_u64(4);
        assert_eq!(session.request_landing(&mut rng, &mut wheel), Err(DrawError::NotSpinning));

        let landed = WheelPrize { index: 0, label: "Prize 3".into() };
        assert_eq!(session.begin_submission(&landed, "now"), Err(DrawError::NotSpinning));
        assert!(wheel.stops.is_empty());
    }

    #[test]
    fn test_widget_label_is_what_gets_submitted() {
        let mut session = session_on_wheel(false);
        let mut wheel = ScriptedWheel::default();
        let mut rng = StdRng::seed_from_u64(5);
        session.trigger_spin(&mut wheel).unwrap();
        let index = session.request_landing(&mut rng, &mut wheel).unwrap();

        let landed = WheelPrize {
            index: (index + 1) % 6,
            label: "Prize 8".into(),
        };
        let payload = session.begin_submission(&landed, "2026/10/16 10:00:00").unwrap();
        assert_eq!(payload.prize, "Prize 8");
        assert_eq!(payload.uid, "TW96aWxsYS81");
        assert_eq!(payload.time, "2026/10/16 10:00:00");
    }

    #[test]
    fn test_landing_indices_stay_on_wheel() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut seen = [false; 6];
        for _ in 0..200 {
            let mut session = session_on_wheel(false);
            let mut wheel = ScriptedWheel::default();
            session.trigger_spin(&mut wheel).unwrap();
            let index = session.request_landing(&mut rng, &mut wheel).unwrap();
            assert!(index <= 5);
            seen[index] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    fn numbered_catalog(count: u32) -> Vec<Prize> {
        (1..=count)
            .map(|id| Prize::new(id, format!("Gift {}", id), "#FFB3BA"))
            .collect()
    }

    #[test]
    fn test_catalog_must_leave_six_slots() {
        for count in [0, 2, 7, 10] {
            let config = DrawConfig::default().with_catalog(numbered_catalog(count));
            assert!(matches!(
                DrawSession::new(config.clone(), fp(), false),
                Err(DrawError::InvalidConfig(_))
            ));
            assert!(DrawSession::restore(config, fp(), &MemoryStore::new()).is_err());
        }
    }

    #[test]
    fn test_substituted_catalog_spins_six_slots() {
        let config = DrawConfig::default().with_catalog(numbered_catalog(8));
        let mut session = DrawSession::new(config, fp(), false).unwrap();
        session.set_access_input("666");
        session.verify_access().unwrap();
        session.toggle_exclusion(1).unwrap();
        session.toggle_exclusion(2).unwrap();
        assert_eq!(session.confirm_exclusions().unwrap().len(), 6);

        let mut rng = StdRng::seed_from_u64(8);
        let mut wheel = ScriptedWheel::default();
        for _ in 0..100 {
            session.trigger_spin(&mut wheel).unwrap();
            let index = session.request_landing(&mut rng, &mut wheel).unwrap();
            assert!(index < 6);
            // Reset to idle for the next spin
            session.phase = SpinPhase::Idle;
        }
    }
}
