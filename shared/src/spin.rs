use rand::Rng;

/// Control surface of the rendering wheel.
///
/// `play` starts an open-ended spin; `stop` commits the slot the wheel must
/// decelerate onto. The widget reports back through its own end-of-spin
/// notification carrying a [`WheelPrize`].
pub trait WheelControl {
    fn play(&mut self);
    fn stop(&mut self, landing_index: usize);
}

/// The slot the wheel came to rest on, as reported by the widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WheelPrize {
    pub index: usize,
    pub label: String,
}

/// Lifecycle of a single spin
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SpinPhase {
    #[default]
    Idle,
    Spinning,
    LandingRequested(usize),
    Submitting { prize: String },
    Announced { prize: String, recorded: bool },
}

impl SpinPhase {
    /// True while the wheel is still turning
    pub fn is_in_motion(&self) -> bool {
        matches!(self, Self::Spinning | Self::LandingRequested(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    Started,
    Ignored,
}

/// Uniform pick over the first `slots` wheel positions
pub fn pick_landing_index<R: Rng + ?Sized>(rng: &mut R, slots: usize) -> usize {
    rng.gen_range(0..slots)
}
