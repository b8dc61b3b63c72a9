//! Text panel describing the layer currently in focus.
//!
//! Panels never overlap: a change of layer first fades the old panel out,
//! then fades the new one in. If the target changes again mid-fade only the
//! newest target is kept, and a fade that reverses direction picks up from
//! the opacity already reached.

use crate::constants::{LAYER_COUNT, OVERLAY_FADE_SEC, OVERLAY_SLIDE_PX};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayerInfo {
    pub title: &'static str,
    pub description: &'static str,
}

pub const LAYER_INFO: [LayerInfo; LAYER_COUNT] = [
    LayerInfo {
        title: "Data Ingestion & Engineering",
        description: "Automatically ingests information from all your sources and provides a real-time, comprehensive view of cash flow.",
    },
    LayerInfo {
        title: "Operational Monitoring & AI",
        description: "Tracks every project detail, from progress to personnel, and uses AI to forecast risks and financial outcomes.",
    },
    LayerInfo {
        title: "Predictive Insights",
        description: "Uses AI to forecast risks and financial outcomes.",
    },
    LayerInfo {
        title: "Natural Language Interaction",
        description: "Ask questions and get instant answers in plain English.",
    },
];

/// What the panel should show this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayFrame {
    pub layer: Option<usize>,
    pub opacity: f32,
    /// Vertical slide in CSS pixels; positive is below the resting place.
    pub offset_px: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    Hidden,
    Entering { layer: usize, since: f64 },
    Shown { layer: usize },
    Exiting { layer: usize, since: f64, next: Option<usize> },
}

#[derive(Clone, Debug)]
pub struct OverlayTransition {
    phase: Phase,
    fade_sec: f64,
    slide_px: f32,
}

impl Default for OverlayTransition {
    fn default() -> Self {
        Self::new(OVERLAY_FADE_SEC, OVERLAY_SLIDE_PX)
    }
}

impl OverlayTransition {
    pub fn new(fade_sec: f64, slide_px: f32) -> Self {
        Self {
            phase: Phase::Hidden,
            fade_sec: fade_sec.max(0.0),
            slide_px,
        }
    }

    /// Layer whose panel is on screen (entering, shown or exiting).
    pub fn visible_layer(&self) -> Option<usize> {
        match self.phase {
            Phase::Hidden => None,
            Phase::Entering { layer, .. } | Phase::Shown { layer } | Phase::Exiting { layer, .. } => {
                Some(layer)
            }
        }
    }

    /// Layer waiting for the current exit to finish.
    pub fn queued_layer(&self) -> Option<usize> {
        match self.phase {
            Phase::Exiting { next, .. } => next,
            _ => None,
        }
    }

    pub fn is_settled(&self) -> bool {
        matches!(self.phase, Phase::Hidden | Phase::Shown { .. })
    }

    /// Advance towards `target` and report the panel state at `now_sec`.
    pub fn update(&mut self, target: Option<usize>, now_sec: f64) -> OverlayFrame {
        self.advance(target, now_sec);
        self.frame(now_sec)
    }

    fn fraction(&self, since: f64, now: f64) -> f32 {
        if self.fade_sec <= 0.0 {
            return 1.0;
        }
        ((now - since) / self.fade_sec).clamp(0.0, 1.0) as f32
    }

    fn advance(&mut self, target: Option<usize>, now: f64) {
        loop {
            match self.phase {
                Phase::Hidden => {
                    if let Some(layer) = target {
                        self.phase = Phase::Entering { layer, since: now };
                        continue;
                    }
                    return;
                }
                Phase::Entering { layer, since } => {
                    let shown = self.fraction(since, now);
                    if target != Some(layer) {
                        // Exit from the opacity reached so far
                        self.phase = Phase::Exiting {
                            layer,
                            since: now - (1.0 - shown as f64) * self.fade_sec,
                            next: target,
                        };
                        continue;
                    }
                    if shown >= 1.0 {
                        self.phase = Phase::Shown { layer };
                    }
                    return;
                }
                Phase::Shown { layer } => {
                    if target != Some(layer) {
                        self.phase = Phase::Exiting {
                            layer,
                            since: now,
                            next: target,
                        };
                        continue;
                    }
                    return;
                }
                Phase::Exiting { layer, since, .. } => {
                    let gone = self.fraction(since, now);
                    if target == Some(layer) {
                        self.phase = Phase::Entering {
                            layer,
                            since: now - (1.0 - gone as f64) * self.fade_sec,
                        };
                        continue;
                    }
                    if gone < 1.0 {
                        self.phase = Phase::Exiting {
                            layer,
                            since,
                            next: target,
                        };
                        return;
                    }
                    let done_at = (since + self.fade_sec).min(now);
                    self.phase = match target {
                        Some(next) => Phase::Entering {
                            layer: next,
                            since: done_at,
                        },
                        None => Phase::Hidden,
                    };
                }
            }
        }
    }

    fn frame(&self, now: f64) -> OverlayFrame {
        match self.phase {
            Phase::Hidden => OverlayFrame {
                layer: None,
                opacity: 0.0,
                offset_px: self.slide_px,
            },
            Phase::Entering { layer, since } => {
                let f = self.fraction(since, now);
                OverlayFrame {
                    layer: Some(layer),
                    opacity: f,
                    offset_px: self.slide_px * (1.0 - f),
                }
            }
            Phase::Shown { layer } => OverlayFrame {
                layer: Some(layer),
                opacity: 1.0,
                offset_px: 0.0,
            },
            Phase::Exiting { layer, since, .. } => {
                let f = self.fraction(since, now);
                OverlayFrame {
                    layer: Some(layer),
                    opacity: 1.0 - f,
                    offset_px: -self.slide_px * f,
                }
            }
        }
    }
}
