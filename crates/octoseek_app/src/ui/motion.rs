//! Interpolation timeline between the phases the core reports and the
//! frames the renderer draws.
//!
//! The choreography: a grown panel retracts to neutral before a new search
//! pulses, a settled search grows the panel back out, and rows fade in one
//! stagger step at a time.

use std::time::{Duration, Instant};

use octoseek_core::MotionPhase;

const RETRACT: Duration = Duration::from_millis(300);
const PULSE_LEG: Duration = Duration::from_millis(900);
const GROW: Duration = Duration::from_millis(600);
const ROW_STAGGER: Duration = Duration::from_millis(150);

/// Scale the results panel grows to once a search settles.
const SETTLED_SCALE_Y: f32 = 5.0;

/// One interpolated frame of widget motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionFrame {
    /// Vertical scale of the results panel, 1.0 (retracted) up to 5.0.
    pub scale_y: f32,
    /// Pulse level 0.0..=1.0 while a search is in flight, 0.0 otherwise.
    pub pulse: f32,
    /// Rows eligible to be drawn; grows one step per stagger interval.
    pub revealed_rows: usize,
}

impl MotionFrame {
    fn at_rest() -> Self {
        Self {
            scale_y: 1.0,
            pulse: 0.0,
            revealed_rows: 0,
        }
    }
}

enum Segment {
    Rest,
    Retract { from: f32, started: Instant },
    Pulse { started: Instant },
    Grow { from: f32, started: Instant },
    Settled { since: Instant },
}

pub struct MotionTimeline {
    phase: MotionPhase,
    segment: Segment,
    scale_y: f32,
}

impl MotionTimeline {
    pub fn new() -> Self {
        Self {
            phase: MotionPhase::Idle,
            segment: Segment::Rest,
            scale_y: 1.0,
        }
    }

    /// Retargets the timeline when the core's phase changes.
    pub fn observe(&mut self, phase: MotionPhase, now: Instant) {
        if phase == self.phase {
            return;
        }
        self.phase = phase;
        self.segment = match phase {
            // A grown panel always retracts to neutral first.
            MotionPhase::Pulsing | MotionPhase::Idle if self.scale_y > 1.0 => Segment::Retract {
                from: self.scale_y,
                started: now,
            },
            MotionPhase::Pulsing => Segment::Pulse { started: now },
            MotionPhase::Idle => Segment::Rest,
            MotionPhase::Settled => Segment::Grow {
                from: self.scale_y,
                started: now,
            },
        };
    }

    /// Produces the frame for `now`, stepping into follow-on segments as
    /// their predecessors finish.
    pub fn advance(&mut self, now: Instant) -> MotionFrame {
        let segment = std::mem::replace(&mut self.segment, Segment::Rest);
        let (segment, frame) = Self::step(segment, self.phase, now);
        self.segment = segment;
        self.scale_y = frame.scale_y;
        frame
    }

    fn step(segment: Segment, phase: MotionPhase, now: Instant) -> (Segment, MotionFrame) {
        match segment {
            Segment::Rest => (Segment::Rest, MotionFrame::at_rest()),
            Segment::Retract { from, started } => {
                let t = progress(started, now, RETRACT);
                if t >= 1.0 {
                    // Hand off to wherever the retract was headed.
                    let next = match phase {
                        MotionPhase::Pulsing => Segment::Pulse { started: now },
                        _ => Segment::Rest,
                    };
                    return Self::step(next, phase, now);
                }
                let scale_y = from + (1.0 - from) * ease_out_cubic(t);
                (
                    Segment::Retract { from, started },
                    MotionFrame {
                        scale_y,
                        pulse: 0.0,
                        revealed_rows: 0,
                    },
                )
            }
            Segment::Pulse { started } => {
                let legs = duration_ratio(started, now, PULSE_LEG);
                (
                    Segment::Pulse { started },
                    MotionFrame {
                        scale_y: 1.0,
                        pulse: pulse_level(legs),
                        revealed_rows: 0,
                    },
                )
            }
            Segment::Grow { from, started } => {
                let t = progress(started, now, GROW);
                if t >= 1.0 {
                    return Self::step(Segment::Settled { since: started }, phase, now);
                }
                let scale_y = from + (SETTLED_SCALE_Y - from) * ease_out_cubic(t);
                (
                    Segment::Grow { from, started },
                    MotionFrame {
                        scale_y,
                        pulse: 0.0,
                        revealed_rows: revealed(started, now),
                    },
                )
            }
            // The stagger clock keeps counting from the grow start.
            Segment::Settled { since } => (
                Segment::Settled { since },
                MotionFrame {
                    scale_y: SETTLED_SCALE_Y,
                    pulse: 0.0,
                    revealed_rows: revealed(since, now),
                },
            ),
        }
    }
}

impl Default for MotionTimeline {
    fn default() -> Self {
        Self::new()
    }
}

fn progress(started: Instant, now: Instant, duration: Duration) -> f32 {
    duration_ratio(started, now, duration).min(1.0)
}

fn duration_ratio(started: Instant, now: Instant, duration: Duration) -> f32 {
    now.duration_since(started).as_secs_f32() / duration.as_secs_f32()
}

fn revealed(since: Instant, now: Instant) -> usize {
    (now.duration_since(since).as_millis() / ROW_STAGGER.as_millis()) as usize + 1
}

fn ease_out_cubic(t: f32) -> f32 {
    let inverted = 1.0 - t;
    1.0 - inverted * inverted * inverted
}

fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

/// Pulse intensity for an unclamped leg count: eases up on even legs and
/// back down on odd ones, so the glow yo-yos instead of snapping.
fn pulse_level(legs: f32) -> f32 {
    let leg_index = legs as u32;
    let within = legs - leg_index as f32;
    let eased = smoothstep(within);
    if leg_index % 2 == 0 {
        eased
    } else {
        1.0 - eased
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-4,
            "expected {expected}, got {actual}"
        );
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn rests_at_neutral_while_idle() {
        let t0 = Instant::now();
        let mut timeline = MotionTimeline::new();
        timeline.observe(MotionPhase::Idle, t0);

        let frame = timeline.advance(t0 + ms(1000));
        assert_eq!(
            frame,
            MotionFrame {
                scale_y: 1.0,
                pulse: 0.0,
                revealed_rows: 0
            }
        );
    }

    #[test]
    fn pulse_yoyos_between_legs() {
        let t0 = Instant::now();
        let mut timeline = MotionTimeline::new();
        timeline.observe(MotionPhase::Pulsing, t0);

        assert_close(timeline.advance(t0).pulse, 0.0);
        assert_close(timeline.advance(t0 + ms(450)).pulse, 0.5);
        assert_close(timeline.advance(t0 + ms(900)).pulse, 1.0);
        assert_close(timeline.advance(t0 + ms(1350)).pulse, 0.5);
        assert_close(timeline.advance(t0 + ms(1800)).pulse, 0.0);
    }

    #[test]
    fn settling_grows_the_panel_and_staggers_rows() {
        let t0 = Instant::now();
        let mut timeline = MotionTimeline::new();
        timeline.observe(MotionPhase::Settled, t0);

        let frame = timeline.advance(t0);
        assert_close(frame.scale_y, 1.0);
        assert_eq!(frame.revealed_rows, 1);

        // Halfway through the grow: eased well past the midpoint.
        let frame = timeline.advance(t0 + ms(300));
        assert_close(frame.scale_y, 4.5);
        assert_eq!(frame.revealed_rows, 3);

        let frame = timeline.advance(t0 + ms(600));
        assert_close(frame.scale_y, 5.0);
        assert_eq!(frame.revealed_rows, 5);

        // The stagger clock keeps running after the grow finishes.
        let frame = timeline.advance(t0 + ms(900));
        assert_close(frame.scale_y, 5.0);
        assert_eq!(frame.revealed_rows, 7);
    }

    #[test]
    fn retract_precedes_the_pulse_after_results() {
        let t0 = Instant::now();
        let mut timeline = MotionTimeline::new();
        timeline.observe(MotionPhase::Settled, t0);
        timeline.advance(t0 + ms(600));

        let t1 = t0 + ms(1000);
        timeline.observe(MotionPhase::Pulsing, t1);

        // Halfway through the retract: no pulse yet.
        let frame = timeline.advance(t1 + ms(150));
        assert_close(frame.scale_y, 1.5);
        assert_close(frame.pulse, 0.0);

        // Retract done, pulse starts from zero.
        let frame = timeline.advance(t1 + ms(300));
        assert_close(frame.scale_y, 1.0);
        assert_close(frame.pulse, 0.0);

        let frame = timeline.advance(t1 + ms(750));
        assert_close(frame.pulse, 0.5);
    }

    #[test]
    fn clearing_retracts_back_to_rest() {
        let t0 = Instant::now();
        let mut timeline = MotionTimeline::new();
        timeline.observe(MotionPhase::Settled, t0);
        timeline.advance(t0 + ms(600));

        let t1 = t0 + ms(1000);
        timeline.observe(MotionPhase::Idle, t1);

        assert_close(timeline.advance(t1 + ms(150)).scale_y, 1.5);

        let frame = timeline.advance(t1 + ms(300));
        assert_eq!(
            frame,
            MotionFrame {
                scale_y: 1.0,
                pulse: 0.0,
                revealed_rows: 0
            }
        );
    }
}
