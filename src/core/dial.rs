use crate::domain::model::{DialSettings, DialVariant, Turn};

/// Rotary dial state shared by both counting rules.
///
/// Under [`DialVariant::Landing`] `position` is a running, unreduced total.
/// Under [`DialVariant::Crossing`] it is reduced into `[0, size)` after every
/// rotation. Either way `reduced_position` is the dial face reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dial {
    position: i64,
    zero_count: u64,
    size: i64,
}

impl Dial {
    pub fn new() -> Self {
        Self::with_settings(DialSettings::default())
    }

    /// `settings` must satisfy `1 <= size <= MAX_DIAL_SIZE`; config validation enforces it.
    pub fn with_settings(settings: DialSettings) -> Self {
        Self {
            position: settings.start,
            zero_count: 0,
            size: settings.size,
        }
    }

    pub fn position(&self) -> i64 {
        self.position
    }

    pub fn reduced_position(&self) -> i64 {
        self.position.rem_euclid(self.size)
    }

    pub fn zero_count(&self) -> u64 {
        self.zero_count
    }

    pub fn rotate(&mut self, variant: DialVariant, turn: Turn) {
        match variant {
            DialVariant::Landing => rotate_landing(self, turn),
            DialVariant::Crossing => rotate_crossing(self, turn),
        }
        tracing::trace!(
            variant = ?variant,
            turn = %turn,
            position = self.position,
            zeros = self.zero_count,
            "rotated"
        );
    }

    pub fn run(&mut self, variant: DialVariant, turns: &[Turn]) -> u64 {
        for &turn in turns {
            self.rotate(variant, turn);
        }
        self.zero_count
    }
}

impl Default for Dial {
    fn default() -> Self {
        Self::new()
    }
}

fn rotate_landing(dial: &mut Dial, turn: Turn) {
    // A zero turn never moves the dial, so it cannot land anywhere new.
    if turn.is_zero() {
        return;
    }
    dial.position += turn.amount();
    if dial.position.rem_euclid(dial.size) == 0 {
        dial.zero_count += 1;
    }
}

fn rotate_crossing(dial: &mut Dial, turn: Turn) {
    let before = dial.position;
    let after = before + turn.amount();

    // Opposite signs before and after: passed through zero on the way.
    if before.signum() * after.signum() < 0 {
        dial.zero_count += 1;
    }

    // Full laps
    dial.zero_count += after.unsigned_abs() / dial.size.unsigned_abs();

    if !turn.is_zero() && after == 0 {
        dial.zero_count += 1;
    }

    dial.position = after.rem_euclid(dial.size);
}

/// Run `turns` on a fresh default dial and return the zero count.
pub fn run(variant: DialVariant, turns: &[Turn]) -> u64 {
    Dial::new().run(variant, turns)
}

/// Run `turns` on a fresh dial built from `settings` and return the final dial.
pub fn run_with_settings(variant: DialVariant, settings: DialSettings, turns: &[Turn]) -> Dial {
    let mut dial = Dial::with_settings(settings);
    dial.run(variant, turns);
    dial
}
