use chrono::{DateTime, Duration, Utc};

/// Simulated time in days. One real second at speed 1 is one simulated day.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SimulationClock {
    simulated_days: f64,
}

impl SimulationClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(simulated_days: f64) -> Self {
        Self { simulated_days }
    }

    pub fn simulated_days(&self) -> f64 {
        self.simulated_days
    }

    /// Advance by one frame and return the simulated days that elapsed.
    /// A zero multiplier pauses; a negative one runs time backwards.
    pub fn advance(&mut self, frame_delta_seconds: f64, speed_multiplier: f64) -> f64 {
        let delta = frame_delta_seconds * speed_multiplier;
        self.simulated_days += delta;
        delta
    }

    /// Calendar date reached after `simulated_days` starting from `epoch`.
    pub fn date_from(&self, epoch: DateTime<Utc>) -> DateTime<Utc> {
        let ms = (self.simulated_days * 86_400_000.0).clamp(-1e15, 1e15) as i64;
        epoch + Duration::milliseconds(ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn advances_by_seconds_times_speed() {
        let mut c = SimulationClock::new();
        assert_eq!(c.advance(0.5, 10.0), 5.0);
        assert_eq!(c.simulated_days(), 5.0);
    }

    #[test]
    fn zero_speed_pauses() {
        let mut c = SimulationClock::starting_at(12.25);
        for _ in 0..1000 {
            c.advance(0.016, 0.0);
        }
        assert_eq!(c.simulated_days(), 12.25);
    }

    #[test]
    fn negative_speed_rewinds() {
        let mut c = SimulationClock::starting_at(10.0);
        c.advance(1.0, -4.0);
        assert_eq!(c.simulated_days(), 6.0);
    }

    #[test]
    fn date_follows_simulated_days() {
        let epoch = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        let c = SimulationClock::starting_at(1.5);
        assert_eq!(c.date_from(epoch), Utc.with_ymd_and_hms(2000, 1, 3, 0, 0, 0).unwrap());
    }
}
