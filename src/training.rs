use crate::types::{Running, SportsWalking, Swimming, TrainingReport, Workout, WorkoutKind};

pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;

/// Distance, speed and calorie formulas shared by every workout kind.
///
/// Implementors override `mean_speed` when speed is not step based.
pub trait Training {
    const NAME: &'static str;
    /// Metres covered per step or stroke.
    const LEN_STEP: f64 = 0.65;

    fn action(&self) -> u32;
    fn duration(&self) -> f64;

    /// Distance in km.
    fn distance(&self) -> f64 {
        f64::from(self.action()) * Self::LEN_STEP / M_IN_KM
    }

    /// Mean speed in km/h over the whole workout.
    fn mean_speed(&self) -> f64 {
        self.distance() / self.duration()
    }

    /// Spent calories in kcal.
    fn calories(&self) -> f64;

    fn show_training_info(&self) -> TrainingReport {
        TrainingReport {
            training_type: Self::NAME,
            duration: self.duration(),
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.calories(),
        }
    }
}

impl Running {
    const CALORIES_SPEED_MULTIPLIER: f64 = 18.0;
    const CALORIES_SPEED_SHIFT: f64 = 20.0;
}

impl Training for Running {
    const NAME: &'static str = WorkoutKind::Running.name();

    fn action(&self) -> u32 {
        self.action
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn calories(&self) -> f64 {
        (Self::CALORIES_SPEED_MULTIPLIER * self.mean_speed() - Self::CALORIES_SPEED_SHIFT)
            * self.weight
            / M_IN_KM
            * self.duration
            * MIN_IN_H
    }
}

impl SportsWalking {
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
}

impl Training for SportsWalking {
    const NAME: &'static str = WorkoutKind::SportsWalking.name();

    fn action(&self) -> u32 {
        self.action
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    // speed^2 is floor-divided by height, not divided.
    fn calories(&self) -> f64 {
        let speed = self.mean_speed();
        (Self::CALORIES_WEIGHT_MULTIPLIER * self.weight
            + floor_div(speed.powi(2), self.height)
                * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER
                * self.weight)
            * self.duration
            * MIN_IN_H
    }
}

impl Swimming {
    const CALORIES_SPEED_SHIFT: f64 = 1.1;
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;
}

impl Training for Swimming {
    const NAME: &'static str = WorkoutKind::Swimming.name();
    const LEN_STEP: f64 = 1.38;

    fn action(&self) -> u32 {
        self.action
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn mean_speed(&self) -> f64 {
        self.length_pool * self.count_pool / M_IN_KM / self.duration
    }

    fn calories(&self) -> f64 {
        (self.mean_speed() + Self::CALORIES_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.weight
    }
}

impl Workout {
    pub fn distance(&self) -> f64 {
        match self {
            Self::Running(w) => w.distance(),
            Self::SportsWalking(w) => w.distance(),
            Self::Swimming(w) => w.distance(),
        }
    }

    pub fn mean_speed(&self) -> f64 {
        match self {
            Self::Running(w) => w.mean_speed(),
            Self::SportsWalking(w) => w.mean_speed(),
            Self::Swimming(w) => w.mean_speed(),
        }
    }

    pub fn calories(&self) -> f64 {
        match self {
            Self::Running(w) => w.calories(),
            Self::SportsWalking(w) => w.calories(),
            Self::Swimming(w) => w.calories(),
        }
    }

    pub fn show_training_info(&self) -> TrainingReport {
        match self {
            Self::Running(w) => w.show_training_info(),
            Self::SportsWalking(w) => w.show_training_info(),
            Self::Swimming(w) => w.show_training_info(),
        }
    }
}

/// Floor division of two floats: the quotient rounded toward negative
/// infinity, computed from the remainder the same way integer floor
/// division is, so `a - floor_div(a, b) * b` keeps the sign of `b`.
pub fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && (b < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }
    if div == 0.0 {
        return 0.0_f64.copysign(a / b);
    }
    let mut floored = div.floor();
    if div - floored > 0.5 {
        floored += 1.0;
    }
    floored
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    const RUN: Running = Running {
        action: 15_000,
        duration: 1.0,
        weight: 75.0,
    };

    const WALK: SportsWalking = SportsWalking {
        action: 9_000,
        duration: 1.0,
        weight: 75.0,
        height: 180.0,
    };

    const SWIM: Swimming = Swimming {
        action: 720,
        duration: 1.0,
        weight: 80.0,
        length_pool: 25.0,
        count_pool: 40.0,
    };

    #[test]
    fn running_metrics() {
        assert!(close(RUN.distance(), 9.75));
        assert!(close(RUN.mean_speed(), 9.75));
        assert!(close(RUN.calories(), 699.75));
    }

    #[test]
    fn walking_metrics_use_floor_division() {
        assert!(close(WALK.distance(), 5.85));
        assert!(close(WALK.mean_speed(), 5.85));
        // 5.85^2 / 180 < 1, so the height term vanishes.
        assert!(close(WALK.calories(), 157.5));

        let speed = WALK.mean_speed();
        let plain = (0.035 * 75.0 + speed.powi(2) / 180.0 * 0.029 * 75.0) * 60.0;
        assert!(!close(WALK.calories(), plain));
    }

    #[test]
    fn walking_fast_enough_to_count_height_term() {
        let w = SportsWalking {
            action: 30_000,
            duration: 1.0,
            weight: 70.0,
            height: 170.0,
        };
        // 19.5^2 = 380.25, floor(380.25 / 170) = 2
        let expected = (0.035 * 70.0 + 2.0 * 0.029 * 70.0) * 60.0;
        assert!(close(w.calories(), expected));
    }

    #[test]
    fn swimming_metrics() {
        assert!(close(SWIM.distance(), 0.9936));
        assert!(close(SWIM.mean_speed(), 1.0));
        assert!(close(SWIM.calories(), 336.0));
    }

    #[test]
    fn swimming_speed_ignores_strokes() {
        let more_strokes = Swimming {
            action: 5_000,
            ..SWIM
        };
        assert_eq!(more_strokes.mean_speed(), SWIM.mean_speed());
        assert!(more_strokes.distance() > SWIM.distance());
    }

    #[test]
    fn formulas_are_repeatable() {
        for w in [
            Workout::Running(RUN),
            Workout::SportsWalking(WALK),
            Workout::Swimming(SWIM),
        ] {
            assert_eq!(w.distance().to_bits(), w.distance().to_bits());
            assert_eq!(w.mean_speed().to_bits(), w.mean_speed().to_bits());
            assert_eq!(w.calories().to_bits(), w.calories().to_bits());
            assert_eq!(w.show_training_info(), w.show_training_info());
        }
    }

    #[test]
    fn workout_forwards_to_variant() {
        let w = Workout::SportsWalking(WALK);
        assert_eq!(w.distance(), WALK.distance());
        assert_eq!(w.calories(), WALK.calories());
        assert_eq!(w.show_training_info().training_type, "SportsWalking");
    }

    #[test]
    fn floor_div_rounds_toward_negative_infinity() {
        assert_eq!(floor_div(7.5, 2.0), 3.0);
        assert_eq!(floor_div(34.2225, 180.0), 0.0);
        assert_eq!(floor_div(-7.5, 2.0), -4.0);
        assert_eq!(floor_div(7.5, -2.0), -4.0);
        assert_eq!(floor_div(6.0, 3.0), 2.0);
        assert!(floor_div(-0.5, 2.0) == -1.0);
    }
}
