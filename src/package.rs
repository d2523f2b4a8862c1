use crate::dlog;
use crate::error::{Result, WorkoutError};
use crate::types::{Running, SportsWalking, Swimming, Workout, WorkoutKind};

/// Upper bound on the number of fields in any package.
pub const MAX_FIELDS: usize = 5;

/// Sample packages as the tracker sends them: `(tag, fields)`.
pub const SAMPLE_PACKAGES: &[(&str, &[f64])] = &[
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15000.0, 1.0, 75.0]),
    ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
];

/// Decode one sensor package into a typed workout.
///
/// The tag is checked first, then the field count against [`MAX_FIELDS`].
/// Only the ceiling is checked here; a package with the wrong number of
/// fields for its kind is rejected by the kind's constructor.
pub fn read_package(tag: &str, data: &[f64]) -> Result<Workout> {
    let kind: WorkoutKind = tag.parse()?;
    if data.len() > MAX_FIELDS {
        return Err(WorkoutError::TooManyArguments(data.len()));
    }

    let workout = match kind {
        WorkoutKind::Running => Workout::Running(Running::from_fields(data)?),
        WorkoutKind::SportsWalking => Workout::SportsWalking(SportsWalking::from_fields(data)?),
        WorkoutKind::Swimming => Workout::Swimming(Swimming::from_fields(data)?),
    };

    dlog!("package_read tag={tag} kind={kind} fields={}", data.len());
    Ok(workout)
}

fn expect_fields<const N: usize>(kind: WorkoutKind, data: &[f64]) -> Result<[f64; N]> {
    <[f64; N]>::try_from(data).map_err(|_| WorkoutError::WrongFieldCount {
        kind,
        expected: N,
        got: data.len(),
    })
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn action_count(v: f64) -> Result<u32> {
    if v.fract() != 0.0 || !(0.0..=f64::from(u32::MAX)).contains(&v) {
        return Err(WorkoutError::InvalidActionCount(v));
    }
    Ok(v as u32)
}

fn nonzero(kind: WorkoutKind, field: &'static str, v: f64) -> Result<f64> {
    if v == 0.0 {
        return Err(WorkoutError::ZeroDivisor { kind, field });
    }
    Ok(v)
}

impl Running {
    pub fn from_fields(data: &[f64]) -> Result<Self> {
        let kind = WorkoutKind::Running;
        let [action, duration, weight] = expect_fields::<3>(kind, data)?;
        Ok(Self {
            action: action_count(action)?,
            duration: nonzero(kind, "duration", duration)?,
            weight,
        })
    }
}

impl SportsWalking {
    pub fn from_fields(data: &[f64]) -> Result<Self> {
        let kind = WorkoutKind::SportsWalking;
        let [action, duration, weight, height] = expect_fields::<4>(kind, data)?;
        Ok(Self {
            action: action_count(action)?,
            duration: nonzero(kind, "duration", duration)?,
            weight,
            height: nonzero(kind, "height", height)?,
        })
    }
}

impl Swimming {
    pub fn from_fields(data: &[f64]) -> Result<Self> {
        let kind = WorkoutKind::Swimming;
        let [action, duration, weight, length_pool, count_pool] = expect_fields::<5>(kind, data)?;
        Ok(Self {
            action: action_count(action)?,
            duration: nonzero(kind, "duration", duration)?,
            weight,
            length_pool,
            count_pool,
        })
    }
}
