mod store;
mod types;

pub use store::{update, HistoryStore, JsonFileStore};
pub use types::{
    BmiRecord, Day, ExerciseEntry, Goal, GoalKind, Intensity, NapfaRecord, ScheduleSlot,
    SleepRecord, UserRecord,
};
