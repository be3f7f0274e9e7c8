pub mod exercise;
pub mod from_row;
pub mod user;

pub use exercise::{
    CreateExercise, Exercise, ExerciseResponse, LogEntry, LogParams, LogQuery, LogResponse,
    NewExercise,
};
pub use from_row::FromSqliteRow;
pub use user::{CreateUser, User, UserResponse};
