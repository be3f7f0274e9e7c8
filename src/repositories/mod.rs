pub mod exercise_repo;
pub mod user_repo;

pub use exercise_repo::ExerciseRepository;
pub use user_repo::UserRepository;
