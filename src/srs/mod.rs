pub mod scheduler;

pub use scheduler::{
  apply_result, apply_session, due_pool, transition, ReviewOutcome, ReviewState,
};
