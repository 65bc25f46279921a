mod repositories;
mod use_cases;

pub use repositories::Repositories;
pub use use_cases::{build_app_state, seed_from_static, Resolvers};
