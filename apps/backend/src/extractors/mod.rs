pub mod current_scout;
pub mod match_id;
pub mod validated_json;

pub use current_scout::CurrentScout;
pub use match_id::MatchId;
pub use validated_json::ValidatedJson;
