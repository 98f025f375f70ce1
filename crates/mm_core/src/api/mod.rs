pub mod json_api;

pub use json_api::{
    generate_batch_json, generate_fair_pools_json, recommend_opponents_json, suggest_picks_json,
    BatchRequest, BatchResponse, PoolsRequest, PoolsResponse, RangeParam, RecommendRequest,
    RecommendResponse, SuggestRequest, SuggestResponse,
};
