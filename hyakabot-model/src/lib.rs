mod deser;
mod progression;
mod stats;
mod user;

pub use self::{
    progression::{AnimeEntry, Progression},
    stats::{AggregatedStats, StatusCounts},
    user::{BadgesFormatter, HyakanimeUser, UserLookup},
};
