use crate::id::{LodgingId, LodgingVisitId, PostId};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lodging {
    pub id       : LodgingId,
    pub name     : String,
    pub location : String,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLodging {
    pub name     : String,
    pub location : String,
}

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// A stay at a lodging, reported by exactly one post.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LodgingVisit {
    pub id         : LodgingVisitId,
    pub post_id    : PostId,
    pub lodging_id : LodgingId,
    pub cost       : u32,
    pub rating     : u8,
    pub comment    : String,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLodgingVisit {
    pub post_id    : PostId,
    pub lodging_id : LodgingId,
    pub cost       : u32,
    pub rating     : u8,
    pub comment    : String,
}

impl NewLodgingVisit {
    pub fn is_valid_rating(&self) -> bool {
        (MIN_RATING..=MAX_RATING).contains(&self.rating)
    }
}
