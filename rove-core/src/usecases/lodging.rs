use super::{get_own_post, map_duplicate, prelude::*};

pub fn create_lodging<R: LodgingRepo>(repo: &R, lodging: NewLodging) -> Result<LodgingId> {
    log::debug!("Creating new lodging: {}", lodging.name);
    Ok(repo.create_lodging(&lodging)?)
}

/// Reports a stay at a lodging by one of the account's posts.
///
/// A post has at most one lodging visit.
pub fn add_lodging_visit<R>(
    repo: &R,
    account_id: AccountId,
    visit: NewLodgingVisit,
) -> Result<LodgingVisitId>
where
    R: PostRepo + LodgingRepo,
{
    if !visit.is_valid_rating() {
        return Err(Error::RatingValue);
    }
    get_own_post(repo, account_id, visit.post_id)?;
    repo.get_lodging(visit.lodging_id)?;
    repo.create_lodging_visit(&visit)
        .map_err(|err| map_duplicate(err, Error::LodgingVisitExists))
}

/// Pairs every visit with the post that reports it.
pub fn load_visit_page_posts<R: PostRepo>(
    repo: &R,
    page: Page<LodgingVisit>,
) -> Result<Page<(LodgingVisit, Post)>> {
    page.try_map(|visit| {
        let post = repo.get_post(visit.post_id)?;
        Ok((visit, post))
    })
}
