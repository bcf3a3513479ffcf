use super::{get_own_post, map_duplicate, prelude::*};

pub fn create_tag<R: TagRepo>(repo: &R, tag: NewTag) -> Result<TagId> {
    log::debug!("Creating new tag: {}", tag.name);
    repo.create_tag(&tag)
        .map_err(|err| map_duplicate(err, Error::TagNameTaken))
}

/// Attaches a tag to a post of the given account.
pub fn attach_tag_to_post<R>(
    repo: &R,
    account_id: AccountId,
    post_id: PostId,
    tag_id: TagId,
) -> Result<()>
where
    R: PostRepo + TagRepo,
{
    let post = get_own_post(repo, account_id, post_id)?;
    let tag = repo.get_tag(tag_id)?;
    let post_tag = PostTag {
        post_id: post.id,
        tag_id: tag.id,
    };
    repo.create_post_tag(&post_tag)
        .map_err(|err| map_duplicate(err, Error::TagAlreadyAttached))
}
