use super::{map_duplicate, prelude::*};

pub fn like_post<R>(repo: &R, account_id: AccountId, post_id: PostId) -> Result<()>
where
    R: PostRepo + LikeRepo,
{
    let post = repo.get_post(post_id)?;
    let like = PostLike {
        account_id,
        post_id: post.id,
    };
    repo.create_post_like(&like)
        .map_err(|err| map_duplicate(err, Error::PostAlreadyLiked))
}

pub fn like_comment<R>(repo: &R, account_id: AccountId, comment_id: CommentId) -> Result<()>
where
    R: CommentRepo + LikeRepo,
{
    let comment = repo.get_comment(comment_id)?;
    let like = CommentLike {
        account_id,
        comment_id: comment.id,
    };
    repo.create_comment_like(&like)
        .map_err(|err| map_duplicate(err, Error::CommentAlreadyLiked))
}
