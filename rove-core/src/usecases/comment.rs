use super::prelude::*;

#[derive(Debug, Clone)]
pub struct CommentDetails {
    pub comment: Comment,
    pub author: String,
    pub likes: u64,
}

pub fn create_comment<R>(
    repo: &R,
    account_id: AccountId,
    post_id: PostId,
    content: String,
) -> Result<CommentId>
where
    R: PostRepo + CommentRepo,
{
    let post = repo.get_post(post_id)?;
    let new_comment = NewComment {
        account_id,
        post_id: post.id,
        content,
    };
    Ok(repo.create_comment(&new_comment)?)
}

pub fn get_own_comment<R: CommentRepo>(
    repo: &R,
    account_id: AccountId,
    comment_id: CommentId,
) -> Result<Comment> {
    let comment = repo.get_comment(comment_id)?;
    if comment.account_id != account_id {
        return Err(Error::Forbidden);
    }
    Ok(comment)
}

pub fn update_comment<R: CommentRepo>(
    repo: &R,
    account_id: AccountId,
    comment_id: CommentId,
    content: String,
) -> Result<Comment> {
    let comment = Comment {
        content,
        ..get_own_comment(repo, account_id, comment_id)?
    };
    repo.update_comment(&comment)?;
    Ok(comment)
}

pub fn delete_comment<R: CommentRepo>(
    repo: &R,
    account_id: AccountId,
    comment_id: CommentId,
) -> Result<Comment> {
    let comment = get_own_comment(repo, account_id, comment_id)?;
    repo.delete_comment(comment.id)?;
    Ok(comment)
}

pub fn load_comment_page_details<R>(repo: &R, page: Page<Comment>) -> Result<Page<CommentDetails>>
where
    R: AccountRepo + LikeRepo,
{
    page.try_map(|comment| {
        let author = repo.get_account(comment.account_id)?.user_name;
        let likes = repo.count_comment_likes(comment.id)?;
        Ok(CommentDetails {
            comment,
            author,
            likes,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, *};

    #[test]
    fn comment_on_existing_post_only() {
        let db = MockDb::default();
        let ana = db.add_account("ana");
        let bob = db.add_account("bob");
        let post = db.add_post(ana, "a.png");
        let id = create_comment(&db, bob, post, "Lovely!".into()).unwrap();
        assert_eq!(db.get_comment(id).unwrap().post_id, post);

        let err = create_comment(&db, bob, PostId::new(999), "?".into()).unwrap_err();
        assert!(matches!(err, Error::Repo(repo::Error::NotFound)));
    }

    #[test]
    fn only_the_owner_may_modify_a_comment() {
        let db = MockDb::default();
        let ana = db.add_account("ana");
        let bob = db.add_account("bob");
        let post = db.add_post(ana, "a.png");
        let id = db.add_comment(bob, post);

        assert!(matches!(
            update_comment(&db, ana, id, "Edited".into()),
            Err(Error::Forbidden)
        ));
        assert!(matches!(delete_comment(&db, ana, id), Err(Error::Forbidden)));

        let updated = update_comment(&db, bob, id, "Edited".into()).unwrap();
        assert_eq!(updated.content, "Edited");
        delete_comment(&db, bob, id).unwrap();
        assert!(db.get_comment(id).is_err());
    }

    #[test]
    fn comment_details_contain_author_and_likes() {
        let db = MockDb::default();
        let ana = db.add_account("ana");
        let post = db.add_post(ana, "a.png");
        let id = db.add_comment(ana, post);
        db.create_comment_like(&CommentLike {
            account_id: ana,
            comment_id: id,
        })
        .unwrap();
        let page = db
            .comments_of_post(post, &PageRequest::new(None, 10))
            .unwrap();
        let details = load_comment_page_details(&db, page).unwrap();
        assert_eq!(details.items.len(), 1);
        assert_eq!(details.items[0].author, "ana");
        assert_eq!(details.items[0].likes, 1);
    }
}
