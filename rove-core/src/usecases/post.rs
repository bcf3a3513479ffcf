use super::prelude::*;

#[rustfmt::skip]
#[derive(Debug, Clone)]
pub struct PostContent {
    pub location : String,
    pub title    : String,
    pub content  : String,
}

/// A post together with everything that is displayed along with it.
#[derive(Debug, Clone)]
pub struct PostDetails {
    pub post: Post,
    pub author: String,
    pub likes: u64,
    pub tags: Vec<Tag>,
    pub visit: Option<(LodgingVisit, Lodging)>,
}

pub fn create_post<R: PostRepo>(
    repo: &R,
    account_id: AccountId,
    content: PostContent,
    image: String,
) -> Result<PostId> {
    let PostContent {
        location,
        title,
        content,
    } = content;
    let new_post = NewPost {
        account_id,
        location,
        title,
        content,
        image,
    };
    log::debug!("Creating new post: {}", new_post.title);
    Ok(repo.create_post(&new_post)?)
}

/// Loads a post that is owned by the given account.
pub fn get_own_post<R: PostRepo>(repo: &R, account_id: AccountId, post_id: PostId) -> Result<Post> {
    let post = repo.get_post(post_id)?;
    if post.account_id != account_id {
        return Err(Error::Forbidden);
    }
    Ok(post)
}

/// Updates the post and returns the name of the replaced image, if any.
///
/// Without a new image the existing image reference is kept.
pub fn update_post<R: PostRepo>(
    repo: &R,
    account_id: AccountId,
    post_id: PostId,
    content: PostContent,
    new_image: Option<String>,
) -> Result<Option<String>> {
    let old = get_own_post(repo, account_id, post_id)?;
    let PostContent {
        location,
        title,
        content,
    } = content;
    let replaced_image = new_image.as_ref().map(|_| old.image.clone());
    let post = Post {
        location,
        title,
        content,
        image: new_image.unwrap_or(old.image),
        ..old
    };
    repo.update_post(&post)?;
    Ok(replaced_image)
}

/// Deletes the post and returns the name of its image.
pub fn delete_post<R: PostRepo>(repo: &R, account_id: AccountId, post_id: PostId) -> Result<String> {
    let post = get_own_post(repo, account_id, post_id)?;
    repo.delete_post(post.id)?;
    log::debug!("Deleted post {post_id}");
    Ok(post.image)
}

pub fn load_post_details<R>(repo: &R, post: Post) -> Result<PostDetails>
where
    R: AccountRepo + LikeRepo + TagRepo + LodgingRepo,
{
    let author = repo.get_account(post.account_id)?.user_name;
    let likes = repo.count_post_likes(post.id)?;
    let tags = repo.tags_of_post(post.id)?;
    let visit = match repo.try_get_visit_of_post(post.id)? {
        Some(visit) => {
            let lodging = repo.get_lodging(visit.lodging_id)?;
            Some((visit, lodging))
        }
        None => None,
    };
    Ok(PostDetails {
        post,
        author,
        likes,
        tags,
        visit,
    })
}

pub fn load_post_page_details<R>(repo: &R, page: Page<Post>) -> Result<Page<PostDetails>>
where
    R: AccountRepo + LikeRepo + TagRepo + LodgingRepo,
{
    page.try_map(|post| load_post_details(repo, post))
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, *};

    fn content(title: &str) -> PostContent {
        PostContent {
            location: "Kyoto".into(),
            title: title.into(),
            content: "Temples and tea".into(),
        }
    }

    #[test]
    fn create_and_load_post() {
        let db = MockDb::default();
        let ana = db.add_account("ana");
        let id = create_post(&db, ana, content("Japan"), "x.png".into()).unwrap();
        let post = db.get_post(id).unwrap();
        assert_eq!(post.account_id, ana);
        assert_eq!(post.image, "x.png");
        let details = load_post_details(&db, post).unwrap();
        assert_eq!(details.author, "ana");
        assert_eq!(details.likes, 0);
        assert!(details.tags.is_empty());
        assert!(details.visit.is_none());
    }

    #[test]
    fn update_with_new_image_returns_the_replaced_one() {
        let db = MockDb::default();
        let ana = db.add_account("ana");
        let id = db.add_post(ana, "old.png");
        let replaced = update_post(&db, ana, id, content("New"), Some("new.jpg".into())).unwrap();
        assert_eq!(replaced.as_deref(), Some("old.png"));
        let post = db.get_post(id).unwrap();
        assert_eq!(post.image, "new.jpg");
        assert_eq!(post.title, "New");
    }

    #[test]
    fn update_without_image_keeps_the_reference() {
        let db = MockDb::default();
        let ana = db.add_account("ana");
        let id = db.add_post(ana, "old.png");
        let replaced = update_post(&db, ana, id, content("New"), None).unwrap();
        assert!(replaced.is_none());
        assert_eq!(db.get_post(id).unwrap().image, "old.png");
    }

    #[test]
    fn only_the_owner_may_modify_a_post() {
        let db = MockDb::default();
        let ana = db.add_account("ana");
        let bob = db.add_account("bob");
        let id = db.add_post(ana, "a.png");
        let before = db.get_post(id).unwrap();

        let err = update_post(&db, bob, id, content("Hacked"), Some("b.png".into())).unwrap_err();
        assert!(matches!(err, Error::Forbidden));
        let err = delete_post(&db, bob, id).unwrap_err();
        assert!(matches!(err, Error::Forbidden));

        assert_eq!(db.get_post(id).unwrap(), before);
    }

    #[test]
    fn delete_own_post() {
        let db = MockDb::default();
        let ana = db.add_account("ana");
        let id = db.add_post(ana, "a.png");
        assert_eq!(delete_post(&db, ana, id).unwrap(), "a.png");
        assert!(matches!(db.get_post(id), Err(repo::Error::NotFound)));
        assert!(matches!(
            delete_post(&db, ana, id),
            Err(Error::Repo(repo::Error::NotFound))
        ));
    }
}
