use super::prelude::*;

use std::cell::{Cell, RefCell};

type RepoResult<T> = std::result::Result<T, repo::Error>;

pub const DEFAULT_PASSWORD: &str = "secret";

#[derive(Default)]
pub struct MockDb {
    pub accounts: RefCell<Vec<Account>>,
    pub posts: RefCell<Vec<Post>>,
    pub comments: RefCell<Vec<Comment>>,
    pub post_likes: RefCell<Vec<PostLike>>,
    pub comment_likes: RefCell<Vec<CommentLike>>,
    pub tags: RefCell<Vec<Tag>>,
    pub post_tags: RefCell<Vec<PostTag>>,
    pub lodgings: RefCell<Vec<Lodging>>,
    pub visits: RefCell<Vec<LodgingVisit>>,
    pub folders: RefCell<Vec<DestinationFolder>>,
    pub saved_destinations: RefCell<Vec<SavedDestination>>,
    pub todos: RefCell<Vec<ToDo>>,
    last_id: Cell<i64>,
}

impl MockDb {
    fn next_id(&self) -> i64 {
        let id = self.last_id.get() + 1;
        self.last_id.set(id);
        id
    }

    pub fn add_account(&self, user_name: &str) -> AccountId {
        self.create_account(&NewAccount {
            user_name: user_name.into(),
            location: "Berlin".into(),
            first_name: "First".into(),
            last_name: "Last".into(),
            password: DEFAULT_PASSWORD.parse().unwrap(),
        })
        .unwrap()
    }

    pub fn add_post(&self, account_id: AccountId, image: &str) -> PostId {
        self.create_post(&NewPost {
            account_id,
            location: "Somewhere".into(),
            title: "Trip".into(),
            content: "It was nice".into(),
            image: image.into(),
        })
        .unwrap()
    }

    pub fn add_comment(&self, account_id: AccountId, post_id: PostId) -> CommentId {
        self.create_comment(&NewComment {
            account_id,
            post_id,
            content: "Nice".into(),
        })
        .unwrap()
    }

    pub fn add_lodging(&self, name: &str) -> LodgingId {
        self.create_lodging(&NewLodging {
            name: name.into(),
            location: "Somewhere".into(),
        })
        .unwrap()
    }
}

fn get<T: Clone>(items: &RefCell<Vec<T>>, pred: impl Fn(&T) -> bool) -> RepoResult<T> {
    items
        .borrow()
        .iter()
        .find(|x| pred(x))
        .cloned()
        .ok_or(repo::Error::NotFound)
}

fn replace<T>(items: &RefCell<Vec<T>>, item: T, pred: impl Fn(&T) -> bool) -> RepoResult<()> {
    let mut items = items.borrow_mut();
    let pos = items.iter().position(pred).ok_or(repo::Error::NotFound)?;
    items[pos] = item;
    Ok(())
}

fn remove<T>(items: &RefCell<Vec<T>>, pred: impl Fn(&T) -> bool) -> RepoResult<()> {
    let mut items = items.borrow_mut();
    let len = items.len();
    items.retain(|x| !pred(x));
    if items.len() == len {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn insert_unique<T: PartialEq>(items: &RefCell<Vec<T>>, item: T) -> RepoResult<()> {
    let mut items = items.borrow_mut();
    if items.contains(&item) {
        return Err(repo::Error::AlreadyExists);
    }
    items.push(item);
    Ok(())
}

fn paginate<T: Clone>(items: Vec<T>, request: &PageRequest) -> Page<T> {
    let total = items.len() as u64;
    let page_items = items
        .into_iter()
        .skip(usize::try_from(request.offset()).unwrap_or(usize::MAX))
        .take(usize::try_from(request.limit()).unwrap_or(usize::MAX))
        .collect();
    Page::new(*request, page_items, total)
}

fn newest_first<T: Clone>(
    items: &RefCell<Vec<T>>,
    pred: impl Fn(&T) -> bool,
    request: &PageRequest,
) -> Page<T> {
    let matching = items.borrow().iter().rev().filter(|x| pred(x)).cloned().collect();
    paginate(matching, request)
}

fn oldest_first<T: Clone>(
    items: &RefCell<Vec<T>>,
    pred: impl Fn(&T) -> bool,
    request: &PageRequest,
) -> Page<T> {
    let matching = items.borrow().iter().filter(|x| pred(x)).cloned().collect();
    paginate(matching, request)
}

impl AccountRepo for MockDb {
    fn create_account(&self, account: &NewAccount) -> RepoResult<AccountId> {
        if self
            .accounts
            .borrow()
            .iter()
            .any(|a| a.user_name == account.user_name)
        {
            return Err(repo::Error::AlreadyExists);
        }
        let id = AccountId::new(self.next_id());
        let NewAccount {
            user_name,
            location,
            first_name,
            last_name,
            password,
        } = account.clone();
        self.accounts.borrow_mut().push(Account {
            id,
            user_name,
            location,
            first_name,
            last_name,
            password,
        });
        Ok(id)
    }

    fn update_account(&self, account: &Account) -> RepoResult<()> {
        if self
            .accounts
            .borrow()
            .iter()
            .any(|a| a.id != account.id && a.user_name == account.user_name)
        {
            return Err(repo::Error::AlreadyExists);
        }
        replace(&self.accounts, account.clone(), |a| a.id == account.id)
    }

    fn delete_account(&self, id: AccountId) -> RepoResult<()> {
        remove(&self.accounts, |a| a.id == id)?;
        // cascade
        self.posts.borrow_mut().retain(|p| p.account_id != id);
        self.comments.borrow_mut().retain(|c| c.account_id != id);
        self.post_likes.borrow_mut().retain(|l| l.account_id != id);
        self.comment_likes.borrow_mut().retain(|l| l.account_id != id);
        self.folders.borrow_mut().retain(|f| f.account_id != id);
        self.todos.borrow_mut().retain(|t| t.account_id != id);
        Ok(())
    }

    fn get_account(&self, id: AccountId) -> RepoResult<Account> {
        get(&self.accounts, |a| a.id == id)
    }

    fn try_get_account_by_user_name(&self, user_name: &str) -> RepoResult<Option<Account>> {
        Ok(get(&self.accounts, |a| a.user_name == user_name).ok())
    }
}

impl PostRepo for MockDb {
    fn create_post(&self, post: &NewPost) -> RepoResult<PostId> {
        let id = PostId::new(self.next_id());
        let NewPost {
            account_id,
            location,
            title,
            content,
            image,
        } = post.clone();
        self.posts.borrow_mut().push(Post {
            id,
            account_id,
            location,
            title,
            content,
            image,
        });
        Ok(id)
    }

    fn update_post(&self, post: &Post) -> RepoResult<()> {
        replace(&self.posts, post.clone(), |p| p.id == post.id)
    }

    fn delete_post(&self, id: PostId) -> RepoResult<()> {
        remove(&self.posts, |p| p.id == id)
    }

    fn get_post(&self, id: PostId) -> RepoResult<Post> {
        get(&self.posts, |p| p.id == id)
    }

    fn recent_posts(&self, page: &PageRequest) -> RepoResult<Page<Post>> {
        Ok(newest_first(&self.posts, |_| true, page))
    }

    fn posts_of_account(&self, account_id: AccountId, page: &PageRequest) -> RepoResult<Page<Post>> {
        Ok(newest_first(&self.posts, |p| p.account_id == account_id, page))
    }

    fn posts_with_tag(&self, tag_id: TagId, page: &PageRequest) -> RepoResult<Page<Post>> {
        let post_tags = self.post_tags.borrow();
        Ok(newest_first(
            &self.posts,
            |p| post_tags.contains(&PostTag { post_id: p.id, tag_id }),
            page,
        ))
    }

    fn posts_in_folder(&self, folder_id: FolderId, page: &PageRequest) -> RepoResult<Page<Post>> {
        let saved = self.saved_destinations.borrow();
        Ok(newest_first(
            &self.posts,
            |p| {
                saved.contains(&SavedDestination {
                    folder_id,
                    post_id: p.id,
                })
            },
            page,
        ))
    }

    fn image_names_of_account(&self, account_id: AccountId) -> RepoResult<Vec<String>> {
        Ok(self
            .posts
            .borrow()
            .iter()
            .filter(|p| p.account_id == account_id)
            .map(|p| p.image.clone())
            .collect())
    }
}

impl CommentRepo for MockDb {
    fn create_comment(&self, comment: &NewComment) -> RepoResult<CommentId> {
        let id = CommentId::new(self.next_id());
        let NewComment {
            account_id,
            post_id,
            content,
        } = comment.clone();
        self.comments.borrow_mut().push(Comment {
            id,
            account_id,
            post_id,
            content,
        });
        Ok(id)
    }

    fn update_comment(&self, comment: &Comment) -> RepoResult<()> {
        replace(&self.comments, comment.clone(), |c| c.id == comment.id)
    }

    fn delete_comment(&self, id: CommentId) -> RepoResult<()> {
        remove(&self.comments, |c| c.id == id)
    }

    fn get_comment(&self, id: CommentId) -> RepoResult<Comment> {
        get(&self.comments, |c| c.id == id)
    }

    fn comments_of_post(&self, post_id: PostId, page: &PageRequest) -> RepoResult<Page<Comment>> {
        Ok(oldest_first(&self.comments, |c| c.post_id == post_id, page))
    }

    fn comments_of_account(
        &self,
        account_id: AccountId,
        page: &PageRequest,
    ) -> RepoResult<Page<Comment>> {
        Ok(oldest_first(
            &self.comments,
            |c| c.account_id == account_id,
            page,
        ))
    }
}

impl LikeRepo for MockDb {
    fn create_post_like(&self, like: &PostLike) -> RepoResult<()> {
        insert_unique(&self.post_likes, *like)
    }

    fn create_comment_like(&self, like: &CommentLike) -> RepoResult<()> {
        insert_unique(&self.comment_likes, *like)
    }

    fn count_post_likes(&self, post_id: PostId) -> RepoResult<u64> {
        Ok(self
            .post_likes
            .borrow()
            .iter()
            .filter(|l| l.post_id == post_id)
            .count() as u64)
    }

    fn count_comment_likes(&self, comment_id: CommentId) -> RepoResult<u64> {
        Ok(self
            .comment_likes
            .borrow()
            .iter()
            .filter(|l| l.comment_id == comment_id)
            .count() as u64)
    }
}

impl TagRepo for MockDb {
    fn create_tag(&self, tag: &NewTag) -> RepoResult<TagId> {
        if self.tags.borrow().iter().any(|t| t.name == tag.name) {
            return Err(repo::Error::AlreadyExists);
        }
        let id = TagId::new(self.next_id());
        let NewTag { name, description } = tag.clone();
        self.tags.borrow_mut().push(Tag {
            id,
            name,
            description,
        });
        Ok(id)
    }

    fn get_tag(&self, id: TagId) -> RepoResult<Tag> {
        get(&self.tags, |t| t.id == id)
    }

    fn all_tags(&self, page: &PageRequest) -> RepoResult<Page<Tag>> {
        Ok(oldest_first(&self.tags, |_| true, page))
    }

    fn create_post_tag(&self, post_tag: &PostTag) -> RepoResult<()> {
        insert_unique(&self.post_tags, *post_tag)
    }

    fn tags_of_post(&self, post_id: PostId) -> RepoResult<Vec<Tag>> {
        let post_tags = self.post_tags.borrow();
        Ok(self
            .tags
            .borrow()
            .iter()
            .filter(|t| post_tags.contains(&PostTag { post_id, tag_id: t.id }))
            .cloned()
            .collect())
    }
}

impl LodgingRepo for MockDb {
    fn create_lodging(&self, lodging: &NewLodging) -> RepoResult<LodgingId> {
        let id = LodgingId::new(self.next_id());
        let NewLodging { name, location } = lodging.clone();
        self.lodgings.borrow_mut().push(Lodging { id, name, location });
        Ok(id)
    }

    fn get_lodging(&self, id: LodgingId) -> RepoResult<Lodging> {
        get(&self.lodgings, |l| l.id == id)
    }

    fn all_lodgings(&self, page: &PageRequest) -> RepoResult<Page<Lodging>> {
        let mut lodgings = self.lodgings.borrow().clone();
        lodgings.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(paginate(lodgings, page))
    }

    fn create_lodging_visit(&self, visit: &NewLodgingVisit) -> RepoResult<LodgingVisitId> {
        if self
            .visits
            .borrow()
            .iter()
            .any(|v| v.post_id == visit.post_id)
        {
            return Err(repo::Error::AlreadyExists);
        }
        let id = LodgingVisitId::new(self.next_id());
        let NewLodgingVisit {
            post_id,
            lodging_id,
            cost,
            rating,
            comment,
        } = visit.clone();
        self.visits.borrow_mut().push(LodgingVisit {
            id,
            post_id,
            lodging_id,
            cost,
            rating,
            comment,
        });
        Ok(id)
    }

    fn try_get_visit_of_post(&self, post_id: PostId) -> RepoResult<Option<LodgingVisit>> {
        Ok(get(&self.visits, |v| v.post_id == post_id).ok())
    }

    fn visits_of_lodging(
        &self,
        lodging_id: LodgingId,
        page: &PageRequest,
    ) -> RepoResult<Page<LodgingVisit>> {
        Ok(newest_first(
            &self.visits,
            |v| v.lodging_id == lodging_id,
            page,
        ))
    }
}

impl FolderRepo for MockDb {
    fn create_folder(&self, folder: &NewDestinationFolder) -> RepoResult<FolderId> {
        let id = FolderId::new(self.next_id());
        let NewDestinationFolder { account_id, name } = folder.clone();
        self.folders.borrow_mut().push(DestinationFolder {
            id,
            account_id,
            name,
        });
        Ok(id)
    }

    fn update_folder(&self, folder: &DestinationFolder) -> RepoResult<()> {
        replace(&self.folders, folder.clone(), |f| f.id == folder.id)
    }

    fn delete_folder(&self, id: FolderId) -> RepoResult<()> {
        remove(&self.folders, |f| f.id == id)?;
        self.saved_destinations
            .borrow_mut()
            .retain(|s| s.folder_id != id);
        Ok(())
    }

    fn get_folder(&self, id: FolderId) -> RepoResult<DestinationFolder> {
        get(&self.folders, |f| f.id == id)
    }

    fn folders_of_account(&self, account_id: AccountId) -> RepoResult<Vec<DestinationFolder>> {
        Ok(self
            .folders
            .borrow()
            .iter()
            .filter(|f| f.account_id == account_id)
            .cloned()
            .collect())
    }

    fn create_saved_destination(&self, saved: &SavedDestination) -> RepoResult<()> {
        insert_unique(&self.saved_destinations, *saved)
    }
}

impl ToDoRepo for MockDb {
    fn create_todo(&self, todo: &NewToDo) -> RepoResult<ToDoId> {
        let id = ToDoId::new(self.next_id());
        let NewToDo {
            account_id,
            name,
            description,
        } = todo.clone();
        self.todos.borrow_mut().push(ToDo {
            id,
            account_id,
            name,
            description,
        });
        Ok(id)
    }

    fn update_todo(&self, todo: &ToDo) -> RepoResult<()> {
        replace(&self.todos, todo.clone(), |t| t.id == todo.id)
    }

    fn delete_todo(&self, id: ToDoId) -> RepoResult<()> {
        remove(&self.todos, |t| t.id == id)
    }

    fn get_todo(&self, id: ToDoId) -> RepoResult<ToDo> {
        get(&self.todos, |t| t.id == id)
    }

    fn todos_of_account(&self, account_id: AccountId, page: &PageRequest) -> RepoResult<Page<ToDo>> {
        Ok(oldest_first(&self.todos, |t| t.account_id == account_id, page))
    }
}
