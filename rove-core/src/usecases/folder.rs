use super::{map_duplicate, prelude::*};

pub fn create_folder<R: FolderRepo>(repo: &R, account_id: AccountId, name: String) -> Result<FolderId> {
    let folder = NewDestinationFolder { account_id, name };
    Ok(repo.create_folder(&folder)?)
}

pub fn get_own_folder<R: FolderRepo>(
    repo: &R,
    account_id: AccountId,
    folder_id: FolderId,
) -> Result<DestinationFolder> {
    let folder = repo.get_folder(folder_id)?;
    if folder.account_id != account_id {
        return Err(Error::Forbidden);
    }
    Ok(folder)
}

pub fn rename_folder<R: FolderRepo>(
    repo: &R,
    account_id: AccountId,
    folder_id: FolderId,
    name: String,
) -> Result<()> {
    let folder = DestinationFolder {
        name,
        ..get_own_folder(repo, account_id, folder_id)?
    };
    Ok(repo.update_folder(&folder)?)
}

/// Deletes the folder, the saved posts themselves are kept.
pub fn delete_folder<R: FolderRepo>(
    repo: &R,
    account_id: AccountId,
    folder_id: FolderId,
) -> Result<()> {
    let folder = get_own_folder(repo, account_id, folder_id)?;
    Ok(repo.delete_folder(folder.id)?)
}

/// Saves any post into one of the account's folders.
pub fn save_destination<R>(
    repo: &R,
    account_id: AccountId,
    folder_id: FolderId,
    post_id: PostId,
) -> Result<()>
where
    R: FolderRepo + PostRepo,
{
    let folder = get_own_folder(repo, account_id, folder_id)?;
    let post = repo.get_post(post_id)?;
    let saved = SavedDestination {
        folder_id: folder.id,
        post_id: post.id,
    };
    repo.create_saved_destination(&saved)
        .map_err(|err| map_duplicate(err, Error::DestinationAlreadySaved))
}
